//! # DFI Economics - Emission Schedule & Total Supply
//!
//! Block subsidy curve and circulating supply calculator for the DFI chain.
//!
//! ## Key Features
//!
//! - **Flat pre-fork reward**: 200 DFI per block below the Eunos fork
//! - **Geometric reductions**: every 32,690 blocks the reward shrinks by 1.658%
//! - **Zero tail**: once a reduction would remove less than one base unit the
//!   reward drops to zero and stays there
//! - **Exact integer arithmetic**: every reduction step is floored, so the
//!   trajectory matches the node bit for bit
//!
//! ## Supply Composition
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DFI SUPPLY AT HEIGHT H                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  3 genesis masternodes:     3 × 1,000,010 DFI                           │
//! │  Initial distribution:      587,980,000 DFI                             │
//! │  Foundation burn:          −268,592,834.97826675 DFI                    │
//! │  Block subsidies:           Σ subsidy(h) for h in [0, H)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Emission Schedule
//!
//! | Epoch | Heights | Block Reward |
//! |-------|---------|--------------|
//! | pre-fork | 0 - 893,999 | 200 DFI |
//! | 0 | 894,000 - 926,689 | 405.04 DFI |
//! | 1 | 926,690 - 959,379 | 398.3244368 DFI |
//! | 2 | 959,380 - 992,069 | 391.72021764 DFI |
//! | ... | ... | (−1.658% per epoch, floored) |
//! | 1252+ | 41,821,880 - | 0 |

pub mod amount;
pub mod emission;
pub mod error;
pub mod supply;

// Re-exports
pub use amount::{format_amount, parse_height};
pub use emission::{naive_subsidy, reduce, EmissionSchedule, EpochInfo, ReductionCache};
pub use error::{EconomicsError, Result};

/// Amount in base units (1 DFI = [`COIN`] base units)
pub type Amount = u128;

/// DFI economic constants
pub mod constants {
    use super::Amount;

    /// Token symbol
    pub const SYMBOL: &str = "DFI";

    /// Decimal places of the display unit
    pub const DECIMALS: usize = 8;

    /// One DFI in base units
    pub const COIN: Amount = 100_000_000;

    /// Height at which the reducing subsidy curve takes over
    pub const EUNOS_FORK_HEIGHT: u64 = 894_000;

    /// Blocks per reduction epoch
    pub const REDUCTION_INTERVAL: u64 = 32_690;

    /// Reduction applied per epoch, over [`REDUCTION_DENOMINATOR`] (1.658%)
    pub const REDUCTION_PERMYRIAD: Amount = 1_658;

    /// Denominator of [`REDUCTION_PERMYRIAD`]
    pub const REDUCTION_DENOMINATOR: Amount = 100_000;

    /// Block reward below the fork: 200 DFI
    pub const PRE_FORK_SUBSIDY: Amount = 200 * COIN;

    /// Block reward of the first post-fork epoch: 405.04 DFI
    pub const POST_FORK_SUBSIDY: Amount = 40_504_000_000;

    /// Collateral of each genesis masternode
    pub const INITIAL_MASTERNODE_COLLATERAL: Amount = 1_000_010 * COIN;

    /// Number of genesis masternodes
    pub const GENESIS_MASTERNODES: Amount = 3;

    /// Genesis allocations to predefined addresses
    pub const INITIAL_DISTRIBUTION: Amount = 587_980_000 * COIN;

    /// One-time foundation burn applied at genesis
    pub const FOUNDATION_BURN: Amount = 26_571_399_989_000_000 + 287_883_508_826_675;

    /// Supply before any block subsidy is paid
    pub const GENESIS_SUPPLY: Amount = GENESIS_MASTERNODES * INITIAL_MASTERNODE_COLLATERAL
        + INITIAL_DISTRIBUTION
        - FOUNDATION_BURN;
}

pub use constants::*;
