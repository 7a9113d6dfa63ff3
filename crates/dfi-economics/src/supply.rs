//! # Total Supply
//!
//! Circulating supply after `H` blocks (heights `0..H`) have been produced:
//!
//! ```text
//! supply(H) = 3 × masternode collateral + initial distribution − foundation burn
//!           + Σ subsidy(h) for h in [0, H)
//! ```
//!
//! The subsidy is constant inside a reduction epoch, so the sum is taken one
//! epoch at a time and stops at the zero tail.

use tracing::trace;

use crate::constants::*;
use crate::emission::EmissionSchedule;
use crate::Amount;

impl EmissionSchedule {
    /// Supply before any block reward is paid
    pub fn genesis_supply(&self) -> Amount {
        GENESIS_SUPPLY
    }

    /// Total supply after `blocks` blocks, summed per reduction epoch
    pub fn total_supply(&self, blocks: u64) -> Amount {
        let pre_fork_blocks = blocks.min(EUNOS_FORK_HEIGHT);
        let mut total = GENESIS_SUPPLY + Amount::from(pre_fork_blocks) * PRE_FORK_SUBSIDY;

        let Some(post_fork_blocks) = blocks.checked_sub(EUNOS_FORK_HEIGHT) else {
            return total;
        };
        let full_epochs = post_fork_blocks / REDUCTION_INTERVAL;
        let remainder = post_fork_blocks % REDUCTION_INTERVAL;

        for reductions in 0..full_epochs {
            let subsidy = self.epoch_subsidy(reductions);
            if subsidy == 0 {
                trace!(blocks, zero_epoch = reductions, "supply capped by zero tail");
                return total;
            }
            total += Amount::from(REDUCTION_INTERVAL) * subsidy;
        }

        total + Amount::from(remainder) * self.epoch_subsidy(full_epochs)
    }

    /// Total supply after `blocks` blocks, one block at a time.
    ///
    /// Linear in `blocks`; kept as the reference the epoch sum is checked
    /// against.
    pub fn total_supply_naive(&self, blocks: u64) -> Amount {
        (0..blocks).fold(GENESIS_SUPPLY, |total, height| total + self.subsidy(height))
    }

    /// Supply once the reward has reached zero; no height ever exceeds it
    pub fn max_supply(&self) -> Amount {
        self.total_supply(self.zero_subsidy_height())
    }
}
