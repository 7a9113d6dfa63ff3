//! # Emission Schedule
//!
//! Per-block subsidy curve for DFI.
//!
//! ## Reduction Epochs
//!
//! ```text
//! Pre-fork  (h < 894,000):   200 DFI/block
//! Epoch 0   (894,000 ..):    405.04 DFI/block
//! Epoch n+1:                 reward(n) - floor(reward(n) * 1,658 / 100,000)
//! ...until a reduction would remove less than one base unit, then 0 forever
//! ```
//!
//! Every step floors, so the curve sits slightly below the ideal geometric
//! decay. The exact integer trajectory is part of consensus.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::*;
use crate::Amount;

/// Apply one reduction step to an epoch subsidy.
///
/// Returns `None` once the reduction rounds down to zero: the curve has
/// bottomed out and every later epoch pays nothing.
pub fn reduce(base: Amount) -> Option<Amount> {
    let delta = base * REDUCTION_PERMYRIAD / REDUCTION_DENOMINATOR;
    if delta == 0 {
        None
    } else {
        Some(base - delta)
    }
}

/// Uncached subsidy at `height`, replaying every reduction from the fork.
pub fn naive_subsidy(height: u64) -> Amount {
    if height < EUNOS_FORK_HEIGHT {
        return PRE_FORK_SUBSIDY;
    }
    let reductions = (height - EUNOS_FORK_HEIGHT) / REDUCTION_INTERVAL;
    let mut base = POST_FORK_SUBSIDY;
    for _ in 0..reductions {
        match reduce(base) {
            Some(next) => base = next,
            None => return 0,
        }
    }
    base
}

/// Reduction epoch information
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochInfo {
    /// Reduction index (0 = first post-fork epoch)
    pub index: u64,
    /// First height of the epoch
    pub start_height: u64,
    /// End height (exclusive)
    pub end_height: u64,
    /// Block reward paid throughout the epoch
    pub subsidy: Amount,
}

/// Memoized subsidy per reduction epoch.
///
/// Epochs are resolved in order, so the table is dense: `subsidies[r]` is the
/// reward of epoch `r`. Once the zero tail is found its first epoch is kept in
/// `zero_from` and every later lookup answers 0 without touching the table.
#[derive(Clone, Debug)]
pub struct ReductionCache {
    subsidies: Vec<Amount>,
    zero_from: Option<u64>,
}

impl Default for ReductionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReductionCache {
    /// Create a cache seeded with the first post-fork epoch
    pub fn new() -> Self {
        Self {
            subsidies: vec![POST_FORK_SUBSIDY],
            zero_from: None,
        }
    }

    /// Cached subsidy for `reductions`, if already known
    pub fn get(&self, reductions: u64) -> Option<Amount> {
        if matches!(self.zero_from, Some(zero) if reductions >= zero) {
            return Some(0);
        }
        usize::try_from(reductions)
            .ok()
            .and_then(|index| self.subsidies.get(index))
            .copied()
    }

    /// Number of non-zero epochs resolved so far
    pub fn len(&self) -> usize {
        self.subsidies.len()
    }

    /// Always false: the first post-fork epoch is seeded on construction
    pub fn is_empty(&self) -> bool {
        self.subsidies.is_empty()
    }

    /// First epoch of the zero tail, if it has been reached
    pub fn zero_from(&self) -> Option<u64> {
        self.zero_from
    }

    /// Resolve `reductions`, extending the table from the last known epoch.
    pub fn resolve(&mut self, reductions: u64) -> Amount {
        if let Some(subsidy) = self.get(reductions) {
            return subsidy;
        }

        let mut base = self.subsidies.last().copied().unwrap_or(POST_FORK_SUBSIDY);
        let mut resolved = self.subsidies.len() as u64;
        trace!(from = resolved, to = reductions, "extending reduction cache");

        while resolved <= reductions {
            match reduce(base) {
                Some(next) => {
                    base = next;
                    self.subsidies.push(next);
                    resolved += 1;
                }
                None => {
                    debug!(epoch = resolved, last_subsidy = %base, "subsidy reached zero");
                    self.zero_from = Some(resolved);
                    return 0;
                }
            }
        }
        base
    }
}

/// Emission schedule calculator.
///
/// Owns its reduction cache; the lock makes a shared schedule safe to query
/// from several threads, and every writer stores the same value for a given
/// epoch.
#[derive(Debug, Default)]
pub struct EmissionSchedule {
    cache: RwLock<ReductionCache>,
}

impl Clone for EmissionSchedule {
    fn clone(&self) -> Self {
        Self {
            cache: RwLock::new(self.cache.read().clone()),
        }
    }
}

impl EmissionSchedule {
    /// Schedule with mainnet parameters and an empty cache
    pub fn mainnet() -> Self {
        Self::default()
    }

    /// Reduction index of `height`, or `None` below the fork
    pub fn epoch_index(&self, height: u64) -> Option<u64> {
        height
            .checked_sub(EUNOS_FORK_HEIGHT)
            .map(|since_fork| since_fork / REDUCTION_INTERVAL)
    }

    /// Block reward paid at `height`
    pub fn subsidy(&self, height: u64) -> Amount {
        match self.epoch_index(height) {
            None => PRE_FORK_SUBSIDY,
            Some(reductions) => self.epoch_subsidy(reductions),
        }
    }

    /// Block reward paid throughout reduction epoch `reductions`
    pub fn epoch_subsidy(&self, reductions: u64) -> Amount {
        if let Some(subsidy) = self.cache.read().get(reductions) {
            return subsidy;
        }
        self.cache.write().resolve(reductions)
    }

    /// Get epoch information
    pub fn epoch_info(&self, index: u64) -> EpochInfo {
        let start_height = EUNOS_FORK_HEIGHT.saturating_add(index.saturating_mul(REDUCTION_INTERVAL));
        EpochInfo {
            index,
            start_height,
            end_height: start_height.saturating_add(REDUCTION_INTERVAL),
            subsidy: self.epoch_subsidy(index),
        }
    }

    /// First reduction epoch that pays nothing
    pub fn zero_subsidy_epoch(&self) -> u64 {
        if let Some(zero) = self.cache.read().zero_from() {
            return zero;
        }
        let mut cache = self.cache.write();
        loop {
            if let Some(zero) = cache.zero_from() {
                return zero;
            }
            let next = cache.len() as u64;
            cache.resolve(next);
        }
    }

    /// First height whose block reward is zero
    pub fn zero_subsidy_height(&self) -> u64 {
        EUNOS_FORK_HEIGHT + self.zero_subsidy_epoch() * REDUCTION_INTERVAL
    }

    /// Post-fork epochs with a non-zero reward, in order
    pub fn epochs(&self) -> Vec<EpochInfo> {
        (0..self.zero_subsidy_epoch())
            .map(|index| self.epoch_info(index))
            .collect()
    }

    /// Number of epochs currently memoized
    pub fn cached_epochs(&self) -> usize {
        self.cache.read().len()
    }
}
