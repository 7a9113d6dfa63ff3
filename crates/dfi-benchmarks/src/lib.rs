//! Benchmark fixtures for the DFI supply calculator

use dfi_economics::{EmissionSchedule, EUNOS_FORK_HEIGHT, REDUCTION_INTERVAL};

/// Block counts covering pre-fork, early, late and zero-tail supply queries
pub const SUPPLY_HEIGHTS: [u64; 5] = [
    500_000,
    EUNOS_FORK_HEIGHT + REDUCTION_INTERVAL / 2,
    5_000_000,
    41_821_880,
    u64::MAX,
];

/// Schedule with every non-zero epoch already memoized
pub fn warm_schedule() -> EmissionSchedule {
    let schedule = EmissionSchedule::mainnet();
    schedule.zero_subsidy_epoch();
    schedule
}
