//! Weekly rota generation.
//!
//! A rota is built per staff member (approved leave overlay, then off-day
//! assignment, then shift rotation) and then balanced across staff in a
//! single pass. Manual edits and reporting statistics live here too.

mod balancing;
mod generator;
mod leave_overlay;
mod off_days;
mod shift_distribution;
mod stats;

pub use balancing::{ShiftMove, balance_shifts};
pub use generator::{generate_rota, update_shift};
pub use leave_overlay::apply_approved_leave;
pub use off_days::assign_off_days;
pub use shift_distribution::distribute_shifts;
pub use stats::compute_shift_stats;
