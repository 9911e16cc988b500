//! Reward shaping terms.
//!
//! Rewards are decomposed into independent additive components —
//! assignment bonus, waiting penalty, critical-case bonus/penalty,
//! overtime penalty, ambient urgency pressure, and the terminal
//! unassigned penalty — so an incentive gradient exists at every minute
//! rather than only at episode end. Each step starts from a zero base
//! and sums the applicable deltas.

use orsim_core::SurgicalCase;

/// Flat bonus for any legal assignment.
pub const ASSIGNMENT_BONUS: f64 = 60.0;
/// Penalty for attempting an assignment while nobody is waiting.
pub const SPURIOUS_ASSIGN_PENALTY: f64 = 2.0;
/// Opportunity cost of waiting while the queue is non-empty.
pub const IDLE_PENALTY: f64 = 1.0;
/// Penalty for an occupied or non-existent room, or an out-of-range slot.
pub const INVALID_ACTION_PENALTY: f64 = 2.0;
/// Per-minute waiting penalty rate applied at assignment time.
pub const WAITING_PENALTY_RATE: f64 = 0.1;
/// Minimum waiting time (minutes) before the waiting penalty applies.
pub const WAITING_PENALTY_THRESHOLD: u32 = 2;
/// Extra bonus for assigning a critical case.
pub const CRITICAL_BONUS: f64 = 40.0;
/// Minutes a critical case may wait before the escalation penalty.
pub const CRITICAL_WAIT_GRACE: u32 = 15;
/// Per-minute escalation rate for critical cases waiting past the grace.
pub const CRITICAL_WAIT_RATE: f64 = 0.3;
/// Per-minute rate for work scheduled past the end of the day.
pub const OVERTIME_RATE: f64 = 2.0;
/// Per-minute ambient pressure rate for each still-waiting critical case.
pub const PRESSURE_RATE: f64 = 0.05;
/// Minimum waiting time (minutes) before ambient pressure applies.
pub const PRESSURE_THRESHOLD: u32 = 2;
/// Terminal penalty per case left waiting when the episode ends.
pub const UNASSIGNED_PENALTY: f64 = 20.0;
/// Additional terminal penalty when the unassigned case is critical.
pub const UNASSIGNED_CRITICAL_PENALTY: f64 = 10.0;

/// Signed reward delta for a legal assignment.
///
/// `waiting_time` is minutes between arrival and placement; `overrun` is
/// how far past day end the case would finish (zero when it fits).
pub fn assignment_delta(case: &SurgicalCase, waiting_time: u32, overrun: u32) -> f64 {
    let mut delta = ASSIGNMENT_BONUS;
    if waiting_time >= WAITING_PENALTY_THRESHOLD {
        delta -= WAITING_PENALTY_RATE * f64::from(waiting_time);
    }
    if case.urgency.is_critical() {
        delta += CRITICAL_BONUS;
        if waiting_time > CRITICAL_WAIT_GRACE {
            delta -= CRITICAL_WAIT_RATE * f64::from(waiting_time - CRITICAL_WAIT_GRACE);
        }
    }
    delta -= OVERTIME_RATE * f64::from(overrun);
    delta
}

/// Ambient pressure accrued this minute by still-waiting critical cases.
///
/// Returned as a non-negative magnitude; applied every step regardless
/// of the action taken, which is what makes leaving urgent cases in the
/// queue cumulatively expensive.
pub fn urgency_pressure(waiting: &[SurgicalCase], now: u32) -> f64 {
    let mut penalty = 0.0;
    for case in waiting {
        if !case.urgency.is_critical() {
            continue;
        }
        let waited = case.waiting_time(now);
        if waited >= PRESSURE_THRESHOLD {
            penalty += PRESSURE_RATE * f64::from(waited);
        }
    }
    penalty
}

/// Terminal penalty for cases left waiting when the episode terminates.
///
/// Returned as a non-negative magnitude.
pub fn unassigned_penalty(waiting: &[SurgicalCase]) -> f64 {
    waiting
        .iter()
        .map(|case| {
            UNASSIGNED_PENALTY
                + if case.urgency.is_critical() {
                    UNASSIGNED_CRITICAL_PENALTY
                } else {
                    0.0
                }
        })
        .sum()
}
