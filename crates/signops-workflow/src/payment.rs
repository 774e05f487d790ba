//! # Payment Status Calculator
//!
//! The pure, total function from `(total, paid)` to [`PaymentStatus`].
//! Used both to derive live payment state for display and to decide
//! precondition satisfaction in the validator. No inputs are rejected:
//! negative amounts clamp to zero rather than erroring, so a drifted
//! stored row can never make a dashboard throw.

use signops_core::PaymentStatus;

/// Derive the payment status for a job with the given agreed total and
/// amount paid so far, both in whole currency units.
///
/// - `paid <= 0` → [`PaymentStatus::PaymentPending`]
/// - `0 < paid < total` → [`PaymentStatus::PartiallyPaid`]
/// - `paid >= total` (and something was paid) → [`PaymentStatus::PaymentDone`]
///
/// A job with `total == 0` (price not yet finalized by the sales visit) is
/// pending until any payment lands, at which point it is fully paid.
pub fn payment_status(total: i64, paid: i64) -> PaymentStatus {
    let total = total.max(0);
    let paid = paid.max(0);
    if paid == 0 {
        PaymentStatus::PaymentPending
    } else if paid < total {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::PaymentDone
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
