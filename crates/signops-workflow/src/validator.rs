//! # Workflow Validator
//!
//! Combines the transition graph and the payment gate table to decide
//! whether a requested status change is allowed, and to enumerate the
//! possible next statuses with blocked/reason annotations.
//!
//! ## Failure Semantics
//!
//! Invalid requests are *reported*, never thrown: both entry points are
//! infallible and return plain values. An illegal transition and an
//! unsatisfied payment gate produce the same [`WorkflowValidation`] shape,
//! the latter with `required_payment_status` populated so the caller can
//! render "what would unblock this". The persistence layer must reject the
//! write when `allowed` is false — the validator itself mutates nothing.

use serde::{Deserialize, Serialize};

use signops_core::{JobStatus, PaymentStatus};

use crate::graph::{allowed_next, payment_gate};

/// Outcome of validating a single requested transition.
///
/// Transient value object — returned to the caller, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowValidation {
    /// Whether the transition may proceed.
    pub allowed: bool,
    /// Why the transition is blocked, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The minimum payment status that would satisfy the gate, when the
    /// rejection is a payment precondition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_payment_status: Option<PaymentStatus>,
}

impl WorkflowValidation {
    fn allowed() -> Self {
        Self { allowed: true, reason: None, required_payment_status: None }
    }

    fn rejected(reason: String) -> Self {
        Self { allowed: false, reason: Some(reason), required_payment_status: None }
    }

    fn gated(reason: String, minimum: PaymentStatus) -> Self {
        Self { allowed: false, reason: Some(reason), required_payment_status: Some(minimum) }
    }
}

/// One entry in the "what can this job do next" enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStatus {
    /// The candidate target status.
    pub status: JobStatus,
    /// Display label for rendering the action.
    pub label: &'static str,
    /// Whether the action is currently blocked.
    pub blocked: bool,
    /// Why it is blocked, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Decide whether a job may move from `current` to `target` given its
/// payment status.
///
/// Checks reachability against the transition graph first, then the
/// payment gate on the target. The reason string for an unreachable
/// target lists the legal alternatives.
pub fn validate_transition(
    current: JobStatus,
    target: JobStatus,
    payment: PaymentStatus,
) -> WorkflowValidation {
    let next = allowed_next(current);
    if !next.contains(&target) {
        let alternatives = if next.is_empty() {
            format!("{} is terminal; no transitions are allowed", current.label())
        } else {
            let names: Vec<&str> = next.iter().map(|s| s.as_str()).collect();
            format!("allowed next statuses from {}: {}", current.as_str(), names.join(", "))
        };
        return WorkflowValidation::rejected(format!(
            "cannot move from {} to {}; {alternatives}",
            current.as_str(),
            target.as_str(),
        ));
    }

    if let Some(minimum) = payment_gate(target) {
        if payment < minimum {
            return WorkflowValidation::gated(
                format!(
                    "{} requires at least {} (currently {})",
                    target.label(),
                    minimum.label(),
                    payment.label(),
                ),
                minimum,
            );
        }
    }

    WorkflowValidation::allowed()
}

/// Enumerate every status reachable from `current`, annotated with whether
/// it is currently blocked and why.
///
/// Lets the caller render available actions without trial-and-error calls
/// to [`validate_transition`]. Terminal statuses yield an empty list.
pub fn next_statuses(current: JobStatus, payment: PaymentStatus) -> Vec<NextStatus> {
    allowed_next(current)
        .iter()
        .map(|&target| {
            let validation = validate_transition(current, target, payment);
            NextStatus {
                status: target,
                label: target.label(),
                blocked: !validation.allowed,
                reason: validation.reason,
            }
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────
