//! # Accounts Timeline
//!
//! Invoicing and payment collection. Invoice-generated and invoice-sent
//! share a predicate (the stored data has no separate "sent" flag — the
//! invoice number is the only signal); the payment milestones key off the
//! typed payment status on the accounts record.

use signops_core::{AccountsStage, PaymentStatus};

use crate::item::{assign_current, TimelineItem};

/// Derive the accounts timeline.
///
/// Milestones: Invoice Generated → Invoice Sent → Advance Received →
/// Payment Complete.
pub fn derive_timeline(stage: Option<&AccountsStage>) -> Vec<TimelineItem> {
    let Some(stage) = stage else {
        return Vec::new();
    };

    let invoiced = stage.invoice_number.is_some();
    let advance_received = stage.payment_status >= PaymentStatus::PartiallyPaid;
    let paid_in_full = stage.payment_status == PaymentStatus::PaymentDone;

    let mut items = vec![
        TimelineItem::new("Invoice Generated", invoiced),
        TimelineItem::new("Invoice Sent", invoiced).with_timestamp(stage.invoice_sent_at),
        TimelineItem::new("Advance Received", advance_received),
        TimelineItem::new("Payment Complete", paid_in_full),
    ];
    assign_current(&mut items);
    items
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(invoice: Option<&str>, payment_status: PaymentStatus) -> AccountsStage {
        AccountsStage {
            invoice_number: invoice.map(String::from),
            payment_status,
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_record_yields_empty_timeline() {
        assert!(derive_timeline(None).is_empty());
    }

    #[test]
    fn test_nothing_invoiced_nothing_paid() {
        let timeline = derive_timeline(Some(&stage(None, PaymentStatus::PaymentPending)));
        assert!(timeline.iter().all(|item| !item.completed));
        assert!(timeline[0].current);
    }

    #[test]
    fn test_invoice_number_completes_generated_and_sent() {
        let timeline =
            derive_timeline(Some(&stage(Some("INV-2026-017"), PaymentStatus::PaymentPending)));
        assert!(timeline[0].completed);
        assert!(timeline[1].completed);
        assert!(!timeline[2].completed);
        assert!(timeline[2].current);
    }

    #[test]
    fn test_advance_received() {
        let timeline =
            derive_timeline(Some(&stage(Some("INV-2026-017"), PaymentStatus::PartiallyPaid)));
        assert!(timeline[2].completed);
        assert!(!timeline[3].completed);
        assert!(timeline[3].current);
    }

    #[test]
    fn test_payment_done_completes_everything() {
        let timeline =
            derive_timeline(Some(&stage(Some("INV-2026-017"), PaymentStatus::PaymentDone)));
        assert!(timeline.iter().all(|item| item.completed));
        assert!(timeline.iter().all(|item| !item.current));
    }

    #[test]
    fn test_payment_without_invoice_still_counts() {
        // Advance taken over the counter before invoicing — the payment
        // milestones complete, current stays on the first incomplete item
        // after the last completed one.
        let timeline = derive_timeline(Some(&stage(None, PaymentStatus::PaymentDone)));
        assert!(!timeline[0].completed);
        assert!(!timeline[1].completed);
        assert!(timeline[2].completed);
        assert!(timeline[3].completed);
        assert!(timeline.iter().filter(|item| item.current).count() == 0);
    }
}
