//! # Reception Timeline
//!
//! Intake progress: the record exists as soon as the job does, so the
//! first milestone is always complete; the rest are field-presence checks.

use signops_core::ReceptionistStage;

use crate::item::{assign_current, TimelineItem};

/// Derive the reception timeline.
///
/// Milestones: Job Received → Customer Details Recorded → Salesperson
/// Assigned → Appointment Scheduled.
pub fn derive_timeline(stage: Option<&ReceptionistStage>) -> Vec<TimelineItem> {
    let Some(stage) = stage else {
        return Vec::new();
    };

    let details_recorded =
        stage.customer_phone.is_some() || stage.customer_address.is_some();

    let mut items = vec![
        TimelineItem::new("Job Received", true),
        TimelineItem::new("Customer Details Recorded", details_recorded),
        TimelineItem::new("Salesperson Assigned", stage.assigned_salesperson.is_some()),
        TimelineItem::new("Appointment Scheduled", stage.appointment_date.is_some())
            .with_timestamp(stage.appointment_date),
    ];
    assign_current(&mut items);
    items
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use signops_core::Timestamp;

    #[test]
    fn test_absent_record_yields_empty_timeline() {
        assert!(derive_timeline(None).is_empty());
    }

    #[test]
    fn test_fresh_intake_has_received_complete() {
        let timeline = derive_timeline(Some(&ReceptionistStage::default()));
        assert_eq!(timeline.len(), 4);
        assert!(timeline[0].completed);
        assert!(!timeline[1].completed);
        assert!(timeline[1].current);
    }

    #[test]
    fn test_details_via_phone_only() {
        let stage = ReceptionistStage {
            customer_phone: Some("0300-5551234".to_string()),
            ..Default::default()
        };
        let timeline = derive_timeline(Some(&stage));
        assert!(timeline[1].completed);
        assert!(timeline[2].current);
    }

    #[test]
    fn test_fully_scheduled_intake() {
        let appointment = Timestamp::parse("2026-03-02T10:00:00Z").unwrap();
        let stage = ReceptionistStage {
            customer_phone: Some("0300-5551234".to_string()),
            customer_address: Some("12 Canal Road".to_string()),
            assigned_salesperson: Some("Bilal".to_string()),
            appointment_date: Some(appointment),
        };
        let timeline = derive_timeline(Some(&stage));
        assert!(timeline.iter().all(|item| item.completed));
        assert!(timeline.iter().all(|item| !item.current));
        assert_eq!(timeline[3].timestamp, Some(appointment));
    }
}
