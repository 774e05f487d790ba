//! # Completion Vocabulary
//!
//! The shared "this stage is done" predicate. Several departments' final
//! milestones key off the same fixed set of terminal words that the UI
//! flows have written into status fields over the years. One definition,
//! consumed by every deriver — not re-implemented per call site.

/// Terminal words meaning a stage is finished, matched case-insensitively
/// against the whole (trimmed) status string.
pub const COMPLETED_VOCABULARY: &[&str] = &[
    "completed",
    "approved",
    "done",
    "production_complete",
    "print_complete",
    "paid",
    "payment_done",
];

/// Whether a raw status string says the stage is done.
///
/// Exact membership in [`COMPLETED_VOCABULARY`] after trimming and
/// lowercasing. This is deliberately *not* a substring match: "done" must
/// not fire on "abandoned".
pub fn is_completed_status(status: &str) -> bool {
    let normalized = status.trim().to_ascii_lowercase();
    COMPLETED_VOCABULARY.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_words_match() {
        for word in COMPLETED_VOCABULARY {
            assert!(is_completed_status(word));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_completed_status("COMPLETED"));
        assert!(is_completed_status("Payment_Done"));
        assert!(is_completed_status("  done  "));
    }

    #[test]
    fn test_non_terminal_words_rejected() {
        assert!(!is_completed_status("pending"));
        assert!(!is_completed_status("framing_started"));
        assert!(!is_completed_status(""));
    }

    #[test]
    fn test_membership_not_substring() {
        assert!(!is_completed_status("abandoned"));
        assert!(!is_completed_status("approved_pending_review"));
    }
}
