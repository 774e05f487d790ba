//! # Timeline Items
//!
//! The milestone value object and the single place where the `current`
//! marker is assigned.

use serde::Serialize;

use signops_core::Timestamp;

/// One milestone in a department's progress timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    /// Milestone label, fixed per department.
    pub label: &'static str,
    /// When the milestone happened (or is estimated to), where the stage
    /// record supplies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Whether the milestone is done.
    pub completed: bool,
    /// Whether this is the single in-progress milestone.
    pub current: bool,
}

impl TimelineItem {
    /// A milestone with no timestamp. `current` is assigned later by
    /// [`assign_current`].
    pub fn new(label: &'static str, completed: bool) -> Self {
        Self { label, timestamp: None, completed, current: false }
    }

    /// Attach a timestamp, if the stage record supplied one.
    pub fn with_timestamp(mut self, timestamp: Option<Timestamp>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Mark the single `current` milestone: the item immediately after the
/// *last* completed one, or the first item when nothing is completed yet.
///
/// Anchoring on the last completed item (rather than the first incomplete
/// one) keeps the invariant intact even when overlapping substring
/// predicates complete a later milestone without its predecessor: the
/// current marker can never sit before a completed item. An all-completed
/// timeline has no current item.
pub fn assign_current(items: &mut [TimelineItem]) {
    let last_completed = items.iter().rposition(|item| item.completed);
    let current_index = match last_completed {
        Some(i) if i + 1 < items.len() => i + 1,
        Some(_) => return, // everything is done
        None => 0,
    };
    if let Some(item) = items.get_mut(current_index) {
        item.current = true;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn items(flags: &[bool]) -> Vec<TimelineItem> {
        flags.iter().map(|&done| TimelineItem::new("step", done)).collect()
    }

    fn current_positions(items: &[TimelineItem]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.current)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_current_follows_last_completed() {
        let mut timeline = items(&[true, true, false, false]);
        assign_current(&mut timeline);
        assert_eq!(current_positions(&timeline), vec![2]);
    }

    #[test]
    fn test_nothing_completed_marks_first() {
        let mut timeline = items(&[false, false, false]);
        assign_current(&mut timeline);
        assert_eq!(current_positions(&timeline), vec![0]);
    }

    #[test]
    fn test_all_completed_has_no_current() {
        let mut timeline = items(&[true, true, true]);
        assign_current(&mut timeline);
        assert!(current_positions(&timeline).is_empty());
    }

    #[test]
    fn test_gap_in_completion_never_puts_current_before_completed() {
        // Overlapping predicates can complete item 2 without item 1.
        let mut timeline = items(&[true, false, true, false]);
        assign_current(&mut timeline);
        assert_eq!(current_positions(&timeline), vec![3]);
    }

    #[test]
    fn test_empty_timeline_is_a_no_op() {
        let mut timeline = items(&[]);
        assign_current(&mut timeline);
        assert!(timeline.is_empty());
    }
}
