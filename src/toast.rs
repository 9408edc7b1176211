use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a toast stays on screen before the view dismisses it.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);
/// Newest toast wins once this many are visible.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Anything that can put a transient message in front of the user.
pub trait Toaster {
    fn show(&self, title: &str, description: &str, severity: Severity);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: &str, description: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(
            0,
            Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                severity,
            },
        );
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct RecordingToaster {
        queue: RefCell<ToastQueue>,
        shown: RefCell<Vec<Toast>>,
    }

    impl RecordingToaster {
        pub(crate) fn shown(&self) -> Vec<Toast> {
            self.shown.borrow().clone()
        }
    }

    impl Toaster for RecordingToaster {
        fn show(&self, title: &str, description: &str, severity: Severity) {
            let mut queue = self.queue.borrow_mut();
            queue.push(title, description, severity);
            self.shown.borrow_mut().extend(queue.visible().iter().cloned());
        }
    }

    #[test]
    fn test_newest_toast_replaces_older() {
        let mut queue = ToastQueue::new();
        let first = queue.push("Incomplete form", "fill it in", Severity::Destructive);
        let second = queue.push("Message sent!", "thanks", Severity::Default);
        assert_ne!(first, second);
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].id, second);
        assert_eq!(queue.visible()[0].title, "Message sent!");
    }

    #[test]
    fn test_dismiss_only_removes_matching_id() {
        let mut queue = ToastQueue::new();
        let first = queue.push("a", "", Severity::Default);
        let second = queue.push("b", "", Severity::Default);
        // stale timer for an already replaced toast
        queue.dismiss(first);
        assert_eq!(queue.visible().len(), 1);
        queue.dismiss(second);
        assert!(queue.visible().is_empty());
    }
}
