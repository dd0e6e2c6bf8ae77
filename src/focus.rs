//! Keyboard focus tracking
//!
//! Hosts register their focusable elements here so the dialog manager can
//! capture whichever element held focus when a dialog opened and restore it
//! when the session ends. An unregistered element is considered detached and
//! is never restored to.

use std::collections::HashSet;
use tracing::debug;

/// Identifier for a focusable element registered with the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(u64);

impl FocusId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FocusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "focus#{}", self.0)
    }
}

/// Tracks which registered host element currently holds keyboard focus.
#[derive(Debug, Default)]
pub struct FocusRegistry {
    next_id: u64,
    attached: HashSet<FocusId>,
    focused: Option<FocusId>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new focusable element and return its id.
    pub fn register(&mut self) -> FocusId {
        let id = FocusId(self.next_id);
        self.next_id += 1;
        self.attached.insert(id);
        id
    }

    /// Remove an element from the registry. Focus held by it is cleared.
    pub fn unregister(&mut self, id: FocusId) {
        self.attached.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Move focus to a registered element.
    ///
    /// Returns `false` (and leaves focus unchanged) when the element is not
    /// attached.
    pub fn focus(&mut self, id: FocusId) -> bool {
        if self.attached.contains(&id) {
            self.focused = Some(id);
            true
        } else {
            debug!(element = id.value(), "refusing to focus detached element");
            false
        }
    }

    /// Clear the current focus without unregistering anything.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    pub fn is_attached(&self, id: FocusId) -> bool {
        self.attached.contains(&id)
    }

    /// Restore focus to a previously captured target.
    ///
    /// Skipped silently when the target has been unregistered in the
    /// meantime; this mirrors restoring focus to a removed element.
    pub fn restore(&mut self, id: FocusId) -> bool {
        self.focus(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_assigns_unique_ids() {
        let mut registry = FocusRegistry::new();
        let a = registry.register();
        let b = registry.register();
        assert_ne!(a, b);
        assert!(registry.is_attached(a));
        assert!(registry.is_attached(b));
    }

    #[test]
    fn focus_requires_attachment() {
        let mut registry = FocusRegistry::new();
        let a = registry.register();
        assert!(registry.focus(a));
        assert_eq!(registry.focused(), Some(a));

        registry.unregister(a);
        assert!(!registry.focus(a));
        assert_eq!(registry.focused(), None);
    }

    #[test]
    fn unregister_clears_held_focus() {
        let mut registry = FocusRegistry::new();
        let a = registry.register();
        let b = registry.register();
        registry.focus(a);
        registry.unregister(a);
        assert_eq!(registry.focused(), None);

        // Unrelated elements keep their registration.
        assert!(registry.is_attached(b));
    }

    #[test]
    fn restore_to_detached_target_is_skipped() {
        let mut registry = FocusRegistry::new();
        let a = registry.register();
        let b = registry.register();
        registry.focus(b);

        registry.unregister(a);
        assert!(!registry.restore(a));
        // Focus stays where it was.
        assert_eq!(registry.focused(), Some(b));
    }
}
