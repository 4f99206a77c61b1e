//! Cycle guard - ancestor tracking for one conversion
//!
//! The guard is a plain value owned by the traversal context: created fresh
//! per top-level conversion, never shared. A process-wide set would let
//! concurrent conversions poison each other with spurious circular-reference
//! markers.

use std::collections::HashSet;

/// Reference identity of an object (its allocation address)
pub type ObjectId = usize;

/// Tracks object identities on the active recursion path
///
/// An identity is a member exactly while that object is an ancestor of the
/// current recursion frame: added on entry to the object's normalization,
/// removed on exit. Sibling or repeated non-ancestor occurrences of the same
/// object are therefore normalized independently, not flagged as cycles.
#[derive(Debug, Clone, Default)]
pub struct CycleGuard {
    visiting: HashSet<ObjectId>,
}

impl CycleGuard {
    /// Create a fresh guard for one top-level conversion
    pub fn new() -> Self {
        Self {
            visiting: HashSet::new(),
        }
    }

    /// Mark an identity as an ancestor
    ///
    /// Returns `true` if newly added; `false` if the identity is already an
    /// ancestor, in which case the caller must short-circuit instead of
    /// recursing.
    pub fn enter(&mut self, id: ObjectId) -> bool {
        self.visiting.insert(id)
    }

    /// Unmark an identity on exit from its normalization
    pub fn exit(&mut self, id: ObjectId) {
        self.visiting.remove(&id);
    }

    /// Number of identities currently on the path
    pub fn active(&self) -> usize {
        self.visiting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_twice_flags_ancestor() {
        let mut guard = CycleGuard::new();
        assert!(guard.enter(42));
        assert!(!guard.enter(42));
    }

    #[test]
    fn test_exit_allows_reentry() {
        let mut guard = CycleGuard::new();
        assert!(guard.enter(42));
        guard.exit(42);
        // Non-ancestor repeat: the same identity off the path is fine.
        assert!(guard.enter(42));
    }

    #[test]
    fn test_guards_are_independent() {
        let mut a = CycleGuard::new();
        let mut b = CycleGuard::new();
        assert!(a.enter(7));
        assert!(b.enter(7));
        assert_eq!(a.active(), 1);
        assert_eq!(b.active(), 1);
    }
}
