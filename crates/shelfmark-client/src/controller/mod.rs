//! Form controllers.
//!
//! A controller owns one form's field values, its validation errors, the
//! last user-facing message and the `submitting` flag. Submitting takes
//! `&mut self`, so a controller never has two requests in flight.

pub mod book;
pub mod registration;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use shelfmark_core::messages;

/// Shared view of a controller's `submitting` flag.
///
/// Clones observe the same flag, so a renderer can disable its submit
/// trigger while the controller is busy.
#[derive(Debug, Clone, Default)]
pub struct SubmitFlag(Arc<AtomicBool>);

impl SubmitFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Label for the submit button.
    pub fn label(&self) -> &'static str {
        if self.is_set() {
            messages::SUBMIT_BUSY
        } else {
            messages::SUBMIT_IDLE
        }
    }

    /// Raise the flag until the returned guard is dropped.
    ///
    /// The guard clears the flag on every exit path, including a
    /// submission future that is dropped before it completes.
    fn raise(&self) -> SubmitGuard {
        self.0.store(true, Ordering::Release);
        SubmitGuard(self.clone())
    }
}

#[derive(Debug)]
struct SubmitGuard(SubmitFlag);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_flag_on_drop() {
        let flag = SubmitFlag::default();
        let observer = flag.clone();
        {
            let _guard = flag.raise();
            assert!(observer.is_set());
            assert_eq!(observer.label(), messages::SUBMIT_BUSY);
        }
        assert!(!observer.is_set());
        assert_eq!(observer.label(), messages::SUBMIT_IDLE);
    }
}
