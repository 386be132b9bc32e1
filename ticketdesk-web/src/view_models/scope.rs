use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Lifetime guard for async work started by a view.
///
/// A view creates one scope when it mounts and cancels it in the effect
/// cleanup. Requests still run to completion, but their results are dropped
/// once the scope is cancelled.
#[derive(Debug, Clone)]
pub struct ViewScope {
    active: Rc<Cell<bool>>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        self.active.set(false);
    }

    /// Await `work`, yielding its output only if the scope is still active.
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        let output = work.await;
        if self.is_active() {
            Some(output)
        } else {
            log::debug!("dropping result for a torn down view");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn active_scope_passes_results_through() {
        let scope = ViewScope::new();
        assert_eq!(block_on(scope.run(async { 7 })), Some(7));
    }

    #[test]
    fn cancelled_scope_drops_late_results() {
        let scope = ViewScope::new();
        let view_copy = scope.clone();
        let result = block_on(scope.run(async move {
            // The view unmounts while the request is in flight.
            view_copy.cancel();
            "tickets"
        }));

        assert_eq!(result, None);
        assert!(!scope.is_active());
    }
}
