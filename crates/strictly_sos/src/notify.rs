//! Synchronous change notification.

use super::action::TurnOutcome;
use tracing::trace;

/// Callback invoked with every accepted placement.
pub type OutcomeListener = Box<dyn FnMut(&TurnOutcome)>;

/// Ordered list of outcome listeners.
///
/// Listeners run synchronously, in subscription order, on the caller's
/// stack. There is no queue and no reordering.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<OutcomeListener>,
}

impl ChangeNotifier {
    /// Creates a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&TurnOutcome) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Calls every listener with `outcome`.
    pub fn notify(&mut self, outcome: &TurnOutcome) {
        trace!(listeners = self.listeners.len(), %outcome, "Broadcasting turn");
        for listener in &mut self.listeners {
            listener(outcome);
        }
    }

    /// Drops every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true with no listeners.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, Seat, Symbol};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listeners_called_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        for id in 0..3 {
            let log = Rc::clone(&log);
            notifier.subscribe(move |_| log.borrow_mut().push(id));
        }

        let outcome = TurnOutcome::new(Move::new(Symbol::S, Position::new(0, 0)), Vec::new(), Seat::Blue);
        notifier.notify(&outcome);
        notifier.notify(&outcome);
        assert_eq!(*log.borrow(), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_clear_drops_listeners() {
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(|_| {});
        assert_eq!(notifier.len(), 1);
        notifier.clear();
        assert!(notifier.is_empty());
    }
}
