//! Page lifecycle events and handler registration.
//!
//! The theme is re-evaluated on every page activation, so one idempotent
//! handler is registered for each trigger: document ready, content swapped in
//! by an enhancement library, and restore from the back/forward cache. The
//! toggle control's click is a fourth event rather than a global symbol.
//!
//! Known gap, kept deliberately: a live environment color-scheme change while
//! the page is open fires none of these events. Hosts with their own signal
//! can emit [`PageEvent::PageShow`] to force re-application.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::ThemeController;
use crate::store::ThemeStore;

/// Triggers the host page delivers to subscribed handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished parsing (traditional page load).
    Ready,
    /// An enhancement library swapped new content into the page.
    ContentSwapped,
    /// The page was restored from the back/forward cache.
    PageShow,
    /// The theme toggle control was activated.
    ToggleRequested,
}

/// A minimal single-threaded event dispatcher.
///
/// Handlers run synchronously on the emitting call, in subscription order.
/// There is no queue and no unsubscription; the bus lives as long as the
/// page does.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<(PageEvent, Rc<dyn Fn()>)>>,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an event.
    pub fn subscribe(&self, event: PageEvent, handler: impl Fn() + 'static) {
        self.handlers.borrow_mut().push((event, Rc::new(handler)));
    }

    /// Runs every handler registered for the event, in subscription order.
    pub fn emit(&self, event: PageEvent) {
        // Clone out first: a handler may subscribe while we iterate.
        let matching: Vec<Rc<dyn Fn()>> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, h)| h.clone())
            .collect();
        for handler in matching {
            handler();
        }
    }
}

impl<S: ThemeStore + 'static> ThemeController<S> {
    /// Wires the controller into the page lifecycle.
    ///
    /// Applies the theme immediately (the before-first-paint run), then
    /// registers re-application for [`PageEvent::Ready`],
    /// [`PageEvent::ContentSwapped`] and [`PageEvent::PageShow`], and the
    /// toggle for [`PageEvent::ToggleRequested`].
    pub fn install(self: &Rc<Self>, bus: &EventBus) {
        self.apply();

        for event in [
            PageEvent::Ready,
            PageEvent::ContentSwapped,
            PageEvent::PageShow,
        ] {
            let controller = Rc::clone(self);
            bus.subscribe(event, move || controller.init());
        }

        let controller = Rc::clone(self);
        bus.subscribe(PageEvent::ToggleRequested, move || controller.toggle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_runs_only_matching_handlers() {
        let bus = EventBus::new();
        let ready_hits = Rc::new(Cell::new(0));
        let show_hits = Rc::new(Cell::new(0));

        let counter = ready_hits.clone();
        bus.subscribe(PageEvent::Ready, move || counter.set(counter.get() + 1));
        let counter = show_hits.clone();
        bus.subscribe(PageEvent::PageShow, move || counter.set(counter.get() + 1));

        bus.emit(PageEvent::Ready);
        bus.emit(PageEvent::Ready);
        bus.emit(PageEvent::ContentSwapped);

        assert_eq!(ready_hits.get(), 2);
        assert_eq!(show_hits.get(), 0);
    }

    #[test]
    fn test_emit_preserves_subscription_order() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let order = order.clone();
            bus.subscribe(PageEvent::Ready, move || order.borrow_mut().push(label));
        }

        bus.emit(PageEvent::Ready);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_emit_with_no_handlers_is_a_no_op() {
        let bus = EventBus::new();
        bus.emit(PageEvent::PageShow);
    }
}
