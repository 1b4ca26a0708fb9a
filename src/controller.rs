//! The theme controller: apply, init, and toggle.

use std::cell::RefCell;
use std::rc::Rc;

use crate::detect::detect_color_mode;
use crate::mode::{effective_mode, ColorMode};
use crate::root::RootElement;
use crate::store::ThemeStore;

/// Applies the effective theme to a root element and toggles it on demand.
///
/// The root is shared (`Rc<RefCell<_>>`) because the host page owns it and
/// several event handlers touch it; the host's event loop serializes access,
/// so no locking is involved.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use nightswitch::{ColorMode, MemoryStore, RootElement, ThemeController};
///
/// let root = Rc::new(RefCell::new(RootElement::new()));
/// let controller = ThemeController::new(MemoryStore::with_mode(ColorMode::Dark), root.clone());
///
/// controller.apply();
/// assert!(root.borrow().is_dark());
///
/// controller.toggle();
/// assert!(!root.borrow().is_dark());
/// ```
pub struct ThemeController<S: ThemeStore> {
    store: S,
    root: Rc<RefCell<RootElement>>,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Creates a controller over a preference store and a shared root.
    pub fn new(store: S, root: Rc<RefCell<RootElement>>) -> Self {
        Self { store, root }
    }

    /// Recomputes the effective theme and sets the root's dark-mode flag to
    /// match: flag set iff the stored preference is dark, or the preference
    /// is unset and the environment reports dark. Anything else stored under
    /// the key, recognized or not, clears the flag.
    pub fn apply(&self) {
        let mode = effective_mode(self.store.get(), detect_color_mode());
        self.root.borrow_mut().set_dark(mode == ColorMode::Dark);
    }

    /// Event-handler entry point; same effect as [`apply`](Self::apply).
    /// Safe to invoke any number of times from any trigger.
    pub fn init(&self) {
        self.apply();
    }

    /// Flips the theme based on the root's current flag state and persists
    /// the result: dark roots go light, everything else goes dark.
    ///
    /// The flag, not the store, is inspected, so a toggle always visibly
    /// changes the page even if the store disagrees with the flag.
    pub fn toggle(&self) {
        let next = if self.root.borrow().is_dark() {
            ColorMode::Light
        } else {
            ColorMode::Dark
        };
        self.root.borrow_mut().set_dark(next == ColorMode::Dark);
        self.store.set(next);
    }

    /// The preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The shared root element.
    pub fn root(&self) -> &Rc<RefCell<RootElement>> {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::set_color_mode_detector;
    use crate::store::MemoryStore;
    use serial_test::serial;

    fn controller_with(
        stored: Option<ColorMode>,
    ) -> (ThemeController<MemoryStore>, Rc<RefCell<RootElement>>) {
        let store = match stored {
            Some(mode) => MemoryStore::with_mode(mode),
            None => MemoryStore::new(),
        };
        let root = Rc::new(RefCell::new(RootElement::new()));
        (ThemeController::new(store, root.clone()), root)
    }

    #[test]
    #[serial]
    fn test_apply_stored_dark_sets_flag() {
        set_color_mode_detector(|| ColorMode::Light);
        let (controller, root) = controller_with(Some(ColorMode::Dark));
        controller.apply();
        assert!(root.borrow().is_dark());
    }

    #[test]
    #[serial]
    fn test_apply_stored_light_clears_flag() {
        set_color_mode_detector(|| ColorMode::Dark);
        let (controller, root) = controller_with(Some(ColorMode::Light));
        root.borrow_mut().set_dark(true);
        controller.apply();
        assert!(!root.borrow().is_dark());
    }

    #[test]
    #[serial]
    fn test_apply_unset_follows_environment() {
        let (controller, root) = controller_with(None);

        set_color_mode_detector(|| ColorMode::Dark);
        controller.apply();
        assert!(root.borrow().is_dark());

        set_color_mode_detector(|| ColorMode::Light);
        controller.apply();
        assert!(!root.borrow().is_dark());
    }

    #[test]
    #[serial]
    fn test_apply_is_idempotent() {
        set_color_mode_detector(|| ColorMode::Dark);
        let (controller, root) = controller_with(None);
        controller.apply();
        let snapshot = root.borrow().clone();
        controller.apply();
        assert_eq!(*root.borrow(), snapshot);
    }

    #[test]
    #[serial]
    fn test_toggle_from_clear_goes_dark() {
        set_color_mode_detector(|| ColorMode::Light);
        let (controller, root) = controller_with(None);
        controller.apply();
        assert!(!root.borrow().is_dark());

        controller.toggle();
        assert!(root.borrow().is_dark());
        assert_eq!(controller.store().get().mode(), Some(ColorMode::Dark));
    }

    #[test]
    #[serial]
    fn test_toggle_from_dark_goes_light() {
        set_color_mode_detector(|| ColorMode::Dark);
        let (controller, root) = controller_with(None);
        controller.apply();
        assert!(root.borrow().is_dark());

        controller.toggle();
        assert!(!root.borrow().is_dark());
        assert_eq!(controller.store().get().mode(), Some(ColorMode::Light));
    }

    #[test]
    #[serial]
    fn test_double_toggle_round_trips() {
        set_color_mode_detector(|| ColorMode::Light);
        for start in [ColorMode::Light, ColorMode::Dark] {
            let (controller, root) = controller_with(Some(start));
            controller.apply();
            let flag_before = root.borrow().is_dark();

            controller.toggle();
            controller.toggle();

            assert_eq!(root.borrow().is_dark(), flag_before);
            assert_eq!(controller.store().get().mode(), Some(start));
        }
    }

    #[test]
    #[serial]
    fn test_toggle_follows_flag_not_store() {
        set_color_mode_detector(|| ColorMode::Light);
        let (controller, root) = controller_with(Some(ColorMode::Light));
        // Flag mutated out-of-band; toggle must still flip what is visible.
        root.borrow_mut().set_dark(true);

        controller.toggle();
        assert!(!root.borrow().is_dark());
        assert_eq!(controller.store().get().mode(), Some(ColorMode::Light));
    }
}
