//! Dark/light theme control for a host page.
//!
//! This crate decides whether a page should render dark or light, applies the
//! decision as a `dark` class on the page root, persists the user's choice,
//! and re-applies it after page-lifecycle events. The pieces:
//!
//! - [`ColorMode`], [`StoredPreference`] and [`effective_mode`]: the
//!   two-value mode, the three-way persisted state (unset, a mode, or an
//!   occupied-but-unrecognized key), and the pure resolution rule — a stored
//!   mode wins, an unset key follows the environment, anything else renders
//!   light
//! - [`detect_color_mode`] / [`set_color_mode_detector`]: the environment's
//!   color-scheme signal, OS-detected by default and overridable
//! - [`ThemeStore`] with [`MemoryStore`] and [`FileStore`]: the persisted
//!   preference under the key `theme`, degrading silently when storage is
//!   unavailable
//! - [`RootElement`] and [`DARK_CLASS`]: the root's class list and the flag
//! - [`ThemeController`]: `apply` / `init` / `toggle`
//! - [`EventBus`] and [`PageEvent`]: the triggers that re-run application
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use nightswitch::{
//!     ColorMode, EventBus, MemoryStore, PageEvent, RootElement, ThemeController,
//! };
//!
//! # nightswitch::set_color_mode_detector(|| ColorMode::Light);
//! let root = Rc::new(RefCell::new(RootElement::new()));
//! let controller = Rc::new(ThemeController::new(MemoryStore::new(), root.clone()));
//!
//! let bus = EventBus::new();
//! controller.install(&bus);
//!
//! // The toggle control was clicked: the page goes dark and the choice
//! // is persisted.
//! bus.emit(PageEvent::ToggleRequested);
//! assert!(root.borrow().is_dark());
//! ```

mod controller;
mod detect;
mod events;
mod mode;
mod root;
mod store;

pub use controller::ThemeController;
pub use detect::{detect_color_mode, set_color_mode_detector};
pub use events::{EventBus, PageEvent};
pub use mode::{effective_mode, ColorMode, ParseColorModeError, StoredPreference};
pub use root::{RootElement, DARK_CLASS};
pub use store::{FileStore, MemoryStore, ThemeStore, THEME_KEY};
