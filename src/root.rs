//! The page root element and its dark-mode flag class.

use std::collections::BTreeSet;

/// The class toggled on the root element when the effective theme is dark.
/// Downstream styling keys off this class.
pub const DARK_CLASS: &str = "dark";

/// The document root element, modeled as its class list.
///
/// Class operations are idempotent: adding a class already present or
/// removing one already absent is a no-op, so repeated applications of the
/// same theme leave the root unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: BTreeSet<String>,
}

impl RootElement {
    /// Creates a root with an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class to the root.
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Removes a class from the root.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Whether the root currently carries the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Whether the dark-mode flag is set.
    pub fn is_dark(&self) -> bool {
        self.has_class(DARK_CLASS)
    }

    /// Sets or clears the dark-mode flag.
    pub fn set_dark(&mut self, dark: bool) {
        if dark {
            self.add_class(DARK_CLASS);
        } else {
            self.remove_class(DARK_CLASS);
        }
    }

    /// Renders the class list as a `class` attribute value, for hosts that
    /// serialize the root back into markup.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
