//! Color mode domain type and effective-theme resolution.

use serde::{Deserialize, Serialize};

/// The user's preferred color mode.
///
/// Serializes as the lowercase wire strings `"light"` and `"dark"`, which are
/// also the values stored under the persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// The wire string for this mode, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ParseColorModeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError {
    /// The rejected input.
    pub value: String,
}

impl std::fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is not a color mode (expected 'light' or 'dark')",
            self.value
        )
    }
}

impl std::error::Error for ParseColorModeError {}

/// The raw state of the persisted preference.
///
/// Distinguishes "key absent" from "key present but not a recognized mode":
/// only an absent key falls back to the environment signal. A present value
/// that isn't `"dark"` renders light, whatever the environment says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoredPreference {
    /// No preference has been persisted (or storage is unavailable).
    #[default]
    Unset,
    /// A recognized mode is stored.
    Mode(ColorMode),
    /// Something is stored under the key, but it is not a mode.
    Unrecognized,
}

impl StoredPreference {
    /// Classifies a raw stored string.
    pub fn from_value(value: &str) -> Self {
        value
            .parse()
            .map(StoredPreference::Mode)
            .unwrap_or(StoredPreference::Unrecognized)
    }

    /// The stored mode, if one is present and recognized.
    pub fn mode(self) -> Option<ColorMode> {
        match self {
            StoredPreference::Mode(mode) => Some(mode),
            _ => None,
        }
    }
}

/// Resolves the effective color mode from the persisted preference and the
/// environment signal.
///
/// A stored mode wins outright. The environment is consulted only when the
/// preference is unset; a present-but-unrecognized value resolves light.
/// This is the single place the fallback rule lives, so every trigger path
/// applies the same resolution.
///
/// # Example
///
/// ```rust
/// use nightswitch::{effective_mode, ColorMode, StoredPreference};
///
/// assert_eq!(
///     effective_mode(StoredPreference::Mode(ColorMode::Light), ColorMode::Dark),
///     ColorMode::Light
/// );
/// assert_eq!(
///     effective_mode(StoredPreference::Unset, ColorMode::Dark),
///     ColorMode::Dark
/// );
/// assert_eq!(
///     effective_mode(StoredPreference::Unrecognized, ColorMode::Dark),
///     ColorMode::Light
/// );
/// ```
pub fn effective_mode(stored: StoredPreference, environment: ColorMode) -> ColorMode {
    match stored {
        StoredPreference::Mode(mode) => mode,
        StoredPreference::Unset => environment,
        StoredPreference::Unrecognized => ColorMode::Light,
    }
}
