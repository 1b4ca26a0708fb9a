//! Environment color-scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::mode::ColorMode;

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to read the environment's color-scheme signal.
///
/// This is useful for testing or when the host has its own signal (a terminal
/// luma probe, a browser media query bridge) that should replace OS detection.
/// The override is process-wide.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the environment's current color mode via the installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
