//! Color entries on the vendor's HSV scale.
//!
//! The table of named colors is fixed at process start and never mutated.
//! Unknown names resolve to a defined default entry rather than failing,
//! so color resolution is total.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Color in the vendor's HSV representation.
///
/// Hue ranges over 0-359; saturation and value use the vendor's 0-1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HsvColor {
    pub h: u16,
    pub s: u16,
    pub v: u16,
}

impl HsvColor {
    /// Fallback entry for unknown color names: white at zero saturation.
    pub const DEFAULT: HsvColor = HsvColor { h: 0, s: 0, v: 1000 };

    /// Resolve a color name to its table entry.
    ///
    /// Lookup is case-insensitive. No fuzzy or partial matching; unknown
    /// names return [`HsvColor::DEFAULT`].
    pub fn resolve(name: &str) -> HsvColor {
        COLOR_TABLE
            .get(name.to_lowercase().as_str())
            .copied()
            .unwrap_or(Self::DEFAULT)
    }
}

/// Fixed name → HSV table, defined once at process start.
static COLOR_TABLE: Lazy<HashMap<&'static str, HsvColor>> = Lazy::new(|| {
    HashMap::from([
        ("rojo", HsvColor { h: 0, s: 1000, v: 1000 }),
        ("verde", HsvColor { h: 120, s: 1000, v: 1000 }),
        ("azul", HsvColor { h: 240, s: 1000, v: 1000 }),
        ("amarillo", HsvColor { h: 60, s: 1000, v: 1000 }),
        ("blanco", HsvColor { h: 0, s: 0, v: 1000 }),
        ("morado", HsvColor { h: 280, s: 1000, v: 1000 }),
    ])
});
