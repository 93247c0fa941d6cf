//! Brightness intensity on the vendor's scale.

use serde::Serialize;
use serde_json::Value;

/// Brightness level, always within the vendor's transmittable range.
///
/// Out-of-range integers are silently clamped to the nearest bound; only
/// input that cannot be read as an integer at all is rejected, and that
/// decision is the caller's (`from_parameter` returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Intensity(i64);

impl Intensity {
    /// Lowest level the device accepts.
    pub const MIN: i64 = 10;

    /// Highest level the device accepts.
    pub const MAX: i64 = 1000;

    /// Clamp a raw integer to the transmittable range.
    pub fn clamp(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    /// Interpret a webhook parameter as an intensity.
    ///
    /// The conversational agent delivers numeric parameters either as JSON
    /// numbers or as digit strings; both are accepted, and fractional
    /// numbers truncate toward zero. Anything else is unreadable and
    /// returns `None`.
    pub fn from_parameter(value: &Value) -> Option<Self> {
        let raw = match value {
            Value::String(s) => s.trim().parse::<i64>().ok()?,
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
            _ => return None,
        };
        Some(Self::clamp(raw))
    }

    /// The clamped level.
    pub fn value(&self) -> i64 {
        self.0
    }
}
