//! Planar coordinate type.
//!
//! The grid is a flat degree lattice, so `Coord` carries raw longitude and
//! latitude in degrees with no geodesic behavior attached.

/// A longitude/latitude pair in decimal degrees (`f64`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both components rounded to `precision` decimal places.
    #[inline]
    pub fn rounded(self, precision: u32) -> Self {
        Self {
            lon: round_to(self.lon, precision),
            lat: round_to(self.lat, precision),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// Round `value` to `precision` decimal places, halves away from zero.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision.min(15) as i32);
    (value * scale).round() / scale
}
