//! The input record: one time interval at one location.

use crate::{LatLng, SthError, SthResult};

/// A time interval (Unix seconds, inclusive) spent at a single coordinate.
///
/// Invariant: `begin <= end`.  The record is caller-owned; nothing in the
/// toolkit mutates it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacetimeRecord {
    pub begin: i64,
    pub end:   i64,
    pub lat:   f64,
    pub lng:   f64,
}

impl SpacetimeRecord {
    #[inline]
    pub fn new(begin: i64, end: i64, location: LatLng) -> Self {
        Self { begin, end, lat: location.lat, lng: location.lng }
    }

    #[inline]
    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Check `begin <= end` and that both coordinates are finite.
    pub fn validate(&self) -> SthResult<()> {
        if self.begin > self.end {
            return Err(SthError::InvalidArgument(format!(
                "record begins after it ends: begin {} > end {}",
                self.begin, self.end
            )));
        }
        self.location().validate()
    }
}
