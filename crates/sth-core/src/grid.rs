//! Coordinate quantization and perimeter enumeration.
//!
//! # Grid model
//!
//! A precision `p` defines a square grid of step `10^p` degrees on both
//! axes.  Steps are equal in degrees, not metres, so cells shrink
//! east-west toward the poles; this is a known simplification and every
//! token set in circulation depends on it.
//!
//! Instead of hashing the single cell a point falls into, the hasher hashes
//! the ring of cells at Chebyshev distance `spread_out` around it (an
//! "empty square").  Two parties whose centers are up to `2 * spread_out`
//! cells apart then still share at least one ring point.
//!
//! ```text
//! spread_out = 1          spread_out = 2
//!
//!   x x x                 x x x x x
//!   x . x                 x . . . x
//!   x x x                 x . c . x
//!                         x . . . x
//!                         x x x x x
//! ```

use crate::buf::try_with_capacity;
use crate::{LatLng, SthError, SthResult};

// ── QuantizedPoint ────────────────────────────────────────────────────────────

/// A grid-aligned center plus the cell size it was aligned to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuantizedPoint {
    pub lat:      f64,
    pub lng:      f64,
    pub lat_step: f64,
    pub lng_step: f64,
}

impl QuantizedPoint {
    #[inline]
    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Shorthand for [`enumerate_perimeter`].
    #[inline]
    pub fn perimeter(&self, spread_out: u32) -> SthResult<Vec<LatLng>> {
        enumerate_perimeter(self, spread_out)
    }
}

// ── Quantization ──────────────────────────────────────────────────────────────

/// Grid step in degrees for `precision`: `10^precision`.
///
/// Negative exponents are computed as `1 / 10^-p` so that `-3` yields the
/// double nearest to `0.001` rather than an accumulated product.
///
/// # Errors
/// [`SthError::InvalidArgument`] when the step overflows to infinity or
/// underflows to zero.
pub fn grid_step(precision: i32) -> SthResult<f64> {
    let step = if precision < 0 {
        1.0 / 10f64.powi(precision.saturating_neg())
    } else {
        10f64.powi(precision)
    };
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(SthError::InvalidArgument(format!(
            "latlng_precision {precision} gives an unrepresentable grid step"
        )))
    }
}

/// Quantize a coordinate pair onto the `10^precision` grid.
///
/// Each coordinate is truncated toward zero at the digit position given by
/// `precision`; all later digits become zero (`-3`: `25.123456 → 25.123`).
/// Re-quantizing a quantized value at the same precision returns it
/// unchanged.
///
/// # Errors
/// [`SthError::InvalidArgument`] for non-finite input or an unrepresentable
/// step (see [`grid_step`]).
pub fn quantify_lat_lng(lat: f64, lng: f64, precision: i32) -> SthResult<QuantizedPoint> {
    LatLng::new(lat, lng).validate()?;
    let step = grid_step(precision)?;

    Ok(QuantizedPoint {
        lat:      truncate_degrees(lat, precision)?,
        lng:      truncate_degrees(lng, precision)?,
        lat_step: step,
        lng_step: step,
    })
}

/// Zero every decimal digit of `value` finer than `10^precision`.
///
/// Works on the shortest round-trip decimal expansion (`f64`'s `Display`,
/// which never switches to exponent notation) so the result is exactly the
/// double a reader would get from the truncated decimal text.  Arithmetic
/// truncation (`(x * 1000).trunc() / 1000`) is not idempotent: `1.001 * 1000`
/// evaluates to `1000.9999999999999`.
fn truncate_degrees(value: f64, precision: i32) -> SthResult<f64> {
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let truncated = if precision < 0 {
        let keep = (precision.unsigned_abs() as usize).min(frac_part.len());
        if keep == 0 {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{}", &frac_part[..keep])
        }
    } else {
        let zeros = precision as usize;
        if zeros >= int_part.len() {
            return Ok(0.0);
        }
        format!("{sign}{}{}", &int_part[..int_part.len() - zeros], "0".repeat(zeros))
    };

    truncated
        .parse::<f64>()
        .map_err(|e| SthError::InvalidArgument(format!("cannot truncate {value}: {e}")))
}

// ── Perimeter ─────────────────────────────────────────────────────────────────

/// List the boundary points of the square of half-width `spread_out` cells
/// around `point`.
///
/// Order:
///
/// 1. bottom/top rows, west to east, each column emitting
///    `(lat - s·Δlat, lng + i·Δlng)` then `(lat + s·Δlat, lng + i·Δlng)`;
/// 2. west/east columns without the corners, north to south, each row
///    emitting `(lat + i·Δlat, lng - s·Δlng)` then `(lat + i·Δlat, lng + s·Δlng)`.
///
/// Yields `8 * spread_out` points for `spread_out >= 1`.  For
/// `spread_out == 0` the two rows coincide and the center is emitted twice;
/// existing token sets contain that duplicate, so it is kept.
///
/// The expression shapes above are load-bearing: tokens hash the decimal
/// text of each coordinate, so `lat + i * step` must not be rewritten as,
/// say, `(q + i) * step`.
///
/// # Errors
/// [`SthError::InvalidArgument`] if the ring cannot be allocated.
pub fn enumerate_perimeter(point: &QuantizedPoint, spread_out: u32) -> SthResult<Vec<LatLng>> {
    let s = i64::from(spread_out);
    let lat_offset = s as f64 * point.lat_step;
    let lng_offset = s as f64 * point.lng_step;

    let capacity = if s == 0 { 2 } else { 8 * s as usize };
    let mut out = try_with_capacity(capacity, "perimeter")?;

    for lng_i in -s..=s {
        let lng = point.lng + lng_i as f64 * point.lng_step;
        out.push(LatLng::new(point.lat - lat_offset, lng));
        out.push(LatLng::new(point.lat + lat_offset, lng));
    }

    for lat_i in (-(s - 1)..=s - 1).rev() {
        let lat = point.lat + lat_i as f64 * point.lat_step;
        out.push(LatLng::new(lat, point.lng - lng_offset));
        out.push(LatLng::new(lat, point.lng + lng_offset));
    }

    Ok(out)
}
