//! Duration quantization.
//!
//! # Design
//!
//! An interval `[begin, end]` is widened outward to whole time buckets and
//! every bucket boundary is listed:
//!
//!   first = floor(begin / step) * step
//!   last  = ceil(end / step)   * step
//!   out   = first, first + step, …, last
//!
//! Timestamps are integer seconds, so all bucket arithmetic is exact.  Floor
//! and ceil are mathematical (toward −∞ and +∞) which keeps pre-1970
//! timestamps aligned to the same grid as positive ones.

use crate::buf::try_with_capacity;
use crate::{SthError, SthResult};

/// Quantize `[begin, end]` to `time_step_minutes`-wide buckets.
///
/// The result is strictly increasing with constant stride
/// `time_step_minutes * 60`; its first element is the largest multiple of
/// the stride `<= begin` and its last the smallest multiple `>= end`.  A
/// zero-length interval yields one point when aligned, two otherwise.
///
/// # Errors
/// [`SthError::InvalidArgument`] if `time_step_minutes == 0`, if
/// `begin > end`, if the widened interval does not fit in `i64`, or if the
/// output cannot be allocated.
pub fn quantify_duration(begin: i64, end: i64, time_step_minutes: u32) -> SthResult<Vec<i64>> {
    if time_step_minutes == 0 {
        return Err(SthError::InvalidArgument(
            "time_step_minutes must be positive".into(),
        ));
    }
    if begin > end {
        return Err(SthError::InvalidArgument(format!(
            "interval begins after it ends: begin {begin} > end {end}"
        )));
    }

    let step = i64::from(time_step_minutes) * 60;
    let first = floor_to_step(begin, step).ok_or_else(|| overflow(begin))?;
    let last = ceil_to_step(end, step).ok_or_else(|| overflow(end))?;

    let span = last.checked_sub(first).ok_or_else(|| overflow(end))?;
    let count = usize::try_from(span / step + 1).map_err(|_| overflow(end))?;
    let mut out = try_with_capacity(count, "quantized interval")?;
    out.extend((first..=last).step_by(step as usize));
    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Largest multiple of `step` that is `<= t`.
#[inline]
fn floor_to_step(t: i64, step: i64) -> Option<i64> {
    t.div_euclid(step).checked_mul(step)
}

/// Smallest multiple of `step` that is `>= t`.
#[inline]
fn ceil_to_step(t: i64, step: i64) -> Option<i64> {
    let q = t.div_euclid(step);
    let q = if t.rem_euclid(step) == 0 { q } else { q.checked_add(1)? };
    q.checked_mul(step)
}

fn overflow(t: i64) -> SthError {
    SthError::InvalidArgument(format!("timestamp {t} cannot be aligned without overflow"))
}
