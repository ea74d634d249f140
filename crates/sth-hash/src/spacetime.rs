//! Record → token sequence orchestration.

use sth_core::{
    HashConfig, LatLng, SpacetimeRecord, SthError, SthResult, quantify_duration,
    quantify_lat_lng, try_with_capacity,
};

use crate::keyed::KeyedHasher;
use crate::token::HashToken;

/// Hashes records under one fixed [`HashConfig`].
///
/// Construction validates the configuration and keys the HMAC once; every
/// later call only validates the record.
///
/// # Output order
///
/// Timestamp-major: for each quantized timestamp (ascending), one token per
/// perimeter point in [`sth_core::enumerate_perimeter`] order.  The length is
/// always `|timestamps| * |perimeter|`.
#[derive(Clone, Debug)]
pub struct SpacetimeHasher {
    config: HashConfig,
    keyed:  KeyedHasher,
}

impl SpacetimeHasher {
    pub fn new(config: HashConfig) -> SthResult<Self> {
        config.validate()?;
        let keyed = KeyedHasher::new(&config.key)?;
        Ok(Self { config, keyed })
    }

    #[inline]
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Tokens for one record.
    pub fn hash(&self, record: &SpacetimeRecord) -> SthResult<Vec<HashToken>> {
        self.hash_parts(record.begin, record.end, record.lat, record.lng)
    }

    /// Tokens for a record given as loose fields.
    ///
    /// All validation runs before the first HMAC, including reserving the
    /// whole output; on error nothing is produced.
    pub fn hash_parts(&self, begin: i64, end: i64, lat: f64, lng: f64) -> SthResult<Vec<HashToken>> {
        let times = quantify_duration(begin, end, self.config.time_step_minutes)?;
        let center = quantify_lat_lng(lat, lng, self.config.latlng_precision)?;
        let perimeter = center.perimeter(self.config.spread_out)?;

        log::debug!(
            "hashing [{begin}, {end}] at {}: {} timestamps x {} perimeter points",
            center.center(),
            times.len(),
            perimeter.len(),
        );

        let mut out = try_with_capacity(grid_len(times.len(), perimeter.len())?, "token sequence")?;
        self.hash_grid(&times, &perimeter, &mut out);
        Ok(out)
    }

    fn hash_grid(&self, times: &[i64], perimeter: &[LatLng], out: &mut Vec<HashToken>) {
        #[cfg(not(feature = "parallel"))]
        {
            for &t in times {
                for p in perimeter {
                    out.push(self.keyed.hash(t, p.lat, p.lng));
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed extend keeps the sequential order.
            let width = perimeter.len();
            out.par_extend((0..times.len() * width).into_par_iter().map(|i| {
                let p = perimeter[i % width];
                self.keyed.hash(times[i / width], p.lat, p.lng)
            }));
        }
    }
}

/// Output length `|timestamps| * |perimeter|`, or an error when it does not
/// fit in `usize`.
pub(crate) fn grid_len(times: usize, width: usize) -> SthResult<usize> {
    times.checked_mul(width).ok_or_else(|| {
        SthError::InvalidArgument(format!(
            "{times} timestamps x {width} perimeter points overflows the output length"
        ))
    })
}

/// One-shot form of [`SpacetimeHasher`]: validate, quantize, and hash a
/// single record.
///
/// ```rust,ignore
/// let tokens = hash_spacetime("abc", 100, 700, 25.123456, 122.123, 10, -3, 1)?;
/// assert_eq!(tokens.len(), 24);
/// assert_eq!(tokens[0].to_string(), "4bc38a6e7d6ff3b1");
/// ```
#[allow(clippy::too_many_arguments)]
pub fn hash_spacetime(
    key:               &str,
    begin:             i64,
    end:               i64,
    lat:               f64,
    lng:               f64,
    time_step_minutes: u32,
    latlng_precision:  i32,
    spread_out:        u32,
) -> SthResult<Vec<HashToken>> {
    let config = HashConfig::new(key, time_step_minutes, latlng_precision, spread_out);
    SpacetimeHasher::new(config)?.hash_parts(begin, end, lat, lng)
}
