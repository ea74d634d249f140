//! Unit tests for sth-core primitives.

#[cfg(test)]
mod time {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{SthError, quantify_duration};

    #[test]
    fn golden_vector() {
        assert_eq!(quantify_duration(123, 601, 10).unwrap(), vec![0, 600, 1200]);
    }

    #[test]
    fn aligned_instant_yields_one_point() {
        assert_eq!(quantify_duration(600, 600, 10).unwrap(), vec![600]);
    }

    #[test]
    fn unaligned_instant_yields_two_points() {
        assert_eq!(quantify_duration(601, 601, 10).unwrap(), vec![600, 1200]);
    }

    #[test]
    fn negative_timestamps_floor_toward_negative_infinity() {
        assert_eq!(quantify_duration(-1, -1, 1).unwrap(), vec![-60, 0]);
        assert_eq!(quantify_duration(-120, -61, 1).unwrap(), vec![-120, -60]);
    }

    #[test]
    fn zero_step_is_invalid() {
        assert!(matches!(
            quantify_duration(0, 10, 0),
            Err(SthError::InvalidArgument(_))
        ));
    }

    #[test]
    fn reversed_interval_is_invalid() {
        assert!(matches!(
            quantify_duration(601, 123, 10),
            Err(SthError::InvalidArgument(_))
        ));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        assert!(quantify_duration(i64::MAX - 1, i64::MAX, 10).is_err());
    }

    #[test]
    fn unallocatable_interval_is_invalid_not_abort() {
        // ~1.3e17 buckets; the buffer alone would be ~1 EiB.
        assert!(matches!(
            quantify_duration(-4_000_000_000_000_000_000, 4_000_000_000_000_000_000, 1),
            Err(SthError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_intervals_are_covered_with_constant_stride() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let begin: i64 = rng.gen_range(-2_000_000_000..2_000_000_000);
            let end = begin + rng.gen_range(0..86_400 * 3);
            let minutes: u32 = rng.gen_range(1..=180);
            let step = i64::from(minutes) * 60;

            let ts = quantify_duration(begin, end, minutes).unwrap();
            let first = ts[0];
            let last = *ts.last().unwrap();

            assert!(first <= begin && begin - first < step, "begin {begin} first {first}");
            assert!(last >= end && last - end < step, "end {end} last {last}");
            assert_eq!(first.rem_euclid(step), 0);
            assert!(ts.windows(2).all(|w| w[1] - w[0] == step));
        }
    }
}

#[cfg(test)]
mod grid {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{LatLng, QuantizedPoint, SthError, enumerate_perimeter, grid_step, quantify_lat_lng};

    fn golden_center() -> QuantizedPoint {
        quantify_lat_lng(25.123456, 122.123000, -3).unwrap()
    }

    #[test]
    fn golden_vector() {
        let q = quantify_lat_lng(25.123456, 122.123456, -3).unwrap();
        assert_eq!(q.lat, 25.123);
        assert_eq!(q.lng, 122.123);
        assert_eq!(q.lat_step, 0.001);
        assert_eq!(q.lng_step, 0.001);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        let q = quantify_lat_lng(25.1239999, 122.9999, -3).unwrap();
        assert_eq!(q.lat, 25.123);
        assert_eq!(q.lng, 122.999);
    }

    #[test]
    fn negative_coordinates_truncate_toward_zero() {
        let q = quantify_lat_lng(-25.123456, -0.0009, -3).unwrap();
        assert_eq!(q.lat, -25.123);
        assert_eq!(q.lng, 0.0);
    }

    #[test]
    fn positive_precision_zeroes_integer_digits() {
        let q = quantify_lat_lng(87.5, -179.9, 1).unwrap();
        assert_eq!((q.lat, q.lng), (80.0, -170.0));
        assert_eq!(q.lat_step, 10.0);

        let q = quantify_lat_lng(5.5, 9.99, 1).unwrap();
        assert_eq!((q.lat, q.lng), (0.0, 0.0));
    }

    #[test]
    fn zero_precision_drops_fraction() {
        let q = quantify_lat_lng(25.9, -121.1, 0).unwrap();
        assert_eq!((q.lat, q.lng, q.lat_step), (25.0, -121.0, 1.0));
    }

    #[test]
    fn short_values_pass_through() {
        let q = quantify_lat_lng(25.1, 121.0, -5).unwrap();
        assert_eq!((q.lat, q.lng), (25.1, 121.0));
    }

    #[test]
    fn non_finite_is_invalid() {
        for (lat, lng) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            assert!(matches!(
                quantify_lat_lng(lat, lng, -3),
                Err(SthError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn unrepresentable_step_is_invalid() {
        assert!(grid_step(400).is_err());
        assert!(grid_step(-400).is_err());
        assert_eq!(grid_step(-7).unwrap(), 1e-7);
        assert_eq!(grid_step(3).unwrap(), 1000.0);
    }

    #[test]
    fn quantization_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let lat: f64 = rng.gen_range(-90.0..90.0);
            let lng: f64 = rng.gen_range(-180.0..180.0);
            let p: i32 = rng.gen_range(-8..=2);

            let once = quantify_lat_lng(lat, lng, p).unwrap();
            let twice = quantify_lat_lng(once.lat, once.lng, p).unwrap();
            assert_eq!(once, twice, "lat {lat} lng {lng} precision {p}");
        }
    }

    #[test]
    fn golden_perimeter_order() {
        let pts = enumerate_perimeter(&golden_center(), 1).unwrap();
        let expected = [
            (25.122, 122.122),
            (25.124000000000002, 122.122),
            (25.122, 122.123),
            (25.124000000000002, 122.123),
            (25.122, 122.12400000000001),
            (25.124000000000002, 122.12400000000001),
            (25.123, 122.122),
            (25.123, 122.12400000000001),
        ];
        let got: Vec<(f64, f64)> = pts.iter().map(|p| (p.lat, p.lng)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn perimeter_has_eight_points_per_ring() {
        let c = golden_center();
        for s in 1..=6 {
            assert_eq!(enumerate_perimeter(&c, s).unwrap().len(), 8 * s as usize);
        }
    }

    #[test]
    fn zero_spread_duplicates_center() {
        let c = golden_center();
        let pts = enumerate_perimeter(&c, 0).unwrap();
        assert_eq!(pts, vec![c.center(), c.center()]);
    }

    #[test]
    fn perimeter_points_are_distinct_and_on_the_ring() {
        let c = golden_center();
        for s in 1..=4u32 {
            let cells: Vec<(i64, i64)> = enumerate_perimeter(&c, s)
                .unwrap()
                .iter()
                .map(|p: &LatLng| {
                    (
                        ((p.lat - c.lat) / c.lat_step).round() as i64,
                        ((p.lng - c.lng) / c.lng_step).round() as i64,
                    )
                })
                .collect();

            for &(di, dj) in &cells {
                assert_eq!(di.abs().max(dj.abs()), i64::from(s), "cell ({di}, {dj})");
            }
            let mut dedup = cells.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), cells.len());
        }
    }
}

#[cfg(test)]
mod geo {
    use crate::{LatLng, SthError};

    #[test]
    fn parses_comma_separated() {
        let p: LatLng = "25.03,121.56".parse().unwrap();
        assert_eq!(p, LatLng::new(25.03, 121.56));
    }

    #[test]
    fn parses_semicolon_and_whitespace() {
        assert_eq!("25.03; 121.56".parse::<LatLng>().unwrap(), LatLng::new(25.03, 121.56));
        assert_eq!("  -33.9  151.2 ".parse::<LatLng>().unwrap(), LatLng::new(-33.9, 151.2));
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        for s in ["25.03", "1,2,3", "north,east", ""] {
            assert!(matches!(s.parse::<LatLng>(), Err(SthError::Parse(_))), "{s:?}");
        }
    }

    #[test]
    fn from_pair() {
        assert_eq!(LatLng::from((1.5, -2.5)), LatLng::new(1.5, -2.5));
    }

    #[test]
    fn validate_finite() {
        assert!(LatLng::new(0.0, 0.0).validate().is_ok());
        assert!(LatLng::new(f64::NAN, 0.0).validate().is_err());
    }
}

#[cfg(test)]
mod record {
    use crate::{LatLng, SpacetimeRecord, SthError};

    #[test]
    fn valid_record() {
        let r = SpacetimeRecord::new(100, 700, LatLng::new(25.1, 121.5));
        assert!(r.validate().is_ok());
        assert_eq!(r.location(), LatLng::new(25.1, 121.5));
    }

    #[test]
    fn reversed_interval_rejected() {
        let r = SpacetimeRecord { begin: 700, end: 100, lat: 0.0, lng: 0.0 };
        assert!(matches!(r.validate(), Err(SthError::InvalidArgument(_))));
    }

    #[test]
    fn non_finite_location_rejected() {
        let r = SpacetimeRecord { begin: 0, end: 0, lat: 0.0, lng: f64::NAN };
        assert!(matches!(r.validate(), Err(SthError::InvalidArgument(_))));
    }
}

#[cfg(test)]
mod config {
    use crate::{HashConfig, SthError};

    #[test]
    fn valid_config() {
        let c = HashConfig::new("abc", 10, -3, 1);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_key_is_configuration_error() {
        let c = HashConfig::new("", 10, -3, 1);
        assert!(matches!(c.validate(), Err(SthError::Configuration(_))));
    }

    #[test]
    fn zero_step_is_invalid() {
        let c = HashConfig::new("abc", 0, -3, 1);
        assert!(matches!(c.validate(), Err(SthError::InvalidArgument(_))));
    }

    #[test]
    fn debug_redacts_key() {
        let c = HashConfig::new("hunter2", 10, -3, 1);
        let text = format!("{c:?}");
        assert!(!text.contains("hunter2"));
        assert!(text.contains("time_step_minutes: 10"));
    }

    #[test]
    fn absurd_precision_is_invalid() {
        let c = HashConfig::new("abc", 10, 500, 1);
        assert!(matches!(c.validate(), Err(SthError::InvalidArgument(_))));
    }
}
