#[cfg(test)]
mod tests {
    use crate::geometry::{
        constants::EARTH_DIAMETER,
        point::Point,
        spherical::{
            bearing, distance, point_radial_distance,
            tests::{kew, richmond},
        },
    };
    use proptest::prelude::*;

    #[test]
    fn test_point_radial_distance_zero() {
        let kew = kew();

        for b in [45.0, 90.0, 180.0] {
            let same = point_radial_distance(&kew, b, 0.0);
            assert!((same.as_latitude() - kew.as_latitude()).abs() < 1e-10);
            assert!((same.as_longitude() - kew.as_longitude()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_point_radial_distance() {
        let kew = kew();
        let richmond = richmond();

        let d = distance(&kew, &richmond);
        let b = bearing(&kew, &richmond);
        let alleged = point_radial_distance(&kew, b, d);

        assert!((alleged.as_latitude() - richmond.as_latitude()).abs() < 1e-5);
        assert!((alleged.as_longitude() - richmond.as_longitude()).abs() < 1e-5);
    }

    #[test]
    fn test_destination_at_pole_keeps_longitude() {
        let origin = Point::from_degrees(0.0, 30.0);
        let quarter = EARTH_DIAMETER * 90.0_f64.to_radians();

        let pole = point_radial_distance(&origin, 0.0, quarter);

        assert!((pole.as_latitude() - 90.0).abs() < 1e-12);
        assert!((pole.as_longitude() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_is_not_wrapped_below_antimeridian() {
        // 経度の正規化は行わないため -180° を下回る値がそのまま返る
        let origin = Point::from_degrees(0.0, -179.99);
        let fore = point_radial_distance(&origin, 90.0, 10_000.0);

        assert!(fore.as_latitude().abs() < 1e-12);
        assert!((fore.as_longitude() + 180.07993201943347).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_propagates() {
        let nan = Point::from_degrees(f64::NAN, 0.0);
        assert!(point_radial_distance(&nan, 45.0, 1000.0).as_latitude().is_nan());

        let fore = point_radial_distance(&kew(), f64::NAN, 1000.0);
        assert!(fore.as_latitude().is_nan());
        assert!(fore.as_longitude().is_nan());

        let fore = point_radial_distance(&kew(), 45.0, f64::INFINITY);
        assert!(fore.as_latitude().is_nan());
    }

    proptest! {
        #[test]
        fn random_test_zero_distance_identity(
            a in Point::arb_within(-80.0..=80.0, -179.0..=179.0),
            theta in 0.0..360.0_f64,
        ) {
            let same = point_radial_distance(&a, theta, 0.0);

            prop_assert!((same.as_latitude() - a.as_latitude()).abs() < 1e-10);
            prop_assert!((same.as_longitude() - a.as_longitude()).abs() < 1e-10);
        }

        #[test]
        fn random_test_inverse_consistency(
            a in Point::arb_within(-80.0..=80.0, -179.0..=179.0),
            theta in 0.0..360.0_f64,
            d in 10_000.0..100_000.0_f64,
        ) {
            let b = point_radial_distance(&a, theta, d);
            let alleged = point_radial_distance(&a, bearing(&a, &b), distance(&a, &b));

            prop_assert!((alleged.as_latitude() - b.as_latitude()).abs() < 1e-5);
            prop_assert!((alleged.as_longitude() - b.as_longitude()).abs() < 1e-5);
        }
    }
}
