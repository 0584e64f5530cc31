#[cfg(test)]
mod tests {
    use crate::geometry::{
        point::Point,
        spherical::{
            bearing, point_radial_distance,
            tests::{angle_diff, kew},
        },
    };
    use proptest::prelude::*;

    #[test]
    fn test_bearing() {
        let kew = kew();

        for i in 0..=360 {
            let fore = point_radial_distance(&kew, i as f64, 10_000.0);
            let b = bearing(&kew, &fore);

            // 360° は 0° として返る
            assert!(
                (b - (i % 360) as f64).abs() < 1e-10,
                "bearing {i}: got {b}"
            );
        }
    }

    #[test]
    fn test_due_north_and_south() {
        let origin = Point::from_degrees(10.0, 20.0);

        assert_eq!(bearing(&origin, &Point::from_degrees(11.0, 20.0)), 0.0);
        assert!((bearing(&origin, &Point::from_degrees(9.0, 20.0)) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_nan_propagates() {
        let nan = Point::from_degrees(f64::NAN, 0.0);
        assert!(bearing(&kew(), &nan).is_nan());
        assert!(bearing(&nan, &kew()).is_nan());
    }

    proptest! {
        #[test]
        fn random_test_range(a in Point::arb(), b in Point::arb()) {
            let bearing = bearing(&a, &b);

            prop_assert!((0.0..360.0).contains(&bearing), "{}", bearing);
        }

        #[test]
        fn random_test_radial_roundtrip(
            a in Point::arb_within(-80.0..=80.0, -179.0..=179.0),
            theta in 0.0..360.0_f64,
            d in 10_000.0..100_000.0_f64,
        ) {
            let fore = point_radial_distance(&a, theta, d);
            let recovered = bearing(&a, &fore);

            prop_assert!(angle_diff(recovered, theta) < 1e-10, "{} != {}", recovered, theta);
        }
    }
}
