use crate::geometry::point::Point;

pub mod bearing;
pub mod radial;

/// Kew（ロンドン南西部）
pub fn kew() -> Point {
    Point::from_degrees(51.4843774, -0.2912044)
}

/// Richmond（Kew の南西約 2.7 km）
pub fn richmond() -> Point {
    Point::from_degrees(51.4613418, -0.3035466)
}

/// 2つの方位角の差を `[0, 180]` の範囲で返す
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
