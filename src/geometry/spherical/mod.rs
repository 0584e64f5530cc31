//! 球面三角法による地点間の計算。
//!
//! 地球を [`EARTH_DIAMETER`] の大きさを持つ球とみなして計算する（楕円体ではない）。
//! 入力値の検証は行わず、範囲外の値や NaN は計算結果にそのまま伝播する。
//!
//! 方位角は北を 0° として時計回りに増加する度の値で扱う。

use std::f64::consts::PI;

use crate::geometry::{
    bounding_area::BoundingArea,
    constants::{EARTH_DIAMETER, POLE_EPSILON},
    point::Point,
};

#[cfg(test)]
mod tests;

/// 2地点間の大圏距離をメートル単位で返す。
///
/// 球面に対する Vincenty の公式を用いる。
/// 同一地点同士の距離は厳密に `0.0` になる。
///
/// # Examples
/// ```
/// # use geocalc::{Point, distance};
/// let kew = Point::from_degrees(51.4843774, -0.2912044);
/// let richmond = Point::from_degrees(51.4613418, -0.3035466);
///
/// assert!((distance(&kew, &richmond) - 2700.326).abs() < 1e-2);
/// assert_eq!(distance(&kew, &kew), 0.0);
/// ```
pub fn distance(stand_point: &Point, fore_point: &Point) -> f64 {
    let diff_lon = (fore_point.as_longitude() - stand_point.as_longitude()).to_radians();

    let stand_lat = stand_point.as_latitude().to_radians();
    let fore_lat = fore_point.as_latitude().to_radians();

    let y = ((fore_lat.cos() * diff_lon.sin()).powi(2)
        + (stand_lat.cos() * fore_lat.sin() - stand_lat.sin() * fore_lat.cos() * diff_lon.cos())
            .powi(2))
    .sqrt();
    let x = stand_lat.sin() * fore_lat.sin() + stand_lat.cos() * fore_lat.cos() * diff_lon.cos();

    // atan2 ではなく atan を用いる（中心角が 90° を超えると負になる）
    let central_angle = (y / x).atan();

    EARTH_DIAMETER * central_angle
}

/// `stand_point` から方位角 `bearing`（度）の方向へ `distance`（メートル）進んだ地点を返す。
///
/// 到達点が極（`|cos(緯度)| < POLE_EPSILON`）の場合、経度は定まらないため
/// 出発点の経度をそのまま用いる。
/// `distance` が `0.0` の場合は、方位角に関わらず出発点と（誤差の範囲で）同じ地点を返す。
///
/// # Examples
/// ```
/// # use geocalc::{Point, point_radial_distance};
/// let kew = Point::from_degrees(51.4843774, -0.2912044);
/// let same = point_radial_distance(&kew, 90.0, 0.0);
///
/// assert!((same.as_latitude() - kew.as_latitude()).abs() < 1e-10);
/// assert!((same.as_longitude() - kew.as_longitude()).abs() < 1e-10);
/// ```
pub fn point_radial_distance(stand_point: &Point, bearing: f64, distance: f64) -> Point {
    let lat1 = stand_point.as_latitude().to_radians();
    let lon1 = stand_point.as_longitude().to_radians();
    let rbearing = bearing.to_radians();
    // 距離を中心角へ換算
    let rdistance = distance / EARTH_DIAMETER;

    let lat = (lat1.sin() * rdistance.cos() + lat1.cos() * rdistance.sin() * rbearing.cos()).asin();

    let lon = if lat.cos().abs() < POLE_EPSILON {
        log::trace!("destination is at a pole, keeping longitude {lon1} rad");
        lon1
    } else {
        ((lon1 - (rbearing.sin() * rdistance.sin() / lat.cos()).asin() + PI) % (2.0 * PI)) - PI
    };

    Point::from_radians(lat, lon)
}

/// `stand_point` から `fore_point` を見た方位角を度で返す。
///
/// 戻り値は常に `[0, 360)` の範囲に収まる。
/// 2地点が同一の場合の値は定義しない。
///
/// # Examples
/// ```
/// # use geocalc::{Point, bearing, point_radial_distance};
/// let kew = Point::from_degrees(51.4843774, -0.2912044);
/// let fore = point_radial_distance(&kew, 30.0, 10_000.0);
///
/// assert!((bearing(&kew, &fore) - 30.0).abs() < 1e-10);
/// ```
pub fn bearing(stand_point: &Point, fore_point: &Point) -> f64 {
    let lat1 = stand_point.as_latitude().to_radians();
    let lat2 = fore_point.as_latitude().to_radians();
    let diff_lon = (fore_point.as_longitude() - stand_point.as_longitude()).to_radians();

    // fore_point 側から見た stand_point の角度。符号を反転して用いる
    let inverted = (diff_lon.sin() * lat2.cos())
        .atan2(lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * diff_lon.cos());

    ((-inverted + 2.0 * PI) % (2.0 * PI)).to_degrees()
}

/// `stand_point` を中心とし、半径 `distance`（メートル）の円を囲む [`BoundingArea`] を返す。
///
/// 方位角 45° の到達点を北東、225° の到達点を南西の角とする。
///
/// # Examples
/// ```
/// # use geocalc::{Point, bounding_area, distance};
/// let kew = Point::from_degrees(51.4843774, -0.2912044);
/// let area = bounding_area(&kew, 3000.0);
///
/// assert!((distance(&kew, &area.north_east()) - 3000.0).abs() < 1e-3);
/// assert!((distance(&kew, &area.south_west()) - 3000.0).abs() < 1e-3);
/// ```
pub fn bounding_area(stand_point: &Point, distance: f64) -> BoundingArea {
    let north_east = point_radial_distance(stand_point, 45.0, distance);
    let south_west = point_radial_distance(stand_point, 225.0, distance);

    BoundingArea::new(north_east, south_west)
}
