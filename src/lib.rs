//! 球面近似の地球上で、2地点間の距離・方位角、方位と距離から求める到達点、
//! および地点を中心とした外接領域を計算するライブラリ。
//!
//! ```
//! use geocalc::{Point, bearing, bounding_area, distance, point_radial_distance};
//!
//! let kew = Point::from_degrees(51.4843774, -0.2912044);
//! let richmond = Point::from_degrees(51.4613418, -0.3035466);
//!
//! let d = distance(&kew, &richmond);
//! let b = bearing(&kew, &richmond);
//! let alleged = point_radial_distance(&kew, b, d);
//! assert!((alleged.as_latitude() - richmond.as_latitude()).abs() < 1e-5);
//!
//! let area = bounding_area(&kew, 3000.0);
//! assert!(area.north_east().as_latitude() > kew.as_latitude());
//! ```

/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 球面上の地点・領域と、その計算。
mod geometry;

pub use error::Error;
pub use geometry::{
    bounding_area::BoundingArea,
    constants::{EARTH_DIAMETER, POLE_EPSILON},
    coordinate::Coordinate,
    point::Point,
    spherical::{bearing, bounding_area, distance, point_radial_distance},
};
