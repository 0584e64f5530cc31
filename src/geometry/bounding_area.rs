use std::{
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// 北東と南西の2つの対角点で定義される、緯度経度に沿った矩形領域。
///
/// 南東・北西の角は生成時に2つの対角点から求め、以後変更されない。
/// 等価性とハッシュは北東・南西の2点のみで判定する。
///
/// 南西の経度が北東の経度より大きい場合、領域は経度 ±180° の境界を
/// またいでいるものとして扱う。
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Corners", into = "Corners"))]
pub struct BoundingArea {
    north_east: Point,
    south_west: Point,
    south_east: Point,
    north_west: Point,
}

/// シリアライズ時の表現。派生する角は含めない。
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct Corners {
    north_east: Point,
    south_west: Point,
}

#[cfg(feature = "serde")]
impl From<Corners> for BoundingArea {
    fn from(value: Corners) -> Self {
        BoundingArea::new(value.north_east, value.south_west)
    }
}

#[cfg(feature = "serde")]
impl From<BoundingArea> for Corners {
    fn from(value: BoundingArea) -> Self {
        Corners {
            north_east: value.north_east,
            south_west: value.south_west,
        }
    }
}

impl fmt::Display for BoundingArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingArea{{northEast={}, southWest={}}}",
            self.north_east, self.south_west
        )
    }
}

impl BoundingArea {
    /// 北東・南西の対角点から [`BoundingArea`] を生成する。
    ///
    /// # Examples
    /// ```
    /// # use geocalc::{BoundingArea, Point};
    /// let area = BoundingArea::new(
    ///     Point::from_degrees(10.0, 20.0),
    ///     Point::from_degrees(-10.0, -20.0),
    /// );
    ///
    /// assert_eq!(area.south_east(), Point::from_degrees(-10.0, 20.0));
    /// assert_eq!(area.north_west(), Point::from_degrees(10.0, -20.0));
    /// ```
    pub fn new(north_east: Point, south_west: Point) -> Self {
        let south_east = Point::new(south_west.latitude(), north_east.longitude());
        let north_west = Point::new(north_east.latitude(), south_west.longitude());

        Self {
            north_east,
            south_west,
            south_east,
            north_west,
        }
    }

    /// 北東の角を返す。
    pub fn north_east(&self) -> Point {
        self.north_east
    }

    /// 南西の角を返す。
    pub fn south_west(&self) -> Point {
        self.south_west
    }

    /// 南東の角を返す。
    pub fn south_east(&self) -> Point {
        self.south_east
    }

    /// 北西の角を返す。
    pub fn north_west(&self) -> Point {
        self.north_west
    }

    #[deprecated(note = "use `north_east()` instead")]
    pub fn top_left(&self) -> Point {
        log::debug!("top_left() is deprecated. Use north_east() instead.");
        self.north_east
    }

    #[deprecated(note = "use `south_west()` instead")]
    pub fn bottom_right(&self) -> Point {
        log::debug!("bottom_right() is deprecated. Use south_west() instead.");
        self.south_west
    }

    /// 指定した地点がこの領域に含まれるかを判定する。
    ///
    /// 境界上の点は含まれるものとする。南西の経度が北東の経度より大きい場合は、
    /// 経度方向を `[-180, 北東]` と `[南西, 180]` の2つの範囲に分割し、
    /// いずれか一方に含まれれば良い。
    ///
    /// # Examples
    /// ```
    /// # use geocalc::{BoundingArea, Point};
    /// // 経度 ±180° をまたぐ領域
    /// let area = BoundingArea::new(
    ///     Point::from_degrees(10.0, -170.0),
    ///     Point::from_degrees(-10.0, 170.0),
    /// );
    ///
    /// assert!(area.contains(&Point::from_degrees(0.0, 179.5)));
    /// assert!(area.contains(&Point::from_degrees(0.0, -179.5)));
    /// assert!(!area.contains(&Point::from_degrees(0.0, 0.0)));
    /// ```
    pub fn contains(&self, point: &Point) -> bool {
        let lat = point.as_latitude();
        let lon = point.as_longitude();

        let within_latitude =
            lat >= self.south_west.as_latitude() && lat <= self.north_east.as_latitude();
        if !within_latitude {
            return false;
        }

        let west = self.south_west.as_longitude();
        let east = self.north_east.as_longitude();

        if west > east {
            (lon <= east && lon >= -180.0) || (lon >= west && lon <= 180.0)
        } else {
            lon >= west && lon <= east
        }
    }
}

impl PartialEq for BoundingArea {
    fn eq(&self, other: &Self) -> bool {
        self.north_east == other.north_east && self.south_west == other.south_west
    }
}

impl Eq for BoundingArea {}

impl Hash for BoundingArea {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.north_east.hash(state);
        self.south_west.hash(state);
    }
}
