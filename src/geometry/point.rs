use std::fmt;

#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(any(test, feature = "random"))]
use std::ops::RangeInclusive;

#[cfg(test)]
use proptest::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, geometry::coordinate::Coordinate};

/// 球面上の一地点を表す、緯度と経度の組。
///
/// 緯度と経度は互いに独立しており、組み合わせの妥当性は検証しない。
/// 範囲を検証したい場合は [`Point::try_from_degrees`] を使用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    latitude: Coordinate,
    longitude: Coordinate,
}

impl fmt::Display for Point {
    /// 形式は `"Point{latitude=<緯度>, longitude=<経度>}"`。
    ///
    /// ```
    /// # use geocalc::Point;
    /// let kew = Point::from_degrees(51.4843774, -0.2912044);
    /// assert_eq!(kew.to_string(), "Point{latitude=51.4843774, longitude=-0.2912044}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point{{latitude={}, longitude={}}}",
            self.latitude, self.longitude
        )
    }
}

impl Point {
    /// 緯度・経度の [`Coordinate`] から [`Point`] を生成する。
    ///
    /// # Examples
    /// ```
    /// # use geocalc::{Coordinate, Point};
    /// let kew = Point::new(
    ///     Coordinate::from_degrees(51.4843774),
    ///     Coordinate::from_degrees(-0.2912044),
    /// );
    ///
    /// assert_eq!(kew.as_latitude(), 51.4843774);
    /// assert_eq!(kew.as_longitude(), -0.2912044);
    /// ```
    pub fn new(latitude: Coordinate, longitude: Coordinate) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 度で表された緯度・経度から [`Point`] を生成する。
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(
            Coordinate::from_degrees(latitude),
            Coordinate::from_degrees(longitude),
        )
    }

    /// ラジアンで表された緯度・経度から [`Point`] を生成する。
    pub fn from_radians(latitude: f64, longitude: f64) -> Self {
        Self::new(
            Coordinate::from_radians(latitude),
            Coordinate::from_radians(longitude),
        )
    }

    /// 緯度・経度が有効範囲内かを検証してから [`Point`] を生成する。
    ///
    /// # 引数
    /// * `latitude` - 緯度（度）-90.0..=90.0
    /// * `longitude` - 経度（度）-180.0..=180.0
    ///
    /// # エラー
    /// 値が範囲外、または NaN の場合にエラーを返す
    ///
    /// # Examples
    /// ```
    /// # use geocalc::{Error, Point};
    /// assert!(Point::try_from_degrees(51.4843774, -0.2912044).is_ok());
    /// assert_eq!(
    ///     Point::try_from_degrees(91.0, 0.0),
    ///     Err(Error::LatitudeOutOfRange { latitude: 91.0 })
    /// );
    /// ```
    pub fn try_from_degrees(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange { latitude });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange { longitude });
        }

        Ok(Self::from_degrees(latitude, longitude))
    }

    /// 緯度の [`Coordinate`] を返す。
    pub fn latitude(&self) -> Coordinate {
        self.latitude
    }

    /// 経度の [`Coordinate`] を返す。
    pub fn longitude(&self) -> Coordinate {
        self.longitude
    }

    /// 緯度を度で返す。
    pub fn as_latitude(&self) -> f64 {
        self.latitude.as_degrees()
    }

    /// 経度を度で返す。
    pub fn as_longitude(&self) -> f64 {
        self.longitude.as_degrees()
    }

    /// 地球上の全範囲からランダムな [`Point`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        Self::random_within(-90.0..=90.0, -180.0..=180.0)
    }

    /// 指定された緯度・経度の範囲内でランダムな [`Point`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within(
        latitude: RangeInclusive<f64>,
        longitude: RangeInclusive<f64>,
    ) -> Self {
        let mut rng = rand::rng();
        Self::random_within_using(&mut rng, latitude, longitude)
    }

    /// 外部の乱数生成器を使用してランダムな [`Point`] を生成します。
    ///
    /// 度の空間で一様に抽出するため、球面上では極付近に偏る。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within_using<R: Rng>(
        rng: &mut R,
        latitude: RangeInclusive<f64>,
        longitude: RangeInclusive<f64>,
    ) -> Self {
        let lat = rng.random_range(latitude);
        let lon = rng.random_range(longitude);
        Self::from_degrees(lat, lon)
    }

    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        Self::arb_within(-90.0..=90.0, -180.0..=180.0)
    }

    #[cfg(test)]
    pub fn arb_within(
        latitude: RangeInclusive<f64>,
        longitude: RangeInclusive<f64>,
    ) -> impl Strategy<Value = Self> {
        (latitude, longitude).prop_map(|(lat, lon)| Point::from_degrees(lat, lon))
    }
}
