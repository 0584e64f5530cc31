use std::{
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 緯度または経度のいずれか一方を表す角度値。
///
/// 値は生成元の単位に関わらず、内部的には常に度で保持する。
/// 範囲の検証や正規化は行わないため、範囲外の値もそのまま保持される。
///
/// 等価性とハッシュは保持している度の値のビット表現で判定する。
/// ただし `-0.0` と `0.0` は同じ値として扱うため、ビット単位の比較
/// （`Double.equals` 相当）とは符号付きゼロの扱いだけが異なる。
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Coordinate {
    degrees: f64,
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coordinate").field(&self.degrees).finish()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees)
    }
}

impl Coordinate {
    /// 度で表された値から [`Coordinate`] を生成する。
    ///
    /// # Examples
    /// ```
    /// # use geocalc::Coordinate;
    /// let lat = Coordinate::from_degrees(51.4843774);
    /// assert_eq!(lat.as_degrees(), 51.4843774);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// ラジアンで表された値から [`Coordinate`] を生成する。
    ///
    /// 生成時に度へ変換される（`degrees = radians × 180 / π`）。
    ///
    /// # Examples
    /// ```
    /// # use geocalc::Coordinate;
    /// let lon = Coordinate::from_radians(std::f64::consts::PI);
    /// assert_eq!(lon.as_degrees(), 180.0);
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// 度で表された値を返す。
    pub fn as_degrees(&self) -> f64 {
        self.degrees
    }

    /// ラジアンに変換した値を返す。
    pub fn as_radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    // -0.0 を 0.0 に寄せたビット表現。符号付きゼロのみビット比較と異なる
    fn key(&self) -> u64 {
        if self.degrees == 0.0 {
            0.0_f64.to_bits()
        } else {
            self.degrees.to_bits()
        }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Coordinate> for f64 {
    fn from(value: Coordinate) -> Self {
        value.degrees
    }
}
