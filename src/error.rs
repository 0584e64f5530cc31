#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 検証付きの構築で発生し得るエラー。
///
/// 通常の計算関数はエラーを返さず、範囲外の値もそのまま計算に用いる。
/// このエラーは [`Point::try_from_degrees`](crate::Point::try_from_degrees) のみが返す。
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("Latitude '{latitude}' is out of range (valid: -90.0..=90.0)")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude '{longitude}' is out of range (valid: -180.0..=180.0)")]
    LongitudeOutOfRange { longitude: f64 },
}
