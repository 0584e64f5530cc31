//! 球面上の地点と領域を表す型、およびそれらに対する球面三角法の計算。
//!
//! 本モジュールでは、距離を特に明記しない限りメートル（m）単位、
//! 角度を度（°）単位で扱います。

/// 球面近似の計算で使用される定数。
pub mod constants;

/// 度またはラジアンから生成される単一の角度値 `Coordinate` 型。
pub mod coordinate;

/// 緯度・経度の組で定義される `Point` 型。
pub mod point;

/// 2つの対角点で定義される `BoundingArea` 型。
pub mod bounding_area;

/// 距離・方位角・到達点・外接領域の計算。
pub mod spherical;
