/// 球面近似で距離と角度の換算に用いる地球の大きさ（メートル）。
///
/// 名前は歴史的な経緯によるもので、値は地球の平均半径 6371.01 km に等しい。
/// 既存の計算結果と一致させるため、この値のまま使用する。
pub const EARTH_DIAMETER: f64 = 6_371_010.0;

/// 目的地が極にあるとみなす `cos(緯度)` の閾値。
///
/// この値を下回ると経度が定まらないため、出発点の経度を引き継ぐ。
pub const POLE_EPSILON: f64 = 1e-6;
