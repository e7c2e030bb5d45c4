// src/geometry.rs

use nalgebra::Point2;

use crate::error::SimError;

/// 一次运行的固定几何参数，使用轨道对齐坐标系。
///
/// 列车从原点出发，沿 x 轴以恒定速度行驶。两个接入点位于一条与轨道
/// 平行的基线上：AP 1 正对列车的起始位置，AP 2 在基线的更远处。
/// 两个 AP 的横向偏移相同。
#[derive(Debug, Clone, Copy)]
pub struct TrackLayout {
    /// AP 1 与 AP 2 之间沿基线的距离（米）。
    pub inter_ap_distance: f64,
    /// 轨道与 AP 基线之间的垂直偏移（米）。
    pub cross_track_distance: f64,
    /// 列车速度（米/秒），整个运行期间恒定。
    pub velocity: f64,
}

impl TrackLayout {
    pub fn new(inter_ap_distance: f64, cross_track_distance: f64, velocity: f64) -> Self {
        Self {
            inter_ap_distance,
            cross_track_distance,
            velocity,
        }
    }

    /// 返回给定编号的接入点在轨道坐标系中的位置。
    ///
    /// # 参数
    /// * `ap_number` - 必须是 `1` 或 `2`，其他值一律拒绝。
    ///
    /// # 返回值
    /// AP 的位置；编号未知时返回 `SimError::InvalidAccessPoint`，
    /// 绝不静默退回默认值。
    pub fn access_point(&self, ap_number: u8) -> Result<Point2<f64>, SimError> {
        match ap_number {
            1 => Ok(Point2::new(0.0, self.cross_track_distance)),
            2 => Ok(Point2::new(self.inter_ap_distance, self.cross_track_distance)),
            other => Err(SimError::InvalidAccessPoint(other)),
        }
    }

    /// 经过 `elapsed` 秒后列车的位置。
    pub fn train_position(&self, elapsed: f64) -> Point2<f64> {
        Point2::new(self.velocity * elapsed, 0.0)
    }

    /// 经过 `elapsed` 秒后列车与给定接入点之间的直线距离（米）。
    ///
    /// # 参数
    /// * `ap_number` - `1` 或 `2`。
    /// * `elapsed` - 自运行开始以来的时间（秒）。
    ///
    /// # 返回值
    /// 距离（米），或 `SimError::InvalidAccessPoint`。
    pub fn signal_distance(&self, ap_number: u8, elapsed: f64) -> Result<f64, SimError> {
        let ap = self.access_point(ap_number)?;
        let train = self.train_position(elapsed);
        // hypot 在沿轨偏移大到平方会溢出时仍保持稳定
        Ok((train.x - ap.x).hypot(train.y - ap.y))
    }
}
