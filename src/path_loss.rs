// src/path_loss.rs

use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

// 10*log10((4pi)^2) 四舍五入到三位小数
const FREE_SPACE_CONSTANT_DB: f64 = 21.984;

/// 支持的 WiFi 频段。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Band {
    /// 2.4 GHz
    #[default]
    Ghz2_4,
    /// 5.0 GHz
    Ghz5_0,
}

impl Band {
    /// 该频段的载波波长（米）。
    pub fn wavelength(self) -> f64 {
        match self {
            Band::Ghz2_4 => 0.12491,
            Band::Ghz5_0 => 0.05996,
        }
    }
}

impl FromStr for Band {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.4" => Ok(Band::Ghz2_4),
            "5.0" => Ok(Band::Ghz5_0),
            other => Err(SimError::UnsupportedBand(other.to_string())),
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Ghz2_4 => write!(f, "2.4"),
            Band::Ghz5_0 => write!(f, "5.0"),
        }
    }
}

/// 给定距离与频段下的自由空间损耗（dB）。
///
/// # 参数
/// * `distance` - 到 AP 的距离（米），必须严格为正。
/// * `band` - WiFi 频段。
///
/// # 返回值
/// 损耗（dB）；距离非正（含 NaN）时返回
/// `SimError::NonPositiveDistance`，不会把定义域错误留给对数去触发。
pub fn free_space_loss(distance: f64, band: Band) -> Result<f64, SimError> {
    if !(distance > 0.0) {
        return Err(SimError::NonPositiveDistance(distance));
    }
    let wavelength = band.wavelength();
    Ok(-20.0 * f64::log10(wavelength) + 20.0 * f64::log10(distance) + FREE_SPACE_CONSTANT_DB)
}
