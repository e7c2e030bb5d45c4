// src/simulation.rs

use std::fs;
use std::path::Path;

use crate::error::SimError;
use crate::geometry::TrackLayout;
use crate::path_loss::{free_space_loss, Band};

/// 输出文件名，写入当前工作目录。
pub const OUTPUT_FILE_NAME: &str = "wifi_signal_simulator.out";

/// 采样扫描的配置参数。
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// 相邻采样点的时间间隔（秒/采样）。
    pub granularity: f64,
    /// 采样点数量，从 t = 0 开始。
    pub sample_count: usize,
    /// 每个损耗值保留的小数位数。
    pub decimal_places: usize,
    /// 计算损耗时使用的 WiFi 频段。
    pub band: Band,
}

impl Default for SweepConfig {
    /// 默认 1 毫秒采样间隔、5000 个采样点、三位小数、2.4 GHz 频段。
    fn default() -> Self {
        Self {
            granularity: 0.001,
            sample_count: 5000,
            decimal_places: 3,
            band: Band::default(),
        }
    }
}

/// 一次完整扫描的结果：每个 AP 一列按时间升序排列的损耗字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutput {
    pub ap1_losses: Vec<String>,
    pub ap2_losses: Vec<String>,
}

/// 对整个时间窗执行采样扫描。
///
/// 对每个采样下标 `i`，取 `time = i * granularity`，先算 AP 1 的距离和
/// 损耗，再算 AP 2 的，全部格式化为定点字符串。计算完全确定，除返回值
/// 外没有任何副作用。
///
/// # 参数
/// * `layout` - 本次运行的固定几何参数。
/// * `config` - 采样配置。
///
/// # 返回值
/// 两列损耗字符串，或下层传播上来的定义域错误。
pub fn run_sweep(layout: &TrackLayout, config: &SweepConfig) -> Result<SweepOutput, SimError> {
    let mut ap1_losses = Vec::with_capacity(config.sample_count);
    let mut ap2_losses = Vec::with_capacity(config.sample_count);

    for sample in 0..config.sample_count {
        let time = sample as f64 * config.granularity;

        let ap1_distance = layout.signal_distance(1, time)?;
        let ap1_loss = free_space_loss(ap1_distance, config.band)?;
        ap1_losses.push(format_loss(ap1_loss, config.decimal_places));

        let ap2_distance = layout.signal_distance(2, time)?;
        let ap2_loss = free_space_loss(ap2_distance, config.band)?;
        ap2_losses.push(format_loss(ap2_loss, config.decimal_places));
    }

    Ok(SweepOutput {
        ap1_losses,
        ap2_losses,
    })
}

fn format_loss(loss_db: f64, decimal_places: usize) -> String {
    format!("{loss_db:.decimal_places$}")
}

impl SweepOutput {
    /// 渲染两行输出：第一行 AP 1、第二行 AP 2，每个值后跟一个空格，
    /// 第二行末尾没有换行。
    pub fn render(&self) -> String {
        // 预估容量：每个值约 8 字节加分隔符
        let mut out = String::with_capacity((self.ap1_losses.len() + self.ap2_losses.len()) * 9 + 1);
        for loss in &self.ap1_losses {
            out.push_str(loss);
            out.push(' ');
        }
        out.push('\n');
        for loss in &self.ap2_losses {
            out.push_str(loss);
            out.push(' ');
        }
        out
    }

    /// 把渲染结果一次性写入 `path`。
    ///
    /// 所有内容先在内存里拼好，只发生一次写入；上游计算失败时不会产生
    /// 任何文件，也不会留下写了一半的文件。
    pub fn write_to(&self, path: &Path) -> Result<(), SimError> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_layout() -> TrackLayout {
        TrackLayout::new(100.0, 10.0, 92.0)
    }

    #[test]
    fn test_default_config() {
        let config = SweepConfig::default();
        assert_eq!(config.granularity, 0.001);
        assert_eq!(config.sample_count, 5000);
        assert_eq!(config.decimal_places, 3);
        assert_eq!(config.band, Band::Ghz2_4);
    }

    // 两列结果都必须覆盖全部采样点，且顺序即时间顺序
    #[test]
    fn test_sweep_covers_every_sample() {
        let config = SweepConfig {
            sample_count: 17,
            ..SweepConfig::default()
        };
        let output = run_sweep(&reference_layout(), &config).unwrap();
        assert_eq!(output.ap1_losses.len(), 17);
        assert_eq!(output.ap2_losses.len(), 17);
    }

    // 扫描是确定性的：同样的输入必须产生逐字节相同的结果
    #[test]
    fn test_sweep_is_deterministic() {
        let config = SweepConfig::default();
        let first = run_sweep(&reference_layout(), &config).unwrap();
        let second = run_sweep(&reference_layout(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sweep_respects_decimal_places() {
        let config = SweepConfig {
            sample_count: 4,
            decimal_places: 5,
            ..SweepConfig::default()
        };
        let output = run_sweep(&reference_layout(), &config).unwrap();
        for token in output.ap1_losses.iter().chain(output.ap2_losses.iter()) {
            let (_, frac) = token.split_once('.').expect("fixed-point token");
            assert_eq!(frac.len(), 5, "bad token {token}");
        }
    }

    // 渲染格式：两行，行内每个值后一个空格，文件末尾没有换行
    #[test]
    fn test_render_format() {
        let output = SweepOutput {
            ap1_losses: vec!["60.052".into(), "60.053".into()],
            ap2_losses: vec!["62.071".into(), "62.070".into()],
        };
        assert_eq!(output.render(), "60.052 60.053 \n62.071 62.070 ");
    }

    #[test]
    fn test_write_to_creates_rendered_file() {
        let dir = std::env::temp_dir().join(format!("wifi_sweep_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(OUTPUT_FILE_NAME);

        let output = run_sweep(&reference_layout(), &SweepConfig::default()).unwrap();
        output.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, output.render());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
