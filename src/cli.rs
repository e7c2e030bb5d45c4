// src/cli.rs

use crate::error::SimError;

/// 经过校验的命令行输入。
///
/// 三个参数都按整数解析：带小数的字符串（如 `"92.5"`）直接拒绝，
/// 不做截断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    /// AP 1 与 AP 2 之间的距离（米）。
    pub inter_ap_distance: i64,
    /// 列车起始位置与 AP 1 之间的距离（米）。
    pub train_ap_distance: i64,
    /// 列车速度（米/秒）。
    pub train_velocity: i64,
}

/// 在任何计算开始之前一次性校验 `argv`（含程序名）。
///
/// # 参数
/// * `argv` - 完整的参数向量，`argv[0]` 是程序名。
///
/// # 返回值
/// 校验通过的参数，或 `SimError::WrongArgumentCount` /
/// `SimError::InvalidArgument`。
pub fn parse_args(argv: &[String]) -> Result<CliArgs, SimError> {
    if argv.len() != 4 {
        return Err(SimError::WrongArgumentCount(argv.len().saturating_sub(1)));
    }
    Ok(CliArgs {
        inter_ap_distance: parse_integer(&argv[1])?,
        train_ap_distance: parse_integer(&argv[2])?,
        train_velocity: parse_integer(&argv[3])?,
    })
}

fn parse_integer(raw: &str) -> Result<i64, SimError> {
    raw.parse::<i64>().map_err(|source| SimError::InvalidArgument {
        value: raw.to_string(),
        source,
    })
}

/// 参数出错时打印到标准输出的用法说明。
pub fn usage(program: &str) -> String {
    format!(
        "Usage: \n\n\
         {program} <inter-AP-distance> <train-AP-distance> <train-velocity>\n\
         Suggested values for execution: \n\
         {program} 100 10 92"
    )
}
