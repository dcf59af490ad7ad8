pub mod time;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 证券代码实体，代表当前看板选中的标的。
///
/// # Invariants
/// - 内部字符串恒为 6 位 ASCII 数字 (例如: 600519, 000001)。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockCode(String);

impl StockCode {
    /// # Summary
    /// 校验并构造证券代码。
    ///
    /// # Logic
    /// 1. 去除首尾空白。
    /// 2. 要求恰好 6 个 ASCII 数字。
    ///
    /// # Arguments
    /// * `raw`: 用户输入或后端返回的代码。
    ///
    /// # Returns
    /// 合法时返回 `Some(StockCode)`，否则返回 None。
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if is_direct_code(trimmed) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StockCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("Invalid stock code: {}", value))
    }
}

impl From<StockCode> for String {
    fn from(code: StockCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for StockCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 判断输入是否为可直接加载的 6 位数字代码 (`^\d{6}$`)。
pub fn is_direct_code(keyword: &str) -> bool {
    keyword.len() == 6 && keyword.bytes().all(|b| b.is_ascii_digit())
}

/// # Summary
/// K 线周期枚举，即看板上的 K 线切换按钮。
///
/// # Invariants
/// - 与后端 `/api/kline?type=` 参数一一对应。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    // 日K
    #[default]
    Day,
    // 周K
    Week,
    // 月K
    Month,
    // 30分
    Minute30,
    // 15分
    Minute15,
    // 5分
    Minute5,
}

impl Granularity {
    /// 全部周期，按按钮排列顺序
    pub const ALL: [Granularity; 6] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Minute30,
        Granularity::Minute15,
        Granularity::Minute5,
    ];

    /// 后端查询参数
    pub fn as_param(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Minute30 => "minute30",
            Granularity::Minute15 => "minute15",
            Granularity::Minute5 => "minute5",
        }
    }

    /// 按钮上展示的中文名称
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "日K",
            Granularity::Week => "周K",
            Granularity::Month => "月K",
            Granularity::Minute30 => "30分",
            Granularity::Minute15 => "15分",
            Granularity::Minute5 => "5分",
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "d" | "日k" => Ok(Granularity::Day),
            "week" | "w" | "周k" => Ok(Granularity::Week),
            "month" | "mo" | "月k" => Ok(Granularity::Month),
            "minute30" | "30m" | "30分" => Ok(Granularity::Minute30),
            "minute15" | "15m" | "15分" => Ok(Granularity::Minute15),
            "minute5" | "5m" | "5分" => Ok(Granularity::Minute5),
            _ => Err(format!("Unknown granularity: {}", s)),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}
