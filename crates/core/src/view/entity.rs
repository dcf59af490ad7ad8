use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 涨跌样式。
///
/// # Invariants
/// - 涨跌额为 0 时归为 `Up` (非负即涨)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(change: Decimal) -> Self {
        if change >= Decimal::ZERO {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// 样式类名
    pub fn class_name(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// 盘口表格中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    // 档位标签，如 "卖5" / "买1"
    pub label: String,
    pub price: String,
    // 挂单量 (手)
    pub volume: String,
}

/// # Summary
/// 行情面板视图模型。
///
/// # Invariants
/// - `asks` 固定 5 行，顺序为卖5..卖1。
/// - `bids` 固定 5 行，顺序为买1..买5。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteView {
    pub name: String,
    pub code: String,
    // 涨跌额 (元)
    pub change: Decimal,
    // 涨跌幅 (%)，昨收 <= 0 时恒为 0
    pub change_percent: Decimal,
    pub trend: Trend,
    pub last_price_text: String,
    pub change_text: String,
    pub change_percent_text: String,
    pub volume_text: String,
    pub amount_text: String,
    pub open_text: String,
    pub high_text: String,
    pub low_text: String,
    pub asks: Vec<LevelRow>,
    pub bids: Vec<LevelRow>,
}

/// 逐笔成交表格的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeRow {
    Trade {
        time: String,
        price: String,
        volume: String,
        amount: String,
        side: String,
        // 价格与方向单元格的样式类，未知方向时为 None
        class: Option<String>,
    },
    // 无数据占位行，横跨所有列
    Placeholder { text: String, colspan: u8 },
}

/// 逐笔成交表格视图模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TradeTableView {
    pub rows: Vec<TradeRow>,
}

impl TradeTableView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 图表所在的容器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    // K 线 + 成交量
    Kline,
    // 分时 + 成交量
    Minute,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Kline => "kline",
            ChartKind::Minute => "minute",
        }
    }
}

/// # Summary
/// 看板内容面板 (标签页)。
///
/// # Invariants
/// - 任一时刻恰好有一个面板处于激活状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tab {
    #[default]
    Quote,
    Kline,
    Minute,
    Trade,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Quote, Tab::Kline, Tab::Minute, Tab::Trade];

    /// 该面板承载的图表，没有则为 None
    pub fn chart(&self) -> Option<ChartKind> {
        match self {
            Tab::Kline => Some(ChartKind::Kline),
            Tab::Minute => Some(ChartKind::Minute),
            Tab::Quote | Tab::Trade => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Quote => "quote",
            Tab::Kline => "kline",
            Tab::Minute => "minute",
            Tab::Trade => "trade",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quote" => Ok(Tab::Quote),
            "kline" => Ok(Tab::Kline),
            "minute" => Ok(Tab::Minute),
            "trade" => Ok(Tab::Trade),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
