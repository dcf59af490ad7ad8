use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// # Summary
/// 价格最小单位 "厘" (1/1000 元)。
///
/// # Invariants
/// - 后端返回的所有价格字段均为厘的整数。
/// - 转换为显示单位 (元) 只能经由 `to_yuan`，保证每个字段恰好换算一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Li(pub i64);

impl Li {
    /// 换算为元 (精确的十进制除法)
    pub fn to_yuan(self) -> Decimal {
        Decimal::new(self.0, 3)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// # Summary
/// 单根 K 线的价格摘要 (行情快照内嵌)。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuoteK {
    // 昨日收盘价
    #[serde(default)]
    pub last: Li,
    // 今日开盘价
    #[serde(default)]
    pub open: Li,
    // 今日最高价
    #[serde(default)]
    pub high: Li,
    // 今日最低价
    #[serde(default)]
    pub low: Li,
    // 最新价 (盘中即实时价)
    #[serde(default)]
    pub close: Li,
}

/// # Summary
/// 盘口单档报价。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceLevel {
    // 挂单价格
    #[serde(default)]
    pub price: Li,
    // 挂单数量 (股)
    #[serde(default)]
    pub number: i64,
}

/// # Summary
/// 五档行情快照。
///
/// # Invariants
/// - 每次抓取整体替换，不做增量合并。
/// - `buy_level` / `sell_level` 名义上各 5 档，但后端可能返回更少。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quote {
    // 证券代码
    #[serde(default)]
    pub code: String,
    // 价格摘要
    #[serde(default)]
    pub k: QuoteK,
    // 总手 (单位: 手)
    #[serde(default)]
    pub total_hand: i64,
    // 总成交金额 (元)
    #[serde(default)]
    pub amount: f64,
    // 买盘 买1..买5
    #[serde(default)]
    pub buy_level: Vec<PriceLevel>,
    // 卖盘 卖1..卖5
    #[serde(default)]
    pub sell_level: Vec<PriceLevel>,
}

/// # Summary
/// 单根 K 线。
///
/// # Invariants
/// - 序列内按时间升序排列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Candle {
    // K 线时间 (带时区偏移)
    pub time: DateTime<FixedOffset>,
    pub open: Li,
    pub close: Li,
    pub low: Li,
    pub high: Li,
    // 成交量
    #[serde(default)]
    pub volume: i64,
}

/// 后端 `/api/kline` 的负载
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KlineSeries {
    #[serde(rename = "List", default)]
    pub list: Vec<Candle>,
}

/// 分时走势中的一个点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinutePoint {
    // 时间标签，原样展示 (例如 "09:31")
    pub time: String,
    pub price: Li,
    // 该分钟成交量
    #[serde(default)]
    pub number: i64,
}

/// 后端 `/api/minute` 的负载
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinuteSeries {
    // 数据所属交易日 (YYYYMMDD)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "List", default)]
    pub list: Vec<MinutePoint>,
}

/// # Summary
/// 逐笔成交的买卖方向。
///
/// # Invariants
/// - 后端约定 0 为买、1 为卖，其余值 (如 2 中性) 均视为未知。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum TradeSide {
    Buy,
    Sell,
    Unknown(i64),
}

impl From<i64> for TradeSide {
    fn from(status: i64) -> Self {
        match status {
            0 => TradeSide::Buy,
            1 => TradeSide::Sell,
            other => TradeSide::Unknown(other),
        }
    }
}

impl From<TradeSide> for i64 {
    fn from(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => 0,
            TradeSide::Sell => 1,
            TradeSide::Unknown(other) => other,
        }
    }
}

/// 逐笔成交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trade {
    pub time: DateTime<FixedOffset>,
    pub price: Li,
    // 成交量 (手)
    #[serde(default)]
    pub volume: i64,
    #[serde(rename = "Status")]
    pub side: TradeSide,
}

/// 后端 `/api/trade` 的负载，默认按时间倒序 (最新在前)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeSeries {
    #[serde(rename = "List", default)]
    pub list: Vec<Trade>,
}

/// 搜索候选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub code: String,
    pub name: String,
    // 交易所标识 (sh / sz / bj)
    #[serde(default)]
    pub exchange: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_li_to_yuan_is_exact() {
        assert_eq!(Li(12345).to_yuan(), dec!(12.345));
        assert_eq!(Li(-500).to_yuan(), dec!(-0.5));
    }

    #[test]
    fn test_quote_deserializes_backend_shape() {
        let raw = r#"{
            "Exchange": 1, "Code": "600519", "Active1": 3,
            "K": {"Last": 1700000, "Open": 1710000, "High": 1720000, "Low": 1690000, "Close": 1715000},
            "TotalHand": 12345, "Amount": 2.1e9,
            "BuyLevel": [{"Buy": true, "Price": 1714000, "Number": 300}],
            "SellLevel": [{"Buy": false, "Price": 1716000, "Number": 500}]
        }"#;
        let quote: Quote = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.code, "600519");
        assert_eq!(quote.k.close, Li(1715000));
        assert_eq!(quote.buy_level.len(), 1);
        assert_eq!(quote.sell_level[0].number, 500);
    }

    #[test]
    fn test_trade_status_maps_to_side() {
        let raw = r#"{"Time": "2024-11-15T14:56:00+08:00", "Price": 11450, "Volume": 20, "Status": 2, "Number": 3}"#;
        let trade: Trade = serde_json::from_str(raw).unwrap();
        assert_eq!(trade.side, TradeSide::Unknown(2));
        assert_eq!(TradeSide::from(0), TradeSide::Buy);
        assert_eq!(TradeSide::from(1), TradeSide::Sell);
    }
}
