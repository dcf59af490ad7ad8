use crate::format::{PLACEHOLDER, format_amount, format_number, format_price};
use crate::quote::SHARES_PER_LOT;
use quotedesk_core::common::time::DisplayZone;
use quotedesk_core::market::entity::{Trade, TradeSeries, TradeSide};
use quotedesk_core::view::entity::{TradeRow, TradeTableView};
use rust_decimal::Decimal;

/// 默认最多展示的成交笔数
pub const DEFAULT_TRADE_ROWS: usize = 200;

/// 成交表格列数 (时间、价格、成交量、金额、方向)
pub const TRADE_COLUMNS: u8 = 5;

pub const NO_DATA: &str = "暂无数据";

/// 方向标签与样式类
pub fn side_label(side: TradeSide) -> (&'static str, Option<&'static str>) {
    match side {
        TradeSide::Buy => ("买入", Some("trade-buy")),
        TradeSide::Sell => ("卖出", Some("trade-sell")),
        TradeSide::Unknown(_) => ("--", None),
    }
}

/// 无数据时的占位表格，恰好一行
pub fn placeholder_table() -> TradeTableView {
    TradeTableView {
        rows: vec![TradeRow::Placeholder {
            text: NO_DATA.to_string(),
            colspan: TRADE_COLUMNS,
        }],
    }
}

/// 成交金额 (元)，超出 Decimal 表示范围时为 None
fn trade_amount(trade: &Trade) -> Option<Decimal> {
    trade
        .price
        .to_yuan()
        .checked_mul(Decimal::from(trade.volume))?
        .checked_mul(Decimal::from(SHARES_PER_LOT))
}

fn trade_row(trade: &Trade, zone: &DisplayZone) -> TradeRow {
    let (side, class) = side_label(trade.side);
    TradeRow::Trade {
        time: zone.localize(&trade.time).format("%H:%M:%S").to_string(),
        price: format_price(trade.price),
        volume: format_number(Decimal::from(trade.volume), 0),
        amount: trade_amount(trade).map_or_else(|| PLACEHOLDER.to_string(), format_amount),
        side: side.to_string(),
        class: class.map(str::to_string),
    }
}

/// # Summary
/// 构造逐笔成交表格。
///
/// # Logic
/// 1. 空序列返回单行占位表格。
/// 2. 按源顺序 (最新在前) 只取前 `limit` 笔，不做排序。
/// 3. 金额 = 价格(元) × 成交量(手) × 100，按量级缩写；溢出时显示占位符。
///
/// # Arguments
/// * `series`: 逐笔成交序列。
/// * `limit`: 最多展示的行数。
/// * `zone`: 时间列使用的显示时区。
pub fn build_trade_table(series: &TradeSeries, limit: usize, zone: &DisplayZone) -> TradeTableView {
    if series.list.is_empty() {
        return placeholder_table();
    }
    TradeTableView {
        rows: series
            .list
            .iter()
            .take(limit)
            .map(|t| trade_row(t, zone))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use quotedesk_core::market::entity::Li;

    fn series(n: usize) -> TradeSeries {
        let start = DateTime::parse_from_rfc3339("2024-01-02T14:57:00+08:00").unwrap();
        TradeSeries {
            list: (0..n)
                .map(|i| Trade {
                    time: start - Duration::seconds(i64::try_from(i).unwrap()),
                    price: Li(12_345),
                    volume: 10,
                    side: TradeSide::from(i64::try_from(i % 3).unwrap()),
                })
                .collect(),
        }
    }

    fn zone() -> DisplayZone {
        DisplayZone::from_minutes(8 * 60).unwrap()
    }

    #[test]
    fn test_truncates_to_limit() {
        let table = build_trade_table(&series(250), DEFAULT_TRADE_ROWS, &zone());
        assert_eq!(table.len(), 200);
    }

    #[test]
    fn test_empty_renders_single_placeholder() {
        let table = build_trade_table(&TradeSeries::default(), DEFAULT_TRADE_ROWS, &zone());
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.rows[0],
            TradeRow::Placeholder {
                text: "暂无数据".to_string(),
                colspan: 5
            }
        );
    }

    #[test]
    fn test_row_fields_keep_source_order() {
        let table = build_trade_table(&series(3), DEFAULT_TRADE_ROWS, &zone());
        let expected_times = ["14:57:00", "14:56:59", "14:56:58"];
        let expected_sides = [("买入", Some("trade-buy")), ("卖出", Some("trade-sell")), ("--", None)];
        for (i, row) in table.rows.iter().enumerate() {
            match row {
                TradeRow::Trade {
                    time,
                    price,
                    volume,
                    amount,
                    side,
                    class,
                } => {
                    assert_eq!(time, expected_times[i]);
                    assert_eq!(price, "12.35");
                    assert_eq!(volume, "10");
                    // 12.345 × 10 × 100 = 12345
                    assert_eq!(amount, "1.23万");
                    assert_eq!(side, expected_sides[i].0);
                    assert_eq!(class.as_deref(), expected_sides[i].1);
                }
                other => panic!("unexpected row: {:?}", other),
            }
        }
    }

    #[test]
    fn test_overflowing_amount_renders_placeholder() {
        let mut huge = series(1);
        huge.list[0].price = Li(i64::MAX);
        huge.list[0].volume = i64::MAX;
        let table = build_trade_table(&huge, DEFAULT_TRADE_ROWS, &zone());
        match &table.rows[0] {
            TradeRow::Trade { price, amount, .. } => {
                assert_eq!(amount, "--");
                assert!(price.ends_with(".81"));
            }
            other => panic!("unexpected row: {:?}", other),
        }
    }
}
