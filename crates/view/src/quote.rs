use crate::format::{PLACEHOLDER, fixed, format_amount, format_amount_f64, format_price, signed};
use quotedesk_core::market::entity::{PriceLevel, Quote};
use quotedesk_core::view::entity::{LevelRow, QuoteView, Trend};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// 盘口档位数
pub const DEPTH: usize = 5;

/// 每手股数
pub const SHARES_PER_LOT: i64 = 100;

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// # Summary
/// 计算涨跌额与涨跌幅。
///
/// # Logic
/// 1. 涨跌额 = 最新价 - 昨收。
/// 2. 昨收 <= 0 时涨跌幅恒为 0，否则为 涨跌额 / 昨收 × 100。
///
/// # Returns
/// (涨跌额, 涨跌幅%)，单位为元与百分比。
pub fn change_of(close: Decimal, previous_close: Decimal) -> (Decimal, Decimal) {
    let change = close - previous_close;
    let percent = if previous_close > Decimal::ZERO {
        change / previous_close * HUNDRED
    } else {
        Decimal::ZERO
    };
    (change, percent)
}

/// 单档挂单行：价格两位小数 (0 视为缺失)，数量由股换算为手并取整
fn level_row(label: String, level: Option<&PriceLevel>) -> LevelRow {
    match level {
        Some(level) => {
            let lots = (Decimal::from(level.number) / HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            LevelRow {
                label,
                price: format_price(level.price),
                volume: fixed(lots, 0),
            }
        }
        None => LevelRow {
            label,
            price: PLACEHOLDER.to_string(),
            volume: PLACEHOLDER.to_string(),
        },
    }
}

/// # Summary
/// 构造卖盘行，顺序为 卖5..卖1 (离市价最远的在上)。
///
/// # Invariants
/// - 恒为 `DEPTH` 行，缺失档位以占位符填充。
pub fn ask_rows(levels: &[PriceLevel]) -> Vec<LevelRow> {
    (0..DEPTH)
        .rev()
        .map(|i| level_row(format!("卖{}", i + 1), levels.get(i)))
        .collect()
}

/// 构造买盘行，顺序为 买1..买5，缺失档位以占位符填充
pub fn bid_rows(levels: &[PriceLevel]) -> Vec<LevelRow> {
    (0..DEPTH)
        .map(|i| level_row(format!("买{}", i + 1), levels.get(i)))
        .collect()
}

/// # Summary
/// 将行情快照转换为行情面板视图模型。
///
/// # Logic
/// 1. 所有价格字段经 `to_yuan` 各换算一次。
/// 2. 计算涨跌额、涨跌幅与涨跌样式 (涨跌额为 0 归为上涨)。
/// 3. 总手 × 100 换算为股数后按量级缩写；成交金额按量级缩写。
/// 4. 构造固定 5 档的买卖盘行，档位不足时记录告警。
///
/// # Arguments
/// * `quote`: 行情快照。
/// * `name`: 已知的证券名称 (来自搜索候选)，缺失时以代码代替。
pub fn build_quote_view(quote: &Quote, name: Option<&str>) -> QuoteView {
    let previous_close = quote.k.last.to_yuan();
    let close = quote.k.close.to_yuan();
    let (change, change_percent) = change_of(close, previous_close);

    if quote.buy_level.len() < DEPTH || quote.sell_level.len() < DEPTH {
        warn!(
            "quote {} has incomplete depth: {} bids, {} asks",
            quote.code,
            quote.buy_level.len(),
            quote.sell_level.len()
        );
    }

    let code = if quote.code.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        quote.code.clone()
    };
    let name = match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => code.clone(),
    };

    QuoteView {
        name,
        code,
        change,
        change_percent,
        trend: Trend::of(change),
        last_price_text: format_price(quote.k.close),
        change_text: signed(change, ""),
        change_percent_text: signed(change_percent, "%"),
        volume_text: format_amount(Decimal::from(quote.total_hand) * Decimal::from(SHARES_PER_LOT)),
        amount_text: format_amount_f64(quote.amount),
        open_text: format_price(quote.k.open),
        high_text: format_price(quote.k.high),
        low_text: format_price(quote.k.low),
        asks: ask_rows(&quote.sell_level),
        bids: bid_rows(&quote.buy_level),
    }
}
