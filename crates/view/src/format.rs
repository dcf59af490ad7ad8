//! 数值格式化工具。
//!
//! 所有函数都只接收已换算为元 (或无单位) 的数值，厘到元的换算由 `Li::to_yuan` 唯一负责，
//! 唯一的例外是 `format_price`，它直接接收 `Li` 并在内部完成这一次换算。

use quotedesk_core::market::entity::Li;
use rust_decimal::{Decimal, RoundingStrategy};

/// 缺失或无效数值的占位符
pub const PLACEHOLDER: &str = "--";

const WAN: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
const YI: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// # Summary
/// 保留固定小数位 (四舍五入，远离零)。
///
/// # Logic
/// 1. 按 `MidpointAwayFromZero` 舍入到 `dp` 位。
/// 2. 补齐尾随零，使输出恰好 `dp` 位小数。
/// 3. 舍入后为零时去掉负号，避免出现 "-0.00"。
pub fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// 价格 (厘) 转为两位小数的元，0 视为缺失
pub fn format_price(price: Li) -> String {
    if price.is_zero() {
        return PLACEHOLDER.to_string();
    }
    fixed(price.to_yuan(), 2)
}

/// 通用数值格式化，0 视为缺失
pub fn format_number(value: Decimal, decimals: u32) -> String {
    if value.is_zero() {
        return PLACEHOLDER.to_string();
    }
    fixed(value, decimals)
}

/// # Summary
/// 金额/数量按量级缩写 (万、亿)。
///
/// # Logic
/// 1. 0 视为缺失，返回占位符。
/// 2. 大于等于 1 亿时以 "亿" 为单位，保留两位小数。
/// 3. 大于等于 1 万时以 "万" 为单位，保留两位小数。
/// 4. 其余直接保留两位小数。
pub fn format_amount(value: Decimal) -> String {
    if value.is_zero() {
        return PLACEHOLDER.to_string();
    }
    if value >= YI {
        format!("{}亿", fixed(value / YI, 2))
    } else if value >= WAN {
        format!("{}万", fixed(value / WAN, 2))
    } else {
        fixed(value, 2)
    }
}

/// 浮点金额的量级缩写，NaN 或无穷视为缺失
pub fn format_amount_f64(value: f64) -> String {
    match Decimal::try_from(value) {
        Ok(d) => format_amount(d),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// 严格为正时前加 "+"，其余原样 (两位小数)
pub fn signed(value: Decimal, suffix: &str) -> String {
    let text = fixed(value, 2);
    if value > Decimal::ZERO {
        format!("+{}{}", text, suffix)
    } else {
        format!("{}{}", text, suffix)
    }
}
