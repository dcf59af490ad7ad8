use chrono::{DateTime, FixedOffset, Local, Offset};

/// # Summary
/// 显示时区，所有时间标签 (K 线时间、成交时间) 都在此时区下取日历字段。
///
/// # Invariants
/// - 内部偏移量在构造后不再变化，保证同一次渲染内时间标签一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
}

impl DisplayZone {
    /// 使用固定的 UTC 偏移 (分钟) 构造，越界时返回 None
    pub fn from_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self { offset })
    }

    /// 取本机当前的本地时区偏移
    ///
    /// 偏移只在调用时取一次，之后的夏令时切换不会跟随。
    pub fn local() -> Self {
        Self {
            offset: Local::now().offset().fix(),
        }
    }

    /// # Summary
    /// 根据配置解析显示时区。
    ///
    /// # Logic
    /// 1. 配置了偏移量且合法时使用配置值。
    /// 2. 否则退回本机本地时区。
    pub fn resolve(configured: Option<i32>) -> Self {
        configured
            .and_then(Self::from_minutes)
            .unwrap_or_else(Self::local)
    }

    /// 将任意时区的时间换算到显示时区
    pub fn localize<Tz: chrono::TimeZone>(&self, time: &DateTime<Tz>) -> DateTime<FixedOffset> {
        time.with_timezone(&self.offset)
    }
}
