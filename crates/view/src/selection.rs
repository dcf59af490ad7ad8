use quotedesk_core::common::{Granularity, StockCode};

/// # Summary
/// 一次加载请求的代际凭证。
///
/// # Invariants
/// - 只有当凭证仍是最新一代时，其响应才允许写入视图。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub code: StockCode,
    pub generation: u64,
}

/// K 线请求凭证，额外携带 K 线代际与周期
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlineTicket {
    pub ticket: Ticket,
    pub kline_generation: u64,
    pub granularity: Granularity,
}

/// # Summary
/// 当前选中证券与请求代际。
///
/// # Invariants
/// - `generation` 单调递增，每次选中 (包括重复选中同一代码) 都会递增。
/// - `kline_generation` 单调递增，每次发起 K 线请求都会递增，
///   使得快速切换周期时旧周期的响应被丢弃。
/// - 不保留历史选中记录。
#[derive(Debug, Default)]
pub struct Selection {
    current: Option<StockCode>,
    name: Option<String>,
    generation: u64,
    kline_generation: u64,
}

impl Selection {
    /// 选中证券并开启新的一代
    pub fn select(&mut self, code: StockCode, name: Option<String>) -> Ticket {
        self.generation += 1;
        self.current = Some(code.clone());
        self.name = name;
        Ticket {
            code,
            generation: self.generation,
        }
    }

    /// 当前代际的凭证 (未选中时为 None)
    pub fn ticket(&self) -> Option<Ticket> {
        self.current.clone().map(|code| Ticket {
            code,
            generation: self.generation,
        })
    }

    /// 为当前证券发起一次 K 线请求
    pub fn begin_kline(&mut self, granularity: Granularity) -> Option<KlineTicket> {
        let ticket = self.ticket()?;
        self.kline_generation += 1;
        Some(KlineTicket {
            ticket,
            kline_generation: self.kline_generation,
            granularity,
        })
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && self.current.as_ref() == Some(&ticket.code)
    }

    pub fn is_current_kline(&self, ticket: &KlineTicket) -> bool {
        self.is_current(&ticket.ticket) && ticket.kline_generation == self.kline_generation
    }

    pub fn current(&self) -> Option<&StockCode> {
        self.current.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> StockCode {
        StockCode::parse(raw).unwrap()
    }

    #[test]
    fn test_newer_selection_invalidates_older_ticket() {
        let mut selection = Selection::default();
        let first = selection.select(code("600519"), None);
        let second = selection.select(code("000001"), Some("平安银行".to_string()));
        assert!(!selection.is_current(&first));
        assert!(selection.is_current(&second));
        assert_eq!(selection.name(), Some("平安银行"));
    }

    #[test]
    fn test_reselecting_same_code_bumps_generation() {
        let mut selection = Selection::default();
        let first = selection.select(code("600519"), None);
        let second = selection.select(code("600519"), None);
        assert!(second.generation > first.generation);
        assert!(!selection.is_current(&first));
    }

    #[test]
    fn test_kline_generation_is_independent() {
        let mut selection = Selection::default();
        assert!(selection.begin_kline(Granularity::Day).is_none());

        let load = selection.select(code("600519"), None);
        let day = selection.begin_kline(Granularity::Day).unwrap();
        let week = selection.begin_kline(Granularity::Week).unwrap();
        assert!(!selection.is_current_kline(&day));
        assert!(selection.is_current_kline(&week));
        // 切换周期不影响同一次加载里其他面板的写入
        assert!(selection.is_current(&load));
    }
}
