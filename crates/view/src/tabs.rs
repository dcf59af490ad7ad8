use quotedesk_core::view::entity::{ChartKind, Tab};

/// # Summary
/// 标签页控制器。
///
/// # Invariants
/// - 任一时刻恰好一个标签页处于激活状态，激活一个即取消其余全部。
#[derive(Debug, Clone, Default)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// # Summary
    /// 激活标签页。
    ///
    /// # Returns
    /// 若该标签页承载图表，返回需要重新布局的图表。
    pub fn activate(&mut self, tab: Tab) -> Option<ChartKind> {
        self.active = tab;
        tab.chart()
    }
}
