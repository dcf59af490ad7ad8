use crate::common::Granularity;
use crate::market::entity::SearchHit;
use crate::view::chart::ChartOption;
use crate::view::entity::{ChartKind, QuoteView, Tab, TradeTableView};
use crate::view::error::ViewError;

/// 图表容器默认高度 (像素)，容器隐藏时强制使用
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

/// # Summary
/// 图表组件契约 (对应一个图表实例)。
///
/// # Invariants
/// - `set_option` 是整体替换，不做局部合并，避免残留旧系列。
/// - 容器在隐藏状态下尺寸为 0，重新可见后必须调用 `resize` 才能正确布局。
pub trait ChartWidget: Send {
    /// 整体替换图表配置
    fn set_option(&mut self, option: &ChartOption) -> Result<(), ViewError>;

    /// 按当前容器尺寸重新布局
    fn resize(&mut self);

    /// 当前容器尺寸 (宽, 高)，隐藏时为 (0, 0)
    fn container_size(&self) -> (u32, u32);

    /// 强制把容器设为默认尺寸 (100% 宽, `DEFAULT_CHART_HEIGHT` 高)
    fn force_default_size(&mut self);
}

/// # Summary
/// 渲染/绑定层契约。看板控制器只通过它输出，不直接接触终端或页面。
///
/// # Invariants
/// - 所有方法都是同步、不可失败的纯输出动作；失败只可能出现在图表组件上。
pub trait Surface: Send {
    /// 显示或隐藏加载指示
    fn set_loading(&mut self, loading: bool);

    /// 首次加载证券时展示主内容区
    fn show_main_content(&mut self);

    /// 面向用户的提示
    fn alert(&mut self, message: &str);

    /// 展示搜索候选列表
    fn show_search_results(&mut self, hits: &[SearchHit]);

    /// 清空搜索候选列表
    fn clear_search_results(&mut self);

    /// 渲染行情与五档盘口
    fn render_quote(&mut self, view: &QuoteView);

    /// 高亮当前 K 线周期按钮 (其余按钮取消高亮)
    fn mark_active_granularity(&mut self, granularity: Granularity);

    /// 渲染逐笔成交表格
    fn render_trades(&mut self, table: &TradeTableView);

    /// 激活一个标签页 (其余标签页取消激活)
    fn activate_tab(&mut self, tab: Tab);

    /// # Summary
    /// 在指定容器中初始化图表组件。
    ///
    /// # Logic
    /// 1. 由控制器在首次需要渲染该图表时调用，之后复用同一实例。
    fn create_chart(&mut self, kind: ChartKind) -> Box<dyn ChartWidget>;
}
