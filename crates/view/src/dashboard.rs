use crate::chart::ChartSlot;
use crate::kline::build_kline_option;
use crate::layout::{LayoutScheduler, LayoutTask};
use crate::minute::build_minute_option;
use crate::quote::build_quote_view;
use crate::selection::{KlineTicket, Selection, Ticket};
use crate::tabs::TabController;
use crate::trade::{build_trade_table, placeholder_table};
use quotedesk_core::common::time::DisplayZone;
use quotedesk_core::common::{Granularity, StockCode, is_direct_code};
use quotedesk_core::config::ViewConfig;
use quotedesk_core::market::entity::SearchHit;
use quotedesk_core::market::envelope::FetchOutcome;
use quotedesk_core::market::port::MarketApi;
use quotedesk_core::view::entity::{ChartKind, Tab};
use quotedesk_core::view::error::ViewError;
use quotedesk_core::view::port::Surface;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, error, info};

pub const MSG_NOT_FOUND: &str = "未找到相关股票";
pub const MSG_SEARCH_FAILED: &str = "搜索失败，请重试";
pub const MSG_LOAD_FAILED: &str = "加载数据失败，请重试";

/// 单个面板在一次请求后的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    // 已用新数据刷新
    Updated,
    // 成功但无数据，面板保持原样 (成交表格显示占位行)
    Empty,
    // 请求失败，面板保持原样
    Failed,
    // 响应已过期 (期间有更新的选择)，被丢弃
    Stale,
}

impl PanelStatus {
    fn of<T>(outcome: &FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::Data(_) => PanelStatus::Updated,
            FetchOutcome::Empty => PanelStatus::Empty,
            FetchOutcome::Failed(_) => PanelStatus::Failed,
        }
    }
}

/// 一次完整加载中四个面板各自的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub quote: PanelStatus,
    pub kline: PanelStatus,
    pub minute: PanelStatus,
    pub trade: PanelStatus,
}

impl LoadReport {
    pub fn all_failed(&self) -> bool {
        [self.quote, self.kline, self.minute, self.trade]
            .iter()
            .all(|s| *s == PanelStatus::Failed)
    }
}

/// 搜索的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    // 6 位代码直接加载
    Loaded(LoadReport),
    // 展示了 n 个候选项，等待用户挑选
    Candidates(usize),
    // 没有匹配项
    NotFound,
    // 搜索请求失败
    Failed,
}

/// 控制器的全部可变状态，只在不跨越 await 的临界区内访问
struct ViewState {
    surface: Box<dyn Surface>,
    selection: Selection,
    tabs: TabController,
    kline_chart: ChartSlot,
    minute_chart: ChartSlot,
    granularity: Granularity,
    hits: Vec<SearchHit>,
    layout: LayoutScheduler,
    // 未完成的加载数，大于 0 时显示加载指示
    loading: u32,
    content_shown: bool,
}

impl ViewState {
    fn begin_loading(&mut self) {
        self.loading += 1;
        if self.loading == 1 {
            self.surface.set_loading(true);
        }
    }

    fn end_loading(&mut self) {
        self.loading = self.loading.saturating_sub(1);
        if self.loading == 0 {
            self.surface.set_loading(false);
        }
    }

    fn slot(&mut self, kind: ChartKind) -> &mut ChartSlot {
        match kind {
            ChartKind::Kline => &mut self.kline_chart,
            ChartKind::Minute => &mut self.minute_chart,
        }
    }
}

/// # Summary
/// 看板控制器：持有选中状态、图表实例与渲染层，串联搜索、加载与各面板渲染。
///
/// # Invariants
/// - 所有可变状态封装在控制器内部，不存在模块级全局变量。
/// - 网络请求期间不持有状态锁；响应写入前必须校验代际，过期响应直接丢弃。
/// - 面板之间互不影响：任一请求失败只会让对应面板保持原样。
pub struct Dashboard {
    api: Arc<dyn MarketApi>,
    state: Mutex<ViewState>,
    zone: DisplayZone,
    trade_rows: usize,
}

impl Dashboard {
    /// # Summary
    /// 创建控制器。
    ///
    /// # Logic
    /// 1. 按配置解析显示时区与成交行数。
    /// 2. 创建布局调度器，其任务接收端交给调用方驱动 (见 `apply_layout`)。
    ///
    /// # Arguments
    /// * `api`: 行情接口。
    /// * `surface`: 渲染层。
    /// * `config`: 展示配置。
    ///
    /// # Returns
    /// 控制器与布局任务接收端。
    pub fn new(
        api: Arc<dyn MarketApi>,
        surface: Box<dyn Surface>,
        config: &ViewConfig,
    ) -> (Self, mpsc::UnboundedReceiver<LayoutTask>) {
        let (layout, layout_rx) = LayoutScheduler::new(
            Duration::from_millis(config.tab_relayout_ms),
            Duration::from_millis(config.resize_debounce_ms),
        );
        let state = ViewState {
            surface,
            selection: Selection::default(),
            tabs: TabController::default(),
            kline_chart: ChartSlot::new(ChartKind::Kline),
            minute_chart: ChartSlot::new(ChartKind::Minute),
            granularity: Granularity::Day,
            hits: Vec::new(),
            layout,
            loading: 0,
            content_shown: false,
        };
        (
            Self {
                api,
                state: Mutex::new(state),
                zone: DisplayZone::resolve(config.utc_offset_minutes),
                trade_rows: config.trade_rows,
            },
            layout_rx,
        )
    }

    /// 当前选中的证券代码
    pub async fn current(&self) -> Option<StockCode> {
        self.state.lock().await.selection.current().cloned()
    }

    /// 当前 K 线周期
    pub async fn granularity(&self) -> Granularity {
        self.state.lock().await.granularity
    }

    pub async fn active_tab(&self) -> Tab {
        self.state.lock().await.tabs.active()
    }

    /// 当前展示中的搜索候选
    pub async fn candidates(&self) -> Vec<SearchHit> {
        self.state.lock().await.hits.clone()
    }

    /// # Summary
    /// 搜索入口 (回车或点击搜索)。
    ///
    /// # Logic
    /// 1. 关键字去空白后为空，提示用户并拒绝，不发请求。
    /// 2. 恰为 6 位数字时视为直接选中，立即完整加载。
    /// 3. 否则发起搜索：无结果提示 "未找到"，有结果展示候选列表，失败记录日志并提示。
    ///
    /// # Arguments
    /// * `keyword`: 用户输入。
    ///
    /// # Returns
    /// 搜索结果；仅在输入非法时返回错误。
    pub async fn search(&self, keyword: &str) -> Result<SearchOutcome, ViewError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            let err = ViewError::EmptyKeyword;
            self.state.lock().await.surface.alert(&err.to_string());
            return Err(err);
        }

        if is_direct_code(keyword)
            && let Some(code) = StockCode::parse(keyword)
        {
            return Ok(SearchOutcome::Loaded(self.select(code, None).await));
        }

        self.state.lock().await.begin_loading();
        let outcome = self.api.search(keyword).await;
        let mut state = self.state.lock().await;
        state.end_loading();

        let result = match outcome {
            FetchOutcome::Data(hits) => {
                info!("search '{}' matched {} candidates", keyword, hits.len());
                state.surface.show_search_results(&hits);
                let n = hits.len();
                state.hits = hits;
                SearchOutcome::Candidates(n)
            }
            FetchOutcome::Empty => {
                state.surface.alert(MSG_NOT_FOUND);
                SearchOutcome::NotFound
            }
            FetchOutcome::Failed(e) => {
                error!("search '{}' failed: {}", keyword, e);
                state.surface.alert(MSG_SEARCH_FAILED);
                SearchOutcome::Failed
            }
        };
        Ok(result)
    }

    /// # Summary
    /// 从候选列表中选中第 `index` 项 (从 0 开始)。
    ///
    /// # Logic
    /// 1. 序号越界时提示用户并返回错误，候选列表保持不变。
    /// 2. 候选项代码不是合法的 6 位代码时同样提示并返回错误，候选列表保持不变。
    /// 3. 清空候选列表并完整加载所选证券。
    pub async fn pick(&self, index: usize) -> Result<LoadReport, ViewError> {
        let (code, name) = {
            let mut state = self.state.lock().await;
            let len = state.hits.len();
            let Some(hit) = state.hits.get(index).cloned() else {
                let err = ViewError::PickOutOfRange { index, len };
                state.surface.alert(&err.to_string());
                return Err(err);
            };
            let Some(code) = StockCode::parse(&hit.code) else {
                let err = ViewError::InvalidCode(hit.code);
                state.surface.alert(&err.to_string());
                return Err(err);
            };
            state.hits.clear();
            state.surface.clear_search_results();
            (code, hit.name)
        };

        Ok(self.select(code, Some(name)).await)
    }

    /// 直接按代码完整加载 (与输入 6 位代码等价)
    pub async fn load_all(&self, code: StockCode) -> LoadReport {
        self.select(code, None).await
    }

    /// 选中证券，开启新的一代并完整加载
    async fn select(&self, code: StockCode, name: Option<String>) -> LoadReport {
        let (ticket, kline_ticket) = {
            let mut state = self.state.lock().await;
            let ticket = state.selection.select(code, name);
            state.granularity = Granularity::Day;
            let kline_ticket = state.selection.begin_kline(Granularity::Day);
            (ticket, kline_ticket)
        };
        info!("loading {} (generation {})", ticket.code, ticket.generation);
        self.run_load(ticket, kline_ticket).await
    }

    /// # Summary
    /// 依次加载 行情 → 日K → 分时 → 逐笔成交。
    ///
    /// # Logic
    /// 1. 展示主内容区并显示加载指示。
    /// 2. 四个请求顺序 await，每个请求的失败只影响自己的面板，不中断后续请求。
    /// 3. 四个面板全部失败时提示用户。
    async fn run_load(&self, ticket: Ticket, kline_ticket: Option<KlineTicket>) -> LoadReport {
        {
            let mut state = self.state.lock().await;
            if !state.content_shown {
                state.surface.show_main_content();
                state.content_shown = true;
            }
            state.begin_loading();
        }

        let quote = self.load_quote(&ticket).await;
        let kline = match kline_ticket {
            Some(kt) => self.load_kline(&kt).await,
            None => PanelStatus::Stale,
        };
        let minute = self.load_minute(&ticket).await;
        let trade = self.load_trade(&ticket).await;

        let report = LoadReport {
            quote,
            kline,
            minute,
            trade,
        };

        let mut state = self.state.lock().await;
        state.end_loading();
        if report.all_failed() && state.selection.is_current(&ticket) {
            state.surface.alert(MSG_LOAD_FAILED);
        }
        debug!("load of {} finished: {:?}", ticket.code, report);
        report
    }

    async fn load_quote(&self, ticket: &Ticket) -> PanelStatus {
        let outcome = self.api.quote(&ticket.code).await;
        let mut state = self.state.lock().await;
        if !state.selection.is_current(ticket) {
            debug!("dropping stale quote for {}", ticket.code);
            return PanelStatus::Stale;
        }
        let status = PanelStatus::of(&outcome);
        match outcome {
            FetchOutcome::Data(quote) => {
                let view = build_quote_view(&quote, state.selection.name());
                state.surface.render_quote(&view);
            }
            FetchOutcome::Empty => debug!("no quote for {}", ticket.code),
            FetchOutcome::Failed(e) => error!("加载五档行情失败 {}: {}", ticket.code, e),
        }
        status
    }

    async fn load_kline(&self, ticket: &KlineTicket) -> PanelStatus {
        let outcome = self.api.kline(&ticket.ticket.code, ticket.granularity).await;
        let mut state = self.state.lock().await;
        if !state.selection.is_current_kline(ticket) {
            debug!(
                "dropping stale {} kline for {}",
                ticket.granularity, ticket.ticket.code
            );
            return PanelStatus::Stale;
        }
        let mut status = PanelStatus::of(&outcome);
        match outcome {
            FetchOutcome::Data(series) => {
                if let Some(option) = build_kline_option(&series, &self.zone) {
                    let state = &mut *state;
                    if let Err(e) = state.kline_chart.render(state.surface.as_mut(), &option) {
                        error!("渲染K线失败: {}", e);
                        status = PanelStatus::Failed;
                    }
                }
            }
            FetchOutcome::Empty => debug!("no {} kline for {}", ticket.granularity, ticket.ticket.code),
            FetchOutcome::Failed(e) => error!("加载K线失败 {}: {}", ticket.ticket.code, e),
        }
        state.granularity = ticket.granularity;
        state.surface.mark_active_granularity(ticket.granularity);
        status
    }

    async fn load_minute(&self, ticket: &Ticket) -> PanelStatus {
        let outcome = self.api.minute(&ticket.code).await;
        let mut state = self.state.lock().await;
        if !state.selection.is_current(ticket) {
            debug!("dropping stale minute series for {}", ticket.code);
            return PanelStatus::Stale;
        }
        let mut status = PanelStatus::of(&outcome);
        match outcome {
            FetchOutcome::Data(series) => {
                if let Some(option) = build_minute_option(&series) {
                    let state = &mut *state;
                    if let Err(e) = state.minute_chart.render(state.surface.as_mut(), &option) {
                        error!("渲染分时图失败: {}", e);
                        status = PanelStatus::Failed;
                    }
                }
            }
            FetchOutcome::Empty => debug!("no minute series for {}", ticket.code),
            FetchOutcome::Failed(e) => error!("加载分时数据失败 {}: {}", ticket.code, e),
        }
        status
    }

    async fn load_trade(&self, ticket: &Ticket) -> PanelStatus {
        let outcome = self.api.trade(&ticket.code).await;
        let mut state = self.state.lock().await;
        if !state.selection.is_current(ticket) {
            debug!("dropping stale trades for {}", ticket.code);
            return PanelStatus::Stale;
        }
        let status = PanelStatus::of(&outcome);
        match outcome {
            FetchOutcome::Data(series) => {
                let table = build_trade_table(&series, self.trade_rows, &self.zone);
                state.surface.render_trades(&table);
            }
            FetchOutcome::Empty => state.surface.render_trades(&placeholder_table()),
            FetchOutcome::Failed(e) => error!("加载分时成交失败 {}: {}", ticket.code, e),
        }
        status
    }

    /// # Summary
    /// 切换 K 线周期。
    ///
    /// # Logic
    /// 1. 未选中证券时提示用户并返回 `NoSelection`。
    /// 2. 为新周期开启新的 K 线代际，重新抓取并整体重建图表。
    /// 3. 无论请求成败，都高亮新周期按钮。
    pub async fn switch_granularity(&self, granularity: Granularity) -> Result<PanelStatus, ViewError> {
        let ticket = {
            let mut state = self.state.lock().await;
            let Some(ticket) = state.selection.begin_kline(granularity) else {
                let err = ViewError::NoSelection;
                state.surface.alert(&err.to_string());
                return Err(err);
            };
            state.begin_loading();
            ticket
        };
        let status = self.load_kline(&ticket).await;
        self.state.lock().await.end_loading();
        Ok(status)
    }

    /// # Summary
    /// 切换标签页。
    ///
    /// # Logic
    /// 1. 激活目标标签页，其余全部取消激活。
    /// 2. 目标承载已初始化的图表时，异步延迟一次重新布局。
    pub async fn switch_tab(&self, tab: Tab) {
        let mut state = self.state.lock().await;
        state.surface.activate_tab(tab);
        if let Some(kind) = state.tabs.activate(tab)
            && state.slot(kind).is_initialized()
        {
            state.layout.defer_relayout(kind);
        }
    }

    /// 窗口尺寸变化 (经防抖后重新布局全部图表)
    pub async fn window_resized(&self) {
        self.state.lock().await.layout.window_resized();
    }

    /// 执行一条布局任务，由持有接收端的一方调用
    pub async fn apply_layout(&self, task: LayoutTask) {
        let mut state = self.state.lock().await;
        match task {
            LayoutTask::Relayout(kind) => {
                if state.slot(kind).relayout() {
                    debug!("relayout {} chart", kind.name());
                }
            }
            LayoutTask::RelayoutAll => {
                for kind in [ChartKind::Kline, ChartKind::Minute] {
                    state.slot(kind).relayout();
                }
            }
        }
    }
}
