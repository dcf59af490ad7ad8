use quotedesk_core::common::Granularity;
use quotedesk_core::market::entity::SearchHit;
use quotedesk_core::view::chart::ChartOption;
use quotedesk_core::view::entity::{ChartKind, QuoteView, Tab, TradeRow, TradeTableView};
use quotedesk_core::view::error::ViewError;
use quotedesk_core::view::port::{ChartWidget, DEFAULT_CHART_HEIGHT, Surface};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// 终端模式下图表容器的名义宽度
pub const CONSOLE_CHART_WIDTH: u32 = 1200;

/// # Summary
/// 把图表配置写成 JSON 文件的图表组件。
///
/// # Invariants
/// - 每次 `set_option` 整体覆盖 `<chart_dir>/<kind>.json`。
/// - 所在标签页未激活时容器尺寸为 (0, 0)，除非被强制设为默认尺寸。
pub struct FileChart {
    kind: ChartKind,
    path: PathBuf,
    visible: Arc<AtomicBool>,
    forced: bool,
}

impl FileChart {
    pub fn new(kind: ChartKind, dir: &Path, visible: Arc<AtomicBool>) -> Self {
        Self {
            kind,
            path: dir.join(format!("{}.json", kind.name())),
            visible,
            forced: false,
        }
    }
}

impl ChartWidget for FileChart {
    /// 同步写文件，调用方持有看板状态锁，写入期间其他指令会等待。
    /// 配置文件仅几 KB，写本地目录的耗时可以接受。
    fn set_option(&mut self, option: &ChartOption) -> Result<(), ViewError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ViewError::Render(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(option).map_err(|e| ViewError::Render(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| ViewError::Render(e.to_string()))?;
        debug!("wrote {} chart option to {}", self.kind.name(), self.path.display());
        Ok(())
    }

    fn resize(&mut self) {
        let (width, height) = self.container_size();
        debug!("{} chart laid out at {}x{}", self.kind.name(), width, height);
    }

    fn container_size(&self) -> (u32, u32) {
        if self.forced || self.visible.load(Ordering::SeqCst) {
            (CONSOLE_CHART_WIDTH, DEFAULT_CHART_HEIGHT)
        } else {
            (0, 0)
        }
    }

    fn force_default_size(&mut self) {
        self.forced = true;
    }
}

/// # Summary
/// 终端渲染层：表格与提示打印到 `out`，图表落盘为 JSON。
pub struct ConsoleSurface<W: Write + Send> {
    out: W,
    chart_dir: PathBuf,
    kline_visible: Arc<AtomicBool>,
    minute_visible: Arc<AtomicBool>,
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W, chart_dir: impl Into<PathBuf>) -> Self {
        Self {
            out,
            chart_dir: chart_dir.into(),
            kline_visible: Arc::new(AtomicBool::new(false)),
            minute_visible: Arc::new(AtomicBool::new(false)),
        }
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("console write failed: {}", e);
        }
    }

    fn emit_levels(&mut self, rows: &[quotedesk_core::view::entity::LevelRow]) {
        for row in rows {
            self.emit(&format!("  {:<4} {:>10} {:>10}", row.label, row.price, row.volume));
        }
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.emit("加载中...");
        }
    }

    fn show_main_content(&mut self) {
        self.emit("==== 行情看板 ====");
    }

    fn alert(&mut self, message: &str) {
        self.emit(&format!("[提示] {}", message));
    }

    fn show_search_results(&mut self, hits: &[SearchHit]) {
        self.emit("搜索结果 (输入 pick <序号> 选择):");
        for (i, hit) in hits.iter().enumerate() {
            let exchange = hit.exchange.as_deref().unwrap_or("");
            self.emit(&format!("  {}. {} {} {}", i + 1, hit.code, hit.name, exchange));
        }
    }

    fn clear_search_results(&mut self) {
        debug!("search results cleared");
    }

    fn render_quote(&mut self, view: &QuoteView) {
        self.emit(&format!(
            "{} ({})  {}  {}  {} [{}]",
            view.name,
            view.code,
            view.last_price_text,
            view.change_text,
            view.change_percent_text,
            view.trend.class_name()
        ));
        self.emit(&format!(
            "成交量 {}  成交额 {}  开 {}  高 {}  低 {}",
            view.volume_text, view.amount_text, view.open_text, view.high_text, view.low_text
        ));
        self.emit_levels(&view.asks);
        self.emit("  ----");
        self.emit_levels(&view.bids);
    }

    fn mark_active_granularity(&mut self, granularity: Granularity) {
        let buttons: Vec<String> = Granularity::ALL
            .iter()
            .map(|g| {
                if *g == granularity {
                    format!("[{}]", g.label())
                } else {
                    g.label().to_string()
                }
            })
            .collect();
        self.emit(&format!("K线周期: {}", buttons.join(" ")));
    }

    fn render_trades(&mut self, table: &TradeTableView) {
        self.emit("时间      价格      成交量    成交额      方向");
        for row in &table.rows {
            let line = match row {
                TradeRow::Trade {
                    time,
                    price,
                    volume,
                    amount,
                    side,
                    ..
                } => format!("{:<9} {:>8} {:>9} {:>11}  {}", time, price, volume, amount, side),
                TradeRow::Placeholder { text, .. } => format!("  {}", text),
            };
            self.emit(&line);
        }
    }

    fn activate_tab(&mut self, tab: Tab) {
        self.kline_visible
            .store(tab.chart() == Some(ChartKind::Kline), Ordering::SeqCst);
        self.minute_visible
            .store(tab.chart() == Some(ChartKind::Minute), Ordering::SeqCst);
        self.emit(&format!("当前标签页: {}", tab.name()));
    }

    fn create_chart(&mut self, kind: ChartKind) -> Box<dyn ChartWidget> {
        let visible = match kind {
            ChartKind::Kline => self.kline_visible.clone(),
            ChartKind::Minute => self.minute_visible.clone(),
        };
        Box::new(FileChart::new(kind, &self.chart_dir, visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_core::market::entity::{Li, MinutePoint, MinuteSeries};
    use quotedesk_view::minute::build_minute_option;

    fn sample_option() -> ChartOption {
        let series = MinuteSeries {
            date: Some("2024-05-10".to_string()),
            list: vec![
                MinutePoint {
                    time: "09:30".to_string(),
                    price: Li(10_000),
                    number: 100,
                },
                MinutePoint {
                    time: "09:31".to_string(),
                    price: Li(10_020),
                    number: 80,
                },
            ],
        };
        build_minute_option(&series).unwrap()
    }

    #[test]
    fn test_hidden_chart_reports_zero_size_until_forced() {
        let dir = tempfile::tempdir().unwrap();
        let visible = Arc::new(AtomicBool::new(false));
        let mut chart = FileChart::new(ChartKind::Kline, dir.path(), visible.clone());
        assert_eq!(chart.container_size(), (0, 0));

        chart.force_default_size();
        assert_eq!(chart.container_size(), (CONSOLE_CHART_WIDTH, DEFAULT_CHART_HEIGHT));

        let other = FileChart::new(ChartKind::Minute, dir.path(), visible.clone());
        visible.store(true, Ordering::SeqCst);
        assert_eq!(other.container_size(), (CONSOLE_CHART_WIDTH, DEFAULT_CHART_HEIGHT));
    }

    #[test]
    fn test_set_option_replaces_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let charts = dir.path().join("charts");
        let mut chart = FileChart::new(ChartKind::Minute, &charts, Arc::default());

        chart.set_option(&sample_option())?;
        let mut second = sample_option();
        second.series.clear();
        chart.set_option(&second)?;

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(charts.join("minute.json"))?)?;
        assert_eq!(written["series"], serde_json::json!([]));
        assert_eq!(written["backgroundColor"], "#fff");
        Ok(())
    }

    #[test]
    fn test_tab_activation_toggles_chart_visibility() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = ConsoleSurface::new(Vec::new(), dir.path());
        let kline = surface.create_chart(ChartKind::Kline);
        assert_eq!(kline.container_size(), (0, 0));

        surface.activate_tab(Tab::Kline);
        assert_eq!(kline.container_size(), (CONSOLE_CHART_WIDTH, DEFAULT_CHART_HEIGHT));

        surface.activate_tab(Tab::Trade);
        assert_eq!(kline.container_size(), (0, 0));
    }

    #[test]
    fn test_trades_and_alerts_are_printed() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = ConsoleSurface::new(Vec::new(), dir.path());
        surface.alert("未找到相关股票");
        surface.render_trades(&TradeTableView {
            rows: vec![TradeRow::Placeholder {
                text: "暂无数据".to_string(),
                colspan: 5,
            }],
        });

        let text = String::from_utf8(surface.out).unwrap();
        assert!(text.contains("[提示] 未找到相关股票"));
        assert!(text.contains("暂无数据"));
    }
}
