use quotedesk_core::view::entity::ChartKind;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// 需要在渲染线程上执行的重新布局任务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTask {
    // 重新布局单个图表 (切换标签页后)
    Relayout(ChartKind),
    // 重新布局全部图表 (窗口尺寸变化后)
    RelayoutAll,
}

/// # Summary
/// 尾沿防抖器。
///
/// # Invariants
/// - 一串连续触发中只有最后一次会在 `delay` 之后真正执行。
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// # Summary
    /// 触发一次。
    ///
    /// # Logic
    /// 1. 取消尚未执行的上一次触发。
    /// 2. 启动新的延时任务，到期后执行 `action`。
    pub fn trigger<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// # Summary
/// 重新布局调度器。
///
/// # Invariants
/// - 所有布局任务都通过通道异步投递，从不在触发者的调用栈中同步执行。
/// - 窗口尺寸变化经防抖合并，每一串变化只投递一次 `RelayoutAll`。
pub struct LayoutScheduler {
    tx: mpsc::UnboundedSender<LayoutTask>,
    tab_delay: Duration,
    resize: Debouncer,
}

impl LayoutScheduler {
    /// 创建调度器及其任务接收端
    pub fn new(tab_delay: Duration, resize_debounce: Duration) -> (Self, mpsc::UnboundedReceiver<LayoutTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                tab_delay,
                resize: Debouncer::new(resize_debounce),
            },
            rx,
        )
    }

    /// 延迟到下一次绘制之后再重新布局指定图表
    pub fn defer_relayout(&self, kind: ChartKind) {
        let tx = self.tx.clone();
        let delay = self.tab_delay;
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            tokio::time::sleep(delay).await;
            if tx.send(LayoutTask::Relayout(kind)).is_err() {
                debug!("layout receiver closed, dropping relayout of {}", kind.name());
            }
        });
    }

    /// 窗口尺寸变化
    pub fn window_resized(&mut self) {
        let tx = self.tx.clone();
        self.resize.trigger(move || {
            if tx.send(LayoutTask::RelayoutAll).is_err() {
                debug!("layout receiver closed, dropping resize");
            }
        });
    }
}
