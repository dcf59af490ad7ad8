use quotedesk_core::view::chart::ChartOption;
use quotedesk_core::view::entity::ChartKind;
use quotedesk_core::view::error::ViewError;
use quotedesk_core::view::port::{ChartWidget, Surface};
use tracing::debug;

/// # Summary
/// 惰性初始化的图表槽位。
///
/// # Invariants
/// - 组件只在第一次有数据可画时创建，之后一直复用同一实例。
/// - 每次渲染都是整体替换配置再显式 `resize`。
pub struct ChartSlot {
    kind: ChartKind,
    widget: Option<Box<dyn ChartWidget>>,
}

impl ChartSlot {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, widget: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.widget.is_some()
    }

    /// # Summary
    /// 渲染一份完整配置。
    ///
    /// # Logic
    /// 1. 组件不存在时通过 `Surface` 在对应容器中创建。
    /// 2. 容器尺寸为 0 (隐藏中初始化) 时先强制设为默认尺寸。
    /// 3. 整体替换配置，随后重新布局。
    ///
    /// # Arguments
    /// * `surface`: 渲染层，仅在首次创建组件时使用。
    /// * `option`: 完整的图表配置。
    ///
    /// # Returns
    /// 组件写出配置失败时返回 `ViewError::Render`。
    pub fn render(&mut self, surface: &mut dyn Surface, option: &ChartOption) -> Result<(), ViewError> {
        let kind = self.kind;
        let widget = self.widget.get_or_insert_with(|| {
            debug!("initializing {} chart", kind.name());
            surface.create_chart(kind)
        });

        let (width, height) = widget.container_size();
        if width == 0 || height == 0 {
            widget.force_default_size();
            widget.resize();
        }

        widget.set_option(option)?;
        widget.resize();
        Ok(())
    }

    /// 重新布局，组件尚未创建时什么也不做
    pub fn relayout(&mut self) -> bool {
        match self.widget.as_mut() {
            Some(widget) => {
                widget.resize();
                true
            }
            None => false,
        }
    }
}
