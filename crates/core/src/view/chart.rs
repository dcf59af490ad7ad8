//! ECharts 兼容的图表配置模型 (仅覆盖看板用到的子集)。
//!
//! 序列化结果可直接交给 `echarts.setOption`。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub tooltip: Tooltip,
    pub grid: Vec<Grid>,
    pub x_axis: Vec<CategoryAxis>,
    pub y_axis: Vec<ValueAxis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_zoom: Vec<DataZoom>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub data: Vec<String>,
    pub top: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: String,
    pub axis_pointer: AxisPointer,
}

impl Tooltip {
    /// 坐标轴触发 + 十字准星
    pub fn axis_cross() -> Self {
        Self {
            trigger: "axis".to_string(),
            axis_pointer: AxisPointer {
                kind: "cross".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: String,
}

/// 绘图网格，尺寸均为百分比字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub top: String,
    pub height: String,
}

impl Grid {
    pub fn new(left: &str, right: &str, top: &str, height: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            top: top.to_string(),
            height: height.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub show: bool,
}

impl Toggle {
    pub const HIDDEN: Toggle = Toggle { show: false };
    pub const SHOWN: Toggle = Toggle { show: true };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

/// 类目轴 (时间标签)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<u8>,
    pub data: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    pub boundary_gap: bool,
    pub axis_line: AxisLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    pub split_line: Toggle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// 数值轴
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub scale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_area: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<Toggle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    pub x_axis_index: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    pub start: u8,
    pub end: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color0: Option<String>,
}

impl ItemStyle {
    pub fn solid(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            color0: None,
            border_color: None,
            border_color0: None,
        }
    }
}

/// 柱状图的单个数据项，可单独着色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarItem {
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// 纵向线性渐变 (x=0, y=0 → x2=0, y2=1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: u8,
    pub y: u8,
    pub x2: u8,
    pub y2: u8,
    pub color_stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn vertical(stops: Vec<GradientStop>) -> Self {
        Self {
            kind: "linear".to_string(),
            x: 0,
            y: 0,
            x2: 0,
            y2: 1,
            color_stops: stops,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub color: LinearGradient,
}

/// # Summary
/// 图表系列。
///
/// # Invariants
/// - 蜡烛图数据项顺序为 `[open, close, low, high]` (元)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Candlestick {
        name: String,
        data: Vec<[Decimal; 4]>,
        #[serde(rename = "itemStyle")]
        item_style: ItemStyle,
    },
    Bar {
        name: String,
        #[serde(rename = "xAxisIndex")]
        x_axis_index: u8,
        #[serde(rename = "yAxisIndex")]
        y_axis_index: u8,
        data: Vec<BarItem>,
        #[serde(rename = "itemStyle", skip_serializing_if = "Option::is_none")]
        item_style: Option<ItemStyle>,
    },
    Line {
        name: String,
        data: Vec<String>,
        smooth: bool,
        symbol: String,
        #[serde(rename = "lineStyle")]
        line_style: LineStyle,
        #[serde(rename = "areaStyle")]
        area_style: AreaStyle,
    },
}

impl Series {
    /// 系列中的数据点个数
    pub fn len(&self) -> usize {
        match self {
            Series::Candlestick { data, .. } => data.len(),
            Series::Bar { data, .. } => data.len(),
            Series::Line { data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
