use chrono::{DateTime, FixedOffset};
use quotedesk_core::common::time::DisplayZone;
use quotedesk_core::market::entity::{Candle, KlineSeries};
use quotedesk_core::view::chart::{
    AxisLine, BarItem, CategoryAxis, ChartOption, DataZoom, Grid, ItemStyle, Legend, Series,
    Toggle, Tooltip, ValueAxis,
};

/// 上涨 (收盘 >= 开盘) 颜色
pub const UP_COLOR: &str = "#ef232a";
/// 下跌颜色
pub const DOWN_COLOR: &str = "#14b143";

pub const CANDLE_SERIES: &str = "K线";
pub const VOLUME_SERIES: &str = "成交量";

/// K 线时间标签 `YYYY-MM-DD HH:mm`，取显示时区下的日历字段
pub fn candle_label(time: &DateTime<FixedOffset>, zone: &DisplayZone) -> String {
    zone.localize(time).format("%Y-%m-%d %H:%M").to_string()
}

/// 收盘 >= 开盘视为上涨，K 线实体与同一根的成交量柱使用同一颜色
pub fn candle_color(candle: &Candle) -> &'static str {
    if candle.close >= candle.open {
        UP_COLOR
    } else {
        DOWN_COLOR
    }
}

/// 上下两个网格共用的类目轴
fn category_axis(labels: Vec<String>, grid_index: Option<u8>) -> CategoryAxis {
    let lower = grid_index.is_some();
    CategoryAxis {
        kind: "category".to_string(),
        grid_index,
        data: labels,
        scale: Some(true),
        boundary_gap: true,
        axis_line: AxisLine {
            on_zero: Some(false),
            show: None,
        },
        axis_tick: lower.then_some(Toggle::HIDDEN),
        split_line: Toggle::HIDDEN,
        axis_label: lower.then_some(Toggle::HIDDEN),
        min: Some("dataMin".to_string()),
        max: Some("dataMax".to_string()),
    }
}

/// 价格网格与成交量网格
pub(crate) fn price_volume_grids() -> Vec<Grid> {
    vec![
        Grid::new("8%", "3%", "10%", "60%"),
        Grid::new("8%", "3%", "75%", "15%"),
    ]
}

/// 价格轴与 (隐藏刻度的) 成交量轴
pub(crate) fn price_volume_axes() -> Vec<ValueAxis> {
    vec![
        ValueAxis {
            scale: true,
            grid_index: None,
            split_number: None,
            split_area: Some(Toggle::SHOWN),
            axis_label: None,
            axis_line: None,
            axis_tick: None,
            split_line: None,
        },
        ValueAxis {
            scale: true,
            grid_index: Some(1),
            split_number: Some(2),
            split_area: None,
            axis_label: Some(Toggle::HIDDEN),
            axis_line: Some(AxisLine {
                on_zero: None,
                show: Some(false),
            }),
            axis_tick: Some(Toggle::HIDDEN),
            split_line: Some(Toggle::HIDDEN),
        },
    ]
}

/// # Summary
/// 由 K 线序列构造完整的蜡烛图 + 成交量图配置。
///
/// # Logic
/// 1. 空序列返回 None，调用方保持图表不变。
/// 2. 每根 K 线生成一个时间标签、一个 `[open, close, low, high]` 数据项 (元)，
///    以及一根按涨跌着色的成交量柱。
/// 3. 组装双网格、双类目轴、内置与滑块两种缩放。
///
/// # Arguments
/// * `series`: 按时间升序的 K 线序列。
/// * `zone`: 时间标签使用的显示时区。
///
/// # Returns
/// 可整体替换到图表上的配置。
pub fn build_kline_option(series: &KlineSeries, zone: &DisplayZone) -> Option<ChartOption> {
    if series.list.is_empty() {
        return None;
    }

    let mut labels = Vec::with_capacity(series.list.len());
    let mut candles = Vec::with_capacity(series.list.len());
    let mut volumes = Vec::with_capacity(series.list.len());

    for candle in &series.list {
        labels.push(candle_label(&candle.time, zone));
        candles.push([
            candle.open.to_yuan(),
            candle.close.to_yuan(),
            candle.low.to_yuan(),
            candle.high.to_yuan(),
        ]);
        volumes.push(BarItem {
            value: candle.volume,
            item_style: Some(ItemStyle::solid(candle_color(candle))),
        });
    }

    Some(ChartOption {
        background_color: "#fff".to_string(),
        animation: Some(false),
        legend: Some(Legend {
            data: vec![CANDLE_SERIES.to_string(), VOLUME_SERIES.to_string()],
            top: 10,
        }),
        tooltip: Tooltip::axis_cross(),
        grid: price_volume_grids(),
        x_axis: vec![
            category_axis(labels.clone(), None),
            category_axis(labels, Some(1)),
        ],
        y_axis: price_volume_axes(),
        data_zoom: vec![
            DataZoom {
                kind: "inside".to_string(),
                show: None,
                x_axis_index: vec![0, 1],
                top: None,
                start: 0,
                end: 100,
            },
            DataZoom {
                kind: "slider".to_string(),
                show: Some(true),
                x_axis_index: vec![0, 1],
                top: Some("93%".to_string()),
                start: 0,
                end: 100,
            },
        ],
        series: vec![
            Series::Candlestick {
                name: CANDLE_SERIES.to_string(),
                data: candles,
                item_style: ItemStyle {
                    color: Some(UP_COLOR.to_string()),
                    color0: Some(DOWN_COLOR.to_string()),
                    border_color: Some(UP_COLOR.to_string()),
                    border_color0: Some(DOWN_COLOR.to_string()),
                },
            },
            Series::Bar {
                name: VOLUME_SERIES.to_string(),
                x_axis_index: 1,
                y_axis_index: 1,
                data: volumes,
                item_style: None,
            },
        ],
    })
}
