use crate::format::format_price;
use crate::kline::{VOLUME_SERIES, price_volume_axes, price_volume_grids};
use quotedesk_core::market::entity::MinuteSeries;
use quotedesk_core::view::chart::{
    AreaStyle, AxisLine, BarItem, CategoryAxis, ChartOption, GradientStop, ItemStyle,
    LineStyle, LinearGradient, Series, Toggle, Tooltip,
};

/// 分时线颜色
pub const LINE_COLOR: &str = "#1890ff";
pub const PRICE_SERIES: &str = "价格";

fn time_axis(labels: Vec<String>, grid_index: Option<u8>) -> CategoryAxis {
    let lower = grid_index.is_some();
    CategoryAxis {
        kind: "category".to_string(),
        grid_index,
        data: labels,
        scale: None,
        boundary_gap: false,
        axis_line: AxisLine {
            on_zero: Some(false),
            show: None,
        },
        axis_tick: lower.then_some(Toggle::HIDDEN),
        split_line: Toggle::HIDDEN,
        axis_label: lower.then_some(Toggle::HIDDEN),
        min: None,
        max: None,
    }
}

/// # Summary
/// 由分时序列构造价格走势 + 成交量配置。
///
/// # Logic
/// 1. 空序列返回 None。
/// 2. 时间标签原样作为类目；价格换算为元并保留两位小数，0 价格记为缺失点。
/// 3. 价格为平滑折线并带纵向渐变填充，成交量为统一颜色的柱。
///
/// # Invariants
/// - 每次都从当前证券的数据全新构造，不依赖上一个证券的任何状态。
pub fn build_minute_option(series: &MinuteSeries) -> Option<ChartOption> {
    if series.list.is_empty() {
        return None;
    }

    let labels: Vec<String> = series.list.iter().map(|p| p.time.clone()).collect();
    let prices: Vec<String> = series
        .list
        .iter()
        .map(|p| format_price(p.price))
        .collect();
    let volumes: Vec<BarItem> = series
        .list
        .iter()
        .map(|p| BarItem {
            value: p.number,
            item_style: None,
        })
        .collect();

    Some(ChartOption {
        background_color: "#fff".to_string(),
        animation: None,
        legend: None,
        tooltip: Tooltip::axis_cross(),
        grid: price_volume_grids(),
        x_axis: vec![time_axis(labels.clone(), None), time_axis(labels, Some(1))],
        y_axis: price_volume_axes(),
        data_zoom: Vec::new(),
        series: vec![
            Series::Line {
                name: PRICE_SERIES.to_string(),
                data: prices,
                smooth: true,
                symbol: "none".to_string(),
                line_style: LineStyle {
                    color: LINE_COLOR.to_string(),
                    width: 2,
                },
                area_style: AreaStyle {
                    color: LinearGradient::vertical(vec![
                        GradientStop {
                            offset: 0.0,
                            color: "rgba(24, 144, 255, 0.3)".to_string(),
                        },
                        GradientStop {
                            offset: 1.0,
                            color: "rgba(24, 144, 255, 0.05)".to_string(),
                        },
                    ]),
                },
            },
            Series::Bar {
                name: VOLUME_SERIES.to_string(),
                x_axis_index: 1,
                y_axis_index: 1,
                data: volumes,
                item_style: Some(ItemStyle::solid(LINE_COLOR)),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_core::market::entity::{Li, MinutePoint};

    #[test]
    fn test_minute_option_keeps_labels_verbatim() {
        let series = MinuteSeries {
            date: Some("20240102".to_string()),
            list: vec![
                MinutePoint {
                    time: "09:31".to_string(),
                    price: Li(10_005),
                    number: 120,
                },
                MinutePoint {
                    time: "09:32".to_string(),
                    price: Li(10_020),
                    number: 80,
                },
            ],
        };
        let option = build_minute_option(&series).unwrap();
        assert_eq!(option.x_axis[0].data, ["09:31", "09:32"]);
        assert!(!option.x_axis[0].boundary_gap);
        match &option.series[0] {
            Series::Line { data, smooth, .. } => {
                assert_eq!(data, &["10.01", "10.02"]);
                assert!(*smooth);
            }
            other => panic!("unexpected series: {:?}", other),
        }
        assert_eq!(option.series[1].len(), 2);
    }

    #[test]
    fn test_empty_minute_series_builds_nothing() {
        assert!(build_minute_option(&MinuteSeries::default()).is_none());
    }
}
