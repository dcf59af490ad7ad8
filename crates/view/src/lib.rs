//! # `quotedesk-view` - 看板视图模型与控制器
//!
//! - 纯函数层：把后端负载转换为视图模型或图表配置 (`format`, `quote`, `kline`, `minute`, `trade`)
//! - 状态层：标签页、图表槽位、选中状态与请求代际 (`tabs`, `chart`, `selection`)
//! - 调度层：重新布局与窗口尺寸防抖 (`layout`)
//! - 控制器：`Dashboard`，串联以上各层并通过 `Surface` 输出

pub mod chart;
pub mod dashboard;
pub mod format;
pub mod kline;
pub mod layout;
pub mod minute;
pub mod quote;
pub mod selection;
pub mod tabs;
pub mod trade;
