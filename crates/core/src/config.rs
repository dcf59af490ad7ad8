use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub log: LogConfig,
}

/// 行情后端连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// 看板展示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    // 逐笔成交最多展示的行数
    pub trade_rows: usize,
    // 窗口尺寸变化的防抖间隔
    pub resize_debounce_ms: u64,
    // 切换到图表标签页后延迟重新布局的间隔
    pub tab_relayout_ms: u64,
    // 显示时区相对 UTC 的分钟偏移，未设置时使用本机时区
    pub utc_offset_minutes: Option<i32>,
    // 图表配置 JSON 的输出目录
    pub chart_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            trade_rows: 200,
            resize_debounce_ms: 100,
            tab_relayout_ms: 50,
            utc_offset_minutes: None,
            chart_dir: "charts".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
        }
    }
}
