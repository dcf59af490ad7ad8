//! # `quotedesk-core` - 行情看板领域核心
//!
//! 定义看板所需的实体、错误与端口 (Port)：
//! - `market`: 后端行情接口返回的数据实体、响应信封与 `MarketApi` 契约
//! - `view`: 视图模型实体以及渲染层契约 (`Surface` / `ChartWidget`)
//! - `common`: 证券代码、K 线周期、显示时区等通用类型
//! - `config`: 全局应用配置

pub mod common;
pub mod config;
pub mod market;
pub mod view;
