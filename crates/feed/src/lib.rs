//! # `quotedesk-feed` - 行情后端 HTTP 客户端
//!
//! 基于 `reqwest` 实现 `MarketApi`，对接看板后端的只读 JSON 接口。

pub mod http;
