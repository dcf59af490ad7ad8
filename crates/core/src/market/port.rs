use crate::common::{Granularity, StockCode};
use crate::market::entity::{KlineSeries, MinuteSeries, Quote, SearchHit, TradeSeries};
use crate::market::envelope::FetchOutcome;
use async_trait::async_trait;

/// # Summary
/// 看板后端只读行情接口契约。
///
/// # Invariants
/// - 每个方法只发起一次请求，不重试。
/// - 实现者必须把传输错误、解析错误与业务错误都归一到 `FetchOutcome::Failed`，
///   调用方不会收到 panic 或被中断的兄弟请求。
#[async_trait]
pub trait MarketApi: Send + Sync {
    /// # Summary
    /// 按代码或名称关键字搜索证券。
    ///
    /// # Arguments
    /// * `keyword`: 已去除首尾空白的非空关键字。
    ///
    /// # Returns
    /// 零个或多个候选项。
    async fn search(&self, keyword: &str) -> FetchOutcome<Vec<SearchHit>>;

    /// # Summary
    /// 获取五档行情快照。
    ///
    /// # Logic
    /// 1. 后端返回的是列表，取第一条。
    ///
    /// # Arguments
    /// * `code`: 证券代码。
    async fn quote(&self, code: &StockCode) -> FetchOutcome<Quote>;

    /// # Summary
    /// 获取指定周期的 K 线序列。
    ///
    /// # Arguments
    /// * `code`: 证券代码。
    /// * `granularity`: K 线周期。
    async fn kline(&self, code: &StockCode, granularity: Granularity) -> FetchOutcome<KlineSeries>;

    /// 获取当日分时走势
    async fn minute(&self, code: &StockCode) -> FetchOutcome<MinuteSeries>;

    /// 获取逐笔成交 (最新在前)
    async fn trade(&self, code: &StockCode) -> FetchOutcome<TradeSeries>;
}
