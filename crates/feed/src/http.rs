use async_trait::async_trait;
use quotedesk_core::common::{Granularity, StockCode};
use quotedesk_core::config::ApiConfig;
use quotedesk_core::market::entity::{KlineSeries, MinuteSeries, Quote, SearchHit, TradeSeries};
use quotedesk_core::market::envelope::{Envelope, FetchOutcome, Payload};
use quotedesk_core::market::error::MarketError;
use quotedesk_core::market::port::MarketApi;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// # Summary
/// 看板后端的 HTTP 行情客户端。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯。
/// - `base_url` 不以 `/` 结尾。
/// - 每次调用只发一次 GET 请求，不重试。
#[derive(Clone)]
pub struct HttpMarketApi {
    /// 内部使用的 HTTP 客户端
    client: Client,
    /// 后端根地址，例如 `http://127.0.0.1:8080`
    base_url: String,
}

impl HttpMarketApi {
    /// # Summary
    /// 创建一个新的 HttpMarketApi 实例。
    ///
    /// # Logic
    /// 1. 按配置设置请求超时。
    /// 2. 确保进程内已安装 rustls 加密后端 (reqwest 以 rustls-no-provider 方式编译)。
    /// 3. 规整根地址，去掉末尾的 `/`。
    /// 4. 初始化 reqwest 客户端。
    ///
    /// # Arguments
    /// * `config`: 后端连接配置。
    ///
    /// # Returns
    /// 成功返回客户端，客户端构建失败返回 `MarketError::Network`。
    pub fn new(config: &ApiConfig) -> Result<Self, MarketError> {
        ensure_crypto_provider();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MarketError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Summary
    /// 发起 GET 请求并解析响应信封。
    ///
    /// # Logic
    /// 1. 拼接完整 URL 并附带查询参数。
    /// 2. 非 2xx 状态码视为网络错误 (404 单独映射为 NotFound)。
    /// 3. 以 JSON 解析 `Envelope<T>`。
    ///
    /// # Arguments
    /// * `path`: 以 `/` 开头的接口路径。
    /// * `query`: 查询参数。
    ///
    /// # Returns
    /// 成功返回信封，失败返回 MarketError。
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Envelope<T>, MarketError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(MarketError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(MarketError::Network(format!("HTTP {}", resp.status())));
        }

        resp.json::<Envelope<T>>()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))
    }

    /// 请求并归一化为 `FetchOutcome`
    async fn fetch<T: DeserializeOwned + Payload>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> FetchOutcome<T> {
        FetchOutcome::from_result(
            self.get_envelope::<T>(path, query)
                .await
                .map(Envelope::into_outcome),
        )
    }
}

/// 安装 ring 作为进程级默认加密后端，已安装时什么也不做
fn ensure_crypto_provider() {
    if rustls::crypto::CryptoProvider::get_default().is_some() {
        return;
    }
    if rustls::crypto::ring::default_provider().install_default().is_err() {
        debug!("crypto provider already installed by another thread");
    }
}

#[async_trait]
impl MarketApi for HttpMarketApi {
    async fn search(&self, keyword: &str) -> FetchOutcome<Vec<SearchHit>> {
        if keyword.trim().is_empty() {
            return FetchOutcome::Failed(MarketError::InvalidInput(
                "搜索关键词不能为空".to_string(),
            ));
        }
        self.fetch("/api/search", &[("keyword", keyword)]).await
    }

    /// # Summary
    /// 获取五档行情。
    ///
    /// # Logic
    /// 1. 后端以列表形式返回 (支持批量代码)，这里只请求一个代码并取第一条。
    async fn quote(&self, code: &StockCode) -> FetchOutcome<Quote> {
        let outcome: FetchOutcome<Vec<Quote>> =
            self.fetch("/api/quote", &[("code", code.as_str())]).await;
        match outcome {
            FetchOutcome::Data(quotes) => match quotes.into_iter().next() {
                Some(quote) => FetchOutcome::Data(quote),
                None => FetchOutcome::Empty,
            },
            FetchOutcome::Empty => FetchOutcome::Empty,
            FetchOutcome::Failed(e) => FetchOutcome::Failed(e),
        }
    }

    async fn kline(&self, code: &StockCode, granularity: Granularity) -> FetchOutcome<KlineSeries> {
        self.fetch(
            "/api/kline",
            &[("code", code.as_str()), ("type", granularity.as_param())],
        )
        .await
    }

    async fn minute(&self, code: &StockCode) -> FetchOutcome<MinuteSeries> {
        self.fetch("/api/minute", &[("code", code.as_str())]).await
    }

    async fn trade(&self, code: &StockCode) -> FetchOutcome<TradeSeries> {
        self.fetch("/api/trade", &[("code", code.as_str())]).await
    }
}
