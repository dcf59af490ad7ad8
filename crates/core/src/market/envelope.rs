use crate::market::entity::{KlineSeries, MinuteSeries, Quote, SearchHit, TradeSeries};
use crate::market::error::MarketError;
use serde::{Deserialize, Serialize};

/// # Summary
/// 后端统一响应信封 `{code, message, data}`。
///
/// # Invariants
/// - `code == 0` 表示成功，其余均为业务失败。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T: Payload> Envelope<T> {
    /// # Summary
    /// 将信封归一化为单次请求的结果。
    ///
    /// # Logic
    /// 1. 非 0 业务码转为 `Failed(MarketError::Api)`。
    /// 2. 成功但负载为空 (null 或空列表) 视为 `Empty`，不是错误。
    /// 3. 其余为 `Data`。
    pub fn into_outcome(self) -> FetchOutcome<T> {
        if self.code != 0 {
            return FetchOutcome::Failed(MarketError::Api {
                code: self.code,
                message: self.message,
            });
        }
        match self.data {
            Some(data) if !data.is_empty_payload() => FetchOutcome::Data(data),
            _ => FetchOutcome::Empty,
        }
    }
}

/// 可判空的负载
pub trait Payload {
    fn is_empty_payload(&self) -> bool;
}

impl<T> Payload for Vec<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl Payload for Quote {
    fn is_empty_payload(&self) -> bool {
        self.code.is_empty()
    }
}

impl Payload for KlineSeries {
    fn is_empty_payload(&self) -> bool {
        self.list.is_empty()
    }
}

impl Payload for MinuteSeries {
    fn is_empty_payload(&self) -> bool {
        self.list.is_empty()
    }
}

impl Payload for TradeSeries {
    fn is_empty_payload(&self) -> bool {
        self.list.is_empty()
    }
}

impl Payload for SearchHit {
    fn is_empty_payload(&self) -> bool {
        self.code.is_empty()
    }
}

/// # Summary
/// 单次抓取的统一结果，面板据此一致地响应。
///
/// # Invariants
/// - `Empty` 是成功的一种，不应弹窗报错。
#[derive(Debug)]
pub enum FetchOutcome<T> {
    // 有数据
    Data(T),
    // 成功但无数据
    Empty,
    // 网络、解析或业务失败
    Failed(MarketError),
}

impl<T> FetchOutcome<T> {
    /// 将传输层结果并入，传输失败即 `Failed`
    pub fn from_result(result: Result<FetchOutcome<T>, MarketError>) -> Self {
        result.unwrap_or_else(FetchOutcome::Failed)
    }

    pub fn data(self) -> Option<T> {
        match self {
            FetchOutcome::Data(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FetchOutcome::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    // 与 HTTP 客户端相同的泛型约束：负载类型不要求实现 Default
    fn decode<T: DeserializeOwned + Payload>(body: &str) -> FetchOutcome<T> {
        match serde_json::from_str::<Envelope<T>>(body) {
            Ok(env) => env.into_outcome(),
            Err(e) => FetchOutcome::Failed(MarketError::Parse(e.to_string())),
        }
    }

    #[test]
    fn test_generic_decode_without_default_payload() {
        let quotes: FetchOutcome<Vec<Quote>> = decode(r#"{"code": 0, "message": "success"}"#);
        assert!(quotes.is_empty());

        let hits: FetchOutcome<Vec<SearchHit>> = decode(
            r#"{"code": 0, "data": [{"code": "600519", "name": "贵州茅台", "exchange": "sh"}]}"#,
        );
        let hits = hits.data().unwrap();
        assert_eq!(hits[0].code, "600519");
    }

    #[test]
    fn test_nonzero_code_is_failure() {
        let env: Envelope<Vec<SearchHit>> = serde_json::from_str(
            r#"{"code": -1, "message": "搜索关键词不能为空", "data": null}"#,
        )
        .unwrap();
        match env.into_outcome() {
            FetchOutcome::Failed(MarketError::Api { code, message }) => {
                assert_eq!(code, -1);
                assert_eq!(message, "搜索关键词不能为空");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_null_or_empty_payload_is_empty() {
        let env: Envelope<Vec<SearchHit>> =
            serde_json::from_str(r#"{"code": 0, "message": "success", "data": null}"#).unwrap();
        assert!(env.into_outcome().is_empty());

        let env: Envelope<KlineSeries> =
            serde_json::from_str(r#"{"code": 0, "data": {"Count": 0, "List": []}}"#).unwrap();
        assert!(env.into_outcome().is_empty());
    }

    #[test]
    fn test_missing_data_field_is_empty() {
        let env: Envelope<TradeSeries> = serde_json::from_str(r#"{"code": 0}"#).unwrap();
        assert!(env.into_outcome().is_empty());
    }
}
