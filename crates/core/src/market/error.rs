use thiserror::Error;

/// # Summary
/// 行情数据域错误枚举，处理网络、解析、业务码及输入校验等问题。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum MarketError {
    // 网络层错误，包含底层 HTTP 客户端错误信息
    #[error("Network error: {0}")]
    Network(String),
    // 数据解析错误，如 JSON 格式不匹配
    #[error("Parse error: {0}")]
    Parse(String),
    // 后端返回了非 0 业务码
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
    // 请求的数据未找到 (404)
    #[error("Data not found")]
    NotFound,
    // 请求参数不合法，未发出请求
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
