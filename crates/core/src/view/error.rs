use thiserror::Error;

/// # Summary
/// 看板视图层错误枚举，覆盖用户输入校验与渲染层故障。
///
/// # Invariants
/// - 输入类错误均在发起请求之前产生。
#[derive(Error, Debug)]
pub enum ViewError {
    // 关键字为空或全为空白
    #[error("请输入股票代码或名称")]
    EmptyKeyword,
    // 选择的候选序号超出范围
    #[error("候选序号 {index} 超出范围 (共 {len} 项)")]
    PickOutOfRange { index: usize, len: usize },
    // 未知的标签页名称
    #[error("未知的标签页: {0}")]
    UnknownTab(String),
    // 未知的 K 线周期
    #[error("未知的K线周期: {0}")]
    UnknownGranularity(String),
    // 候选项携带的代码不是合法的 6 位代码
    #[error("无效的股票代码: {0}")]
    InvalidCode(String),
    // 尚未选择任何证券
    #[error("尚未选择股票")]
    NoSelection,
    // 渲染层故障 (如图表配置写出失败)
    #[error("渲染失败: {0}")]
    Render(String),
}
