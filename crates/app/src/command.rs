use quotedesk_core::common::Granularity;
use quotedesk_core::view::entity::Tab;
use quotedesk_core::view::error::ViewError;
use quotedesk_view::dashboard::Dashboard;
use tracing::{info, warn};

/// 终端输入的一条指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // 关键字或 6 位代码
    Search(String),
    // 选择候选项 (从 0 开始)
    Pick(usize),
    Kline(Granularity),
    Tab(Tab),
    Resize,
    Help,
    Quit,
}

pub const HELP: &str = "\
指令:
  <关键字|6位代码>   搜索或直接加载
  pick <序号>        选择搜索结果
  kline <周期>       切换K线周期 (day week month minute30 minute15 minute5)
  tab <标签页>       切换标签页 (quote kline minute trade)
  resize             模拟窗口尺寸变化
  help               显示本帮助
  quit               退出";

impl Command {
    /// # Summary
    /// 解析一行输入。
    ///
    /// # Logic
    /// 1. 识别保留字 `pick` / `kline` / `tab` / `resize` / `help` / `quit`。
    /// 2. `pick` 后不是正整数时整行按关键字处理。
    /// 3. 其余一律视为搜索关键字 (空行交给看板校验)。
    pub fn parse(line: &str) -> Result<Self, ViewError> {
        let line = line.trim();
        let mut parts = line.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or("");
        let arg = parts.next().map(str::trim).unwrap_or("");

        match (head.to_lowercase().as_str(), arg) {
            ("quit" | "exit", "") => Ok(Command::Quit),
            ("help", "") => Ok(Command::Help),
            ("resize", "") => Ok(Command::Resize),
            ("kline", g) if !g.is_empty() => g
                .parse()
                .map(Command::Kline)
                .map_err(|_| ViewError::UnknownGranularity(g.to_string())),
            ("tab", t) if !t.is_empty() => t
                .parse()
                .map(Command::Tab)
                .map_err(|_| ViewError::UnknownTab(t.to_string())),
            ("pick", n) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Command::Pick(n - 1)),
                _ => Ok(Command::Search(line.to_string())),
            },
            _ => Ok(Command::Search(line.to_string())),
        }
    }
}

/// # Summary
/// 在看板上执行一条指令。
///
/// # Logic
/// 1. 面向用户的提示已由看板通过渲染层给出，这里只记录日志。
pub async fn execute(dashboard: &Dashboard, command: Command) {
    match command {
        Command::Search(keyword) => match dashboard.search(&keyword).await {
            Ok(outcome) => info!("search '{}' -> {:?}", keyword, outcome),
            Err(e) => warn!("search rejected: {}", e),
        },
        Command::Pick(index) => match dashboard.pick(index).await {
            Ok(report) => info!("picked #{} -> {:?}", index + 1, report),
            Err(e) => warn!("pick rejected: {}", e),
        },
        Command::Kline(granularity) => match dashboard.switch_granularity(granularity).await {
            Ok(status) => info!("kline {} -> {:?}", granularity, status),
            Err(e) => warn!("kline switch rejected: {}", e),
        },
        Command::Tab(tab) => dashboard.switch_tab(tab).await,
        Command::Resize => dashboard.window_resized().await,
        Command::Help | Command::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse(" resize ").unwrap(), Command::Resize);
        assert_eq!(Command::parse("pick 2").unwrap(), Command::Pick(1));
        assert_eq!(Command::parse("kline week").unwrap(), Command::Kline(Granularity::Week));
        assert_eq!(Command::parse("kline 周K").unwrap(), Command::Kline(Granularity::Week));
        assert_eq!(Command::parse("tab minute").unwrap(), Command::Tab(Tab::Minute));
    }

    #[test]
    fn test_everything_else_is_a_keyword() {
        assert_eq!(Command::parse("600519").unwrap(), Command::Search("600519".to_string()));
        assert_eq!(Command::parse("贵州 茅台").unwrap(), Command::Search("贵州 茅台".to_string()));
        assert_eq!(Command::parse("pick 0").unwrap(), Command::Search("pick 0".to_string()));
        assert_eq!(Command::parse("   ").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn test_unknown_arguments_are_rejected() {
        assert!(matches!(
            Command::parse("kline hourly"),
            Err(ViewError::UnknownGranularity(g)) if g == "hourly"
        ));
        assert!(matches!(Command::parse("tab news"), Err(ViewError::UnknownTab(_))));
    }
}
