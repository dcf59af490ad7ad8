mod command;
mod console;
mod settings;

use command::{Command, HELP, execute};
use console::ConsoleSurface;
use quotedesk_core::config::LogConfig;
use quotedesk_feed::http::HttpMarketApi;
use quotedesk_view::dashboard::Dashboard;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// # Summary
/// 初始化日志：按天滚动写入 `log.dir`，避免与终端界面交错。
///
/// # Returns
/// 后台写线程的守卫，必须存活到进程退出。
fn init_logging(config: &LogConfig) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let appender = tracing_appender::rolling::daily(&config.dir, "quotedesk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

/// # Summary
/// 应用启动入口。
///
/// # Logic
/// 1. 加载配置 (可选的第一个命令行参数为配置文件路径) 并初始化日志。
/// 2. 实例化 HTTP 行情客户端与终端渲染层，装配看板控制器。
/// 3. 后台任务持续消费布局任务。
/// 4. 逐行读取标准输入并派发指令，每条指令独立运行，较新的选择会使较早的响应失效。
/// 5. 收到 quit、输入结束或 Ctrl-C 时退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = settings::load(config_path.as_deref())?;
    let _log_guard = init_logging(&config.log)?;
    info!("quotedesk starting, backend {}", config.api.base_url);

    // 2. 装配
    let api = Arc::new(HttpMarketApi::new(&config.api)?);
    let surface = ConsoleSurface::new(std::io::stdout(), &config.view.chart_dir);
    let (dashboard, mut layout_rx) = Dashboard::new(api, Box::new(surface), &config.view);
    let dashboard = Arc::new(dashboard);

    // 3. 布局任务
    let layout_dashboard = dashboard.clone();
    let layout_task = tokio::spawn(async move {
        while let Some(task) = layout_rx.recv().await {
            layout_dashboard.apply_layout(task).await;
        }
    });

    // 4. 指令循环
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed");
                    break;
                };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(command) => {
                        let dashboard = dashboard.clone();
                        tokio::spawn(async move {
                            execute(&dashboard, command).await;
                        });
                    }
                    Err(e) => {
                        warn!("invalid command '{}': {}", line, e);
                        println!("[提示] {}", e);
                    }
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    layout_task.abort();
    info!("quotedesk exiting");
    Ok(())
}
