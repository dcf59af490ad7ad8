use config::{Config, ConfigError, Environment, File};
use quotedesk_core::config::AppConfig;
use std::path::Path;

/// 默认配置文件名 (工作目录下，可缺省)
pub const DEFAULT_FILE: &str = "quotedesk";

/// 环境变量前缀，例如 `QUOTEDESK__API__BASE_URL`
pub const ENV_PREFIX: &str = "QUOTEDESK";

/// # Summary
/// 分层加载应用配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 作为最底层。
/// 2. 叠加工作目录下可选的 `quotedesk.toml`。
/// 3. 若指定了 `path`，叠加该文件 (必须存在)。
/// 4. 最后叠加 `QUOTEDESK__` 前缀的环境变量，层级以 `__` 分隔。
///
/// # Arguments
/// * `path`: 命令行指定的配置文件路径。
///
/// # Returns
/// 合并后的配置；文件缺失 (仅限显式指定时) 或格式错误返回 `ConfigError`。
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(DEFAULT_FILE).required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_files() -> anyhow::Result<()> {
        let config = load(None)?;
        assert_eq!(config.view.trade_rows, 200);
        assert_eq!(config.view.resize_debounce_ms, 100);
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    }

    #[test]
    fn test_file_overrides_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("desk.toml");
        let mut file = std::fs::File::create(&path)?;
        writeln!(
            file,
            r#"
[api]
base_url = "http://10.0.0.5:9000/"

[view]
trade_rows = 50
utc_offset_minutes = 480
"#
        )?;

        let config = load(Some(&path))?;
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000/");
        assert_eq!(config.view.trade_rows, 50);
        assert_eq!(config.view.utc_offset_minutes, Some(480));
        // 未出现在文件中的字段保持默认
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.log.level, "info");
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
