//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 报告输出配置
    #[serde(default)]
    pub report: ReportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（tracing 过滤指令）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// 构造 EnvFilter 使用的过滤指令
    pub fn filter_directive(&self) -> String {
        format!("{},bylines={}", self.level, self.level)
    }
}

/// 报告输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// 是否格式化输出 JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
        assert!(config.report.pretty);
    }

    #[test]
    fn test_filter_directive() {
        let config = LogConfig {
            level: "debug".to_string(),
            json: false,
        };
        assert_eq!(config.filter_directive(), "debug,bylines=debug");
    }
}
