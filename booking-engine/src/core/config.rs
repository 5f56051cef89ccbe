use crate::policy::PolicyDefaults;
use crate::utils::time::parse_timezone;
use chrono_tz::Tz;
use shared::error::AppError;
use thiserror::Error;

/// Default business timezone for calendar-day arithmetic
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Ho_Chi_Minh;

/// 引擎配置 - 预订计算引擎的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BOOKING_TIMEZONE | Asia/Ho_Chi_Minh | 业务时区 (日历日计算) |
/// | DEFAULT_FREE_CANCELLATION_DAYS | 1 | 政策缺失时的免费取消天数 |
/// | DEFAULT_FREE_RESCHEDULE_DAYS | 3 | 政策缺失时的免费改期天数 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志格式 |
///
/// # 示例
///
/// ```ignore
/// BOOKING_TIMEZONE=Europe/Madrid DEFAULT_FREE_CANCELLATION_DAYS=2 cargo test
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// 业务时区，check-in 与当前时间都归一到该时区的日历日
    pub timezone: Tz,
    /// 政策字段缺失时使用的默认免费窗口
    pub policy_defaults: PolicyDefaults,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: unknown timezone '{value}'")]
    InvalidTimezone { key: &'static str, value: String },
    #[error("{key}: expected a non-negative integer, got '{value}'")]
    InvalidDays { key: &'static str, value: String },
    #[error("{key}: expected true or false, got '{value}'")]
    InvalidFlag { key: &'static str, value: String },
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            policy_defaults: PolicyDefaults::default(),
            log_level: "info".into(),
            log_json: false,
        }
    }
}

impl EngineConfig {
    /// 加载 `.env` (如果存在) 后从环境变量读取配置
    pub fn load() -> Self {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        Self::from_env()
    }

    /// 从环境变量加载配置
    ///
    /// 非法值记录警告并回退到默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 严格模式：任何非法值都返回错误
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    /// Lenient load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            timezone: read_or_default(&lookup, "BOOKING_TIMEZONE", read_timezone, defaults.timezone),
            policy_defaults: PolicyDefaults {
                free_cancellation_days: read_or_default(
                    &lookup,
                    "DEFAULT_FREE_CANCELLATION_DAYS",
                    read_days,
                    defaults.policy_defaults.free_cancellation_days,
                ),
                free_reschedule_days: read_or_default(
                    &lookup,
                    "DEFAULT_FREE_RESCHEDULE_DAYS",
                    read_days,
                    defaults.policy_defaults.free_reschedule_days,
                ),
            },
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: read_or_default(&lookup, "LOG_JSON", read_flag, defaults.log_json),
        }
    }

    /// Strict load from an arbitrary key lookup
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            timezone: read_strict(&lookup, "BOOKING_TIMEZONE", read_timezone)?
                .unwrap_or(defaults.timezone),
            policy_defaults: PolicyDefaults {
                free_cancellation_days: read_strict(&lookup, "DEFAULT_FREE_CANCELLATION_DAYS", read_days)?
                    .unwrap_or(defaults.policy_defaults.free_cancellation_days),
                free_reschedule_days: read_strict(&lookup, "DEFAULT_FREE_RESCHEDULE_DAYS", read_days)?
                    .unwrap_or(defaults.policy_defaults.free_reschedule_days),
            },
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: read_strict(&lookup, "LOG_JSON", read_flag)?.unwrap_or(defaults.log_json),
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(timezone: Tz, policy_defaults: PolicyDefaults) -> Self {
        Self {
            timezone,
            policy_defaults,
            ..Self::default()
        }
    }
}

type Reader<T> = fn(&'static str, &str) -> Result<T, ConfigError>;

fn read_strict<F, T>(lookup: &F, key: &'static str, read: Reader<T>) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|raw| read(key, &raw)).transpose()
}

fn read_or_default<F, T>(lookup: &F, key: &'static str, read: Reader<T>, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
{
    match read_strict(lookup, key, read) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid configuration value, using default");
            default
        }
    }
}

fn read_timezone(key: &'static str, raw: &str) -> Result<Tz, ConfigError> {
    parse_timezone(raw).ok_or_else(|| ConfigError::InvalidTimezone {
        key,
        value: raw.to_string(),
    })
}

fn read_days(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|days| *days >= 0)
        .ok_or_else(|| ConfigError::InvalidDays {
            key,
            value: raw.to_string(),
        })
}

fn read_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    raw.trim()
        .to_ascii_lowercase()
        .parse::<bool>()
        .map_err(|_| ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.timezone, chrono_tz::Asia::Ho_Chi_Minh);
        assert_eq!(config.policy_defaults.free_cancellation_days, 1);
        assert_eq!(config.policy_defaults.free_reschedule_days, 3);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("BOOKING_TIMEZONE", "Europe/Madrid"),
            ("DEFAULT_FREE_CANCELLATION_DAYS", "2"),
            ("DEFAULT_FREE_RESCHEDULE_DAYS", "7"),
            ("LOG_LEVEL", "debug"),
            ("LOG_JSON", "TRUE"),
        ]));
        assert_eq!(config.timezone, chrono_tz::Europe::Madrid);
        assert_eq!(config.policy_defaults.free_cancellation_days, 2);
        assert_eq!(config.policy_defaults.free_reschedule_days, 7);
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    fn test_lenient_load_falls_back_per_key() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("BOOKING_TIMEZONE", "Nowhere/City"),
            ("DEFAULT_FREE_CANCELLATION_DAYS", "-1"),
            ("DEFAULT_FREE_RESCHEDULE_DAYS", "5"),
        ]));
        assert_eq!(config.timezone, DEFAULT_TIMEZONE);
        assert_eq!(config.policy_defaults.free_cancellation_days, 1);
        assert_eq!(config.policy_defaults.free_reschedule_days, 5);
    }

    #[test]
    fn test_strict_load_reports_first_bad_key() {
        let err = EngineConfig::try_from_lookup(lookup_from(&[("BOOKING_TIMEZONE", "Nowhere/City")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimezone {
                key: "BOOKING_TIMEZONE",
                value: "Nowhere/City".into()
            }
        );

        let err = EngineConfig::try_from_lookup(lookup_from(&[(
            "DEFAULT_FREE_RESCHEDULE_DAYS",
            "three",
        )]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "DEFAULT_FREE_RESCHEDULE_DAYS: expected a non-negative integer, got 'three'"
        );

        let app_err: AppError = err.into();
        assert_eq!(app_err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_with_overrides() {
        let defaults = PolicyDefaults {
            free_cancellation_days: 0,
            free_reschedule_days: 1,
        };
        let config = EngineConfig::with_overrides(chrono_tz::UTC, defaults);
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.policy_defaults, defaults);
        assert_eq!(config.log_level, "info");
    }
}
