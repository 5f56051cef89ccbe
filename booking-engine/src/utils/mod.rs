//! 工具模块 - 通用工具函数
//!
//! - 日志初始化
//! - 业务时区 / 日历日计算

pub mod logger;
pub mod time;

pub use logger::{init_logger, init_logger_with_config, try_init_logger};
pub use time::{days_between, local_date, parse_timezone};
