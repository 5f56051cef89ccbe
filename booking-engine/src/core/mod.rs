//! 核心模块 - 引擎配置

pub mod config;

pub use config::{ConfigError, EngineConfig};
