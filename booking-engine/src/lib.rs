//! Booking Engine - 酒店预订金额对账与政策判定
//!
//! # 架构概述
//!
//! 纯计算库，不持有任何状态。调用方传入预订快照与当前时间，得到：
//!
//! - **金额** (`money`): 房费、费用、折扣汇总 (rust_decimal 精度)
//! - **支付状态** (`payment`): 已付 / 部分支付 / 未付，含历史数据修正
//! - **政策** (`policy`): 免费取消 / 免费改期判定
//! - **预订评估** (`booking`): 金额 + 政策合并后的操作可用性
//! - **优惠券** (`promotion`): 优惠草稿的整体替换
//!
//! # 模块结构
//!
//! ```text
//! booking-engine/src/
//! ├── core/          # 配置
//! ├── money/         # 金额计算
//! ├── payment/       # 支付状态解析 + legacy 修正
//! ├── policy/        # 取消 / 改期政策
//! ├── booking/       # 预订评估
//! ├── promotion/     # 优惠券草稿
//! └── utils/         # 日志、时区
//! ```

pub mod booking;
pub mod core;
pub mod money;
pub mod payment;
pub mod policy;
pub mod promotion;
pub mod utils;

// Re-export 公共类型
pub use booking::{ActionGate, BookingAssessment, UnavailableReason, assess_booking};
pub use core::{ConfigError, EngineConfig};
pub use money::{MoneyBreakdown, calc_money};
pub use payment::{
    AmountSource, LegacyCorrection, PaymentResolution, SettlementStatus, resolve_payment_status,
};
pub use policy::{
    PolicyDefaults, PolicyEvaluation, PolicyEvaluator, evaluate_policy, evaluate_policy_at,
};
pub use promotion::{CouponService, PromotionDraft, PromotionState, apply_promotion};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_config, try_init_logger};
