//! Promotion (coupon) draft
//!
//! A booking draft either carries a fully validated promotion or none at
//! all. Every coupon attempt produces a fresh [`PromotionState`]; a failed or
//! inconsistent attempt resets to the baseline instead of leaving half of the
//! previous promotion behind.

use crate::money::{MONEY_TOLERANCE, saturating_sub, to_f64, to_money};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CouponOutcome, CouponRequest};

/// Coupon-application collaborator
#[async_trait]
pub trait CouponService: Send + Sync {
    async fn apply_coupon(&self, request: &CouponRequest) -> AppResult<CouponOutcome>;
}

/// A promotion that passed validation against the booking total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionDraft {
    pub promotion_id: String,
    pub promotion_code: String,
    pub discount_amount: Decimal,
    pub final_total: Decimal,
}

/// Promotion part of a booking draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "PromotionView")]
pub enum PromotionState {
    Applied(PromotionDraft),
    NotApplied { final_total: Decimal },
}

/// Flat wire form: `{promotionId, promotionCode, discountAmount, finalTotal}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionView {
    pub promotion_id: Option<String>,
    pub promotion_code: Option<String>,
    pub discount_amount: f64,
    pub final_total: f64,
}

impl PromotionState {
    /// No promotion: zero discount, the full total is payable
    pub fn baseline(total: Decimal) -> Self {
        PromotionState::NotApplied {
            final_total: total.max(Decimal::ZERO),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, PromotionState::Applied(_))
    }

    pub fn draft(&self) -> Option<&PromotionDraft> {
        match self {
            PromotionState::Applied(draft) => Some(draft),
            PromotionState::NotApplied { .. } => None,
        }
    }

    pub fn discount_amount(&self) -> Decimal {
        self.draft().map_or(Decimal::ZERO, |d| d.discount_amount)
    }

    pub fn final_total(&self) -> Decimal {
        match self {
            PromotionState::Applied(draft) => draft.final_total,
            PromotionState::NotApplied { final_total } => *final_total,
        }
    }
}

impl From<PromotionState> for PromotionView {
    fn from(state: PromotionState) -> Self {
        match state {
            PromotionState::Applied(draft) => PromotionView {
                promotion_id: Some(draft.promotion_id),
                promotion_code: Some(draft.promotion_code),
                discount_amount: to_f64(draft.discount_amount),
                final_total: to_f64(draft.final_total),
            },
            PromotionState::NotApplied { final_total } => PromotionView {
                promotion_id: None,
                promotion_code: None,
                discount_amount: 0.0,
                final_total: to_f64(final_total),
            },
        }
    }
}

/// Check a coupon outcome against the total it was requested for
///
/// A missing `finalAmount` is derived as `total − discount`.
pub fn validate_outcome(
    outcome: &CouponOutcome,
    requested_code: &str,
    total: Decimal,
) -> AppResult<PromotionDraft> {
    if !outcome.is_success() {
        let message = outcome
            .message
            .clone()
            .unwrap_or_else(|| ErrorCode::PromotionRejected.message().to_string());
        return Err(AppError::promotion_rejected(message).with_detail("code", requested_code));
    }

    let promotion_id = outcome
        .promotion_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| inconsistent("Coupon outcome has no promotionId"))?;

    let discount = to_money(outcome.discount);
    let final_total = outcome
        .final_amount
        .map(|amount| to_money(Some(amount)))
        .unwrap_or_else(|| saturating_sub(total, discount));

    if discount.is_sign_negative() || final_total.is_sign_negative() {
        return Err(inconsistent("Coupon outcome has negative amounts")
            .with_detail("discount", to_f64(discount))
            .with_detail("finalAmount", to_f64(final_total)));
    }
    if discount > total {
        return Err(inconsistent("Coupon discount exceeds booking total")
            .with_detail("discount", to_f64(discount))
            .with_detail("total", to_f64(total)));
    }
    let expected = saturating_sub(total, discount);
    if saturating_sub(expected, final_total).abs() > MONEY_TOLERANCE {
        return Err(inconsistent("Coupon final amount does not match total minus discount")
            .with_detail("expected", to_f64(expected))
            .with_detail("finalAmount", to_f64(final_total)));
    }

    let promotion_code = outcome
        .code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(requested_code)
        .to_string();

    Ok(PromotionDraft {
        promotion_id: promotion_id.to_string(),
        promotion_code,
        discount_amount: discount,
        final_total,
    })
}

/// Apply a coupon code to a booking total
///
/// Never fails: any rejection, service error or inconsistent answer yields
/// [`PromotionState::baseline`].
pub async fn apply_promotion<S>(service: &S, code: &str, total: Decimal) -> PromotionState
where
    S: CouponService + ?Sized,
{
    let code = code.trim();
    if code.is_empty() {
        return PromotionState::baseline(total);
    }

    let request = CouponRequest {
        code: code.to_string(),
        total_amount: to_f64(total),
    };
    let outcome = match service.apply_coupon(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(
                code,
                error = %e,
                error_code = e.code.code(),
                category = e.category().name(),
                "Coupon service failed, promotion cleared"
            );
            return PromotionState::baseline(total);
        }
    };

    match validate_outcome(&outcome, code, total) {
        Ok(draft) => {
            tracing::info!(
                code = %draft.promotion_code,
                promotion_id = %draft.promotion_id,
                discount = %draft.discount_amount,
                final_total = %draft.final_total,
                "Promotion applied"
            );
            PromotionState::Applied(draft)
        }
        Err(e) => {
            tracing::warn!(
                code,
                error = %e,
                error_code = e.code.code(),
                category = e.category().name(),
                "Coupon outcome rejected, promotion cleared"
            );
            PromotionState::baseline(total)
        }
    }
}

fn inconsistent(message: &str) -> AppError {
    AppError::with_message(ErrorCode::PromotionInconsistent, message)
}
