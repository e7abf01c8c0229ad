//! The adjustment engine.
//!
//! Folds the request's ordered adjustment list into the running total, left
//! to right. Order matters and is preserved exactly as supplied; every
//! application is recorded for audit; the final total is clamped at zero.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, AdjustmentEffect, AdjustmentKind, AppliedAdjustment};

/// The outcome of running the adjustment list over a seed total.
#[derive(Debug, Clone)]
pub struct AdjustmentOutcome {
    /// The total after all adjustments, clamped at zero. Not yet rounded.
    pub adjusted_total_krw: Decimal,
    /// Audit records for every applied adjustment, in application order.
    pub applied: Vec<AppliedAdjustment>,
}

/// Applies an ordered list of adjustments to a seed total.
///
/// Every kind is validated before the first effect is applied, so an invalid
/// entry anywhere in the list cannot leave a partially adjusted total or a
/// partial audit trail behind.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAdjustment`] if any adjustment's kind is
/// unrecognized, and [`EngineError::AmountOverflow`] if an application would
/// leave the representable `Decimal` range.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use support_engine::calculation::apply_adjustments;
/// use support_engine::models::Adjustment;
///
/// let discount = Adjustment {
///     name: "asset".to_string(),
///     kind: "multiplier".to_string(),
///     value: Decimal::new(9, 1), // 0.9
///     is_percent: false,
///     notes: String::new(),
/// };
/// let outcome = apply_adjustments(Decimal::from(1_000_000), &[discount]).unwrap();
/// assert_eq!(outcome.adjusted_total_krw, Decimal::from(900_000));
/// ```
pub fn apply_adjustments(
    seed_krw: Decimal,
    adjustments: &[Adjustment],
) -> EngineResult<AdjustmentOutcome> {
    let kinds = adjustments
        .iter()
        .map(Adjustment::resolve_kind)
        .collect::<EngineResult<Vec<_>>>()?;

    let mut total = seed_krw;
    let mut applied = Vec::with_capacity(adjustments.len());

    for (adjustment, kind) in adjustments.iter().zip(kinds) {
        let overflow = || EngineError::AmountOverflow {
            context: format!("adjustment '{}'", adjustment.name),
        };
        let effect = match kind {
            AdjustmentKind::Factor => {
                total = total.checked_mul(adjustment.value).ok_or_else(overflow)?;
                AdjustmentEffect::Multiplier {
                    effective_multiplier: adjustment.value,
                }
            }
            AdjustmentKind::PercentRate => {
                let multiplier = Decimal::ONE
                    .checked_add(adjustment.value)
                    .ok_or_else(overflow)?;
                total = total.checked_mul(multiplier).ok_or_else(overflow)?;
                AdjustmentEffect::Multiplier {
                    effective_multiplier: multiplier,
                }
            }
            AdjustmentKind::AddAmount => {
                total = total.checked_add(adjustment.value).ok_or_else(overflow)?;
                AdjustmentEffect::Add {
                    effective_add_krw: adjustment.value,
                }
            }
            AdjustmentKind::SubtractAmount => {
                total = total.checked_sub(adjustment.value).ok_or_else(overflow)?;
                AdjustmentEffect::Subtract {
                    effective_subtract_krw: adjustment.value,
                }
            }
        };
        applied.push(AppliedAdjustment {
            adjustment: adjustment.clone(),
            effect,
        });
    }

    // The adjusted total never goes below zero regardless of adjustment
    // values.
    if total < Decimal::ZERO {
        total = Decimal::ZERO;
    }

    Ok(AdjustmentOutcome {
        adjusted_total_krw: total,
        applied,
    })
}
