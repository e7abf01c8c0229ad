//! The end-to-end calculation pipeline.
//!
//! Implements the guideline method: validate, impute incomes, resolve the
//! shared income bracket, sum per-child standard support, scale by child
//! count, apply adjustments, and allocate the total to the non-custodial
//! parent by income proportion.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::guideline::{INCOME_UNIT_KRW, child_count_multiplier, resolve_income_bracket};
use crate::models::{CalculationRequest, CalculationResult};

use super::adjustments::apply_adjustments;
use super::child_cells::resolve_child_cells;

/// Engine version stamped into every result.
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Substitutes the imputed income when the stated income is zero or below.
///
/// A stated positive income always wins; a stated zero (or negative) income
/// with no imputed fallback stays as stated. Kept as an explicit conditional
/// so the zero-income policy stays visible.
fn effective_income(stated_krw: i64, imputed_krw: Option<i64>) -> i64 {
    if stated_krw <= 0 {
        match imputed_krw {
            Some(imputed) => imputed,
            None => stated_krw,
        }
    } else {
        stated_krw
    }
}

/// Rounds a non-negative KRW amount to whole KRW, half up.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] when the rounded amount does not
/// fit a whole-KRW `i64`, which only adjustments with extreme values can
/// produce.
fn round_half_up_krw(amount: Decimal, context: &str) -> EngineResult<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::AmountOverflow {
            context: context.to_string(),
        })
}

/// Calculates the recommended monthly child support for a request.
///
/// This is the single entry point of the engine: a pure function of the
/// request against the compiled-in 2021 table, safe to call concurrently.
///
/// # Errors
///
/// - [`EngineError::EmptyChildren`] when the request has no children.
/// - [`EngineError::NegativeIncome`] when either parent's income is negative
///   after imputation.
/// - [`EngineError::AgeOutOfRange`] when a child's age is outside 0~18.
/// - [`EngineError::InvalidAdjustment`] when an adjustment kind is
///   unrecognized.
/// - [`EngineError::AmountOverflow`] when incomes or adjusted totals leave
///   the representable range.
///
/// Any error aborts the whole calculation; no partial result is produced.
/// A combined income of zero is not an error: the share and payment are
/// both zero.
pub fn calculate_child_support(request: &CalculationRequest) -> EngineResult<CalculationResult> {
    if request.children.is_empty() {
        return Err(EngineError::EmptyChildren);
    }

    let custodial_krw = effective_income(
        request.custodial_income_krw,
        request.custodial_imputed_income_krw,
    );
    let non_custodial_krw = effective_income(
        request.non_custodial_income_krw,
        request.non_custodial_imputed_income_krw,
    );

    if custodial_krw < 0 {
        return Err(EngineError::NegativeIncome {
            parent: "custodial".to_string(),
            amount_krw: custodial_krw,
        });
    }
    if non_custodial_krw < 0 {
        return Err(EngineError::NegativeIncome {
            parent: "non-custodial".to_string(),
            amount_krw: non_custodial_krw,
        });
    }

    let combined_krw = custodial_krw
        .checked_add(non_custodial_krw)
        .ok_or_else(|| EngineError::AmountOverflow {
            context: "combined parental income".to_string(),
        })?;
    let (income_bracket_index, income_bracket) = resolve_income_bracket(combined_krw);

    let child_cells = resolve_child_cells(&request.children, income_bracket_index, income_bracket)?;

    let multiplier = child_count_multiplier(request.children.len());
    let seed_krw = Decimal::from(child_cells.standard_total_krw) * multiplier;

    let outcome = apply_adjustments(seed_krw, &request.adjustments)?;

    let non_custodial_share = if combined_krw == 0 {
        // Degenerate but valid: both parents at zero income. In practice a
        // court would impute income; here the share and payment are zero.
        Decimal::ZERO
    } else {
        Decimal::from(non_custodial_krw) / Decimal::from(combined_krw)
    };

    // Payment is computed from the unrounded adjusted total; the reported
    // adjusted total is rounded to whole KRW for display.
    let payment_krw = round_half_up_krw(
        outcome.adjusted_total_krw * non_custodial_share,
        "non-custodial payment",
    )?;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        combined_income_krw: combined_krw,
        combined_income_mw: combined_krw / INCOME_UNIT_KRW,
        income_bracket_index,
        income_bracket_mw: *income_bracket,
        children_cells: child_cells.cells,
        standard_total_krw: child_cells.standard_total_krw,
        child_count_multiplier: multiplier,
        adjusted_total_krw: round_half_up_krw(outcome.adjusted_total_krw, "adjusted total")?,
        non_custodial_share,
        non_custodial_payment_krw: payment_krw,
        applied_adjustments: outcome.applied,
    })
}
