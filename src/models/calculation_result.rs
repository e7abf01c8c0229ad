//! Calculation result models.
//!
//! The result records every intermediate quantity of the guideline method so
//! a caller can display or audit the full derivation, not just the final
//! payment.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::guideline::IncomeBracket;

use super::AppliedAdjustment;

/// The guideline cell resolved for one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildCell {
    /// The age bracket label, e.g. "6~8".
    pub age_label: String,
    /// The shared combined-income bracket, in 만원 units.
    pub income_bracket_mw: IncomeBracket,
    /// Average standard support for the cell (KRW/month); this is the value
    /// summed into the standard total.
    pub avg_krw: i64,
    /// Lower bound of the cell's range (KRW/month).
    pub low_krw: i64,
    /// Upper bound of the cell's range (KRW/month), if bounded.
    pub high_krw: Option<i64>,
}

/// The complete breakdown of one child support calculation.
///
/// # Example
///
/// ```
/// use support_engine::calculation::calculate_child_support;
/// use support_engine::models::{CalculationRequest, Child};
///
/// let request = CalculationRequest {
///     custodial_income_krw: 2_000_000,
///     non_custodial_income_krw: 3_000_000,
///     children: vec![Child { age: 8 }],
///     custodial_imputed_income_krw: None,
///     non_custodial_imputed_income_krw: None,
///     adjustments: vec![],
/// };
/// let result = calculate_child_support(&request).unwrap();
/// assert_eq!(result.combined_income_krw, 5_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Combined parental income in KRW (after imputation).
    pub combined_income_krw: i64,
    /// Combined income on the table's 만원 scale (truncating division).
    pub combined_income_mw: i64,
    /// Index of the shared income bracket on the table's income axis.
    pub income_bracket_index: usize,
    /// Bounds of the shared income bracket, in 만원 units.
    pub income_bracket_mw: IncomeBracket,
    /// Per-child resolved cells, in request order.
    pub children_cells: Vec<ChildCell>,
    /// Sum of per-child average amounts before scaling or adjustment (KRW).
    pub standard_total_krw: i64,
    /// The child-count scaling factor that was applied.
    pub child_count_multiplier: Decimal,
    /// Total after the multiplier and all adjustments, clamped at zero and
    /// rounded to whole KRW.
    pub adjusted_total_krw: i64,
    /// The non-custodial parent's income proportion, in [0, 1].
    pub non_custodial_share: Decimal,
    /// Final recommended payment in whole KRW (round half up).
    pub non_custodial_payment_krw: i64,
    /// Audit record of every adjustment actually applied, in order.
    pub applied_adjustments: Vec<AppliedAdjustment>,
}
