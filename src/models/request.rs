//! Calculation request models.

use serde::{Deserialize, Serialize};

use super::Adjustment;

/// A dependent child. Age is 만 나이 (completed years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// The child's age in completed years.
    pub age: i32,
}

/// Everything needed for one child support calculation.
///
/// Incomes are pre-tax monthly KRW. The imputed incomes are fallbacks used
/// only when the corresponding stated income is zero or below (e.g. a court
/// imputing earning capacity); a stated positive income always wins.
///
/// # Example
///
/// ```
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
/// assert_eq!(request.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Custodial parent's pre-tax monthly income (KRW).
    pub custodial_income_krw: i64,
    /// Non-custodial parent's pre-tax monthly income (KRW).
    pub non_custodial_income_krw: i64,
    /// The children the support is for; order is preserved in the result.
    pub children: Vec<Child>,
    /// Imputed income used when the custodial stated income is <= 0.
    #[serde(default)]
    pub custodial_imputed_income_krw: Option<i64>,
    /// Imputed income used when the non-custodial stated income is <= 0.
    #[serde(default)]
    pub non_custodial_imputed_income_krw: Option<i64>,
    /// Ordered adjustments applied to the scaled standard total.
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}
