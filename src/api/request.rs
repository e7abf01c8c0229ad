//! Request types for the child support API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and its conversion into the domain request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Adjustment, CalculationRequest, Child};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequestBody {
    /// Custodial parent's pre-tax monthly income (KRW).
    pub custodial_income_krw: i64,
    /// Non-custodial parent's pre-tax monthly income (KRW).
    pub non_custodial_income_krw: i64,
    /// Ordered list of child ages (만 나이).
    pub children: Vec<i32>,
    /// Imputed income used when the custodial stated income is <= 0.
    #[serde(default)]
    pub custodial_imputed_income_krw: Option<i64>,
    /// Imputed income used when the non-custodial stated income is <= 0.
    #[serde(default)]
    pub non_custodial_imputed_income_krw: Option<i64>,
    /// Ordered adjustments to apply to the scaled standard total.
    #[serde(default)]
    pub adjustments: Vec<AdjustmentRequest>,
}

/// Adjustment information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// A caller-chosen name identifying the adjustment.
    pub name: String,
    /// The kind string: "multiplier", "add", or "subtract".
    pub kind: String,
    /// The multiplier, signed rate, or fixed KRW amount, depending on kind.
    pub value: Decimal,
    /// For "multiplier": interpret `value` as a signed fractional rate.
    #[serde(default)]
    pub is_percent: bool,
    /// Free-text rationale carried through to the audit record.
    #[serde(default)]
    pub notes: String,
}

impl From<CalculationRequestBody> for CalculationRequest {
    fn from(body: CalculationRequestBody) -> Self {
        CalculationRequest {
            custodial_income_krw: body.custodial_income_krw,
            non_custodial_income_krw: body.non_custodial_income_krw,
            children: body.children.into_iter().map(|age| Child { age }).collect(),
            custodial_imputed_income_krw: body.custodial_imputed_income_krw,
            non_custodial_imputed_income_krw: body.non_custodial_imputed_income_krw,
            adjustments: body.adjustments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<AdjustmentRequest> for Adjustment {
    fn from(req: AdjustmentRequest) -> Self {
        Adjustment {
            name: req.name,
            kind: req.kind,
            value: req.value,
            is_percent: req.is_percent,
            notes: req.notes,
        }
    }
}
