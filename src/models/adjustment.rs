//! Adjustment models.
//!
//! The guideline lists add/sub factors (asset situation, residence region,
//! high medical or education costs, personal rehabilitation) but prescribes
//! no single mandatory multiplier for most of them, so adjustments are
//! caller-supplied: a named modifier with a kind and a numeric value, applied
//! to the running total in exactly the order given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A caller-supplied modifier applied to the total standard support.
///
/// `kind` is one of `"multiplier"`, `"add"`, or `"subtract"`; combined with
/// `is_percent` this yields the four recognized behaviors:
///
/// - `multiplier` with `is_percent = false`: multiply the total by `value`
/// - `multiplier` with `is_percent = true`: multiply the total by `1 + value`
/// - `add`: add `value` KRW
/// - `subtract`: subtract `value` KRW
///
/// Any other kind string is rejected with
/// [`EngineError::InvalidAdjustment`] before it can take effect.
///
/// # Example
///
/// ```
/// use support_engine::models::Adjustment;
///
/// let adjustment: Adjustment = serde_json::from_str(
///     r#"{"name": "urban", "kind": "multiplier", "value": 0.05, "is_percent": true}"#,
/// ).unwrap();
/// assert!(adjustment.resolve_kind().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
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

impl Adjustment {
    /// Parses the kind string and percent flag into the recognized sum type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAdjustment`] for an unrecognized kind.
    pub fn resolve_kind(&self) -> EngineResult<AdjustmentKind> {
        match (self.kind.as_str(), self.is_percent) {
            ("multiplier", false) => Ok(AdjustmentKind::Factor),
            ("multiplier", true) => Ok(AdjustmentKind::PercentRate),
            ("add", _) => Ok(AdjustmentKind::AddAmount),
            ("subtract", _) => Ok(AdjustmentKind::SubtractAmount),
            _ => Err(EngineError::InvalidAdjustment {
                name: self.name.clone(),
                kind: self.kind.clone(),
            }),
        }
    }
}

/// The recognized adjustment behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    /// Multiply the total by the value directly (e.g. 0.9).
    Factor,
    /// Multiply the total by one plus the value (e.g. 0.05 for +5%).
    PercentRate,
    /// Add a fixed KRW amount.
    AddAmount,
    /// Subtract a fixed KRW amount.
    SubtractAmount,
}

/// The concrete effect one applied adjustment had on the running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdjustmentEffect {
    /// The total was multiplied.
    Multiplier {
        /// The factor actually applied (for percent rates, `1 + value`).
        effective_multiplier: Decimal,
    },
    /// A fixed amount was added.
    Add {
        /// The KRW amount added.
        effective_add_krw: Decimal,
    },
    /// A fixed amount was subtracted.
    Subtract {
        /// The KRW amount subtracted.
        effective_subtract_krw: Decimal,
    },
}

/// Audit record of one applied adjustment: the adjustment as declared plus
/// the effect it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedAdjustment {
    /// The adjustment exactly as the caller supplied it.
    #[serde(flatten)]
    pub adjustment: Adjustment,
    /// The concrete effect on the running total.
    #[serde(flatten)]
    pub effect: AdjustmentEffect,
}
