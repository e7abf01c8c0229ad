//! Error types for the child support calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Every variant is a caller-input error: any failure aborts the whole
//! calculation with no partial result, and nothing here is retryable.

use thiserror::Error;

/// The main error type for the child support calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use support_engine::error::EngineError;
///
/// let error = EngineError::AgeOutOfRange { age: 19 };
/// assert_eq!(error.to_string(), "Child age out of supported range (0~18): 19");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A child's age falls outside the guideline table's bracket range.
    #[error("Child age out of supported range (0~18): {age}")]
    AgeOutOfRange {
        /// The age that did not match any bracket.
        age: i32,
    },

    /// A parent's income is negative after imputation was resolved.
    #[error("Income for the {parent} parent cannot be negative: {amount_krw} KRW")]
    NegativeIncome {
        /// Which parent the income belongs to ("custodial" or "non-custodial").
        parent: String,
        /// The offending income value in KRW.
        amount_krw: i64,
    },

    /// The request contained no children.
    #[error("At least one child is required")]
    EmptyChildren,

    /// An adjustment's kind is not one of the recognized kinds.
    #[error("Unknown adjustment kind '{kind}' for adjustment '{name}'")]
    InvalidAdjustment {
        /// The name of the offending adjustment.
        name: String,
        /// The unrecognized kind string.
        kind: String,
    },

    /// A monetary amount left the representable range during calculation.
    ///
    /// Raised when a caller supplies values so large that an income sum,
    /// adjustment application, or the final rounded payment overflows. Like
    /// every other variant this is a caller-input error, not a data error.
    #[error("Monetary amount out of representable range while computing {context}")]
    AmountOverflow {
        /// What was being computed when the overflow occurred.
        context: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
