//! Core data models for the child support calculation engine.
//!
//! All of these are immutable value objects created fresh per calculation;
//! none persist or mutate after construction.

mod adjustment;
mod calculation_result;
mod request;

pub use adjustment::{Adjustment, AdjustmentEffect, AdjustmentKind, AppliedAdjustment};
pub use calculation_result::{CalculationResult, ChildCell};
pub use request::{CalculationRequest, Child};
