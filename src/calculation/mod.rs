//! Calculation logic for the child support engine.
//!
//! This module contains the calculation pipeline: per-child bracket
//! resolution against the guideline table, the adjustment engine that folds
//! caller-supplied modifiers into the running total, and the allocation
//! calculator that ties the whole pipeline together and produces the final
//! breakdown.

mod adjustments;
mod allocation;
mod child_cells;

pub use adjustments::{AdjustmentOutcome, apply_adjustments};
pub use allocation::calculate_child_support;
pub use child_cells::{ChildCellsResult, resolve_child_cells};
