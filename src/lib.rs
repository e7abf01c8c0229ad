//! Child Support Calculation Engine
//!
//! This crate implements the 2021 Seoul Family Court guideline method for
//! recommended monthly child support: standard support per child from the
//! cross-table of combined pre-tax monthly income and child age, summed over
//! children, scaled by child count, adjusted by case-specific factors, and
//! allocated to the non-custodial parent by income proportion.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod guideline;
pub mod models;
