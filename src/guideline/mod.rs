//! The 2021 guideline table and its lookup functions.
//!
//! The reference data is compiled in: the table is a fixed public dataset,
//! never mutated, and shared by every calculation without copying.

mod lookup;
mod table;

pub use lookup::{
    child_count_multiplier, lookup_cell, minimum_support_half, resolve_age_bracket,
    resolve_income_bracket,
};
pub use table::{
    AGE_BRACKETS, AgeBracket, GuidelineCell, INCOME_BRACKETS, INCOME_UNIT_KRW, IncomeBracket,
    TABLE_2021,
};
