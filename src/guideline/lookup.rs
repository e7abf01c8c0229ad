//! Bracket resolution and cell access over the 2021 guideline table.
//!
//! These are the only entry points into the reference data: age and income
//! values resolve to their brackets, bracket pairs resolve to cells, and the
//! child-count multiplier scales the summed standard support.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::table::{
    AGE_BRACKETS, AgeBracket, GuidelineCell, INCOME_BRACKETS, INCOME_UNIT_KRW, IncomeBracket,
    TABLE_2021,
};

/// Resolves a child age to its bracket.
///
/// Returns the bracket's row index into [`TABLE_2021`] together with the
/// bracket itself.
///
/// # Errors
///
/// Returns [`EngineError::AgeOutOfRange`] when `age` falls outside every
/// defined bracket (negative, or above the supported maximum of 18).
///
/// # Examples
///
/// ```
/// use support_engine::guideline::resolve_age_bracket;
///
/// let (index, bracket) = resolve_age_bracket(8).unwrap();
/// assert_eq!(index, 2);
/// assert_eq!(bracket.label, "6~8");
/// ```
pub fn resolve_age_bracket(age: i32) -> EngineResult<(usize, &'static AgeBracket)> {
    AGE_BRACKETS
        .iter()
        .enumerate()
        .find(|(_, bracket)| bracket.min_age <= age && age <= bracket.max_age)
        .ok_or(EngineError::AgeOutOfRange { age })
}

/// Resolves a combined income in KRW to its bracket.
///
/// The income is converted to the table's 만원 scale by truncating division,
/// then matched against the bracket bounds. The brackets are contiguous from
/// zero and the top bracket is open-ended, so every non-negative income
/// resolves; negative incomes are rejected upstream and never reach here.
///
/// # Examples
///
/// ```
/// use support_engine::guideline::resolve_income_bracket;
///
/// let (index, bracket) = resolve_income_bracket(5_000_000);
/// assert_eq!(index, 4);
/// assert_eq!(bracket.lower_mw, 500);
/// ```
pub fn resolve_income_bracket(combined_income_krw: i64) -> (usize, &'static IncomeBracket) {
    let mw = combined_income_krw / INCOME_UNIT_KRW;
    for (index, bracket) in INCOME_BRACKETS.iter().enumerate() {
        if let Some(upper) = bracket.upper_mw {
            if mw <= upper as i64 {
                return (index, bracket);
            }
        }
    }
    // Past the last bounded bracket: the open-ended top bracket.
    let last = INCOME_BRACKETS.len() - 1;
    (last, &INCOME_BRACKETS[last])
}

/// Looks up the guideline cell for a resolved (age, income) bracket pair.
///
/// The grid is total: every index pair produced by the resolvers has a cell.
pub fn lookup_cell(age_bracket_index: usize, income_bracket_index: usize) -> &'static GuidelineCell {
    &TABLE_2021[age_bracket_index][income_bracket_index]
}

/// Returns the child-count scaling factor from the guideline commentary.
///
/// The table baseline is a two-child household (factor 1.0). A single child
/// is scaled up to 1.065; three or more children share the 0.783 factor no
/// matter how many there are. Callers reject empty child lists before this
/// point.
pub fn child_count_multiplier(child_count: usize) -> Decimal {
    match child_count {
        1 => Decimal::new(1065, 3),
        2 => Decimal::ONE,
        _ => Decimal::new(783, 3),
    }
}

/// Half of the minimum standard support for a child's age bracket.
///
/// The guideline commentary suggests "half of the minimum support" when a
/// parent has a justifiable reason for having no current income (disability,
/// serious illness) but some contribution is still expected. The minimum is
/// the `low` bound of the lowest income column for the age's row.
///
/// # Errors
///
/// Returns [`EngineError::AgeOutOfRange`] for ages outside the table.
pub fn minimum_support_half(age: i32) -> EngineResult<i64> {
    let (age_index, _) = resolve_age_bracket(age)?;
    Ok(TABLE_2021[age_index][0].low_krw / 2)
}
