//! Per-child bracket resolution.
//!
//! Composes the age-bracket lookup with the shared combined-income bracket to
//! produce one resolved guideline cell per child, plus the standard total
//! (the sum of per-child averages before any scaling or adjustment).

use crate::error::EngineResult;
use crate::guideline::{IncomeBracket, lookup_cell, resolve_age_bracket};
use crate::models::{Child, ChildCell};

/// The resolved cells for a request's children and their summed averages.
#[derive(Debug, Clone)]
pub struct ChildCellsResult {
    /// One resolved cell per child, in request order.
    pub cells: Vec<ChildCell>,
    /// Sum of the per-child average amounts (KRW).
    pub standard_total_krw: i64,
}

/// Resolves the guideline cell for every child in a request.
///
/// All children share the combined-income bracket, which the caller resolves
/// once; each child's age selects its own table row.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::AgeOutOfRange`] if any child's age
/// falls outside the supported 0~18 range. No partial result is produced.
pub fn resolve_child_cells(
    children: &[Child],
    income_bracket_index: usize,
    income_bracket: &IncomeBracket,
) -> EngineResult<ChildCellsResult> {
    let mut cells = Vec::with_capacity(children.len());
    let mut standard_total_krw = 0i64;

    for child in children {
        let (age_index, age_bracket) = resolve_age_bracket(child.age)?;
        let cell = lookup_cell(age_index, income_bracket_index);
        standard_total_krw += cell.avg_krw;
        cells.push(ChildCell {
            age_label: age_bracket.label.to_string(),
            income_bracket_mw: *income_bracket,
            avg_krw: cell.avg_krw,
            low_krw: cell.low_krw,
            high_krw: cell.high_krw,
        });
    }

    Ok(ChildCellsResult {
        cells,
        standard_total_krw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::guideline::resolve_income_bracket;

    /// CC-001: one child resolves to one cell
    #[test]
    fn test_single_child_cell() {
        let (index, bracket) = resolve_income_bracket(5_000_000);
        let result = resolve_child_cells(&[Child { age: 8 }], index, bracket).unwrap();

        assert_eq!(result.cells.len(), 1);
        assert_eq!(result.cells[0].age_label, "6~8");
        assert_eq!(result.cells[0].avg_krw, 1_292_000);
        assert_eq!(result.standard_total_krw, 1_292_000);
    }

    /// CC-002: siblings in different age brackets share the income bracket
    #[test]
    fn test_siblings_share_income_bracket() {
        let (index, bracket) = resolve_income_bracket(5_000_000);
        let children = [Child { age: 2 }, Child { age: 15 }];
        let result = resolve_child_cells(&children, index, bracket).unwrap();

        assert_eq!(result.cells[0].age_label, "0~2");
        assert_eq!(result.cells[0].avg_krw, 1_245_000);
        assert_eq!(result.cells[1].age_label, "15~18");
        assert_eq!(result.cells[1].avg_krw, 1_604_000);
        assert_eq!(result.standard_total_krw, 2_849_000);
        assert_eq!(result.cells[0].income_bracket_mw, result.cells[1].income_bracket_mw);
    }

    /// CC-003: an out-of-range age aborts with no partial result
    #[test]
    fn test_out_of_range_age_aborts() {
        let (index, bracket) = resolve_income_bracket(5_000_000);
        let children = [Child { age: 8 }, Child { age: 19 }];
        let result = resolve_child_cells(&children, index, bracket);

        match result {
            Err(EngineError::AgeOutOfRange { age }) => assert_eq!(age, 19),
            other => panic!("Expected AgeOutOfRange, got {:?}", other),
        }
    }

    /// CC-004: order of children is preserved
    #[test]
    fn test_children_keep_request_order() {
        let (index, bracket) = resolve_income_bracket(3_000_000);
        let children = [Child { age: 15 }, Child { age: 0 }, Child { age: 10 }];
        let result = resolve_child_cells(&children, index, bracket).unwrap();

        let labels: Vec<&str> = result.cells.iter().map(|c| c.age_label.as_str()).collect();
        assert_eq!(labels, ["15~18", "0~2", "9~11"]);
    }
}
