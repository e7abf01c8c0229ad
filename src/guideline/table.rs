//! The 2021 guideline reference data.
//!
//! Numeric values are taken from the 2021 standard child support table
//! (양육비 산정기준표) published by the Seoul Family Court. Income brackets are
//! in 만원 (10,000 KRW) of combined pre-tax monthly income; age brackets are
//! 만 나이 years; cell amounts are KRW per month for one child, with a
//! two-child four-person household as the baseline. Courts may deviate based
//! on circumstances, so these amounts are a recommendation, not a mandate.

use serde::{Deserialize, Serialize};

/// One step of the table's income axis in KRW (만원, 10,000 KRW).
pub const INCOME_UNIT_KRW: i64 = 10_000;

/// A combined-income bracket of the guideline table, in 만원 units.
///
/// Brackets are contiguous, non-overlapping, and ordered; the last bracket
/// has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBracket {
    /// Lower bound in 만원 (inclusive).
    pub lower_mw: u32,
    /// Upper bound in 만원 (inclusive); `None` for the open-ended top bracket.
    pub upper_mw: Option<u32>,
}

/// A child-age bracket of the guideline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracket {
    /// Youngest age in the bracket (inclusive).
    pub min_age: i32,
    /// Oldest age in the bracket (inclusive).
    pub max_age: i32,
    /// Display label, e.g. "6~8".
    pub label: &'static str,
}

/// One cell of the guideline table: the reference amounts for a single
/// (age bracket, income bracket) pair.
///
/// The average is the value used in computation; low/high bound the range the
/// table reports for the cell. The top income column is open-ended above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineCell {
    /// Average standard support in KRW per month.
    pub avg_krw: i64,
    /// Lower bound of the cell's range in KRW per month.
    pub low_krw: i64,
    /// Upper bound of the cell's range in KRW per month, if bounded.
    pub high_krw: Option<i64>,
}

/// The income-bracket axis of the 2021 table.
pub static INCOME_BRACKETS: [IncomeBracket; 11] = [
    IncomeBracket { lower_mw: 0, upper_mw: Some(199) },
    IncomeBracket { lower_mw: 200, upper_mw: Some(299) },
    IncomeBracket { lower_mw: 300, upper_mw: Some(399) },
    IncomeBracket { lower_mw: 400, upper_mw: Some(499) },
    IncomeBracket { lower_mw: 500, upper_mw: Some(599) },
    IncomeBracket { lower_mw: 600, upper_mw: Some(699) },
    IncomeBracket { lower_mw: 700, upper_mw: Some(799) },
    IncomeBracket { lower_mw: 800, upper_mw: Some(899) },
    IncomeBracket { lower_mw: 900, upper_mw: Some(999) },
    IncomeBracket { lower_mw: 1000, upper_mw: Some(1199) },
    IncomeBracket { lower_mw: 1200, upper_mw: None },
];

/// The age-bracket axis of the 2021 table, covering ages 0 through 18.
pub static AGE_BRACKETS: [AgeBracket; 6] = [
    AgeBracket { min_age: 0, max_age: 2, label: "0~2" },
    AgeBracket { min_age: 3, max_age: 5, label: "3~5" },
    AgeBracket { min_age: 6, max_age: 8, label: "6~8" },
    AgeBracket { min_age: 9, max_age: 11, label: "9~11" },
    AgeBracket { min_age: 12, max_age: 14, label: "12~14" },
    AgeBracket { min_age: 15, max_age: 18, label: "15~18" },
];

const fn cell(avg_krw: i64, low_krw: i64, high_krw: i64) -> GuidelineCell {
    GuidelineCell { avg_krw, low_krw, high_krw: Some(high_krw) }
}

const fn top_cell(avg_krw: i64, low_krw: i64) -> GuidelineCell {
    GuidelineCell { avg_krw, low_krw, high_krw: None }
}

/// The 2021 cell grid. Rows follow [`AGE_BRACKETS`] order; columns follow
/// [`INCOME_BRACKETS`] order.
pub static TABLE_2021: [[GuidelineCell; 11]; 6] = [
    // 0~2
    [
        cell(621_000, 264_000, 686_000),
        cell(752_000, 687_000, 848_000),
        cell(945_000, 849_000, 1_021_000),
        cell(1_098_000, 1_022_000, 1_171_000),
        cell(1_245_000, 1_172_000, 1_323_000),
        cell(1_401_000, 1_324_000, 1_491_000),
        cell(1_582_000, 1_492_000, 1_685_000),
        cell(1_789_000, 1_686_000, 1_893_000),
        cell(1_997_000, 1_894_000, 2_046_000),
        cell(2_095_000, 2_047_000, 2_151_000),
        top_cell(2_207_000, 2_152_000),
    ],
    // 3~5
    [
        cell(631_000, 268_000, 695_000),
        cell(759_000, 696_000, 854_000),
        cell(949_000, 855_000, 1_031_000),
        cell(1_113_000, 1_032_000, 1_189_000),
        cell(1_266_000, 1_190_000, 1_344_000),
        cell(1_422_000, 1_345_000, 1_510_000),
        cell(1_598_000, 1_511_000, 1_702_000),
        cell(1_807_000, 1_703_000, 1_912_000),
        cell(2_017_000, 1_913_000, 2_066_000),
        cell(2_116_000, 2_067_000, 2_180_000),
        top_cell(2_245_000, 2_181_000),
    ],
    // 6~8
    [
        cell(648_000, 272_000, 707_000),
        cell(767_000, 708_000, 863_000),
        cell(959_000, 864_000, 1_049_000),
        cell(1_140_000, 1_050_000, 1_216_000),
        cell(1_292_000, 1_217_000, 1_385_000),
        cell(1_479_000, 1_386_000, 1_546_000),
        cell(1_614_000, 1_547_000, 1_732_000),
        cell(1_850_000, 1_733_000, 1_957_000),
        cell(2_065_000, 1_958_000, 2_101_000),
        cell(2_137_000, 2_102_000, 2_224_000),
        top_cell(2_312_000, 2_225_000),
    ],
    // 9~11
    [
        cell(667_000, 281_000, 724_000),
        cell(782_000, 725_000, 885_000),
        cell(988_000, 886_000, 1_075_000),
        cell(1_163_000, 1_076_000, 1_240_000),
        cell(1_318_000, 1_241_000, 1_406_000),
        cell(1_494_000, 1_407_000, 1_562_000),
        cell(1_630_000, 1_563_000, 1_758_000),
        cell(1_887_000, 1_759_000, 2_012_000),
        cell(2_137_000, 2_013_000, 2_158_000),
        cell(2_180_000, 2_159_000, 2_292_000),
        top_cell(2_405_000, 2_293_000),
    ],
    // 12~14
    [
        cell(679_000, 295_000, 734_000),
        cell(790_000, 735_000, 894_000),
        cell(998_000, 895_000, 1_139_000),
        cell(1_280_000, 1_140_000, 1_351_000),
        cell(1_423_000, 1_352_000, 1_510_000),
        cell(1_598_000, 1_511_000, 1_654_000),
        cell(1_711_000, 1_655_000, 1_847_000),
        cell(1_984_000, 1_848_000, 2_071_000),
        cell(2_159_000, 2_072_000, 2_191_000),
        cell(2_223_000, 2_192_000, 2_349_000),
        top_cell(2_476_000, 2_350_000),
    ],
    // 15~18
    [
        cell(703_000, 319_000, 830_000),
        cell(957_000, 831_000, 1_092_000),
        cell(1_227_000, 1_093_000, 1_314_000),
        cell(1_402_000, 1_315_000, 1_503_000),
        cell(1_604_000, 1_504_000, 1_699_000),
        cell(1_794_000, 1_700_000, 1_879_000),
        cell(1_964_000, 1_880_000, 2_063_000),
        cell(2_163_000, 2_064_000, 2_204_000),
        cell(2_246_000, 2_205_000, 2_393_000),
        cell(2_540_000, 2_394_000, 2_711_000),
        top_cell(2_883_000, 2_712_000),
    ],
];
