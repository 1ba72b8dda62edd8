//! Base price table
//!
//! Prices are whole pounds indexed by duration, excess and claim limit. The
//! lookup is total: an unrecognised duration reads the 12-month table, an
//! unrecognised excess reads the £0 row and an unrecognised claim limit
//! reads the £1,250 column.

use rust_decimal::Decimal;

use core_kernel::Money;

use crate::option::{ClaimLimit, CoverDuration, Excess};

/// One duration's prices: rows are excess £0/£50/£100/£150, columns are
/// claim limit £750/£1,250/£2,000.
type DurationTable = [[u32; 3]; 4];

const TWELVE_MONTH_PRICES: DurationTable = [
    [437, 497, 587],
    [397, 457, 547],
    [367, 427, 517],
    [337, 397, 487],
];

const TWENTY_FOUR_MONTH_PRICES: DurationTable = [
    [817, 937, 1097],
    [757, 877, 1037],
    [707, 827, 987],
    [657, 777, 937],
];

const THIRTY_SIX_MONTH_PRICES: DurationTable = [
    [1197, 1367, 1617],
    [1087, 1257, 1497],
    [1007, 1177, 1417],
    [927, 1097, 1337],
];

fn duration_table(duration: CoverDuration) -> &'static DurationTable {
    match duration.months() {
        24 => &TWENTY_FOUR_MONTH_PRICES,
        36 => &THIRTY_SIX_MONTH_PRICES,
        _ => &TWELVE_MONTH_PRICES,
    }
}

fn excess_row(excess: Excess) -> usize {
    match excess.pounds() {
        50 => 1,
        100 => 2,
        150 => 3,
        _ => 0,
    }
}

fn claim_limit_column(claim_limit: ClaimLimit) -> usize {
    match claim_limit.pounds() {
        750 => 0,
        2000 => 2,
        _ => 1,
    }
}

/// Looks up the base warranty price before any vehicle adjustment
///
/// # Example
///
/// ```rust
/// use domain_pricing::option::{ClaimLimit, CoverDuration, Excess};
/// use domain_pricing::rate_table::lookup_base_price;
/// use rust_decimal_macros::dec;
///
/// let price = lookup_base_price(
///     Excess::new(50),
///     ClaimLimit::new(1250),
///     CoverDuration::TWENTY_FOUR_MONTHS,
/// );
/// assert_eq!(price.amount(), dec!(877));
/// ```
pub fn lookup_base_price(excess: Excess, claim_limit: ClaimLimit, duration: CoverDuration) -> Money {
    let pounds = duration_table(duration)[excess_row(excess)][claim_limit_column(claim_limit)];
    Money::gbp(Decimal::from(pounds))
}
