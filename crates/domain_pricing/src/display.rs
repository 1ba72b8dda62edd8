//! Customer-facing price strings
//!
//! A quote is shown in three places: the plan card, the sticky footer bar
//! and the continue-to-checkout panel. All three are built from the same
//! [`PriceBreakdown`] so they can never disagree.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::add_ons::PAYMENTS_PER_PLAN;
use crate::quote::PriceBreakdown;

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as pounds: `£877`, `£552.88`, `£1,257`
///
/// Pence are shown only when there are any.
pub fn format_gbp(money: Money) -> String {
    let rounded = money.round_to_currency();
    let sign = if rounded.is_negative() { "-" } else { "" };
    let amount = rounded.amount().abs();
    let whole = amount.trunc();
    let pounds = group_thousands(&whole.normalize().to_string());

    let pence = ((amount - whole) * dec!(100)).trunc().normalize();
    if pence.is_zero() {
        format!("{}£{}", sign, pounds)
    } else {
        format!("{}£{}.{:0>2}", sign, pounds, pence.to_string())
    }
}

/// Label for a cover length, e.g. `2 Year Cover`
pub fn term_label(months: u32) -> String {
    match months {
        12 => "1 Year Cover".to_string(),
        m if m % 12 == 0 => format!("{} Year Cover", m / 12),
        m => format!("{} Month Cover", m),
    }
}

/// Strings for a plan card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCardDisplay {
    /// e.g. `£73/month`
    pub headline: String,
    /// e.g. `12 easy payments`
    pub payments_label: String,
    /// e.g. `2 Year Cover`
    pub term_label: String,
    /// e.g. `Save £37`, absent when there is nothing saved
    pub savings_badge: Option<String>,
    /// Reasons for any vehicle adjustment
    pub adjustment_notes: Vec<String>,
}

/// One row in the checkout panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    pub label: String,
    /// A price, or `Included` for bundled protections
    pub value: String,
}

/// Strings for the continue-to-checkout panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPanelDisplay {
    /// e.g. `Total £552.88`
    pub total: String,
    /// e.g. `£46 x 12 payments`
    pub monthly: String,
    pub lines: Vec<DisplayLine>,
}

/// Every string the UI shows for a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDisplay {
    pub plan_card: PlanCardDisplay,
    /// e.g. `£73 x 12 payments | Total £877`
    pub sticky_footer: String,
    pub checkout_panel: CheckoutPanelDisplay,
}

impl QuoteDisplay {
    /// Builds the display strings for a breakdown and its savings
    pub fn from_breakdown(breakdown: &PriceBreakdown, savings: Money) -> Self {
        let monthly = format_gbp(breakdown.monthly_price);
        let total = format_gbp(breakdown.total_price);
        let payments = format!("{} x {} payments", monthly, PAYMENTS_PER_PLAN);

        let mut lines = vec![DisplayLine {
            label: term_label(breakdown.duration.months()),
            value: format_gbp(breakdown.adjusted_base_price),
        }];
        lines.extend(breakdown.add_on_lines.iter().map(|line| DisplayLine {
            label: line.name.clone(),
            value: if line.included {
                "Included".to_string()
            } else {
                format_gbp(line.cost)
            },
        }));

        Self {
            plan_card: PlanCardDisplay {
                headline: format!("{}/month", monthly),
                payments_label: format!("{} easy payments", PAYMENTS_PER_PLAN),
                term_label: term_label(breakdown.duration.months()),
                savings_badge: savings
                    .is_positive()
                    .then(|| format!("Save {}", format_gbp(savings))),
                adjustment_notes: breakdown.adjustment.reasons.clone(),
            },
            sticky_footer: format!("{} | Total {}", payments, total),
            checkout_panel: CheckoutPanelDisplay {
                total: format!("Total {}", total),
                monthly: payments,
                lines,
            },
        }
    }
}
