//! Optional protections and their prices
//!
//! Every add-on except the transfer fee is quoted as a monthly rate and
//! charged over the twelve payments the product is sold on. Longer cover
//! bundles some add-ons into the base price; those are active on the policy
//! but contribute nothing to the add-on total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use core_kernel::Money;

use crate::error::PricingError;
use crate::option::CoverDuration;

/// Number of payments every plan is billed over
pub const PAYMENTS_PER_PLAN: u32 = 12;

/// Optional protection that can be added to a warranty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddOn {
    Breakdown,
    MotRepair,
    MotFee,
    Tyre,
    WearAndTear,
    European,
    Rental,
    LostKey,
    Consequential,
    Transfer,
}

/// How an add-on is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOnCharge {
    /// Monthly rate, charged once per plan payment
    Monthly(Decimal),
    /// Flat fee charged once
    OneTime(Decimal),
}

impl AddOn {
    /// All offered add-ons, in display order
    pub const ALL: [AddOn; 10] = [
        AddOn::Breakdown,
        AddOn::MotRepair,
        AddOn::MotFee,
        AddOn::Tyre,
        AddOn::WearAndTear,
        AddOn::European,
        AddOn::Rental,
        AddOn::LostKey,
        AddOn::Consequential,
        AddOn::Transfer,
    ];

    /// Every add-on that some duration bundles into the base price
    pub const AUTO_INCLUDABLE: [AddOn; 4] = [
        AddOn::Breakdown,
        AddOn::MotFee,
        AddOn::European,
        AddOn::Rental,
    ];

    /// Wire key, e.g. `wearAndTear`
    pub fn key(&self) -> &'static str {
        match self {
            AddOn::Breakdown => "breakdown",
            AddOn::MotRepair => "motRepair",
            AddOn::MotFee => "motFee",
            AddOn::Tyre => "tyre",
            AddOn::WearAndTear => "wearAndTear",
            AddOn::European => "european",
            AddOn::Rental => "rental",
            AddOn::LostKey => "lostKey",
            AddOn::Consequential => "consequential",
            AddOn::Transfer => "transfer",
        }
    }

    /// Customer-facing name
    pub fn display_name(&self) -> &'static str {
        match self {
            AddOn::Breakdown => "Vehicle Recovery",
            AddOn::MotRepair => "MOT Repair Cover",
            AddOn::MotFee => "MOT Test Fee",
            AddOn::Tyre => "Tyre Cover",
            AddOn::WearAndTear => "Wear & Tear",
            AddOn::European => "European Cover",
            AddOn::Rental => "Vehicle Rental",
            AddOn::LostKey => "Lost Key Cover",
            AddOn::Consequential => "Consequential Damage",
            AddOn::Transfer => "Transfer Cover",
        }
    }

    /// Price of this add-on
    ///
    /// MOT repair is charged at £4.00 a month. An alternative display rate of
    /// £6.00 is not used anywhere so the card, footer and checkout agree.
    pub fn charge(&self) -> AddOnCharge {
        match self {
            AddOn::Breakdown => AddOnCharge::Monthly(dec!(3.99)),
            AddOn::MotRepair => AddOnCharge::Monthly(dec!(4.00)),
            AddOn::MotFee => AddOnCharge::Monthly(dec!(1.99)),
            AddOn::Tyre => AddOnCharge::Monthly(dec!(7.99)),
            AddOn::WearAndTear => AddOnCharge::Monthly(dec!(9.99)),
            AddOn::European => AddOnCharge::Monthly(dec!(5.99)),
            AddOn::Rental => AddOnCharge::Monthly(dec!(6.99)),
            AddOn::LostKey => AddOnCharge::Monthly(dec!(3.00)),
            AddOn::Consequential => AddOnCharge::Monthly(dec!(5.00)),
            AddOn::Transfer => AddOnCharge::OneTime(dec!(19.99)),
        }
    }

    /// Cost of this add-on over a plan when it is charged
    pub fn cost(&self) -> Money {
        match self.charge() {
            AddOnCharge::Monthly(rate) => Money::gbp(rate * Decimal::from(PAYMENTS_PER_PLAN)),
            AddOnCharge::OneTime(fee) => Money::gbp(fee),
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AddOn {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AddOn::ALL
            .iter()
            .copied()
            .find(|a| a.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PricingError::unknown_add_on(s))
    }
}

/// Add-ons bundled into the base price for a cover duration
///
/// Unrecognised durations bundle nothing.
pub fn auto_included(duration: CoverDuration) -> &'static [AddOn] {
    match duration.months() {
        24 => &[AddOn::Breakdown, AddOn::MotFee],
        36 => &[AddOn::Breakdown, AddOn::MotFee, AddOn::European, AddOn::Rental],
        _ => &[],
    }
}

/// Whether an add-on is bundled for a cover duration
pub fn is_auto_included(add_on: AddOn, duration: CoverDuration) -> bool {
    auto_included(duration).contains(&add_on)
}

/// The customer's add-on toggles
///
/// Keys absent from the map are unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddOnSelection(BTreeMap<AddOn, bool>);

impl AddOnSelection {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selection with one toggle set
    pub fn with(mut self, add_on: AddOn, selected: bool) -> Self {
        self.set(add_on, selected);
        self
    }

    /// Sets one toggle
    pub fn set(&mut self, add_on: AddOn, selected: bool) {
        self.0.insert(add_on, selected);
    }

    /// Whether an add-on is toggled on
    pub fn is_selected(&self, add_on: AddOn) -> bool {
        self.0.get(&add_on).copied().unwrap_or(false)
    }

    /// Toggled-on add-ons, in display order
    pub fn selected(&self) -> impl Iterator<Item = AddOn> + '_ {
        AddOn::ALL.into_iter().filter(|a| self.is_selected(*a))
    }
}

impl FromIterator<AddOn> for AddOnSelection {
    fn from_iter<I: IntoIterator<Item = AddOn>>(iter: I) -> Self {
        Self(iter.into_iter().map(|a| (a, true)).collect())
    }
}

/// One add-on row in a price breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnLine {
    pub add_on: AddOn,
    pub name: String,
    /// Amount charged; zero when bundled
    pub cost: Money,
    /// Bundled into the base price for this duration
    pub included: bool,
}

/// Lists every add-on active on a policy with what it costs
///
/// Active means toggled on or bundled by the duration.
pub fn add_on_lines(selection: &AddOnSelection, duration: CoverDuration) -> Vec<AddOnLine> {
    AddOn::ALL
        .into_iter()
        .filter_map(|add_on| {
            let included = is_auto_included(add_on, duration);
            if !included && !selection.is_selected(add_on) {
                return None;
            }

            Some(AddOnLine {
                add_on,
                name: add_on.display_name().to_string(),
                cost: if included { Money::gbp(dec!(0)) } else { add_on.cost() },
                included,
            })
        })
        .collect()
}

/// Sums the cost of selected add-ons that are not bundled
pub fn accumulate_add_ons(selection: &AddOnSelection, duration: CoverDuration) -> Money {
    selection
        .selected()
        .filter(|a| !is_auto_included(*a, duration))
        .fold(Money::gbp(dec!(0)), |total, a| total + a.cost())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_included_sets() {
        assert!(auto_included(CoverDuration::TWELVE_MONTHS).is_empty());
        assert_eq!(
            auto_included(CoverDuration::TWENTY_FOUR_MONTHS),
            &[AddOn::Breakdown, AddOn::MotFee]
        );
        assert_eq!(auto_included(CoverDuration::THIRTY_SIX_MONTHS).len(), 4);
        assert!(auto_included(CoverDuration::from_months(48)).is_empty());
    }

    #[test]
    fn test_breakdown_costs_nothing_when_bundled() {
        let selection = AddOnSelection::new().with(AddOn::Breakdown, true);

        assert_eq!(
            accumulate_add_ons(&selection, CoverDuration::TWENTY_FOUR_MONTHS).amount(),
            dec!(0)
        );
        assert_eq!(
            accumulate_add_ons(&selection, CoverDuration::TWELVE_MONTHS).amount(),
            dec!(47.88)
        );
    }

    #[test]
    fn test_transfer_is_not_annualized() {
        assert_eq!(AddOn::Transfer.cost().amount(), dec!(19.99));
        assert_eq!(AddOn::Tyre.cost().amount(), dec!(95.88));
    }

    #[test]
    fn test_unselected_toggle_contributes_nothing() {
        let selection = AddOnSelection::new()
            .with(AddOn::Tyre, true)
            .with(AddOn::Tyre, false);

        assert!(accumulate_add_ons(&selection, CoverDuration::TWELVE_MONTHS).is_zero());
    }

    #[test]
    fn test_lines_flag_bundled_protections() {
        let selection = AddOnSelection::new().with(AddOn::Tyre, true);
        let lines = add_on_lines(&selection, CoverDuration::TWENTY_FOUR_MONTHS);

        let keys: Vec<AddOn> = lines.iter().map(|l| l.add_on).collect();
        assert_eq!(keys, vec![AddOn::Breakdown, AddOn::MotFee, AddOn::Tyre]);
        assert!(lines[0].included && lines[0].cost.is_zero());
        assert!(!lines[2].included);
        assert_eq!(lines[2].cost.amount(), dec!(95.88));
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("wearAndTear".parse::<AddOn>().unwrap(), AddOn::WearAndTear);
        assert_eq!("MOTFEE".parse::<AddOn>().unwrap(), AddOn::MotFee);
        assert_eq!(
            "gap".parse::<AddOn>(),
            Err(PricingError::UnknownAddOn("gap".to_string()))
        );
    }

    #[test]
    fn test_selection_json_uses_wire_keys() {
        let selection = AddOnSelection::new().with(AddOn::LostKey, true);
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"lostKey":true}"#);

        let parsed: AddOnSelection = serde_json::from_str(r#"{"motRepair":true,"tyre":false}"#).unwrap();
        assert!(parsed.is_selected(AddOn::MotRepair));
        assert!(!parsed.is_selected(AddOn::Tyre));
    }
}
