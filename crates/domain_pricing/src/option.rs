//! Customer-chosen pricing options
//!
//! Excess, claim limit and duration are whole-number newtypes rather than
//! closed enums. The UI only ever offers the listed tiers, but a value
//! outside them must still price (via the rate table's fallbacks) instead of
//! failing to deserialize.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::add_ons::{auto_included, AddOn, AddOnSelection};
use crate::error::PricingError;

fn parse_pounds(s: &str) -> Result<u32, PricingError> {
    let cleaned = s.trim().trim_start_matches('£').replace(',', "");
    cleaned
        .parse::<u32>()
        .map_err(|_| PricingError::InvalidAmount(s.to_string()))
}

/// Voluntary excess in whole pounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Excess(u32);

impl Excess {
    /// Excess tiers offered to customers
    pub const TIERS: [Excess; 4] = [Excess(0), Excess(50), Excess(100), Excess(150)];

    pub const fn new(pounds: u32) -> Self {
        Self(pounds)
    }

    pub fn pounds(&self) -> u32 {
        self.0
    }

    /// Whether this is one of the offered tiers
    pub fn is_offered(&self) -> bool {
        Self::TIERS.contains(self)
    }
}

impl Default for Excess {
    fn default() -> Self {
        Self(0)
    }
}

impl fmt::Display for Excess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

impl FromStr for Excess {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pounds(s).map(Self)
    }
}

/// Maximum payable per claim in whole pounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimLimit(u32);

impl ClaimLimit {
    /// Claim limits offered to customers
    pub const TIERS: [ClaimLimit; 3] = [ClaimLimit(750), ClaimLimit(1250), ClaimLimit(2000)];

    pub const fn new(pounds: u32) -> Self {
        Self(pounds)
    }

    pub fn pounds(&self) -> u32 {
        self.0
    }

    /// Whether this is one of the offered limits
    pub fn is_offered(&self) -> bool {
        Self::TIERS.contains(self)
    }
}

impl Default for ClaimLimit {
    fn default() -> Self {
        Self(1250)
    }
}

impl fmt::Display for ClaimLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1000 {
            write!(f, "£{},{:03}", self.0 / 1000, self.0 % 1000)
        } else {
            write!(f, "£{}", self.0)
        }
    }
}

impl FromStr for ClaimLimit {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pounds(s).map(Self)
    }
}

/// Accepted wire forms for a duration: `24` or `"24months"`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationRepr {
    Months(u32),
    Key(String),
}

/// Length of cover in months
///
/// Regardless of length, the price is always spread over twelve payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DurationRepr", into = "u32")]
pub struct CoverDuration(u32);

impl CoverDuration {
    pub const TWELVE_MONTHS: CoverDuration = CoverDuration(12);
    pub const TWENTY_FOUR_MONTHS: CoverDuration = CoverDuration(24);
    pub const THIRTY_SIX_MONTHS: CoverDuration = CoverDuration(36);

    /// Durations offered to customers
    pub const TIERS: [CoverDuration; 3] = [
        Self::TWELVE_MONTHS,
        Self::TWENTY_FOUR_MONTHS,
        Self::THIRTY_SIX_MONTHS,
    ];

    pub const fn from_months(months: u32) -> Self {
        Self(months)
    }

    pub fn months(&self) -> u32 {
        self.0
    }

    /// Whole years of cover, never less than one
    pub fn years(&self) -> u32 {
        (self.0 / 12).max(1)
    }

    /// Whether this is one of the offered durations
    pub fn is_offered(&self) -> bool {
        Self::TIERS.contains(self)
    }

    /// UI key, e.g. `24months`
    pub fn key(&self) -> String {
        format!("{}months", self.0)
    }
}

impl Default for CoverDuration {
    fn default() -> Self {
        Self::TWELVE_MONTHS
    }
}

impl fmt::Display for CoverDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CoverDuration {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let digits = lowered
            .strip_suffix("months")
            .or_else(|| lowered.strip_suffix("month"))
            .unwrap_or(&lowered)
            .trim();

        match digits.parse::<u32>() {
            Ok(months) if months > 0 => Ok(Self(months)),
            _ => Err(PricingError::unknown_duration(s)),
        }
    }
}

impl TryFrom<DurationRepr> for CoverDuration {
    type Error = PricingError;

    fn try_from(repr: DurationRepr) -> Result<Self, Self::Error> {
        match repr {
            DurationRepr::Months(0) => Err(PricingError::unknown_duration("0")),
            DurationRepr::Months(months) => Ok(Self(months)),
            DurationRepr::Key(key) => key.parse(),
        }
    }
}

impl From<CoverDuration> for u32 {
    fn from(duration: CoverDuration) -> u32 {
        duration.0
    }
}

/// A complete set of customer choices for one quote
///
/// Options are values: every change produces a new option, and the
/// calculator is re-run against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    excess: Excess,
    claim_limit: ClaimLimit,
    duration: CoverDuration,
    #[serde(default)]
    add_ons: AddOnSelection,
}

impl PricingOption {
    /// Creates an option with no add-ons toggled
    pub fn new(excess: Excess, claim_limit: ClaimLimit, duration: CoverDuration) -> Self {
        Self {
            excess,
            claim_limit,
            duration,
            add_ons: AddOnSelection::new(),
        }
    }

    pub fn builder() -> PricingOptionBuilder {
        PricingOptionBuilder::default()
    }

    pub fn excess(&self) -> Excess {
        self.excess
    }

    pub fn claim_limit(&self) -> ClaimLimit {
        self.claim_limit
    }

    pub fn duration(&self) -> CoverDuration {
        self.duration
    }

    /// The customer's own toggles
    pub fn add_ons(&self) -> &AddOnSelection {
        &self.add_ons
    }

    /// Returns a copy with a different excess
    pub fn with_excess(&self, excess: Excess) -> Self {
        Self { excess, ..self.clone() }
    }

    /// Returns a copy with a different claim limit
    pub fn with_claim_limit(&self, claim_limit: ClaimLimit) -> Self {
        Self { claim_limit, ..self.clone() }
    }

    /// Returns a copy with a different duration
    ///
    /// Every add-on that any duration bundles is switched on when the new
    /// duration bundles it and off when it does not, overriding the
    /// customer's earlier toggle for those keys. Other toggles are kept.
    pub fn with_duration(&self, duration: CoverDuration) -> Self {
        let bundled = auto_included(duration);
        let mut add_ons = self.add_ons.clone();
        for add_on in AddOn::AUTO_INCLUDABLE {
            add_ons.set(add_on, bundled.contains(&add_on));
        }

        Self {
            duration,
            add_ons,
            ..self.clone()
        }
    }

    /// Returns a copy with one add-on toggled
    pub fn with_add_on(&self, add_on: AddOn, selected: bool) -> Self {
        Self {
            add_ons: self.add_ons.clone().with(add_on, selected),
            ..self.clone()
        }
    }

    /// Add-ons active on the policy: toggled on or bundled
    pub fn effective_add_ons(&self) -> Vec<AddOn> {
        let bundled = auto_included(self.duration);
        AddOn::ALL
            .into_iter()
            .filter(|a| self.add_ons.is_selected(*a) || bundled.contains(a))
            .collect()
    }

    /// Add-ons the customer pays for: toggled on and not bundled
    pub fn chargeable_add_ons(&self) -> Vec<AddOn> {
        let bundled = auto_included(self.duration);
        self.add_ons
            .selected()
            .filter(|a| !bundled.contains(a))
            .collect()
    }
}

/// Builder for [`PricingOption`]
#[derive(Debug, Clone, Default)]
pub struct PricingOptionBuilder {
    excess: Excess,
    claim_limit: ClaimLimit,
    duration: CoverDuration,
    add_ons: AddOnSelection,
}

impl PricingOptionBuilder {
    pub fn excess(mut self, pounds: u32) -> Self {
        self.excess = Excess::new(pounds);
        self
    }

    pub fn claim_limit(mut self, pounds: u32) -> Self {
        self.claim_limit = ClaimLimit::new(pounds);
        self
    }

    pub fn duration_months(mut self, months: u32) -> Self {
        self.duration = CoverDuration::from_months(months);
        self
    }

    pub fn add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.set(add_on, true);
        self
    }

    pub fn add_ons(mut self, add_ons: AddOnSelection) -> Self {
        self.add_ons = add_ons;
        self
    }

    pub fn build(self) -> PricingOption {
        PricingOption {
            excess: self.excess,
            claim_limit: self.claim_limit,
            duration: self.duration,
            add_ons: self.add_ons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_option() {
        let option = PricingOption::default();
        assert_eq!(option.excess().pounds(), 0);
        assert_eq!(option.claim_limit().pounds(), 1250);
        assert_eq!(option.duration(), CoverDuration::TWELVE_MONTHS);
        assert!(option.effective_add_ons().is_empty());
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!("24months".parse::<CoverDuration>().unwrap().months(), 24);
        assert_eq!(" 36 Months ".parse::<CoverDuration>().unwrap().months(), 36);
        assert_eq!("12".parse::<CoverDuration>().unwrap().months(), 12);
        assert!("forever".parse::<CoverDuration>().is_err());
        assert!("0months".parse::<CoverDuration>().is_err());
    }

    #[test]
    fn test_duration_wire_forms() {
        let from_key: CoverDuration = serde_json::from_str("\"36months\"").unwrap();
        let from_number: CoverDuration = serde_json::from_str("36").unwrap();
        assert_eq!(from_key, from_number);
        assert_eq!(serde_json::to_string(&from_key).unwrap(), "36");
        assert!(serde_json::from_str::<CoverDuration>("\"soon\"").is_err());
    }

    #[test]
    fn test_years() {
        assert_eq!(CoverDuration::TWELVE_MONTHS.years(), 1);
        assert_eq!(CoverDuration::THIRTY_SIX_MONTHS.years(), 3);
        assert_eq!(CoverDuration::from_months(6).years(), 1);
    }

    #[test]
    fn test_amount_parsing_and_display() {
        assert_eq!("£150".parse::<Excess>().unwrap(), Excess::new(150));
        assert_eq!("1,250".parse::<ClaimLimit>().unwrap(), ClaimLimit::new(1250));
        assert!("lots".parse::<Excess>().is_err());
        assert_eq!(ClaimLimit::new(2000).to_string(), "£2,000");
        assert_eq!(ClaimLimit::new(750).to_string(), "£750");
        assert_eq!(Excess::new(50).to_string(), "£50");
    }

    #[test]
    fn test_with_duration_forces_bundled_add_ons() {
        let option = PricingOption::default()
            .with_add_on(AddOn::Tyre, true)
            .with_duration(CoverDuration::THIRTY_SIX_MONTHS);

        for add_on in AddOn::AUTO_INCLUDABLE {
            assert!(option.add_ons().is_selected(add_on));
        }
        assert!(option.add_ons().is_selected(AddOn::Tyre));

        let back = option.with_duration(CoverDuration::TWELVE_MONTHS);
        for add_on in AddOn::AUTO_INCLUDABLE {
            assert!(!back.add_ons().is_selected(add_on));
        }
        assert!(back.add_ons().is_selected(AddOn::Tyre));
    }

    #[test]
    fn test_shortening_cover_drops_add_ons_no_longer_bundled() {
        let option = PricingOption::default()
            .with_duration(CoverDuration::THIRTY_SIX_MONTHS)
            .with_duration(CoverDuration::TWENTY_FOUR_MONTHS);

        assert!(option.add_ons().is_selected(AddOn::Breakdown));
        assert!(!option.add_ons().is_selected(AddOn::European));
        assert!(!option.add_ons().is_selected(AddOn::Rental));
        assert!(option.chargeable_add_ons().is_empty());
    }

    #[test]
    fn test_manual_toggle_after_duration_change_sticks() {
        let option = PricingOption::default()
            .with_duration(CoverDuration::TWENTY_FOUR_MONTHS)
            .with_add_on(AddOn::European, true);

        assert_eq!(option.chargeable_add_ons(), vec![AddOn::European]);
        assert_eq!(
            option.effective_add_ons(),
            vec![AddOn::Breakdown, AddOn::MotFee, AddOn::European]
        );
    }

    #[test]
    fn test_builder() {
        let option = PricingOption::builder()
            .excess(50)
            .claim_limit(2000)
            .duration_months(24)
            .add_on(AddOn::LostKey)
            .build();

        assert_eq!(option.excess(), Excess::new(50));
        assert_eq!(option.claim_limit(), ClaimLimit::new(2000));
        assert_eq!(option.duration(), CoverDuration::TWENTY_FOUR_MONTHS);
        assert!(option.add_ons().is_selected(AddOn::LostKey));
    }

    #[test]
    fn test_option_json_shape() {
        let json = r#"{"excess":50,"claimLimit":1250,"duration":"24months","addOns":{"tyre":true}}"#;
        let option: PricingOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.duration().months(), 24);
        assert!(option.add_ons().is_selected(AddOn::Tyre));
    }
}
