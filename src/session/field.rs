use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a user-entered field.
///
/// Every field the workbench knows about is listed here; the string
/// names double as the keys in the persisted session document, so they
/// must never change once a document has been written with them.
///
/// # Examples
///
/// ```
/// use treasury_workbench::session::field::{FieldKey, ScenarioGroup};
///
/// let key = FieldKey::RevenueCny;
/// assert_eq!(key.name(), "revenue_cny");
/// assert_eq!(key.group(), ScenarioGroup::ExchangeRate);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    RevenueCny,
    InitialRate,
    NewRate,
    HedgedPercentage,
    ForwardRate,
    DiscountRate,
    CashFlows,
    Investment,
    PremiumRate,
    CapitalAmount,
    DomesticRate,
    EurobondRate,
}

impl FieldKey {
    /// Every known field, in session order.
    pub const ALL: [FieldKey; 12] = [
        FieldKey::RevenueCny,
        FieldKey::InitialRate,
        FieldKey::NewRate,
        FieldKey::HedgedPercentage,
        FieldKey::ForwardRate,
        FieldKey::DiscountRate,
        FieldKey::CashFlows,
        FieldKey::Investment,
        FieldKey::PremiumRate,
        FieldKey::CapitalAmount,
        FieldKey::DomesticRate,
        FieldKey::EurobondRate,
    ];

    /// The stable string name used in the persisted document.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::RevenueCny => "revenue_cny",
            FieldKey::InitialRate => "initial_rate",
            FieldKey::NewRate => "new_rate",
            FieldKey::HedgedPercentage => "hedged_percentage",
            FieldKey::ForwardRate => "forward_rate",
            FieldKey::DiscountRate => "discount_rate",
            FieldKey::CashFlows => "cash_flows",
            FieldKey::Investment => "investment",
            FieldKey::PremiumRate => "premium_rate",
            FieldKey::CapitalAmount => "capital_amount",
            FieldKey::DomesticRate => "domestic_rate",
            FieldKey::EurobondRate => "eurobond_rate",
        }
    }

    /// Look up a field by its stable string name.
    pub fn from_name(name: &str) -> Option<FieldKey> {
        FieldKey::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// The scenario group this field belongs to.
    pub fn group(&self) -> ScenarioGroup {
        match self {
            FieldKey::RevenueCny | FieldKey::InitialRate | FieldKey::NewRate => {
                ScenarioGroup::ExchangeRate
            }
            FieldKey::HedgedPercentage | FieldKey::ForwardRate => ScenarioGroup::Hedging,
            FieldKey::DiscountRate | FieldKey::CashFlows => ScenarioGroup::Npv,
            FieldKey::Investment | FieldKey::PremiumRate => ScenarioGroup::Insurance,
            FieldKey::CapitalAmount | FieldKey::DomesticRate | FieldKey::EurobondRate => {
                ScenarioGroup::InterestSavings
            }
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The scenario a set of fields is consumed by.
///
/// Grouping is documentation and document layout only; nothing enforces
/// that a formula reads fields from a single group (hedged revenue, for
/// instance, reads from both `exchange_rate` and `hedging`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioGroup {
    ExchangeRate,
    Hedging,
    Npv,
    Insurance,
    InterestSavings,
}

impl ScenarioGroup {
    /// Every scenario group, in document order.
    pub const ALL: [ScenarioGroup; 5] = [
        ScenarioGroup::ExchangeRate,
        ScenarioGroup::Hedging,
        ScenarioGroup::Npv,
        ScenarioGroup::Insurance,
        ScenarioGroup::InterestSavings,
    ];

    /// The stable string name used in the persisted document.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioGroup::ExchangeRate => "exchange_rate",
            ScenarioGroup::Hedging => "hedging",
            ScenarioGroup::Npv => "npv",
            ScenarioGroup::Insurance => "insurance",
            ScenarioGroup::InterestSavings => "interest_savings",
        }
    }

    /// The fields belonging to this group, in declaration order.
    pub fn fields(&self) -> &'static [FieldKey] {
        match self {
            ScenarioGroup::ExchangeRate => &[
                FieldKey::RevenueCny,
                FieldKey::InitialRate,
                FieldKey::NewRate,
            ],
            ScenarioGroup::Hedging => &[FieldKey::HedgedPercentage, FieldKey::ForwardRate],
            ScenarioGroup::Npv => &[FieldKey::DiscountRate, FieldKey::CashFlows],
            ScenarioGroup::Insurance => &[FieldKey::Investment, FieldKey::PremiumRate],
            ScenarioGroup::InterestSavings => &[
                FieldKey::CapitalAmount,
                FieldKey::DomesticRate,
                FieldKey::EurobondRate,
            ],
        }
    }
}

impl fmt::Display for ScenarioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_unique() {
        let mut names: Vec<&str> = FieldKey::ALL.iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FieldKey::ALL.len());
    }

    #[test]
    fn test_from_name_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::from_name(key.name()), Some(key));
        }
        assert_eq!(FieldKey::from_name("no_such_field"), None);
    }

    #[test]
    fn test_groups_partition_fields() {
        let mut covered: Vec<FieldKey> = ScenarioGroup::ALL
            .iter()
            .flat_map(|g| g.fields().iter().copied())
            .collect();
        covered.sort();
        covered.dedup();
        assert_eq!(covered.len(), FieldKey::ALL.len());
    }

    #[test]
    fn test_group_membership_consistent() {
        for group in ScenarioGroup::ALL {
            for field in group.fields() {
                assert_eq!(field.group(), group);
            }
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", FieldKey::EurobondRate), "eurobond_rate");
        assert_eq!(format!("{}", ScenarioGroup::InterestSavings), "interest_savings");
    }
}
