use crate::session::field::FieldKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from reading or writing a session document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed session document: {0}")]
    Malformed(String),
}

/// The persisted shape of a session: scenario group -> field -> text.
///
/// Leaf values are the exact text the user entered, never reparsed, so a
/// save/load cycle reproduces formatting quirks such as leading zeros.
/// Every group and field is optional on the way in; restoring a document
/// only overwrites the fields it actually carries. Unknown keys are
/// ignored by serde's default behavior.
///
/// # Examples
///
/// ```
/// use treasury_workbench::session::document::SessionDocument;
/// use treasury_workbench::session::field::FieldKey;
///
/// let doc = SessionDocument::from_json_str(
///     r#"{ "insurance": { "investment": "1000" } }"#,
/// ).unwrap();
/// assert_eq!(doc.get(FieldKey::Investment), Some("1000"));
/// assert_eq!(doc.get(FieldKey::PremiumRate), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<ExchangeRateGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedging: Option<HedgingGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npv: Option<NpvGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<InsuranceGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_savings: Option<InterestSavingsGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_cny: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_rate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HedgingGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedged_percentage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_rate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpvGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<String>,
    /// Comma-separated numbers as entered, e.g. `"100, 200, 300"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flows: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_rate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestSavingsGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domestic_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eurobond_rate: Option<String>,
}

impl SessionDocument {
    /// The text stored under `key`, if the document carries it.
    ///
    /// This match is the single source of truth for which document slot
    /// each field key maps to.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        let slot = match key {
            FieldKey::RevenueCny => &self.exchange_rate.as_ref()?.revenue_cny,
            FieldKey::InitialRate => &self.exchange_rate.as_ref()?.initial_rate,
            FieldKey::NewRate => &self.exchange_rate.as_ref()?.new_rate,
            FieldKey::HedgedPercentage => &self.hedging.as_ref()?.hedged_percentage,
            FieldKey::ForwardRate => &self.hedging.as_ref()?.forward_rate,
            FieldKey::DiscountRate => &self.npv.as_ref()?.discount_rate,
            FieldKey::CashFlows => &self.npv.as_ref()?.cash_flows,
            FieldKey::Investment => &self.insurance.as_ref()?.investment,
            FieldKey::PremiumRate => &self.insurance.as_ref()?.premium_rate,
            FieldKey::CapitalAmount => &self.interest_savings.as_ref()?.capital_amount,
            FieldKey::DomesticRate => &self.interest_savings.as_ref()?.domestic_rate,
            FieldKey::EurobondRate => &self.interest_savings.as_ref()?.eurobond_rate,
        };
        slot.as_deref()
    }

    /// Store `text` under `key`, creating the group on first use.
    pub fn set(&mut self, key: FieldKey, text: impl Into<String>) {
        let text = Some(text.into());
        match key {
            FieldKey::RevenueCny => self.exchange_rate_mut().revenue_cny = text,
            FieldKey::InitialRate => self.exchange_rate_mut().initial_rate = text,
            FieldKey::NewRate => self.exchange_rate_mut().new_rate = text,
            FieldKey::HedgedPercentage => self.hedging_mut().hedged_percentage = text,
            FieldKey::ForwardRate => self.hedging_mut().forward_rate = text,
            FieldKey::DiscountRate => self.npv_mut().discount_rate = text,
            FieldKey::CashFlows => self.npv_mut().cash_flows = text,
            FieldKey::Investment => self.insurance_mut().investment = text,
            FieldKey::PremiumRate => self.insurance_mut().premium_rate = text,
            FieldKey::CapitalAmount => self.interest_savings_mut().capital_amount = text,
            FieldKey::DomesticRate => self.interest_savings_mut().domestic_rate = text,
            FieldKey::EurobondRate => self.interest_savings_mut().eurobond_rate = text,
        }
    }

    fn exchange_rate_mut(&mut self) -> &mut ExchangeRateGroup {
        self.exchange_rate.get_or_insert_with(Default::default)
    }

    fn hedging_mut(&mut self) -> &mut HedgingGroup {
        self.hedging.get_or_insert_with(Default::default)
    }

    fn npv_mut(&mut self) -> &mut NpvGroup {
        self.npv.get_or_insert_with(Default::default)
    }

    fn insurance_mut(&mut self) -> &mut InsuranceGroup {
        self.insurance.get_or_insert_with(Default::default)
    }

    fn interest_savings_mut(&mut self) -> &mut InterestSavingsGroup {
        self.interest_savings.get_or_insert_with(Default::default)
    }

    /// Encode the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Malformed(e.to_string()))
    }

    /// Decode a document from JSON text.
    ///
    /// Anything that is not a mapping of group name to mapping of field
    /// name to text fails as `Malformed`; the session is not touched
    /// until decoding has succeeded.
    pub fn from_json_str(json: &str) -> Result<SessionDocument, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Malformed(e.to_string()))
    }
}
