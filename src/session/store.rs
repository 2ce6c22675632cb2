use crate::input::parse::{self, InputError};
use crate::session::document::SessionDocument;
use crate::session::field::FieldKey;
use log::debug;
use std::collections::BTreeMap;

/// The in-memory set of all current field values for one running instance.
///
/// Fields hold raw text exactly as entered; nothing is parsed until a
/// formula asks for a value. A session starts empty (every field reads as
/// `""`), is mutated in place by [`set`](Session::set) and
/// [`restore`](Session::restore), and can be captured whole with
/// [`snapshot`](Session::snapshot) at any time.
///
/// # Examples
///
/// ```
/// use treasury_workbench::session::field::FieldKey;
/// use treasury_workbench::session::store::Session;
///
/// let mut session = Session::new();
/// session.set(FieldKey::Investment, "1000");
///
/// let doc = session.snapshot();
/// let mut other = Session::new();
/// other.restore(&doc);
/// assert_eq!(other.get(FieldKey::Investment), "1000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    fields: BTreeMap<FieldKey, String>,
}

/// Two sessions are equal when every field reads the same text; a field
/// that was never set compares equal to one explicitly set to `""`.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        FieldKey::ALL.iter().all(|key| self.get(*key) == other.get(*key))
    }
}

impl Eq for Session {}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text of a field. Unset fields read as `""`.
    pub fn get(&self, key: FieldKey) -> &str {
        self.fields.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Overwrite the text of a field.
    pub fn set(&mut self, key: FieldKey, text: impl Into<String>) {
        self.fields.insert(key, text.into());
    }

    /// Capture a full snapshot of all fields as a persistable document.
    ///
    /// Every field appears in the document, including ones still empty,
    /// with its text preserved verbatim.
    pub fn snapshot(&self) -> SessionDocument {
        let mut doc = SessionDocument::default();
        for key in FieldKey::ALL {
            doc.set(key, self.get(key));
        }
        doc
    }

    /// Merge a document into the session.
    ///
    /// Only fields the document carries are overwritten; absent groups
    /// and keys leave the corresponding fields untouched.
    pub fn restore(&mut self, doc: &SessionDocument) {
        for key in FieldKey::ALL {
            if let Some(text) = doc.get(key) {
                debug!("restore: {} <- {:?}", key, text);
                self.set(key, text);
            }
        }
    }

    /// Parse a field's current text as a number.
    pub fn number(&self, key: FieldKey) -> Result<f64, InputError> {
        parse::parse_number(key, self.get(key))
    }

    /// Parse a field's current text as a comma-separated cash-flow list.
    pub fn cash_flows(&self, key: FieldKey) -> Result<Vec<f64>, InputError> {
        parse::parse_cash_flows(key, self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        for key in FieldKey::ALL {
            assert_eq!(session.get(key), "");
        }
    }

    #[test]
    fn test_set_overwrites() {
        let mut session = Session::new();
        session.set(FieldKey::NewRate, "7.1");
        session.set(FieldKey::NewRate, "7.3");
        assert_eq!(session.get(FieldKey::NewRate), "7.3");
    }

    #[test]
    fn test_snapshot_restore_idempotent() {
        let mut session = Session::new();
        session.set(FieldKey::RevenueCny, " 6500000 ");
        session.set(FieldKey::CashFlows, "100,200, 300");
        session.set(FieldKey::HedgedPercentage, "0.60");

        let before = session.clone();
        let doc = session.snapshot();
        session.restore(&doc);
        assert_eq!(session, before);
    }

    #[test]
    fn test_restore_skips_absent_groups() {
        let mut session = Session::new();
        session.set(FieldKey::Investment, "5000");
        session.set(FieldKey::PremiumRate, "0.02");
        session.set(FieldKey::DiscountRate, "0.10");

        // Document only carries the npv group.
        let mut doc = SessionDocument::default();
        doc.set(FieldKey::DiscountRate, "0.15");
        session.restore(&doc);

        assert_eq!(session.get(FieldKey::DiscountRate), "0.15");
        assert_eq!(session.get(FieldKey::Investment), "5000");
        assert_eq!(session.get(FieldKey::PremiumRate), "0.02");
    }

    #[test]
    fn test_failed_parse_leaves_text_intact() {
        let mut session = Session::new();
        session.set(FieldKey::Investment, "not a number");

        assert!(session.number(FieldKey::Investment).is_err());
        assert_eq!(session.get(FieldKey::Investment), "not a number");
    }

    #[test]
    fn test_number_parses_current_text() {
        let mut session = Session::new();
        session.set(FieldKey::InitialRate, " 7.25 ");
        assert_eq!(session.number(FieldKey::InitialRate).unwrap(), 7.25);
    }
}
