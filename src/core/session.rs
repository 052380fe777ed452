//! Per-user view state between requests.

use crate::core::types::SearchCriteria;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Last successfully submitted search, used to repopulate the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    #[serde(default)]
    pub criteria: SearchCriteria,
    /// Display name the user typed for the search
    #[serde(default)]
    pub name: String,
}

impl SessionView {
    pub fn new(criteria: SearchCriteria, name: impl Into<String>) -> Self {
        Self {
            criteria,
            name: name.into().trim().to_string(),
        }
    }

    /// Encode as a cookie-safe string (base64 of the JSON form)
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(self).unwrap_or_default())
    }

    /// Decode a cookie value; anything unreadable yields an empty view
    pub fn decode(value: &str) -> Self {
        let decoded = URL_SAFE_NO_PAD
            .decode(value)
            .map_err(|e| e.to_string())
            .and_then(|bytes| serde_json::from_slice(&bytes).map_err(|e| e.to_string()));

        decoded.unwrap_or_else(|e| {
            tracing::debug!("Discarding unreadable session view: {e}");
            Self::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty() && self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let criteria =
            SearchCriteria::from_text("eggs, spinach", "", vec!["vegetarian".to_string()], vec![]);
        let view = SessionView::new(criteria, " Brunch ");
        assert_eq!(view.name, "Brunch");

        let encoded = view.encode();
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains('"'));
        assert_eq!(SessionView::decode(&encoded), view);
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        let view = SessionView::decode("%%% not json");
        assert!(view.is_empty());
    }
}
