//! Suggestion records built from provider features

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::provider::{Feature, FeatureCollection};

/// Prefix of the element id given to each suggestion row
pub const SUGGESTION_ID_PREFIX: &str = "geocomplete-suggestion-";

/// Property keys tried, in order, when deriving a place identifier
const PLACE_ID_KEYS: [&str; 3] = ["placeId", "gid", "id"];

/// One candidate result
///
/// Records are never mutated once built; activation changes produce new
/// records via [`Suggestion::with_active`]. The provider properties sit behind
/// an `Arc` so that copying a list snapshot stays cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Display and selectable text, taken from the provider label
    pub description: String,
    /// Provider identifier of the place
    pub place_id: String,
    /// Position in the current list
    pub index: usize,
    /// Whether this is the highlighted entry
    pub active: bool,
    /// All provider properties, passed through untouched
    pub properties: Arc<Map<String, Value>>,
}

impl Suggestion {
    /// Build an inactive suggestion at `index` from a provider feature
    pub fn from_feature(feature: Feature, index: usize) -> Self {
        let description = feature.label().unwrap_or_default().to_string();
        let place_id = place_id_of(&feature.properties).unwrap_or_else(|| index.to_string());

        Self {
            description,
            place_id,
            index,
            active: false,
            properties: Arc::new(feature.properties),
        }
    }

    /// Copy of this record with the given activation flag
    pub fn with_active(&self, active: bool) -> Self {
        Self {
            active,
            ..self.clone()
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Element id of this suggestion's row
    pub fn dom_id(&self) -> String {
        suggestion_dom_id(&self.place_id)
    }
}

pub fn suggestion_dom_id(place_id: &str) -> String {
    format!("{}{}", SUGGESTION_ID_PREFIX, place_id)
}

/// Map a provider response into an indexed, inactive suggestion list
pub fn suggestions_from_collection(collection: FeatureCollection) -> Vec<Suggestion> {
    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| Suggestion::from_feature(feature, index))
        .collect()
}

fn place_id_of(properties: &Map<String, Value>) -> Option<String> {
    PLACE_ID_KEYS.iter().find_map(|key| match properties.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
