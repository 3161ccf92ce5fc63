use serde::{Deserialize, Serialize};

/// One entry of the GTFS-realtime alert feed, as flattened by the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AlertEntity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub alert: AlertDetails,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AlertDetails {
    #[serde(default)]
    pub header_text: TranslatedText,
    #[serde(default)]
    pub description_text: TranslatedText,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub informed_entity: Vec<InformedEntity>,
    #[serde(default)]
    pub active_period: Vec<ActivePeriod>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TranslatedText {
    #[serde(default)]
    pub translation: Vec<Translation>,
}

impl TranslatedText {
    /// First translation, the convention for untranslated feeds.
    pub fn first_text(&self) -> Option<&str> {
        self.translation
            .first()
            .map(|t| t.text.as_str())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Translation {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct InformedEntity {
    #[serde(default)]
    pub route_id: String,
    #[serde(default)]
    pub stop_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ActivePeriod {
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub end: i64,
}

impl AlertEntity {
    /// Whether any informed entity names the given route. An alert without
    /// informed entities informs no route.
    pub fn informs_route(&self, route_id: &str) -> bool {
        self.alert
            .informed_entity
            .iter()
            .any(|entity| entity.route_id == route_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_entry() {
        let json = r#"{
            "id": "alert-1",
            "alert": {
                "header_text": {"translation": [{"text": "Shuttle buses"}]},
                "description_text": {"translation": [{"text": "Weekend work"}]},
                "effect": "DETOUR",
                "informed_entity": [{"route_id": "Red", "stop_id": ""}],
                "active_period": [{"start": 1, "end": 2}]
            }
        }"#;
        let entity: AlertEntity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.alert.header_text.first_text(), Some("Shuttle buses"));
        assert!(entity.informs_route("Red"));
        assert!(!entity.informs_route("Blue"));
    }

    #[test]
    fn entry_without_informed_entities_informs_nothing() {
        let entity: AlertEntity = serde_json::from_str(r#"{"id":"a","alert":{}}"#).unwrap();
        assert!(!entity.informs_route("Red"));
        assert!(entity.alert.header_text.first_text().is_none());
    }
}
