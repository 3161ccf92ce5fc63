use serde::{Deserialize, Serialize};

/// A user-scoped bookmark. `kind` is currently always "route" but the
/// backend treats it as an open set, so the client does too.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Favorite {
    #[serde(default)]
    pub id: i64,
    pub item_id: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Favorite {
    pub fn is_route(&self) -> bool {
        self.kind == "route"
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewFavoriteRequest {
    pub item_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_and_without_name() {
        let named: Favorite =
            serde_json::from_str(r#"{"id":1,"item_id":"Red","type":"route","item_name":"Red Line"}"#)
                .unwrap();
        assert!(named.is_route());
        assert_eq!(named.item_name.as_deref(), Some("Red Line"));

        let bare: Favorite =
            serde_json::from_str(r#"{"id":2,"item_id":"S7","type":"stop"}"#).unwrap();
        assert!(!bare.is_route());
        assert!(bare.item_name.is_none());
    }

    #[test]
    fn request_serializes_type_field() {
        let request = NewFavoriteRequest {
            item_id: "Red".to_string(),
            kind: "route".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""type":"route""#));
    }
}
