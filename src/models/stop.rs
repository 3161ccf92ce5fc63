use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Stop {
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Stop {
    pub fn display_name(&self) -> &str {
        if self.stop_name.is_empty() {
            "Unnamed Stop"
        } else {
            &self.stop_name
        }
    }
}
