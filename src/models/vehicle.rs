use serde::{Deserialize, Serialize};

/// A real-time vehicle report from the live feed. `stop_name` is never sent
/// by the backend; the live tab fills it in by looking up `stop_id`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VehiclePosition {
    pub vehicle_id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub stop_id: String,
    #[serde(default)]
    pub direction_id: i32,
    #[serde(default)]
    pub occupancy_status: Option<String>,
    #[serde(default)]
    pub occupancy_percentage: Option<i32>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub stop_name: Option<String>,
}

impl VehiclePosition {
    pub fn has_stop(&self) -> bool {
        !self.stop_id.is_empty()
    }

    /// Enriched stop name when available, raw stop id otherwise.
    pub fn location(&self) -> String {
        match &self.stop_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Stop ID: {}", self.stop_id),
        }
    }
}
