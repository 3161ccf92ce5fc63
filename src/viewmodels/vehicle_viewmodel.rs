use std::future::Future;

use futures::future::join_all;

use crate::models::{Stop, VehiclePosition};

/// Everything the live tab needs to render one vehicle.
#[derive(Clone, PartialEq, Debug)]
pub struct VehicleView {
    pub vehicle_id: String,
    pub status_line: String,
    pub direction: &'static str,
    pub occupancy: String,
}

pub fn describe_vehicle(vehicle: &VehiclePosition) -> VehicleView {
    let location = vehicle.location();
    VehicleView {
        vehicle_id: vehicle.vehicle_id.clone(),
        status_line: status_phrase(&vehicle.status, &location),
        direction: direction_label(vehicle.direction_id),
        occupancy: describe_occupancy(
            vehicle.occupancy_status.as_deref(),
            vehicle.occupancy_percentage,
        ),
    }
}

fn status_phrase(status: &str, location: &str) -> String {
    match status {
        "INCOMING_AT" => format!("Arriving at {}", location),
        "STOPPED_AT" => format!("Stopped at {}", location),
        "IN_TRANSIT_TO" => format!("In transit to {}", location),
        other => format!("{} {}", other, location),
    }
}

pub fn direction_label(direction_id: i32) -> &'static str {
    if direction_id == 0 {
        "Outbound"
    } else {
        "Inbound"
    }
}

/// Turns an upper-snake occupancy token into a readable phrase with the
/// reported percentage, e.g. `MANY_SEATS_AVAILABLE` / 12 →
/// "Many seats available (12%)". Missing data gets a fixed placeholder.
pub fn describe_occupancy(status: Option<&str>, percentage: Option<i32>) -> String {
    match status {
        Some(token) if !token.is_empty() => {
            let mut phrase = token.to_lowercase().replace('_', " ");
            if let Some(first) = phrase.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            format!("{} ({}%)", phrase, percentage.unwrap_or(0))
        }
        _ => "No occupancy data available".to_string(),
    }
}

/// Fan-out/fan-in enrichment: looks up the stop name for every vehicle that
/// carries a stop id, all lookups in flight at once. A failed lookup leaves
/// that one vehicle with its raw stop id and is only logged; it never fails
/// the tab.
pub async fn attach_stop_names<F, Fut>(
    vehicles: Vec<VehiclePosition>,
    lookup: F,
) -> Vec<VehiclePosition>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Stop, String>>,
{
    let enriched = vehicles.into_iter().map(|mut vehicle| {
        let pending = vehicle.has_stop().then(|| lookup(vehicle.stop_id.clone()));
        async move {
            if let Some(pending) = pending {
                match pending.await {
                    Ok(stop) => vehicle.stop_name = Some(stop.stop_name),
                    Err(e) => {
                        log::warn!("⚠️ Failed to fetch stop info for {}: {}", vehicle.stop_id, e)
                    }
                }
            }
            vehicle
        }
    });

    join_all(enriched).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, status: &str, stop_id: &str) -> VehiclePosition {
        VehiclePosition {
            vehicle_id: id.to_string(),
            label: String::new(),
            status: status.to_string(),
            stop_id: stop_id.to_string(),
            direction_id: 0,
            occupancy_status: None,
            occupancy_percentage: None,
            latitude: None,
            longitude: None,
            stop_name: None,
        }
    }

    #[test]
    fn status_phrases_cover_known_codes_and_fallback() {
        assert_eq!(status_phrase("INCOMING_AT", "Central"), "Arriving at Central");
        assert_eq!(status_phrase("STOPPED_AT", "Central"), "Stopped at Central");
        assert_eq!(status_phrase("IN_TRANSIT_TO", "Central"), "In transit to Central");
        assert_eq!(status_phrase("LAYOVER", "Central"), "LAYOVER Central");
    }

    #[test]
    fn direction_zero_is_outbound() {
        assert_eq!(direction_label(0), "Outbound");
        assert_eq!(direction_label(1), "Inbound");
    }

    #[test]
    fn occupancy_token_becomes_sentence_case_with_percentage() {
        assert_eq!(
            describe_occupancy(Some("MANY_SEATS_AVAILABLE"), Some(12)),
            "Many seats available (12%)"
        );
        assert_eq!(
            describe_occupancy(Some("FULL"), None),
            "Full (0%)"
        );
    }

    #[test]
    fn missing_occupancy_gets_placeholder() {
        assert_eq!(describe_occupancy(None, Some(50)), "No occupancy data available");
        assert_eq!(describe_occupancy(Some(""), None), "No occupancy data available");
    }

    #[test]
    fn enrichment_degrades_per_vehicle() {
        let vehicles = vec![
            vehicle("V1", "STOPPED_AT", "S1"),
            vehicle("V2", "IN_TRANSIT_TO", "S-broken"),
            vehicle("V3", "INCOMING_AT", ""),
        ];

        let enriched = futures::executor::block_on(attach_stop_names(vehicles, |stop_id| {
            async move {
                if stop_id == "S1" {
                    Ok(Stop {
                        stop_id,
                        stop_name: "Central".to_string(),
                        lat: None,
                        lon: None,
                    })
                } else {
                    Err("HTTP 500: Failed to load stop".to_string())
                }
            }
        }));

        // All vehicles survive; only the failing lookup falls back to its id.
        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].location(), "Central");
        assert_eq!(enriched[1].location(), "Stop ID: S-broken");
        assert!(enriched[2].stop_name.is_none());
    }

    #[test]
    fn describe_vehicle_uses_enriched_name() {
        let mut v = vehicle("V9", "STOPPED_AT", "S1");
        v.stop_name = Some("Harvard".to_string());
        v.occupancy_status = Some("FEW_SEATS_AVAILABLE".to_string());
        v.occupancy_percentage = Some(81);

        let view = describe_vehicle(&v);
        assert_eq!(view.vehicle_id, "V9");
        assert_eq!(view.status_line, "Stopped at Harvard");
        assert_eq!(view.direction, "Outbound");
        assert_eq!(view.occupancy, "Few seats available (81%)");
    }
}
