use crate::models::AlertEntity;

/// Display form of one service alert.
#[derive(Clone, PartialEq, Debug)]
pub struct AlertView {
    pub header: String,
    pub description: Option<String>,
    pub effect: String,
}

/// Scopes the full feed to one route: only entries whose informed entities
/// name `route_id` survive. Entries with no informed entities are dropped,
/// not treated as errors.
pub fn alerts_for_route(alerts: &[AlertEntity], route_id: &str) -> Vec<AlertView> {
    alerts
        .iter()
        .filter(|entity| entity.informs_route(route_id))
        .map(|entity| AlertView {
            header: entity
                .alert
                .header_text
                .first_text()
                .unwrap_or("No header")
                .to_string(),
            description: entity
                .alert
                .description_text
                .first_text()
                .map(str::to_string),
            effect: if entity.alert.effect.is_empty() {
                "Unknown".to_string()
            } else {
                entity.alert.effect.clone()
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::alert::{AlertDetails, InformedEntity, TranslatedText, Translation};

    fn entity(routes: &[&str], header: &str, effect: &str) -> AlertEntity {
        AlertEntity {
            id: String::new(),
            alert: AlertDetails {
                header_text: TranslatedText {
                    translation: vec![Translation {
                        text: header.to_string(),
                    }],
                },
                description_text: TranslatedText::default(),
                effect: effect.to_string(),
                informed_entity: routes
                    .iter()
                    .map(|r| InformedEntity {
                        route_id: r.to_string(),
                        stop_id: String::new(),
                    })
                    .collect(),
                active_period: Vec::new(),
            },
        }
    }

    #[test]
    fn keeps_only_alerts_naming_the_route() {
        let feed = vec![
            entity(&["Red"], "Red delay", "DELAY"),
            entity(&["Blue", "Red"], "Two-line detour", "DETOUR"),
            entity(&["Blue"], "Blue only", "DELAY"),
            entity(&[], "Systemwide note", "OTHER"),
        ];

        let views = alerts_for_route(&feed, "Red");
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].header, "Red delay");
        assert_eq!(views[1].header, "Two-line detour");
    }

    #[test]
    fn alert_without_informed_entities_is_excluded() {
        let feed = vec![entity(&[], "Orphan", "DELAY")];
        assert!(alerts_for_route(&feed, "Red").is_empty());
    }

    #[test]
    fn missing_header_and_effect_fall_back() {
        let mut bare = entity(&["Red"], "", "");
        bare.alert.header_text = TranslatedText::default();

        let views = alerts_for_route(&[bare], "Red");
        assert_eq!(views[0].header, "No header");
        assert_eq!(views[0].effect, "Unknown");
        assert!(views[0].description.is_none());
    }
}
