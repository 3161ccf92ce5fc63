use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Route {
    pub route_id: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub long_name: String,
    pub route_type: i32,
}

impl Route {
    /// Long name, else short name, else a placeholder.
    pub fn display_name(&self) -> &str {
        if !self.long_name.is_empty() {
            &self.long_name
        } else if !self.short_name.is_empty() {
            &self.short_name
        } else {
            "Unnamed Route"
        }
    }

    pub fn category(&self) -> Option<RouteCategory> {
        RouteCategory::from_route_type(self.route_type)
    }
}

/// GTFS route_type values the UI knows how to bucket. Anything else is
/// dropped from the category view rather than shown as "other".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RouteCategory {
    LightRail,
    Subway,
    Rail,
    Bus,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 4] = [
        RouteCategory::LightRail,
        RouteCategory::Subway,
        RouteCategory::Rail,
        RouteCategory::Bus,
    ];

    pub fn from_route_type(route_type: i32) -> Option<Self> {
        match route_type {
            0 => Some(RouteCategory::LightRail),
            1 => Some(RouteCategory::Subway),
            2 => Some(RouteCategory::Rail),
            3 => Some(RouteCategory::Bus),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RouteCategory::LightRail => "Light Rail",
            RouteCategory::Subway => "Subway",
            RouteCategory::Rail => "Rail",
            RouteCategory::Bus => "Bus",
        }
    }
}
