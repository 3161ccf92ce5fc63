use crate::models::{Route, RouteCategory};

/// Routes partitioned into the four known categories. Routes with an
/// unrecognized `route_type` appear in none of them.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RouteGroups {
    pub light_rail: Vec<Route>,
    pub subway: Vec<Route>,
    pub rail: Vec<Route>,
    pub bus: Vec<Route>,
}

impl RouteGroups {
    pub fn get(&self, category: RouteCategory) -> &[Route] {
        match category {
            RouteCategory::LightRail => &self.light_rail,
            RouteCategory::Subway => &self.subway,
            RouteCategory::Rail => &self.rail,
            RouteCategory::Bus => &self.bus,
        }
    }

}

pub fn group_routes(routes: &[Route]) -> RouteGroups {
    let mut groups = RouteGroups::default();
    for route in routes {
        match route.category() {
            Some(RouteCategory::LightRail) => groups.light_rail.push(route.clone()),
            Some(RouteCategory::Subway) => groups.subway.push(route.clone()),
            Some(RouteCategory::Rail) => groups.rail.push(route.clone()),
            Some(RouteCategory::Bus) => groups.bus.push(route.clone()),
            None => {}
        }
    }
    groups
}

/// Case-insensitive substring match on long or short name. An empty query
/// returns the full list. The source slice is never mutated; the result is
/// always a fresh list feeding the same grouping path.
pub fn filter_routes(routes: &[Route], query: &str) -> Vec<Route> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return routes.to_vec();
    }

    routes
        .iter()
        .filter(|route| {
            route.long_name.to_lowercase().contains(&query)
                || route.short_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, short: &str, long: &str, route_type: i32) -> Route {
        Route {
            route_id: id.to_string(),
            short_name: short.to_string(),
            long_name: long.to_string(),
            route_type,
        }
    }

    #[test]
    fn partitions_into_exactly_four_buckets() {
        let routes = vec![
            route("G", "", "Green Line", 0),
            route("R", "", "Red Line", 1),
            route("CR", "", "Commuter Rail", 2),
            route("57", "57", "Watertown", 3),
            route("F", "", "Ferry", 4),
            route("X", "", "Mystery", 99),
        ];

        let groups = group_routes(&routes);
        assert_eq!(groups.light_rail.len(), 1);
        assert_eq!(groups.subway.len(), 1);
        assert_eq!(groups.rail.len(), 1);
        assert_eq!(groups.bus.len(), 1);

        // Unknown types land nowhere.
        let total = groups.light_rail.len() + groups.subway.len() + groups.rail.len() + groups.bus.len();
        assert_eq!(total, 4);
    }

    #[test]
    fn subway_route_lands_only_in_subway_bucket() {
        let routes = vec![route("R1", "", "Red Line", 1)];
        let groups = group_routes(&routes);
        assert_eq!(groups.subway[0].long_name, "Red Line");
        assert!(groups.light_rail.is_empty());
        assert!(groups.rail.is_empty());
        assert!(groups.bus.is_empty());
    }

    #[test]
    fn empty_query_is_identity() {
        let routes = vec![route("R", "", "Red Line", 1), route("57", "57", "Watertown", 3)];
        assert_eq!(filter_routes(&routes, ""), routes);
        assert_eq!(filter_routes(&routes, "   "), routes);
    }

    #[test]
    fn matches_either_name_case_insensitively() {
        let routes = vec![
            route("R", "", "Red Line", 1),
            route("57", "57A", "Watertown Yard", 3),
            route("B", "", "Blue Line", 1),
        ];

        let by_long = filter_routes(&routes, "red");
        assert_eq!(by_long.len(), 1);
        assert_eq!(by_long[0].route_id, "R");

        let by_short = filter_routes(&routes, "57a");
        assert_eq!(by_short.len(), 1);
        assert_eq!(by_short[0].route_id, "57");

        let by_substring = filter_routes(&routes, "LINE");
        assert_eq!(by_substring.len(), 2);
    }

    #[test]
    fn filtering_never_mutates_the_source() {
        let routes = vec![route("R", "", "Red Line", 1), route("B", "", "Blue Line", 1)];
        let before = routes.clone();
        let _ = filter_routes(&routes, "red");
        assert_eq!(routes, before);
    }
}
