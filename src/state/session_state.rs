use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Favorite, Route, User};

/// The dashboard's whole view state as one explicit object, owned by the
/// root component. All transitions, including the reset semantics of login
/// failure and logout, go through the reducer so that concurrently
/// completing loads can never clobber each other.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    /// Coarse flag around the top-level session operations only.
    pub busy: bool,
    /// Unfiltered source of truth for the search box.
    pub all_routes: Vec<Route>,
    pub routes_error: Option<String>,
    pub query: String,
    /// Non-null only while the route-details view is active.
    pub selected_route: Option<Route>,
    pub favorites: Vec<Favorite>,
    pub favorites_error: Option<String>,
}

pub enum SessionAction {
    Busy(bool),
    /// A fresh login: drops whatever the previous user was looking at.
    LoggedIn(User),
    /// Failed login or logout; back to the logged-out baseline.
    SessionCleared,
    RoutesLoaded(Vec<Route>),
    RoutesFailed(String),
    QueryChanged(String),
    RouteSelected(Route),
    SelectionCleared,
    FavoritesLoaded(Vec<Favorite>),
    FavoritesFailed(String),
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Busy(busy) => next.busy = busy,
            SessionAction::LoggedIn(user) => {
                next = SessionState::default();
                next.user = Some(user);
            }
            SessionAction::SessionCleared => next = SessionState::default(),
            SessionAction::RoutesLoaded(routes) => {
                next.all_routes = routes;
                next.routes_error = None;
            }
            SessionAction::RoutesFailed(error) => {
                next.all_routes = Vec::new();
                next.routes_error = Some(error);
            }
            SessionAction::QueryChanged(query) => next.query = query,
            SessionAction::RouteSelected(route) => next.selected_route = Some(route),
            SessionAction::SelectionCleared => next.selected_route = None,
            SessionAction::FavoritesLoaded(favorites) => {
                next.favorites = favorites;
                next.favorites_error = None;
            }
            SessionAction::FavoritesFailed(error) => {
                next.favorites = Vec::new();
                next.favorites_error = Some(error);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
            created_at: None,
        }
    }

    fn route(id: &str) -> Route {
        Route {
            route_id: id.to_string(),
            short_name: String::new(),
            long_name: id.to_string(),
            route_type: 1,
        }
    }

    fn apply(state: SessionState, action: SessionAction) -> SessionState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn login_drops_previous_users_state() {
        let mut state = SessionState::default();
        state.user = Some(user(1, "alice"));
        state.all_routes = vec![route("Red")];
        state.selected_route = Some(route("Red"));
        state.query = "red".to_string();

        let state = apply(state, SessionAction::LoggedIn(user(2, "bob")));
        assert_eq!(state.user.as_ref().unwrap().username, "bob");
        assert!(state.all_routes.is_empty());
        assert!(state.selected_route.is_none());
        assert!(state.query.is_empty());
    }

    #[test]
    fn session_cleared_is_the_logged_out_baseline() {
        let mut state = SessionState::default();
        state.user = Some(user(1, "alice"));
        state.favorites = vec![Favorite {
            id: 1,
            item_id: "Red".to_string(),
            item_name: None,
            kind: "route".to_string(),
        }];

        let state = apply(state, SessionAction::SessionCleared);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn feature_failures_keep_the_session_alive() {
        let mut state = SessionState::default();
        state.user = Some(user(1, "alice"));
        state.all_routes = vec![route("Red")];

        let state = apply(state, SessionAction::RoutesFailed("HTTP 500".to_string()));
        assert!(state.user.is_some());
        assert!(state.all_routes.is_empty());
        assert_eq!(state.routes_error.as_deref(), Some("HTTP 500"));

        let state = apply(state, SessionAction::FavoritesFailed("HTTP 502".to_string()));
        assert!(state.user.is_some());
        assert_eq!(state.favorites_error.as_deref(), Some("HTTP 502"));
    }

    #[test]
    fn selection_toggles_without_touching_routes() {
        let mut state = SessionState::default();
        state.all_routes = vec![route("Red"), route("Blue")];

        let state = apply(state, SessionAction::RouteSelected(route("Red")));
        assert!(state.selected_route.is_some());
        assert_eq!(state.all_routes.len(), 2);

        let state = apply(state, SessionAction::SelectionCleared);
        assert!(state.selected_route.is_none());
        assert_eq!(state.all_routes.len(), 2);
    }
}
