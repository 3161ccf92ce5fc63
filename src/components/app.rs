use yew::prelude::*;

use crate::components::{FavoritesPanel, LoginScreen, MessageList, RouteDetails, RouteList};
use crate::hooks::{use_messages, use_session};
use crate::services::ApiClient;
use crate::viewmodels::{filter_routes, group_routes};

/// Root view controller. Owns the session state and the transient message
/// stack; everything below renders from props.
#[function_component(App)]
pub fn app() -> Html {
    let api = ApiClient::new();
    let messages = use_messages();
    let session = use_session(api.clone(), messages.push.clone());
    let state = &*session.state;

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let header = match &state.user {
        Some(user) => html! {
            <header class="app-header">
                <h1>{"🚇 Transit Tracker"}</h1>
                <div class="header-user">
                    <span>{ format!("Welcome, {}!", user.username) }</span>
                    <button onclick={on_logout}>{"Logout"}</button>
                </div>
            </header>
        },
        None => html! {
            <header class="app-header">
                <h1>{"🚇 Transit Tracker"}</h1>
            </header>
        },
    };

    let main = if state.user.is_none() {
        html! {
            <LoginScreen
                on_create={session.create_user.clone()}
                on_load={session.load_user.clone()}
                busy={state.busy}
            />
        }
    } else if let Some(route) = &state.selected_route {
        // Keyed by route id: a different selection remounts the details
        // view and its tabs come back up on the default tab.
        html! {
            <RouteDetails
                key={route.route_id.clone()}
                route={route.clone()}
                api={api.clone()}
                on_back={session.clear_selection.clone()}
                on_add_favorite={session.add_favorite.clone()}
            />
        }
    } else {
        // Filtering derives a fresh list each render; all_routes stays
        // untouched so clearing the query restores everything.
        let filtered = filter_routes(&state.all_routes, &state.query);
        let groups = group_routes(&filtered);

        html! {
            <>
                <RouteList
                    groups={groups}
                    query={state.query.clone()}
                    error={state.routes_error.clone()}
                    on_search={session.search.clone()}
                    on_select={session.select_route.clone()}
                    on_add_favorite={session.add_favorite.clone()}
                />
                <FavoritesPanel
                    favorites={state.favorites.clone()}
                    error={state.favorites_error.clone()}
                    api={api.clone()}
                    on_delete={session.delete_favorite.clone()}
                />
            </>
        }
    };

    html! {
        <div class="container">
            { header }
            <MessageList messages={messages.messages.clone()} />
            <main>{ main }</main>
        </div>
    }
}
