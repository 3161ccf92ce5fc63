use std::collections::HashSet;

use yew::prelude::*;

use crate::components::RouteTabs;
use crate::models::Favorite;
use crate::services::ApiClient;
use crate::viewmodels::favorite_display_name;

#[derive(Properties, PartialEq)]
pub struct FavoritesPanelProps {
    pub favorites: Vec<Favorite>,
    pub error: Option<String>,
    pub api: ApiClient,
    pub on_delete: Callback<Favorite>,
}

/// The user's favorites. Route favorites expand in place into their own
/// Stops/Live/Alerts tabs; each expansion is a separate RouteTabs instance
/// with tab state independent of the main details view and of each other.
#[function_component(FavoritesPanel)]
pub fn favorites_panel(props: &FavoritesPanelProps) -> Html {
    let expanded = use_state(HashSet::<String>::new);

    let body = if props.error.is_some() {
        html! { <li class="placeholder error">{"Failed to load favorites"}</li> }
    } else if props.favorites.is_empty() {
        html! { <li class="placeholder">{"No favorites yet. Add some routes to get started!"}</li> }
    } else {
        html! { for props.favorites.iter().map(|favorite| favorite_item(favorite, &expanded, props)) }
    };

    html! {
        <section class="favorites-section">
            <h2>{"My Favorites"}</h2>
            <ul class="favorites-list">
                { body }
            </ul>
        </section>
    }
}

fn favorite_item(
    favorite: &Favorite,
    expanded: &UseStateHandle<HashSet<String>>,
    props: &FavoritesPanelProps,
) -> Html {
    let display_name = favorite_display_name(favorite);

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let favorite = favorite.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(favorite.clone());
        })
    };

    if !favorite.is_route() {
        return html! {
            <li key={favorite.item_id.clone()}>
                <span>{ display_name }</span>
                <button onclick={on_delete}>{"Remove"}</button>
            </li>
        };
    }

    let is_expanded = expanded.contains(&favorite.item_id);
    let toggle = {
        let expanded = expanded.clone();
        let item_id = favorite.item_id.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*expanded).clone();
            if !next.remove(&item_id) {
                next.insert(item_id.clone());
            }
            expanded.set(next);
        })
    };

    html! {
        <li key={favorite.item_id.clone()} class="favorite-route">
            <div class="favorite-route-header" onclick={toggle}>
                <span>{ display_name }</span>
                <button onclick={on_delete}>{"Remove"}</button>
            </div>
            {
                if is_expanded {
                    html! {
                        <div class="favorite-route-details">
                            <RouteTabs
                                route_id={favorite.item_id.clone()}
                                api={props.api.clone()}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </li>
    }
}
