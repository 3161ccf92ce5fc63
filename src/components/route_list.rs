use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Route, RouteCategory};
use crate::viewmodels::RouteGroups;

#[derive(Properties, PartialEq)]
pub struct RouteListProps {
    /// Already filtered and grouped by the controller.
    pub groups: RouteGroups,
    pub query: String,
    /// Set when the route load failed; renders the failure placeholder in
    /// every category bucket.
    pub error: Option<String>,
    pub on_search: Callback<String>,
    pub on_select: Callback<Route>,
    pub on_add_favorite: Callback<Route>,
}

/// Browse view: search box plus the four fixed category buckets.
/// Expand/collapse is purely local state, no data is fetched here.
#[function_component(RouteList)]
pub fn route_list(props: &RouteListProps) -> Html {
    let expanded = use_state(HashSet::<RouteCategory>::new);

    let on_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <section class="routes-section">
            <h2>{"Routes"}</h2>
            <input
                type="search"
                class="route-search"
                placeholder="Search routes by name..."
                value={props.query.clone()}
                oninput={on_search}
            />
            {
                for RouteCategory::ALL.iter().map(|&category| category_section(
                    category,
                    props.groups.get(category),
                    expanded.contains(&category),
                    &expanded,
                    props,
                ))
            }
        </section>
    }
}

fn category_section(
    category: RouteCategory,
    routes: &[Route],
    is_expanded: bool,
    expanded: &UseStateHandle<HashSet<RouteCategory>>,
    props: &RouteListProps,
) -> Html {
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*expanded).clone();
            if !next.remove(&category) {
                next.insert(category);
            }
            expanded.set(next);
        })
    };

    let body = if props.error.is_some() {
        html! { <li class="placeholder error">{"Failed to load routes"}</li> }
    } else if routes.is_empty() {
        html! { <li class="placeholder">{"No routes available"}</li> }
    } else {
        html! {
            for routes.iter().map(|route| {
                let on_select = {
                    let on_select = props.on_select.clone();
                    let route = route.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(route.clone()))
                };
                let on_add_favorite = {
                    let on_add_favorite = props.on_add_favorite.clone();
                    let route = route.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        on_add_favorite.emit(route.clone());
                    })
                };
                html! {
                    <li key={route.route_id.clone()} onclick={on_select}>
                        <strong>{ route.display_name() }</strong>
                        <button onclick={on_add_favorite}>{"Add to Favorites"}</button>
                    </li>
                }
            })
        }
    };

    html! {
        <div class="route-category" key={category.label()}>
            <h3 onclick={toggle}>
                { category.label() }
                <span class="toggle-icon">{ if is_expanded { "-" } else { "+" } }</span>
            </h3>
            <ul class={classes!("route-list", (!is_expanded).then_some("collapsed"))}>
                { body }
            </ul>
        </div>
    }
}
