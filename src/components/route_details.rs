use yew::prelude::*;

use crate::components::RouteTabs;
use crate::models::Route;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RouteDetailsProps {
    pub route: Route,
    pub api: ApiClient,
    pub on_back: Callback<()>,
    pub on_add_favorite: Callback<Route>,
}

/// Detail view of the selected route. The parent keys this component by
/// route id, so picking another route remounts it and the tabs start from
/// their default again.
#[function_component(RouteDetails)]
pub fn route_details(props: &RouteDetailsProps) -> Html {
    let route = &props.route;

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let on_add_favorite = {
        let on_add_favorite = props.on_add_favorite.clone();
        let route = route.clone();
        Callback::from(move |_: MouseEvent| on_add_favorite.emit(route.clone()))
    };

    let type_label = route
        .category()
        .map(|category| category.label())
        .unwrap_or("Unknown");

    html! {
        <section class="route-details-section">
            <button class="btn-home" onclick={on_back}>{"← Back to routes"}</button>

            <div class="selected-route-info">
                <h3>{ route.display_name() }</h3>
                <p><strong>{"Route ID: "}</strong>{ &route.route_id }</p>
                <p><strong>{"Type: "}</strong>{ type_label }</p>
                <button onclick={on_add_favorite}>{"Add to Favorites"}</button>
            </div>

            <RouteTabs
                route_id={route.route_id.clone()}
                api={props.api.clone()}
                show_trips=true
            />
        </section>
    }
}
