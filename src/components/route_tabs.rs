use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::ApiClient;
use crate::viewmodels::{
    alerts_for_route, attach_stop_names, describe_vehicle, AlertView, DetailTab, TabState,
    VehicleView,
};
use crate::models::{Stop, Trip};

#[derive(Properties, PartialEq)]
pub struct RouteTabsProps {
    pub route_id: AttrValue,
    pub api: ApiClient,
    /// The main details view shows Trips; favorites keep the shorter set.
    #[prop_or_default]
    pub show_trips: bool,
}

#[derive(Clone, PartialEq)]
enum TabContent {
    Loading,
    Stops(Vec<Stop>),
    Trips(Vec<Trip>),
    Vehicles(Vec<VehicleView>),
    Alerts(Vec<AlertView>),
    Failed(String),
}

/// Detail tabs for one route. Every instance owns its tab state, so the
/// main details view and each expanded favorite navigate independently.
///
/// Loads are guarded by the tab state's generation: a response that comes
/// back after another tab (or a reload) was selected is discarded instead
/// of overwriting the newer content.
#[function_component(RouteTabs)]
pub fn route_tabs(props: &RouteTabsProps) -> Html {
    let tabs = use_state(TabState::new);
    let content = use_state(|| TabContent::Loading);
    let latest_generation = use_mut_ref(|| 0u64);

    {
        let content = content.clone();
        let latest_generation = latest_generation.clone();
        let api = props.api.clone();
        use_effect_with(
            (props.route_id.clone(), (*tabs).clone()),
            move |(route_id, tabs): &(AttrValue, TabState)| {
                let generation = tabs.generation();
                *latest_generation.borrow_mut() = generation;

                let tab = tabs.active();
                let route_id = route_id.to_string();
                content.set(TabContent::Loading);

                spawn_local(async move {
                    let loaded = load_tab(api, &route_id, tab).await;
                    if *latest_generation.borrow() != generation {
                        log::debug!("🗑️ Discarding stale {} response for {}", tab.label(), route_id);
                        return;
                    }
                    content.set(loaded.unwrap_or_else(TabContent::Failed));
                });
                || ()
            },
        );
    }

    let available: &[DetailTab] = if props.show_trips {
        &[DetailTab::Stops, DetailTab::Trips, DetailTab::Live, DetailTab::Alerts]
    } else {
        &[DetailTab::Stops, DetailTab::Live, DetailTab::Alerts]
    };

    let active = tabs.active();
    html! {
        <div class="route-tabs">
            <div class="tab-buttons">
                {
                    for available.iter().map(|&tab| {
                        let onclick = {
                            let tabs = tabs.clone();
                            Callback::from(move |_: MouseEvent| tabs.set(tabs.select(tab)))
                        };
                        html! {
                            <button
                                class={classes!("tab-button", (tab == active).then_some("active"))}
                                {onclick}
                            >
                                { tab.label() }
                            </button>
                        }
                    })
                }
            </div>
            <div class="tab-content">
                { render_content(active, &content) }
            </div>
        </div>
    }
}

async fn load_tab(api: ApiClient, route_id: &str, tab: DetailTab) -> Result<TabContent, String> {
    match tab {
        DetailTab::Stops => api.get_route_stops(route_id).await.map(TabContent::Stops),
        DetailTab::Trips => api.get_route_trips(route_id).await.map(TabContent::Trips),
        DetailTab::Live => {
            let vehicles = api.get_live_vehicles(route_id).await?;
            // Fan out one stop lookup per vehicle; a failed lookup only
            // degrades its own vehicle (see attach_stop_names).
            let lookup_api = api.clone();
            let enriched = attach_stop_names(vehicles, move |stop_id| {
                let api = lookup_api.clone();
                async move { api.get_stop(&stop_id).await }
            })
            .await;
            Ok(TabContent::Vehicles(
                enriched.iter().map(describe_vehicle).collect(),
            ))
        }
        DetailTab::Alerts => {
            let alerts = api.get_alerts().await?;
            Ok(TabContent::Alerts(alerts_for_route(&alerts, route_id)))
        }
    }
}

fn render_content(tab: DetailTab, content: &TabContent) -> Html {
    match content {
        TabContent::Loading => html! { <div class="tab-loading">{"Loading..."}</div> },
        TabContent::Failed(error) => html! {
            <div class="tab-error">
                { format!("Error loading {}: {}", tab.label().to_lowercase(), error) }
            </div>
        },
        TabContent::Stops(stops) if stops.is_empty() => {
            empty_state("No stops available for this route")
        }
        TabContent::Stops(stops) => html! {
            <div class="stops-list">
                {
                    for stops.iter().map(|stop| html! {
                        <div class="stop-item" key={stop.stop_id.clone()}>
                            <h4>{ stop.display_name() }</h4>
                            <p><strong>{"ID: "}</strong>{ &stop.stop_id }</p>
                            {
                                if let (Some(lat), Some(lon)) = (stop.lat, stop.lon) {
                                    html! { <p><strong>{"Location: "}</strong>{ format!("{}, {}", lat, lon) }</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    })
                }
            </div>
        },
        TabContent::Trips(trips) if trips.is_empty() => {
            empty_state("No trips scheduled for this route")
        }
        TabContent::Trips(trips) => html! {
            <div class="trips-list">
                {
                    for trips.iter().map(|trip| html! {
                        <div class="trip-item" key={trip.trip_id.clone()}>
                            <h4>{ if trip.trip_headsign.is_empty() { trip.trip_id.as_str() } else { trip.trip_headsign.as_str() } }</h4>
                            <p><strong>{"Trip ID: "}</strong>{ &trip.trip_id }</p>
                            <p><strong>{"Service: "}</strong>{ &trip.service_id }</p>
                        </div>
                    })
                }
            </div>
        },
        TabContent::Vehicles(vehicles) if vehicles.is_empty() => {
            empty_state("No live vehicles available for this route")
        }
        TabContent::Vehicles(vehicles) => html! {
            <div class="vehicles-list">
                {
                    for vehicles.iter().map(|vehicle| html! {
                        <div class="vehicle-item" key={vehicle.vehicle_id.clone()}>
                            <h4>{ format!("Vehicle {}", vehicle.vehicle_id) }</h4>
                            <p><strong>{"Status: "}</strong>{ &vehicle.status_line }</p>
                            <p><strong>{"Direction: "}</strong>{ vehicle.direction }</p>
                            <p><strong>{"Occupancy: "}</strong>{ &vehicle.occupancy }</p>
                        </div>
                    })
                }
            </div>
        },
        TabContent::Alerts(alerts) if alerts.is_empty() => empty_state("No alerts for this route"),
        TabContent::Alerts(alerts) => html! {
            <div class="alerts-list">
                {
                    for alerts.iter().map(|alert| html! {
                        <div class="alert-item">
                            <h4>{ &alert.header }</h4>
                            {
                                if let Some(description) = &alert.description {
                                    html! { <p><strong>{"Description: "}</strong>{ description }</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <p><strong>{"Effect: "}</strong>{ &alert.effect }</p>
                        </div>
                    })
                }
            </div>
        },
    }
}

fn empty_state(text: &str) -> Html {
    html! { <div class="tab-empty">{ text }</div> }
}
