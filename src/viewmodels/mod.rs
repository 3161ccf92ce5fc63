pub mod alert_viewmodel;
pub mod favorite_viewmodel;
pub mod route_viewmodel;
pub mod tab_viewmodel;
pub mod vehicle_viewmodel;

pub use alert_viewmodel::{alerts_for_route, AlertView};
pub use favorite_viewmodel::favorite_display_name;
pub use route_viewmodel::{filter_routes, group_routes, RouteGroups};
pub use tab_viewmodel::{DetailTab, TabState};
pub use vehicle_viewmodel::{attach_stop_names, describe_vehicle, VehicleView};
