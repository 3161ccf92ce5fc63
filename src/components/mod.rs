pub mod app;
pub mod favorites_panel;
pub mod login_screen;
pub mod message_list;
pub mod route_details;
pub mod route_list;
pub mod route_tabs;

pub use app::App;
pub use favorites_panel::FavoritesPanel;
pub use login_screen::LoginScreen;
pub use message_list::MessageList;
pub use route_details::RouteDetails;
pub use route_list::RouteList;
pub use route_tabs::RouteTabs;
