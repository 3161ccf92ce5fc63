pub mod alert;
pub mod favorite;
pub mod route;
pub mod stop;
pub mod trip;
pub mod user;
pub mod vehicle;

pub use alert::AlertEntity;
pub use favorite::{Favorite, NewFavoriteRequest};
pub use route::{Route, RouteCategory};
pub use stop::Stop;
pub use trip::Trip;
pub use user::{NewUserRequest, User};
pub use vehicle::VehiclePosition;
