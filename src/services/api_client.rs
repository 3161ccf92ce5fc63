use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::models::{
    AlertEntity, Favorite, NewFavoriteRequest, NewUserRequest, Route, Stop, Trip, User,
    VehiclePosition,
};

/// Stateless HTTP client for the transit backend. No business logic here,
/// only requests and the shared error contract.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    pub async fn create_user(&self, username: &str) -> Result<User, String> {
        let url = format!("{}/users", self.base_url);
        let request_body = NewUserRequest {
            username: username.to_string(),
        };

        let response = Request::post(&url)
            .json(&request_body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(backend_error(response, "Failed to create user").await);
        }

        response
            .json::<User>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User, String> {
        let encoded = String::from(js_sys::encode_uri_component(username));
        let url = format!("{}/users/username/{}", self.base_url, encoded);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(backend_error(response, "Failed to load user").await);
        }

        response
            .json::<User>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_routes(&self) -> Result<Vec<Route>, String> {
        self.get_json(&format!("{}/routes", self.base_url), "Failed to load routes")
            .await
    }

    pub async fn get_route_stops(&self, route_id: &str) -> Result<Vec<Stop>, String> {
        let url = format!("{}/routes/{}/stops", self.base_url, route_id);
        self.get_json(&url, "Failed to load stops").await
    }

    pub async fn get_route_trips(&self, route_id: &str) -> Result<Vec<Trip>, String> {
        let url = format!("{}/routes/{}/trips", self.base_url, route_id);
        self.get_json(&url, "Failed to load trips").await
    }

    /// Single-stop lookup used to put a name on live vehicle positions.
    pub async fn get_stop(&self, stop_id: &str) -> Result<Stop, String> {
        let url = format!("{}/stops/{}", self.base_url, stop_id);
        self.get_json(&url, "Failed to load stop").await
    }

    pub async fn get_live_vehicles(&self, route_id: &str) -> Result<Vec<VehiclePosition>, String> {
        let url = format!("{}/live/{}", self.base_url, route_id);
        self.get_json(&url, "Failed to load live vehicles").await
    }

    /// The full alert feed; route scoping happens client-side.
    pub async fn get_alerts(&self) -> Result<Vec<AlertEntity>, String> {
        self.get_json(&format!("{}/alerts", self.base_url), "Failed to load alerts")
            .await
    }

    pub async fn get_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, String> {
        let url = format!("{}/users/{}/favorites", self.base_url, user_id);
        self.get_json(&url, "Failed to load favorites").await
    }

    pub async fn add_favorite(
        &self,
        user_id: i64,
        item_id: &str,
        kind: &str,
    ) -> Result<(), String> {
        let url = format!("{}/users/{}/favorites", self.base_url, user_id);
        let request_body = NewFavoriteRequest {
            item_id: item_id.to_string(),
            kind: kind.to_string(),
        };

        let response = Request::post(&url)
            .json(&request_body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(backend_error(response, "Failed to add favorite").await);
        }

        Ok(())
    }

    pub async fn delete_favorite(
        &self,
        user_id: i64,
        item_id: &str,
        kind: &str,
    ) -> Result<(), String> {
        let url = format!(
            "{}/users/{}/favorites/{}/{}",
            self.base_url, user_id, kind, item_id
        );

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(backend_error(response, "Failed to delete favorite").await);
        }

        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        operation: &str,
    ) -> Result<T, String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(backend_error(response, operation).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Error contract: a non-2xx body may carry `{"error": "..."}`; anything
/// else falls back to a generic `HTTP <status>: <operation>` message.
async fn backend_error(response: Response, operation: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body, operation)
}

fn error_message(status: u16, body: &str, operation: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("HTTP {}: {}", status, operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_field_wins() {
        let message = error_message(404, r#"{"error":"user not found"}"#, "Failed to load user");
        assert_eq!(message, "user not found");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_message() {
        let message = error_message(500, "<html>oops</html>", "Failed to load routes");
        assert_eq!(message, "HTTP 500: Failed to load routes");
    }

    #[test]
    fn empty_error_field_falls_back_too() {
        let message = error_message(502, r#"{"error":""}"#, "Failed to load alerts");
        assert_eq!(message, "HTTP 502: Failed to load alerts");
    }
}
