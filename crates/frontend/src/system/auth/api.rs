use contracts::system::auth::{LoginRequest, LoginResponse, UserIdentity};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with email and password.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Get the current user's identity projection.
pub async fn get_current_user(access_token: &str) -> Result<UserIdentity, String> {
    let response = Request::get(&format!("{}/api/users/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserIdentity>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
