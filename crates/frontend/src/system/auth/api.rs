use contracts::system::auth::CurrentUser;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the signed-in user with its permission names
pub async fn get_current_user() -> Result<CurrentUser, String> {
    let response = Request::get(&api_url("/api/me"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to get user info: {}", response.status()));
    }

    response
        .json::<CurrentUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
