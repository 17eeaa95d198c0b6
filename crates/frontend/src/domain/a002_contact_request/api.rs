use crate::shared::api_utils::api_url;
use contracts::domain::a002_contact_request::aggregate::{ContactRequest, ContactRequestAccepted};
use gloo_net::http::Request;

const API_PATH: &str = "/api/contact-requests";

/// Отправить заявку с формы обратной связи
pub async fn submit_contact_request(
    request: &ContactRequest,
) -> Result<ContactRequestAccepted, String> {
    let response = Request::post(&api_url(API_PATH))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        // backend отдаёт {"error": "..."} для невалидных заявок
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("HTTP error: {}", response.status()));
        return Err(message);
    }

    let data: ContactRequestAccepted = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
