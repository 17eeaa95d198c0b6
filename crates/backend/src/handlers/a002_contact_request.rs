use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use contracts::domain::a002_contact_request::aggregate::{
    ContactRequest, ContactRequestAccepted,
};
use serde_json::json;

/// POST /api/contact-requests
///
/// Заявка проверяется теми же правилами, что и на клиенте, и только пишется в лог.
/// Тело, которое не разбирается в `ContactRequest`, тоже получает ответ `{"error": ...}`.
pub async fn submit(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactRequestAccepted>), (StatusCode, Json<serde_json::Value>)> {
    let dto = match payload {
        Ok(Json(dto)) => dto.trimmed(),
        Err(rejection) => {
            tracing::warn!("Contact request body rejected: {}", rejection.body_text());
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "Некорректные данные заявки" })),
            ));
        }
    };

    if let Err(e) = dto.validate() {
        tracing::warn!("Contact request rejected: {}", e);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        ));
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        request_id = %request_id,
        name = %dto.name,
        email = %dto.email,
        phone = %dto.phone,
        message_len = dto.message.chars().count(),
        "Contact request accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactRequestAccepted {
            status: "accepted".to_string(),
            request_id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> ContactRequest {
        ContactRequest {
            name: "Анна".to_string(),
            email: email.to_string(),
            phone: String::new(),
            message: "Интересует Core Switch 5000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_accepts_valid_request() {
        let (status, Json(body)) = submit(Ok(Json(request("anna@example.ru"))))
            .await
            .expect("accepted");
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body.status, "accepted");
        assert!(uuid::Uuid::parse_str(&body.request_id).is_ok());
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_email() {
        let (status, Json(body)) = submit(Ok(Json(request("anna-at-example"))))
            .await
            .expect_err("rejected");
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Некорректный email");
    }

    #[tokio::test]
    async fn test_submit_trims_before_validation() {
        let mut req = request("  anna@example.ru  ");
        req.name = "  Анна  ".to_string();
        assert!(submit(Ok(Json(req))).await.is_ok());
    }
}
