use axum::Json;

use crate::response::MessageResponse;

/// GET /
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "hello world",
    })
}
