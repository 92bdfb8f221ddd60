use crate::routes::imports::*;

#[axum_macros::debug_handler]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
