use crate::routes::imports::*;
use interfacing::Credentials;

#[tracing::instrument(skip(maybe_json), fields(email = tracing::field::Empty))]
#[axum_macros::debug_handler]
pub async fn login(
    maybe_json: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(credentials) = maybe_json?;
    tracing::Span::current().record("email", &tracing::field::display(&credentials.email));

    validate_credentials(&credentials).map_err(|e| match e {
        AuthError::InvalidCredentials(_) => ApiError::AuthError(e.into()),
    })?;

    Ok(Json(LoginResponse {
        mensagem: "Login efetuado com sucesso!".into(),
    }))
}

#[derive(Serialize, Clone)]
pub struct LoginResponse {
    pub mensagem: String,
}
