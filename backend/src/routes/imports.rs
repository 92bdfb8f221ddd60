pub use crate::{
    authentication::{validate_credentials, AuthError},
    error::{ApiError, ApiResult},
};

pub use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
};
pub use serde::{Deserialize, Serialize};
