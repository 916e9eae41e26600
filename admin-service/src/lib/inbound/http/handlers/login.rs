use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::admin::models::EmailAddress;
use crate::admin::models::IssuedToken;
use crate::admin::models::LoginCommand;
use crate::admin::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    // A malformed email gets the same 401 as an unknown one.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    let token = state
        .auth_service
        .authenticate(LoginCommand::new(email, body.password))
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&token).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
    pub admin_id: String,
    pub organization_id: String,
}

impl From<&IssuedToken> for TokenResponseData {
    fn from(token: &IssuedToken) -> Self {
        Self {
            access_token: token.access_token.clone(),
            token_type: token.token_type.clone(),
            admin_id: token.admin_id.to_string(),
            organization_id: token.organization_id.to_string(),
        }
    }
}
