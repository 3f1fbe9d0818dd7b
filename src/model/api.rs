use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Identifier of a freshly created resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct IdDto {
    pub id: i32,
}

/// Signed access token to be sent back in the `X-api-token` header.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TokenDto {
    pub token: String,
}
