use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::Serialize;

#[derive(Object)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Object)]
pub struct CreateUserResponseDto {
    pub success: bool,
    pub message: String,
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<CreateUserResponseDto>),
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserDto {
    #[oai(rename = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub dob: String,
    pub bio: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body of every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}
