use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    domain::models::UserChanges,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::ApiError,
        mappers::map_user,
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{CreateUserResponse, CreateUserResponseDto, MessageDto, UserDto},
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> PoemResult<CreateUserResponse> {
        self.state
            .create_user_usecase
            .execute(request.0.into())
            .await
            .map_err(ApiError::from)?;

        Ok(CreateUserResponse::Created(Json(CreateUserResponseDto {
            success: true,
            message: "New user account created".to_string(),
        })))
    }

    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> PoemResult<Json<Vec<UserDto>>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(ApiError::from)?;

        Ok(Json(users.iter().map(map_user).collect()))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> PoemResult<Json<UserDto>> {
        let user = self
            .state
            .get_user_usecase
            .execute(&id.0)
            .await
            .map_err(ApiError::from)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "patch", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<String>,
        request: Option<Json<UpdateUserRequestDto>>,
    ) -> PoemResult<Json<UserDto>> {
        // A bodiless PATCH changes nothing.
        let changes = request
            .map(|body| UserChanges::from(body.0))
            .unwrap_or_default();
        let user = self
            .state
            .update_user_usecase
            .execute(&id.0, changes)
            .await
            .map_err(ApiError::from)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> PoemResult<Json<MessageDto>> {
        self.state
            .delete_user_usecase
            .execute(&id.0)
            .await
            .map_err(ApiError::from)?;

        Ok(Json(MessageDto::new("user deleted")))
    }

    #[oai(path = "/users", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_all_users(&self) -> PoemResult<Json<MessageDto>> {
        self.state
            .delete_all_users_usecase
            .execute()
            .await
            .map_err(ApiError::from)?;

        Ok(Json(MessageDto::new("all users deleted")))
    }
}
