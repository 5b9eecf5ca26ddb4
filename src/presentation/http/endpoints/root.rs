use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::{
    application::usecases::{
        create_user::CreateUserUseCase, delete_all_users::DeleteAllUsersUseCase,
        delete_user::DeleteUserUseCase, get_user::GetUserUseCase, list_users::ListUsersUseCase,
        update_user::UpdateUserUseCase,
    },
    domain::repositories::UserRepository,
    presentation::http::responses::MessageDto,
};

#[derive(Clone)]
pub struct ApiState {
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
    pub delete_all_users_usecase: Arc<DeleteAllUsersUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            create_user_usecase: Arc::new(CreateUserUseCase::new(repo.clone())),
            list_users_usecase: Arc::new(ListUsersUseCase::new(repo.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(repo.clone())),
            update_user_usecase: Arc::new(UpdateUserUseCase::new(repo.clone())),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(repo.clone())),
            delete_all_users_usecase: Arc::new(DeleteAllUsersUseCase::new(repo)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Root,
    Health,
    Users,
}

pub struct Endpoints;

#[OpenApi]
impl Endpoints {
    #[oai(path = "/", method = "get", tag = EndpointsTags::Root)]
    pub async fn root(&self) -> Json<MessageDto> {
        Json(MessageDto::new("RESTAPI root"))
    }
}
