use crate::{
    application::usecases::create_user::CreateUserRequest,
    domain::models::{UserAccount, UserChanges},
    presentation::http::{
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::UserDto,
    },
};

pub fn map_user(user: &UserAccount) -> UserDto {
    UserDto {
        id: user.id.to_string(),
        firstname: user.firstname.clone(),
        lastname: user.lastname.clone(),
        email: user.email.clone(),
        dob: user.dob.clone(),
        bio: user.bio.clone(),
        created_at: user.created_at.map(|t| t.to_rfc3339()),
        updated_at: user.updated_at.map(|t| t.to_rfc3339()),
    }
}

impl From<CreateUserRequestDto> for CreateUserRequest {
    fn from(value: CreateUserRequestDto) -> Self {
        Self {
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            dob: value.dob,
            bio: value.bio,
        }
    }
}

impl From<UpdateUserRequestDto> for UserChanges {
    fn from(value: UpdateUserRequestDto) -> Self {
        Self {
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            dob: value.dob,
            bio: value.bio,
        }
    }
}
