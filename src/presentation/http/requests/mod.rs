use poem_openapi::Object;

/// Fields are optional at the wire level so that a missing field is reported
/// with the same error as an empty one.
#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub bio: Option<String>,
}

/// Absent fields are left unchanged on the stored record.
#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub bio: Option<String>,
}
