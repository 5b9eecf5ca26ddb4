use chrono::{DateTime, Utc};

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub dob: String,
    pub bio: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A validated account waiting to be stored. Identity and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub dob: String,
    pub bio: String,
}

/// Partial update of a user account. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub bio: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Present fields as `(storage name, value)` pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("email", &self.email),
            ("dob", &self.dob),
            ("bio", &self.bio),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
    }

    pub fn apply(&self, user: &mut UserAccount) {
        let targets = [
            (&self.firstname, &mut user.firstname),
            (&self.lastname, &mut user.lastname),
            (&self.email, &mut user.email),
            (&self.dob, &mut user.dob),
            (&self.bio, &mut user.bio),
        ];
        for (change, target) in targets {
            if let Some(value) = change {
                target.clone_from(value);
            }
        }
    }
}
