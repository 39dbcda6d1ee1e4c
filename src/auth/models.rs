//! Authentication data models.

use crate::itinerary::Author;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User ID type
pub type UserId = Uuid;

/// The signed-in user. This is the record persisted to durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Author {
            id: user.id.to_string(),
            name: user.name.clone(),
            avatar: user.avatar.clone().unwrap_or_default(),
        }
    }
}
