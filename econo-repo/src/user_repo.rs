use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn get_user(&self, user_id: i32) -> Result<User, UserRepoError>;

    /// All users, ordered by id ascending.
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError>;

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;

    /// Applies the supplied fields only. `update` must contain at least one
    /// field; callers reject empty updates before reaching the repo.
    async fn update_user(&self, user_id: i32, update: UserUpdate) -> Result<User, UserRepoError>;

    async fn delete_user(&self, user_id: i32) -> Result<(), UserRepoError>;
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Row of the `usuarios` table. The wire format keeps the table's column
/// names, so the serialized field names stay in Portuguese.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha_hash")]
    pub password_hash: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha_hash")]
    pub password_hash: String,
}

impl NewUser {
    pub const fn new(name: String, email: String, password_hash: String) -> NewUser {
        NewUser {
            name,
            email,
            password_hash,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct UserUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "senha_hash")]
    pub password_hash: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password_hash.is_none()
    }
}
