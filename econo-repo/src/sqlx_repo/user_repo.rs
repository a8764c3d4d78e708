use crate::sqlx_repo::SQLxRepo;
use crate::user_repo::UserRepoError::{DuplicateEmail, UserNotFound};
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError, UserUpdate};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use tracing::instrument;

// Column aliases map the Portuguese schema onto the struct fields.
const SELECT_USER: &str = "SELECT id, nome AS name, email, senha_hash AS password_hash FROM usuarios";

impl SQLxRepo {
    async fn get_user_row(&self, user_id: i32) -> Result<Option<User>, UserRepoError> {
        let user = sqlx::query_as::<_, User>(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get user {}", user_id))?;
        Ok(user)
    }
}

#[async_trait]
impl UserRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i32) -> Result<User, UserRepoError> {
        self.get_user_row(user_id)
            .await?
            .ok_or(UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        let users = sqlx::query_as::<_, User>(&format!("{} ORDER BY id", SELECT_USER))
            .fetch_all(&self.pool)
            .await
            .context("Unable to get users")?;
        Ok(users)
    }

    #[instrument(skip(self, new_user))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO usuarios(nome, email, senha_hash) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DuplicateEmail(db_err.message().to_owned())
            }
            _ => UserRepoError::Other(
                anyhow::Error::new(e)
                    .context(format!("Unable to insert user {}", new_user.email)),
            ),
        })?;

        self.get_user_row(id)
            .await?
            .ok_or_else(|| UserRepoError::Other(anyhow!("User {} missing after insert", id)))
    }

    #[instrument(skip(self, update))]
    async fn update_user(&self, user_id: i32, update: UserUpdate) -> Result<User, UserRepoError> {
        // Existence probe first, as in the original contract; the update
        // itself is a second statement.
        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM usuarios WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to check for user {}", user_id))?;
        if exists.is_none() {
            return Err(UserNotFound(user_id));
        }

        let mut query_builder = QueryBuilder::new("UPDATE usuarios SET ");
        let mut fields = query_builder.separated(", ");
        if let Some(name) = update.name {
            fields.push("nome = ").push_bind_unseparated(name);
        }
        if let Some(email) = update.email {
            fields.push("email = ").push_bind_unseparated(email);
        }
        if let Some(password_hash) = update.password_hash {
            fields
                .push("senha_hash = ")
                .push_bind_unseparated(password_hash);
        }
        query_builder.push(" WHERE id = ").push_bind(user_id);
        query_builder
            .build()
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update user {}", user_id))?;

        self.get_user_row(user_id)
            .await?
            .ok_or(UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: i32) -> Result<(), UserRepoError> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete user {}", user_id))?;
        if result.rows_affected() == 0 {
            Err(UserNotFound(user_id))
        } else {
            Ok(())
        }
    }
}
