use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        let email: String = row.try_get("email").map_err(database_error)?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            email: EmailAddress::new(email)?,
            name: row.try_get("name").map_err(database_error)?,
            telephone: row.try_get("telephone").map_err(database_error)?,
            role: row.try_get("role").map_err(database_error)?,
            password_hash: row.try_get("hashed_password").map_err(database_error)?,
            is_admin: row.try_get("is_admin").map_err(database_error)?,
            is_active: row.try_get("is_active").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, name, telephone, role, hashed_password, is_admin, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, name, telephone, role, hashed_password, is_admin, is_active
            "#,
        )
        .bind(user.email.as_str())
        .bind(&user.name)
        .bind(&user.telephone)
        .bind(&user.role)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(user.email.to_string());
                }
            }
            database_error(e)
        })?;

        Self::row_to_user(row)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, telephone, role, hashed_password, is_admin, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, telephone, role, hashed_password, is_admin, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_user).transpose()
    }
}
