use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    auth::hasher::CredentialHasher,
    errors::AppError,
    models::account::{Account, Role},
};

/// Lookup and creation of accounts in the user store.
pub trait AccountRepository {
    async fn find_account_by_login(&self, login: &str) -> Result<Option<Account>, AppError>;

    /// Fails with [`AppError::LoginTaken`] if the login already exists.
    async fn create_superuser_account(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Account, AppError>;
}

pub struct SqliteAccountRepository {
    pool: SqlitePool,
    hasher: CredentialHasher,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            hasher: CredentialHasher::default(),
        }
    }
}

impl AccountRepository for SqliteAccountRepository {
    async fn find_account_by_login(&self, login: &str) -> Result<Option<Account>, AppError> {
        tracing::debug!("looking up account {}", login);
        let account = sqlx::query_as("select * from users where email_or_phone = ?1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    async fn create_superuser_account(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Account, AppError> {
        let password_hash = self.hasher.hash(password)?;
        let now = Utc::now().timestamp();
        let result = sqlx::query(
            "insert into users
                (email_or_phone, password_hash, role, is_active, is_staff, created_at)
                values (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(login)
        .bind(password_hash)
        .bind(Role::Superuser)
        .bind(true)
        .bind(true)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::LoginTaken(login.to_string())
            }
            e => {
                tracing::error!("create_superuser_account: {:?}", e);
                AppError::Database(e)
            }
        })?;
        Ok(Account {
            id: result.last_insert_rowid(),
            login: login.to_string(),
            role: Role::Superuser,
            is_active: true,
            is_staff: true,
        })
    }
}
