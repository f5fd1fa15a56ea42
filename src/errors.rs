use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("An account with login `{0}` already exists")]
    LoginTaken(String),
    #[error("DATABASE_URL is not set and --database-url was not given")]
    MissingDatabaseUrl,
    #[error("Failed to hash the superuser password")]
    PasswordHash,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::LoginTaken(_) => String::from("LoginTaken"),
            AppError::MissingDatabaseUrl => String::from("MissingDatabaseUrl"),
            AppError::PasswordHash => String::from("PasswordHash"),
            AppError::Database(_) => String::from("DatabaseError"),
        }
    }
}
