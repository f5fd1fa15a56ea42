use sqlx::sqlite::SqlitePoolOptions;

use crate::{
    config::{LOGIN_VAR, PASSWORD_VAR, ProvisionConfig},
    errors::AppError,
    models::account::Account,
    repositories::account_repo::{AccountRepository, SqliteAccountRepository},
    status::StatusLine,
};

#[derive(Debug)]
pub enum Outcome {
    SkippedMissingConfig,
    Created(Account),
    AlreadyExists(Account),
}

impl Outcome {
    pub fn status(&self) -> StatusLine {
        match self {
            Outcome::SkippedMissingConfig => {
                StatusLine::error(format!("{LOGIN_VAR} or {PASSWORD_VAR} is not set"))
            }
            Outcome::Created(account) => StatusLine::success(format!(
                "Superuser created successfully with login: {}",
                account.login
            )),
            Outcome::AlreadyExists(account) => StatusLine::warning(format!(
                "Superuser with login {} already exists",
                account.login
            )),
        }
    }
}

/// Creates the configured superuser unless an account with that login exists.
///
/// The lookup and the insert are separate statements. Two concurrent runs can
/// both miss the lookup, in which case the store's unique constraint makes the
/// second insert fail with [`AppError::LoginTaken`].
pub async fn run<R: AccountRepository>(
    config: &ProvisionConfig,
    repo: &R,
) -> Result<Outcome, AppError> {
    let Some((login, password)) = config.credentials() else {
        tracing::error!("superuser credentials missing, skipping");
        return Ok(Outcome::SkippedMissingConfig);
    };
    match repo.find_account_by_login(login).await? {
        None => {
            let account = repo.create_superuser_account(login, password).await?;
            tracing::info!("Created superuser {} (id {})", account.login, account.id);
            Ok(Outcome::Created(account))
        }
        Some(account) => {
            if !account.is_superuser() || !account.is_staff || !account.is_active {
                tracing::warn!(
                    "existing account {} (role {}, staff {}, active {}) left unchanged",
                    account.login,
                    account.role,
                    account.is_staff,
                    account.is_active
                );
            }
            Ok(Outcome::AlreadyExists(account))
        }
    }
}

/// Entry point of the `create-superuser` command. Missing credentials are
/// reported before the database is opened, so no URL is needed in that case.
pub async fn provision(
    database_url: Option<&str>,
    config: &ProvisionConfig,
) -> Result<Outcome, AppError> {
    if config.credentials().is_none() {
        tracing::error!("superuser credentials missing, skipping");
        return Ok(Outcome::SkippedMissingConfig);
    }
    let database_url = database_url.ok_or(AppError::MissingDatabaseUrl)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;
    let repo = SqliteAccountRepository::new(pool.clone());
    let outcome = run(config, &repo).await;
    pool.close().await;
    outcome
}
