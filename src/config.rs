use std::env;

pub const LOGIN_VAR: &str = "ADMIN_LOGIN";
pub const PASSWORD_VAR: &str = "ADMIN_PASSWORD";

// Names used by older deployments, read when the primary name is unset or empty.
const LEGACY_LOGIN_VAR: &str = "SUPERUSER_ADMIN";
const LEGACY_PASSWORD_VAR: &str = "SUPERUSER_PASSWORD";

/// Credentials for the superuser account, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl ProvisionConfig {
    #[cfg(test)]
    pub fn new(login: Option<String>, password: Option<String>) -> Self {
        Self { login, password }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |primary: &str, legacy: &str| {
            lookup(primary)
                .filter(|value| !value.is_empty())
                .or_else(|| lookup(legacy))
        };
        Self {
            login: resolve(LOGIN_VAR, LEGACY_LOGIN_VAR),
            password: resolve(PASSWORD_VAR, LEGACY_PASSWORD_VAR),
        }
    }

    /// Both values exactly as configured, or `None` if either is unset or empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let login = self.login.as_deref().filter(|v| !v.is_empty())?;
        let password = self.password.as_deref().filter(|v| !v.is_empty())?;
        Some((login, password))
    }
}
