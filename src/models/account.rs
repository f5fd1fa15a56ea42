use std::fmt::Display;

use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Standard,
    Superuser,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Standard => write!(f, "standard"),
            Role::Superuser => write!(f, "superuser"),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    #[sqlx(rename = "email_or_phone")]
    pub login: String,
    pub role: Role,
    pub is_active: bool,
    pub is_staff: bool,
}

impl Account {
    pub fn is_superuser(&self) -> bool {
        self.role == Role::Superuser
    }
}
