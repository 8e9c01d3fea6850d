use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The role an account was created with. Never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Admin,
    Therapist,
    Patient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn is_active(self) -> bool {
        self == AccountStatus::Active
    }

    pub fn toggled(self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Inactive,
            AccountStatus::Inactive => AccountStatus::Active,
        }
    }
}

/// Login credential placeholder.
///
/// Never serialized and redacted from `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// A login-capable identity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    pub id: Uuid,
    /// Stored trimmed and lower-cased.
    pub email: String,
    #[serde(skip)]
    pub password: Password,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub status: AccountStatus,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub last_login_at: Option<jiff::Timestamp>,
}

impl Account {
    pub fn new(
        role: Role,
        name: impl Into<String>,
        email: impl Into<String>,
        password: Password,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password,
            name: name.into(),
            role,
            status: AccountStatus::Active,
            created_at: jiff::Timestamp::now(),
            last_login_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Input for the admin/therapist account creation forms.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The authenticated principal. Sessions carry this and nothing else;
/// record data is always read back from the store by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "role", content = "id", rename_all = "snake_case")]
#[ts(export)]
pub enum Actor {
    Admin(Uuid),
    Therapist(Uuid),
    Patient(Uuid),
}

impl Actor {
    pub fn id(&self) -> Uuid {
        match *self {
            Actor::Admin(id) | Actor::Therapist(id) | Actor::Patient(id) => id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Actor::Admin(_) => Role::Admin,
            Actor::Therapist(_) => Role::Therapist,
            Actor::Patient(_) => Role::Patient,
        }
    }

    pub fn for_account(account: &Account) -> Self {
        match account.role {
            Role::Admin => Actor::Admin(account.id),
            Role::Therapist => Actor::Therapist(account.id),
            Role::Patient => Actor::Patient(account.id),
        }
    }
}
