use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::error::{PlanError, Result};
use crate::models::User;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Authentication collaborator. Hands a signed-in user to the rest of the app.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_out(&self) -> Result<()>;

    /// The signed-in user, or `NotSignedIn`.
    async fn current_user(&self) -> Result<User>;
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_digest: String,
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<String, Account>,
    session: Option<User>,
}

/// Process-local accounts keyed by lowercase email.
#[derive(Debug, Default)]
pub struct LocalIdentity {
    state: Mutex<IdentityState>,
}

impl LocalIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already signed-in user.
    pub fn with_session(user: User) -> Self {
        Self {
            state: Mutex::new(IdentityState {
                accounts: HashMap::new(),
                session: Some(user),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, IdentityState>> {
        self.state
            .lock()
            .map_err(|_| PlanError::Auth("identity state lock poisoned".to_string()))
    }
}

fn digest(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn validate_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(PlanError::Auth(format!("'{}' is not a valid email address", email))),
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let email = validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PlanError::Auth(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let mut state = self.lock()?;
        if state.accounts.contains_key(&email) {
            return Err(PlanError::Auth(format!("An account for {} already exists", email)));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.clone(),
        };
        state.accounts.insert(
            email.clone(),
            Account {
                user: user.clone(),
                password_digest: digest(&email, password),
            },
        );
        state.session = Some(user.clone());
        info!(user_id = %user.id, "account created");
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let email = validate_email(email)?;
        let mut state = self.lock()?;
        let user = match state.accounts.get(&email) {
            Some(account) if account.password_digest == digest(&email, password) => {
                account.user.clone()
            }
            _ => return Err(PlanError::Auth("Invalid email or password".to_string())),
        };
        state.session = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        self.lock()?.session = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        self.lock()?.session.clone().ok_or(PlanError::NotSignedIn)
    }
}
