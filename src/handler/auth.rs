use std::collections::HashMap;

/// External capability verifying an account/password pair.
///
/// Authentication failure is a boolean outcome, not an error; the handler
/// routes it to the 401-page redirect.
pub trait CredentialChecker {
    fn verify(&self, account: &str, password: &str) -> bool;
}

/// Credential store backed by an in-memory account → password map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, String>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// A store seeded with the built-in `gugu` account.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.insert("gugu", "password");
        store
    }

    pub fn insert(&mut self, account: impl Into<String>, password: impl Into<String>) {
        self.users.insert(account.into(), password.into());
    }
}

impl CredentialChecker for InMemoryUserStore {
    fn verify(&self, account: &str, password: &str) -> bool {
        self.users
            .get(account)
            .is_some_and(|stored| stored == password)
    }
}
