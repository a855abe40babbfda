use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{EngineError, EngineResult};
use crate::domain::common::UserId;

pub const MAX_NAME_LEN: usize = 50;

/// Ledger owner. Credentials live with the identity provider, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: &str, email: &str) -> EngineResult<Self> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(EngineError::InvalidInput(format!(
                "name must be between 1 and {MAX_NAME_LEN} characters"
            )));
        }
        let email = email.trim().to_lowercase();
        if !looks_like_email(&email) {
            return Err(EngineError::InvalidInput(format!(
                "`{email}` is not a valid email"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
        })
    }
}

fn looks_like_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    match candidate.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email() {
        let user = User::new(" Ada ", "Ada@Example.COM").unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            assert!(User::new("Ada", email).is_err(), "{email} should be rejected");
        }
    }
}
