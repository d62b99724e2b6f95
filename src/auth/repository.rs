//! User repository port and the seeded in-memory mock

use chrono::{TimeZone, Utc};
use std::sync::{Arc, PoisonError, RwLock};

use super::user::{Role, UserRecord};
use crate::error::{Error, Result};

/// Lookup and insertion of user records
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive email lookup
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    fn exists_by_tax_id(&self, tax_id: &str) -> Result<bool>;

    /// Add a record; duplicate emails are a storage error
    fn insert(&self, record: UserRecord) -> Result<()>;

    /// Identifier for the next inserted record
    fn next_id(&self) -> Result<String>;
}

impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        (**self).find_by_email(email)
    }

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        (**self).exists_by_email(email)
    }

    fn exists_by_tax_id(&self, tax_id: &str) -> Result<bool> {
        (**self).exists_by_tax_id(tax_id)
    }

    fn insert(&self, record: UserRecord) -> Result<()> {
        (**self).insert(record)
    }

    fn next_id(&self) -> Result<String> {
        (**self).next_id()
    }
}

/// Users held in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store holding the demo administrator (`admin@empresa.com` / `123456`)
    pub fn seeded() -> Self {
        Self::with_users(vec![demo_admin()])
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all records
    pub fn all(&self) -> Vec<UserRecord> {
        self.users.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

pub fn demo_admin() -> UserRecord {
    UserRecord {
        id: "1".to_string(),
        email: "admin@empresa.com".to_string(),
        password: "123456".to_string(),
        company_name: "Empresa Demo Ltda".to_string(),
        tax_id: Some("12.345.678/0001-90".to_string()),
        role: Role::Admin,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    fn exists_by_tax_id(&self, tax_id: &str) -> Result<bool> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().any(|u| u.tax_id.as_deref() == Some(tax_id)))
    }

    fn insert(&self, record: UserRecord) -> Result<()> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.iter().any(|u| u.email == record.email) {
            return Err(Error::Storage(format!("email {} already stored", record.email)));
        }
        users.push(record);
        Ok(())
    }

    fn next_id(&self) -> Result<String> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        let max = users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Ok((max + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_lookup() {
        let repo = InMemoryUserRepository::seeded();
        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_email("admin@empresa.com").unwrap().is_some());
        assert!(repo.find_by_email("ADMIN@empresa.com").unwrap().is_none());
        assert!(repo.exists_by_tax_id("12.345.678/0001-90").unwrap());
        assert!(!repo.exists_by_tax_id("00.000.000/0001-00").unwrap());
    }

    #[test]
    fn test_insert_and_next_id() {
        let repo = InMemoryUserRepository::seeded();
        assert_eq!(repo.next_id().unwrap(), "2");

        let mut record = demo_admin();
        record.id = repo.next_id().unwrap();
        record.email = "second@empresa.com".to_string();
        record.tax_id = None;
        repo.insert(record).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.next_id().unwrap(), "3");
        assert!(repo.exists_by_email("second@empresa.com").unwrap());
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::seeded();
        let result = repo.insert(demo_admin());
        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_empty_repository_starts_at_one() {
        let repo = InMemoryUserRepository::empty();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id().unwrap(), "1");
    }
}
