//! User records held by the mock store and the public view persisted in the session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// User as seen by callers and persisted under the session user key (no password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub company_name: String,

    /// Business registration number (CNPJ), `NN.NNN.NNN/NNNN-NN`
    #[serde(rename = "cnpj", default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Stored user including the plaintext mock password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub tax_id: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Copy without the password
    pub fn to_public(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            company_name: self.company_name.clone(),
            tax_id: self.tax_id.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Exact, case-sensitive credential check
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub company_name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> UserRecord {
        UserRecord {
            id: "1".to_string(),
            email: "admin@empresa.com".to_string(),
            password: "123456".to_string(),
            company_name: "Empresa Demo Ltda".to_string(),
            tax_id: Some("12.345.678/0001-90".to_string()),
            role: Role::Admin,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_public_user_wire_shape() {
        let json = serde_json::to_value(record().to_public()).unwrap();
        assert_eq!(json["companyName"], "Empresa Demo Ltda");
        assert_eq!(json["cnpj"], "12.345.678/0001-90");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_missing_tax_id_round_trips() {
        let mut r = record();
        r.tax_id = None;
        let text = serde_json::to_string(&r.to_public()).unwrap();
        assert!(!text.contains("cnpj"));
        let back: User = serde_json::from_str(&text).unwrap();
        assert_eq!(back.tax_id, None);
    }

    #[test]
    fn test_credentials_are_case_sensitive() {
        let r = record();
        assert!(r.matches_credentials("admin@empresa.com", "123456"));
        assert!(!r.matches_credentials("Admin@empresa.com", "123456"));
        assert!(!r.matches_credentials("admin@empresa.com", "1234567"));
    }
}
