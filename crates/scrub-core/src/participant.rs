//! Course participant roster entries

use serde::{Deserialize, Serialize};

/// A person enrolled in or teaching the course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl Participant {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Ta,
    Instructor,
    Professor,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        let p: Participant = serde_json::from_str(r#"{"name": "Michael Lee", "role": "ta"}"#).unwrap();
        assert_eq!(p.role, Role::Ta);

        let p: Participant =
            serde_json::from_str(r#"{"name": "Grace Kim", "role": "observer"}"#).unwrap();
        assert_eq!(p.role, Role::Unknown);
    }

    #[test]
    fn test_missing_fields_default() {
        let p: Participant = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
        assert_eq!(p.name, "");
        assert_eq!(p.role, Role::Unknown);
    }
}
