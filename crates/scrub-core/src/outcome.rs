//! Best-effort results
//!
//! Steps that recover from a failure still produce a value; `Outcome`
//! records that the value is a fallback so callers can count degradations.

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Clean(T),
    Recovered { value: T, diagnostic: String },
}

impl<T> Outcome<T> {
    pub fn recovered(value: T, diagnostic: impl Into<String>) -> Self {
        Outcome::Recovered {
            value,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Clean(value) | Outcome::Recovered { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Clean(value) | Outcome::Recovered { value, .. } => value,
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, Outcome::Recovered { .. })
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Outcome::Clean(_) => None,
            Outcome::Recovered { diagnostic, .. } => Some(diagnostic),
        }
    }
}
