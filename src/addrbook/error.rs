use std::fmt;
use thiserror::Error;

/// Which validated field rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Birthday => "date",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum AddrError {
    #[error("Invalid {field} format. {reason}")]
    InvalidFormat {
        field: FieldKind,
        reason: &'static str,
    },

    #[error("{what} not found: {key}")]
    NotFound { what: &'static str, key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl AddrError {
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        AddrError::NotFound {
            what: "Contact",
            key: name.into(),
        }
    }

    pub fn phone_not_found(phone: impl Into<String>) -> Self {
        AddrError::NotFound {
            what: "Phone",
            key: phone.into(),
        }
    }

    /// A contact that was expected to have at least one phone has none.
    pub fn no_phones(name: impl Into<String>) -> Self {
        AddrError::NotFound {
            what: "Phone number for contact",
            key: name.into(),
        }
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, AddrError::InvalidFormat { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AddrError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, AddrError>;
