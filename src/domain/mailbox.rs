//! Mailbox value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A sender or recipient: a bare address or `Display Name <address>`.
///
/// The address part is validated at construction time. The validation is
/// basic and checks for a single '@' and a dotted domain part.
///
/// # Example
///
/// ```
/// use contact_relay::domain::Mailbox;
///
/// let mailbox: Mailbox = "Lemonseed Studio <connect@lemonseed.studio>".parse().unwrap();
/// assert_eq!(mailbox.name(), Some("Lemonseed Studio"));
/// assert_eq!(mailbox.address(), "connect@lemonseed.studio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mailbox {
    name: Option<String>,
    address: String,
}

impl Mailbox {
    /// Create a mailbox from an optional display name and an address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address format is invalid,
    /// or `ValidationError::InvalidMailbox` if the name contains angle brackets.
    pub fn new(name: Option<&str>, address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();

        if !Self::is_valid_address(&address) {
            return Err(ValidationError::InvalidEmail(address));
        }

        let name = name.map(str::trim).filter(|n| !n.is_empty());
        if let Some(n) = name {
            if n.contains('<') || n.contains('>') {
                return Err(ValidationError::InvalidMailbox(n.to_string()));
            }
        }

        Ok(Self {
            name: name.map(str::to_string),
            address,
        })
    }

    /// Validate address format.
    fn is_valid_address(address: &str) -> bool {
        let parts: Vec<&str> = address.split('@').collect();

        if parts.len() != 2 {
            return false;
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() || local.chars().any(char::is_whitespace) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        domain.split('.').all(|part| !part.is_empty())
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Bare address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl FromStr for Mailbox {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match (s.find('<'), s.ends_with('>')) {
            (Some(open), true) => {
                let address = s[open + 1..s.len() - 1].trim();
                Mailbox::new(Some(&s[..open]), address)
            }
            (None, false) => Mailbox::new(None, s),
            _ => Err(ValidationError::InvalidMailbox(s.to_string())),
        }
    }
}

// Serde support - serialize as string
impl Serialize for Mailbox {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Mailbox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}
