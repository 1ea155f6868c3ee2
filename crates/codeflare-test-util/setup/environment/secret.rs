use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::EnvironmentError;

use super::keys;

/// Wrapper for string that does not reveal its internal
/// content in its display and debug implementation
#[derive(Default, Clone, PartialEq, Eq, Deserialize)]
pub struct SecretString(String);

impl SecretString {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Serialize for SecretString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Deref for SecretString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Location of the secret holding the InstaScale OCM token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcmSecret {
    pub namespace: String,
    pub name: String,
}

impl OcmSecret {
    pub fn into_parts(self) -> (String, String) {
        (self.namespace, self.name)
    }
}

impl FromStr for OcmSecret {
    type Err = EnvironmentError;

    /// Splits on the first `/`, so the name may itself contain `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((namespace, name)) => Ok(Self {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            None => Err(EnvironmentError::MalformedOcmSecret {
                key: keys::INSTASCALE_OCM_SECRET,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OcmSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
