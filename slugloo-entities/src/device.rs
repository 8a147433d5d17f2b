use std::fmt;

use thiserror::Error;

/// Random per-device token.
///
/// Persisted locally and never sent to the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DeviceId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<DeviceId> for String {
    fn from(from: DeviceId) -> Self {
        from.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-way fingerprint of a [`DeviceId`]: 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceHash(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid device hash: {0}")]
pub struct InvalidDeviceHash(String);

impl DeviceHash {
    pub const LEN: usize = 64;

    pub fn is_valid_str(s: &str) -> bool {
        s.len() == Self::LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeviceHash {
    type Error = InvalidDeviceHash;
    fn try_from(from: String) -> Result<Self, Self::Error> {
        if Self::is_valid_str(&from) {
            Ok(Self(from))
        } else {
            Err(InvalidDeviceHash(from))
        }
    }
}

impl From<DeviceHash> for String {
    fn from(from: DeviceHash) -> Self {
        from.0
    }
}

impl fmt::Display for DeviceHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
