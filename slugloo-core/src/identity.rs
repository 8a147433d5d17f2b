//! Anonymous per-device identity.
//!
//! A random token is stored once in a persistent key-value slot
//! of the device. Only its SHA-256 fingerprint ever leaves the
//! device, e.g. to let the remote store detect duplicate reviews.

use parking_lot::Mutex;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::entities::{DeviceHash, DeviceId};

/// Key of the persistent slot holding the device id.
pub const DEVICE_ID_KEY: &str = "deviceId";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Persistent string slots of the local device.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;
}

impl<S> KeyValueStore for &S
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not supported on this platform: {0}")]
    PlatformUnsupported(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct DeviceIdentity<S> {
    store: Option<S>,
    lock: Mutex<()>,
}

impl<S> DeviceIdentity<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store: Some(store),
            lock: Mutex::new(()),
        }
    }

    /// Without a persistent store no identity is available.
    pub fn without_storage() -> Self {
        Self {
            store: None,
            lock: Mutex::new(()),
        }
    }

    /// Loads the device id or creates and stores a new one.
    ///
    /// Returns `None` if there is no persistent storage.
    pub fn get_or_create_device_id(&self) -> Result<Option<DeviceId>> {
        let Some(store) = &self.store else {
            log::debug!("No persistent storage for a device id available");
            return Ok(None);
        };
        let _guard = self.lock.lock();
        if let Some(existing) = store.get(DEVICE_ID_KEY)?.filter(|id| !id.is_empty()) {
            return Ok(Some(existing.into()));
        }
        let new_id = random_token()?;
        store.set(DEVICE_ID_KEY, &new_id)?;
        log::info!("Created a new device id");
        Ok(Some(new_id.into()))
    }

    /// Fingerprint of the device id.
    pub fn device_hash(&self) -> Result<DeviceHash> {
        let device_id = self.get_or_create_device_id()?.ok_or_else(|| {
            Error::PlatformUnsupported("no persistent storage for a device id".into())
        })?;
        Ok(digest(device_id.as_str()))
    }
}

impl<S> std::fmt::Debug for DeviceIdentity<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("DeviceIdentity")
            .field("has_storage", &self.store.is_some())
            .finish()
    }
}

// UUID v4 from the random number generator of the OS
fn random_token() -> Result<String> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| Error::PlatformUnsupported(format!("no secure random numbers: {err}")))?;
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    Ok(uuid.hyphenated().to_string())
}

/// SHA-256 of the UTF-8 encoded token as lowercase hex string.
pub fn digest(token: &str) -> DeviceHash {
    let hash = hex::encode(Sha256::digest(token.as_bytes()));
    debug_assert_eq!(hash.len(), DeviceHash::LEN);
    DeviceHash::try_from(hash).expect("lowercase hex digest")
}
