use std::{io, path::Path};

use jfs::Store;
use slugloo_core::identity::{KeyValueStore, StorageError};

/// Persistent key-value slots backed by one JSON file per key.
#[derive(Clone)]
pub struct JsonFileStore {
    json_store: Store,
}

impl JsonFileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.json_store.get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.json_store.save_with_id(&value.to_owned(), key)?;
        log::debug!("Saved {key} in {}", self.path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slugloo_core::identity::{DeviceIdentity, DEVICE_ID_KEY};
    use std::{env, fs, path::PathBuf};

    fn temp_dir() -> PathBuf {
        let dir = env::temp_dir().join(format!("slugloo-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_key() {
        let dir = temp_dir();
        let store = JsonFileStore::try_new(&dir).unwrap();
        assert_eq!(store.get(DEVICE_ID_KEY).unwrap(), None);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn device_id_survives_restarts() {
        let dir = temp_dir();
        let first = DeviceIdentity::new(JsonFileStore::try_new(&dir).unwrap())
            .get_or_create_device_id()
            .unwrap();
        let second = DeviceIdentity::new(JsonFileStore::try_new(&dir).unwrap())
            .get_or_create_device_id()
            .unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
        fs::remove_dir_all(dir).unwrap();
    }
}
