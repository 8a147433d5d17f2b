use crate::{device::*, id::*, rating::*, time::*};

// A review that has not been stored yet.
// Id and creation time are assigned by the remote table store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub bathroom_id: Id,
    pub ratings: Ratings,
    pub comment: Option<String>,
    pub device_hash: DeviceHash,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id          : Id,
    pub bathroom_id : Id,
    pub ratings     : Ratings,
    pub comment     : Option<String>,
    pub device_hash : DeviceHash,
    pub created_at  : Timestamp,
}

impl Review {
    pub fn is_from_device(&self, device_hash: &DeviceHash) -> bool {
        &self.device_hash == device_hash
    }
}
