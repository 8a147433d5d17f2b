pub mod prelude {
    use std::{cell::RefCell, collections::HashMap};

    pub use crate::prelude::*;
    pub use slugloo_core::{
        entities::*,
        gateways::{geolocation::*, map::*},
        identity::{KeyValueStore, StorageError},
        repositories::{Error as RepoError, *},
        usecases,
        util::filter::FilterCriteria,
    };
    pub use slugloo_entities::builders::*;

    type RepoResult<T> = std::result::Result<T, RepoError>;

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn campus_center() -> MapPoint {
        MapPoint::from_lat_lng_deg(36.9914, -122.0609)
    }

    pub fn campus() -> MapBbox {
        MapBbox::new(
            MapPoint::from_lat_lng_deg(36.9750, -122.0750),
            MapPoint::from_lat_lng_deg(37.0050, -122.0450),
        )
    }

    pub struct FixedGeoLocation(pub Option<MapPoint>);

    impl GeoLocationGateway for FixedGeoLocation {
        fn current_position(&self) -> Result<MapPoint, GeoLocationError> {
            self.0
                .ok_or_else(|| GeoLocationError::Unavailable("test".into()))
        }
    }

    pub struct DeniedGeo;

    impl GeoLocationGateway for DeniedGeo {
        fn current_position(&self) -> Result<MapPoint, GeoLocationError> {
            Err(GeoLocationError::Denied)
        }
    }

    #[derive(Default)]
    pub struct MemoryStore {
        slots: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.slots.borrow().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.slots.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MemoryDb {
        pub bathrooms: RefCell<Vec<Bathroom>>,
        pub reviews: RefCell<Vec<Review>>,
        /// Simulates a uniqueness conflict of the remote store.
        pub reject_writes: RefCell<bool>,
    }

    impl BathroomRepo for MemoryDb {
        fn all_bathrooms(&self) -> RepoResult<Vec<Bathroom>> {
            Ok(self.bathrooms.borrow().clone())
        }

        fn get_bathroom(&self, id: &str) -> RepoResult<Bathroom> {
            self.bathrooms
                .borrow()
                .iter()
                .find(|b| b.id.as_str() == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn create_bathroom(&self, draft: &BathroomDraft) -> RepoResult<Bathroom> {
            if *self.reject_writes.borrow() {
                return Err(RepoError::AlreadyExists);
            }
            let bathroom = draft.clone().into_bathroom(Id::new());
            self.bathrooms.borrow_mut().push(bathroom.clone());
            Ok(bathroom)
        }
    }

    impl ReviewRepo for MemoryDb {
        fn load_reviews_of_bathroom(&self, bathroom_id: &str) -> RepoResult<Vec<Review>> {
            let mut reviews: Vec<_> = self
                .reviews
                .borrow()
                .iter()
                .filter(|r| r.bathroom_id.as_str() == bathroom_id)
                .cloned()
                .collect();
            reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(reviews)
        }

        fn create_review(&self, draft: &ReviewDraft) -> RepoResult<Review> {
            if *self.reject_writes.borrow() {
                return Err(RepoError::AlreadyExists);
            }
            let review = Review {
                id: Id::new(),
                bathroom_id: draft.bathroom_id.clone(),
                ratings: draft.ratings,
                comment: draft.comment.clone(),
                device_hash: draft.device_hash.clone(),
                created_at: Timestamp::now(),
            };
            self.reviews.borrow_mut().push(review.clone());
            Ok(review)
        }
    }
}
