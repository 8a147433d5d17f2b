use std::cell::RefCell;

use super::prelude::*;
use crate::repositories::Error as RepoError;


type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory stand-in for the remote table store.
#[derive(Default)]
pub struct MockDb {
    pub bathrooms: RefCell<Vec<Bathroom>>,
    pub reviews: RefCell<Vec<Review>>,
}

impl BathroomRepo for MockDb {
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
        let bathroom = draft.clone().into_bathroom(Id::new());
        self.bathrooms.borrow_mut().push(bathroom.clone());
        Ok(bathroom)
    }
}

impl ReviewRepo for MockDb {
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
        let ReviewDraft {
            bathroom_id,
            ratings,
            comment,
            device_hash,
        } = draft.clone();
        let review = Review {
            id: Id::new(),
            bathroom_id,
            ratings,
            comment,
            device_hash,
            created_at: Timestamp::now(),
        };
        self.reviews.borrow_mut().push(review.clone());
        Ok(review)
    }
}
