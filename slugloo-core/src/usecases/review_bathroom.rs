use std::time::Duration;

use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

/// Input of the review form.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewReview {
    pub bathroom_id   : Id,
    pub cleanliness   : i8,
    pub accessibility : i8,
    pub privacy       : i8,
    pub comment       : Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewPolicy {
    /// A device may review the same bathroom only once within this window.
    pub duplicate_window: Duration,
}

impl ReviewPolicy {
    pub const DEFAULT_DUPLICATE_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self {
            duplicate_window: Self::DEFAULT_DUPLICATE_WINDOW,
        }
    }
}

/// Validates a new review and checks that it is neither
/// orphaned nor a duplicate of a recent review from the same device.
pub fn prepare_new_review<R>(
    repo: &R,
    new: NewReview,
    device_hash: DeviceHash,
    policy: &ReviewPolicy,
    now: Timestamp,
) -> Result<ReviewDraft>
where
    R: BathroomRepo + ReviewRepo,
{
    let NewReview {
        bathroom_id,
        cleanliness,
        accessibility,
        privacy,
        comment,
    } = new;
    let draft = ReviewDraft {
        bathroom_id,
        ratings: Ratings {
            cleanliness: cleanliness.into(),
            accessibility: accessibility.into(),
            privacy: privacy.into(),
        },
        comment,
        device_hash,
    }
    .auto_correct();
    draft.validate()?;

    // Fails with NotFound for unknown bathrooms
    let _ = repo.get_bathroom(draft.bathroom_id.as_str())?;

    let recent_duplicate = repo
        .load_reviews_of_bathroom(draft.bathroom_id.as_str())?
        .iter()
        .filter(|r| r.is_from_device(&draft.device_hash))
        .any(|r| r.created_at.is_within(policy.duplicate_window, now));
    if recent_duplicate {
        log::debug!(
            "Rejecting duplicate review of bathroom {}",
            draft.bathroom_id
        );
        return Err(Error::DuplicateReview);
    }
    Ok(draft)
}

pub fn store_new_review<R: ReviewRepo>(repo: &R, draft: ReviewDraft) -> Result<Review> {
    log::debug!("Storing new review for bathroom {}", draft.bathroom_id);
    let review = repo.create_review(&draft)?;
    Ok(review)
}
