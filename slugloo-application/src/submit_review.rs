use super::*;
use slugloo_core::identity::{DeviceIdentity, KeyValueStore};

pub fn submit_review<R, S>(
    repo: &R,
    identity: &DeviceIdentity<S>,
    policy: &usecases::ReviewPolicy,
    new: usecases::NewReview,
) -> Result<Review>
where
    R: BathroomRepo + ReviewRepo,
    S: KeyValueStore,
{
    let device_hash = identity.device_hash()?;
    let draft = usecases::prepare_new_review(repo, new, device_hash, policy, Timestamp::now())?;
    let review = usecases::store_new_review(repo, draft).map_err(|err| {
        warn!("Failed to store new review: {err}");
        err
    })?;
    info!("Added review {} of bathroom {}", review.id, review.bathroom_id);
    Ok(review)
}
