use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone)]
pub struct BathroomDetails {
    pub bathroom: Bathroom,
    /// Newest first
    pub reviews: Vec<Review>,
    pub avg_ratings: AvgRatings,
}

pub fn get_bathroom_details<R>(repo: &R, id: &str) -> Result<BathroomDetails>
where
    R: BathroomRepo + ReviewRepo,
{
    let bathroom = repo.get_bathroom(id)?;
    let mut reviews = repo.load_reviews_of_bathroom(id)?;
    // The store should already deliver them in this order
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let avg_ratings = bathroom.avg_ratings(&reviews);
    Ok(BathroomDetails {
        bathroom,
        reviews,
        avg_ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;
    use slugloo_entities::builders::*;

    #[test]
    fn details_of_unknown_bathroom() {
        let db = MockDb::default();
        let err = get_bathroom_details(&db, "nope").unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }

    #[test]
    fn details_with_reviews() {
        let db = MockDb::default();
        db.bathrooms
            .borrow_mut()
            .push(Bathroom::build().id("b1").name("Porter").finish());
        let old = Review::build()
            .id("r1")
            .bathroom_id("b1")
            .ratings(2, 4, 3)
            .created_at(Timestamp::from_seconds(1_000).unwrap())
            .finish();
        let new = Review::build()
            .id("r2")
            .bathroom_id("b1")
            .ratings(4, 4, 5)
            .created_at(Timestamp::from_seconds(2_000).unwrap())
            .finish();
        let other = Review::build().bathroom_id("b2").ratings(1, 1, 1).finish();
        db.reviews.borrow_mut().extend([old, new, other]);

        let details = get_bathroom_details(&db, "b1").unwrap();
        assert_eq!(details.bathroom.name, "Porter");
        let ids: Vec<_> = details.reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);
        assert_eq!(details.avg_ratings.cleanliness, Some(3.0.into()));
        assert_eq!(details.avg_ratings.accessibility, Some(4.0.into()));
        assert_eq!(details.avg_ratings.privacy, Some(4.0.into()));
    }

    #[test]
    fn details_without_reviews() {
        let db = MockDb::default();
        db.bathrooms
            .borrow_mut()
            .push(Bathroom::build().id("b1").finish());
        let details = get_bathroom_details(&db, "b1").unwrap();
        assert!(details.reviews.is_empty());
        assert_eq!(details.avg_ratings, AvgRatings::default());
    }
}
