use slugloo_entities::{bathroom::*, rating::*, review::*};

pub trait Rated {
    fn avg_ratings(&self, _: &[Review]) -> AvgRatings;
}

impl Rated for Bathroom {
    fn avg_ratings(&self, reviews: &[Review]) -> AvgRatings {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.bathroom_id == self.id).count()
        );
        reviews
            .iter()
            .fold(AvgRatingsBuilder::default(), |mut acc, r| {
                for (ctx, value) in r.ratings.iter() {
                    acc.add(ctx, value);
                }
                acc
            })
            .build()
    }
}
