use super::prelude::*;
use crate::util::{
    filter::{self, FilterCriteria},
    sort::SortByDistanceTo,
};

#[rustfmt::skip]
#[derive(Debug, Default, Clone)]
pub struct SearchRequest {
    pub criteria  : FilterCriteria,
    pub text      : String,
    pub reference : Option<MapPoint>,
}

/// Filters bathrooms by search text and criteria and orders
/// them by their distance to the reference point.
///
/// Without a reference point the input order is preserved.
pub fn apply_filters(
    bathrooms: &[Bathroom],
    criteria: &FilterCriteria,
    text: &str,
    reference: Option<MapPoint>,
) -> Vec<Bathroom> {
    let matches = filter::bathrooms_by_criteria_and_search_text(criteria, text);
    let mut results: Vec<_> = bathrooms.iter().filter(|&b| matches(b)).cloned().collect();
    if let Some(pos) = reference {
        results.sort_by_distance_to(pos);
    }
    results
}

pub fn search_bathrooms<R: BathroomRepo>(repo: &R, req: &SearchRequest) -> Result<Vec<Bathroom>> {
    let SearchRequest {
        criteria,
        text,
        reference,
    } = req;
    let bathrooms = repo.all_bathrooms()?;
    Ok(apply_filters(&bathrooms, criteria, text, *reference))
}
