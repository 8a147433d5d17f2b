use crate::entities::*;

/// Boolean attribute filters.
///
/// Disabled predicates impose no constraint, enabled
/// predicates are combined by logical AND.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub wheelchair     : bool,
    pub single_stall   : bool,
    pub gender_neutral : bool,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        let Self {
            wheelchair,
            single_stall,
            gender_neutral,
        } = self;
        !(*wheelchair || *single_stall || *gender_neutral)
    }
}

pub trait MatchesCriteria {
    fn matches_criteria(&self, criteria: &FilterCriteria) -> bool;
}

impl MatchesCriteria for Features {
    fn matches_criteria(&self, criteria: &FilterCriteria) -> bool {
        (!criteria.wheelchair || self.wheelchair_accessible)
            && (!criteria.single_stall || self.single_stall)
            && (!criteria.gender_neutral || self.gender_neutral)
    }
}

impl MatchesCriteria for Bathroom {
    fn matches_criteria(&self, criteria: &FilterCriteria) -> bool {
        self.features.matches_criteria(criteria)
    }
}

pub trait MatchesSearchText {
    /// The text must already be lowercase.
    fn matches_lowercase_text(&self, text: &str) -> bool;
}

impl MatchesSearchText for Bathroom {
    fn matches_lowercase_text(&self, text: &str) -> bool {
        debug_assert_eq!(text, text.to_lowercase());
        text.is_empty()
            || self.name.to_lowercase().contains(text)
            || self.building.to_lowercase().contains(text)
    }
}

pub fn bathrooms_by_criteria_and_search_text<'a>(
    criteria: &'a FilterCriteria,
    text: &str,
) -> impl Fn(&Bathroom) -> bool + 'a {
    let text = text.to_lowercase();
    move |b| b.matches_lowercase_text(&text) && b.matches_criteria(criteria)
}
