use thiserror::Error;

use crate::entities::*;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BathroomInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing building")]
    Building,
    #[error("Invalid position")]
    Position,
}

impl AutoCorrect for BathroomDraft {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.building = self.building.trim().to_owned();
        self
    }
}

impl Validate for BathroomDraft {
    type Error = BathroomInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.building.trim().is_empty() {
            return Err(Self::Error::Building);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewInvalidation {
    #[error("The {0} rating is out of range")]
    RatingValue(RatingContext),
    #[error("Missing bathroom")]
    Bathroom,
}

impl AutoCorrect for ReviewDraft {
    fn auto_correct(mut self) -> Self {
        self.comment = self
            .comment
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        self
    }
}

impl Validate for ReviewDraft {
    type Error = ReviewInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.bathroom_id.is_valid() {
            return Err(Self::Error::Bathroom);
        }
        if let Some(ctx) = self.ratings.first_invalid() {
            return Err(Self::Error::RatingValue(ctx));
        }
        Ok(())
    }
}
