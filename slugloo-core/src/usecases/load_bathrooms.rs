use super::prelude::*;

pub fn load_bathrooms<R: BathroomRepo>(repo: &R) -> Result<Vec<Bathroom>> {
    Ok(repo.all_bathrooms()?)
}
