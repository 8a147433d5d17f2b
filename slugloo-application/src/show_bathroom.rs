use super::*;

pub fn show_bathroom<R>(repo: &R, id: &str) -> Result<usecases::BathroomDetails>
where
    R: BathroomRepo + ReviewRepo,
{
    Ok(usecases::get_bathroom_details(repo, id)?)
}
