use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

/// Input of the "add bathroom" form.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewBathroom {
    pub name     : String,
    pub building : String,
    pub pos      : Option<MapPoint>,
    pub features : Features,
}

pub fn prepare_new_bathroom(new: NewBathroom) -> Result<BathroomDraft> {
    let NewBathroom {
        name,
        building,
        pos,
        features,
    } = new;
    let pos = pos.ok_or(Error::MissingLocation)?;
    let draft = BathroomDraft {
        name,
        building,
        pos,
        features,
    }
    .auto_correct();
    draft.validate()?;
    Ok(draft)
}

pub fn create_new_bathroom<R: BathroomRepo>(repo: &R, new: NewBathroom) -> Result<Bathroom> {
    let draft = prepare_new_bathroom(new)?;
    log::debug!("Creating new bathroom: {draft:?}");
    let bathroom = repo.create_bathroom(&draft)?;
    debug_assert!(bathroom.id.is_valid());
    Ok(bathroom)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{builders::*, MockDb},
        *,
    };

    #[test]
    fn create_bathroom() {
        let db = MockDb::default();
        let new = NewBathroom::build()
            .name(" Ground Floor ")
            .building("Kresge")
            .pos(MapPoint::from_lat_lng_deg(36.9972, -122.0665))
            .wheelchair_accessible(true)
            .finish();
        let bathroom = create_new_bathroom(&db, new).unwrap();
        assert!(bathroom.id.is_valid());
        assert_eq!(bathroom.name, "Ground Floor");
        assert!(bathroom.features.wheelchair_accessible);
        assert!(!bathroom.features.grab_bars);
        assert_eq!(db.bathrooms.borrow().len(), 1);
        assert_eq!(db.bathrooms.borrow()[0], bathroom);
    }

    #[test]
    fn reject_missing_location() {
        let db = MockDb::default();
        let new = NewBathroom::build().name("A").building("B").finish();
        let err = create_new_bathroom(&db, new).unwrap_err();
        assert!(matches!(err, Error::MissingLocation));
        assert!(db.bathrooms.borrow().is_empty());
    }

    #[test]
    fn reject_missing_names() {
        let db = MockDb::default();
        let pos = MapPoint::from_lat_lng_deg(36.9972, -122.0665);
        let new = NewBathroom::build().building("B").pos(pos).finish();
        assert!(matches!(create_new_bathroom(&db, new), Err(Error::Name)));
        let new = NewBathroom::build().name("A").building(" ").pos(pos).finish();
        assert!(matches!(create_new_bathroom(&db, new), Err(Error::Building)));
        assert!(db.bathrooms.borrow().is_empty());
    }
}
