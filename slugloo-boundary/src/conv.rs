use super::*;
use slugloo_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid coordinates: {0},{1}")]
    Coordinates(f64, f64),
    #[error(transparent)]
    Timestamp(#[from] e::time::TimestampParseError),
    #[error(transparent)]
    DeviceHash(#[from] e::device::InvalidDeviceHash),
}

impl From<RowId> for e::id::Id {
    fn from(from: RowId) -> Self {
        match from {
            RowId::Int(id) => id.to_string().into(),
            RowId::Text(id) => id.into(),
        }
    }
}

impl From<e::id::Id> for RowId {
    fn from(from: e::id::Id) -> Self {
        RowId::Text(from.into())
    }
}

impl TryFrom<Bathroom> for e::bathroom::Bathroom {
    type Error = ConversionError;
    fn try_from(from: Bathroom) -> Result<Self, Self::Error> {
        let Bathroom {
            id,
            name,
            building,
            lat,
            lng,
            wheelchair_accessible,
            single_stall,
            gender_neutral,
            grab_bars,
            automatic_door,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Coordinates(lat, lng))?;
        Ok(Self {
            id: id.into(),
            name,
            building,
            pos,
            features: e::bathroom::Features {
                wheelchair_accessible,
                single_stall,
                gender_neutral,
                grab_bars,
                automatic_door,
            },
        })
    }
}

impl From<e::bathroom::Bathroom> for Bathroom {
    fn from(from: e::bathroom::Bathroom) -> Self {
        let (id, draft): (e::id::Id, e::bathroom::BathroomDraft) = from.into();
        let NewBathroom {
            name,
            building,
            lat,
            lng,
            wheelchair_accessible,
            single_stall,
            gender_neutral,
            grab_bars,
            automatic_door,
        } = draft.into();
        Self {
            id: id.into(),
            name,
            building,
            lat,
            lng,
            wheelchair_accessible,
            single_stall,
            gender_neutral,
            grab_bars,
            automatic_door,
        }
    }
}

impl From<e::bathroom::BathroomDraft> for NewBathroom {
    fn from(from: e::bathroom::BathroomDraft) -> Self {
        let e::bathroom::BathroomDraft {
            name,
            building,
            pos,
            features,
        } = from;
        let e::bathroom::Features {
            wheelchair_accessible,
            single_stall,
            gender_neutral,
            grab_bars,
            automatic_door,
        } = features;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            name,
            building,
            lat,
            lng,
            wheelchair_accessible,
            single_stall,
            gender_neutral,
            grab_bars,
            automatic_door,
        }
    }
}

impl TryFrom<Review> for e::review::Review {
    type Error = ConversionError;
    fn try_from(from: Review) -> Result<Self, Self::Error> {
        let Review {
            id,
            bathroom_id,
            cleanliness,
            accessibility,
            privacy,
            comment,
            device_hash,
            created_at,
        } = from;
        Ok(Self {
            id: id.into(),
            bathroom_id: bathroom_id.into(),
            ratings: e::rating::Ratings {
                cleanliness: cleanliness.into(),
                accessibility: accessibility.into(),
                privacy: privacy.into(),
            },
            comment,
            device_hash: device_hash.try_into()?,
            created_at: e::time::Timestamp::parse_rfc3339(&created_at)?,
        })
    }
}

impl From<e::review::ReviewDraft> for NewReview {
    fn from(from: e::review::ReviewDraft) -> Self {
        let e::review::ReviewDraft {
            bathroom_id,
            ratings,
            comment,
            device_hash,
        } = from;
        Self {
            bathroom_id: bathroom_id.into(),
            cleanliness: ratings.cleanliness.into(),
            accessibility: ratings.accessibility.into(),
            privacy: ratings.privacy.into(),
            comment,
            device_hash: device_hash.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_row() -> Review {
        Review {
            id: RowId::Int(1),
            bathroom_id: RowId::Int(7),
            cleanliness: 4,
            accessibility: 5,
            privacy: 2,
            comment: Some("ok".into()),
            device_hash: "c".repeat(64),
            created_at: "2024-10-01T12:30:00.5+00:00".into(),
        }
    }

    #[test]
    fn review_row_into_entity() {
        let review = e::review::Review::try_from(review_row()).unwrap();
        assert_eq!(review.id.as_str(), "1");
        assert_eq!(review.bathroom_id.as_str(), "7");
        assert_eq!(review.ratings.accessibility, e::rating::RatingValue::new(5));
        assert_eq!(review.created_at.date(), "2024-10-01");
    }

    #[test]
    fn reject_invalid_review_rows() {
        let mut row = review_row();
        row.device_hash = "not a hash".into();
        assert!(matches!(
            e::review::Review::try_from(row),
            Err(ConversionError::DeviceHash(_))
        ));
        let mut row = review_row();
        row.created_at = "".into();
        assert!(matches!(
            e::review::Review::try_from(row),
            Err(ConversionError::Timestamp(_))
        ));
    }

    #[test]
    fn bathroom_row_with_invalid_coordinates() {
        let row = Bathroom {
            id: RowId::Int(1),
            name: "A".into(),
            building: "B".into(),
            lat: 91.0,
            lng: 0.0,
            wheelchair_accessible: false,
            single_stall: false,
            gender_neutral: false,
            grab_bars: false,
            automatic_door: false,
        };
        assert!(matches!(
            e::bathroom::Bathroom::try_from(row),
            Err(ConversionError::Coordinates(..))
        ));
    }

    #[test]
    fn bathroom_draft_into_insert_row() {
        let draft = e::bathroom::BathroomDraft {
            name: "Ground floor".into(),
            building: "Kresge".into(),
            pos: e::geo::MapPoint::from_lat_lng_deg(36.9972, -122.0665),
            features: e::bathroom::Features {
                grab_bars: true,
                ..Default::default()
            },
        };
        let row = NewBathroom::from(draft);
        assert_eq!(row.lat, 36.9972);
        assert_eq!(row.lng, -122.0665);
        assert!(row.grab_bars);
        assert!(!row.automatic_door);
    }
}
