use crate::{geo::*, id::*};

/// Accessibility and feature flags of a bathroom.
///
/// All flags are independent of each other.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Features {
    pub wheelchair_accessible : bool,
    pub single_stall          : bool,
    pub gender_neutral        : bool,
    pub grab_bars             : bool,
    pub automatic_door        : bool,
}

impl Features {
    /// Human readable labels of all flags that are set.
    pub fn labels(&self) -> Vec<&'static str> {
        let Self {
            wheelchair_accessible,
            single_stall,
            gender_neutral,
            grab_bars,
            automatic_door,
        } = *self;
        [
            (wheelchair_accessible, "Wheelchair Accessible"),
            (single_stall, "Single Stall"),
            (gender_neutral, "Gender Neutral"),
            (grab_bars, "Grab Bars"),
            (automatic_door, "Automatic Door"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

// A bathroom that has not been stored yet.
// The id is assigned by the remote table store.
#[derive(Debug, Clone, PartialEq)]
pub struct BathroomDraft {
    pub name: String,
    pub building: String,
    pub pos: MapPoint,
    pub features: Features,
}

impl BathroomDraft {
    pub fn into_bathroom(self, id: Id) -> Bathroom {
        let Self {
            name,
            building,
            pos,
            features,
        } = self;
        Bathroom {
            id,
            name,
            building,
            pos,
            features,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bathroom {
    pub id: Id,
    pub name: String,
    pub building: String,
    pub pos: MapPoint,
    pub features: Features,
}

impl From<Bathroom> for (Id, BathroomDraft) {
    fn from(from: Bathroom) -> Self {
        let Bathroom {
            id,
            name,
            building,
            pos,
            features,
        } = from;
        (
            id,
            BathroomDraft {
                name,
                building,
                pos,
                features,
            },
        )
    }
}
