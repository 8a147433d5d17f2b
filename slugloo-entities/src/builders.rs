pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{bathroom_builder::*, review_builder::*};

pub mod bathroom_builder {

    use super::*;
    use crate::{bathroom::*, geo::*, id::*};

    #[derive(Debug)]
    pub struct BathroomBuild {
        bathroom: Bathroom,
    }

    impl BathroomBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.bathroom.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.bathroom.name = name.into();
            self
        }
        pub fn building(mut self, building: &str) -> Self {
            self.bathroom.building = building.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.bathroom.pos = pos;
            self
        }
        pub fn wheelchair_accessible(mut self, v: bool) -> Self {
            self.bathroom.features.wheelchair_accessible = v;
            self
        }
        pub fn single_stall(mut self, v: bool) -> Self {
            self.bathroom.features.single_stall = v;
            self
        }
        pub fn gender_neutral(mut self, v: bool) -> Self {
            self.bathroom.features.gender_neutral = v;
            self
        }
        pub fn grab_bars(mut self, v: bool) -> Self {
            self.bathroom.features.grab_bars = v;
            self
        }
        pub fn automatic_door(mut self, v: bool) -> Self {
            self.bathroom.features.automatic_door = v;
            self
        }
        pub fn finish(self) -> Bathroom {
            self.bathroom
        }
    }

    impl Builder for Bathroom {
        type Build = BathroomBuild;
        fn build() -> Self::Build {
            Self::Build {
                bathroom: Bathroom {
                    id: Id::new(),
                    name: "".into(),
                    building: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    features: Default::default(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{device::*, id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn bathroom_id(mut self, id: &str) -> Self {
            self.review.bathroom_id = id.into();
            self
        }
        pub fn ratings(mut self, cleanliness: i8, accessibility: i8, privacy: i8) -> Self {
            self.review.ratings = Ratings {
                cleanliness: cleanliness.into(),
                accessibility: accessibility.into(),
                privacy: privacy.into(),
            };
            self
        }
        pub fn comment(mut self, comment: Option<&str>) -> Self {
            self.review.comment = comment.map(Into::into);
            self
        }
        pub fn device_hash(mut self, hash: &DeviceHash) -> Self {
            self.review.device_hash = hash.clone();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.review.created_at = created_at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> Self::Build {
            let device_hash = DeviceHash::try_from("0".repeat(DeviceHash::LEN))
                .expect("valid device hash");
            Self::Build {
                review: Review {
                    id: Id::new(),
                    bathroom_id: Id::new(),
                    ratings: Default::default(),
                    comment: None,
                    device_hash,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
