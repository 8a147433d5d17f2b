use std::fmt;

use strum::{Display, EnumCount, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RatingContext {
    Cleanliness,
    Accessibility,
    Privacy,
}

/// Number of stars given in a single rating context.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl Default for RatingValue {
    fn default() -> Self {
        // The initial value of the star widgets
        Self(3)
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::max().0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

impl fmt::Display for AvgRatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}/{}", self.0, RatingValue::max().0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(val.0);
        self.cnt += 1;
    }

    /// `None` if no values have been added.
    pub fn build(self) -> Option<AvgRatingValue> {
        (self.cnt > 0).then(|| AvgRatingValue::from(self.acc as f64 / self.cnt as f64).clamp())
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

/// Average ratings of a bathroom per context.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AvgRatings {
    pub cleanliness: Option<AvgRatingValue>,
    pub accessibility: Option<AvgRatingValue>,
    pub privacy: Option<AvgRatingValue>,
}

impl AvgRatings {
    pub fn get(&self, ctx: RatingContext) -> Option<AvgRatingValue> {
        match ctx {
            RatingContext::Cleanliness => self.cleanliness,
            RatingContext::Accessibility => self.accessibility,
            RatingContext::Privacy => self.privacy,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingsBuilder {
    pub cleanliness: AvgRatingValueBuilder,
    pub accessibility: AvgRatingValueBuilder,
    pub privacy: AvgRatingValueBuilder,
}

impl AvgRatingsBuilder {
    pub fn add(&mut self, ctx: RatingContext, val: RatingValue) {
        use RatingContext as C;
        match ctx {
            C::Cleanliness => self.cleanliness.add(val),
            C::Accessibility => self.accessibility.add(val),
            C::Privacy => self.privacy.add(val),
        }
    }

    pub fn build(self) -> AvgRatings {
        AvgRatings {
            cleanliness: self.cleanliness.build(),
            accessibility: self.accessibility.build(),
            privacy: self.privacy.build(),
        }
    }
}

impl std::ops::AddAssign<(RatingContext, RatingValue)> for AvgRatingsBuilder {
    fn add_assign(&mut self, rhs: (RatingContext, RatingValue)) {
        self.add(rhs.0, rhs.1);
    }
}

/// The three star ratings of a single review.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ratings {
    pub cleanliness   : RatingValue,
    pub accessibility : RatingValue,
    pub privacy       : RatingValue,
}

impl Ratings {
    pub fn get(&self, ctx: RatingContext) -> RatingValue {
        match ctx {
            RatingContext::Cleanliness => self.cleanliness,
            RatingContext::Accessibility => self.accessibility,
            RatingContext::Privacy => self.privacy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatingContext, RatingValue)> + '_ {
        use strum::IntoEnumIterator;
        RatingContext::iter().map(|ctx| (ctx, self.get(ctx)))
    }

    /// The first context with a value out of range.
    pub fn first_invalid(&self) -> Option<RatingContext> {
        self.iter()
            .find(|(_, value)| !value.is_valid())
            .map(|(ctx, _)| ctx)
    }
}
