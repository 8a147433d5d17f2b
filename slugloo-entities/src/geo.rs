use std::{fmt, str::FromStr};

use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// Geographical location on a (flat) map in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn is_valid_lat_deg(lat: f64) -> bool {
        lat.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
    }

    pub fn is_valid_lng_deg(lng: f64) -> bool {
        lng.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        Self::is_valid_lat_deg(self.lat) && Self::is_valid_lng_deg(self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let res = Self {
            lat: lat.into(),
            lng: lng.into(),
        };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        if Self::is_valid_lat_deg(lat) && Self::is_valid_lng_deg(lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Longitude(lng_deg_str.to_owned()))?;
        if !Self::is_valid_lat_deg(lat) {
            return Err(MapPointParseError::Latitude(lat_deg_str.to_owned()));
        }
        if !Self::is_valid_lng_deg(lng) {
            return Err(MapPointParseError::Longitude(lng_deg_str.to_owned()));
        }
        Ok(Self { lat, lng })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((lat_deg_str, lng_deg_str)) if !lng_deg_str.contains(',') => {
                Self::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
            }
            _ => Err(MapPointParseError::Format(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        Self(kilometers * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.2} km", self.to_kilometers())
    }
}

/// Mean earth radius
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth with the haversine formula.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, _) = p1.to_lat_lng_rad();
        let (lat2_rad, _) = p2.to_lat_lng_rad();
        let dlat_rad = (p2.lat - p1.lat).to_radians();
        let dlng_rad = (p2.lng - p1.lng).to_radians();

        let dlat_sin = (dlat_rad / 2.0).sin();
        let dlng_sin = (dlng_rad / 2.0).sin();
        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
