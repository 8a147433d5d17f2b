use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("slugloo.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub store: Option<Store>,
    pub device: Option<Device>,
    pub reviews: Option<Reviews>,
    pub geolocation: Option<Geolocation>,
    pub map: Option<Map>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub url: String,
    pub api_key: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Device {
    pub state_dir: Option<PathBuf>,
}

impl Default for Device {
    fn default() -> Self {
        Config::default().device.expect("Device configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reviews {
    #[serde(deserialize_with = "deserialize_duration")]
    pub duplicate_window: Duration,
}

impl Default for Reviews {
    fn default() -> Self {
        Config::default().reviews.expect("Reviews configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub position: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub south_west: String,
    pub north_east: String,
    pub center: String,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}
