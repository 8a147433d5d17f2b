use anyhow::{anyhow, Result};
use slugloo_core::{entities::*, usecases::ReviewPolicy};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "slugloo.toml";

const ENV_NAME_STORE_URL: &str = "SLUGLOO_STORE_URL";
const ENV_NAME_STORE_API_KEY: &str = "SLUGLOO_STORE_API_KEY";

pub struct Config {
    pub store: Store,
    pub device: Device,
    pub reviews: ReviewPolicy,
    pub geolocation: Geolocation,
    pub map: Map,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(url) = env::var(ENV_NAME_STORE_URL) {
            cfg.store.url = url;
        }
        if let Ok(api_key) = env::var(ENV_NAME_STORE_API_KEY) {
            cfg.store.api_key = api_key;
        }
        Ok(cfg)
    }
}

pub struct Store {
    /// REST endpoint of the table store
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

pub struct Device {
    /// `None` if the device id should not be persisted.
    pub state_dir: Option<PathBuf>,
}

pub struct Geolocation {
    pub position: Option<MapPoint>,
}

pub struct Map {
    pub campus: MapBbox,
    pub center: MapPoint,
}

fn parse_map_point(s: &str) -> Result<MapPoint> {
    s.parse()
        .map_err(|err| anyhow!("Invalid map position '{s}': {err}"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            store,
            device,
            reviews,
            geolocation,
            map,
        } = from;

        let raw::Store {
            url,
            api_key,
            timeout,
        } = store.unwrap_or_default();
        let store = Store {
            url,
            api_key,
            timeout,
        };

        let raw::Device { state_dir } = device.unwrap_or_default();
        let device = Device { state_dir };

        let raw::Reviews { duplicate_window } = reviews.unwrap_or_default();
        let reviews = ReviewPolicy { duplicate_window };

        let raw::Geolocation { position } = geolocation.unwrap_or_default();
        let geolocation = Geolocation {
            position: position.as_deref().map(parse_map_point).transpose()?,
        };

        let raw::Map {
            south_west,
            north_east,
            center,
        } = map.unwrap_or_default();
        let campus = MapBbox::new(parse_map_point(&south_west)?, parse_map_point(&north_east)?);
        if !campus.is_valid() {
            return Err(anyhow!("Invalid campus bounds: {campus}"));
        }
        let center = parse_map_point(&center)?;
        if !campus.contains_point(center) {
            log::warn!("The map center {center} is outside of the campus {campus}");
        }
        let map = Map { campus, center };

        Ok(Self {
            store,
            device,
            reviews,
            geolocation,
            map,
        })
    }
}
