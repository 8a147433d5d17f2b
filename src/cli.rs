use std::{fs, io, path::PathBuf, sync::mpsc};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use strum::IntoEnumIterator;

use slugloo_application::{error::AppError, prelude as flows};
use slugloo_core::{
    entities::*,
    gateways::map::MapEvent,
    identity::DeviceIdentity,
    usecases,
    util::filter::FilterCriteria,
};
use slugloo_gateways::{
    geolocation::FixedGeoLocation, json_file::JsonFileStore, map::TextMap, table_store::TableStore,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "slugloo")]
#[command(version)]
#[command(about = "Find, add and review campus bathrooms", long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List bathrooms, nearest first.
    List(ListArgs),

    /// Show a bathroom with its ratings and reviews.
    Show {
        /// Bathroom id.
        id: String,
    },

    /// Add a new bathroom.
    Add(AddArgs),

    /// Review a bathroom.
    Review(ReviewArgs),

    /// Print the anonymous identity of this device.
    DeviceId,

    /// Print the map markers of all bathrooms.
    Markers,
}

#[derive(Args)]
pub struct ListArgs {
    /// Search in names and buildings.
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub wheelchair: bool,

    #[arg(long)]
    pub single_stall: bool,

    #[arg(long)]
    pub gender_neutral: bool,

    /// Reference position for sorting ("lat,lng").
    #[arg(long, value_name = "LAT,LNG")]
    pub near: Option<MapPoint>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub building: String,

    /// Defaults to the current position.
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    #[arg(long)]
    pub wheelchair_accessible: bool,

    #[arg(long)]
    pub single_stall: bool,

    #[arg(long)]
    pub gender_neutral: bool,

    #[arg(long)]
    pub grab_bars: bool,

    #[arg(long)]
    pub automatic_door: bool,
}

#[derive(Args)]
pub struct ReviewArgs {
    /// Bathroom id.
    pub bathroom_id: String,

    /// Stars from 1 to 5.
    #[arg(long)]
    pub cleanliness: i8,

    /// Stars from 1 to 5.
    #[arg(long)]
    pub accessibility: i8,

    /// Stars from 1 to 5.
    #[arg(long)]
    pub privacy: i8,

    #[arg(long)]
    pub comment: Option<String>,
}

impl From<&ListArgs> for FilterCriteria {
    fn from(from: &ListArgs) -> Self {
        Self {
            wheelchair: from.wheelchair,
            single_stall: from.single_stall,
            gender_neutral: from.gender_neutral,
        }
    }
}

impl From<&AddArgs> for Features {
    fn from(from: &AddArgs) -> Self {
        Self {
            wheelchair_accessible: from.wheelchair_accessible,
            single_stall: from.single_stall,
            gender_neutral: from.gender_neutral,
            grab_bars: from.grab_bars,
            automatic_door: from.automatic_door,
        }
    }
}

fn report(err: AppError) -> anyhow::Error {
    log::debug!("{err:?}");
    anyhow!(err.user_message())
}

fn table_store(cfg: &Config) -> Result<TableStore> {
    log::debug!("Connecting to {}", cfg.store.url);
    TableStore::try_new(&cfg.store.url, &cfg.store.api_key, cfg.store.timeout)
}

fn device_identity(cfg: &Config) -> Result<DeviceIdentity<JsonFileStore>> {
    let Some(dir) = &cfg.device.state_dir else {
        log::warn!("No state directory configured");
        return Ok(DeviceIdentity::without_storage());
    };
    fs::create_dir_all(dir)?;
    Ok(DeviceIdentity::new(JsonFileStore::try_new(dir)?))
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli { config, command } = cli;
    let cfg = Config::try_load_from_file_or_default(config)?;
    let geo = FixedGeoLocation::new(cfg.geolocation.position);

    match command {
        Command::List(args) => {
            let store = table_store(&cfg)?;
            let reference = args.near.or_else(|| flows::own_position(&geo));
            let bathrooms = flows::list_bathrooms(
                &store,
                &geo,
                FilterCriteria::from(&args),
                args.search,
                reference,
            )
            .map_err(report)?;
            if bathrooms.is_empty() {
                println!("No bathrooms found");
            }
            for b in bathrooms {
                print!("{}  {} ({})", b.id, b.name, b.building);
                if let Some(pos) = reference {
                    print!("  {}", MapPoint::distance(pos, b.pos));
                }
                let labels = b.features.labels();
                if !labels.is_empty() {
                    print!("  [{}]", labels.join(", "));
                }
                println!();
            }
        }
        Command::Show { id } => {
            let store = table_store(&cfg)?;
            let details = flows::show_bathroom(&store, &id).map_err(report)?;
            print_details(&details);
        }
        Command::Add(args) => {
            let store = table_store(&cfg)?;
            let (tx, rx) = mpsc::channel();
            if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
                let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid position: {lat},{lng}"))?;
                tx.send(MapEvent::LocationSelected(pos))?;
            }
            let new = usecases::NewBathroom {
                name: args.name.clone(),
                building: args.building.clone(),
                pos: None,
                features: Features::from(&args),
            };
            let bathroom = flows::add_bathroom(&store, &rx, &geo, &cfg.map.campus, new)
                .map_err(report)?;
            println!("Added bathroom {}", bathroom.id);
        }
        Command::Review(args) => {
            let store = table_store(&cfg)?;
            let identity = device_identity(&cfg)?;
            let ReviewArgs {
                bathroom_id,
                cleanliness,
                accessibility,
                privacy,
                comment,
            } = args;
            let new = usecases::NewReview {
                bathroom_id: bathroom_id.into(),
                cleanliness,
                accessibility,
                privacy,
                comment,
            };
            let review =
                flows::submit_review(&store, &identity, &cfg.reviews, new).map_err(report)?;
            println!("Review submitted successfully ({})", review.id);
        }
        Command::Markers => {
            let store = table_store(&cfg)?;
            let map = TextMap::new(io::stdout());
            let count = flows::show_bathrooms_on_map(&store, &geo, &map, cfg.map.center)
                .map_err(report)?;
            log::debug!("Rendered {count} markers");
        }
        Command::DeviceId => print_device_id(&cfg)?,
    }
    Ok(())
}

fn print_device_id(cfg: &Config) -> Result<()> {
    let identity = device_identity(cfg)?;
    match identity.get_or_create_device_id()? {
        Some(id) => {
            println!("device id:   {id}");
            println!("device hash: {}", identity.device_hash()?);
        }
        None => println!("No device identity available"),
    }
    Ok(())
}

fn print_details(details: &usecases::BathroomDetails) {
    let usecases::BathroomDetails {
        bathroom,
        reviews,
        avg_ratings,
    } = details;
    println!("{} ({})", bathroom.name, bathroom.building);
    println!("Location: {}", bathroom.pos);
    for label in bathroom.features.labels() {
        println!("  - {label}");
    }
    println!();
    for ctx in RatingContext::iter() {
        let label = format!("{ctx}:");
        match avg_ratings.get(ctx) {
            Some(avg) => println!("{label:<15}{avg}"),
            None => println!("{label:<15}No ratings yet"),
        }
    }
    println!();
    if reviews.is_empty() {
        println!("No reviews yet");
    }
    for r in reviews {
        let Ratings {
            cleanliness,
            accessibility,
            privacy,
        } = r.ratings;
        println!(
            "{}  cleanliness {cleanliness}  accessibility {accessibility}  privacy {privacy}",
            r.created_at.date()
        );
        if let Some(comment) = &r.comment {
            println!("  {comment}");
        }
    }
}
