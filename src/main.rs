use anyhow::anyhow;
use clap::Parser;
use poi_map::geofile::download::sync_dataset_to_file;
use poi_map::{
    read_features_from_geojson, write_features_to_geojson, ConsoleRenderer, FeatureCollection,
    MapSession, MapViewport, MarkerRenderer, Notice,
};
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

/// Browse and filter a point-of-interest map from free-text queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: String,
    /// Run a single query and exit instead of starting the prompt.
    #[arg(short, long)]
    query: Option<String>,
}

#[derive(Deserialize, Debug)]
enum DatasetConfig {
    Geofile { filepath: PathBuf },
    Remote { url: String },
}

#[derive(Deserialize, Debug)]
struct Config {
    dataset: DatasetConfig,
    data_dir: PathBuf,
    #[serde(default)]
    viewport: MapViewport,
}

fn load_collection(config: &Config) -> anyhow::Result<FeatureCollection> {
    let filepath = match &config.dataset {
        DatasetConfig::Geofile { filepath } => filepath.clone(),
        DatasetConfig::Remote { url } => {
            log::info!("Syncing feature dataset from {}", url);
            sync_dataset_to_file(url, &config.data_dir)?
        }
    };
    log::info!("Reading features from {:?}", &filepath);
    Ok(read_features_from_geojson(&filepath)?)
}

fn run_prompt(session: &mut MapSession, renderer: &mut dyn MarkerRenderer) -> anyhow::Result<()> {
    let stdin = io::stdin();
    print!("query> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if "quit" == input || "exit" == input {
            break;
        }
        let summary = session.submit_query(input, renderer)?;
        log::debug!("{:?}", summary);
        print!("query> ");
        io::stdout().flush()?;
    }
    Ok(())
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    if !Path::new(&args.config_filepath).exists() {
        return Err(anyhow!("Config file {} not found", &args.config_filepath));
    }
    let config_contents = read_to_string(args.config_filepath)?;
    let config: Config = serde_yaml::from_str(&config_contents)?;

    let mut renderer = ConsoleRenderer::new(config.viewport);
    let collection = match load_collection(&config) {
        Ok(collection) => collection,
        Err(err) => {
            renderer.show_notice(Notice::LoadFailed {
                reason: format!("{:#}", err),
            });
            return Err(err);
        }
    };
    log::info!("Read {} features", collection.len());

    std::fs::create_dir_all(&config.data_dir)?;
    let geojson_dump_filepath = config.data_dir.join("loaded_features.geojson");

    // Write the loaded collection to file for reference.
    log::info!(
        "Writing loaded features to GeoJSON to {:?}",
        &geojson_dump_filepath
    );
    write_features_to_geojson(&collection, &geojson_dump_filepath)?;

    let mut session = MapSession::new();
    session.load(collection)?;

    match &args.query {
        Some(query) => {
            session.submit_query(query, &mut renderer)?;
        }
        None => {
            // Show the whole collection before the first query.
            session.submit_query("", &mut renderer)?;
            run_prompt(&mut session, &mut renderer)?;
        }
    }
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
