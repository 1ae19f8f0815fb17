use anyhow::{Context, Result};
use art_gallery_explorer::config::{find_config_file, get_config, load_config, Config, LogFormat};
use art_gallery_explorer::extract_artwork_info;
use art_gallery_explorer::models::{
    ArtworkDetailItem, ArtworksResponse, Creator, DetailEnvelope, ExtractedInfo, SearchQuery,
};
use art_gallery_explorer::sources::{CollectionSource, RijksmuseumSource};
use art_gallery_explorer::ui::{self, Status};
use art_gallery_explorer::utils::fetch_details;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Object looked up by `detail` when no id is given (The Night Watch)
const DEFAULT_OBJECT_ID: &str = "200100988";

/// Art Gallery Explorer - Search and inspect the Rijksmuseum collection
#[derive(Parser, Debug)]
#[command(name = "art-gallery-explorer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search and inspect the Rijksmuseum collection", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

impl OutputFormat {
    fn resolve(self) -> Self {
        match self {
            OutputFormat::Auto if ui::is_terminal() => OutputFormat::Table,
            OutputFormat::Auto => OutputFormat::Json,
            other => other,
        }
    }
}

/// Search filters shared by `search` and `images`
#[derive(Args, Debug, Default, Clone)]
struct SearchArgs {
    /// Title search term
    #[arg(long, short)]
    title: Option<String>,

    /// Creator (repeat to combine with OR)
    #[arg(long, short)]
    creator: Vec<String>,

    /// Object type (accepted, not sent yet)
    #[arg(long = "type")]
    object_type: Option<String>,

    /// Technique (accepted, not sent yet)
    #[arg(long)]
    technique: Vec<String>,

    /// Material (accepted, not sent yet)
    #[arg(long)]
    material: Vec<String>,

    /// Creation date (accepted, not sent yet)
    #[arg(long)]
    date: Option<String>,

    /// Only objects with images (accepted, not sent yet)
    #[arg(long)]
    image_available: bool,

    /// Page number
    #[arg(long)]
    page: Option<u32>,

    /// Results per page
    #[arg(long, short)]
    limit: Option<u32>,
}

impl SearchArgs {
    fn into_query(self, default_limit: Option<u32>) -> SearchQuery {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        let mut creators: Vec<String> = self
            .creator
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();

        SearchQuery {
            title: non_empty(self.title),
            creator: match creators.len() {
                0 => None,
                1 => creators.pop().map(Creator::One),
                _ => Some(Creator::Many(creators)),
            },
            object_type: non_empty(self.object_type),
            technique: self.technique,
            material: self.material,
            creation_date: non_empty(self.date),
            image_available: self.image_available.then_some(true),
            page: self.page,
            limit: self.limit.or(default_limit),
            ..SearchQuery::default()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the collection without filters
    #[command(alias = "l")]
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long, short)]
        limit: Option<u32>,
    },

    /// Search the collection
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        filters: SearchArgs,
    },

    /// Fetch the raw Linked Art record of one object
    #[command(alias = "d")]
    Detail {
        /// Object identifier or resolver URL
        #[arg(default_value = DEFAULT_OBJECT_ID)]
        id: String,
    },

    /// Search, then fetch details for the first results
    #[command(alias = "i")]
    Images {
        #[command(flatten)]
        filters: SearchArgs,

        /// Number of results to hydrate (default: search.detail_batch_size)
        #[arg(long, short)]
        max: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}

/// Detail view: the envelope plus the readable fields
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailView {
    #[serde(flatten)]
    envelope: DetailEnvelope,
    #[serde(skip_serializing_if = "Option::is_none")]
    extracted_info: Option<ExtractedInfo>,
}

/// Images view: the hydrated items plus a summary
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagesView {
    message: String,
    artworks_found: u64,
    displayed_items: usize,
    artworks: Vec<ArtworkDetailItem>,
}

fn init_tracing(cli: &Cli, config: &Config) {
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("art_gallery_explorer={}", env_filter)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn resolve_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    let path = cli.config.clone().or_else(find_config_file);
    let config = match &path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => get_config().context("Failed to read configuration from environment")?,
    };
    Ok((config, path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = resolve_config(&cli)?;
    init_tracing(&cli, &config);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    let output = cli.output.resolve();
    let source = RijksmuseumSource::from_config(&config.http)?;

    match cli.command {
        Commands::List { page, limit } => {
            let query = SearchArgs {
                page,
                limit,
                ..SearchArgs::default()
            }
            .into_query(config.search.default_limit);
            let response = source.search_artworks(&query).await?;
            output_artworks(&response, output)?;
        }

        Commands::Search { filters } => {
            let query = filters.into_query(config.search.default_limit);
            let response = source.search_artworks(&query).await?;
            output_artworks(&response, output)?;
        }

        Commands::Detail { id } => {
            let envelope = source.get_artwork_detail(&id).await?;
            let extracted_info = envelope.linked_art.as_ref().map(extract_artwork_info);

            match output {
                OutputFormat::Json => {
                    let view = DetailView {
                        envelope,
                        extracted_info,
                    };
                    println!("{}", serde_json::to_string_pretty(&view)?);
                }
                _ => match extracted_info {
                    Some(info) => ui::print_artwork_info(&info),
                    None => ui::print_status(Status::Warning, "No Linked Art record returned"),
                },
            }
        }

        Commands::Images { filters, max } => {
            let query = filters.into_query(config.search.default_limit);
            let response = source.search_artworks(&query).await?;

            let max_items = max.unwrap_or(config.search.detail_batch_size);
            let artworks = fetch_details(&source, &response, max_items).await;

            let view = ImagesView {
                message: format!("Fetched {} artworks with images", artworks.len()),
                artworks_found: response.count,
                displayed_items: artworks.len(),
                artworks,
            };

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Table => {
                    ui::print_section("Artworks");
                    ui::print_detail_table(&view.artworks);
                    if !cli.quiet {
                        ui::print_status(Status::Success, &view.message);
                    }
                }
                _ => {
                    for item in &view.artworks {
                        ui::print_artwork_info(&item.info);
                    }
                    if !cli.quiet {
                        println!();
                        ui::print_status(Status::Success, &view.message);
                    }
                }
            }
        }

        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn output_artworks(response: &ArtworksResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        OutputFormat::Plain => {
            for artwork in &response.art_objects {
                println!("{}\t{}", artwork.object_number, artwork.id);
            }
            if let Some(token) = &response.next_page_token {
                println!("next\t{}", token);
            }
        }
        _ => {
            ui::print_search_header(
                response.count,
                response.art_objects.len(),
                response.next_page_token.as_deref(),
            );
            ui::print_artwork_table(&response.art_objects);
        }
    }
    Ok(())
}
