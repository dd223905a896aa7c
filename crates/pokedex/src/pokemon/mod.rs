use crate::prelude::{eprintln, *};
use colored::{ColoredString, Colorize};
use pokedex_core::colors::{hex_to_rgb, Badge};
use pokedex_core::pokemon::{transform_record, ApiPokemon, NamedResourceList, Record, SummaryEntry};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod browse;
pub mod fanout;
pub mod gallery;
pub mod list;
pub mod show;

#[cfg(test)]
pub(crate) mod fake_api;

// Re-export public data functions
pub use list::list_data;
pub use show::show_data;

#[derive(Debug, clap::Parser)]
#[command(name = "pokemon")]
#[command(about = "Pokémon list, gallery and detail views")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List Pokémon, 20 at a time, with optional "load more" steps
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show the fixed 10-card gallery
    #[clap(name = "gallery")]
    Gallery(gallery::GalleryOptions),

    /// Show a single Pokémon with its stats
    #[clap(name = "show")]
    Show(show::ShowOptions),

    /// Interactive list/detail navigation
    #[clap(name = "browse")]
    Browse(browse::BrowseOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("PokeAPI Base: {}", global.api_base);
        eprintln!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Gallery(options) => gallery::run(options, global).await,
        Commands::Show(options) => show::run(options, global).await,
        Commands::Browse(options) => browse::run(options, global).await,
    }
}

/// Thin PokeAPI client. Every call goes to the network; nothing is cached.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    concurrency: usize,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration, concurrency: usize) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            concurrency: concurrency.max(1),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(
            &global.api_base,
            Duration::from_secs(global.timeout),
            global.concurrency,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `limit` summary entries from the list endpoint
    pub async fn fetch_summary(&self, limit: usize) -> Result<NamedResourceList> {
        let url = format!("{}/pokemon?limit={limit}", self.base_url);
        self.get_json(&url).await
    }

    pub async fn fetch_record(&self, id: u32) -> Result<Record> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        self.fetch_record_url(&url).await
    }

    /// Fetch the record a summary entry points at
    pub async fn fetch_record_url(&self, url: &str) -> Result<Record> {
        let api: ApiPokemon = self.get_json(url).await?;
        Ok(transform_record(api))
    }

    /// Fetch full detail for every entry, in entry order. One failure fails the batch.
    pub async fn fetch_records(&self, entries: &[SummaryEntry]) -> Result<Vec<Record>> {
        fanout::try_join_bounded(entries, self.concurrency, |entry| {
            self.fetch_record_url(&entry.url)
        })
        .await
    }

    /// Summary request followed by the detail fan-out
    pub async fn fetch_list(&self, limit: usize) -> Result<Vec<Record>> {
        let summary = self.fetch_summary(limit).await?;
        log::debug!(
            "summary returned {} entries for limit {}",
            summary.results.len(),
            limit
        );
        self.fetch_records(&summary.results).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::FetchFailed(f!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::FetchFailed(f!(
                "Failed to fetch {}: HTTP {}",
                url,
                response.status()
            ))
            .into());
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| Error::FetchFailed(f!("Failed to parse {}: {}", url, e)))?;

        Ok(body)
    }
}

/// Background color for a badge, `None` for types outside the color table
pub fn badge_background(badge: &Badge) -> Option<(u8, u8, u8)> {
    badge.color.and_then(hex_to_rgb)
}

/// Render a type badge: white uppercase label on the type color
pub fn render_badge(badge: &Badge) -> ColoredString {
    let label = format!(" {} ", badge.label).white().bold();
    match badge_background(badge) {
        Some((r, g, b)) => label.on_truecolor(r, g, b),
        None => label,
    }
}

pub fn render_badges(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| render_badge(b).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text badges for contexts where escape codes break layout (table cells)
pub fn plain_badges(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| format!("[{}]", b.label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a requested list size. Zero is rejected: upstream would answer with its own default page.
pub fn parse_limit(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(format!("invalid limit {value:?}: {e}")),
    }
}

/// Log a failed view fetch the same way everywhere
pub fn log_fetch_error(view: &str, err: &color_eyre::eyre::Report) {
    log::error!("Error fetching {view} data: {err}");
}
