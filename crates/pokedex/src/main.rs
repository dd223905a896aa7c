use crate::prelude::*;
use clap::Parser;

mod error;
mod layout;
mod pokemon;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse Pokémon from PokeAPI (pokeapi.co) in the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PokeAPI base URL
    #[clap(
        long,
        env = "POKEDEX_API_BASE",
        global = true,
        default_value = "https://pokeapi.co/api/v2"
    )]
    api_base: String,

    /// HTTP request timeout in seconds
    #[clap(long, env = "POKEDEX_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Maximum number of detail requests in flight at once
    #[clap(long, env = "POKEDEX_CONCURRENCY", global = true, default_value = "16")]
    concurrency: usize,

    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Pokémon list, gallery and detail views
    Pokemon(crate::pokemon::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Pokemon(sub_app) => crate::pokemon::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
