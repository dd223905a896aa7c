use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::limit::ListLimit;
use pokedex_core::pokemon::{ListItem, ListOutput};
use prettytable::{Cell, Row};

use super::{list_data, log_fetch_error, plain_badges, PokeApiClient};

/// Cards per gallery row
const GRID_COLUMNS: usize = 4;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GalleryOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GalleryOptions, global: crate::Global) -> Result<()> {
    let client = PokeApiClient::from_global(&global)?;
    let spinner = new_spinner("Loading...", options.json)?;

    let output = gallery_data(&client)
        .await
        .inspect_err(|err| log_fetch_error("gallery", err))?;

    spinner.finish_and_clear();

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("\n{}\n", "POKEMON GALLERY".bright_cyan().bold());
    if output.items.is_empty() {
        println!("No Pokémon returned.");
    } else {
        print!("{}", format_gallery(&output.items));
    }

    Ok(())
}

/// The fixed ten-card view. "Load more" doesn't exist here.
pub async fn gallery_data(client: &PokeApiClient) -> Result<ListOutput> {
    list_data(client, ListLimit::gallery()).await
}

fn card(item: &ListItem) -> Cell {
    let lines = [
        item.name.to_uppercase(),
        item.sprite
            .clone()
            .unwrap_or_else(|| "(no sprite)".to_string()),
        plain_badges(&item.types),
        format!("> {}", item.detail_command),
    ];

    Cell::new(&lines.join("\n"))
}

/// Lay the cards out as a grid, [`GRID_COLUMNS`] per row
fn format_gallery(items: &[ListItem]) -> String {
    let mut table = new_table();

    for chunk in items.chunks(GRID_COLUMNS) {
        table.add_row(Row::new(chunk.iter().map(card).collect()));
    }

    table.to_string()
}
