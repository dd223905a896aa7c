use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use pokedex_core::pokemon::{build_detail_output, parse_record_id, DetailOutput, StatName};

use super::{log_fetch_error, render_badges, PokeApiClient};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Pokémon ID or record URL (e.g., "25" or "https://pokeapi.co/api/v2/pokemon/25/")
    #[clap(env = "POKEDEX_ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let id = parse_record_id(&options.id).map_err(Error::from)?;

    if global.verbose {
        eprintln!("Fetching Pokémon ID: {}", id);
    }

    let client = PokeApiClient::from_global(&global)?;
    let spinner = new_spinner("Loading...", options.json)?;

    let detail = show_data(&client, id)
        .await
        .inspect_err(|err| log_fetch_error("detail", err))?;

    spinner.finish_and_clear();

    if options.json {
        let json = serde_json::to_string_pretty(&detail)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_detail_text(&detail));
    }

    Ok(())
}

/// Fetches one record and derives the detail view model
pub async fn show_data(client: &PokeApiClient, id: u32) -> Result<DetailOutput> {
    let record = client.fetch_record(id).await?;
    Ok(build_detail_output(record))
}

fn blank_if_missing(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Stat table: the six named stats followed by the total
pub fn format_stats_table(detail: &DetailOutput) -> String {
    let mut table = new_table();

    table.add_row(prettytable::row![b->"Stat", b->"Value"]);
    for name in StatName::ALL {
        table.add_row(prettytable::row![
            name.label(),
            r->blank_if_missing(detail.stats.get(name))
        ]);
    }
    table.add_row(prettytable::row![b->"Total", br->blank_if_missing(detail.total)]);

    table.to_string()
}

/// Detail body without header/navigation chrome
pub fn format_detail_body(detail: &DetailOutput) -> String {
    let mut result = String::new();

    if !detail.types.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Types".green(),
            render_badges(&detail.types)
        ));
    }
    result.push_str(&format!(
        "{}: {}\n",
        "Sprite".green(),
        detail
            .sprite
            .as_deref()
            .unwrap_or("(no sprite)")
            .cyan()
            .underline()
    ));
    result.push_str(&format!("{}: {} m\n", "Height".green(), detail.height_m));
    result.push_str(&format!("{}: {} kg\n", "Weight".green(), detail.weight_kg));
    result.push('\n');
    result.push_str(&format_stats_table(detail));

    result
}

fn format_detail_text(detail: &DetailOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{} {}\n",
        format!("#{}", detail.id).bright_black(),
        detail.name.to_uppercase().bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format_detail_body(detail));

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!(
        "\n{}:\n  {}\n",
        "Back to the list".bright_white().bold(),
        detail.back_command.cyan()
    ));
    result.push_str(&format!(
        "\n{}:\n  {}\n\n",
        "To get JSON output".bright_white().bold(),
        format!("pokedex pokemon show {} --json", detail.id).cyan()
    ));

    result
}
