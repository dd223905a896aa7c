use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use pokedex_core::limit::{ListLimit, INITIAL_LIST_LIMIT};
use pokedex_core::pokemon::{transform_list, ListItem, ListOutput};

use super::{log_fetch_error, parse_limit, render_badges, PokeApiClient};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Number of Pokémon to request before any "load more"
    #[arg(short, long, env = "POKEDEX_LIMIT", default_value_t = INITIAL_LIST_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Apply this many "load more" steps (20 more each) before rendering
    #[arg(short, long, default_value = "0")]
    pub more: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    pub fn list_limit(&self) -> ListLimit {
        ListLimit::starting_at(self.limit).after_load_more(self.more)
    }
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let limit = options.list_limit();

    if global.verbose {
        eprintln!("Requesting {} Pokémon...", limit.count());
    }

    let client = PokeApiClient::from_global(&global)?;
    let spinner = new_spinner("Loading...", options.json)?;

    let list_output = list_data(&client, limit)
        .await
        .inspect_err(|err| log_fetch_error("list", err))?;

    spinner.finish_and_clear();

    if options.json {
        output_json(&list_output)?;
    } else {
        output_formatted(&list_output);
    }

    Ok(())
}

/// Fetches the summary page plus every record's detail and returns the list view model
pub async fn list_data(client: &PokeApiClient, limit: ListLimit) -> Result<ListOutput> {
    let records = client.fetch_list(limit.count()).await?;
    Ok(transform_list(records, limit))
}

/// Convert list output to JSON string
fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render the cards of a list view, numbered from 1
pub fn format_list_items(items: &[ListItem]) -> String {
    let mut result = String::new();

    if items.is_empty() {
        result.push_str(&format!("\n{}\n", "No Pokémon returned.".yellow()));
        return result;
    }

    for (idx, item) in items.iter().enumerate() {
        result.push_str(&format!(
            "\n{} {} {}\n",
            format!("[{}]", idx + 1).yellow().bold(),
            item.name.white().bold(),
            format!("#{}", item.id).bright_black()
        ));

        if !item.types.is_empty() {
            result.push_str(&format!(
                "    {}: {}\n",
                "Types".green(),
                render_badges(&item.types)
            ));
        }

        result.push_str(&format!(
            "    {}: {}\n",
            "Sprite".green(),
            item.sprite
                .as_deref()
                .unwrap_or("(no sprite)")
                .cyan()
                .underline()
        ));

        result.push_str(&format!(
            "    {}: {}\n",
            "Details".green(),
            item.detail_command.cyan()
        ));
    }

    result
}

/// Convert list output to formatted text with colors
fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "POKEMON LIST ({} shown, {} requested)",
            output.count, output.requested
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format_list_items(&output.items));

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    if let Some(command) = &output.load_more_command {
        result.push_str(&format!("\n{}:\n", "To load more".bright_white().bold()));
        result.push_str(&format!("  {}\n", command.cyan()));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To view a Pokémon".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "pokedex pokemon show <id>".cyan()));
    if let Some(first) = output.items.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            first.detail_command.cyan()
        ));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("pokedex pokemon list --limit {} --json", output.requested).cyan()
    ));

    result.push('\n');
    result
}

fn output_json(output: &ListOutput) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ListOutput) {
    print!("{}", format_list_text(output));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::fake_api::{FakeApi, FakeApiConfig};
    use pokedex_core::colors::badge_for;
    use std::sync::atomic::Ordering;

    fn create_test_item(id: u32, name: &str) -> ListItem {
        ListItem {
            id,
            name: name.to_string(),
            types: vec![badge_for("grass"), badge_for("poison")],
            sprite: Some(format!("https://example.com/{}.png", id)),
            detail_command: format!("pokedex pokemon show {}", id),
        }
    }

    fn create_test_output(items: Vec<ListItem>) -> ListOutput {
        ListOutput {
            requested: 20,
            count: items.len(),
            items,
            load_more_command: Some("pokedex pokemon list --limit 40".to_string()),
        }
    }

    #[test]
    fn test_list_limit_from_options() {
        let options = ListOptions {
            limit: 20,
            more: 2,
            json: false,
        };

        assert_eq!(options.list_limit().count(), 60);
    }

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[command(flatten)]
        options: ListOptions,
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(<Cli as clap::Parser>::try_parse_from(["list", "--limit", "0"]).is_err());

        let cli = <Cli as clap::Parser>::try_parse_from(["list", "--limit", "5", "--more", "1"])
            .unwrap();
        assert_eq!(cli.options.list_limit().count(), 25);
    }

    #[test]
    fn test_huge_more_saturates() {
        let options = ListOptions {
            limit: 20,
            more: usize::MAX,
            json: false,
        };

        assert_eq!(options.list_limit().count(), usize::MAX);
    }

    #[test]
    fn test_format_list_json_basic() {
        let output = create_test_output(vec![create_test_item(1, "bulbasaur")]);

        let json = format_list_json(&output).unwrap();

        assert!(json.contains("\"id\": 1"));
        assert!(json.contains("\"name\": \"bulbasaur\""));
        assert!(json.contains("\"requested\": 20"));
        assert!(json.contains("\"load_more_command\""));
    }

    #[test]
    fn test_format_list_json_missing_sprite() {
        let mut item = create_test_item(1, "bulbasaur");
        item.sprite = None;
        let output = create_test_output(vec![item]);

        let json = format_list_json(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed["items"][0]["sprite"].is_null());
    }

    #[test]
    fn test_format_list_text_basic() {
        let output = create_test_output(vec![create_test_item(1, "bulbasaur")]);

        let formatted = format_list_text(&output);

        assert!(formatted.contains("POKEMON LIST"));
        assert!(formatted.contains("bulbasaur"));
        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("GRASS"));
        assert!(formatted.contains("POISON"));
        assert!(formatted.contains("pokedex pokemon show 1"));
    }

    #[test]
    fn test_format_list_text_keeps_order() {
        let output = create_test_output(vec![
            create_test_item(1, "bulbasaur"),
            create_test_item(2, "ivysaur"),
            create_test_item(3, "venusaur"),
        ]);

        let formatted = format_list_text(&output);

        let first = formatted.find("bulbasaur").unwrap();
        let second = formatted.find("ivysaur").unwrap();
        let third = formatted.find("venusaur").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_format_list_text_empty() {
        let output = create_test_output(vec![]);

        let formatted = format_list_text(&output);

        assert!(formatted.contains("No Pokémon returned."));
        assert!(!formatted.contains("Example"));
    }

    #[test]
    fn test_format_list_text_missing_sprite() {
        let mut item = create_test_item(1, "bulbasaur");
        item.sprite = None;

        let formatted = format_list_text(&create_test_output(vec![item]));

        assert!(formatted.contains("(no sprite)"));
    }

    #[test]
    fn test_format_list_text_load_more_hint() {
        let output = create_test_output(vec![create_test_item(1, "bulbasaur")]);

        let formatted = format_list_text(&output);

        assert!(formatted.contains("To load more"));
        assert!(formatted.contains("pokedex pokemon list --limit 40"));
    }

    #[test]
    fn test_format_list_text_without_load_more() {
        let mut output = create_test_output(vec![create_test_item(1, "bulbasaur")]);
        output.load_more_command = None;

        let formatted = format_list_text(&output);

        assert!(!formatted.contains("To load more"));
        assert!(formatted.contains("NAVIGATION"));
    }

    #[tokio::test]
    async fn test_list_data_length_matches_summary() {
        let api = FakeApi::spawn(FakeApiConfig::with_records(7)).await;

        let output = list_data(&api.client(), ListLimit::paged()).await.unwrap();

        assert_eq!(output.requested, 20);
        assert_eq!(output.count, 7);
        let ids: Vec<u32> = output.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[tokio::test]
    async fn test_load_more_twice_refetches_everything() {
        let api = FakeApi::spawn(FakeApiConfig {
            stagger: std::time::Duration::ZERO,
            ..FakeApiConfig::with_records(100)
        })
        .await;
        let client = api.client();

        let mut limit = ListLimit::paged();
        list_data(&client, limit).await.unwrap();
        for _ in 0..2 {
            limit = limit.load_more();
            list_data(&client, limit).await.unwrap();
        }

        assert_eq!(limit.count(), 60);
        assert_eq!(api.list_requests(), vec![20, 40, 60]);
        // 20 + 40 + 60: nothing reused between batches
        assert_eq!(api.detail_hits.load(Ordering::SeqCst), 120);
    }

    #[tokio::test]
    async fn test_list_data_unmapped_type_has_no_color() {
        let api = FakeApi::spawn(FakeApiConfig::with_records(1)).await;

        let output = list_data(&api.client(), ListLimit::paged()).await.unwrap();

        let badge = &output.items[0].types[1];
        assert_eq!(badge.label, "STELLAR");
        assert_eq!(badge.color, None);
    }
}
