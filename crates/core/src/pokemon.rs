use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::colors::{badge_for, Badge};
use crate::limit::ListLimit;

/// Page of summary references returned by `GET /pokemon?limit=N`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NamedResourceList {
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<SummaryEntry>,
}

/// Lightweight list entry that needs a follow-up request for full detail
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Pokémon record as served by `GET /pokemon/{id}`
///
/// Only the fields the views need are declared; serde ignores the rest of
/// the (large) upstream payload.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub sprites: ApiSprites,
    #[serde(default)]
    pub stats: Vec<ApiStat>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiTypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// A single stat reading, keyed by its upstream name (`hp`, `special-attack`, ...)
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub value: u32,
}

/// Read-only snapshot of one upstream Pokémon
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    /// Type labels in upstream order, which is also display order
    pub types: Vec<String>,
    pub sprite: Option<String>,
    pub stats: Vec<StatEntry>,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
}

impl Record {
    /// Look up a stat by name. Returns `None` when the record doesn't carry it.
    pub fn stat(&self, name: StatName) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.name == name.as_str())
            .map(|s| s.value)
    }
}

/// The fixed stat vocabulary shown by the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// Upstream key
    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Attack => "Attack",
            StatName::Defense => "Defense",
            StatName::SpecialAttack => "Sp. Attack",
            StatName::SpecialDefense => "Sp. Defense",
            StatName::Speed => "Speed",
        }
    }
}

/// The six named stats of a record. Missing stats stay `None`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatBlock {
    pub hp: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub special_attack: Option<u32>,
    pub special_defense: Option<u32>,
    pub speed: Option<u32>,
}

impl StatBlock {
    pub fn from_record(record: &Record) -> Self {
        Self {
            hp: record.stat(StatName::Hp),
            attack: record.stat(StatName::Attack),
            defense: record.stat(StatName::Defense),
            special_attack: record.stat(StatName::SpecialAttack),
            special_defense: record.stat(StatName::SpecialDefense),
            speed: record.stat(StatName::Speed),
        }
    }

    pub fn get(&self, name: StatName) -> Option<u32> {
        match name {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpecialAttack => self.special_attack,
            StatName::SpecialDefense => self.special_defense,
            StatName::Speed => self.speed,
        }
    }

    /// Sum of the six stats, or `None` if any of them is missing
    pub fn total(&self) -> Option<u32> {
        StatName::ALL.iter().map(|name| self.get(*name)).sum()
    }
}

/// Detail view model with every derived display field
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DetailOutput {
    pub id: u32,
    pub name: String,
    pub types: Vec<Badge>,
    pub sprite: Option<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub stats: StatBlock,
    pub total: Option<u32>,
    pub back_command: String,
}

/// Individual card in a list view
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
    pub types: Vec<Badge>,
    pub sprite: Option<String>,
    pub detail_command: String,
}

/// Complete list view model
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListOutput {
    /// Count that was requested from the list endpoint
    pub requested: usize,
    /// Number of records actually returned (may be lower than `requested`)
    pub count: usize,
    pub items: Vec<ListItem>,
    pub load_more_command: Option<String>,
}

/// Error returned when a record identifier can't be understood
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseIdError {
    #[error("Invalid Pokémon ID or URL: {0}")]
    Invalid(String),
}

/// Convert an upstream record into the domain model
pub fn transform_record(api: ApiPokemon) -> Record {
    Record {
        id: api.id,
        name: api.name,
        types: api.types.into_iter().map(|t| t.kind.name).collect(),
        sprite: api.sprites.front_default,
        stats: api
            .stats
            .into_iter()
            .map(|s| StatEntry {
                name: s.stat.name,
                value: s.base_stat,
            })
            .collect(),
        height: api.height,
        weight: api.weight,
    }
}

pub fn decimetres_to_metres(decimetres: u32) -> f64 {
    f64::from(decimetres) / 10.0
}

pub fn hectograms_to_kilograms(hectograms: u32) -> f64 {
    f64::from(hectograms) / 10.0
}

/// Build the detail view model for a single record
pub fn build_detail_output(record: Record) -> DetailOutput {
    let stats = StatBlock::from_record(&record);

    DetailOutput {
        id: record.id,
        height_m: decimetres_to_metres(record.height),
        weight_kg: hectograms_to_kilograms(record.weight),
        types: record.types.iter().map(|t| badge_for(t)).collect(),
        total: stats.total(),
        stats,
        sprite: record.sprite,
        name: record.name,
        back_command: "pokedex pokemon list".to_string(),
    }
}

/// Build the list view model, keeping the order the records arrived in
pub fn transform_list(records: Vec<Record>, limit: ListLimit) -> ListOutput {
    let items: Vec<ListItem> = records
        .into_iter()
        .map(|record| ListItem {
            detail_command: format!("pokedex pokemon show {}", record.id),
            id: record.id,
            types: record.types.iter().map(|t| badge_for(t)).collect(),
            sprite: record.sprite,
            name: record.name,
        })
        .collect();

    let load_more_command = if limit.can_load_more() {
        Some(format!(
            "pokedex pokemon list --limit {}",
            limit.load_more().count()
        ))
    } else {
        None
    };

    ListOutput {
        requested: limit.count(),
        count: items.len(),
        items,
        load_more_command,
    }
}

/// Parse a record identifier from a bare number or a record URL
/// (e.g., "25" or "https://pokeapi.co/api/v2/pokemon/25/")
pub fn parse_record_id(input: &str) -> Result<u32, ParseIdError> {
    let invalid = || ParseIdError::Invalid(input.to_string());
    let trimmed = input.trim();

    if let Ok(id) = trimmed.parse::<u32>() {
        return if id == 0 { Err(invalid()) } else { Ok(id) };
    }

    let re = Regex::new(r"/pokemon/(\d+)/?$").map_err(|_| invalid())?;
    re.captures(trimmed)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(invalid)
}
