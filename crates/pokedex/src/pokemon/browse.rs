//! Interactive list/detail navigation.
//!
//! The [`Browser`] owns one [`View`] per route and never performs I/O itself:
//! commands turn into [`FetchRequest`]s, the loop spawns them, and their
//! [`FetchResult`]s come back over a channel. Each request carries the ticket
//! of the view that asked for it, so results from a superseded request (a
//! second `more`, or a detail page the user already left) are dropped.

use crate::layout::{render_page, NavItem};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use pokedex_core::limit::{ListLimit, INITIAL_LIST_LIMIT};
use pokedex_core::pokemon::{parse_record_id, DetailOutput, ListOutput};
use pokedex_core::view::{Delivery, Ticket, View, ViewState};
use std::io::IsTerminal;
use tokio::io::AsyncBufReadExt;

use super::list::format_list_items;
use super::show::format_detail_body;
use super::{list_data, log_fetch_error, parse_limit, show_data, PokeApiClient};

const HELP: &str = "Commands: more (m) | show <id> (s <id>) | <id> | back (b) | help (h) | quit (q)";

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BrowseOptions {
    /// Number of Pokémon the list view starts with
    #[arg(short, long, env = "POKEDEX_LIMIT", default_value_t = INITIAL_LIST_LIMIT, value_parser = parse_limit)]
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    More,
    Show(u32),
    Back,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => Command::Empty,
        ["more" | "m"] => Command::More,
        ["back" | "b"] => Command::Back,
        ["help" | "h" | "?"] => Command::Help,
        ["quit" | "q" | "exit"] => Command::Quit,
        ["show" | "s", id] | [id] => parse_record_id(id)
            .map(Command::Show)
            .unwrap_or_else(|_| Command::Invalid(line.to_string())),
        _ => Command::Invalid(line.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    List { ticket: Ticket, limit: ListLimit },
    Detail { ticket: Ticket, id: u32 },
}

#[derive(Debug)]
pub enum FetchResult {
    List(Ticket, Result<ListOutput>),
    Detail(Ticket, Result<DetailOutput>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fetch(FetchRequest),
    Render,
    Nothing,
    Quit,
}

#[derive(Debug)]
pub struct Browser {
    route: Route,
    initial_limit: ListLimit,
    limit: ListLimit,
    list: View<ListOutput>,
    detail: View<DetailOutput>,
    notice: Option<String>,
}

impl Browser {
    pub fn new(initial_limit: ListLimit) -> Self {
        Self {
            route: Route::List,
            initial_limit,
            limit: initial_limit,
            list: View::new(),
            detail: View::new(),
            notice: None,
        }
    }

    /// Mount the list view. Returns the first fetch.
    pub fn start(&mut self) -> FetchRequest {
        self.enter_list()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn limit(&self) -> ListLimit {
        self.limit
    }

    fn enter_list(&mut self) -> FetchRequest {
        self.detail.clear();
        self.list.clear();
        self.route = Route::List;
        self.limit = self.initial_limit;

        FetchRequest::List {
            ticket: self.list.begin(),
            limit: self.limit,
        }
    }

    fn enter_detail(&mut self, id: u32) -> FetchRequest {
        self.list.clear();
        self.detail.clear();
        self.route = Route::Detail(id);

        FetchRequest::Detail {
            ticket: self.detail.begin(),
            id,
        }
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        self.notice = None;

        match command {
            Command::Quit => Outcome::Quit,
            Command::Empty => Outcome::Nothing,
            Command::Help => {
                self.notice = Some(HELP.to_string());
                Outcome::Render
            }
            Command::Invalid(input) => {
                self.notice = Some(f!("Unknown command: {input}. {HELP}"));
                Outcome::Render
            }
            Command::Show(id) => Outcome::Fetch(self.enter_detail(id)),
            Command::Back => match self.route {
                Route::Detail(_) => Outcome::Fetch(self.enter_list()),
                Route::List => Outcome::Nothing,
            },
            Command::More => {
                // The load-more action is only offered once the current batch is in.
                if self.route != Route::List || self.list.is_loading() {
                    return Outcome::Nothing;
                }

                self.limit = self.limit.load_more();
                Outcome::Fetch(FetchRequest::List {
                    ticket: self.list.begin(),
                    limit: self.limit,
                })
            }
        }
    }

    /// Apply a finished fetch. Returns whether the screen changed.
    pub fn deliver(&mut self, result: FetchResult) -> bool {
        match result {
            FetchResult::List(ticket, Ok(output)) => {
                self.list.complete(ticket, output) == Delivery::Applied
                    && self.route == Route::List
            }
            FetchResult::Detail(ticket, Ok(output)) => {
                self.detail.complete(ticket, output) == Delivery::Applied
                    && matches!(self.route, Route::Detail(_))
            }
            FetchResult::List(ticket, Err(err)) => {
                match self.list.fail(ticket) {
                    Delivery::Applied => log_fetch_error("list", &err),
                    Delivery::Stale => log::debug!("dropped stale list failure: {err}"),
                }
                false
            }
            FetchResult::Detail(ticket, Err(err)) => {
                match self.detail.fail(ticket) {
                    Delivery::Applied => log_fetch_error("detail", &err),
                    Delivery::Stale => log::debug!("dropped stale detail failure: {err}"),
                }
                false
            }
        }
    }

    fn list_body(&self) -> String {
        let mut body = format!("{}\n", "POKEMON LIST".bright_cyan().bold());

        match self.list.state() {
            ViewState::Loading { previous } => {
                if let Some(output) = previous {
                    body.push_str(&format_list_items(&output.items));
                }
                body.push_str("\nLoading...\n");
            }
            ViewState::Loaded(output) => {
                body.push_str(&format_list_items(&output.items));
                body.push_str(&format!(
                    "\n{} {}\n",
                    f!("{} shown.", output.count).bright_white(),
                    "Type `more` to load 20 more, or an ID to open it.".bright_black()
                ));
            }
        }

        body
    }

    fn detail_body(&self) -> String {
        match self.detail.state() {
            ViewState::Loading { .. } => "Loading...\n".to_string(),
            ViewState::Loaded(detail) => {
                let mut body = format!(
                    "{} {}\n\n",
                    f!("#{}", detail.id).bright_black(),
                    detail.name.to_uppercase().bright_cyan().bold()
                );
                body.push_str(&format_detail_body(detail));
                body.push_str(&format!(
                    "\n{}\n",
                    "Type `back` to return to the list.".bright_black()
                ));
                body
            }
        }
    }

    /// The full screen for the current route, chrome included
    pub fn screen(&self) -> String {
        let mut body = match self.route {
            Route::List => self.list_body(),
            Route::Detail(_) => self.detail_body(),
        };

        if let Some(notice) = &self.notice {
            body.push_str(&format!("\n{}\n", notice.yellow()));
        }

        render_page(NavItem::Pokemon, &body)
    }
}

/// Run one fetch request against the API
pub async fn execute(client: &PokeApiClient, request: FetchRequest) -> FetchResult {
    match request {
        FetchRequest::List { ticket, limit } => {
            FetchResult::List(ticket, list_data(client, limit).await)
        }
        FetchRequest::Detail { ticket, id } => {
            FetchResult::Detail(ticket, show_data(client, id).await)
        }
    }
}

fn spawn_fetch(
    client: &PokeApiClient,
    request: FetchRequest,
    tx: &async_channel::Sender<FetchResult>,
) {
    let client = client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = execute(&client, request).await;
        // A closed channel means the browse loop already exited.
        let _ = tx.send(result).await;
    });
}

fn draw(browser: &Browser) {
    if std::io::stdout().is_terminal() {
        print!("\x1B[2J\x1B[H");
    }
    println!("{}", browser.screen());
    print!("> ");
    // The prompt has no trailing newline.
    let _ = std::io::Write::flush(&mut std::io::stdout());
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    let client = PokeApiClient::from_global(&global)?;
    let (tx, rx) = async_channel::unbounded::<FetchResult>();
    let mut browser = Browser::new(ListLimit::starting_at(options.limit));

    if global.verbose {
        eprintln!("Browsing {} with {} Pokémon per page", client.base_url(), options.limit);
    }

    spawn_fetch(&client, browser.start(), &tx);
    draw(&browser);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match browser.handle(parse_command(&line)) {
                    Outcome::Quit => break,
                    Outcome::Fetch(request) => {
                        log::debug!("dispatching {request:?}");
                        spawn_fetch(&client, request, &tx);
                        draw(&browser);
                    }
                    Outcome::Render => draw(&browser),
                    Outcome::Nothing => {}
                }
            }
            Ok(result) = rx.recv() => {
                if browser.deliver(result) {
                    draw(&browser);
                }
            }
        }
    }

    println!();
    Ok(())
}
