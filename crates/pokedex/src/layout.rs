//! Static chrome drawn around every interactive view.

use colored::Colorize;

pub const APP_TITLE: &str = "Pokédex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Pokemon,
    AboutMe,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Home, NavItem::Pokemon, NavItem::AboutMe];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Pokemon => "Pokemon",
            NavItem::AboutMe => "About Me",
        }
    }
}

/// Navigation bar with the active entry highlighted
pub fn render_nav(active: NavItem) -> String {
    NavItem::ALL
        .iter()
        .map(|item| {
            if *item == active {
                item.label().bright_cyan().bold().underline().to_string()
            } else {
                item.label().bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Wrap a view body in the title bar and navigation
pub fn render_page(active: NavItem, body: &str) -> String {
    let mut page = String::new();

    page.push_str(&format!("{}\n", APP_TITLE.bright_cyan().bold()));
    page.push_str(&format!("{}\n", render_nav(active)));
    page.push_str(&format!("{}\n", "-".repeat(80).bright_black()));
    page.push_str(body);
    if !body.ends_with('\n') {
        page.push('\n');
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nav_lists_every_entry() {
        let nav = render_nav(NavItem::Pokemon);

        assert!(nav.contains("Home"));
        assert!(nav.contains("Pokemon"));
        assert!(nav.contains("About Me"));
    }

    #[test]
    fn test_render_page_wraps_body() {
        let page = render_page(NavItem::Pokemon, "body text");

        assert!(page.contains(APP_TITLE));
        assert!(page.contains("body text\n"));
        assert!(page.find(APP_TITLE).unwrap() < page.find("body text").unwrap());
    }
}
