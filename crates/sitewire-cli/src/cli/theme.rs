//! `sitewire theme` -- show or toggle the persisted theme choice.
//!
//! Toggling goes through the same dark-mode widget the page uses, bound
//! against a synthetic page, so the persisted value and the class/icon
//! behavior stay in lockstep with the real layout.

use std::path::Path;

use clap::Subcommand;
use console::style;
use serde_json::json;
use sitewire_core::layout::DarkMode;
use sitewire_core::page::{Element, Page};
use sitewire_core::store::{StateStore, THEME_KEY};
use sitewire_infra::store::FileLocalStore;

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme.
    Show,
    /// Flip between dark and light.
    Toggle,
}

pub fn run(data_dir: &Path, action: ThemeCommand, json_output: bool) -> anyhow::Result<()> {
    let store = FileLocalStore::new(data_dir);

    let theme = match action {
        ThemeCommand::Show => store
            .get(THEME_KEY)?
            .unwrap_or_else(|| "light".to_string()),
        ThemeCommand::Toggle => {
            let mut page = Page::new();
            page.insert(Element::with_id("button", "nav-dark-toggle"));
            page.insert(Element::with_id("i", "nav-dark-icon"));

            let widget =
                DarkMode::bind(&mut page, &store, "nav-dark-toggle", "nav-dark-icon")
                    .ok_or_else(|| anyhow::anyhow!("failed to bind dark-mode widget"))?;
            widget.toggle(&mut page);

            if widget.is_dark(&page) { "dark" } else { "light" }.to_string()
        }
    };

    if json_output {
        println!("{}", json!({ "theme": theme }));
    } else {
        println!("theme: {}", style(&theme).bold());
    }

    Ok(())
}
