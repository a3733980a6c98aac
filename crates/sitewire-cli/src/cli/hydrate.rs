//! `sitewire hydrate` -- run the startup hydration sequence against the
//! configured site and report the result per container.

use console::style;
use serde_json::json;
use sitewire_core::fragment::FragmentLoader;
use sitewire_core::layout;
use sitewire_core::page::{Element, Page};
use sitewire_infra::http::HttpFragmentFetcher;
use sitewire_types::config::SiteConfig;

pub async fn run(config: &SiteConfig, json_output: bool) -> anyhow::Result<()> {
    let mut page = Page::new();
    for mount in &config.fragments {
        page.insert(Element::with_id("div", &mount.container));
    }
    for strip in &config.logo_strips {
        page.insert(Element::with_id("div", &strip.container));
    }

    let loader = FragmentLoader::new(HttpFragmentFetcher::new(&config.base_url));
    layout::hydrate(&loader, &mut page, &config.fragments, &config.logo_strips).await;

    if json_output {
        let fragments: Vec<_> = config
            .fragments
            .iter()
            .map(|mount| {
                let bytes = page
                    .by_id(&mount.container)
                    .map(|el| el.inner_html().len())
                    .unwrap_or(0);
                json!({
                    "container": mount.container,
                    "path": mount.path,
                    "hydrated": bytes > 0,
                    "bytes": bytes,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "fragments": fragments }))?);
        return Ok(());
    }

    for mount in &config.fragments {
        let bytes = page
            .by_id(&mount.container)
            .map(|el| el.inner_html().len())
            .unwrap_or(0);
        if bytes > 0 {
            println!(
                "{} {} ({} bytes from {})",
                style("hydrated").green(),
                mount.container,
                bytes,
                mount.path
            );
        } else {
            println!(
                "{} {} (left empty, see warnings)",
                style("skipped").yellow(),
                mount.container
            );
        }
    }

    for strip in &config.logo_strips {
        let logos = page
            .by_id(&strip.container)
            .map(|el| el.children().len())
            .unwrap_or(0);
        println!("{} {} ({logos} logos)", style("rendered").green(), strip.container);
    }

    Ok(())
}
