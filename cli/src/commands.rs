use std::path::Path;

use tactidex_core::snapshot::set_stats;
use tactidex_core::{
    BytesSource, CommunityDragonClient, DataDragonClient, LoadState, SetViewStore,
    SnapshotOptions, TabView, ViewQuery,
};
use tactidex_core::query::item_recipe;
use tactidex_types::formatting::{clean_description, fallback_glyph, icon_url, strip_placeholders};
use tactidex_types::{Augment, CodexConfig, SetView};

/// Read `input`, or download the export when no file is given.
async fn document_bytes(config: &CodexConfig, input: Option<&Path>) -> Result<Vec<u8>, String> {
    match input {
        Some(path) => std::fs::read(path).map_err(|e| format!("{}: {e}", path.display())),
        None => {
            tracing::info!(url = %config.data_url, "Fetching export");
            CommunityDragonClient::from_config(config)
                .fetch_bytes()
                .await
                .map_err(|e| e.to_string())
        }
    }
}

async fn load_view(config: &CodexConfig, input: Option<&Path>) -> Result<std::sync::Arc<SetView>, String> {
    let bytes = document_bytes(config, input).await?;
    let store = SetViewStore::new(config.clone());
    match store.reload(&BytesSource(bytes)).await {
        LoadState::Ready(view) => Ok(view),
        LoadState::Error(message) => Err(message),
        LoadState::Loading => Err("data is still loading".to_string()),
    }
}

pub async fn fetch(config: &CodexConfig, out: &Path) -> Result<(), String> {
    let bytes = document_bytes(config, None).await?;
    let size = tactidex_core::write_raw(&bytes, out).map_err(|e| e.to_string())?;
    println!(
        "Saved {} ({:.2} MB)",
        out.display(),
        size as f64 / 1024.0 / 1024.0
    );

    // The raw file is saved; stats are informational only
    let doc = match tactidex_core::fetch::parse_document(&bytes) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "Saved document does not match the export schema, skipping stats");
            return Ok(());
        }
    };
    match set_stats(&doc, &SnapshotOptions::from(config)) {
        Some(stats) => println!(
            "Set {}: {} champions, {} traits, {} augments",
            config.target_set, stats.champions, stats.traits, stats.augments
        ),
        None => tracing::info!(set = config.target_set, "Target set not in document, skipping stats"),
    }
    Ok(())
}

pub async fn export(config: &CodexConfig, input: Option<&Path>, out_dir: &Path) -> Result<(), String> {
    let bytes = document_bytes(config, input).await?;
    let summary = tactidex_core::write_snapshot(&bytes, out_dir, &SnapshotOptions::from(config))
        .map_err(|e| e.to_string())?;

    for file in &summary.files {
        println!("  {}", file.display());
    }
    let count = |n: Option<usize>| n.map_or_else(|| "skipped".to_string(), |n| n.to_string());
    println!("Champions: {}", count(summary.champions));
    println!("Traits:    {}", count(summary.traits));
    println!("Augments:  {}", summary.augments);
    println!("Items:     {}", summary.items);
    Ok(())
}

pub async fn summary(config: &CodexConfig, input: Option<&Path>) -> Result<(), String> {
    let view = load_view(config, input).await?;
    print_totals(&view);
    Ok(())
}

fn print_totals(view: &SetView) {
    println!("{}", view.title());
    for tab in tactidex_core::Tab::ALL {
        println!("  {:<10} {}", tab.label(), tab.count(view));
    }
}

pub async fn list(
    config: &CodexConfig,
    input: Option<&Path>,
    query: &ViewQuery,
    icons: bool,
) -> Result<(), String> {
    let view = load_view(config, input).await?;
    let icon = |name: &str, path: &str| -> String {
        if !icons {
            return String::new();
        }
        match icon_url(&config.asset_base_url, path) {
            url if url.is_empty() => format!("  [{}]", fallback_glyph(name)),
            url => format!("  {url}"),
        }
    };

    println!("{} - {}", view.title(), query.tab);
    match query.apply(&view) {
        TabView::Champions(champions) => {
            for c in champions {
                println!("  {} {:<20} {}{}", c.cost, c.name, c.traits.join(", "), icon(&c.name, &c.icon));
            }
        }
        TabView::Traits(traits) => {
            for t in traits {
                let breakpoints: Vec<String> = t.effects.iter().map(|e| e.min_units.to_string()).collect();
                println!("  {:<20} ({}){}", t.name, breakpoints.join("/"), icon(&t.name, &t.icon));
                let desc = strip_placeholders(&t.desc);
                if !desc.is_empty() {
                    println!("      {desc}");
                }
            }
        }
        TabView::Items {
            components,
            completed,
        } => {
            println!("Components");
            for i in components {
                println!("  {}{}", i.name, icon(&i.name, &i.icon));
            }
            println!("Completed");
            for i in completed {
                let recipe: Vec<&str> = item_recipe(i, &view.items)
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect();
                println!("  {:<24} {}{}", i.name, recipe.join(" + "), icon(&i.name, &i.icon));
            }
        }
        TabView::Augments(sections) => {
            for (tier, augments) in sections {
                if augments.is_empty() {
                    continue;
                }
                println!("{tier} ({})", augments.len());
                for a in augments {
                    print_augment(a, &icon(&a.name, &a.icon));
                }
            }
        }
    }
    Ok(())
}

fn print_augment(augment: &Augment, icon: &str) {
    println!("  {}{icon}", augment.name);
    let desc = clean_description(&augment.desc, &augment.effects);
    if !desc.is_empty() {
        println!("      {desc}");
    }
}

pub async fn ddragon(config: &CodexConfig) -> Result<(), String> {
    let augments = DataDragonClient::from_config(config).fetch_augments().await;
    if augments.is_empty() {
        return Err("no augments returned by Data Dragon".to_string());
    }
    for a in &augments {
        print_augment(a, "");
    }
    println!("{} augments", augments.len());
    Ok(())
}

pub fn show_config(config: &CodexConfig, config_file: Option<&Path>) -> Result<(), String> {
    let path = tactidex_core::config::config_path(config_file).map_err(|e| e.to_string())?;
    println!("# {}", path.display());
    let rendered = toml::to_string_pretty(config).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}
