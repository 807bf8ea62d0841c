// SPDX-License-Identifier: MPL-2.0
use dex_gallery::app::{paths, telemetry, GalleryApp};
use dex_gallery::application::gallery::{Gallery, GalleryState, Selection};
use dex_gallery::application::port::CatalogSource;
use dex_gallery::application::query::{FanOutFetcher, IdentifierSampler, Navigator};
use dex_gallery::config::{self, Config};
use dex_gallery::domain::record::{Ability, Record, RecordId};
use dex_gallery::error::Result;
use dex_gallery::infrastructure::{CachedCatalog, HttpCatalog};
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
Randomized creature gallery

USAGE:
  dex-gallery [OPTIONS]

OPTIONS:
  --config-dir DIR   Read settings.toml from DIR
  --count N          Records per batch (overrides [gallery] batch_size)
  --select ID        Open the detail view for ID
  --name NAME        Look up NAME and open its detail view
  -h, --help         Print this help
";

struct Flags {
    config_dir: Option<String>,
    count: Option<usize>,
    select: Option<RecordId>,
    name: Option<String>,
}

fn parse_flags(mut args: pico_args::Arguments) -> std::result::Result<Flags, pico_args::Error> {
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        count: args.opt_value_from_str("--count")?,
        select: args.opt_value_from_str("--select")?,
        name: args.opt_value_from_str("--name")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(flags)
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }
    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    telemetry::init_logging();
    paths::init_cli_overrides(flags.config_dir.clone());

    let (mut config, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(warning = %key, "settings file ignored, using defaults");
    }
    if let Some(count) = flags.count {
        config.gallery.batch_size = Some(count);
    }

    match run(&config, &flags).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "gallery could not start");
            ExitCode::FAILURE
        }
    }
}

/// Loads one batch and the requested selection. Returns `false` when the
/// batch came back empty.
async fn run(config: &Config, flags: &Flags) -> Result<bool> {
    let settings = config.catalog_settings();
    let catalog = Arc::new(CachedCatalog::new(
        HttpCatalog::new(&settings)?,
        settings.cache_capacity,
    ));

    let mut app = GalleryApp::new(
        Gallery::new(config.gallery_settings(), IdentifierSampler::from_entropy()),
        Arc::clone(&catalog),
        FanOutFetcher::new(config.fan_out_config()),
        Navigator::new(flags.select),
    );
    app.start();
    app.settle().await;
    print_gallery(app.state());

    if let Some(name) = &flags.name {
        match catalog.fetch_by_name(name).await {
            Ok(record) => {
                app.navigator().navigate_to(record.id());
                app.settle().await;
            }
            Err(failure) => println!("\n{failure}"),
        }
    }
    print_selection(app.state().selection());

    let stats = catalog.stats();
    tracing::debug!(hits = stats.hits, misses = stats.misses, "catalog cache");

    Ok(!app.state().is_batch_failed())
}

fn print_gallery(state: &GalleryState) {
    if let Some(err) = state.batch_error() {
        println!("Gallery unavailable: {err}");
        return;
    }

    println!(
        "Gallery ({} records, {} skipped)",
        state.records().len(),
        state.skipped_count()
    );
    for record in state.records() {
        println!(
            "  #{:>4}  {:<24} {}",
            record.id().get(),
            record.normalized_name(),
            record.category_label()
        );
    }
}

fn print_selection(selection: &Selection) {
    match selection {
        Selection::None => {}
        Selection::Pending(id) => println!("\n#{id} is still loading"),
        Selection::Failed(failure) => println!("\n{failure}"),
        Selection::Ready(record) => print_detail(record),
    }
}

fn print_detail(record: &Record) {
    let vitals = record.vitals();
    let abilities: Vec<&str> = record.abilities().iter().map(Ability::name).collect();

    println!("\n#{} {}", record.id(), record.normalized_name());
    println!("  Types:     {}", record.category_label());
    println!("  Abilities: {}", abilities.join(", "));
    println!(
        "  Height:    {:.1} m    Weight: {:.1} kg",
        f64::from(vitals.height) / 10.0,
        f64::from(vitals.weight) / 10.0
    );
    for stat in &vitals.stats {
        println!("  {:<16} {:>3}", stat.name(), stat.value());
    }
    if let Some(url) = record.image_url() {
        println!("  Image:     {url}");
    }
}
