//! Kommandozeilen-Werkzeug zur Layer-Komposition der Infrastruktur-Karte.
//!
//! - `style`: Karten-Style als JSON für die konfigurierte Legende
//! - `layers [<modus>]`: alle Layer-Namen (optional nur eines Anzeigemodus)
//! - `switch <modus>`: Moduswechsel gegen eine In-Memory-Oberfläche, gibt die Aufrufe aus
//! - `init-config`: schreibt die aktuellen Optionen nach `railway_map_layers.toml`

use anyhow::{bail, Context, Result};
use railway_map_layers::layers::{all_layers, layers_for_display_mode};
use railway_map_layers::{
    build_map_style, switch_display_mode, DisplayMode, InMemorySurface, MapLayerOptions,
};

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "railway-map-layers v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = MapLayerOptions::config_path();
    let options = MapLayerOptions::load_from_file(&config_path);
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("style") => print_style(&options),
        Some("layers") => print_layers(args.get(1).map(String::as_str)),
        Some("switch") => {
            let Some(mode) = args.get(1) else {
                bail!("Aufruf: railway-map-layers switch <node|element|map>");
            };
            print_switch(&options, mode)
        }
        Some("init-config") => options.save_to_file(&config_path),
        Some(other) => bail!(
            "Unbekannter Befehl '{}' (style, layers, switch, init-config)",
            other
        ),
    }
}

fn parse_display_mode(value: &str) -> Result<DisplayMode> {
    value
        .parse()
        .with_context(|| format!("Ungültiger Anzeigemodus: {}", value))
}

fn print_style(options: &MapLayerOptions) -> Result<()> {
    let style = build_map_style(&options.initial_legend_controls(), options);
    println!("{}", style.to_json_pretty()?);
    Ok(())
}

fn print_layers(mode: Option<&str>) -> Result<()> {
    let layers: Vec<String> = match mode {
        Some(mode) => layers_for_display_mode(parse_display_mode(mode)?).collect(),
        None => all_layers().collect(),
    };
    for layer in layers {
        println!("{layer}");
    }
    Ok(())
}

fn print_switch(options: &MapLayerOptions, mode: &str) -> Result<()> {
    let display_mode = parse_display_mode(mode)?;
    let mut controls = options.initial_legend_controls();
    let mut surface = InMemorySurface::from_style(&build_map_style(&controls, options));

    switch_display_mode(&mut surface, &mut controls, display_mode)
        .context("Moduswechsel vom Renderer abgelehnt")?;

    for call in surface.calls() {
        println!("{} {}", call.layer, call.visibility);
    }
    log::info!(
        "{} von {} Layern sichtbar nach Wechsel zu '{}'",
        surface.visible_layers().count(),
        surface.layer_count(),
        display_mode
    );
    Ok(())
}
