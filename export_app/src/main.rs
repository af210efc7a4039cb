//! OMI physics export tool
//!
//! Loads a scene description, runs it through the physics export hooks and
//! prints the glTF nodes and extensions the hooks produced.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use omi_physics::foundation::logging;
use omi_physics::prelude::*;

const DEFAULT_CONFIG_PATH: &str = "omi_export.toml";

fn build_cli() -> Command {
    Command::new("omi_export")
        .about("Exports rigid-body physics from a scene description as OMI glTF extensions")
        .arg(
            Arg::new("scene")
                .value_name("SCENE")
                .help("Scene description file (.toml or .ron)")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Exporter configuration file (.toml or .ron)")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write JSON to a file instead of stdout"),
        )
        .arg(
            Arg::new("legacy")
                .long("legacy")
                .help("Use the deprecated OMI_collider extension")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("disable")
                .long("disable")
                .help("Export without physics extensions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("trigger-property")
                .short('t')
                .long("trigger-property")
                .value_name("NAME")
                .help("Custom property that marks trigger volumes"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter (error, warn, info, debug, trace)"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Write compact instead of pretty-printed JSON")
                .action(ArgAction::SetTrue),
        )
}

/// Configuration after command line overrides, and where it came from
struct ResolvedConfig {
    config: ExporterConfig,
    path: PathBuf,
    from_file: bool,
}

impl ResolvedConfig {
    /// Report the configuration source once the logger is running
    fn log_source(&self) {
        if self.from_file {
            log::info!("Loaded configuration from {}", self.path.display());
        } else {
            log::info!("No configuration at {}, using defaults", self.path.display());
        }
    }
}

/// Load the config file and apply command line overrides
fn resolve_config(matches: &clap::ArgMatches) -> Result<ResolvedConfig> {
    let path = matches
        .get_one::<String>("config")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let from_file = path.exists();
    let mut config = ExporterConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;

    if let Some(level) = matches.get_one::<String>("log-level") {
        config = config.with_log_level(level.as_str());
    }
    if matches.get_flag("legacy") {
        config.physics.use_legacy_collider_naming = true;
    }
    if matches.get_flag("disable") {
        config.physics.enabled = false;
    }
    if let Some(name) = matches.get_one::<String>("trigger-property") {
        config.physics.trigger_property_name.clone_from(name);
    }
    if matches.get_flag("compact") {
        config.pretty_output = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(ResolvedConfig {
        config,
        path,
        from_file,
    })
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let resolved = resolve_config(&matches)?;
    logging::init_with_level(&resolved.config.log_level);
    resolved.log_source();
    let config = resolved.config;

    let scene_path = matches
        .get_one::<String>("scene")
        .map(PathBuf::from)
        .context("Missing scene argument")?;
    let scene = Scene::load(&scene_path)
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;
    log::info!(
        "Exporting {} objects ({} with rigid bodies) from {}",
        scene.objects.len(),
        scene.rigid_body_count(),
        scene_path.display()
    );

    let session = PhysicsExportSession::new(config.physics.clone());
    let output = ExportPipeline::new().run(&scene, session);
    for failure in &output.failures {
        log::warn!("{}: {}", failure.node, failure.error);
    }

    let json = output.to_json();
    let rendered = if config.pretty_output {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, rendered).with_context(|| format!("Failed to write {path}"))?;
            log::info!("Wrote {}", path);
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
