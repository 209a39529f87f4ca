//! Orrery CLI
//!
//! Inspect the body catalog and drive the scene and camera headlessly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use orrery_3d::catalog::{self, CelestialBody};
use orrery_3d::info::{self, DataMode, InfoPanel};
use orrery_3d::prelude::*;
use orrery_3d::texture::DEFAULT_MAX_TEXTURE_SIZE;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Solar System scene and fly-to camera, headless", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./orrery.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the render scale preset
    #[arg(long, global = true, value_enum)]
    scale: Option<ScaleArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bodies in the scene
    Catalog {
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Show the information panel of a body
    Info {
        /// Body name (case-insensitive)
        body: String,

        /// Units for sizes and distances
        #[arg(short, long, value_enum, default_value = "real")]
        mode: ModeArg,

        #[arg(long)]
        json: bool,
    },

    /// Simulate fly-to transitions through a sequence of bodies
    Fly {
        /// Bodies to visit in order
        #[arg(required = true)]
        bodies: Vec<String>,

        /// Simulation frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Seconds spent on each body before requesting the next
        #[arg(long, default_value = "1.6")]
        hold: f32,

        /// Report every Nth frame
        #[arg(long, default_value = "6")]
        every: u32,

        /// Let the solar frame drift through space
        #[arg(long)]
        moving: bool,

        /// Advance planets along their orbits
        #[arg(long)]
        planets_moving: bool,

        /// Turn auto-follow back on after the last flight
        #[arg(long)]
        follow: bool,

        /// Print one JSON object per frame line
        #[arg(long)]
        json: bool,
    },

    /// Resolve every texture against an asset directory
    Textures {
        /// Asset root (defaults to the configured one)
        dir: Option<PathBuf>,

        /// Largest allowed texture dimension
        #[arg(long)]
        max_size: Option<u32>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    Didactic,
    Real,
    Visual,
}

impl From<ScaleArg> for ScalePreset {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Didactic => ScalePreset::Didactic,
            ScaleArg::Real => ScalePreset::Real,
            ScaleArg::Visual => ScalePreset::Visual,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Real,
    Simple,
}

impl From<ModeArg> for DataMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Real => DataMode::Real,
            ModeArg::Simple => DataMode::Simple,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(scale) = cli.scale {
        config.scene.scale = scale.into();
    }

    match cli.command {
        Commands::Catalog { json } => cmd_catalog(&config, json),

        Commands::Info { body, mode, json } => cmd_info(&body, mode.into(), json),

        Commands::Fly {
            bodies,
            fps,
            hold,
            every,
            moving,
            planets_moving,
            follow,
            json,
        } => {
            config.motion.moving |= moving;
            config.motion.planets_moving |= planets_moving;
            let options = FlyOptions {
                fps,
                hold,
                every,
                follow,
                json,
            };
            cmd_fly(&config, &bodies, &options)
        }

        Commands::Textures { dir, max_size } => cmd_textures(&config, dir, max_size),

        Commands::Config => cmd_config(&config),
    }
}

fn lookup(name: &str) -> Result<&'static CelestialBody> {
    catalog::lookup(name).with_context(|| {
        let known: Vec<_> = catalog::catalog().iter().map(|b| b.name()).collect();
        format!("Cannot focus '{}'. Known bodies: {}", name, known.join(", "))
    })
}

#[derive(Serialize)]
struct CatalogRow {
    name: &'static str,
    kind: BodyKind,
    classification: &'static str,
    radius_km: f32,
    orbit_au: Option<f32>,
    scene_radius: f32,
    scene_orbit: Option<f32>,
}

fn cmd_catalog(config: &OrreryConfig, json: bool) -> Result<()> {
    let scene = SolarScene::new(config)?;

    let rows: Vec<CatalogRow> = catalog::catalog()
        .iter()
        .map(|body| CatalogRow {
            name: body.name(),
            kind: body.kind(),
            classification: body.facts().classification,
            radius_km: body.facts().radius_km,
            orbit_au: body.orbit_au(),
            scene_radius: scene.approx_radius(body.name()),
            scene_orbit: scene.orbit_radius(body.name()).filter(|r| *r > 0.0),
        })
        .collect();

    if json {
        for row in &rows {
            println!("{}", serde_json::to_string(row)?);
        }
        return Ok(());
    }

    println!("Scale: {}", scene.scale().preset.name());
    println!(
        "{:<8} {:<7} {:<28} {:>10} {:>7} {:>8} {:>8}",
        "Name", "Kind", "Classification", "Radius km", "AU", "Scene r", "Orbit"
    );
    for row in &rows {
        println!(
            "{:<8} {:<7} {:<28} {:>10} {:>7} {:>8.3} {:>8}",
            row.name,
            format!("{:?}", row.kind),
            row.classification,
            info::format_thousands(row.radius_km.round() as u64),
            row.orbit_au.map(|au| format!("{au:.2}")).unwrap_or_default(),
            row.scene_radius,
            row.scene_orbit.map(|r| format!("{r:.2}")).unwrap_or_default(),
        );
    }

    let (size_km, dist_km) = info::km_per_scene_unit(scene.scale());
    println!();
    println!("1 unit (size)     ≈ {} km", info::format_thousands(size_km.round() as u64));
    println!("1 unit (distance) ≈ {} km", info::format_thousands(dist_km.round() as u64));

    println!();
    println!("Gaps between orbits:");
    for gap in info::orbit_gaps(scene.scale()) {
        println!(
            "  {} -> {}: {:.2} AU, {} km, {:.2} u",
            gap.from,
            gap.to,
            gap.au,
            info::format_thousands(gap.km.round() as u64),
            gap.scene
        );
    }

    Ok(())
}

fn cmd_info(name: &str, mode: DataMode, json: bool) -> Result<()> {
    let panel = InfoPanel::new(lookup(name)?, mode);
    if json {
        println!("{}", serde_json::to_string_pretty(&panel)?);
    } else {
        print!("{panel}");
    }
    Ok(())
}

struct FlyOptions {
    fps: u32,
    hold: f32,
    every: u32,
    follow: bool,
    json: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    time: f32,
    focus: &'a str,
    state: CameraState,
    progress: Option<f32>,
    auto_follow: bool,
    camera: Vec3,
    target: Vec3,
}

fn cmd_fly(config: &OrreryConfig, bodies: &[String], options: &FlyOptions) -> Result<()> {
    if options.fps == 0 {
        anyhow::bail!("--fps must be positive");
    }
    if !(options.hold > 0.0) {
        anyhow::bail!("--hold must be positive");
    }

    let names = bodies
        .iter()
        .map(|b| lookup(b).map(|body| body.name()))
        .collect::<Result<Vec<_>>>()?;

    let mut scene = SolarScene::new(config)?;
    let mut session = CameraSession::new(&config.camera);
    let dt = 1.0 / options.fps as f32;
    let frames_per_body = (options.hold / dt).ceil().max(1.0) as u64;
    let every = options.every.max(1) as u64;
    let mut frame = 0u64;

    info!(
        "Simulating {} flights at {} fps, {:.2}s each",
        names.len(),
        options.fps,
        options.hold
    );

    for (i, name) in names.iter().enumerate() {
        if session.state() == CameraState::Flying {
            warn!("Interrupting flight before arrival to fly to {}", name);
        }
        scene.select(Some(*name));
        if !session.request_focus(name, &scene) {
            warn!("{} is not in the scene", name);
            continue;
        }

        let last = i + 1 == names.len();
        if last && options.follow {
            session.set_auto_follow(true);
        }

        for step in 0..frames_per_body {
            scene.update(dt);
            let state = session.tick(dt, scene.reference_frame());
            frame += 1;

            if step % every == 0 || step + 1 == frames_per_body {
                let record = FrameRecord {
                    frame,
                    time: scene.elapsed(),
                    focus: name,
                    state,
                    progress: session.plan().filter(|p| p.active).map(|p| p.t),
                    auto_follow: session.auto_follow(),
                    camera: session.camera(),
                    target: session.target(),
                };
                print_record(&record, options.json)?;
            }
        }
    }

    Ok(())
}

fn print_record(record: &FrameRecord<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(record)?);
        return Ok(());
    }

    let progress = record
        .progress
        .map(|t| format!("{:>5.1}%", t * 100.0))
        .unwrap_or_else(|| "     -".to_string());
    println!(
        "{:>6} {:>7.3}s {:<8} {:<6} {} camera ({:>8.3}, {:>8.3}, {:>8.3}) target ({:>8.3}, {:>8.3}, {:>8.3}){}",
        record.frame,
        record.time,
        record.focus,
        format!("{:?}", record.state),
        progress,
        record.camera.x,
        record.camera.y,
        record.camera.z,
        record.target.x,
        record.target.y,
        record.target.z,
        if record.auto_follow { " follow" } else { "" },
    );
    Ok(())
}

fn cmd_textures(config: &OrreryConfig, dir: Option<PathBuf>, max_size: Option<u32>) -> Result<()> {
    let root = dir.unwrap_or_else(|| PathBuf::from(&config.textures.asset_root));
    if !root.is_dir() {
        warn!("Asset root {} does not exist; every texture will fall back", root.display());
    }

    let max_size = max_size.unwrap_or(config.textures.max_size);
    if max_size == 0 {
        anyhow::bail!("--max-size must be positive (default {})", DEFAULT_MAX_TEXTURE_SIZE);
    }

    let resolver = TextureResolver::new(FsTextureSource::new(&root)).with_max_size(max_size);
    info!("Resolving textures under {}", root.display());

    let mut resolved = 0;
    for key in TextureKey::all() {
        match resolver.surface(*key) {
            Surface::Textured(tex) => {
                resolved += 1;
                let scaled = if tex.was_downscaled() {
                    format!(" -> {}x{}", tex.size.0, tex.size.1)
                } else {
                    String::new()
                };
                println!(
                    "{:<8} {} ({}x{}{}){}",
                    format!("{key:?}"),
                    tex.location,
                    tex.source_size.0,
                    tex.source_size.1,
                    scaled,
                    if tex.mipmaps { " mipmapped" } else { "" },
                );
            }
            Surface::Flat(color) => {
                println!("{:<8} fallback {}", format!("{key:?}"), color.to_hex_string());
            }
        }
    }

    info!("{} of {} textures resolved", resolved, TextureKey::all().len());
    Ok(())
}

fn cmd_config(config: &OrreryConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
