mod camera;
mod config;
mod event;
mod script;
mod session;
mod tool;
mod tooltip;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use deed_catalog::Catalog;
use deed_edit::CommandManager;
use deed_geom::Vec3;
use deed_map::Map;
use deed_select::{MapBounds, resolve_address};

use crate::camera::WurmianCamera;
use crate::config::HostConfig;
use crate::event::Event;
use crate::script::Script;
use crate::session::Session;
use crate::tool::{Tool, ToolKind};

/// Headless DeedPlanner host: builds a map and runs probes or scripted edits.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host configuration file.
    #[arg(long, value_name = "FILE", default_value = "deedplanner.toml")]
    config: PathBuf,
    /// Map width in tiles, overrides the config.
    #[arg(long, value_name = "TILES")]
    width: Option<usize>,
    /// Map height in tiles, overrides the config.
    #[arg(long, value_name = "TILES")]
    height: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a world point and print the hit, element, and tooltip.
    #[command(allow_negative_numbers = true)]
    Probe {
        x: f32,
        z: f32,
        #[arg(long, value_enum, default_value_t = ToolKind::Height)]
        tool: ToolKind,
        #[arg(long, default_value_t = 0)]
        floor: i32,
    },
    /// First-person eye height at a world point.
    #[command(allow_negative_numbers = true)]
    EyeHeight {
        x: f32,
        z: f32,
        #[arg(long, default_value_t = 0)]
        floor: i32,
    },
    /// Replay a TOML script of input steps.
    Run { script: PathBuf },
}

fn tool_for(kind: ToolKind) -> Tool {
    match kind {
        ToolKind::Ground => Tool::Ground { ground: None },
        ToolKind::Height => Tool::default(),
        ToolKind::Walls => Tool::Walls {
            wall: None,
            reversed: false,
        },
        ToolKind::Caves => Tool::Caves { cave: None },
    }
}

fn build_session(cli: &Cli) -> Result<Session, Box<dyn Error>> {
    let cfg = HostConfig::load(&cli.config)?;
    let catalog = match &cfg.catalog.path {
        Some(path) => {
            let catalog = Catalog::from_path(path)?;
            log::info!(
                "catalog {}: {} walls, {} grounds, {} caves",
                path.display(),
                catalog.walls.len(),
                catalog.grounds.len(),
                catalog.caves.len()
            );
            catalog
        }
        None => Catalog::new(),
    };
    let width = cli.width.unwrap_or(cfg.map.width);
    let height = cli.height.unwrap_or(cfg.map.height);
    let map = Map::new(width, height)?;
    log::info!("map {}x{}", width, height);
    Ok(Session::new(
        map,
        catalog,
        cfg.classifier(),
        CommandManager::new(cfg.history.max_undo),
    ))
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut session = build_session(&cli)?;
    match cli.command {
        Command::Probe { x, z, tool, floor } => {
            let point = Vec3::on_plane(x, z);
            session.handle(Event::ToolSelected { tool: tool_for(tool) })?;
            session.handle(Event::CameraFloorChanged { floor })?;
            session.handle(Event::PointerMoved { point, floor })?;
            let Some(hover) = session.hover() else {
                return Ok(());
            };
            println!("hit: {:?} ({}, {})", hover.hit.target, hover.hit.x, hover.hit.y);
            let editing = session.tool().editing_floor(session.camera_floor());
            match resolve_address(hover.hit, editing) {
                Some(addr) => println!("element: {:?}", addr),
                None => println!("element: none"),
            }
            if MapBounds::of(session.map()).contains_point(point) {
                println!("{}", session.tooltip()?);
            }
        }
        Command::EyeHeight { x, z, floor } => {
            session.handle(Event::CameraFloorChanged { floor })?;
            let mut cam = WurmianCamera::new(Vec3::on_plane(x, z));
            session.settle_camera(&mut cam)?;
            println!("{:.3}", cam.position.y);
        }
        Command::Run { script } => {
            let script = Script::from_path(&script)?;
            let events = script.events(session.catalog())?;
            log::info!("running {} step(s)", events.len());
            for ev in events {
                session.handle(ev)?;
                session.handle(Event::Tick)?;
            }
            log::info!("script finished at tick {}", session.tick());
            let history = session.commands();
            let stats = history.revisions().stats();
            println!(
                "map {}x{}, undo {}, redo {}, revision {} over {} tile(s)",
                session.map().width(),
                session.map().height(),
                history.undo_len(),
                history.redo_len(),
                stats.counter,
                stats.rev_entries
            );
            let tip = session.tooltip()?;
            if !tip.is_empty() {
                println!("{}", tip);
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
