//! Scenario configuration.
//!
//! Settings are layered with the `config` crate: the default scenario file, an
//! optional scenario file given on the command line, then `VANTAGE_*`
//! environment variables (`__` separates nested keys, as in
//! `VANTAGE_PROBE__COLLISION_RADIUS=300`).

use std::collections::HashSet;

use anyhow::{Context, ensure};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};
use vantage_geometry::{Point, Rect};
use vantage_kinematics::Motion;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// The playing field, spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArenaSettings {
    pub width: f64,
    pub height: f64,
}

impl ArenaSettings {
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.width, 0.0, self.height)
    }
}

/// Query parameters shared by every check.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeSettings {
    /// Distance at which two units are considered colliding.
    pub collision_radius: f64,
    /// Time over which unit trajectories are built.
    #[serde(default = "default_horizon")]
    pub horizon: f64,
}

fn default_horizon() -> f64 {
    1.0
}

/// A moving unit, written flat as `{ name, x, y, angle, speed, acceleration }`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitSettings {
    pub name: String,
    #[serde(flatten)]
    pub position: Point,
    #[serde(flatten)]
    pub motion: Motion,
}

/// A static obstacle, written flat as `{ name, xf, xt, yf, yt }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObstacleSettings {
    pub name: String,
    #[serde(flatten)]
    pub bounds: Rect,
}

/// The whole scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub arena: ArenaSettings,
    pub probe: ProbeSettings,
    #[serde(default)]
    pub units: Vec<UnitSettings>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSettings>,
}

impl Settings {
    /// Snap positions to the grid, order obstacle bounds, and check the
    /// invariants the evaluation relies on.
    fn normalized(mut self) -> anyhow::Result<Self> {
        ensure!(
            self.arena.width > 0.0 && self.arena.height > 0.0,
            "arena dimensions must be positive, got {}x{}",
            self.arena.width,
            self.arena.height
        );
        ensure!(
            self.probe.collision_radius >= 0.0,
            "collision radius must be non-negative, got {}",
            self.probe.collision_radius
        );
        ensure!(self.probe.horizon > 0.0, "horizon must be positive, got {}", self.probe.horizon);

        let mut names = HashSet::new();
        for unit in &mut self.units {
            ensure!(names.insert(unit.name.clone()), "duplicate unit name {:?}", unit.name);
            unit.position = Point::new(unit.position.x, unit.position.y);
        }
        for obstacle in &mut self.obstacles {
            let b = obstacle.bounds;
            obstacle.bounds = Rect::new(b.xf, b.xt, b.yf, b.yt);
        }
        Ok(self)
    }
}

/// Load the scenario from the default file, or from `path` when given.
pub fn load_settings(path: Option<&str>) -> anyhow::Result<Settings> {
    let builder = match path {
        Some(path) => {
            info!("Attempting to load scenario from {}", path);
            Config::builder()
                .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
                .add_source(File::new(path, FileFormat::Toml).required(true))
        }
        None => {
            info!("Attempting to load scenario from {}", DEFAULT_CONFIG_PATH);
            Config::builder().add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        }
    };

    match settings_from(builder, environment()) {
        Ok(settings) => {
            info!(
                units = settings.units.len(),
                obstacles = settings.obstacles.len(),
                "Successfully loaded scenario"
            );
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load scenario: {:#}", e);
            Err(e)
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("VANTAGE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn settings_from(builder: ConfigBuilder<DefaultState>, environment: Environment) -> anyhow::Result<Settings> {
    let settings: Settings = builder
        .add_source(environment)
        .build()
        .context("failed to read scenario sources")?
        .try_deserialize()
        .context("failed to parse scenario")?;
    settings.normalized().context("invalid scenario")
}
