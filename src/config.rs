use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use deed_edit::CommandManager;
use deed_select::Classifier;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MapSection {
    pub width: usize,
    pub height: usize,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SelectionSection {
    pub border_thickness: f32,
}

impl Default for SelectionSection {
    fn default() -> Self {
        Self {
            border_thickness: Classifier::DEFAULT_BORDER,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    pub max_undo: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            max_undo: CommandManager::DEFAULT_MAX_UNDO,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub map: MapSection,
    pub selection: SelectionSection,
    pub history: HistorySection,
    pub catalog: CatalogSection,
}

impl HostConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    /// Missing file means defaults; a file that exists must parse.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            log::warn!("config {} not found; using defaults", path.display());
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&s)?;
        log::info!("config loaded from {}", path.display());
        Ok(cfg)
    }

    /// Classifier for the configured border width, or the default one if the
    /// configured width is unusable.
    pub fn classifier(&self) -> Classifier {
        match Classifier::with_border(self.selection.border_thickness) {
            Some(c) => c,
            None => {
                log::warn!(
                    "border_thickness {} outside (0, 0.5); using {}",
                    self.selection.border_thickness,
                    Classifier::DEFAULT_BORDER
                );
                Classifier::default()
            }
        }
    }
}
