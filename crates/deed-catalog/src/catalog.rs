use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use super::config::{CatalogConfig, CaveDef, GroundDef, WallDef};
use super::types::{CatalogId, CaveId, GroundId, WallId};

#[derive(Clone, Debug)]
pub struct WallData {
    pub id: WallId,
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub house_wall: bool,
    pub arch: bool,
    pub fence: bool,
}

#[derive(Clone, Debug)]
pub struct GroundData {
    pub id: GroundId,
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub texture: Option<PathBuf>,
    pub diagonal: bool,
}

#[derive(Clone, Debug)]
pub struct CaveData {
    pub id: CaveId,
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub texture: Option<PathBuf>,
    pub wall: bool,
    pub show: bool,
    pub entrance: bool,
}

/// Entries of one kind, addressable by id or by key.
#[derive(Clone, Debug)]
pub struct Table<I, T> {
    entries: Vec<T>,
    by_key: HashMap<String, I>,
}

impl<I: CatalogId, T> Default for Table<I, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<I: CatalogId, T> Table<I, T> {
    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        self.entries.get(id.index())
    }

    pub fn id_by_key(&self, key: &str) -> Option<I> {
        self.by_key.get(key).copied()
    }

    pub fn by_key(&self, key: &str) -> Option<&T> {
        self.id_by_key(key).and_then(|id| self.get(id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Build from a key→definition map. Keys are sorted first so ids are stable
    /// regardless of `HashMap` iteration order.
    fn build<D>(
        kind: &str,
        defs: HashMap<String, D>,
        short_name_of: impl Fn(&D) -> Option<&str>,
        make: impl Fn(I, String, String, D) -> T,
    ) -> Result<Self, Box<dyn Error>> {
        let mut table = Self::default();
        let mut seen_short: HashMap<String, String> = HashMap::new();
        let mut defs: Vec<(String, D)> = defs.into_iter().collect();
        defs.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, def) in defs {
            let short = short_name_of(&def).unwrap_or(&key).to_string();
            if let Some(prev) = seen_short.insert(short.clone(), key.clone()) {
                return Err(format!(
                    "{} short name '{}' used by both '{}' and '{}'",
                    kind, short, prev, key
                )
                .into());
            }
            let id = I::from_index(table.entries.len()).ok_or_else(|| {
                format!("too many {} entries: '{}' does not fit in the id range", kind, key)
            })?;
            table.by_key.insert(key.clone(), id);
            table.entries.push(make(id, key, short, def));
        }
        Ok(table)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Catalog {
    pub walls: Table<WallId, WallData>,
    pub grounds: Table<GroundId, GroundData>,
    pub caves: Table<CaveId, CaveData>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: CatalogConfig) -> Result<Self, Box<dyn Error>> {
        let walls = Table::build(
            "wall",
            cfg.walls,
            |d: &WallDef| d.short_name.as_deref(),
            |id, key, short_name, d| WallData {
                id,
                key,
                name: d.name,
                short_name,
                house_wall: d.house_wall,
                arch: d.arch,
                fence: d.fence,
            },
        )?;
        let grounds = Table::build(
            "ground",
            cfg.grounds,
            |d: &GroundDef| d.short_name.as_deref(),
            |id, key, short_name, d| GroundData {
                id,
                key,
                name: d.name,
                short_name,
                texture: d.texture.map(PathBuf::from),
                diagonal: d.diagonal,
            },
        )?;
        let caves = Table::build(
            "cave",
            cfg.caves,
            |d: &CaveDef| d.short_name.as_deref(),
            |id, key, short_name, d| CaveData {
                id,
                key,
                name: d.name,
                short_name,
                texture: d.texture.map(PathBuf::from),
                wall: d.wall,
                show: d.show,
                entrance: d.entrance,
            },
        )?;
        if walls.is_empty() && grounds.is_empty() {
            log::warn!("catalog has no walls and no grounds");
        }
        log::debug!(
            "catalog loaded: {} walls, {} grounds, {} caves",
            walls.len(),
            grounds.len(),
            caves.len()
        );
        Ok(Catalog {
            walls,
            grounds,
            caves,
        })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn wall_name(&self, id: WallId) -> Option<&str> {
        self.walls.get(id).map(|w| w.name.as_str())
    }

    pub fn ground_name(&self, id: GroundId) -> Option<&str> {
        self.grounds.get(id).map(|g| g.name.as_str())
    }
}
