use std::collections::HashMap;

use serde::Deserialize;

// --- Config ---

#[derive(Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub walls: HashMap<String, WallDef>,
    #[serde(default)]
    pub grounds: HashMap<String, GroundDef>,
    #[serde(default)]
    pub caves: HashMap<String, CaveDef>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WallDef {
    pub name: String,
    pub short_name: Option<String>,
    #[serde(default = "default_true")]
    pub house_wall: bool,
    #[serde(default)]
    pub arch: bool,
    #[serde(default)]
    pub fence: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GroundDef {
    pub name: String,
    pub short_name: Option<String>,
    pub texture: Option<String>,
    #[serde(default)]
    pub diagonal: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CaveDef {
    pub name: String,
    pub short_name: Option<String>,
    pub texture: Option<String>,
    #[serde(default)]
    pub wall: bool,
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub entrance: bool,
}

fn default_true() -> bool {
    true
}
