use serde::Deserialize;
use std::fs;

use crate::maze::Side;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Deserialize)]
pub struct MazeConfig {
    /// Boundary sides the two entrances are punched through.
    #[serde(default = "default_entrance_sides")]
    pub entrance_sides: [Side; 2],
}

#[derive(Debug, Deserialize)]
pub struct FilesConfig {
    /// Save path used when the save prompt is left empty.
    #[serde(default = "default_save_path")]
    pub default_save_path: String,
}

// Default values
fn default_entrance_sides() -> [Side; 2] {
    [Side::Left, Side::Right]
}
fn default_save_path() -> String {
    "maze.json".to_string()
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            entrance_sides: default_entrance_sides(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            default_save_path: default_save_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}
