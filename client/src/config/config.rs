use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::{Difficulty, EngineError, FirstPlayerMode, HardOpening, SessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub difficulty: String,
    pub first_player: FirstPlayerMode,
    pub hard_opening: HardOpening,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl ClientConfig {
    pub fn difficulty(&self) -> Result<Difficulty, EngineError> {
        self.difficulty.parse()
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            first_player: self.first_player,
            hard_opening: self.hard_opening,
            seed: self.seed,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.difficulty().map(|_| ()).map_err(|e| e.to_string())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium.to_string(),
            first_player: FirstPlayerMode::Human,
            hard_opening: HardOpening::CornerOrCenter,
            seed: None,
            verbose: false,
        }
    }
}
