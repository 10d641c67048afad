use std::env;
use std::str::FromStr;

use crate::world::{DEFAULT_GRID_SIZE, DEFAULT_PITS, DEFAULT_WUMPUS, WorldConfig};

pub const DEFAULT_ATTEMPTS: u32 = 5;
pub const DEFAULT_MAX_STEPS: u32 = 200;

/// Runtime settings for the binary, read from `WUMPUS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub grid_size: i32,
    pub wumpus_count: i64,
    pub pit_count: i64,
    pub seed: Option<u64>,
    pub attempts: u32,
    pub max_steps: u32,
    pub replays_folder: Option<String>,
    pub show_map: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            wumpus_count: DEFAULT_WUMPUS as i64,
            pit_count: DEFAULT_PITS as i64,
            seed: None,
            attempts: DEFAULT_ATTEMPTS,
            max_steps: DEFAULT_MAX_STEPS,
            replays_folder: None,
            show_map: false,
        }
    }
}

impl AgentConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            grid_size: get_var(&lookup, "WUMPUS_GRID_SIZE").unwrap_or(defaults.grid_size),
            wumpus_count: get_var(&lookup, "WUMPUS_WUMPUS_COUNT").unwrap_or(defaults.wumpus_count),
            pit_count: get_var(&lookup, "WUMPUS_PIT_COUNT").unwrap_or(defaults.pit_count),
            seed: get_var(&lookup, "WUMPUS_SEED"),
            attempts: get_var(&lookup, "WUMPUS_ATTEMPTS").unwrap_or(defaults.attempts),
            max_steps: get_var(&lookup, "WUMPUS_MAX_STEPS").unwrap_or(defaults.max_steps),
            replays_folder: lookup("WUMPUS_REPLAYS_FOLDER").filter(|v| !v.trim().is_empty()),
            show_map: get_var(&lookup, "WUMPUS_SHOW_MAP").unwrap_or(defaults.show_map),
        }
    }

    pub fn world_config(&self) -> WorldConfig {
        WorldConfig::new(self.grid_size, self.wumpus_count, self.pit_count)
    }
}

fn get_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|val| val.trim().parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AgentConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AgentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(config(&[]), AgentConfig::default());
        assert_eq!(config(&[]).world_config(), WorldConfig::default());
    }

    #[test]
    fn test_values_are_parsed() {
        let cfg = config(&[
            ("WUMPUS_GRID_SIZE", "8"),
            ("WUMPUS_WUMPUS_COUNT", "2"),
            ("WUMPUS_PIT_COUNT", "3"),
            ("WUMPUS_SEED", "42"),
            ("WUMPUS_ATTEMPTS", "3"),
            ("WUMPUS_MAX_STEPS", "50"),
            ("WUMPUS_REPLAYS_FOLDER", "replays"),
            ("WUMPUS_SHOW_MAP", "true"),
        ]);

        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.attempts, 3);
        assert_eq!(cfg.max_steps, 50);
        assert_eq!(cfg.replays_folder.as_deref(), Some("replays"));
        assert!(cfg.show_map);
        assert_eq!(cfg.world_config(), WorldConfig::new(8, 2, 3));
    }

    #[test]
    fn test_garbage_falls_back_and_range_is_clamped() {
        let cfg = config(&[
            ("WUMPUS_GRID_SIZE", "99"),
            ("WUMPUS_WUMPUS_COUNT", "-4"),
            ("WUMPUS_PIT_COUNT", "many"),
            ("WUMPUS_SEED", "x"),
            ("WUMPUS_REPLAYS_FOLDER", "  "),
        ]);

        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.replays_folder, None);
        let world = cfg.world_config();
        assert_eq!(world.size, 20);
        assert_eq!(world.wumpus_count, 0);
        assert_eq!(world.pit_count, 6);
    }
}
