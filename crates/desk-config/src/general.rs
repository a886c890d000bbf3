//! General application configuration.

use desk_core::enums::Tab;
use serde::{Deserialize, Serialize};

const fn default_seed_samples() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether a new shell starts with the sample timetable, assignments,
    /// and GPA rows.
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,

    /// Tab shown when the shell opens.
    #[serde(default)]
    pub default_tab: Tab,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed_samples: default_seed_samples(),
            default_tab: Tab::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.seed_samples);
        assert_eq!(config.default_tab, Tab::Timetable);
    }
}
