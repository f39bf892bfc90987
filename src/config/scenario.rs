use crate::utils::error::{Result, SeatingError};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A replayable set of halls and reservation requests, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioInfo,
    pub halls: Vec<HallDefinition>,
    #[serde(default)]
    pub reservations: Vec<ReservationRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallDefinition {
    pub name: String,
    /// `[number, seats]` pairs in hall order
    pub rows: Vec<(u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub hall: String,
    pub label: Option<String>,
    /// `[row, seat]` pairs
    pub seats: Vec<(u32, u32)>,
    pub expect: Option<Expectation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    Accepted,
    Rejected,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeatingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SeatingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeatingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("scenario.name", &self.scenario.name)?;

        if self.halls.is_empty() {
            return Err(SeatingError::ConfigError {
                message: "Scenario must define at least one hall".to_string(),
            });
        }

        for hall in &self.halls {
            validate_non_empty_string("halls.name", &hall.name)?;
        }
        validate_unique_names("halls.name", self.halls.iter().map(|h| h.name.as_str()))?;

        for (index, request) in self.reservations.iter().enumerate() {
            if self.hall(&request.hall).is_none() {
                return Err(SeatingError::InvalidConfigValueError {
                    field: format!("reservations[{}].hall", index),
                    value: request.hall.clone(),
                    reason: "No hall with this name is defined".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn hall(&self, name: &str) -> Option<&HallDefinition> {
        self.halls.iter().find(|h| h.name == name)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ReservationRequest {
    pub fn display_name(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("reservation #{}", index + 1))
    }
}
