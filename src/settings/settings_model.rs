use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// User settings snapshot
// ============================================================================

/// How a select element's option is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    First,
    #[default]
    Random,
    Matching,
}

impl std::str::FromStr for FillStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(FillStrategy::First),
            "random" => Ok(FillStrategy::Random),
            "matching" => Ok(FillStrategy::Matching),
            other => Err(format!("unknown fill strategy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient", rename = "linkedIn")]
    pub linked_in: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub street_address: String,
    #[serde(default, deserialize_with = "lenient")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "lenient")]
    pub country: String,
}

/// Snapshot handed to a fill pass. Members that are missing or carry the
/// wrong type fall back to their defaults instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default, deserialize_with = "lenient")]
    pub auto_fill_on_load: bool,
    #[serde(default = "default_true", deserialize_with = "lenient_fill_all")]
    pub fill_all_fields: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub fill_strategy: FillStrategy,
    #[serde(default, deserialize_with = "lenient")]
    pub profile: Profile,
    #[serde(default, deserialize_with = "lenient")]
    pub address_info: AddressInfo,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            auto_fill_on_load: false,
            fill_all_fields: true,
            fill_strategy: FillStrategy::Random,
            profile: Profile::default(),
            address_info: AddressInfo::default(),
        }
    }
}

impl UserSettings {
    pub fn with_strategy(mut self, strategy: FillStrategy) -> Self {
        self.fill_strategy = strategy;
        self
    }

    /// Parse settings from JSON, degrading to defaults on malformed input.
    pub fn from_json_str(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable settings JSON, using defaults");
            Self::default()
        })
    }

    /// Parse settings from YAML (JSON is valid YAML), degrading to defaults.
    pub fn from_yaml_str(raw: &str) -> Self {
        serde_yaml::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable settings YAML, using defaults");
            Self::default()
        })
    }
}

// Serde default helpers
fn default_true() -> bool { true }

/// Deserialize `T`, substituting `T::default()` for null or wrong-typed input.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_fill_all<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}
