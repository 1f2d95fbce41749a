//! Logic for loading configuration in to an object model
mod server;

use std::path::Path;
use std::str::FromStr;

use displaydoc::Display;
use schemars::gen::SchemaSettings;
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

pub use self::server::Server;

/// Configuration error.
#[derive(Debug, Error, Display)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// could not read configuration file: {0}
    CannotReadFile(std::io::Error),
    /// could not deserialize configuration: {0}
    DeserializeConfigError(serde_yaml::Error),
    /// {message}: {error}
    InvalidConfiguration {
        message: &'static str,
        error: String,
    },
}

/// The configuration for the server.
///
/// Can be created through `serde::Deserialize` from YAML, or inline in Rust
/// code with the builder.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub struct Configuration {
    /// Configuration options pertaining to the http server component.
    pub(crate) server: Server,

    /// Configuration of the entity store.
    pub(crate) store: Store,
}

/// Configuration of the entity store.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub(crate) struct Store {
    /// Load the demo users, posts and comments at startup. Defaults to true.
    pub(crate) seed: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[buildstructor::buildstructor]
impl Configuration {
    #[builder]
    pub fn new(server: Option<Server>, seed: Option<bool>) -> Self {
        Self {
            server: server.unwrap_or_default(),
            store: Store {
                seed: seed.unwrap_or(true),
            },
        }
    }

    /// Reads and validates a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        std::fs::read_to_string(path)
            .map_err(ConfigurationError::CannotReadFile)?
            .parse()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    /// Whether the store starts with the demo data.
    pub fn seed(&self) -> bool {
        self.store.seed
    }

    fn validate(self) -> Result<Self, ConfigurationError> {
        if !self.server.path.starts_with('/') {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "invalid 'server.path' attribute",
                error: format!("'{}' must start with '/'", self.server.path),
            });
        }
        Ok(self)
    }
}

/// Parse configuration from a string in YAML syntax
impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // An empty document is not a mapping, but it should still mean "all defaults".
        if s.trim().is_empty() {
            return Ok(Configuration::default());
        }
        serde_yaml::from_str::<Configuration>(s)
            .map_err(ConfigurationError::DeserializeConfigError)?
            .validate()
    }
}

/// Generate a JSON schema for the configuration.
pub fn generate_config_schema() -> RootSchema {
    let settings = SchemaSettings::draft2019_09().with(|s| {
        s.option_nullable = true;
        s.option_add_null_type = false;
        s.inline_subschemas = true;
    });
    let gen = settings.into_generator();
    gen.into_root_schema_for::<Configuration>()
}
