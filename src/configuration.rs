use std::fs::File;
use std::io::{
    BufReader,
    Read
};

use serde::Deserialize;
use thiserror::Error;

use crate::evaluation::evaluator::DEFAULT_GRID_SIZE;

pub const CONFIG_ENV_VAR: &str = "ACTIVATIONPLOT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("grid_size must be at least 2, got {0}")]
    GridSize(usize)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    host: String,
    port: u16,
    grid_size: usize,
    image_width: u32,
    image_height: u32
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            grid_size: DEFAULT_GRID_SIZE,
            image_width: 1000,
            image_height: 600
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validated()
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Configuration::from_json_reader(BufReader::new(file))
    }

    /// Defaults, unless a path is given on the command line or through
    /// `ACTIVATIONPLOT_CONFIG`.
    pub fn load(cli_path: Option<String>) -> Result<Configuration, ConfigurationError> {
        match cli_path.or_else(|| std::env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => {
                log::info!("loading configuration from {}", path);
                Configuration::from_reader(&path)
            },
            None => Ok(Configuration::new())
        }
    }

    fn validated(self) -> Result<Configuration, ConfigurationError> {
        if self.grid_size < 2 {
            return Err(ConfigurationError::GridSize(self.grid_size));
        }
        Ok(self)
    }

    /// Host and port to bind; the host may be a name such as `localhost`.
    pub fn listen_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = Configuration::from_json_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.listen_address(), ("127.0.0.1", 5000));
    }

    #[test]
    fn fields_override_defaults() {
        let json = r#"{"host": "0.0.0.0", "port": 8080, "grid_size": 200, "image_width": 640}"#;
        let config = Configuration::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(config.grid_size(), 200);
        assert_eq!(config.image_size(), (640, 600));
        assert_eq!(config.listen_address(), ("0.0.0.0", 8080));
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let err = Configuration::from_json_reader(r#"{"grid_size": 1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigurationError::GridSize(1)));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = Configuration::from_json_reader("{\"port\": \"x\"}".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigurationError::JsonParse(_)));
        let err = Configuration::from_json_reader(r#"{"colour": 1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigurationError::JsonParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Configuration::from_reader("/nonexistent/activationplot.json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Io(_)));
    }

    #[test]
    fn host_names_are_kept_for_binding() {
        let config = Configuration::from_json_reader(r#"{"host": "localhost"}"#.as_bytes()).unwrap();
        assert_eq!(config.listen_address(), ("localhost", 5000));
    }
}
