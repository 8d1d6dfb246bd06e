use crate::constants::{CONFIG_FILE_NAME, CONFIG_FILE_PATH, CONFIG_FILE_TYPE};
use crate::errors::ConfigError;
use crate::io_models::config::ConfigurationFile;
use crate::models::component::ComponentKind;
use crate::models::configuration::Configuration;
use dirs::home_dir;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use strum::IntoEnumIterator;

const HOME_PLACEHOLDER: &str = "$HOME";

/// Where the configuration file lives: `<path>/<name>.<file_type>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigFileLocation {
    pub name: String,
    pub file_type: String,
    pub path: String,
}

impl Default for ConfigFileLocation {
    fn default() -> Self {
        ConfigFileLocation {
            name: CONFIG_FILE_NAME.to_string(),
            file_type: CONFIG_FILE_TYPE.to_string(),
            path: CONFIG_FILE_PATH.to_string(),
        }
    }
}

impl ConfigFileLocation {
    pub fn new(name: &str, file_type: &str, path: &str) -> Self {
        ConfigFileLocation {
            name: name.to_string(),
            file_type: file_type.to_string(),
            path: path.to_string(),
        }
    }

    /// Full file path, `$HOME` being replaced by the user home directory.
    pub fn file_path(&self) -> Result<PathBuf, ConfigError> {
        let home_relative = match self.path.strip_prefix(HOME_PLACEHOLDER) {
            Some("") => Some(""),
            Some(rest) => rest.strip_prefix('/'),
            None => None,
        };

        let directory = match home_relative {
            Some(rest) => {
                let home = home_dir().ok_or_else(|| ConfigError::CannotReadConfigFile {
                    path: self.path.clone(),
                    raw_error_message: "cannot determine the user home directory".to_string(),
                })?;
                home.join(rest)
            }
            None => PathBuf::from(&self.path),
        };

        Ok(directory.join(format!("{}.{}", self.name, self.file_type)))
    }
}

/// Default configuration file name, type and directory.
pub fn file_metadata() -> (&'static str, &'static str, &'static str) {
    (CONFIG_FILE_NAME, CONFIG_FILE_TYPE, CONFIG_FILE_PATH)
}

pub fn read_default() -> Result<Configuration, ConfigError> {
    read(CONFIG_FILE_NAME, CONFIG_FILE_TYPE, CONFIG_FILE_PATH)
}

/// Reads, decodes and checks the configuration file.
///
/// Errors are reported in this order: file not found, unreadable or not a YAML mapping,
/// not matching the expected document, a component version key missing, an incomplete
/// cluster in the cluster list.
pub fn read(file_name: &str, file_type: &str, file_path: &str) -> Result<Configuration, ConfigError> {
    let location = ConfigFileLocation::new(file_name, file_type, file_path);
    let path = location.file_path()?;
    let path_string = path.to_string_lossy().to_string();

    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::ConfigFileNotFound {
            path: path_string.clone(),
        },
        _ => ConfigError::CannotReadConfigFile {
            path: path_string.clone(),
            raw_error_message: e.to_string(),
        },
    })?;
    info!("Config file used: {}", path_string);

    let configuration = parse(&content, &path_string)?;

    if !configuration.is_cluster_list_valid() {
        return Err(ConfigError::InvalidClusterList);
    }

    for component in ComponentKind::iter() {
        info!(
            "{} version read from config: {}",
            component,
            configuration.components.version(component)
        );
    }

    Ok(configuration)
}

fn parse(content: &str, path: &str) -> Result<Configuration, ConfigError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::CannotReadConfigFile {
            path: path.to_string(),
            raw_error_message: e.to_string(),
        })?;

    let file = match value {
        serde_yaml::Value::Null => ConfigurationFile::default(),
        serde_yaml::Value::Mapping(_) => {
            serde_yaml::from_value::<ConfigurationFile>(value).map_err(|e| ConfigError::CannotUnmarshalConfigFile {
                path: path.to_string(),
                raw_error_message: e.to_string(),
            })?
        }
        _ => {
            return Err(ConfigError::CannotReadConfigFile {
                path: path.to_string(),
                raw_error_message: "config file content is not a YAML mapping".to_string(),
            });
        }
    };

    file.to_configuration_domain()
}
