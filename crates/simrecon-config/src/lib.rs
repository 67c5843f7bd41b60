use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use simrecon_core::{ColumnNames, Region};
use thiserror::Error;

const APP_DIR: &str = "simrecon";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_FILE_STEM: &str = "unmatched_sims";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub columns: ColumnNames,
    /// Worksheet to read; `None` reads the first sheet of every workbook.
    pub sheet: Option<String>,
    pub regions: RegionsConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionsConfig {
    pub jakarta: Region,
    pub kalimantan: Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub dir: Option<PathBuf>,
    pub file_stem: String,
}

impl ExportConfig {
    pub fn json_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.file_stem))
    }

    pub fn xlsx_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.xlsx", self.file_stem))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            sheet: None,
            regions: RegionsConfig {
                jakarta: Region::jakarta(),
                kalimantan: Region::kalimantan(),
            },
            export: ExportConfig {
                dir: None,
                file_stem: DEFAULT_FILE_STEM.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid column name for {field}: must not be empty")]
    InvalidColumnName { field: &'static str },
    #[error("invalid sheet name: must not be empty")]
    InvalidSheetName,
    #[error("invalid region label for {field}: must not be empty")]
    InvalidRegionLabel { field: &'static str },
    #[error("invalid export file stem: {0:?}")]
    InvalidFileStem(String),
    #[error("invalid export dir: {0}")]
    InvalidExportDir(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    columns: Option<ColumnsFile>,
    sheets: Option<SheetsFile>,
    regions: Option<RegionsFile>,
    export: Option<ExportFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnsFile {
    sim_card: Option<String>,
    msisdn: Option<String>,
    price: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SheetsFile {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionsFile {
    jakarta: Option<String>,
    kalimantan: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExportFile {
    dir: Option<PathBuf>,
    file_stem: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(columns) = parsed.columns {
        let target = &mut config.columns;
        apply_column(&mut target.sim_card, columns.sim_card, "sim_card")?;
        apply_column(&mut target.msisdn, columns.msisdn, "msisdn")?;
        apply_column(&mut target.price, columns.price, "price")?;
        apply_column(&mut target.status, columns.status, "status")?;
    }

    if let Some(name) = parsed.sheets.and_then(|sheets| sheets.name) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidSheetName);
        }
        config.sheet = Some(trimmed.to_string());
    }

    if let Some(regions) = parsed.regions {
        if let Some(label) = regions.jakarta {
            config.regions.jakarta = Region::new(&label)
                .map_err(|_| ConfigError::InvalidRegionLabel { field: "jakarta" })?;
        }
        if let Some(label) = regions.kalimantan {
            config.regions.kalimantan = Region::new(&label)
                .map_err(|_| ConfigError::InvalidRegionLabel { field: "kalimantan" })?;
        }
    }

    if let Some(export) = parsed.export {
        if let Some(dir) = export.dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidExportDir(dir));
            }
            config.export.dir = Some(dir);
        }
        if let Some(stem) = export.file_stem {
            config.export.file_stem = validate_file_stem(&stem)?;
        }
    }

    Ok(config)
}

fn apply_column(target: &mut String, value: Option<String>, field: &'static str) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidColumnName { field });
    }
    *target = trimmed.to_string();
    Ok(())
}

fn validate_file_stem(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(ConfigError::InvalidFileStem(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
