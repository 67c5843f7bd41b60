use anyhow::Error;
use simrecon_config::ConfigError;
use simrecon_core::{CoreError, CoreErrorKind};
use simrecon_sheets::SheetError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(core_exit_code(core_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(sheet_err) = cause.downcast_ref::<SheetError>() {
            return ExitCode::from(sheet_exit_code(sheet_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn core_exit_code(err: &CoreError) -> u8 {
    match err.kind() {
        CoreErrorKind::MissingInput | CoreErrorKind::Schema | CoreErrorKind::InvalidInput => {
            EXIT_INVALID_INPUT
        }
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidColumnName { .. }
        | ConfigError::InvalidSheetName
        | ConfigError::InvalidRegionLabel { .. }
        | ConfigError::InvalidFileStem(_)
        | ConfigError::InvalidExportDir(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn sheet_exit_code(err: &SheetError) -> u8 {
    match err {
        SheetError::OpenWorkbook { .. }
        | SheetError::NoWorksheet(_)
        | SheetError::MissingSheet { .. }
        | SheetError::ReadSheet { .. } => EXIT_INVALID_INPUT,
        SheetError::Write { .. } | SheetError::Json(_) | SheetError::Xlsx(_) => EXIT_FAILURE,
    }
}
