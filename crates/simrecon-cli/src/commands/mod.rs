use anyhow::Result;
use serde::Serialize;
use simrecon_config::AppConfig;
use std::io::{self, Write};

pub mod compare;
pub mod completions;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
