use anyhow::Result;
use clap::Args;
use serde::Serialize;
use simrecon_core::normalize_msisdn;

use crate::commands::{print_json, Context};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Raw phone numbers as they appear in a sheet
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NormalizedValue {
    input: String,
    canonical: Option<String>,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let results: Vec<NormalizedValue> = args
        .values
        .into_iter()
        .map(|input| {
            let canonical = normalize_msisdn(&input).map(|id| id.into_string());
            NormalizedValue { input, canonical }
        })
        .collect();

    if ctx.json {
        return print_json(&results);
    }

    for result in &results {
        println!(
            "{}\t{}",
            result.input,
            result.canonical.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
