use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use simrecon_core::{
    compare as run_compare, report_columns, report_rows, BillingSource, BillingStats, CoreError,
    Direction, InventoryStats, MismatchResult, MismatchRowDto, RawTable, Region,
};
use simrecon_sheets::{read_table, write_exports, ExportTargets, ReadOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};

const MISSING_INPUT_MESSAGE: &str =
    "supply at least one --inventory file plus --jakarta and --kalimantan billing files";

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// billed-untracked or tracked-unbilled
    #[arg(long, value_parser = parse_direction, default_value = "billed-untracked")]
    pub direction: Direction,
    /// Inventory workbook(s); repeat or list several
    #[arg(long = "inventory", value_name = "FILE", num_args = 1..)]
    pub inventory: Vec<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub jakarta: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub kalimantan: Option<PathBuf>,
    /// Additional regional billing workbooks, labelled Extra-1, Extra-2, ...
    #[arg(long = "extra", value_name = "FILE", num_args = 1..)]
    pub extra: Vec<PathBuf>,
    #[arg(long, value_name = "PATH")]
    pub json_out: Option<PathBuf>,
    #[arg(long, value_name = "PATH")]
    pub xlsx_out: Option<PathBuf>,
    /// Write both exports into DIR using the configured file stem
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
    /// Worksheet to read instead of the first one
    #[arg(long)]
    pub sheet: Option<String>,
}

fn parse_direction(value: &str) -> std::result::Result<Direction, String> {
    Direction::parse(value).map_err(|err| err.to_string())
}

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    direction: &'static str,
    label: &'static str,
    summary: String,
    count: usize,
    tracked: usize,
    columns: &'static [&'static str],
    rows: Vec<MismatchRowDto>,
    inventory: &'a [InventoryStats],
    billing: &'a [BillingStats],
    outputs: ExportTargets,
}

pub fn compare(ctx: &Context<'_>, args: CompareArgs) -> Result<()> {
    let (jakarta, kalimantan) = match (&args.jakarta, &args.kalimantan) {
        (Some(jakarta), Some(kalimantan)) if !args.inventory.is_empty() => (jakarta, kalimantan),
        _ => return Err(CoreError::MissingInput(MISSING_INPUT_MESSAGE.to_string()).into()),
    };

    let options = ReadOptions {
        sheet: args.sheet.clone().or_else(|| ctx.config.sheet.clone()),
    };

    let inventory = args
        .inventory
        .iter()
        .map(|path| read_input(path, &options))
        .collect::<Result<Vec<_>>>()?;

    let regions = &ctx.config.regions;
    let mut billing = vec![
        BillingSource::new(read_input(jakarta, &options)?, regions.jakarta.clone()),
        BillingSource::new(read_input(kalimantan, &options)?, regions.kalimantan.clone()),
    ];
    for (idx, path) in args.extra.iter().enumerate() {
        billing.push(BillingSource::new(
            read_input(path, &options)?,
            Region::extra(idx + 1),
        ));
    }

    let comparison = run_compare(args.direction, &inventory, &billing, &ctx.config.columns)?;
    log_stats(&comparison.inventory, &comparison.billing);

    let outputs = export_results(ctx, &args, &comparison.result)?;
    let direction = args.direction;
    let rows = report_rows(&comparison.result);

    if ctx.json {
        return print_json(&CompareReport {
            direction: direction.as_str(),
            label: direction.label(),
            summary: direction.summary(rows.len()),
            count: rows.len(),
            tracked: comparison.tracked,
            columns: report_columns(direction),
            rows,
            inventory: &comparison.inventory,
            billing: &comparison.billing,
            outputs,
        });
    }

    println!("{}", direction.label());
    println!("{}", direction.summary(rows.len()));
    for row in &rows {
        match row {
            MismatchRowDto::Billed {
                phone_number,
                price,
                status,
                region,
            } => println!("{phone_number}  {price}  {status}  {region}"),
            MismatchRowDto::Tracked { phone_number } => println!("{phone_number}"),
        }
    }
    if let Some(path) = &outputs.json {
        println!("wrote {}", path.display());
    }
    if let Some(path) = &outputs.xlsx {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn read_input(path: &Path, options: &ReadOptions) -> Result<RawTable> {
    if !path.is_file() {
        return Err(not_found(format!("input file {}", path.display())));
    }
    let table =
        read_table(path, options).with_context(|| format!("read {}", path.display()))?;
    debug!(path = %path.display(), rows = table.len(), "sheet read");
    Ok(table)
}

fn log_stats(inventory: &[InventoryStats], billing: &[BillingStats]) {
    for stats in inventory {
        debug!(
            source = %stats.source,
            rows = stats.rows,
            rejected = stats.rejected,
            unique = stats.unique,
            "inventory loaded"
        );
        if stats.rows > 0 && stats.unique == 0 {
            warn!(source = %stats.source, "inventory file has no usable SIM numbers");
        }
    }
    for stats in billing {
        debug!(
            source = %stats.source,
            region = %stats.region,
            rows = stats.rows,
            rejected = stats.rejected,
            cancelled = stats.cancelled,
            duplicates = stats.duplicates,
            kept = stats.kept,
            "billing loaded"
        );
    }
}

fn export_results(
    ctx: &Context<'_>,
    args: &CompareArgs,
    result: &MismatchResult,
) -> Result<ExportTargets> {
    let export = &ctx.config.export;
    let export_dir = args.export_dir.clone().or_else(|| export.dir.clone());
    if let Some(dir) = &export_dir {
        if dir.exists() && !dir.is_dir() {
            return Err(invalid_input(format!(
                "export dir is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(dir)
            .with_context(|| format!("create export dir {}", dir.display()))?;
    }

    let outputs = ExportTargets {
        json: args
            .json_out
            .clone()
            .or_else(|| export_dir.as_deref().map(|dir| export.json_path(dir))),
        xlsx: args
            .xlsx_out
            .clone()
            .or_else(|| export_dir.as_deref().map(|dir| export.xlsx_path(dir))),
    };

    if !outputs.is_empty() {
        write_exports(result, &outputs)?;
        debug!(json = ?outputs.json, xlsx = ?outputs.xlsx, "exports written");
    }
    Ok(outputs)
}
