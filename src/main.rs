use std::{env, process::exit, time::Instant};

use anyhow::{Context, Result};
use onixexp::{parse_file, substitute_pressure, well_subset};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) read arguments ───────────────────────────────────────────
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: onixexp <FILE.OnixExp> [--json]");
        exit(2);
    };
    let json = args.next().as_deref() == Some("--json");

    // ─── 3) parse + derive views ─────────────────────────────────────
    let start = Instant::now();
    let table = parse_file(&path).with_context(|| format!("parsing {}", path))?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        elapsed = ?start.elapsed(),
        "parsed {}",
        path
    );

    let wells = well_subset(&table)?;
    let substituted = substitute_pressure(&table)?;
    info!(wells = wells.num_columns(), "derived views ready");

    // ─── 4) report ───────────────────────────────────────────────────
    if json {
        println!("{}", serde_json::to_string_pretty(&substituted)?);
    } else {
        println!(
            "{}: {} rows x {} columns",
            path,
            table.num_rows(),
            table.num_columns()
        );
    }

    Ok(())
}
