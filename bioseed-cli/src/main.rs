use std::error::Error;
use std::io;
use std::path::PathBuf;

use chrono::{NaiveDateTime, Utc};
use clap::{ArgEnum, Parser};
use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use bioseed::catalog::Catalog;
use bioseed::emit::{write_json, write_sql};
use bioseed::generator::generate;

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Format {
    Sql,
    Json,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Preset {
    Full,
    Matching,
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Output form written to stdout
    #[clap(long, arg_enum, default_value = "json")]
    format: Format,

    /// Built-in catalog to generate from
    #[clap(long, arg_enum, default_value = "full")]
    preset: Preset,

    /// CSV catalog file (name,baseline,unit) overriding the preset
    #[clap(long)]
    catalog: Option<PathBuf>,

    /// User every generated reading is attributed to
    #[clap(long)]
    user_id: String,

    /// Base instant of the run, e.g. 2025-10-16T05:15:41 (defaults to now)
    #[clap(long, parse(try_from_str = parse_base_date))]
    base_date: Option<NaiveDateTime>,

    /// RNG seed for reproducible values
    #[clap(long)]
    seed: Option<u64>,

    /// Print a record count line before the JSON payload
    #[clap(long)]
    count: bool,
}

fn parse_base_date(arg: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(arg, "%Y-%m-%dT%H:%M:%S")
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_csv_path(path)?,
        None => match cli.preset {
            Preset::Full => Catalog::full_preset(),
            Preset::Matching => Catalog::matching_preset(),
        },
    };
    let base = cli.base_date.unwrap_or_else(|| Utc::now().naive_utc());
    info!(
        "generating {} readings for {} biometric types",
        3 * catalog.len(),
        catalog.len()
    );

    let readings = match cli.seed {
        Some(seed) => generate(&catalog, base, &cli.user_id, &mut StdRng::seed_from_u64(seed)),
        None => generate(&catalog, base, &cli.user_id, &mut thread_rng()),
    };

    let mut stdout = io::stdout();
    match cli.format {
        Format::Sql => write_sql(&mut stdout, &readings, &cli.user_id, base)?,
        Format::Json => write_json(&mut stdout, &readings, cli.count)?,
    }

    Ok(())
}
