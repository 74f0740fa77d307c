mod cli_main;

use clap::Parser;
use cli_main::{Cli, Commands, StrSource};
use rayon::ThreadPoolBuilder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use strmatch::identify::{identify_all, identify_sequence, profile_for, Identification};
use strmatch::io::database::StrDatabase;
use strmatch::io::report::{write_json, write_profile, ReportFormat};
use strmatch::io::sequence::load_sequence;
use strmatch::repeat::{longest_run_span, StrProfile};
use strmatch::Result;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

fn init_threads(threads: usize) {
    if let Err(e) = ThreadPoolBuilder::new().num_threads(threads).build_global() {
        warn!("Failed to configure thread pool: {}", e);
    }
}

fn run_identify(database: &str, sequence: &str, all: bool, json: bool) -> Result<()> {
    let db = StrDatabase::open(database)?;
    let sequence = load_sequence(sequence)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if all {
        let profile = profile_for(&db, &sequence)?;
        let matches = identify_all(&db, &profile);
        info!("{} of {} individuals match", matches.len(), db.len());
        if json {
            let names: Vec<&str> = matches.iter().map(|ind| ind.name.as_str()).collect();
            write_json(&serde_json::json!({ "matched": names, "profile": profile }), &mut out)?;
        } else if matches.is_empty() {
            writeln!(out, "No match")?;
        } else {
            for ind in matches {
                writeln!(out, "{}", ind.name)?;
            }
        }
        return Ok(());
    }

    let result: Identification = identify_sequence(&db, &sequence)?;
    if json {
        write_json(&result, &mut out)?;
    } else {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

fn run_profile(sequence: &str, strs: StrSource, format: ReportFormat, output: Option<String>) -> Result<()> {
    let patterns = match strs.database {
        Some(path) => StrDatabase::open(path)?.strs().to_vec(),
        None => strs.patterns,
    };
    let sequence = load_sequence(sequence)?;
    let profile = StrProfile::compute(&sequence, &patterns)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| strmatch::Error::io(&path, e))?;
            let mut writer = BufWriter::new(file);
            write_profile(&profile, format, &mut writer)?;
            writer.flush()?;
            info!("Wrote profile of {} STRs to {}", profile.len(), path);
        }
        None => write_profile(&profile, format, io::stdout().lock())?,
    }
    Ok(())
}

fn run_scan(sequence: &str, pattern: &str) -> Result<()> {
    let sequence = load_sequence(sequence)?;
    match longest_run_span(&sequence, pattern)? {
        Some(span) => println!("{}\t{}\t{}", span.start, span.end(), span.count),
        None => debug!("{} does not occur in the sequence", pattern),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let result = match cli.command {
        Commands::Identify { database, sequence, all, json, threads } => {
            init_threads(threads);
            run_identify(&database, &sequence, all, json)
        }
        Commands::Profile { sequence, strs, format, output, threads } => {
            init_threads(threads);
            run_profile(&sequence, strs, format.format(), output)
        }
        Commands::Scan { sequence, pattern } => run_scan(&sequence, &pattern),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
