/// Preview — run one generation from the command line.
///
/// Usage: preview --kana <reading> --dob <YYYY-MM-DD> [--today <YYYY-MM-DD>]
///                [--old-form] [--mode name-only|merged|both] [--templates <file.ron>]
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use seed_writer::{FixedClock, GenerationRequest, OutputMode, SeedWriter};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    NameOnly,
    Merged,
    Both,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::NameOnly => OutputMode::NameOnly,
            Mode::Merged => OutputMode::Merged,
            Mode::Both => OutputMode::Both,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "preview", about = "Generate a single reading and print it as JSON")]
struct Args {
    /// Display name.
    #[arg(long, default_value = "")]
    name: String,
    /// Hiragana reading.
    #[arg(long)]
    kana: String,
    /// Date of birth, YYYY-MM-DD.
    #[arg(long)]
    dob: String,
    /// Reference date; also pins the clock so the run is reproducible.
    #[arg(long)]
    today: Option<NaiveDate>,
    #[arg(long)]
    old_form: bool,
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,
    /// Override templates merged over the built-in set.
    #[arg(long)]
    templates: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let mut builder = SeedWriter::builder();
    if let Some(today) = args.today {
        builder = builder.clock(FixedClock(today));
    }
    if let Some(ref path) = args.templates {
        builder = builder.templates_path(path);
    }
    let writer = builder.build().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let mut request = GenerationRequest::new(&args.name, &args.kana, &args.dob)
        .with_archaic_form(args.old_form)
        .with_output_mode(args.mode.into());
    request.reference_date = args.today.map(|d| d.format("%Y-%m-%d").to_string());

    match writer.generate(&request) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
