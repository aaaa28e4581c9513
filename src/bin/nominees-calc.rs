use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info};
use nominees::aggregate::Policy;
use nominees::categories;
use nominees::driver::{self, DriverArgs};
use nominees::errors::Result;
use nominees::input::{Input, Year};
use nominees::output::OError;
use nominees::xlsx;
use std::path::Path;
use std::{error, fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (JSON)
    infile: String,
    /// Output file (JSON)
    outfile: String,
    /// Restrict to this award id ("all" for no restriction)
    #[arg(long)]
    award: Option<String>,
    /// Starting year
    #[arg(long, default_value_t = Year::MIN)]
    start: Year,
    /// Ending year
    #[arg(long, default_value_t = Year::MAX)]
    end: Year,
    /// Count unrecognized ethnic backgrounds in totals only, instead of failing
    #[arg(long)]
    lenient: bool,
    /// Also write the yearly breakdowns as a spreadsheet
    #[arg(long)]
    xlsx: Option<String>,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn process(args: &Args) -> Result<()> {
    info!(target: "nominees", "read: {}", args.infile);
    let indata = fs::read_to_string(&args.infile)?;
    let input: Input = serde_json::from_str(&indata)?;
    let driver_args = DriverArgs {
        award: categories::parse_award(&args.award),
        start: args.start,
        end: args.end,
        policy: if args.lenient {
            Policy::Lenient
        } else {
            Policy::Strict
        },
    };
    let output = driver::calc(&driver_args, &input)?;
    info!(target: "nominees", "write: {}", args.outfile);
    let file = fs::File::create(&args.outfile)?;
    let writer = io::BufWriter::new(file);
    if args.compact {
        serde_json::to_writer(writer, &output)?;
    } else {
        serde_json::to_writer_pretty(writer, &output)?;
    }
    if let Some(filename) = &args.xlsx {
        info!(target: "nominees", "write: {}", filename);
        xlsx::write_xlsx(Path::new(filename), &output.breakdowns)?;
    }
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match args.error_file {
                Some(filename) => match store_error(&filename, &*e) {
                    Ok(()) => {
                        info!(target: "nominees", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "nominees", "{e}");
                        error!(target: "nominees", "{e2}");
                    }
                },
                None => error!(target: "nominees", "{e}"),
            }
            process::exit(1);
        }
    }
}
