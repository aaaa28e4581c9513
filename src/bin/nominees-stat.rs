use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use log::{error, info};
use nominees::aggregate::Policy;
use nominees::categories;
use nominees::driver::{self, DriverArgs};
use nominees::errors::{self, Result};
use nominees::input::{Input, Year};
use nominees::output::{self, Output, YearBreakdown};
use nominees::xlsx;
use std::{fs, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (JSON)
    infile: String,
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
    /// Show the tooltip text of each year instead of a table
    #[arg(long)]
    tooltips: bool,
    /// Show only the tooltip text of this year
    #[arg(long)]
    year: Option<Year>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn print_awards(input: &Input) {
    let awards = categories::awards(&input.nominees);
    println!("awards:");
    for a in awards {
        println!("- {}: {}", a.id, a.label);
    }
}

fn print_tooltip(b: &YearBreakdown) {
    println!("{}:", b.year);
    for line in output::tooltip(b) {
        println!("  {line}");
    }
}

fn print_output(args: &Args, out: &Output) -> Result<()> {
    if let Some(year) = args.year {
        let Some(b) = output::breakdown_at(&out.breakdowns, year) else {
            return Err(errors::invalid_argument(format!(
                "year {year} is outside {}",
                output::pretty_period(&out.years)
            )));
        };
        print_tooltip(b);
        return Ok(());
    }
    println!(
        "years: {}, at most {} nominees per year",
        output::pretty_period(&out.years),
        out.max_total
    );
    if out.unrecognized > 0 {
        println!("unrecognized ethnic backgrounds: {}", out.unrecognized);
    }
    let order = out
        .series
        .iter()
        .sorted_by_key(|s| s.index)
        .map(|s| s.group.key())
        .join(" < ");
    println!("stacking order: {order}");
    if args.tooltips {
        for b in &out.breakdowns {
            print_tooltip(b);
        }
    } else {
        println!("{}", xlsx::text_table(&out.breakdowns));
    }
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    info!(target: "nominees", "read: {}", args.infile);
    let indata = fs::read_to_string(&args.infile)?;
    let input: Input = serde_json::from_str(&indata)?;
    print_awards(&input);
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
    print_output(args, &output)
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            error!(target: "nominees", "{e}");
            process::exit(1);
        }
    }
}
