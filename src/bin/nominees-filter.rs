use anyhow::{Context, Result};
use clap::Parser;
use cliclack::log;
use itertools::Itertools;
use nominees::aggregate;
use nominees::categories::{self, Award};
use nominees::input::{INominee, Input, Year};
use nominees::output;
use std::collections::HashMap;
use std::{fs, io};

/// Interactively restrict nominees by award and years
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input file (JSON)
    infile: String,
    /// Output file (JSON)
    outfile: String,
}

#[derive(Clone, PartialEq, Eq)]
enum Action {
    Undo,
    Award,
    Years,
    Save,
    Quit,
}

enum Restriction {
    Award(Award),
    Years(Year, Year),
}

impl Restriction {
    fn apply(&self, nominees: Vec<INominee>) -> Vec<INominee> {
        let (award, window) = match self {
            Restriction::Award(a) => (Some(a.id.as_str()), (Year::MIN, Year::MAX)),
            Restriction::Years(start, end) => (None, (*start, *end)),
        };
        nominees
            .into_iter()
            .filter(|n| categories::matches(award, window, n))
            .collect_vec()
    }

    fn describe(&self) -> String {
        match self {
            Restriction::Award(a) => format!("keep nominees of '{}' ({})", a.label, a.id),
            Restriction::Years(start, end) => format!("keep nominees from years {start}-{end}"),
        }
    }
}

fn summarize(nominees: &[INominee]) -> String {
    match aggregate::get_years(nominees) {
        None => "0 nominees".to_owned(),
        Some(years) => format!(
            "{} nominees in {}",
            nominees.len(),
            output::pretty_period(&years)
        ),
    }
}

fn select_award(nominees: &[INominee]) -> Result<Option<Award>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for n in nominees {
        *counts.entry(&n.award_id).or_default() += 1;
    }
    let mut items = vec![];
    items.push((None, "Oops, go back".to_owned(), ""));
    for award in categories::awards(nominees).into_iter().skip(1) {
        let count = counts[award.id.as_str()];
        let label = format!("{} ({count} nominees)", award.label);
        items.push((Some(award), label, ""));
    }
    let choice = cliclack::select("Select which award?")
        .items(&items)
        .interact()?;
    Ok(choice)
}

fn select_years(nominees: &[INominee]) -> Result<Option<Restriction>> {
    let Some((first, last)) = aggregate::get_years(nominees) else {
        return Ok(None);
    };
    let start: Year = cliclack::input("Starting year")
        .default_input(&first.to_string())
        .interact()?;
    let end: Year = cliclack::input("Ending year")
        .default_input(&last.to_string())
        .interact()?;
    if start > end {
        log::warning(format!("{start} is after {end}, nothing changed"))?;
        return Ok(None);
    }
    Ok(Some(Restriction::Years(start, end)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    cliclack::intro("nominees-filter")?;
    log::info(format!("Reading {}...", args.infile))?;
    let indata =
        fs::read_to_string(&args.infile).with_context(|| format!("cannot read {}", args.infile))?;
    let input: Input =
        serde_json::from_str(&indata).with_context(|| format!("cannot parse {}", args.infile))?;
    let mut restrictions: Vec<Restriction> = vec![];
    loop {
        let mut nominees = input.nominees.clone();
        let mut stack = vec![];
        let options = textwrap::Options::new(70).subsequent_indent(" ");
        stack.push(format!("{} ← input", summarize(&nominees)));
        for r in &restrictions {
            nominees = r.apply(nominees);
            let line = format!("{} ← {}", summarize(&nominees), r.describe());
            stack.push(textwrap::fill(&line, &options));
        }

        cliclack::note("Restrictions", stack.join("\n"))?;

        let mut items = vec![];
        if !restrictions.is_empty() {
            items.push((Action::Undo, "Remove last restriction", ""));
        }
        items.push((Action::Award, "Select which award to keep", ""));
        items.push((Action::Years, "Select which years to keep", ""));
        items.push((
            Action::Save,
            "Write current restrictions to the output file",
            "",
        ));
        items.push((Action::Quit, "Quit", ""));
        let choice = cliclack::select("Action?").items(&items).interact()?;
        match choice {
            Action::Quit => break,
            Action::Undo => {
                restrictions.pop();
            }
            Action::Save => {
                let filename: String = cliclack::input("file name")
                    .default_input(&args.outfile)
                    .interact()?;
                let file = fs::File::create(&filename)
                    .with_context(|| format!("cannot create {filename}"))?;
                let writer = io::BufWriter::new(file);
                let new_input = Input { nominees };
                serde_json::to_writer_pretty(writer, &new_input)?;
                log::info(format!("Wrote to {}", filename))?;
            }
            Action::Award => {
                if let Some(award) = select_award(&nominees)? {
                    restrictions.push(Restriction::Award(award));
                }
            }
            Action::Years => {
                if let Some(r) = select_years(&nominees)? {
                    restrictions.push(r);
                }
            }
        }
    }
    cliclack::outro("Bye!")?;
    Ok(())
}
