//! Spreadsheet export of yearly breakdowns.

use crate::errors::Result;
use crate::groups::GROUPS;
use crate::output::YearBreakdown;
use itertools::Itertools;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub fn header() -> Vec<String> {
    let mut h = vec!["Year".to_owned(), "Total".to_owned()];
    h.extend(GROUPS.iter().map(|g| g.label().to_owned()));
    h
}

pub fn row(b: &YearBreakdown) -> Vec<u64> {
    let mut r = vec![b.year as u64, b.total];
    r.extend(GROUPS.iter().map(|&g| b.counts.get(g)));
    r
}

/// Write one row per year, preceded by a header row.
pub fn write_xlsx(path: &Path, breakdowns: &[YearBreakdown]) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Nominees")?;
    for (col, h) in header().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, h, &bold)?;
    }
    for (i, b) in breakdowns.iter().enumerate() {
        for (col, v) in row(b).into_iter().enumerate() {
            sheet.write_number(i as u32 + 1, col as u16, v as f64)?;
        }
    }
    sheet.set_freeze_panes(1, 0)?;
    workbook.save(path)?;
    Ok(())
}

/// Plain-text rendering of the same table, for the terminal.
pub fn text_table(breakdowns: &[YearBreakdown]) -> String {
    let mut lines = vec![header().join("\t")];
    for b in breakdowns {
        lines.push(row(b).iter().join("\t"));
    }
    lines.join("\n")
}
