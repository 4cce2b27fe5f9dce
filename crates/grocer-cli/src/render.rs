// Text rendering: frequency tables, histograms, summaries
//
// Everything writes to a caller-supplied `Write` so the menu can be driven
// against in-memory buffers. Colors come from a `Palette` value; with a
// disabled palette the output is plain ASCII.

use std::io::{self, Write};

use grocer_core::ItemCount;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FG_BRIGHT_GREEN: &str = "\x1b[92m";
const FG_GREEN: &str = "\x1b[32m";
const FG_GRAY: &str = "\x1b[90m";

/// Longest histogram bar, in characters.
pub const MAX_BAR_WIDTH: usize = 50;

/// Minimum name column width in the frequency table.
const TABLE_NAME_WIDTH: usize = 4;

/// Minimum name column width in the histogram.
const HISTOGRAM_NAME_WIDTH: usize = 10;

/// ANSI escape codes, or nothing when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn code(&self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }

    /// Wrap `text` in `code` ... reset.
    pub fn paint(&self, code: &'static str, text: &str) -> String {
        format!("{}{}{}", self.code(code), text, self.code(RESET))
    }
}

/// Frequency band used to color a histogram bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Among the most purchased items.
    Top,
    /// Five or more purchases.
    Frequent,
    Occasional,
}

impl Band {
    pub fn classify(count: usize, max_count: usize) -> Self {
        if count >= max_count.saturating_sub(2).max(8) {
            Band::Top
        } else if count >= 5 {
            Band::Frequent
        } else {
            Band::Occasional
        }
    }

    fn color(self) -> &'static str {
        match self {
            Band::Top => FG_BRIGHT_GREEN,
            Band::Frequent => FG_GREEN,
            Band::Occasional => FG_GRAY,
        }
    }
}

/// Purchases per `*` so that the longest bar fits in [`MAX_BAR_WIDTH`].
pub fn histogram_scale(max_count: usize) -> usize {
    if max_count > MAX_BAR_WIDTH {
        max_count.div_ceil(MAX_BAR_WIDTH)
    } else {
        1
    }
}

fn name_width(rows: &[ItemCount<'_>], min: usize) -> usize {
    rows.iter()
        .map(|r| r.name.chars().count())
        .fold(min, usize::max)
}

pub fn header<W: Write>(out: &mut W, palette: Palette, title: &str) -> io::Result<()> {
    writeln!(out, "{}", palette.paint(BOLD, title))
}

/// Two columns: name (left-aligned) and count.
pub fn table<W: Write>(out: &mut W, rows: &[ItemCount<'_>]) -> io::Result<()> {
    let width = name_width(rows, TABLE_NAME_WIDTH);
    for row in rows {
        writeln!(out, "{:<width$}  {}", row.name, row.count)?;
    }
    Ok(())
}

pub fn summary<W: Write>(out: &mut W, unique: usize, total: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{unique} unique items, {total} total purchases.")
}

/// One `*` bar per row, scaled and colored by frequency band.
pub fn histogram<W: Write>(
    out: &mut W,
    palette: Palette,
    rows: &[ItemCount<'_>],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "(no data)");
    }

    let max_count = rows.iter().map(|r| r.count).max().unwrap_or(0);
    let scale = histogram_scale(max_count);
    let width = name_width(rows, HISTOGRAM_NAME_WIDTH);

    writeln!(
        out,
        "Legend: * = {scale} purchase{}",
        if scale > 1 { "s" } else { "" }
    )?;

    for row in rows {
        let bar = "*".repeat(row.count.div_ceil(scale));
        let color = Band::classify(row.count, max_count).color();
        writeln!(
            out,
            "{:<width$}  {}  ({})",
            row.name,
            palette.paint(color, &bar),
            row.count
        )?;
    }
    Ok(())
}
