// Interactive menu loop
//
// Reads choices line by line from any `BufRead` and writes to any `Write`.
// Invalid or out-of-range choices re-prompt; end of input ends the session
// as if "Exit" had been chosen, without the farewell.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use grocer_core::normalize::{normalize, trim};
use grocer_core::{FrequencyTable, SortOrder, Suggester};

use crate::render::{self, Palette};

const TITLE: &str = "========= Corner Grocer =========";

/// What to do after one menu action.
type Step = io::Result<ControlFlow<()>>;

pub struct Menu<'a, R, W> {
    table: &'a FrequencyTable,
    suggester: Suggester,
    palette: Palette,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(table: &'a FrequencyTable, palette: Palette, input: R, out: W) -> Self {
        Self {
            table,
            suggester: Suggester::default(),
            palette,
            input,
            out,
        }
    }

    pub fn with_suggester(mut self, suggester: Suggester) -> Self {
        self.suggester = suggester;
        self
    }

    /// Give back the output sink, e.g. to inspect a buffer after a session.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(
                self.out,
                "\n{TITLE}\n\
                 (1) Search item frequency\n\
                 (2) Print all frequencies\n\
                 (3) Print histogram\n\
                 (4) Exit\n\
                 > "
            )?;

            let Some(choice) = self.read_choice(1, 4)? else {
                return Ok(());
            };
            let step = match choice {
                1 => self.search(),
                2 => self.list(),
                3 => self.histogram(),
                _ => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
            };
            if step?.is_break() {
                return Ok(());
            }
        }
    }

    fn search(&mut self) -> Step {
        write!(self.out, "Enter item name: ")?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(ControlFlow::Break(()));
        };
        let query = trim(&line);

        let count = self.table.count_of(query);
        if count > 0 {
            writeln!(
                self.out,
                "{query} occurs {count} time{}.",
                if count == 1 { "" } else { "s" }
            )?;
            return Ok(ControlFlow::Continue(()));
        }

        let entries = self.table.items_by_name();
        let suggestions = self.suggester.suggest(&normalize(query), &entries);
        if suggestions.is_empty() {
            writeln!(self.out, "Item not found.")?;
        } else {
            writeln!(self.out, "Item not found. Did you mean:")?;
            for name in &suggestions {
                writeln!(self.out, "  - {name}")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list(&mut self) -> Step {
        let Some(order) = self.read_order("Sort by")? else {
            return Ok(ControlFlow::Break(()));
        };
        render::header(&mut self.out, self.palette, "All Frequencies")?;
        render::table(&mut self.out, &self.table.items(order))?;
        self.summary()
    }

    fn histogram(&mut self) -> Step {
        let Some(order) = self.read_order("Histogram basis")? else {
            return Ok(ControlFlow::Break(()));
        };
        render::header(&mut self.out, self.palette, "Purchase Histogram")?;
        render::histogram(&mut self.out, self.palette, &self.table.items(order))?;
        self.summary()
    }

    fn summary(&mut self) -> Step {
        render::summary(
            &mut self.out,
            self.table.unique_item_count(),
            self.table.total_purchases(),
        )?;
        Ok(ControlFlow::Continue(()))
    }

    fn read_order(&mut self, label: &str) -> io::Result<Option<SortOrder>> {
        write!(
            self.out,
            "\n{label}: (1) Name A\u{2192}Z  (2) Freq high\u{2192}low  (3) Freq low\u{2192}high\n> "
        )?;
        Ok(self.read_choice(1, 3)?.map(|choice| match choice {
            1 => SortOrder::Name,
            2 => SortOrder::FrequencyDesc,
            _ => SortOrder::FrequencyAsc,
        }))
    }

    /// Read a number in `lo..=hi`, re-prompting until one is entered.
    /// Returns `None` at end of input.
    fn read_choice(&mut self, lo: u32, hi: u32) -> io::Result<Option<u32>> {
        loop {
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(n) if (lo..=hi).contains(&n) => return Ok(Some(n)),
                _ => write!(self.out, "Please enter a number in [{lo}...{hi}]: ")?,
            }
        }
    }

    /// One line of input, decoded lossily so stray bytes cannot end the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
