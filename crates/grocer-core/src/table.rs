// Frequency table: per-item purchase counts keyed by normalized name

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use log::debug;

use crate::GrocerError;
use crate::normalize::{compare_names, normalize, trim};

/// One distinct item: its first-seen spelling and how often it was bought.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemRecord {
    display_name: String,
    count: usize,
}

/// A row of a sorted view, borrowed from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCount<'a> {
    /// First-seen, trimmed, original-case spelling.
    pub name: &'a str,
    /// Number of occurrences.
    pub count: usize,
}

/// Ordering of a full listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Case-insensitive name, A to Z.
    #[default]
    Name,
    /// Highest count first, ties by name A to Z.
    FrequencyDesc,
    /// Exact reverse of [`SortOrder::FrequencyDesc`].
    FrequencyAsc,
}

/// Purchase counts for one input file.
///
/// Items are keyed by their trimmed, ASCII-lowercased name. The display
/// name of an item is fixed by its first occurrence; later spellings only
/// bump the count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Path of the input file, also recorded in backup headers.
    source: PathBuf,
    items: HashMap<String, ItemRecord>,
}

impl FrequencyTable {
    /// Create an empty table that will read from `source`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            items: HashMap::new(),
        }
    }

    /// Create a table from in-memory lines, attributed to `source`.
    pub fn from_lines<I>(source: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut table = Self::new(source);
        table.load_lines(lines);
        table
    }

    /// The input path this table reads from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Read the source file and rebuild the table from its lines.
    ///
    /// Fails with [`GrocerError::Open`] before touching any state if the file
    /// cannot be opened. A read error part-way through leaves the previously
    /// loaded contents in place.
    pub fn load(&mut self) -> Result<(), GrocerError> {
        let file = File::open(&self.source).map_err(|source| GrocerError::Open {
            path: self.source.clone(),
            source,
        })?;

        let mut items = HashMap::new();
        for line in BufReader::new(file).split(b'\n') {
            let line = line.map_err(|source| GrocerError::Read {
                path: self.source.clone(),
                source,
            })?;
            tally(&mut items, &String::from_utf8_lossy(&line));
        }

        self.replace(items);
        Ok(())
    }

    /// Rebuild the table from already-read lines.
    pub fn load_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut items = HashMap::new();
        for line in lines {
            tally(&mut items, line.as_ref());
        }
        self.replace(items);
    }

    fn replace(&mut self, items: HashMap<String, ItemRecord>) {
        self.items = items;
        debug!(
            "loaded {} unique items ({} purchases) from {}",
            self.unique_item_count(),
            self.total_purchases(),
            self.source.display()
        );
    }

    /// Count for `item`, matched case-insensitively after trimming.
    /// Unknown items count as zero.
    pub fn count_of(&self, item: &str) -> usize {
        self.items.get(&normalize(item)).map_or(0, |r| r.count)
    }

    /// Sum of all counts.
    pub fn total_purchases(&self) -> usize {
        self.items.values().map(|r| r.count).sum()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items ordered by name (case-insensitive, then exact bytes).
    pub fn items_by_name(&self) -> Vec<ItemCount<'_>> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| compare_names(a.name, b.name));
        rows
    }

    /// All items ordered by count, highest first; equal counts by name.
    pub fn items_by_frequency_desc(&self) -> Vec<ItemCount<'_>> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| compare_names(a.name, b.name))
        });
        rows
    }

    /// The descending view reversed.
    ///
    /// Equal counts therefore list names Z to A, not A to Z.
    pub fn items_by_frequency_asc(&self) -> Vec<ItemCount<'_>> {
        let mut rows = self.items_by_frequency_desc();
        rows.reverse();
        rows
    }

    /// The view selected by `order`.
    pub fn items(&self, order: SortOrder) -> Vec<ItemCount<'_>> {
        match order {
            SortOrder::Name => self.items_by_name(),
            SortOrder::FrequencyDesc => self.items_by_frequency_desc(),
            SortOrder::FrequencyAsc => self.items_by_frequency_asc(),
        }
    }

    fn rows(&self) -> Vec<ItemCount<'_>> {
        self.items
            .values()
            .map(|r| ItemCount {
                name: &r.display_name,
                count: r.count,
            })
            .collect()
    }
}

/// Count one raw input line. Blank lines are skipped.
fn tally(items: &mut HashMap<String, ItemRecord>, line: &str) {
    let item = trim(line);
    if item.is_empty() {
        return;
    }
    items
        .entry(item.to_ascii_lowercase())
        .or_insert_with(|| ItemRecord {
            display_name: item.to_string(),
            count: 0,
        })
        .count += 1;
}
