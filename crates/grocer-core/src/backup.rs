// Backup file: a name-sorted snapshot of the frequency table
//
// Format:
//   # frequency.dat generated 2025-10-19 14:03:27 from /path/to/input.txt
//   Apples 3
//   Cranberries 3
//   Sweet Potatoes 1
//
// Names may contain spaces; the count is always the last field.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};

use crate::GrocerError;
use crate::table::FrequencyTable;

/// Timestamp layout used in the header line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Start of the header line; only the first line of a backup may carry it.
pub const HEADER_PREFIX: &str = "# frequency.dat generated ";

/// Suffix appended to the target path for the temporary file.
const TMP_SUFFIX: &str = ".tmp";

impl FrequencyTable {
    /// Write a backup stamped with the current local time.
    ///
    /// See [`FrequencyTable::write_backup_at`].
    pub fn write_backup(&self, path: impl AsRef<Path>) -> Result<(), GrocerError> {
        self.write_backup_at(path, Local::now().naive_local())
    }

    /// Write a backup of the name-sorted view to `path`.
    ///
    /// The contents go to `<path>.tmp` first and are then renamed over
    /// `path`. When the rename fails (e.g. across filesystems) the temporary
    /// file is copied into place and removed. Missing parent directories are
    /// created.
    pub fn write_backup_at(
        &self,
        path: impl AsRef<Path>,
        generated: NaiveDateTime,
    ) -> Result<(), GrocerError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                debug!("could not create {}: {e}", parent.display());
            }
        }

        let tmp = tmp_path(path);
        let contents = self.render_backup(generated);
        write_file(&tmp, contents.as_bytes()).map_err(|source| {
            remove_tmp(&tmp);
            GrocerError::Write {
                path: tmp.clone(),
                source,
            }
        })?;

        finalize(&tmp, path)?;
        info!(
            "wrote backup of {} items to {}",
            self.unique_item_count(),
            path.display()
        );
        Ok(())
    }

    /// The exact backup file contents for the given generation time.
    pub fn render_backup(&self, generated: NaiveDateTime) -> String {
        let mut out = format!(
            "{HEADER_PREFIX}{} from {}\n",
            generated.format(TIMESTAMP_FORMAT),
            self.source().display()
        );
        for row in self.items_by_name() {
            out.push_str(row.name);
            out.push(' ');
            out.push_str(&row.count.to_string());
            out.push('\n');
        }
        out
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Move the temporary file over the target, falling back to copy + delete.
fn finalize(tmp: &Path, target: &Path) -> Result<(), GrocerError> {
    finalize_with(tmp, target, |from, to| fs::rename(from, to))
}

fn finalize_with<F>(tmp: &Path, target: &Path, rename: F) -> Result<(), GrocerError>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    let Err(rename_err) = rename(tmp, target) else {
        return Ok(());
    };
    warn!(
        "rename {} -> {} failed ({rename_err}), copying instead",
        tmp.display(),
        target.display()
    );

    let copied = fs::copy(tmp, target);
    remove_tmp(tmp);
    copied.map(|_| ()).map_err(|source| GrocerError::Write {
        path: target.to_path_buf(),
        source,
    })
}

fn remove_tmp(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("could not remove {}: {e}", tmp.display());
        }
    }
}

/// Read a backup file back into `(name, count)` pairs, in file order.
pub fn read_backup(path: impl AsRef<Path>) -> Result<Vec<(String, usize)>, GrocerError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GrocerError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_backup(BufReader::new(file), path)
}

/// Parse backup contents read from `origin`.
///
/// A generation header on the first line is skipped, as are blank lines.
/// Every other line is `<name> <count>`; names may themselves start with `#`.
pub fn parse_backup<R: BufRead>(
    reader: R,
    origin: &Path,
) -> Result<Vec<(String, usize)>, GrocerError> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| GrocerError::Read {
            path: origin.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() || (index == 0 && line.starts_with(HEADER_PREFIX)) {
            continue;
        }
        let malformed = || GrocerError::MalformedBackup {
            line: index + 1,
            content: line.clone(),
        };
        let (name, count) = line.rsplit_once(' ').ok_or_else(|| malformed())?;
        let count = count.trim_end().parse().map_err(|_| malformed())?;
        entries.push((name.to_string(), count));
    }
    Ok(entries)
}
