// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::options::ExportFormat;
use crate::core::sanitize::slugify;
use crate::data::{CategoryTable, NominationRecord};
use crate::error::WriteError;
use crate::export::write_records;

/// `<dir>/<sanitized key>.<ext>`. Falls back to `Unknown_Category` when the key
/// has nothing file-name-safe in it.
pub fn category_path(dir: &Path, category_key: &str, format: ExportFormat) -> PathBuf {
    let stem = slugify(category_key);
    let stem = if stem.is_empty() { crate::categories::UNKNOWN_CATEGORY.to_string() } else { stem };
    dir.join(format!("{stem}.{}", format.ext()))
}

/// Write header + rows to `<path>.part`, then rename over the category file.
/// On failure the partial file is removed and any previous file is untouched.
pub fn write_category(
    dir: &Path,
    category_key: &str,
    records: &[NominationRecord],
    format: ExportFormat,
) -> Result<PathBuf, WriteError> {
    let path = category_path(dir, category_key, format);
    let part = partial_path(&path);

    if let Err(cause) = write_partial(&part, records, format).and_then(|()| fs::rename(&part, &path)) {
        let _ = fs::remove_file(&part);
        return Err(WriteError { category_key: category_key.to_string(), path, cause });
    }

    debug!(category = category_key, rows = records.len(), path = %path.display(), "wrote");
    Ok(path)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

fn write_partial(part: &Path, records: &[NominationRecord], format: ExportFormat) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(part)?); // truncate/overwrite
    write_records(&mut out, records, format)?;
    out.flush()
}

/// Write every category of `table`. One failed category does not stop the rest.
pub fn write_table(
    dir: &Path,
    table: &CategoryTable,
    format: ExportFormat,
) -> Vec<Result<PathBuf, WriteError>> {
    table
        .iter()
        .map(|(key, records)| write_category(dir, key, records, format))
        .collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create `dir` if needed and prove we can write into it.
pub fn prepare_output_dir(dir: &Path) -> io::Result<()> {
    ensure_directory(dir)?;
    let check = dir.join(".write_check");
    File::create(&check)?;
    fs::remove_file(&check)
}
