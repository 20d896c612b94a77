//! Database backup: plain file copy with optional zip compression.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    stdout().flush()?;

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Copy the database file to `dest_file`, optionally compressing the
/// copy into a sibling `.zip`. Returns the final backup path, or `None`
/// when the user declined to overwrite.
pub fn run(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<Option<PathBuf>> {
    let src = Path::new(&cfg.database);
    let dest = Path::new(dest_file);

    if !src.exists() {
        return Err(AppError::Export(format!(
            "Database not found: {}",
            src.display()
        )));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if dest.exists() && !force && !confirm_overwrite(dest)? {
        info("Backup cancelled.");
        return Ok(None);
    }

    fs::copy(src, dest)?;
    success(format!("Backup created: {}", dest.display()));

    if !compress {
        return Ok(Some(dest.to_path_buf()));
    }

    let zipped = compress_into_zip(dest)?;
    if zipped != dest {
        fs::remove_file(dest)?;
    }
    success(format!("Compressed: {}", zipped.display()));
    Ok(Some(zipped))
}

fn compress_into_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let out = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(out);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "database.sqlite".to_string());
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut db = fs::File::open(path)?;
    std::io::copy(&mut db, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
