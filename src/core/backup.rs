//! Copies of the data directory, plain or archived.

use crate::errors::{AppError, AppResult};
use crate::store::{Collection, CsvStore};
use crate::ui::messages::info;
use crate::utils::path::ensure_writable;
use clap::ValueEnum;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    /// zip on Windows, tar.gz elsewhere
    pub fn platform_default() -> Self {
        if cfg!(target_os = "windows") {
            ArchiveFormat::Zip
        } else {
            ArchiveFormat::TarGz
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::TarGz => "tar.gz",
            ArchiveFormat::Zip => "zip",
        }
    }
}

/// `dest` with the archive extension appended unless it already ends with it.
fn archive_path(dest: &Path, format: ArchiveFormat) -> PathBuf {
    let suffix = format!(".{}", format.extension());
    let name = dest.to_string_lossy();
    if name.ends_with(&suffix) {
        dest.to_path_buf()
    } else {
        PathBuf::from(format!("{name}{suffix}"))
    }
}

pub struct BackupLogic;

impl BackupLogic {
    /// Back up every collection file of `store`.
    ///
    /// Without `archive`, `dest` is a directory receiving plain copies.
    /// Returns the path that was written.
    pub fn backup(
        store: &CsvStore,
        dest: &Path,
        archive: Option<ArchiveFormat>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let sources: Vec<(Collection, PathBuf)> = Collection::ALL
            .iter()
            .map(|c| (*c, store.path_of(*c)))
            .filter(|(_, p)| p.exists())
            .collect();

        if sources.is_empty() {
            return Err(AppError::Backup(format!(
                "no data files found in {}",
                store.root().display()
            )));
        }

        let target = match archive {
            Some(format) => archive_path(dest, format),
            None => dest.to_path_buf(),
        };
        ensure_writable(&target, force)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        match archive {
            None => copy_plain(&sources, &target)?,
            Some(ArchiveFormat::TarGz) => write_tar_gz(&sources, &target)?,
            Some(ArchiveFormat::Zip) => write_zip(&sources, &target)?,
        }

        info(format!("{} file(s) backed up", sources.len()));
        Ok(target)
    }
}

fn copy_plain(sources: &[(Collection, PathBuf)], dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir)?;
    for (collection, path) in sources {
        fs::copy(path, dir.join(collection.file_name()))?;
    }
    Ok(())
}

fn write_tar_gz(sources: &[(Collection, PathBuf)], target: &Path) -> AppResult<()> {
    let file = File::create(target)?;
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

    for (collection, path) in sources {
        builder.append_path_with_name(path, collection.file_name())?;
    }

    builder.into_inner()?.finish()?;
    Ok(())
}

fn write_zip(sources: &[(Collection, PathBuf)], target: &Path) -> AppResult<()> {
    let file = File::create(target)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (collection, path) in sources {
        zip.start_file(collection.file_name(), options)
            .map_err(io::Error::other)?;
        let mut f = File::open(path)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    Ok(())
}
