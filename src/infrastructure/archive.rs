//! Zip archive producer
//!
//! Builds the archive in-process. A single executable is stored at the
//! archive root under its file name with its unix mode kept; a directory is
//! walked so its contents, not the directory, sit at the root. The stagehand
//! work directory is never archived, even when it lies inside the source.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::entities::WORK_DIR;
use crate::domain::ports::{ArtifactError, ArtifactProducer};

const DIR_MODE: u32 = 0o755;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArtifactProducer;

impl ZipArtifactProducer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactProducer for ZipArtifactProducer {
    fn produce(
        &self,
        source: &Path,
        output: &Path,
        work_dir: &Path,
        single_executable: bool,
    ) -> Result<(), ArtifactError> {
        let source_ok = if single_executable {
            source.is_file()
        } else {
            source.is_dir()
        };
        if !source_ok {
            return Err(ArtifactError::SourceMissing(source.to_path_buf()));
        }

        fs::create_dir_all(work_dir)?;
        if output.exists() {
            fs::remove_file(output)?;
        }

        let mut zip = ZipWriter::new(File::create(output)?);
        if single_executable {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| ArtifactError::SourceMissing(source.to_path_buf()))?;
            add_file(&mut zip, source, name)?;
        } else {
            add_tree(&mut zip, source, &excluded_root(work_dir), output)?;
        }
        zip.finish().map_err(zip_failed)?;
        Ok(())
    }
}

/// The `.stagehand` directory holding `work_dir`, or `work_dir` itself
fn excluded_root(work_dir: &Path) -> PathBuf {
    work_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == WORK_DIR))
        .unwrap_or(work_dir)
        .to_path_buf()
}

fn add_tree(
    zip: &mut ZipWriter<File>,
    source: &Path,
    excluded: &Path,
    output: &Path,
) -> Result<(), ArtifactError> {
    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !e.path().starts_with(excluded) && e.path() != output);

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| ArtifactError::Failed(e.to_string()))?;
        let name = archive_name(relative);
        if entry.file_type().is_dir() {
            let options = SimpleFileOptions::default().unix_permissions(DIR_MODE);
            zip.add_directory(format!("{}/", name), options)
                .map_err(zip_failed)?;
        } else if entry.file_type().is_file() {
            add_file(zip, entry.path(), name)?;
        }
    }
    Ok(())
}

fn add_file(zip: &mut ZipWriter<File>, path: &Path, name: String) -> Result<(), ArtifactError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(file_mode(path)?);
    zip.start_file(name, options).map_err(zip_failed)?;
    io::copy(&mut File::open(path)?, zip)?;
    Ok(())
}

/// Forward-slash entry name regardless of the host separator
fn archive_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn file_mode(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::metadata(path)?.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> io::Result<u32> {
    Ok(0o644)
}

fn zip_failed(e: ZipError) -> ArtifactError {
    match e {
        ZipError::Io(e) => ArtifactError::Io(e),
        other => ArtifactError::Failed(other.to_string()),
    }
}
