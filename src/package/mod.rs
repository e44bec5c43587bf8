//! Asset packaging: output directory lifecycle, file writes, and the
//! final zip archive.
//!
//! The output tree is `{out}/{theme}/{size}/{file}` and the archive is
//! `{out}/{theme}.zip` with entries named `{size}/{file}` - unzipping it
//! reproduces the size-bucket tree without the theme wrapper directory.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::ZipWriter;

use crate::assets::AssetJob;
use crate::error::{IkonError, Result};
use crate::types::{FillMode, ShapeKind, SizeBucket, SIZE_BUCKETS};

/// Where one generated combination landed on disk.
#[derive(Debug, Clone)]
pub struct AssetRecord {
    pub vector_path: PathBuf,
    pub raster_path: PathBuf,
    pub size: SizeBucket,
    pub shape: ShapeKind,
    pub fill: FillMode,
    pub colour_name: String,
}

/// Writes assets into the theme's directory tree and bundles the archive.
pub struct AssetPackager {
    theme_name: String,
    out_dir: PathBuf,
    root: PathBuf,
}

impl AssetPackager {
    pub fn new(out_dir: &Path, theme_name: &str) -> Self {
        Self {
            theme_name: theme_name.to_string(),
            out_dir: out_dir.to_path_buf(),
            root: out_dir.join(theme_name),
        }
    }

    /// The theme's output directory (`{out}/{theme}`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the archive will be written to (`{out}/{theme}.zip`).
    pub fn archive_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.zip", self.theme_name))
    }

    /// Reset the output tree: remove any previous run's directory
    /// wholesale, then create the root and every size-bucket directory.
    /// All buckets exist before the first asset write.
    pub fn prepare(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(|e| IkonError::Io {
                path: self.root.clone(),
                message: format!("Failed to remove previous output: {}", e),
            })?;
        }

        for bucket in SIZE_BUCKETS {
            let dir = self.bucket_dir(bucket);
            fs::create_dir_all(&dir).map_err(|e| IkonError::Io {
                path: dir,
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        Ok(())
    }

    /// Write one combination's SVG/PNG pair into its size-bucket slot.
    pub fn write(&self, job: &AssetJob<'_>, svg: &str, png: &[u8]) -> Result<AssetRecord> {
        let dir = self.bucket_dir(job.size());
        let vector_path = dir.join(job.svg_filename(&self.theme_name));
        let raster_path = dir.join(job.png_filename(&self.theme_name));

        fs::write(&vector_path, svg).map_err(|e| IkonError::Io {
            path: vector_path.clone(),
            message: format!("Failed to write SVG: {}", e),
        })?;
        fs::write(&raster_path, png).map_err(|e| IkonError::Io {
            path: raster_path.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;

        Ok(AssetRecord {
            vector_path,
            raster_path,
            size: job.size(),
            shape: job.spec.kind,
            fill: job.spec.fill,
            colour_name: job.colour_name.to_string(),
        })
    }

    /// Bundle every written file into `{out}/{theme}.zip`.
    ///
    /// Runs only after the whole combination set succeeded; entry names
    /// are relative to the theme root (`{size}/{file}`).
    pub fn archive(&self, records: &[AssetRecord]) -> Result<PathBuf> {
        let zip_path = self.archive_path();
        let file = File::create(&zip_path).map_err(|e| IkonError::Io {
            path: zip_path.clone(),
            message: format!("Failed to create archive: {}", e),
        })?;

        let mut writer = ZipWriter::new(file);
        let options = FileOptions::default();

        for record in records {
            for path in [&record.vector_path, &record.raster_path] {
                self.append_entry(&mut writer, path, options)?;
            }
        }

        writer.finish().map_err(|e| IkonError::Io {
            path: zip_path.clone(),
            message: format!("Failed to finish archive: {}", e),
        })?;

        Ok(zip_path)
    }

    fn append_entry(
        &self,
        writer: &mut ZipWriter<File>,
        path: &Path,
        options: FileOptions,
    ) -> Result<()> {
        let name = self.entry_name(path);
        writer.start_file(name, options).map_err(|e| IkonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to add archive entry: {}", e),
        })?;

        let bytes = fs::read(path).map_err(|e| IkonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file for archiving: {}", e),
        })?;
        writer.write_all(&bytes).map_err(|e| IkonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write archive entry: {}", e),
        })?;

        Ok(())
    }

    /// Archive entry name: theme-root-relative with forward slashes.
    fn entry_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn bucket_dir(&self, bucket: SizeBucket) -> PathBuf {
        self.root.join(bucket.to_string())
    }
}
