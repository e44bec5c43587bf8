//! Build command implementation.
//!
//! Drives the full pipeline: parse the theme, enumerate every
//! combination, compute geometry, build the SVG, rasterize it, write the
//! pair, and archive the completed set. The first rasterization failure
//! aborts the run; files already written stay on disk, and no archive is
//! produced.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::assets::{combination_count, enumerate};
use crate::error::Result;
use crate::geometry::compute;
use crate::output::{display_path, plural, Printer};
use crate::package::{AssetPackager, AssetRecord};
use crate::parser::parse_theme_file;
use crate::render::{svg_document, RasterConverter, SvgRasterizer};
use crate::types::{SizeBucket, ThemeConfig, CANVAS_SIZE, SIZE_BUCKETS};

/// Generate the full icon set and archive for a theme
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Theme definition file
    #[arg(default_value = "colors.txt")]
    pub file: PathBuf,

    /// Directory receiving the theme tree and archive
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
}

/// What a successful run produced.
pub struct BuildSummary {
    pub records: Vec<AssetRecord>,
    pub archive: PathBuf,
}

impl BuildSummary {
    /// Total files on disk (SVG + PNG per combination).
    pub fn files_written(&self) -> usize {
        self.records.len() * 2
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let theme = parse_theme_file(&args.file)?;

    printer.status(
        "Loaded",
        &format!(
            "{} ({} from {})",
            theme.name,
            plural(theme.len(), "colour", "colours"),
            display_path(&args.file)
        ),
    );

    let converter = SvgRasterizer::new(CANVAS_SIZE);
    let summary = generate(&theme, &args.output, &converter, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {}, archived as {}",
            plural(summary.files_written(), "file", "files"),
            display_path(&args.output.join(&theme.name)),
            display_path(&summary.archive)
        ),
    );

    Ok(())
}

/// Generate every asset for `theme` under `out_dir`.
///
/// The converter is injected so failure behaviour is testable; `run`
/// always passes the resvg-backed one.
pub fn generate(
    theme: &ThemeConfig,
    out_dir: &Path,
    converter: &dyn RasterConverter,
    printer: &Printer,
) -> Result<BuildSummary> {
    let packager = AssetPackager::new(out_dir, &theme.name);
    packager.prepare()?;

    let total = combination_count(theme);
    let per_bucket = total / SIZE_BUCKETS.len();
    let mut records = Vec::with_capacity(total);
    let mut current_bucket: Option<SizeBucket> = None;

    for job in enumerate(theme) {
        if current_bucket != Some(job.size()) {
            current_bucket = Some(job.size());
            printer.status(
                "Rendering",
                &format!("{} ({})", job.size(), plural(per_bucket, "asset", "assets")),
            );
        }

        let geometry = compute(&job.spec);
        let svg = svg_document(CANVAS_SIZE, &geometry, job.colour_value);
        let png = converter.convert(&job.base_name(&theme.name), &svg)?;
        records.push(packager.write(&job, &svg, &png)?);
    }

    printer.status("Archiving", &display_path(&packager.archive_path()));
    let archive = packager.archive(&records)?;

    Ok(BuildSummary { records, archive })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs::{self, File};

    use tempfile::tempdir;

    use crate::error::IkonError;

    fn acme_source() -> &'static str {
        "acme\n--primary: #ff0000;\n--secondary: #00ff00;\n"
    }

    fn acme_theme() -> ThemeConfig {
        crate::parser::parse_theme(acme_source(), Path::new("colors.txt")).unwrap()
    }

    /// Converter that returns fixed bytes without touching resvg.
    struct StubConverter;

    impl RasterConverter for StubConverter {
        fn convert(&self, _asset: &str, _svg: &str) -> Result<Vec<u8>> {
            Ok(b"png".to_vec())
        }
    }

    /// Converter that fails on the n-th call.
    struct FailingConverter {
        calls: Cell<usize>,
        fail_at: usize,
    }

    impl FailingConverter {
        fn new(fail_at: usize) -> Self {
            Self {
                calls: Cell::new(0),
                fail_at,
            }
        }
    }

    impl RasterConverter for FailingConverter {
        fn convert(&self, asset: &str, _svg: &str) -> Result<Vec<u8>> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call == self.fail_at {
                return Err(IkonError::RasterFailed {
                    asset: asset.to_string(),
                    message: "simulated failure".to_string(),
                });
            }
            Ok(b"png".to_vec())
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_generate_full_combination_set() {
        let dir = tempdir().unwrap();
        let theme = acme_theme();

        let summary = generate(&theme, dir.path(), &StubConverter, &Printer::new()).unwrap();

        // 3 sizes x 4 shapes x 2 fills x 2 colours = 48 pairs.
        assert_eq!(summary.records.len(), 48);
        assert_eq!(summary.files_written(), 96);

        // Each bucket holds 32 files (16 SVG + 16 PNG).
        for bucket in ["128", "144", "192"] {
            let files = file_names(&dir.path().join("acme").join(bucket));
            assert_eq!(files.len(), 32, "bucket {bucket}");
        }

        // Archive exists with one entry per file.
        let archive = zip::ZipArchive::new(File::open(&summary.archive).unwrap()).unwrap();
        assert_eq!(archive.len(), 96);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempdir().unwrap();
        let theme = acme_theme();
        let printer = Printer::new();

        let first = generate(&theme, dir.path(), &StubConverter, &printer).unwrap();
        let sample = &first.records[17].vector_path;
        let first_svg = fs::read_to_string(sample).unwrap();
        let first_files = file_names(&dir.path().join("acme").join("128"));

        let second = generate(&theme, dir.path(), &StubConverter, &printer).unwrap();
        assert_eq!(fs::read_to_string(sample).unwrap(), first_svg);
        assert_eq!(file_names(&dir.path().join("acme").join("128")), first_files);
        assert_eq!(second.records.len(), first.records.len());
    }

    #[test]
    fn test_generate_replaces_stale_output() {
        let dir = tempdir().unwrap();
        let theme = acme_theme();
        let stale = dir.path().join("acme").join("stale.txt");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "leftover").unwrap();

        generate(&theme, dir.path(), &StubConverter, &Printer::new()).unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_conversion_failure_aborts_without_archive() {
        let dir = tempdir().unwrap();
        // Three colours give 72 combinations; fail on the 50th.
        let mut theme = acme_theme();
        theme.define("tertiary", "#0000ff");
        let converter = FailingConverter::new(50);

        let result = generate(&theme, dir.path(), &converter, &Printer::new());
        assert!(matches!(result, Err(IkonError::RasterFailed { .. })));

        // 49 pairs made it to disk; nothing was rolled back.
        let mut written = 0;
        for bucket in ["128", "144", "192"] {
            written += file_names(&dir.path().join("acme").join(bucket)).len();
        }
        assert_eq!(written, 98);
        assert!(written < 2 * combination_count(&theme));

        assert!(!dir.path().join("acme.zip").exists());
    }

    #[test]
    fn test_run_with_real_rasterizer() {
        let dir = tempdir().unwrap();
        let theme_path = dir.path().join("colors.txt");
        fs::write(&theme_path, acme_source()).unwrap();

        let args = BuildArgs {
            file: theme_path,
            output: dir.path().to_path_buf(),
        };

        run(args, &Printer::new()).unwrap();

        let archive = zip::ZipArchive::new(
            File::open(dir.path().join("acme.zip")).unwrap(),
        )
        .unwrap();
        assert_eq!(archive.len(), 96);

        // Spot-check one PNG decodes at canvas resolution.
        let png = dir
            .path()
            .join("acme")
            .join("192")
            .join("acme-192-circle-filled-primary.png");
        let img = image::open(&png).unwrap().to_rgba8();
        assert_eq!(img.width(), 192);
        assert_eq!(img.height(), 192);
    }

    #[test]
    fn test_run_missing_file_creates_nothing() {
        let dir = tempdir().unwrap();

        let args = BuildArgs {
            file: dir.path().join("absent.txt"),
            output: dir.path().to_path_buf(),
        };

        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(IkonError::ConfigNotFound { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generated_svg_matches_builder_output() {
        let dir = tempdir().unwrap();
        let theme = acme_theme();

        let summary = generate(&theme, dir.path(), &StubConverter, &Printer::new()).unwrap();

        let record = &summary.records[0];
        let on_disk = fs::read_to_string(&record.vector_path).unwrap();
        let job = enumerate(&theme).next().unwrap();
        let expected = svg_document(CANVAS_SIZE, &compute(&job.spec), job.colour_value);
        assert_eq!(on_disk, expected);
    }
}
