//! @acp:module "Packager"
//! @acp:summary "Validate a skill folder and compress it into a .skill archive"
//! @acp:domain skill
//! @acp:layer service
//!
//! # Packaging Sequence
//!
//! 1. **Resolve** the skill folder to an absolute directory path
//! 2. **Gate** on `SKILL.md` validation; an invalid header produces no archive
//! 3. **Resolve** the output directory (created if missing, else the working directory)
//! 4. **Walk** every regular file under the folder and deflate it into
//!    `<output>/<folder>.<extension>`, named relative to the folder's parent
//!
//! Entry names therefore always start with the folder's own name. Steps 1-3
//! are [`Packager::prepare`] and step 4 is [`Packager::write`], so callers can
//! report a valid header before any archive I/O happens.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::PackageConfig;
use crate::error::{Error, Result};
use crate::skill::{check_skill, SkillHeader, SKILL_FILE};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Result of a successful packaging run
#[derive(Debug, Clone)]
pub struct PackageReport {
    /// Absolute path of the written archive
    pub archive_path: PathBuf,
    /// Header accepted by validation
    pub header: SkillHeader,
    /// Archive entry names, in write order
    pub entries: Vec<String>,
}

/// A validated skill folder and where its archive will go
#[derive(Debug, Clone)]
pub struct PackagePlan {
    /// Canonical skill folder
    pub skill_path: PathBuf,
    /// Archive to be written
    pub archive_path: PathBuf,
    /// Header accepted by validation
    pub header: SkillHeader,
}

/// Packs skill folders into compressed archives
#[derive(Debug, Clone)]
pub struct Packager {
    config: PackageConfig,
    exclude: Vec<Pattern>,
}

impl Packager {
    /// Create a packager, compiling the configured exclude patterns
    pub fn new(config: PackageConfig) -> Result<Self> {
        let exclude = config
            .exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { config, exclude })
    }

    /// Validate `skill_path` and write its archive into `output_dir`
    /// (or the working directory when `None`)
    pub fn package(
        &self,
        skill_path: impl AsRef<Path>,
        output_dir: Option<&Path>,
    ) -> Result<PackageReport> {
        let plan = self.prepare(skill_path, output_dir)?;
        self.write(plan, |_| {})
    }

    /// Resolve and validate a skill folder without touching the archive
    ///
    /// The output directory is created only once validation has passed.
    pub fn prepare(
        &self,
        skill_path: impl AsRef<Path>,
        output_dir: Option<&Path>,
    ) -> Result<PackagePlan> {
        let skill_path = resolve_skill_dir(skill_path.as_ref())?;

        if !skill_path.join(SKILL_FILE).is_file() {
            return Err(Error::MissingSkillFile(skill_path));
        }

        let header = check_skill(&skill_path)?;
        info!("Validated skill '{}' at {:?}", header.name, skill_path);

        let output_dir = resolve_output_dir(output_dir)?;
        let folder_name = skill_path
            .file_name()
            .ok_or_else(|| Error::Other(format!("Cannot package {:?}: no folder name", skill_path)))?
            .to_string_lossy()
            .into_owned();
        let archive_path =
            output_dir.join(format!("{}.{}", folder_name, self.config.extension));

        Ok(PackagePlan {
            skill_path,
            archive_path,
            header,
        })
    }

    /// Write the archive for a prepared folder, calling `on_entry` after
    /// each entry is added
    pub fn write(&self, plan: PackagePlan, on_entry: impl FnMut(&str)) -> Result<PackageReport> {
        let entries = self.write_archive(&plan.skill_path, &plan.archive_path, on_entry)?;
        info!(
            "Packaged {} file(s) into {:?}",
            entries.len(),
            plan.archive_path
        );

        Ok(PackageReport {
            archive_path: plan.archive_path,
            header: plan.header,
            entries,
        })
    }

    fn write_archive(
        &self,
        skill_path: &Path,
        archive_path: &Path,
        mut on_entry: impl FnMut(&str),
    ) -> Result<Vec<String>> {
        let root = skill_path
            .parent()
            .ok_or_else(|| Error::Other(format!("Cannot package {:?}: no parent folder", skill_path)))?;

        let file = File::create(archive_path)?;
        let mut zip = ZipWriter::new(file);
        let mut entries = Vec::new();

        for entry in WalkDir::new(skill_path).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            // Symlinked files count as files; directories are only traversed
            if !path.is_file() || path == archive_path {
                continue;
            }

            if self.is_excluded(skill_path, path) {
                warn!("Excluded from archive: {:?}", path);
                continue;
            }

            let name = entry_name(root, path)?;
            zip.start_file(name.as_str(), file_options(path)?)?;
            let mut source = File::open(path)?;
            io::copy(&mut source, &mut zip)?;
            debug!("Added {}", name);
            on_entry(&name);
            entries.push(name);
        }

        zip.finish()?;
        Ok(entries)
    }

    fn is_excluded(&self, skill_path: &Path, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }

        let relative = match entry_name(skill_path, path) {
            Ok(relative) => relative,
            Err(_) => return false,
        };

        self.exclude
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self {
            config: PackageConfig::default(),
            exclude: Vec::new(),
        }
    }
}

/// Package a skill folder with default settings, returning the archive path
pub fn package_skill(skill_path: impl AsRef<Path>, output_dir: Option<&Path>) -> Result<PathBuf> {
    Packager::default()
        .package(skill_path, output_dir)
        .map(|report| report.archive_path)
}

fn resolve_skill_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        return Err(Error::NotFound(shown));
    }

    let resolved = path.canonicalize()?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory(resolved));
    }

    Ok(resolved)
}

fn resolve_output_dir(output_dir: Option<&Path>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            Ok(dir.canonicalize()?)
        }
        None => Ok(std::env::current_dir()?.canonicalize()?),
    }
}

/// Archive name of `path` relative to `root`, always `/`-separated
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::Other(format!("{:?} is outside {:?}", path, root)))?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}

fn file_options(path: &Path) -> Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(fs::metadata(path)?.permissions().mode())
    };

    #[cfg(not(unix))]
    let _ = path;

    Ok(options)
}
