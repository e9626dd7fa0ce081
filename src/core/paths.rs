//! core::paths
//!
//! Centralized path routing for the register input and the generated
//! artifacts.
//!
//! # Architecture
//!
//! Every run works out of one base directory and touches exactly four
//! files: the register text it reads and the three artifacts it writes.
//! All four locations are computed here, in one place, from the base
//! directory plus optional per-file overrides. Overrides stack; a later
//! layer wins field by field (defaults, then the config file, then the
//! command line).
//!
//! Relative override paths resolve against the base directory; absolute
//! ones are taken as given.
//!
//! # Example
//!
//! ```
//! use kindred::core::paths::ArtifactPaths;
//! use std::path::{Path, PathBuf};
//!
//! let paths = ArtifactPaths::in_dir(Path::new("/data"));
//!
//! assert_eq!(paths.json, PathBuf::from("/data/name_list.json"));
//! assert_eq!(paths.html, PathBuf::from("/data/index.html"));
//! ```

use std::path::{Path, PathBuf};

/// Default register file name.
pub const DEFAULT_INPUT_FILE: &str = "Pokharel Family - combined database.txt";

/// Default JSON artifact file name.
pub const DEFAULT_JSON_FILE: &str = "name_list.json";

/// Default HTML artifact file name.
pub const DEFAULT_HTML_FILE: &str = "index.html";

/// Default discrepancy report file name.
pub const DEFAULT_REPORT_FILE: &str = "discrepancy.list";

/// Optional per-file path overrides, one layer of the precedence stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub input: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl PathOverrides {
    /// Layer `self` over `base`, field by field. `self` wins where set.
    pub fn merged_over(self, base: PathOverrides) -> PathOverrides {
        PathOverrides {
            input: self.input.or(base.input),
            json: self.json.or(base.json),
            html: self.html.or(base.html),
            report: self.report.or(base.report),
        }
    }
}

/// The four resolved file locations of one run.
///
/// # Invariants
///
/// - All paths are fully resolved; no code outside this module joins
///   artifact file names onto directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// The register text to read.
    pub input: PathBuf,
    /// The JSON artifact to write.
    pub json: PathBuf,
    /// The HTML artifact to write.
    pub html: PathBuf,
    /// The discrepancy report to write.
    pub report: PathBuf,
}

impl ArtifactPaths {
    /// All four defaults under one base directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            input: dir.join(DEFAULT_INPUT_FILE),
            json: dir.join(DEFAULT_JSON_FILE),
            html: dir.join(DEFAULT_HTML_FILE),
            report: dir.join(DEFAULT_REPORT_FILE),
        }
    }

    /// Defaults under `dir`, with any set override taking that file's
    /// place. Relative overrides land under `dir` too.
    pub fn resolve(dir: &Path, overrides: &PathOverrides) -> Self {
        let pick = |over: &Option<PathBuf>, default: &str| match over {
            // join() keeps an absolute override as-is
            Some(path) => dir.join(path),
            None => dir.join(default),
        };
        Self {
            input: pick(&overrides.input, DEFAULT_INPUT_FILE),
            json: pick(&overrides.json, DEFAULT_JSON_FILE),
            html: pick(&overrides.html, DEFAULT_HTML_FILE),
            report: pick(&overrides.report, DEFAULT_REPORT_FILE),
        }
    }
}
