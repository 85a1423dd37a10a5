//! Build plan
//!
//! Everything a run needs to know: where templates live, where outputs go and which
//! outputs to produce.
use crate::error::Result;

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".j2";
pub const DEFAULT_OUTPUTS: [&str; 3] = ["post-events.js", "create-object.js", "create-owner.js"];

/// Fragment template filenames, rendered once and injected in every output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fragments {
    #[serde(default = "default_require")]
    pub require: String,
    #[serde(default = "default_auth")]
    pub auth: String,
}

fn default_require() -> String {
    "require.js.j2".to_owned()
}

fn default_auth() -> String {
    "auth.js.j2".to_owned()
}

impl Default for Fragments {
    fn default() -> Self {
        Fragments {
            require: default_require(),
            auth: default_auth(),
        }
    }
}

/// Build plan as read from a YAML file. Every field is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    pub output_dir: Option<PathBuf>,
    pub template_suffix: Option<String>,
    pub outputs: Option<Vec<String>>,
    pub fragments: Option<Fragments>,
}

impl PlanFile {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(serde_norway::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        trace!("reading build plan from: {path:?}");
        Self::parse(&read_to_string(path)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildPlan {
    /// Directory templates are loaded from.
    pub base_dir: PathBuf,
    /// Output directory, relative paths are resolved against `base_dir`.
    /// `None` means `<base_dir>/dist`.
    pub output_dir: Option<PathBuf>,
    /// Output filenames in render order.
    pub outputs: Vec<String>,
    /// Suffix appended to an output filename to get its template name.
    pub template_suffix: String,
    pub fragments: Fragments,
    /// Render everything but skip writes.
    pub check_mode: bool,
    /// Create the output directory before writing.
    pub create_output_dir: bool,
}

impl BuildPlan {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        BuildPlan {
            base_dir: base_dir.into(),
            output_dir: None,
            outputs: DEFAULT_OUTPUTS.iter().map(|s| s.to_string()).collect(),
            template_suffix: DEFAULT_TEMPLATE_SUFFIX.to_owned(),
            fragments: Fragments::default(),
            check_mode: false,
            create_output_dir: false,
        }
    }

    /// Override defaults with the values present in `plan_file`.
    pub fn merge(self, plan_file: PlanFile) -> Self {
        BuildPlan {
            output_dir: plan_file.output_dir.or(self.output_dir),
            outputs: plan_file.outputs.unwrap_or(self.outputs),
            template_suffix: plan_file.template_suffix.unwrap_or(self.template_suffix),
            fragments: plan_file.fragments.unwrap_or(self.fragments),
            ..self
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.join(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir().join(filename)
    }

    pub fn template_name(&self, filename: &str) -> String {
        format!("{filename}{}", self.template_suffix)
    }
}
