use serde::Deserialize;
use std::fmt;
use thiserror::Error;

pub const ENTRYPOINT_IMAGE: &str = "entrypoint-image";
pub const SIDECAR_LOG_RESULTS_IMAGE: &str = "sidecarlogresults-image";
pub const NOP_IMAGE: &str = "nop-image";
pub const GIT_IMAGE: &str = "git-image";
pub const SHELL_IMAGE: &str = "shell-image";
pub const SHELL_IMAGE_WIN: &str = "shell-image-win";
pub const GSUTIL_IMAGE: &str = "gsutil-image";
pub const WORKING_DIR_INIT_IMAGE: &str = "workingdirinit-image";

/// Image references for the helper containers injected into pipeline workloads.
///
/// An empty string means the image is unset. Call [`ImageSet::validate`] once the
/// set is assembled and before it is handed to anything that builds pods.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSet {
    /// Image containing the entrypoint binary that wraps every step.
    #[serde(rename = "entrypoint-image")]
    pub entrypoint_image: String,
    /// Image containing the binary that reads step results and writes them to stdout.
    #[serde(rename = "sidecarlogresults-image")]
    pub sidecar_log_results_image: String,
    /// Image used to kill sidecars.
    #[serde(rename = "nop-image")]
    pub nop_image: String,
    /// Image with Git, used for source-fetch steps.
    #[serde(rename = "git-image")]
    pub git_image: String,
    /// Image containing a bash shell.
    #[serde(rename = "shell-image")]
    pub shell_image: String,
    /// Image containing powershell.
    #[serde(rename = "shell-image-win")]
    pub shell_image_win: String,
    /// Image containing gsutil.
    #[serde(rename = "gsutil-image")]
    pub gsutil_image: String,
    /// Image containing the working dir init binary.
    #[serde(rename = "workingdirinit-image")]
    pub working_dir_init_image: String,
}

type Accessor = fn(&ImageSet) -> &String;

// Any new image must be added here as well, or it will never be validated.
static IMAGE_TABLE: [(&str, Accessor); 8] = [
    (ENTRYPOINT_IMAGE, |i| &i.entrypoint_image),
    (SIDECAR_LOG_RESULTS_IMAGE, |i| &i.sidecar_log_results_image),
    (NOP_IMAGE, |i| &i.nop_image),
    (GIT_IMAGE, |i| &i.git_image),
    (SHELL_IMAGE, |i| &i.shell_image),
    (SHELL_IMAGE_WIN, |i| &i.shell_image_win),
    (GSUTIL_IMAGE, |i| &i.gsutil_image),
    (WORKING_DIR_INIT_IMAGE, |i| &i.working_dir_init_image),
];

/// Returned by [`ImageSet::validate`] when one or more images are unset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("found unset image flags: {}", BracketList(.unset))]
pub struct MissingImagesError {
    unset: Vec<&'static str>,
}

impl MissingImagesError {
    /// Canonical identifiers of the unset images, sorted ascending.
    pub fn unset(&self) -> &[&'static str] {
        &self.unset
    }
}

struct BracketList<'a>(&'a [&'static str]);

impl fmt::Display for BracketList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

impl ImageSet {
    /// Canonical identifiers, in declaration order.
    pub const IDENTIFIERS: [&'static str; 8] = [
        ENTRYPOINT_IMAGE,
        SIDECAR_LOG_RESULTS_IMAGE,
        NOP_IMAGE,
        GIT_IMAGE,
        SHELL_IMAGE,
        SHELL_IMAGE_WIN,
        GSUTIL_IMAGE,
        WORKING_DIR_INIT_IMAGE,
    ];

    /// Returns an error listing every unset image.
    pub fn validate(&self) -> Result<(), MissingImagesError> {
        let mut unset: Vec<&'static str> = self
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();

        if unset.is_empty() {
            return Ok(());
        }
        unset.sort_unstable();
        Err(MissingImagesError { unset })
    }

    /// `(identifier, reference)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        IMAGE_TABLE
            .iter()
            .map(move |(name, accessor)| (*name, accessor(self).as_str()))
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == identifier)
            .map(|(_, value)| value)
    }
}
