use crate::config::load_config;
use crate::images::ImageSet;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Assemble and validate the helper images injected into pipeline workloads.
///
/// Images are read from the config file first, then overridden by flags.
#[derive(Debug, Parser)]
#[command(name = "pipeline-images", version, about)]
pub struct Cli {
    /// YAML file with an `images` section keyed by image identifier.
    #[arg(long, env = "PIPELINE_IMAGES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Container image containing the entrypoint binary.
    #[arg(long = "entrypoint-image", env = "ENTRYPOINT_IMAGE")]
    pub entrypoint_image: Option<String>,

    /// Container image containing the sidecar log results binary.
    #[arg(long = "sidecarlogresults-image", env = "SIDECARLOGRESULTS_IMAGE")]
    pub sidecar_log_results_image: Option<String>,

    /// Container image used to stop sidecars.
    #[arg(long = "nop-image", env = "NOP_IMAGE")]
    pub nop_image: Option<String>,

    /// Container image containing Git.
    #[arg(long = "git-image", env = "GIT_IMAGE")]
    pub git_image: Option<String>,

    /// Container image containing a shell.
    #[arg(long = "shell-image", env = "SHELL_IMAGE")]
    pub shell_image: Option<String>,

    /// Container image containing a Windows shell.
    #[arg(long = "shell-image-win", env = "SHELL_IMAGE_WIN")]
    pub shell_image_win: Option<String>,

    /// Container image containing gsutil.
    #[arg(long = "gsutil-image", env = "GSUTIL_IMAGE")]
    pub gsutil_image: Option<String>,

    /// Container image containing the working dir init binary.
    #[arg(long = "workingdirinit-image", env = "WORKINGDIRINIT_IMAGE")]
    pub working_dir_init_image: Option<String>,
}

impl Cli {
    /// Overlays every given flag onto `images`. An explicitly empty flag clears the image.
    pub fn apply(&self, images: &mut ImageSet) {
        for (flag, target) in [
            (&self.entrypoint_image, &mut images.entrypoint_image),
            (&self.sidecar_log_results_image, &mut images.sidecar_log_results_image),
            (&self.nop_image, &mut images.nop_image),
            (&self.git_image, &mut images.git_image),
            (&self.shell_image, &mut images.shell_image),
            (&self.shell_image_win, &mut images.shell_image_win),
            (&self.gsutil_image, &mut images.gsutil_image),
            (&self.working_dir_init_image, &mut images.working_dir_init_image),
        ] {
            if let Some(value) = flag {
                target.clone_from(value);
            }
        }
    }

    /// Loads the config file, if any, and applies the flags on top. Does not validate.
    pub fn images(&self) -> Result<ImageSet> {
        let mut images = match &self.config {
            Some(path) => load_config(path)?.images,
            None => ImageSet::default(),
        };
        self.apply(&mut images);
        Ok(images)
    }
}
