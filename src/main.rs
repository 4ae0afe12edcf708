//! micrometa - print voxel sizes and plane counts from acquisition metadata.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use micrometa::{
    config::{Config, OutputFormat},
    metadata::{get_acquisition_metadata, resolve_voxel_size, Metadata, VoxelSize},
    MetadataError,
};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let voxel_size = match read_voxel_size(&config) {
        Ok(size) => size,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match render(&voxel_size, config.output) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Open the metadata file (if any) and merge in manual values.
fn read_voxel_size(config: &Config) -> Result<VoxelSize, MetadataError> {
    let manual = config.manual();

    let metadata = match &config.metadata {
        // Every value is given by hand; the file is not needed
        Some(path) if manual.is_complete() => {
            debug!(path = %path.display(), "manual values override metadata file");
            None
        }
        Some(path) => Some(get_acquisition_metadata(path)?),
        None => None,
    };

    resolve_voxel_size::<Metadata>(metadata.as_ref(), &manual)
}

fn render(size: &VoxelSize, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(size),
        OutputFormat::Text => Ok(format!(
            "x_pixel_um: {}\ny_pixel_um: {}\nz_pixel_um: {}\nnum_planes: {}",
            size.x_pixel_um, size.y_pixel_um, size.z_pixel_um, size.num_planes
        )),
    }
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so stdout carries only results.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "micrometa=debug"
    } else {
        "micrometa=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
