//! Argument helpers shared by the commands

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::info;

use crate::color::ColorBand;
use crate::config::Settings;
use crate::errors::{IndexError, IndexResult};
use crate::extractor::CropWindow;

/// Folder the pipeline downloads into when `--output` is not given
pub const DEFAULT_DOWNLOAD_DIR: &str = "data/archive_images";
/// Sheet written by the pipeline and `--index` when `--sheet` is not given
pub const DEFAULT_SHEET_PATH: &str = "outputs/image_index_sheet.xlsx";

/// The positional input argument
pub fn input(args: &ArgMatches) -> IndexResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| IndexError::GenericError("Missing input".to_string()))
}

/// Path option with a fallback
pub fn path_or(args: &ArgMatches, name: &str, default: &str) -> PathBuf {
    args.get_one::<String>(name)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Load the settings file given with `--config` and apply flag overrides
///
/// `--crop`, `--lower` and `--upper` replace the configured values.
pub fn settings(args: &ArgMatches) -> IndexResult<Settings> {
    let mut settings = Settings::load(args.get_one::<String>("config").map(Path::new))?;

    if let Some(values) = args.get_many::<String>("crop") {
        settings.crop_windows = values
            .map(|value| CropWindow::from_string(value))
            .collect::<IndexResult<Vec<_>>>()?;
        info!("Using {} crop window(s) from the command line", settings.crop_windows.len());
    }

    if let Some(lower) = args.get_one::<String>("lower") {
        settings.lower_band = ColorBand::parse_triple("lower_band", lower)?;
    }
    if let Some(upper) = args.get_one::<String>("upper") {
        settings.upper_band = ColorBand::parse_triple("upper_band", upper)?;
    }

    if let Some(title) = args.get_one::<String>("title") {
        settings.sheet_title = title.clone();
    }

    Ok(settings)
}
