//! Spreadsheet index of a folder of images
//!
//! One row per image: the file stem in column A and a thumbnail in column B.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::ImageFormat;
use log::{info, warn};
use rust_xlsxwriter::{Image, Workbook};

use crate::errors::IndexResult;
use crate::utils::file_utils::{file_stem_string, has_image_extension, image_reader, list_image_files};
use crate::utils::progress::ProgressTracker;

/// Column holding the image names
const NAME_COLUMN: u16 = 0;
/// Column holding the thumbnails
const THUMBNAIL_COLUMN: u16 = 1;

/// Writes `.xlsx` index sheets
pub struct SheetWriter {
    image_extensions: Vec<String>,
    thumbnail_width: u32,
    thumbnail_height: u32,
}

impl SheetWriter {
    /// Create a writer
    ///
    /// # Arguments
    /// * `image_extensions` - Lowercase extensions of the files to index
    /// * `thumbnail_width` - Maximum thumbnail width in pixels
    /// * `thumbnail_height` - Maximum thumbnail height in pixels
    pub fn new(image_extensions: &[String], thumbnail_width: u32, thumbnail_height: u32) -> Self {
        SheetWriter {
            image_extensions: image_extensions.to_vec(),
            thumbnail_width,
            thumbnail_height,
        }
    }

    /// Build a sheet listing every image of a folder
    ///
    /// Images that cannot be decoded still get a name row, without a
    /// thumbnail.
    ///
    /// # Arguments
    /// * `images_folder` - Folder containing the images
    /// * `output` - Path of the `.xlsx` file to write
    /// * `title` - Worksheet name
    ///
    /// # Returns
    /// The names written, in row order
    pub fn create_sheet_from_images(&self, images_folder: &Path, output: &Path, title: &str) -> IndexResult<Vec<String>> {
        let files = list_image_files(images_folder, |path| has_image_extension(path, &self.image_extensions))?;
        info!("Indexing {} image(s) from {} into {}", files.len(), images_folder.display(), output.display());

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(title)?;
        worksheet.set_column_width_pixels(THUMBNAIL_COLUMN, self.thumbnail_width as u16)?;

        let progress = ProgressTracker::new(files.len() as u64, "Writing index sheet");
        let mut names = Vec::with_capacity(files.len());

        for (row, path) in files.iter().enumerate() {
            let row = row as u32;
            let name = file_stem_string(path);
            progress.set_item(&name);
            worksheet.write_string(row, NAME_COLUMN, &name)?;

            match self.thumbnail_png(path) {
                Ok(png) => {
                    let thumbnail = Image::new_from_buffer(&png)?;
                    worksheet.set_row_height_pixels(row, self.thumbnail_height as u16)?;
                    worksheet.insert_image(row, THUMBNAIL_COLUMN, &thumbnail)?;
                }
                Err(e) => warn!("No thumbnail for {}: {}", path.display(), e),
            }

            names.push(name);
            progress.increment(1);
        }

        progress.finish();

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        workbook.save(output)?;

        info!("Wrote {} row(s) to {}", names.len(), output.display());
        Ok(names)
    }

    /// Scale an image to fit the thumbnail box and encode it as PNG
    fn thumbnail_png(&self, path: &Path) -> IndexResult<Vec<u8>> {
        let thumbnail = image_reader(path)?.decode()?.resize(self.thumbnail_width, self.thumbnail_height, FilterType::Triangle);

        let mut png = Vec::new();
        thumbnail.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}
