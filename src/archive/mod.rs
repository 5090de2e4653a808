//! Consumers of extraction results
//!
//! `ImageRenamer` renames images after the number printed on them and
//! `SheetWriter` builds a spreadsheet index of a folder of images.

mod renamer;
mod sheet_writer;
#[cfg(test)]
mod tests;

pub use renamer::{ImageRenamer, RenameReport};
pub use sheet_writer::SheetWriter;
