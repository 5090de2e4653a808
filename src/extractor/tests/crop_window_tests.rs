//! Tests for crop window parsing, validation and cropping

extern crate std;

use image::Rgb;
use crate::extractor::CropWindow;
use crate::test_utils::{fill_rect, solid_image, BLUE, WHITE};

#[test]
fn test_parse_full_and_rect() {
    std::assert_eq!(CropWindow::from_string("full").unwrap(), CropWindow::Whole);
    std::assert_eq!(CropWindow::from_string(" Whole ").unwrap(), CropWindow::Whole);
    std::assert_eq!(
        CropWindow::from_string("10, 10,90,190").unwrap(),
        CropWindow::rect(10, 10, 90, 190)
    );
}

#[test]
fn test_parse_rejects_malformed_windows() {
    for bad in ["not_a_list", "1,2,3", "1,2,3,4,5", "1,2,x,4", "-1,0,10,10", "1.5,0,10,10"] {
        let err = CropWindow::from_string(bad).unwrap_err();
        std::assert!(err.is_validation(), "{} should be rejected", bad);
        std::assert!(err.to_string().contains("crop_windows"));
    }
}

#[test]
fn test_from_components() {
    std::assert_eq!(CropWindow::from_components(&[0, 1, 2, 3]).unwrap(), CropWindow::rect(0, 1, 2, 3));
    std::assert!(CropWindow::from_components(&[0, 1, 2]).is_err());
    std::assert!(CropWindow::from_components(&[0, 1, 2, i64::MAX]).is_err());
}

#[test]
fn test_validate_against_bounds() {
    std::assert!(CropWindow::Whole.validate_against(10, 10).is_ok());
    std::assert!(CropWindow::rect(0, 0, 10, 20).validate_against(20, 10).is_ok());

    // zero area
    std::assert!(CropWindow::rect(5, 0, 5, 10).validate_against(20, 20).is_err());
    std::assert!(CropWindow::rect(0, 7, 10, 7).validate_against(20, 20).is_err());
    // inverted
    std::assert!(CropWindow::rect(8, 0, 2, 10).validate_against(20, 20).is_err());
    // out of bounds
    std::assert!(CropWindow::rect(0, 0, 21, 10).validate_against(20, 20).is_err());
    std::assert!(CropWindow::rect(0, 0, 10, 21).validate_against(20, 20).is_err());
}

#[test]
fn test_crop_uses_top_left_bottom_right() {
    let mut image = solid_image(30, 20, WHITE);
    fill_rect(&mut image, 12, 4, 1, 1, BLUE);

    // rows 2..10, columns 10..25
    let cropped = CropWindow::rect(2, 10, 10, 25).crop(&image);
    std::assert_eq!(cropped.dimensions(), (15, 8));
    std::assert_eq!(*cropped.get_pixel(2, 2), BLUE);
    std::assert_eq!(*cropped.get_pixel(0, 0), Rgb([255, 255, 255]));

    let whole = CropWindow::Whole.crop(&image);
    std::assert_eq!(whole.dimensions(), (30, 20));
}

#[test]
fn test_display() {
    std::assert_eq!(CropWindow::Whole.to_string(), "full");
    std::assert_eq!(CropWindow::rect(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
}
