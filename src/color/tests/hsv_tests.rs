//! Tests for the RGB to HSV conversion

extern crate std;

use image::{Rgb, RgbImage};
use crate::color::{rgb_to_hsv, to_hsv_image, Hsv};

#[test]
fn test_primary_colors() {
    std::assert_eq!(rgb_to_hsv(255, 0, 0), Hsv::new(0, 255, 255));
    std::assert_eq!(rgb_to_hsv(0, 255, 0), Hsv::new(60, 255, 255));
    std::assert_eq!(rgb_to_hsv(0, 0, 255), Hsv::new(120, 255, 255));
}

#[test]
fn test_achromatic_pixels_have_no_hue() {
    std::assert_eq!(rgb_to_hsv(0, 0, 0), Hsv::new(0, 0, 0));
    std::assert_eq!(rgb_to_hsv(128, 128, 128), Hsv::new(0, 0, 128));
    std::assert_eq!(rgb_to_hsv(255, 255, 255), Hsv::new(0, 0, 255));
}

#[test]
fn test_secondary_and_mixed_colors() {
    // Cyan sits at 180 degrees
    std::assert_eq!(rgb_to_hsv(0, 255, 255), Hsv::new(90, 255, 255));
    // Magenta sits at 300 degrees
    std::assert_eq!(rgb_to_hsv(255, 0, 255), Hsv::new(150, 255, 255));
    // Half-saturated light blue
    let light_blue = rgb_to_hsv(100, 150, 200);
    std::assert_eq!(light_blue.h, 105);
    std::assert_eq!(light_blue.s, 128);
    std::assert_eq!(light_blue.v, 200);
}

#[test]
fn test_hue_wraps_near_red() {
    // 359 degrees rounds up past the end of the range and wraps to 0
    let hsv = rgb_to_hsv(255, 0, 1);
    std::assert_eq!(hsv.h, 0);
}

#[test]
fn test_hsv_image_matches_pixel_conversion() {
    let mut image = RgbImage::new(2, 1);
    image.put_pixel(0, 0, Rgb([0, 0, 255]));
    image.put_pixel(1, 0, Rgb([10, 20, 30]));

    let hsv = to_hsv_image(&image);
    std::assert_eq!(hsv.dimensions(), (2, 1));
    std::assert_eq!(hsv.get_pixel(0, 0).0, [120, 255, 255]);

    let expected = rgb_to_hsv(10, 20, 30);
    std::assert_eq!(hsv.get_pixel(1, 0).0, [expected.h, expected.s, expected.v]);

    // Source untouched
    std::assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255]);
}
