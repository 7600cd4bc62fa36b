//! 8-bit raster to image file conversion

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use ndarray::Array2;
use thiserror::Error;

/// Failure to encode or write a rendered image
#[derive(Error, Debug)]
pub enum ImageWriteError {
    #[error("Failed to write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Converts an ndarray Array2<u8> to an image::GrayImage
///
/// Array indices [y, x] map to pixel coordinates (x, y). Array dimensions are
/// (height, width) while image dimensions are (width, height).
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();

    let mut img = GrayImage::new(width as u32, height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Luma([arr[[y as usize, x as usize]]]);
    }

    img
}

/// Save an 8-bit raster as a grayscale image file
///
/// The encoder is picked from the file extension (`.png`, `.tif`, ...).
///
/// # Errors
/// [`ImageWriteError::Encode`] when the format is unknown or the file cannot
/// be written.
pub fn save_gray_image<P: AsRef<Path>>(
    raster: &Array2<u8>,
    path: P,
) -> Result<(), ImageWriteError> {
    let path = path.as_ref();
    array2_to_gray_image(raster)
        .save(path)
        .map_err(|source| ImageWriteError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
