//! Image output for rendered star maps

pub mod image;

pub use self::image::{array2_to_gray_image, save_gray_image, ImageWriteError};
