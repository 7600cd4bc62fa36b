//! Tycho-2 star catalog reader and star map renderer
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`catalogs::tycho2`] reads a `catalog.dat` file into a list of [`Star`]s,
//!    deriving a visual magnitude from the BT/VT bands and dropping rows that
//!    cannot be parsed.
//! 2. [`filter_stars`] keeps the stars inside a [`SkyWindow`] that are at
//!    least as bright as a magnitude ceiling.
//! 3. [`render_stars`] bins the stars onto an 8-bit raster, which
//!    [`io::save_gray_image`] writes to disk.
//!
//! ```rust,no_run
//! use starfinder::{filter_stars, read_stars, render_stars, ImageSize, SkyWindow};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let window = SkyWindow::new(70.0, 95.0, -15.0, 15.0);
//! let stars = filter_stars(read_stars("data/tycho2/catalog.dat")?, &window, 6.0);
//! let raster = render_stars(&stars, ImageSize::from_width_height(800, 600), &window);
//! starfinder::io::save_gray_image(&raster, "orion.png")?;
//! # Ok(())
//! # }
//! ```

pub mod catalogs;
pub mod filter;
pub mod image_size;
pub mod io;
pub mod render;
pub mod shared_args;
pub mod sky_window;
pub mod star;

// Re-exports for easier access
pub use catalogs::{read_stars, read_stars_with_summary, CatalogError, ReadSummary, RecordError};
pub use filter::filter_stars;
pub use image_size::ImageSize;
pub use render::render_stars;
pub use sky_window::SkyWindow;
pub use star::Star;
