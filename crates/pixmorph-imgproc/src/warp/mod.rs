//! Geometric image transformations.
//!
//! - Rotation about the image center onto a canvas that fits the result
//! - Field warping driven by pairs of oriented line segments
//! - Morphing between two images along interpolated segments
//!
//! # Examples
//!
//! Warping with a single correspondence that moves everything two pixels
//! to the left:
//!
//! ```
//! use pixmorph_geometry::{OrientedLineSegment, SegmentPair};
//! use pixmorph_image::{Image, Pixel};
//! use pixmorph_imgproc::warp::field_warp;
//!
//! let image = Image::from_size_val([8, 8].into(), Pixel::new(255, 9, 9, 9));
//! let pair = SegmentPair::new(
//!     OrientedLineSegment::new((2.0, 0.0), (2.0, 8.0)),
//!     OrientedLineSegment::new((0.0, 0.0), (0.0, 8.0)),
//! );
//! let warped = field_warp(&image, &[pair]).unwrap();
//!
//! assert_eq!(warped[(0, 4)], Pixel::new(255, 9, 9, 9));
//! assert_eq!(warped[(7, 4)], Pixel::TRANSPARENT);
//! ```

mod field;
mod morph;
mod rotate;

pub use field::field_warp;
pub use morph::morph;
pub use rotate::rotate;
