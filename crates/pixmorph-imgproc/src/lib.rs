#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// boundary policies for reads outside the canvas.
pub mod border;

/// color adjustment module.
pub mod color;

/// alpha matting, compositing and cross dissolving.
pub mod composite;

/// image cropping module.
pub mod crop;

/// quantization and dithering module.
pub mod dither;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// utility functions for scaling images.
pub mod resize;

/// deterministic pixel scan utilities.
pub mod scan;

/// image geometric transformations module.
pub mod warp;
