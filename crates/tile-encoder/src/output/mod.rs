//! Pipeline output types.

mod encoded_image;

pub use encoded_image::EncodedImage;
