//! Source image representation

mod source;

pub use source::SourceImage;
