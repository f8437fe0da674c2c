pub mod artifact_writer;
pub mod audio_converter;
pub mod batch;
pub mod image_converter;
pub mod report;

pub use artifact_writer::ArtifactWriter;
pub use audio_converter::AudioConverter;
pub use batch::{BatchConverter, BatchEntry, BatchFailure, BatchReport};
pub use image_converter::ImageConverter;
pub use report::{AssetStats, ConvertedAsset};
