pub mod c_source;
pub mod header;
pub mod program;

pub use c_source::{AudioSource, CType, Declaration, MapSource, PaletteSource, TilesSource};
pub use header::AssetsHeader;
pub use program::MainSource;
