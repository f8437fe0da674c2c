use std::path::Path;

use tile_encoder::{EncodedImage, TileEncoder, TileSize};

use super::artifact_writer::ArtifactWriter;
use super::report::{AssetStats, ConvertedAsset};
use crate::decoding::read_png;
use crate::error::ConvertError;
use crate::models::{Artifact, ArtifactKind, AssetKind, ImageConfig, Prefix};
use crate::rendering::{Declaration, MapSource, PaletteSource, TilesSource};

/// Converts PNG files into palette, tile and map C sources.
#[derive(Debug, Clone, Copy)]
pub struct ImageConverter {
    encoder: TileEncoder,
}

impl Default for ImageConverter {
    fn default() -> Self {
        Self {
            encoder: TileEncoder::new(),
        }
    }
}

impl ImageConverter {
    pub fn new(encoder: TileEncoder) -> Self {
        Self { encoder }
    }

    /// Build from configuration, validating tile size and color count.
    pub fn from_config(config: &ImageConfig) -> Result<Self, ConvertError> {
        let size = TileSize::new(config.tile_width, config.tile_height)?;
        // Reject a bad color count before any file is read
        tile_encoder::Quantizer::new(config.colors)?;
        Ok(Self::new(
            TileEncoder::new().tile_size(size).colors(config.colors),
        ))
    }

    /// Render the three artifacts for an encoded image.
    pub fn render(prefix: &Prefix, image: &EncodedImage) -> (Vec<Artifact>, Vec<Declaration>) {
        let palette = PaletteSource { prefix, image };
        let tiles = TilesSource { prefix, image };
        let map = MapSource { prefix, image };

        let mut declarations = palette.declarations();
        declarations.extend(tiles.declarations());
        declarations.extend(map.declarations());

        let artifacts = vec![
            Artifact::new(
                ArtifactKind::Palette,
                format!("{prefix}{}", ArtifactKind::Palette.suffix()),
                palette.to_string(),
            ),
            Artifact::new(
                ArtifactKind::Tiles,
                format!("{prefix}{}", ArtifactKind::Tiles.suffix()),
                tiles.to_string(),
            ),
            Artifact::new(
                ArtifactKind::Map,
                format!("{prefix}{}", ArtifactKind::Map.suffix()),
                map.to_string(),
            ),
        ];
        (artifacts, declarations)
    }

    /// Decode `source`, encode it and write `<prefix>_{palette,tiles,map}.c`
    /// into `out_dir`.
    ///
    /// Nothing is written unless decoding and encoding succeed, and a failed
    /// write removes the files written before it.
    pub fn convert(
        &self,
        source: &Path,
        out_dir: &Path,
        prefix: &Prefix,
    ) -> Result<ConvertedAsset, ConvertError> {
        let image = read_png(source)?;
        let encoded = self.encoder.encode(&image)?;
        let (artifacts, declarations) = Self::render(prefix, &encoded);

        let files = ArtifactWriter::create(out_dir)?.write_all(&artifacts)?;

        let stats = AssetStats::Image {
            width: encoded.width(),
            height: encoded.height(),
            colors: encoded.palette().used(),
            tiles: encoded.tile_count(),
            map_width: encoded.tile_map().width(),
            map_height: encoded.tile_map().height(),
        };
        tracing::info!(
            source = %source.display(),
            %prefix,
            width = encoded.width(),
            height = encoded.height(),
            colors = encoded.palette().used(),
            tiles = encoded.tile_count(),
            "Converted image"
        );

        Ok(ConvertedAsset {
            source: source.to_path_buf(),
            kind: AssetKind::Image,
            prefix: prefix.clone(),
            files,
            declarations,
            stats,
        })
    }
}
