//! C source emission for palettes, tile tables, tile maps and audio.
//!
//! Each source type implements [`fmt::Display`] and renders one complete
//! `.c` file. [`Declaration`]s describe the symbols a file defines so the
//! aggregate header can declare them.

use std::fmt;

use tile_encoder::{EncodedImage, MapWordWidth, PALETTE_SIZE};

use crate::models::Prefix;

/// Unsigned integer types used in emitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    U8,
    U16,
    U32,
}

impl CType {
    /// Narrowest of `uint16_t` / `uint32_t` that holds `value`.
    pub fn u16_or_u32(value: u64) -> Self {
        if value <= u16::MAX as u64 {
            CType::U16
        } else {
            CType::U32
        }
    }

    /// Narrowest of `uint8_t` / `uint16_t` / `uint32_t` that holds `value`.
    pub fn smallest(value: u64) -> Self {
        if value <= u8::MAX as u64 {
            CType::U8
        } else {
            Self::u16_or_u32(value)
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CType::U8 => "uint8_t",
            CType::U16 => "uint16_t",
            CType::U32 => "uint32_t",
        }
    }
}

impl From<MapWordWidth> for CType {
    fn from(width: MapWordWidth) -> Self {
        match width {
            MapWordWidth::U16 => CType::U16,
            MapWordWidth::U32 => CType::U32,
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `const` symbol defined by an emitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub ctype: CType,
    pub name: String,
    pub array: bool,
}

impl Declaration {
    fn scalar(ctype: CType, name: String) -> Self {
        Self {
            ctype,
            name,
            array: false,
        }
    }

    fn array(ctype: CType, name: String) -> Self {
        Self {
            ctype,
            name,
            array: true,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let brackets = if self.array { "[]" } else { "" };
        write!(f, "extern const {} {}{};", self.ctype, self.name, brackets)
    }
}

const INCLUDE: &str = "#include <stdint.h>";

/// Write `values` as comma-terminated lines of `per_line` entries.
fn write_rows<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    indent: &str,
    values: &[T],
    per_line: usize,
) -> fmt::Result {
    for row in values.chunks(per_line.max(1)) {
        f.write_str(indent)?;
        for v in row {
            write!(f, "{v},")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// `<prefix>_palette.c`
pub struct PaletteSource<'a> {
    pub prefix: &'a Prefix,
    pub image: &'a EncodedImage,
}

impl PaletteSource<'_> {
    pub fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::scalar(CType::U8, format!("{}_palette_len", self.prefix)),
            Declaration::array(CType::U8, format!("{}_palette", self.prefix)),
        ]
    }
}

impl fmt::Display for PaletteSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.prefix;
        writeln!(f, "{INCLUDE}")?;
        writeln!(f, "const uint8_t {p}_palette_len = {PALETTE_SIZE};")?;
        writeln!(f, "const uint8_t {p}_palette[] = {{")?;
        for c in self.image.palette().colors() {
            writeln!(f, " {},{},{},", c.r, c.g, c.b)?;
        }
        writeln!(f, "}};")
    }
}

/// `<prefix>_tiles.c`
pub struct TilesSource<'a> {
    pub prefix: &'a Prefix,
    pub image: &'a EncodedImage,
}

impl TilesSource<'_> {
    fn count_type(&self) -> CType {
        CType::u16_or_u32(self.image.tile_count() as u64)
    }

    fn dim_type(&self) -> CType {
        let size = self.image.tile_size();
        CType::smallest(size.width().max(size.height()) as u64)
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        let p = self.prefix;
        vec![
            Declaration::scalar(self.count_type(), format!("{p}_tile_count")),
            Declaration::scalar(self.dim_type(), format!("{p}_tile_w")),
            Declaration::scalar(self.dim_type(), format!("{p}_tile_h")),
            Declaration::array(CType::U8, format!("{p}_tiles")),
        ]
    }
}

impl fmt::Display for TilesSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.prefix;
        let size = self.image.tile_size();
        writeln!(f, "{INCLUDE}")?;
        writeln!(
            f,
            "const {} {p}_tile_count = {};",
            self.count_type(),
            self.image.tile_count()
        )?;
        writeln!(f, "const {} {p}_tile_w = {};", self.dim_type(), size.width())?;
        writeln!(f, "const {} {p}_tile_h = {};", self.dim_type(), size.height())?;
        writeln!(f, "const uint8_t {p}_tiles[] = {{")?;
        write_rows(f, "  ", &self.image.tile_bytes(), size.area())?;
        writeln!(f, "}};")
    }
}

/// `<prefix>_map.c`
pub struct MapSource<'a> {
    pub prefix: &'a Prefix,
    pub image: &'a EncodedImage,
}

impl MapSource<'_> {
    fn dim_type(&self) -> CType {
        let map = self.image.tile_map();
        CType::u16_or_u32(map.width().max(map.height()) as u64)
    }

    fn word_type(&self) -> CType {
        self.image.map_word_width().into()
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        let p = self.prefix;
        vec![
            Declaration::scalar(self.dim_type(), format!("{p}_map_h")),
            Declaration::scalar(self.dim_type(), format!("{p}_map_w")),
            Declaration::array(self.word_type(), format!("{p}_map")),
        ]
    }
}

impl fmt::Display for MapSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.prefix;
        let map = self.image.tile_map();
        writeln!(f, "{INCLUDE}")?;
        writeln!(f, "const {} {p}_map_h = {};", self.dim_type(), map.height())?;
        writeln!(f, "const {} {p}_map_w = {};", self.dim_type(), map.width())?;
        writeln!(f, "const {} {p}_map[] = {{", self.word_type())?;
        write_rows(f, "  ", map.ids(), map.width() as usize)?;
        writeln!(f, "}};")
    }
}

/// `<prefix>_audio.c`
pub struct AudioSource<'a> {
    pub prefix: &'a Prefix,
    pub data: &'a [u8],
    pub bytes_per_line: usize,
}

impl AudioSource<'_> {
    pub fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::scalar(CType::U32, format!("{}_audio_len", self.prefix)),
            Declaration::array(CType::U8, format!("{}_audio", self.prefix)),
        ]
    }
}

impl fmt::Display for AudioSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.prefix;
        writeln!(f, "{INCLUDE}")?;
        writeln!(f, "const uint32_t {p}_audio_len = {};", self.data.len())?;
        writeln!(f, "const uint8_t {p}_audio[] = {{")?;
        write_rows(f, "  ", self.data, self.bytes_per_line)?;
        writeln!(f, "}};")
    }
}
