use std::fmt;

use crate::models::Prefix;

/// Starter `main.c` for the TI-84 Plus CE toolchain.
///
/// Includes the batch header and opens a double-buffered graphics loop that
/// moves a cursor with the arrow keys until any key other than an arrow is
/// pressed. Drawing the converted tiles is left to the program author; the
/// image prefixes are listed as a comment.
#[derive(Debug)]
pub struct MainSource<'a> {
    pub header_name: &'a str,
    pub images: &'a [Prefix],
}

impl fmt::Display for MainSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#include <tice.h>")?;
        writeln!(f, "#include <graphx.h>")?;
        writeln!(f, "#include <keypadc.h>")?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f)?;
        writeln!(f, "#include \"{}\"", self.header_name)?;
        writeln!(f)?;
        if !self.images.is_empty() {
            writeln!(f, "/* Images:")?;
            for prefix in self.images {
                writeln!(
                    f,
                    " *   {prefix}_palette, {prefix}_tiles, {prefix}_map ({prefix}_map_w x {prefix}_map_h)"
                )?;
            }
            writeln!(f, " */")?;
            writeln!(f)?;
        }
        writeln!(f, "int main(void)")?;
        writeln!(f, "{{")?;
        writeln!(f, "    int x = 50, y = 50;")?;
        writeln!(f)?;
        writeln!(f, "    gfx_Begin();")?;
        writeln!(f, "    gfx_SetDrawBuffer();")?;
        writeln!(f, "    while (!os_GetCSC()) {{")?;
        writeln!(f, "        kb_Scan();")?;
        writeln!(f, "        uint8_t arrows = kb_Data[7];")?;
        writeln!(f, "        if (arrows & kb_Left) x--;")?;
        writeln!(f, "        if (arrows & kb_Right) x++;")?;
        writeln!(f, "        if (arrows & kb_Up) y--;")?;
        writeln!(f, "        if (arrows & kb_Down) y++;")?;
        writeln!(f, "        gfx_FillScreen(0);")?;
        writeln!(f, "        /* draw tiles at (x, y) here */")?;
        writeln!(f, "        gfx_SwapDraw();")?;
        writeln!(f, "    }}")?;
        writeln!(f, "    gfx_End();")?;
        writeln!(f, "    return 0;")?;
        writeln!(f, "}}")
    }
}
