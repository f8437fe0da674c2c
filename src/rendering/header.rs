use std::fmt;

use super::c_source::Declaration;
use crate::models::Prefix;

/// Aggregate `assets.h` declaring every symbol of a batch.
#[derive(Debug, Default)]
pub struct AssetsHeader {
    assets: Vec<(Prefix, Vec<Declaration>)>,
}

impl AssetsHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, prefix: Prefix, declarations: Vec<Declaration>) {
        self.assets.push((prefix, declarations));
    }
}

impl fmt::Display for AssetsHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut assets: Vec<&(Prefix, Vec<Declaration>)> = self.assets.iter().collect();
        assets.sort_by(|a, b| a.0.cmp(&b.0));

        writeln!(f, "#ifndef ASSETS_H")?;
        writeln!(f, "#define ASSETS_H")?;
        writeln!(f)?;
        writeln!(f, "#include <stdint.h>")?;
        for (prefix, decls) in assets {
            writeln!(f)?;
            writeln!(f, "/* {prefix} */")?;
            for d in decls {
                writeln!(f, "{d}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "#endif /* ASSETS_H */")
    }
}
