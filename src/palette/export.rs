//! Text exports of a [`Palette`].

use std::str::FromStr;
use crate::{Error, Palette, Result};

/// Export format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// CSS custom properties in a `:root` block.
    Css,
    /// Sass variables.
    Scss,
    /// Pretty-printed JSON of the whole palette.
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Css => "text/css",
            ExportFormat::Scss => "text/scss",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" | "sass" => Ok(ExportFormat::Scss),
            "json" => Ok(ExportFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Lowercase `name` with every run of whitespace replaced by `-`.
fn slug(name: &str) -> String {
    let mut s = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space { s.push('-') }
            in_space = true;
        } else {
            s.extend(c.to_lowercase());
            in_space = false;
        }
    }
    s
}

impl Palette {
    /// Render the palette in the given format.
    ///
    /// # Example
    ///
    /// ```
    /// use color_harmony::{Palette, PaletteMode, palette::ExportFormat};
    /// let p = Palette::generate(PaletteMode::Custom { base: "#ff0000".into() });
    /// assert_eq!(p.export(ExportFormat::Scss).unwrap(), "$color-1: #ff0000;");
    /// ```
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        let lines = || self.iter().enumerate()
            .map(|(i, c)| (i + 1, c.hex()));
        Ok(match format {
            ExportFormat::Css => {
                let vars: Vec<_> = lines()
                    .map(|(i, hex)| format!("  --color-{i}: {hex};"))
                    .collect();
                format!(":root {{\n{}\n}}", vars.join("\n"))
            }
            ExportFormat::Scss => lines()
                .map(|(i, hex)| format!("$color-{i}: {hex};"))
                .collect::<Vec<_>>()
                .join("\n"),
            ExportFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// File name for an export, e.g. `triadic-harmony.css`.
    pub fn filename(&self, format: ExportFormat) -> String {
        format!("{}.{}", slug(self.name()), format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use crate::{HarmonyKind, PaletteMode};

    fn triadic() -> Palette {
        Palette::generate_with(
            PaletteMode::Harmony { base: "#ff0000".into(),
                                   kind: HarmonyKind::Triadic },
            &mut StdRng::seed_from_u64(0), 5)
    }

    #[test]
    fn css() {
        assert_eq!(triadic().export(ExportFormat::Css).unwrap(),
                   ":root {\n  --color-1: #ff0000;\n  --color-2: #00ff00;\n  \
                    --color-3: #0000ff;\n  --color-4: #ed5e5e;\n  \
                    --color-5: #5eed5e;\n}");
    }

    #[test]
    fn single_color() {
        let p = Palette::generate_with(
            PaletteMode::Custom { base: "#FF0000".into() },
            &mut StdRng::seed_from_u64(0), 5);
        assert_eq!(p.export(ExportFormat::Css).unwrap(),
                   ":root {\n  --color-1: #ff0000;\n}");
        assert_eq!(p.export(ExportFormat::Scss).unwrap(), "$color-1: #ff0000;");
    }

    #[test]
    fn scss() {
        assert_eq!(triadic().export(ExportFormat::Scss).unwrap(),
                   "$color-1: #ff0000;\n$color-2: #00ff00;\n$color-3: #0000ff;\n\
                    $color-4: #ed5e5e;\n$color-5: #5eed5e;");
    }

    #[test]
    fn json() {
        let p = triadic();
        let s = p.export(ExportFormat::Json).unwrap();
        assert!(s.starts_with("{\n  \"id\": 5,"));
        let back: Palette = serde_json::from_str(&s).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn filenames() {
        let p = triadic();
        assert_eq!(p.filename(ExportFormat::Css), "triadic-harmony.css");
        assert_eq!(p.filename(ExportFormat::Json), "triadic-harmony.json");
        assert_eq!(slug("  Random \t Palette 12"), "-random-palette-12");
    }

    #[test]
    fn format_names() {
        assert_eq!("CSS".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!("sass".parse::<ExportFormat>().unwrap(), ExportFormat::Scss);
        assert!("ase".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }
}
