use crate::foundation::error::{ClawError, ClawResult};

const DENSE: &str = "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.";
const BASIC: &str = "@%#*+=-:.";
const BLOCKS: &str = "█▓▒░";

/// Ordered glyphs from densest (index 0) to sparsest.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from literal characters, densest first.
    pub fn new(chars: &str) -> ClawResult<Self> {
        let glyphs: Vec<char> = chars.chars().collect();
        if glyphs.is_empty() {
            return Err(ClawError::validation("glyph ramp must not be empty"));
        }
        Ok(Self { glyphs })
    }

    /// Long 69-step ramp.
    pub fn dense() -> Self {
        Self::preset(DENSE)
    }

    /// Short 9-step ramp.
    pub fn basic() -> Self {
        Self::preset(BASIC)
    }

    /// Unicode shade blocks.
    pub fn blocks() -> Self {
        Self::preset(BLOCKS)
    }

    fn preset(chars: &str) -> Self {
        Self {
            glyphs: chars.chars().collect(),
        }
    }

    /// Look up a preset by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dense" => Some(Self::dense()),
            "basic" => Some(Self::basic()),
            "blocks" => Some(Self::blocks()),
            _ => None,
        }
    }

    /// Preset name, or literal characters when no preset matches.
    pub fn parse(arg: &str) -> ClawResult<Self> {
        match Self::from_name(arg) {
            Some(r) => Ok(r),
            None => Self::new(arg),
        }
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always `false` for a constructed ramp.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, clamped to the last glyph.
    pub fn glyph(&self, index: usize) -> char {
        let last = self.glyphs.len().saturating_sub(1);
        self.glyphs.get(index.min(last)).copied().unwrap_or(' ')
    }

    /// Glyphs in ramp order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::dense()
    }
}

impl TryFrom<String> for GlyphRamp {
    type Error = ClawError;

    fn try_from(value: String) -> ClawResult<Self> {
        Self::parse(&value)
    }
}

impl From<GlyphRamp> for String {
    fn from(value: GlyphRamp) -> Self {
        value.glyphs.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/ramp.rs"]
mod tests;
