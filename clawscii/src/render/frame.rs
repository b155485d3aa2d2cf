use std::fmt;

/// One rendered character frame.
///
/// Rows hold at most `cols` characters. Trailing rows that are blank after trimming whitespace
/// are dropped from the end only; blank rows at the start or in the middle are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    /// Build a frame, dropping trailing blank rows.
    pub fn from_rows(mut rows: Vec<String>) -> Self {
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        Self { rows }
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows kept after trimming.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in characters.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// `true` when every row was blank.
    pub fn is_blank(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows joined by `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
