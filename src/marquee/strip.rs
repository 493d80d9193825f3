//! Cell layout of the duplicated category strip.
//!
//! One copy of the strip is every label padded by a space on each side and
//! followed by a separator. The strip is drawn as that copy repeated back to
//! back, so the content at offset `copy_width` looks exactly like the content
//! at offset 0 and the scroll can wrap without a visible jump.

/// Separator drawn after every label.
const SEPARATOR: &str = " · ";

/// A single character cell of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripCell {
    /// Index of the category the cell belongs to, `None` for separators
    pub slot: Option<usize>,
    /// Character to draw
    pub ch: char,
}

/// Precomputed cells for one copy of the strip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StripLayout {
    cells: Vec<StripCell>,
}

impl StripLayout {
    /// Lays out labels in order.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut cells = Vec::new();

        for (index, label) in labels.iter().enumerate() {
            let padded = format!(" {} ", label.as_ref());
            cells.extend(padded.chars().map(|ch| StripCell {
                slot: Some(index),
                ch,
            }));
            cells.extend(SEPARATOR.chars().map(|ch| StripCell { slot: None, ch }));
        }

        Self { cells }
    }

    /// Width of one copy in cells (half of the duplicated content).
    pub fn copy_width(&self) -> usize {
        self.cells.len()
    }

    /// Cells visible in a viewport `width` cells wide scrolled to `offset`.
    ///
    /// The offset is truncated to a whole cell and wrapped into one copy.
    pub fn visible_cells(&self, offset: f64, width: usize) -> Vec<StripCell> {
        let Some(start) = self.wrap_column(offset) else {
            return Vec::new();
        };

        self.cells
            .iter()
            .cycle()
            .skip(start)
            .take(width)
            .copied()
            .collect()
    }

    /// Category under viewport column `column` when scrolled to `offset`.
    pub fn slot_at(&self, offset: f64, column: usize) -> Option<usize> {
        let start = self.wrap_column(offset)?;
        self.cells[(start + column) % self.cells.len()].slot
    }

    /// Column where `slot` starts within one copy.
    pub fn slot_start(&self, slot: usize) -> Option<usize> {
        self.cells.iter().position(|cell| cell.slot == Some(slot))
    }

    fn wrap_column(&self, offset: f64) -> Option<usize> {
        if self.cells.is_empty() || !offset.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let column = offset.rem_euclid(self.cells.len() as f64).floor() as usize;
        Some(column % self.cells.len())
    }
}
