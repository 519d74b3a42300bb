//! Character ranges and the dim-region complement computation.

use ropey::RopeSlice;

/// A half-open `[start, end)` interval of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
  pub start: usize,
  pub end:   usize,
}

impl CharRange {
  pub fn new(start: usize, end: usize) -> Self {
    debug_assert!(start <= end, "inverted range {start}..{end}");
    Self { start, end }
  }

  pub fn len(&self) -> usize {
    self.end - self.start
  }

  pub fn is_empty(&self) -> bool {
    self.start == self.end
  }

  pub fn contains(&self, pos: usize) -> bool {
    self.start <= pos && pos < self.end
  }

  pub fn overlaps(&self, other: &CharRange) -> bool {
    self.start < other.end && other.start < self.end
  }
}

/// The two regions of `text` flanking `block`, ready to be dimmed.
///
/// The first range covers everything before the line on which the
/// block starts, the second everything after the line on which it
/// ends. Either side is `None` when the block touches that edge of
/// the document, and a side that would collapse to a single boundary
/// offset is suppressed so the caller never paints a zero-width
/// sliver.
pub fn complement_ranges(
  text: RopeSlice,
  block: CharRange,
) -> (Option<CharRange>, Option<CharRange>) {
  let len = text.len_chars();
  let block_start = block.start.min(len);
  let block_end = block.end.min(len);

  let start_line = text.char_to_line(block_start);
  let pre = if start_line == 0 {
    None
  } else {
    // End of the line above the block, excluding its terminator.
    let end = text.line_to_char(start_line).saturating_sub(1);
    (end > 0).then(|| CharRange::new(0, end))
  };

  let end_line = text.char_to_line(block_end);
  let last_line = text.len_lines().saturating_sub(1);
  let post = if end_line >= last_line {
    None
  } else {
    let start = text.line_to_char(end_line + 1);
    (start + 1 < len).then(|| CharRange::new(start, len))
  };

  (pre, post)
}
