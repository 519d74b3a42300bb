//! Locating the structural block under the caret.

use std::fmt;

use umbra_core::CharRange;

use crate::host::{
  EditorId,
  SyntaxSource,
};

/// Tag naming one kind of structural block.
///
/// Kinds are matched as an ordered tag list rather than through any
/// kind of type dispatch, so adding a block kind is a matter of
/// extending the configured list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKind(pub &'static str);

impl BlockKind {
  pub const CLASS: Self = Self("class");
  pub const FUNCTION: Self = Self("function");

  pub const fn as_str(self) -> &'static str {
    self.0
  }
}

impl fmt::Display for BlockKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.0)
  }
}

/// Range of the innermost block of any configured kind enclosing
/// `offset`.
///
/// Kinds are tried in priority order and the first that yields an
/// enclosing element wins. A query error means the model cannot
/// answer right now (typically: not yet synchronized with the text)
/// and is treated as "no block found"; the caret handler will simply
/// leave the editor undimmed until the next move.
pub fn enclosing_block<S: SyntaxSource + ?Sized>(
  syntax: &S,
  editor: EditorId,
  offset: usize,
  kinds: &[BlockKind],
) -> Option<CharRange> {
  for &kind in kinds {
    match syntax.find_enclosing_element(editor, offset, kind) {
      Ok(Some(element)) => return Some(syntax.element_range(element)),
      Ok(None) => {},
      Err(err) => {
        log::debug!("structural query for `{kind}` failed: {err}");
        return None;
      },
    }
  }
  None
}
