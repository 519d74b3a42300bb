//! The seam between the engine and its editor host.
//!
//! Everything the engine cannot compute on its own — structural
//! queries, overlay painting, editor enumeration — is reached through
//! these traits. Handles are opaque slotmap keys minted by the host;
//! the engine never dereferences them and only assumes an [`EditorId`]
//! is valid for the duration of the callback that supplied it.

use ropey::RopeSlice;
use umbra_core::{
  CharRange,
  Color,
};

use crate::{
  error::{
    OverlayError,
    StructuralQueryError,
  },
  locator::BlockKind,
};

slotmap::new_key_type! {
  /// Handle to one open editor.
  pub struct EditorId;

  /// Handle to one element of an editor's structural model.
  pub struct ElementId;

  /// Handle to one painted overlay, owned by exactly one
  /// [`FocusController`](crate::FocusController).
  pub struct OverlayId;
}

/// Z-order slot for painted overlays; higher paints on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LayerPriority(pub u16);

impl LayerPriority {
  /// The topmost layer the host recognizes.
  pub const LAST: Self = Self(u16::MAX);

  pub const fn below(self) -> Self {
    Self(self.0.saturating_sub(1))
  }
}

/// Read access to the host's structural model of a document.
pub trait SyntaxSource {
  /// Bring the structural model up to date with the editor's current
  /// text. Must be called before any enclosing-element query that
  /// follows an edit.
  fn synchronize(&mut self, editor: EditorId);

  /// The innermost element of `kind` enclosing `offset`, if any.
  fn find_enclosing_element(
    &self,
    editor: EditorId,
    offset: usize,
    kind: BlockKind,
  ) -> Result<Option<ElementId>, StructuralQueryError>;

  /// The character range covered by `element`.
  fn element_range(&self, element: ElementId) -> CharRange;
}

/// The host's rendering surface for non-editing decorations.
pub trait PaintSurface {
  /// Effective background color of the editor, used to derive the
  /// dim tint.
  fn background_color(&self, editor: EditorId) -> Color;

  /// Paint `color` over `range` and hand back the handle needed to
  /// remove it again.
  fn paint_overlay(
    &mut self,
    editor: EditorId,
    range: CharRange,
    color: Color,
    layer: LayerPriority,
  ) -> OverlayId;

  /// Remove a previously painted overlay. Implementations must
  /// tolerate a stale handle (returning
  /// [`OverlayError::AlreadyRemoved`]) without disturbing any other
  /// overlay.
  fn remove_overlay(&mut self, editor: EditorId, overlay: OverlayId) -> Result<(), OverlayError>;
}

/// Everything the engine needs from the host.
pub trait FocusHost: SyntaxSource + PaintSurface {
  /// Snapshot of all currently open editors.
  fn open_editors(&self) -> Vec<EditorId>;

  /// The editor's current text.
  fn text(&self, editor: EditorId) -> RopeSlice<'_>;
}
