//! In-memory editor host used by the integration suites.

use ropey::{
  Rope,
  RopeSlice,
};
use slotmap::SlotMap;
use umbra_core::{
  CharRange,
  Color,
};
use umbra_engine::{
  BlockKind,
  EditorId,
  ElementId,
  FocusHost,
  LayerPriority,
  OverlayError,
  OverlayId,
  PaintSurface,
  StructuralQueryError,
  SyntaxSource,
};

pub struct MockEditor {
  pub text:         Rope,
  pub background:   Color,
  pub blocks:       Vec<(BlockKind, ElementId)>,
  pub synchronized: bool,
  pub sync_calls:   usize,
}

#[derive(Debug, Clone, Copy)]
pub struct PaintedOverlay {
  pub editor: EditorId,
  pub range:  CharRange,
  pub color:  Color,
  pub layer:  LayerPriority,
}

/// Arena-backed host double. Live overlays are whatever is still in
/// the `overlays` slotmap; removing an absent key reports
/// `AlreadyRemoved` just like a real surface would.
#[derive(Default)]
pub struct MockHost {
  pub editors:        SlotMap<EditorId, MockEditor>,
  pub elements:       SlotMap<ElementId, CharRange>,
  pub overlays:       SlotMap<OverlayId, PaintedOverlay>,
  pub paint_calls:    usize,
  pub remove_calls:   usize,
  pub stale_removals: usize,
  pub fail_queries:   bool,
}

impl MockHost {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn open_editor(&mut self, text: &str, background: Color) -> EditorId {
    self.editors.insert(MockEditor {
      text:         Rope::from_str(text),
      background,
      blocks:       Vec::new(),
      synchronized: true,
      sync_calls:   0,
    })
  }

  pub fn add_block(&mut self, editor: EditorId, kind: BlockKind, range: CharRange) -> ElementId {
    let element = self.elements.insert(range);
    self.editors[editor].blocks.push((kind, element));
    element
  }

  pub fn close_editor(&mut self, editor: EditorId) {
    self.editors.remove(editor);
  }

  /// Simulate an edit the structural model has not caught up with.
  pub fn edit_without_sync(&mut self, editor: EditorId, text: &str) {
    let ed = &mut self.editors[editor];
    ed.text = Rope::from_str(text);
    ed.synchronized = false;
  }

  /// Simulate the host invalidating a handle behind the engine's back.
  pub fn invalidate_overlay(&mut self, overlay: OverlayId) {
    self.overlays.remove(overlay);
  }

  pub fn live_overlay_count(&self) -> usize {
    self.overlays.len()
  }

  /// Live overlays for `editor`, sorted by range start.
  pub fn painted(&self, editor: EditorId) -> Vec<PaintedOverlay> {
    let mut painted: Vec<_> = self
      .overlays
      .values()
      .filter(|overlay| overlay.editor == editor)
      .copied()
      .collect();
    painted.sort_by_key(|overlay| overlay.range.start);
    painted
  }

  pub fn overlay_keys(&self, editor: EditorId) -> Vec<OverlayId> {
    self
      .overlays
      .iter()
      .filter(|(_, overlay)| overlay.editor == editor)
      .map(|(key, _)| key)
      .collect()
  }
}

impl SyntaxSource for MockHost {
  fn synchronize(&mut self, editor: EditorId) {
    let ed = &mut self.editors[editor];
    ed.synchronized = true;
    ed.sync_calls += 1;
  }

  fn find_enclosing_element(
    &self,
    editor: EditorId,
    offset: usize,
    kind: BlockKind,
  ) -> Result<Option<ElementId>, StructuralQueryError> {
    if self.fail_queries {
      return Err(StructuralQueryError::ModelOutOfSync);
    }
    let ed = &self.editors[editor];
    if !ed.synchronized {
      return Err(StructuralQueryError::ModelOutOfSync);
    }
    Ok(
      ed.blocks
        .iter()
        .filter(|(k, element)| *k == kind && self.elements[*element].contains(offset))
        .min_by_key(|(_, element)| self.elements[*element].len())
        .map(|(_, element)| *element),
    )
  }

  fn element_range(&self, element: ElementId) -> CharRange {
    self.elements[element]
  }
}

impl PaintSurface for MockHost {
  fn background_color(&self, editor: EditorId) -> Color {
    self.editors[editor].background
  }

  fn paint_overlay(
    &mut self,
    editor: EditorId,
    range: CharRange,
    color: Color,
    layer: LayerPriority,
  ) -> OverlayId {
    self.paint_calls += 1;
    self.overlays.insert(PaintedOverlay {
      editor,
      range,
      color,
      layer,
    })
  }

  fn remove_overlay(&mut self, _editor: EditorId, overlay: OverlayId) -> Result<(), OverlayError> {
    self.remove_calls += 1;
    match self.overlays.remove(overlay) {
      Some(_) => Ok(()),
      None => {
        self.stale_removals += 1;
        Err(OverlayError::AlreadyRemoved)
      },
    }
  }
}

impl FocusHost for MockHost {
  fn open_editors(&self) -> Vec<EditorId> {
    self.editors.keys().collect()
  }

  fn text(&self, editor: EditorId) -> RopeSlice<'_> {
    self.editors[editor].text.slice(..)
  }
}

/// Ten lines of five chars each; line `n` starts at offset `5 * n`.
pub fn ten_line_text() -> String {
  "aaaa\n".repeat(10)
}
