//! Per-editor overlay ownership and the caret-move repaint cycle.

use smallvec::SmallVec;
use umbra_core::{
  color,
  range,
};

use crate::{
  config::FocusConfig,
  host::{
    EditorId,
    FocusHost,
    OverlayId,
    PaintSurface,
  },
  locator,
};

/// Owns the dim overlays of exactly one editor.
///
/// Idle (no overlays) until a caret move lands inside a configured
/// block; from then on it tracks the one or two overlay handles it
/// painted, replacing them wholesale on every subsequent move. The
/// previous cycle's overlays are always removed before anything new
/// is painted, so the tracked set never exceeds two handles and never
/// refers to a stale caret position.
#[derive(Debug)]
pub struct FocusController {
  editor:   EditorId,
  overlays: SmallVec<[OverlayId; 2]>,
}

impl FocusController {
  pub fn new(editor: EditorId) -> Self {
    Self {
      editor,
      overlays: SmallVec::new(),
    }
  }

  pub fn editor(&self) -> EditorId {
    self.editor
  }

  pub fn overlay_count(&self) -> usize {
    self.overlays.len()
  }

  /// Recompute the dim regions for the caret now sitting at `offset`.
  pub fn caret_moved<H: FocusHost>(&mut self, host: &mut H, config: &FocusConfig, offset: usize) {
    self.clear_overlays(host);

    // The structural model may lag behind the text; sync before
    // asking it anything.
    host.synchronize(self.editor);

    let Some(block) = locator::enclosing_block(host, self.editor, offset, &config.block_kinds)
    else {
      // Caret is outside every configured block; nothing to dim.
      return;
    };

    let (pre, post) = range::complement_ranges(host.text(self.editor), block);
    let tint = color::contrast_color(host.background_color(self.editor));
    for region in [pre, post].into_iter().flatten() {
      let overlay = host.paint_overlay(self.editor, region, tint, config.layer);
      self.overlays.push(overlay);
    }
  }

  /// The caret itself went away; just drop the overlays.
  pub fn caret_removed<H: PaintSurface>(&mut self, host: &mut H) {
    self.clear_overlays(host);
  }

  /// Remove every tracked overlay and go Idle.
  ///
  /// Idempotent: a second call finds nothing tracked and issues no
  /// removal calls at all.
  pub fn teardown<H: PaintSurface + ?Sized>(&mut self, host: &mut H) {
    self.clear_overlays(host);
  }

  fn clear_overlays<H: PaintSurface + ?Sized>(&mut self, host: &mut H) {
    for overlay in self.overlays.drain(..) {
      if let Err(err) = host.remove_overlay(self.editor, overlay) {
        // The host already invalidated the handle; dropping it is all
        // that is left to do.
        log::debug!("overlay {overlay:?} gone before removal: {err}");
      }
    }
  }
}
