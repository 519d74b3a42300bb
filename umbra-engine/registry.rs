//! The editor → controller table alive while focus mode is on.

use std::collections::{
  HashMap,
  hash_map::Entry,
};

use crate::{
  config::FocusConfig,
  controller::FocusController,
  host::{
    EditorId,
    FocusHost,
    PaintSurface,
  },
};

/// One [`FocusController`] per live editor.
///
/// An entry exists exactly while its editor is open and focus mode is
/// enabled. Insertion only happens through a checked insert-if-absent
/// and removal only through teardown-then-erase, so controller
/// overlays can never be orphaned by table churn.
#[derive(Debug, Default)]
pub struct FocusRegistry {
  controllers: HashMap<EditorId, FocusController>,
}

impl FocusRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.controllers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.controllers.is_empty()
  }

  pub fn contains(&self, editor: EditorId) -> bool {
    self.controllers.contains_key(&editor)
  }

  /// Seed the table with every currently open editor.
  pub fn enable<H: FocusHost>(&mut self, host: &H) {
    for editor in host.open_editors() {
      self.track(editor);
    }
  }

  pub fn editor_opened(&mut self, editor: EditorId) {
    self.track(editor);
  }

  /// Remove and tear down the controller of a closing editor. Unknown
  /// editors are a no-op (opened before enable and never tracked).
  pub fn editor_closed<H: PaintSurface>(&mut self, host: &mut H, editor: EditorId) {
    match self.controllers.remove(&editor) {
      Some(mut controller) => controller.teardown(host),
      None => log::debug!("close for untracked editor {editor:?}"),
    }
  }

  pub fn caret_moved<H: FocusHost>(
    &mut self,
    host: &mut H,
    config: &FocusConfig,
    editor: EditorId,
    offset: usize,
  ) {
    if let Some(controller) = self.controllers.get_mut(&editor) {
      controller.caret_moved(host, config, offset);
    }
  }

  pub fn caret_removed<H: PaintSurface>(&mut self, host: &mut H, editor: EditorId) {
    if let Some(controller) = self.controllers.get_mut(&editor) {
      controller.caret_removed(host);
    }
  }

  /// Bulk teardown for toggle-off. The table is empty afterwards and
  /// the registry is safe to discard.
  pub fn disable<H: PaintSurface>(&mut self, host: &mut H) {
    for (_, mut controller) in self.controllers.drain() {
      controller.teardown(host);
    }
  }

  fn track(&mut self, editor: EditorId) {
    match self.controllers.entry(editor) {
      Entry::Occupied(_) => {
        // Replacing the entry would orphan the existing controller's
        // painted overlays; keep it and skip the duplicate.
        log::warn!("editor {editor:?} already tracked, ignoring duplicate registration");
      },
      Entry::Vacant(slot) => {
        slot.insert(FocusController::new(editor));
      },
    }
  }
}
