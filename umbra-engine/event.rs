//! Host notifications.
//!
//! The host delivers these one at a time on its event thread; each is
//! handled to completion before the next is dispatched. Hosts that
//! produce notifications from their own callback machinery can buffer
//! them through an [`EventQueue`] and drain it from a single consumer,
//! which preserves the same one-at-a-time ordering.

use std::collections::VecDeque;

use crate::host::EditorId;

/// One notification from the editor host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
  /// The caret in `editor` moved to `offset`.
  CaretMoved { editor: EditorId, offset: usize },
  /// The caret model of `editor` went away without a new position.
  CaretRemoved { editor: EditorId },
  EditorOpened { editor: EditorId },
  EditorClosed { editor: EditorId },
}

impl HostEvent {
  pub fn editor(&self) -> EditorId {
    match *self {
      HostEvent::CaretMoved { editor, .. }
      | HostEvent::CaretRemoved { editor }
      | HostEvent::EditorOpened { editor }
      | HostEvent::EditorClosed { editor } => editor,
    }
  }
}

/// FIFO buffer between the host's callbacks and the engine.
#[derive(Debug, Default)]
pub struct EventQueue {
  events: VecDeque<HostEvent>,
}

impl EventQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, event: HostEvent) {
    self.events.push_back(event);
  }

  pub fn pop(&mut self) -> Option<HostEvent> {
    self.events.pop_front()
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }
}
