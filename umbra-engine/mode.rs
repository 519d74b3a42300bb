//! The user-facing focus-mode switch.

use crate::{
  config::FocusConfig,
  event::{
    EventQueue,
    HostEvent,
  },
  host::FocusHost,
  registry::FocusRegistry,
};

pub const LABEL_ENTER: &str = "Enter Focus Mode";
pub const LABEL_EXIT: &str = "Exit Focus Mode";

/// Global on/off state for focus dimming. Starts off.
///
/// The registry only exists while the mode is on; host events are
/// routed to it and silently dropped otherwise, which is what
/// "unsubscribed" means in this engine.
#[derive(Debug, Default)]
pub struct FocusMode {
  config:   FocusConfig,
  registry: Option<FocusRegistry>,
}

impl FocusMode {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: FocusConfig) -> Self {
    Self {
      config,
      registry: None,
    }
  }

  pub fn is_enabled(&self) -> bool {
    self.registry.is_some()
  }

  pub fn config(&self) -> &FocusConfig {
    &self.config
  }

  /// Number of editors currently tracked; zero while the mode is off.
  pub fn tracked_editors(&self) -> usize {
    self.registry.as_ref().map_or(0, FocusRegistry::len)
  }

  /// Action label reflecting the current state.
  pub fn menu_label(&self) -> &'static str {
    if self.is_enabled() { LABEL_EXIT } else { LABEL_ENTER }
  }

  /// Flip the switch and return the new state.
  ///
  /// Turning on seeds a fresh registry with the host's snapshot of
  /// open editors; turning off tears every controller down and drops
  /// the registry.
  pub fn toggle<H: FocusHost>(&mut self, host: &mut H) -> bool {
    match self.registry.take() {
      Some(mut registry) => {
        registry.disable(host);
        false
      },
      None => {
        let mut registry = FocusRegistry::new();
        registry.enable(host);
        self.registry = Some(registry);
        true
      },
    }
  }

  /// Route one host notification. Inert while the mode is off.
  pub fn handle_event<H: FocusHost>(&mut self, host: &mut H, event: HostEvent) {
    let Some(registry) = self.registry.as_mut() else {
      return;
    };
    match event {
      HostEvent::CaretMoved { editor, offset } => {
        registry.caret_moved(host, &self.config, editor, offset);
      },
      HostEvent::CaretRemoved { editor } => registry.caret_removed(host, editor),
      HostEvent::EditorOpened { editor } => registry.editor_opened(editor),
      HostEvent::EditorClosed { editor } => registry.editor_closed(host, editor),
    }
  }

  /// Drain queued notifications in arrival order, handling each to
  /// completion before the next.
  pub fn drain<H: FocusHost>(&mut self, queue: &mut EventQueue, host: &mut H) {
    while let Some(event) = queue.pop() {
      self.handle_event(host, event);
    }
  }
}
