//! Structural focus dimming, driven by an editor host.
//!
//! While focus mode is on, every open editor gets a [`FocusController`]
//! that repaints two muted overlays around the block under the caret
//! on every caret move. A [`FocusRegistry`] keeps exactly one
//! controller per live editor, created on editor open and destroyed on
//! editor close, and [`FocusMode`] is the global switch that seeds and
//! tears down the registry.
//!
//! The host side (structural queries, overlay painting, editor
//! enumeration) sits behind the traits in [`host`]; notifications
//! arrive as [`event::HostEvent`] values, delivered one at a time on
//! the host's event thread. Every entry point runs to completion
//! before returning, so no synchronization is needed anywhere in this
//! crate.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod host;
pub mod locator;
pub mod mode;
pub mod registry;

pub use config::FocusConfig;
pub use controller::FocusController;
pub use error::{
  OverlayError,
  StructuralQueryError,
};
pub use event::{
  EventQueue,
  HostEvent,
};
pub use host::{
  EditorId,
  ElementId,
  FocusHost,
  LayerPriority,
  OverlayId,
  PaintSurface,
  SyntaxSource,
};
pub use locator::BlockKind;
pub use mode::FocusMode;
pub use registry::FocusRegistry;
