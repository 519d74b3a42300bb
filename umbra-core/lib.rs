//! Pure primitives for the focus dimming engine.
//!
//! This crate is intentionally small and host-independent: character
//! ranges, the complement-range computation that turns one focused
//! block into its flanking dim regions, and the background-relative
//! tint color. No state, no IO; everything here is driven by
//! `umbra-engine`.

pub mod color;
pub mod range;

pub use color::{
  Color,
  contrast_color,
};
pub use range::{
  CharRange,
  complement_ranges,
};
