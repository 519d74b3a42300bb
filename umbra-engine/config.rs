use crate::{
  host::LayerPriority,
  locator::BlockKind,
};

/// Behavior knobs for focus mode.
#[derive(Debug, Clone)]
pub struct FocusConfig {
  /// Structural kinds eligible to be the focused block, in priority
  /// order; the first kind with an enclosing element wins.
  pub block_kinds: Vec<BlockKind>,
  /// Layer the dim overlays paint on.
  pub layer:       LayerPriority,
}

impl Default for FocusConfig {
  fn default() -> Self {
    Self {
      // block_kinds: vec![BlockKind::FUNCTION, BlockKind::CLASS],
      block_kinds: vec![BlockKind::CLASS],
      layer:       LayerPriority::LAST.below(),
    }
  }
}

impl FocusConfig {
  pub fn with_block_kinds(mut self, kinds: impl IntoIterator<Item = BlockKind>) -> Self {
    self.block_kinds = kinds.into_iter().collect();
    self
  }

  pub fn with_layer(mut self, layer: LayerPriority) -> Self {
    self.layer = layer;
    self
  }
}
