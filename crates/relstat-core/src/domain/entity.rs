//! Entity handle: one related-media child as exposed by the host framework.

use super::ids::MediaId;
use crate::ports::dom::NodeId;

/// Transient reference to one related-media item.
///
/// Produced by the host bindings during an annotate pass and not retained
/// past it: `media_id` is the lookup input, `node` is the mutation target
/// under which title sub-nodes are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityHandle {
    pub media_id: MediaId,
    pub node: NodeId,
}

impl EntityHandle {
    pub fn new(media_id: MediaId, node: NodeId) -> Self {
        Self { media_id, node }
    }
}
