//! Typed appearance packet bodies
//!
//! These mirror the simulator's message layouts field for field, but stay
//! at the struct level; serialization to the outer wire format is the
//! transport's job.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::appearance::wearables::WearableType;

/// 3D vector (agent bounding box, positions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Agent + session identity stamped on every appearance packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentData {
    pub agent_id: Uuid,
    pub session_id: Uuid,
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// One slot assertion in an AgentWearablesUpdate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearableUpdateBlock {
    pub item_id: Uuid,
    pub asset_id: Uuid,
    pub wearable_type: WearableType,
}

/// Server-sourced snapshot of the worn wearable set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearablesUpdate {
    pub agent_data: AgentData,
    pub serial_num: u32,
    pub wearable_data: Vec<WearableUpdateBlock>,
}

/// One layer answer in an AgentCachedTextureResponse. `host_name` names
/// the texture host that holds the cached bake; it is parsed for
/// completeness but nothing downstream consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTextureResponseBlock {
    pub texture_id: Uuid,
    pub texture_index: u8,
    pub host_name: Vec<u8>,
}

/// Simulator's answer to a baked-texture cache query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTextureResponse {
    pub agent_data: AgentData,
    pub serial_num: u32,
    pub wearable_data: Vec<CachedTextureResponseBlock>,
}

/// Event queue is live for a region; the trigger for a fresh appearance run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueueRunning {
    pub region_id: Uuid,
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// Empty query for the agent's current wearable set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearablesRequest {
    pub agent_data: AgentData,
}

/// One layer fingerprint in an AgentCachedTexture query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTextureQueryBlock {
    /// XOR fingerprint of the layer's worn asset ids, magic-hash mixed
    pub id: Uuid,
    /// Bake layer index
    pub texture_index: u8,
}

/// Baked-texture cache query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTextureQuery {
    pub agent_data: AgentData,
    pub serial_num: u32,
    pub wearable_data: Vec<CachedTextureQueryBlock>,
}

/// One per-layer cache fingerprint in an AgentSetAppearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAppearanceWearableBlock {
    pub cache_id: Uuid,
    /// Bake layer index
    pub texture_index: u8,
}

/// The final atomic appearance publish
#[derive(Debug, Clone, PartialEq)]
pub struct SetAppearance {
    pub agent_data: AgentData,
    pub serial_num: u32,
    /// Avatar bounding box; z is the derived body height
    pub size: Vector3,
    /// Packed texture entry (see [`crate::protocol::texture_entry`])
    pub texture_entry: Bytes,
    /// Group-0 visual params, one quantized byte each
    pub visual_params: Vec<u8>,
    /// Six blocks, one per bake layer, worn or not
    pub wearable_data: Vec<SetAppearanceWearableBlock>,
}
