//! Avatar appearance pipeline
//!
//! This module produces and publishes the agent's appearance: the set of
//! worn wearables, their composited ("baked") textures, and the visual
//! parameter vector other viewers use to shape the avatar. The workflow is
//! a serialized multi-stage pipeline: reconcile server-declared wearables,
//! negotiate the simulator's baked-texture cache, fetch missing sources,
//! bake, upload, and publish a single atomic AgentSetAppearance.

pub mod bakes;
pub mod cache;
pub mod events;
pub mod manager;
pub mod params_table;
pub mod pipeline;
pub mod publisher;
pub mod textures;
pub mod visual_params;
pub mod wearables;

// Re-export main types for convenience
pub use bakes::BakeType;
pub use events::AppearanceEvent;
pub use manager::AppearanceManager;
pub use textures::{AvatarTextureIndex, TextureTable};
pub use wearables::{WearableRegistry, WearableType};

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum AppearanceError {
    #[error("Transport unavailable: {reason}")]
    TransportUnavailable { reason: String },

    #[error("Timed out waiting for the agent wearables list")]
    WearablesEnumTimeout,

    #[error("Wearable asset {asset_id} fetch timed out")]
    WearableFetchTimeout { asset_id: Uuid },

    #[error("Wearable asset {asset_id} failed to decode: {reason}")]
    WearableDecodeFailed { asset_id: Uuid, reason: String },

    #[error("Cache negotiation timed out")]
    CacheNegotiationTimeout,

    #[error("Texture {texture_id} fetch timed out")]
    TextureFetchTimeout { texture_id: Uuid },

    #[error("Bake failed for layer {layer}: {reason}")]
    BakeFailed { layer: bakes::BakeType, reason: String },

    #[error("Baked upload failed for layer {layer}")]
    UploadFailed { layer: bakes::BakeType },

    #[error("Appearance pipeline already running")]
    PipelineBusy,

    #[error("Inventory path not found: {path}")]
    InventoryPathNotFound { path: String },

    #[error("Asset service error: {reason}")]
    AssetService { reason: String },

    #[error("{reason}")]
    Other { reason: String },
}

pub type AppearanceResult<T> = Result<T, AppearanceError>;

/// The simulator's stand-in texture for an undressed avatar. Stored
/// table-side as the zero UUID; substituted back in at publish time.
pub const DEFAULT_AVATAR_TEXTURE: Uuid =
    Uuid::from_u128(0xc228d1cf_4b5d_4ba8_84f4_899a0796aa97);

/// XOR two UUIDs bitwise. Fingerprints are built from this; the reduction
/// is order-independent, so slot iteration order never matters.
pub(crate) fn xor_uuids(a: Uuid, b: Uuid) -> Uuid {
    Uuid::from_u128(a.as_u128() ^ b.as_u128())
}
