//! Capability interfaces consumed by the appearance pipeline
//!
//! The pipeline never talks to the network directly. Asset and texture
//! retrieval, baked uploads, inventory lookups, the bake compositor, and
//! the simulator link are all injected behind these traits, so the core
//! stays testable and transport-agnostic.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::appearance::bakes::BakeType;
use crate::appearance::textures::AvatarTextureIndex;
use crate::appearance::visual_params::{VisualAlphaParam, VisualColorParam};
use crate::appearance::wearables::WearableType;
use crate::appearance::AppearanceResult;
use crate::protocol::messages::{CachedTextureQuery, SetAppearance, WearablesRequest};

/// Broad asset class, used by the asset service to pick a fetch route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Bodypart,
    Clothing,
    Unknown,
}

/// Fetch priority hint for the asset service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FetchPriority {
    Low,
    Medium,
    High,
}

/// Request-by-id asset retrieval.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch_asset(
        &self,
        asset_id: Uuid,
        kind: AssetKind,
        priority: FetchPriority,
    ) -> AppearanceResult<Bytes>;
}

/// Image retrieval for bake source textures.
#[async_trait]
pub trait TextureFetcher: Send + Sync {
    async fn fetch_image(&self, texture_id: Uuid) -> AppearanceResult<Bytes>;
}

/// Upload interface for freshly baked textures. A nil asset id in the
/// response means the upload was rejected.
#[async_trait]
pub trait BakedUploader: Send + Sync {
    async fn upload_baked(&self, data: Bytes) -> AppearanceResult<Uuid>;
}

/// One inventory entry, as returned by folder listings.
#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub item_id: Uuid,
    pub asset_id: Uuid,
    pub name: String,
    pub wearable_type: Option<WearableType>,
}

/// Inventory lookups for outfit folders.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn resolve_path(&self, path: &str) -> AppearanceResult<Uuid>;
    async fn folder_contents(&self, folder_id: Uuid) -> AppearanceResult<Vec<InventoryItem>>;
}

/// The composition engine. One [`BakeJob`] per layer per run; sources are
/// fed face by face, and the job signals when the layer is complete.
pub trait Baker: Send + Sync {
    fn new_layer(&self, layer: BakeType, face_count: usize, params: &[f32]) -> Box<dyn BakeJob>;
}

/// A single in-flight layer composition.
pub trait BakeJob: Send {
    /// Feed one contributing face. `texture` is None when the source was
    /// never fetched; the compositor substitutes its built-in default.
    /// Returns true once every expected face has been fed.
    fn add_face(
        &mut self,
        face: AvatarTextureIndex,
        texture: Option<&Bytes>,
        alpha_weights: &[(VisualAlphaParam, f32)],
        color_weights: &[(VisualColorParam, f32)],
    ) -> bool;

    /// Composite and compress the layer.
    fn bake(self: Box<Self>) -> AppearanceResult<Bytes>;
}

/// Outbound path to the simulator for the three appearance packets.
#[async_trait]
pub trait SimulatorLink: Send + Sync {
    async fn send_wearables_request(&self, msg: WearablesRequest) -> AppearanceResult<()>;
    async fn send_cached_texture_query(&self, msg: CachedTextureQuery) -> AppearanceResult<()>;
    async fn send_set_appearance(&self, msg: SetAppearance) -> AppearanceResult<()>;
}

/// The full set of collaborators the pipeline needs.
#[derive(Clone)]
pub struct AppearanceServices {
    pub assets: Arc<dyn AssetFetcher>,
    pub textures: Arc<dyn TextureFetcher>,
    pub uploader: Arc<dyn BakedUploader>,
    pub inventory: Arc<dyn InventoryService>,
    pub baker: Arc<dyn Baker>,
    pub link: Arc<dyn SimulatorLink>,
}

impl std::fmt::Debug for AppearanceServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceServices").finish_non_exhaustive()
    }
}
