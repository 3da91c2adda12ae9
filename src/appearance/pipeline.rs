//! Fetch / bake / upload scheduler
//!
//! The three bounded-parallel stages of an appearance run. Stage A
//! downloads and decodes wearable assets, stage B fetches the source
//! textures the pending bakes need, stage C composites each pending layer
//! and uploads the result. Fan-out is semaphore-limited per I/O class, and
//! no failure cancels peers: a timed-out item just downgrades the run to
//! partial.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::bakes::BakeType;
use super::manager::AppearanceManager;
use super::textures::{AvatarTextureIndex, TextureSlot};
use super::visual_params::{find_param, VisualAlphaParam, VisualColorParam};
use super::wearables::{WearableAsset, WearableType, WearablesSnapshot};
use super::publisher;
use super::AppearanceError;
use crate::services::FetchPriority;

/// Stage A: download and decode every wearable whose asset is missing.
/// Returns true when some wearable could not be fetched or decoded.
pub(crate) async fn download_wearables(manager: &AppearanceManager) -> bool {
    let missing = manager.wearables.missing_assets();
    if missing.is_empty() {
        return false;
    }
    info!("👕 Downloading {} wearable assets", missing.len());

    let semaphore = Arc::new(Semaphore::new(manager.config.max_concurrent_downloads));
    let mut handles = Vec::with_capacity(missing.len());
    for (slot, asset_id, kind) in missing {
        let semaphore = Arc::clone(&semaphore);
        let assets = Arc::clone(&manager.services.assets);
        let fetch_timeout = manager.config.wearable_fetch_timeout;
        handles.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (slot, asset_id, None),
            };
            match timeout(
                fetch_timeout,
                assets.fetch_asset(asset_id, kind, FetchPriority::High),
            )
            .await
            {
                Ok(Ok(bytes)) => (slot, asset_id, Some(bytes)),
                Ok(Err(e)) => {
                    warn!("Wearable asset {} fetch failed: {}", asset_id, e);
                    (slot, asset_id, None)
                }
                Err(_) => {
                    warn!("{}", AppearanceError::WearableFetchTimeout { asset_id });
                    (slot, asset_id, None)
                }
            }
        }));
    }

    let mut partial = false;
    for handle in handles {
        let Ok((slot, asset_id, bytes)) = handle.await else {
            partial = true;
            continue;
        };
        let Some(bytes) = bytes else {
            partial = true;
            continue;
        };
        match WearableAsset::parse(&bytes) {
            Ok(asset) => {
                apply_decoded_wearable(manager, slot, &asset).await;
                if !manager.wearables.store_asset(slot, asset) {
                    debug!("Slot {:?} was replaced while its asset downloaded", slot);
                }
            }
            Err(e) => {
                warn!(
                    "{}",
                    AppearanceError::WearableDecodeFailed {
                        asset_id,
                        reason: e.to_string(),
                    }
                );
                partial = true;
            }
        }
    }
    partial
}

/// Push a decoded wearable's texture references into the table, together
/// with the alpha/color weights its params contribute.
async fn apply_decoded_wearable(
    manager: &AppearanceManager,
    slot: WearableType,
    asset: &WearableAsset,
) {
    let (alpha_weights, color_weights) = build_param_weights(slot, asset);

    let mut table = manager.textures.lock().await;
    for (&face, &texture_id) in &asset.textures {
        if table.set_source_texture(
            face,
            texture_id,
            alpha_weights.clone(),
            color_weights.clone(),
        ) {
            debug!("Face {:?} now sources texture {}", face, texture_id);
        }
    }
}

/// Fold a wearable's param values into alpha and color accumulators. Skin
/// restricts color contributions to the pigment trio (108, 110, 111); for
/// driver params, the first driven entry carrying a usable non-bump alpha
/// mask wins.
fn build_param_weights(
    slot: WearableType,
    asset: &WearableAsset,
) -> (
    Vec<(VisualAlphaParam, f32)>,
    Vec<(VisualColorParam, f32)>,
) {
    let mut alpha_weights: Vec<(VisualAlphaParam, f32)> = Vec::new();
    let mut color_weights: Vec<(VisualColorParam, f32)> = Vec::new();

    let mut entries: Vec<(&u32, &f32)> = asset.params.iter().collect();
    entries.sort_by_key(|(id, _)| **id);

    for (&id, &value) in entries {
        let Some(param) = find_param(id) else {
            continue;
        };

        if let Some(color) = &param.color {
            if slot != WearableType::Skin || matches!(id, 108 | 110 | 111) {
                upsert(&mut color_weights, color.clone(), value);
            }
        }

        for driven_id in param.drivers {
            let Some(driven) = find_param(*driven_id) else {
                continue;
            };
            if driven.bump {
                continue;
            }
            if let Some(mask) = &driven.alpha {
                if !mask.tga_file.is_empty() {
                    upsert(&mut alpha_weights, mask.clone(), value);
                    break;
                }
            }
        }
    }

    (alpha_weights, color_weights)
}

fn upsert<K: PartialEq>(weights: &mut Vec<(K, f32)>, key: K, value: f32) {
    match weights.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = value,
        None => weights.push((key, value)),
    }
}

/// Stage B: fetch the deduplicated union of source textures the pending
/// layers still need. Returns true when any fetch timed out or failed.
pub(crate) async fn download_textures(
    manager: &AppearanceManager,
    wearables: &WearablesSnapshot,
    pending: &[BakeType],
) -> bool {
    let skirt_worn = wearables.contains_key(&WearableType::Skirt);

    let mut wanted: Vec<Uuid> = Vec::new();
    {
        let table = manager.textures.lock().await;
        for layer in pending {
            if *layer == BakeType::Skirt && !skirt_worn {
                continue;
            }
            for face in layer.source_faces() {
                let slot = table.slot(*face);
                if !slot.texture_id.is_nil()
                    && slot.data.is_none()
                    && !wanted.contains(&slot.texture_id)
                {
                    wanted.push(slot.texture_id);
                }
            }
        }
    }
    if wanted.is_empty() {
        return false;
    }
    info!(
        "🖼️ Fetching {} source textures for {} pending bakes",
        wanted.len(),
        pending.len()
    );

    let semaphore = Arc::new(Semaphore::new(manager.config.max_concurrent_downloads));
    let mut handles = Vec::with_capacity(wanted.len());
    for texture_id in wanted {
        let semaphore = Arc::clone(&semaphore);
        let textures = Arc::clone(&manager.services.textures);
        let fetch_timeout = manager.config.texture_fetch_timeout;
        handles.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (texture_id, None),
            };
            match timeout(fetch_timeout, textures.fetch_image(texture_id)).await {
                Ok(Ok(bytes)) => (texture_id, Some(bytes)),
                Ok(Err(e)) => {
                    warn!("Texture {} fetch failed: {}", texture_id, e);
                    (texture_id, None)
                }
                Err(_) => {
                    warn!("{}", AppearanceError::TextureFetchTimeout { texture_id });
                    (texture_id, None)
                }
            }
        }));
    }

    let mut partial = false;
    for handle in handles {
        let Ok((texture_id, bytes)) = handle.await else {
            partial = true;
            continue;
        };
        match bytes {
            Some(bytes) => {
                let mut table = manager.textures.lock().await;
                let installed = table.install_texture_bytes(texture_id, bytes);
                debug!("Installed texture {} into {} faces", texture_id, installed);
            }
            // bake proceeds with a missing-face substitution
            None => partial = true,
        }
    }
    partial
}

/// Stage C: composite each pending layer and upload the result. Returns
/// true when any layer failed to bake or upload; failed layers keep a nil
/// baked id so the next run re-attempts them.
pub(crate) async fn bake_and_upload(
    manager: &AppearanceManager,
    wearables: &WearablesSnapshot,
    pending: &[BakeType],
) -> bool {
    if pending.is_empty() {
        return false;
    }
    info!("🎨 Baking {} layers", pending.len());

    let params = publisher::resolve_param_floats(wearables);
    let semaphore = Arc::new(Semaphore::new(manager.config.max_concurrent_uploads));
    let mut handles = Vec::with_capacity(pending.len());

    for &layer in pending {
        let faces: Vec<(AvatarTextureIndex, TextureSlot)> = {
            let table = manager.textures.lock().await;
            layer
                .source_faces()
                .iter()
                .map(|face| (*face, table.slot(*face).clone()))
                .collect()
        };
        let baker = Arc::clone(&manager.services.baker);
        let uploader = Arc::clone(&manager.services.uploader);
        let semaphore = Arc::clone(&semaphore);
        let upload_timeout = manager.config.upload_timeout;
        let params = params.clone();

        handles.push(tokio::spawn(async move {
            let mut job = baker.new_layer(layer, faces.len(), &params);
            let mut complete = false;
            for (face, slot) in &faces {
                complete = job.add_face(
                    *face,
                    slot.data.as_ref(),
                    &slot.alpha_weights,
                    &slot.color_weights,
                );
            }
            if !complete {
                warn!("🎨 Compositor never completed layer {}", layer);
                return (layer, None);
            }
            let baked: Bytes = match job.bake() {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(
                        "{}",
                        AppearanceError::BakeFailed {
                            layer,
                            reason: e.to_string(),
                        }
                    );
                    return (layer, None);
                }
            };

            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (layer, None),
            };
            match timeout(upload_timeout, uploader.upload_baked(baked)).await {
                Ok(Ok(asset_id)) if !asset_id.is_nil() => (layer, Some(asset_id)),
                Ok(Ok(_)) => {
                    warn!("{}", AppearanceError::UploadFailed { layer });
                    (layer, None)
                }
                Ok(Err(e)) => {
                    warn!("Upload for layer {} failed: {}", layer, e);
                    (layer, None)
                }
                Err(_) => {
                    warn!("Upload for layer {} timed out", layer);
                    (layer, None)
                }
            }
        }));
    }

    let mut partial = false;
    for handle in handles {
        match handle.await {
            Ok((layer, Some(asset_id))) => {
                let mut table = manager.textures.lock().await;
                table.set_baked_texture(layer, asset_id);
                info!("🎨 Layer {} baked and uploaded as {}", layer, asset_id);
            }
            Ok((_, None)) => partial = true,
            Err(_) => partial = true,
        }
    }
    partial
}
