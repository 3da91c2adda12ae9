//! Appearance publishing
//!
//! Assembles the final AgentSetAppearance: the quantized visual-param
//! vector, the packed texture entry, one cache fingerprint per bake layer,
//! and the derived avatar body size. The whole message goes out in a
//! single send.

use tracing::info;
use uuid::Uuid;

use super::cache;
use super::bakes::BakeType;
use super::manager::AppearanceManager;
use super::textures::AvatarTextureIndex;
use super::visual_params::{catalog, find_param, quantize};
use super::wearables::{WearableType, WearablesSnapshot};
use super::{AppearanceError, AppearanceResult, DEFAULT_AVATAR_TEXTURE};
use crate::protocol::messages::{SetAppearance, SetAppearanceWearableBlock, Vector3};
use crate::protocol::texture_entry::TextureEntry;

// Height contribution per visual param, in meters per unit value
const HEIGHT_BASE: f64 = 1.706;
const HEIGHT_PER_LEG_LENGTH: f64 = 0.1918; // param 692
const HEIGHT_PER_HIP_LENGTH: f64 = 0.0375; // param 842
const HEIGHT_PER_HEIGHT: f64 = 0.12022; // param 33
const HEIGHT_PER_HEAD_SIZE: f64 = 0.01117; // param 682
const HEIGHT_PER_NECK_LENGTH: f64 = 0.038; // param 756
const HEIGHT_PER_HEEL_HEIGHT: f64 = 0.08; // param 198
const HEIGHT_PER_PLATFORM_HEIGHT: f64 = 0.07; // param 503

// Avatar bounding box footprint in meters
const BODY_WIDTH: f32 = 0.45;
const BODY_DEPTH: f32 = 0.60;

/// Resolve a param's effective value: the first worn asset (in slot order)
/// that carries the id wins, otherwise the catalog default. Unknown ids
/// resolve to zero.
pub fn resolve_param_value(wearables: &WearablesSnapshot, id: u32) -> f32 {
    for slot in WearableType::ALL {
        if let Some(asset) = wearables.get(&slot).and_then(|r| r.asset.as_ref()) {
            if let Some(value) = asset.params.get(&id) {
                return *value;
            }
        }
    }
    find_param(id).map(|p| p.default).unwrap_or(0.0)
}

/// Resolved float values for every published (group-0) param, in canonical
/// catalog order. This is also what parameterizes the compositor.
pub fn resolve_param_floats(wearables: &WearablesSnapshot) -> Vec<f32> {
    catalog()
        .iter()
        .filter(|p| p.group == 0)
        .map(|p| resolve_param_value(wearables, p.id))
        .collect()
}

/// The quantized wire form of the published param vector.
pub fn visual_param_bytes(wearables: &WearablesSnapshot) -> Vec<u8> {
    catalog()
        .iter()
        .filter(|p| p.group == 0)
        .map(|p| quantize(resolve_param_value(wearables, p.id), p.min, p.max))
        .collect()
}

/// Derived avatar bounding box. Height comes from a fixed linear blend of
/// seven shape params.
pub fn body_size(wearables: &WearablesSnapshot) -> Vector3 {
    let p = |id: u32| resolve_param_value(wearables, id) as f64;
    let height = HEIGHT_BASE
        + HEIGHT_PER_LEG_LENGTH * p(692)
        + HEIGHT_PER_HIP_LENGTH * p(842)
        + HEIGHT_PER_HEIGHT * p(33)
        + HEIGHT_PER_HEAD_SIZE * p(682)
        + HEIGHT_PER_NECK_LENGTH * p(756)
        + HEIGHT_PER_HEEL_HEIGHT * p(198)
        + HEIGHT_PER_PLATFORM_HEIGHT * p(503);
    Vector3::new(BODY_WIDTH, BODY_DEPTH, height as f32)
}

/// Assemble and send the AgentSetAppearance, bumping the appearance
/// serial. The per-layer fingerprints are recomputed from the same
/// snapshot the cache query used, so both sides of the run agree
/// bit-for-bit.
pub(crate) async fn send_set_appearance(
    manager: &AppearanceManager,
    wearables: &WearablesSnapshot,
) -> AppearanceResult<u32> {
    let visual_params = visual_param_bytes(wearables);

    let texture_entry = {
        let table = manager.textures.lock().await;
        let mut entry = TextureEntry::new(DEFAULT_AVATAR_TEXTURE);
        for face in AvatarTextureIndex::ALL {
            let id = table.texture_id(face);
            if !id.is_nil() {
                entry.set_face(face, id);
            }
        }
        entry.encode()
    };

    // Every layer gets a block, worn or not; empty layers publish a zero
    // fingerprint.
    let wearable_data = BakeType::ALL
        .iter()
        .map(|layer| SetAppearanceWearableBlock {
            cache_id: cache::layer_fingerprint(*layer, wearables).unwrap_or_else(Uuid::nil),
            texture_index: *layer as u8,
        })
        .collect();

    let serial_num = manager.next_set_appearance_serial();
    let msg = SetAppearance {
        agent_data: manager.agent_data(),
        serial_num,
        size: body_size(wearables),
        texture_entry,
        visual_params,
        wearable_data,
    };

    manager
        .services
        .link
        .send_set_appearance(msg)
        .await
        .map_err(|e| AppearanceError::TransportUnavailable {
            reason: e.to_string(),
        })?;

    info!("✅ Published appearance serial {}", serial_num);
    Ok(serial_num)
}
