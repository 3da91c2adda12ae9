//! Baked-texture cache negotiation
//!
//! Before baking locally, the client asks the simulator whether it still
//! holds composites for the current worn set. Layers are identified by an
//! XOR fingerprint of their worn asset ids mixed with a per-layer magic
//! constant. The XOR reduction is order-free, and a zero reduction means
//! the layer is empty and is left out of the query entirely.
//!
//! Identity-based matching is sound here: the server stores the same
//! fingerprint alongside the baked asset, and a 128-bit XOR collision
//! between real users is astronomically unlikely.

use tracing::debug;
use uuid::Uuid;

use super::bakes::BakeType;
use super::textures::TextureTable;
use super::wearables::WearablesSnapshot;
use crate::protocol::messages::{CachedTextureQueryBlock, CachedTextureResponse};

/// Tally of one cache response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheOutcome {
    pub hits: usize,
    pub misses: usize,
}

/// Fingerprint of one bake layer under a wearables snapshot. None when no
/// participating slot is worn (the layer is empty).
pub fn layer_fingerprint(layer: BakeType, wearables: &WearablesSnapshot) -> Option<Uuid> {
    let mut acc = 0u128;
    for slot in layer.wearable_slots() {
        if let Some(record) = wearables.get(slot) {
            acc ^= record.asset_id.as_u128();
        }
    }
    if acc == 0 {
        None
    } else {
        Some(Uuid::from_u128(acc ^ layer.magic_hash().as_u128()))
    }
}

/// Build the query blocks for every non-empty layer. An unworn Skirt slot
/// reduces that layer to zero, so it drops out here like any other empty
/// layer.
pub fn build_query_blocks(wearables: &WearablesSnapshot) -> Vec<CachedTextureQueryBlock> {
    BakeType::ALL
        .iter()
        .filter_map(|layer| {
            layer_fingerprint(*layer, wearables).map(|fp| CachedTextureQueryBlock {
                id: fp,
                texture_index: *layer as u8,
            })
        })
        .collect()
}

/// Apply a cache response to the texture table: nonzero ids fill the
/// matching baked face, zero ids leave the face empty so the scheduler
/// rebakes it. The host-name field is parsed upstream but has no behavior
/// attached.
pub fn apply_response(table: &mut TextureTable, response: &CachedTextureResponse) -> CacheOutcome {
    let mut outcome = CacheOutcome::default();
    for block in &response.wearable_data {
        let Some(layer) = BakeType::from_u8(block.texture_index) else {
            debug!(
                "Cache response names unknown bake layer {}",
                block.texture_index
            );
            continue;
        };
        if block.texture_id.is_nil() {
            outcome.misses += 1;
        } else {
            table.set_baked_texture(layer, block.texture_id);
            outcome.hits += 1;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::wearables::{WearableRecord, WearableType};
    use crate::appearance::xor_uuids;
    use crate::protocol::messages::{AgentData, CachedTextureResponseBlock};
    use std::collections::HashMap;

    fn worn(slots: &[(WearableType, u128)]) -> WearablesSnapshot {
        slots
            .iter()
            .map(|(slot, asset)| {
                (
                    *slot,
                    WearableRecord {
                        item_id: Uuid::from_u128(*asset + 0x1000),
                        asset_id: Uuid::from_u128(*asset),
                        wearable_type: *slot,
                        asset_kind: slot.asset_kind(),
                        asset: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_layer_has_no_fingerprint() {
        let wearables: WearablesSnapshot = HashMap::new();
        for layer in BakeType::ALL {
            assert_eq!(layer_fingerprint(layer, &wearables), None);
        }
    }

    #[test]
    fn test_fingerprint_mixes_magic_hash() {
        let wearables = worn(&[(WearableType::Hair, 0xabc)]);
        let fp = layer_fingerprint(BakeType::Hair, &wearables).unwrap();
        assert_eq!(
            fp,
            xor_uuids(Uuid::from_u128(0xabc), BakeType::Hair.magic_hash())
        );
    }

    #[test]
    fn test_fingerprint_ignores_unrelated_slots() {
        let with_pants = worn(&[(WearableType::Eyes, 0x11), (WearableType::Pants, 0x22)]);
        let without = worn(&[(WearableType::Eyes, 0x11)]);
        assert_eq!(
            layer_fingerprint(BakeType::Eyes, &with_pants),
            layer_fingerprint(BakeType::Eyes, &without)
        );
    }

    #[test]
    fn test_identical_sets_give_identical_fingerprints() {
        let a = worn(&[(WearableType::Shape, 1), (WearableType::Skin, 2)]);
        let b = worn(&[(WearableType::Skin, 2), (WearableType::Shape, 1)]);
        for layer in BakeType::ALL {
            assert_eq!(layer_fingerprint(layer, &a), layer_fingerprint(layer, &b));
        }
    }

    #[test]
    fn test_query_blocks_skip_unworn_skirt() {
        let wearables = worn(&[
            (WearableType::Shape, 1),
            (WearableType::Skin, 2),
            (WearableType::Hair, 3),
            (WearableType::Eyes, 4),
        ]);
        let blocks = build_query_blocks(&wearables);
        // Head, Upper, Lower, Eyes, Hair are non-empty; Skirt is not
        assert_eq!(blocks.len(), 5);
        assert!(blocks
            .iter()
            .all(|b| b.texture_index != BakeType::Skirt as u8));
    }

    #[test]
    fn test_query_suppressed_when_nothing_worn() {
        assert!(build_query_blocks(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_apply_response_counts_hits_and_misses() {
        let mut table = TextureTable::new();
        let response = CachedTextureResponse {
            agent_data: AgentData {
                agent_id: Uuid::nil(),
                session_id: Uuid::nil(),
            },
            serial_num: 1,
            wearable_data: vec![
                CachedTextureResponseBlock {
                    texture_id: Uuid::from_u128(0x99),
                    texture_index: BakeType::Head as u8,
                    host_name: b"bake.sim.example\0".to_vec(),
                },
                CachedTextureResponseBlock {
                    texture_id: Uuid::nil(),
                    texture_index: BakeType::UpperBody as u8,
                    host_name: Vec::new(),
                },
            ],
        };
        let outcome = apply_response(&mut table, &response);
        assert_eq!(outcome, CacheOutcome { hits: 1, misses: 1 });
        assert_eq!(table.baked_id(BakeType::Head), Uuid::from_u128(0x99));
        assert!(table.baked_id(BakeType::UpperBody).is_nil());
    }
}
