//! Wearable registry
//!
//! Authoritative mapping of wearable slot to currently worn item. The
//! simulator owns the truth; AgentWearablesUpdate packets replace the
//! registry wholesale, and the pipeline decorates records with decoded
//! assets as downloads complete.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::textures::AvatarTextureIndex;
use super::{AppearanceError, AppearanceResult};
use crate::protocol::messages::WearableUpdateBlock;
use crate::services::AssetKind;

/// The thirteen wearable slots, plus the out-of-band sentinel the wire
/// format uses for "no slot".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WearableType {
    Shape = 0,
    Skin = 1,
    Hair = 2,
    Eyes = 3,
    Shirt = 4,
    Pants = 5,
    Shoes = 6,
    Socks = 7,
    Jacket = 8,
    Gloves = 9,
    Undershirt = 10,
    Underpants = 11,
    Skirt = 12,
    Invalid = 255,
}

impl WearableType {
    pub const COUNT: usize = 13;

    /// Every valid slot, in wire order. `Invalid` is deliberately absent.
    pub const ALL: [WearableType; Self::COUNT] = [
        WearableType::Shape,
        WearableType::Skin,
        WearableType::Hair,
        WearableType::Eyes,
        WearableType::Shirt,
        WearableType::Pants,
        WearableType::Shoes,
        WearableType::Socks,
        WearableType::Jacket,
        WearableType::Gloves,
        WearableType::Undershirt,
        WearableType::Underpants,
        WearableType::Skirt,
    ];

    pub fn from_u8(value: u8) -> Self {
        Self::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(WearableType::Invalid)
    }

    /// Shape, Skin, Hair, and Eyes are body parts; the rest is clothing.
    pub fn is_bodypart(self) -> bool {
        matches!(
            self,
            WearableType::Shape | WearableType::Skin | WearableType::Hair | WearableType::Eyes
        )
    }

    pub fn asset_kind(self) -> AssetKind {
        match self {
            WearableType::Invalid => AssetKind::Unknown,
            slot if slot.is_bodypart() => AssetKind::Bodypart,
            _ => AssetKind::Clothing,
        }
    }
}

/// A decoded wearable asset: visual-param values plus per-face texture
/// references, parsed from the text asset format.
#[derive(Debug, Clone, PartialEq)]
pub struct WearableAsset {
    pub name: String,
    pub wearable_type: WearableType,
    pub params: HashMap<u32, f32>,
    pub textures: HashMap<AvatarTextureIndex, Uuid>,
}

impl WearableAsset {
    /// Parse the text wearable asset format:
    ///
    /// ```text
    /// LLWearable version 22
    /// My Shirt
    ///     permissions 0
    ///     { ... }
    /// type 4
    /// parameters 2
    /// 603 .8
    /// 111 0.5
    /// textures 1
    /// 1 5748decc-f629-461c-9a36-a35a221fe21f
    /// ```
    ///
    /// Brace-delimited blocks (permissions, sale info) are skipped.
    pub fn parse(data: &[u8]) -> AppearanceResult<Self> {
        let text = std::str::from_utf8(data).map_err(|_| AppearanceError::Other {
            reason: "wearable asset is not valid UTF-8".to_string(),
        })?;

        let malformed = |reason: &str| AppearanceError::Other {
            reason: format!("malformed wearable asset: {}", reason),
        };

        let lines: Vec<&str> = text.lines().collect();
        let mut pos = 0;

        // Header
        while pos < lines.len() && lines[pos].trim().is_empty() {
            pos += 1;
        }
        let header = lines.get(pos).ok_or_else(|| malformed("empty asset"))?;
        if !header.trim_start().starts_with("LLWearable") {
            return Err(malformed("missing LLWearable header"));
        }
        pos += 1;

        // Name is the next line, verbatim
        let name = lines
            .get(pos)
            .ok_or_else(|| malformed("missing name line"))?
            .trim()
            .to_string();
        pos += 1;

        let mut wearable_type = WearableType::Invalid;
        let mut params = HashMap::new();
        let mut textures = HashMap::new();
        let mut depth = 0usize;

        while pos < lines.len() {
            let line = lines[pos].trim();
            pos += 1;
            if line.is_empty() {
                continue;
            }
            if line.starts_with('{') {
                depth += 1;
                continue;
            }
            if line.starts_with('}') {
                depth = depth.saturating_sub(1);
                continue;
            }
            if depth > 0 {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("type") => {
                    let value: u8 = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or_else(|| malformed("bad type line"))?;
                    wearable_type = WearableType::from_u8(value);
                }
                Some("parameters") => {
                    let count: usize = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or_else(|| malformed("bad parameters count"))?;
                    for _ in 0..count {
                        let entry = lines
                            .get(pos)
                            .map(|l| l.trim())
                            .ok_or_else(|| malformed("truncated parameter list"))?;
                        pos += 1;
                        let mut fields = entry.split_whitespace();
                        let id: u32 = fields
                            .next()
                            .and_then(|t| t.parse().ok())
                            .ok_or_else(|| malformed("bad parameter id"))?;
                        let value: f32 = fields
                            .next()
                            .and_then(|t| t.parse().ok())
                            .ok_or_else(|| malformed("bad parameter value"))?;
                        params.insert(id, value);
                    }
                }
                Some("textures") => {
                    let count: usize = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or_else(|| malformed("bad textures count"))?;
                    for _ in 0..count {
                        let entry = lines
                            .get(pos)
                            .map(|l| l.trim())
                            .ok_or_else(|| malformed("truncated texture list"))?;
                        pos += 1;
                        let mut fields = entry.split_whitespace();
                        let index: u8 = fields
                            .next()
                            .and_then(|t| t.parse().ok())
                            .ok_or_else(|| malformed("bad texture face index"))?;
                        let id: Uuid = fields
                            .next()
                            .and_then(|t| t.parse().ok())
                            .ok_or_else(|| malformed("bad texture id"))?;
                        if let Some(face) = AvatarTextureIndex::from_u8(index) {
                            textures.insert(face, id);
                        } else {
                            warn!("Wearable asset references unknown face index {}", index);
                        }
                    }
                }
                _ => {} // permissions / sale_info headers and anything else
            }
        }

        if wearable_type == WearableType::Invalid {
            return Err(malformed("missing type"));
        }

        Ok(Self {
            name,
            wearable_type,
            params,
            textures,
        })
    }
}

/// One worn item: inventory identity, asset identity, and the decoded
/// asset once the pipeline has fetched it.
#[derive(Debug, Clone)]
pub struct WearableRecord {
    pub item_id: Uuid,
    pub asset_id: Uuid,
    pub wearable_type: WearableType,
    pub asset_kind: AssetKind,
    pub asset: Option<WearableAsset>,
}

/// Deep copy of the registry, safe to read outside the lock.
pub type WearablesSnapshot = HashMap<WearableType, WearableRecord>;

/// Slot-keyed registry of worn wearables. At most one record per slot; all
/// operations serialize under a single mutex.
#[derive(Debug, Default)]
pub struct WearableRegistry {
    inner: Mutex<HashMap<WearableType, WearableRecord>>,
}

impl WearableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a server wearables snapshot. Returns true when anything
    /// actually changed: a slot asserted with a new item or asset id, a
    /// previously unset slot now worn, or a locally worn slot implicitly
    /// cleared by its absence. An unchanged snapshot is discarded as a
    /// duplicate and leaves decoded assets intact.
    pub fn update_from_server(&self, blocks: &[WearableUpdateBlock]) -> bool {
        let mut incoming: HashMap<WearableType, (Uuid, Uuid)> = HashMap::new();
        for block in blocks {
            if block.wearable_type == WearableType::Invalid || block.asset_id.is_nil() {
                continue;
            }
            incoming.insert(block.wearable_type, (block.item_id, block.asset_id));
        }

        let mut inner = self.inner.lock().expect("wearable registry lock poisoned");

        let unchanged = inner.len() == incoming.len()
            && incoming.iter().all(|(slot, (item_id, asset_id))| {
                inner
                    .get(slot)
                    .map(|r| r.item_id == *item_id && r.asset_id == *asset_id)
                    .unwrap_or(false)
            });
        if unchanged {
            return false;
        }

        *inner = incoming
            .into_iter()
            .map(|(slot, (item_id, asset_id))| {
                (
                    slot,
                    WearableRecord {
                        item_id,
                        asset_id,
                        wearable_type: slot,
                        asset_kind: slot.asset_kind(),
                        asset: None,
                    },
                )
            })
            .collect();
        true
    }

    /// Asset id worn in a slot; nil when the slot is empty.
    pub fn asset_id(&self, slot: WearableType) -> Uuid {
        self.inner
            .lock()
            .expect("wearable registry lock poisoned")
            .get(&slot)
            .map(|r| r.asset_id)
            .unwrap_or_else(Uuid::nil)
    }

    /// Which slot, if any, carries this inventory item.
    pub fn is_worn(&self, item_id: Uuid) -> Option<WearableType> {
        self.inner
            .lock()
            .expect("wearable registry lock poisoned")
            .values()
            .find(|r| r.item_id == item_id)
            .map(|r| r.wearable_type)
    }

    pub fn snapshot(&self) -> WearablesSnapshot {
        self.inner
            .lock()
            .expect("wearable registry lock poisoned")
            .clone()
    }

    /// Records still waiting on their asset download.
    pub fn missing_assets(&self) -> Vec<(WearableType, Uuid, AssetKind)> {
        self.inner
            .lock()
            .expect("wearable registry lock poisoned")
            .values()
            .filter(|r| r.asset.is_none())
            .map(|r| (r.wearable_type, r.asset_id, r.asset_kind))
            .collect()
    }

    /// Attach a decoded asset to a slot. Returns false when the slot was
    /// replaced while the download was in flight.
    pub fn store_asset(&self, slot: WearableType, asset: WearableAsset) -> bool {
        let mut inner = self.inner.lock().expect("wearable registry lock poisoned");
        match inner.get_mut(&slot) {
            Some(record) => {
                record.asset = Some(asset);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.inner
            .lock()
            .expect("wearable registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(slot: WearableType, item: u128, asset: u128) -> WearableUpdateBlock {
        WearableUpdateBlock {
            item_id: Uuid::from_u128(item),
            asset_id: Uuid::from_u128(asset),
            wearable_type: slot,
        }
    }

    #[test]
    fn test_update_replaces_contents() {
        let registry = WearableRegistry::new();
        assert!(registry.update_from_server(&[
            block(WearableType::Shape, 1, 11),
            block(WearableType::Skin, 2, 22),
        ]));
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.asset_id(WearableType::Shape), Uuid::from_u128(11));
        assert_eq!(registry.is_worn(Uuid::from_u128(2)), Some(WearableType::Skin));
        assert!(registry.asset_id(WearableType::Shirt).is_nil());
    }

    #[test]
    fn test_duplicate_update_discarded() {
        let registry = WearableRegistry::new();
        let blocks = [
            block(WearableType::Shape, 1, 11),
            block(WearableType::Hair, 3, 33),
        ];
        assert!(registry.update_from_server(&blocks));
        assert!(!registry.update_from_server(&blocks));
    }

    #[test]
    fn test_duplicate_update_keeps_decoded_assets() {
        let registry = WearableRegistry::new();
        let blocks = [block(WearableType::Shape, 1, 11)];
        registry.update_from_server(&blocks);
        registry.store_asset(
            WearableType::Shape,
            WearableAsset {
                name: "Shape".to_string(),
                wearable_type: WearableType::Shape,
                params: HashMap::new(),
                textures: HashMap::new(),
            },
        );
        assert!(!registry.update_from_server(&blocks));
        assert!(registry.snapshot()[&WearableType::Shape].asset.is_some());
    }

    #[test]
    fn test_absent_slot_is_implicitly_cleared() {
        let registry = WearableRegistry::new();
        registry.update_from_server(&[
            block(WearableType::Shape, 1, 11),
            block(WearableType::Skirt, 4, 44),
        ]);
        assert!(registry.update_from_server(&[block(WearableType::Shape, 1, 11)]));
        assert!(registry.asset_id(WearableType::Skirt).is_nil());
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_nil_asset_blocks_are_ignored() {
        let registry = WearableRegistry::new();
        assert!(registry.update_from_server(&[
            block(WearableType::Shape, 1, 11),
            block(WearableType::Gloves, 5, 0),
        ]));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_parse_wearable_asset() {
        let text = "LLWearable version 22\nTattered Shirt\n\tpermissions 0\n\t{\n\t\tbase_mask\t7fffffff\n\t\towner_mask\t7fffffff\n\t}\n\tsale_info\t0\n\t{\n\t\tsale_type\tnot\n\t\tsale_price\t10\n\t}\ntype 4\nparameters 2\n603 .8\n111 0.25\ntextures 1\n1 5748decc-f629-461c-9a36-a35a221fe21f\n";
        let asset = WearableAsset::parse(text.as_bytes()).unwrap();
        assert_eq!(asset.name, "Tattered Shirt");
        assert_eq!(asset.wearable_type, WearableType::Shirt);
        assert_eq!(asset.params[&603], 0.8);
        assert_eq!(asset.params[&111], 0.25);
        assert_eq!(
            asset.textures[&AvatarTextureIndex::UpperShirt],
            "5748decc-f629-461c-9a36-a35a221fe21f".parse::<Uuid>().unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(WearableAsset::parse(b"not a wearable").is_err());
        assert!(WearableAsset::parse(b"LLWearable version 22\nNo Type\nparameters 0\n").is_err());
        assert!(WearableAsset::parse(&[0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn test_asset_kind_mapping() {
        assert_eq!(WearableType::Skin.asset_kind(), AssetKind::Bodypart);
        assert_eq!(WearableType::Shirt.asset_kind(), AssetKind::Clothing);
        assert_eq!(WearableType::Invalid.asset_kind(), AssetKind::Unknown);
    }
}
