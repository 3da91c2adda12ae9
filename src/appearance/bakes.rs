//! Baked layer definitions
//!
//! Each bake layer composites an ordered subset of wearable slots into one
//! baked texture face. The per-layer magic hashes are XOR-mixed into cache
//! fingerprints so that identical wearable sets on different layers never
//! share a cache entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::textures::AvatarTextureIndex;
use super::wearables::WearableType;

/// The six composite layers of an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BakeType {
    Head = 0,
    UpperBody = 1,
    LowerBody = 2,
    Eyes = 3,
    Skirt = 4,
    Hair = 5,
}

impl BakeType {
    pub const COUNT: usize = 6;

    pub const ALL: [BakeType; Self::COUNT] = [
        BakeType::Head,
        BakeType::UpperBody,
        BakeType::LowerBody,
        BakeType::Eyes,
        BakeType::Skirt,
        BakeType::Hair,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// The baked texture face this layer composites into
    pub fn baked_index(self) -> AvatarTextureIndex {
        match self {
            BakeType::Head => AvatarTextureIndex::HeadBaked,
            BakeType::UpperBody => AvatarTextureIndex::UpperBaked,
            BakeType::LowerBody => AvatarTextureIndex::LowerBaked,
            BakeType::Eyes => AvatarTextureIndex::EyesBaked,
            BakeType::Skirt => AvatarTextureIndex::SkirtBaked,
            BakeType::Hair => AvatarTextureIndex::HairBaked,
        }
    }

    /// Ordered wearable slots whose assets participate in this layer's
    /// cache fingerprint.
    pub fn wearable_slots(self) -> &'static [WearableType] {
        match self {
            BakeType::Head => &[WearableType::Shape, WearableType::Skin, WearableType::Hair],
            BakeType::UpperBody => &[
                WearableType::Shape,
                WearableType::Skin,
                WearableType::Shirt,
                WearableType::Jacket,
                WearableType::Gloves,
                WearableType::Undershirt,
            ],
            BakeType::LowerBody => &[
                WearableType::Shape,
                WearableType::Skin,
                WearableType::Pants,
                WearableType::Shoes,
                WearableType::Socks,
                WearableType::Jacket,
                WearableType::Underpants,
            ],
            BakeType::Eyes => &[WearableType::Eyes],
            BakeType::Skirt => &[WearableType::Skirt],
            BakeType::Hair => &[WearableType::Hair],
        }
    }

    /// Unbaked source faces that feed this layer's compositor.
    pub fn source_faces(self) -> &'static [AvatarTextureIndex] {
        match self {
            BakeType::Head => &[AvatarTextureIndex::HeadBodypaint],
            BakeType::UpperBody => &[
                AvatarTextureIndex::UpperBodypaint,
                AvatarTextureIndex::UpperUndershirt,
                AvatarTextureIndex::UpperShirt,
                AvatarTextureIndex::UpperJacket,
                AvatarTextureIndex::UpperGloves,
            ],
            BakeType::LowerBody => &[
                AvatarTextureIndex::LowerBodypaint,
                AvatarTextureIndex::LowerUnderpants,
                AvatarTextureIndex::LowerSocks,
                AvatarTextureIndex::LowerShoes,
                AvatarTextureIndex::LowerPants,
                AvatarTextureIndex::LowerJacket,
            ],
            BakeType::Eyes => &[AvatarTextureIndex::EyesIris],
            BakeType::Skirt => &[AvatarTextureIndex::Skirt],
            BakeType::Hair => &[AvatarTextureIndex::Hair],
        }
    }

    /// Per-layer constant mixed into cache fingerprints.
    pub fn magic_hash(self) -> Uuid {
        match self {
            BakeType::Head => Uuid::from_u128(0x18ded8d6_bcfc_e415_8539_944c0f5ea7a6),
            BakeType::UpperBody => Uuid::from_u128(0x338c29e3_3024_4dbb_998d_7c04cf4fa88f),
            BakeType::LowerBody => Uuid::from_u128(0x91b4a2c7_1b1a_ba16_9a16_1f8f8dcc1c3f),
            BakeType::Eyes => Uuid::from_u128(0xb2cf28af_b840_1071_3c6a_78085d8128b5),
            BakeType::Skirt => Uuid::from_u128(0xea800387_ea1a_14e0_56cb_24f2022f969a),
            BakeType::Hair => Uuid::from_u128(0x0af1ef7c_ad24_11dd_8790_001f5bf833e8),
        }
    }
}

impl std::fmt::Display for BakeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BakeType::Head => write!(f, "Head"),
            BakeType::UpperBody => write!(f, "UpperBody"),
            BakeType::LowerBody => write!(f, "LowerBody"),
            BakeType::Eyes => write!(f, "Eyes"),
            BakeType::Skirt => write!(f, "Skirt"),
            BakeType::Hair => write!(f, "Hair"),
        }
    }
}
