//! Avatar texture table
//!
//! A fixed array of per-face texture state: source texture ids declared by
//! worn wearables, their decoded bytes once fetched, and the alpha/color
//! weights the owning wearable attached. The six baked faces are filled by
//! the cache negotiation or by local bakes.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bakes::BakeType;
use super::visual_params::{VisualAlphaParam, VisualColorParam};
use super::DEFAULT_AVATAR_TEXTURE;

/// Face indices of the avatar texture entry. Values are stable wire
/// integers; the six `*Baked` faces carry composite textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AvatarTextureIndex {
    HeadBodypaint = 0,
    UpperShirt = 1,
    LowerPants = 2,
    EyesIris = 3,
    Hair = 4,
    UpperBodypaint = 5,
    LowerBodypaint = 6,
    LowerShoes = 7,
    HeadBaked = 8,
    UpperBaked = 9,
    LowerBaked = 10,
    EyesBaked = 11,
    LowerSocks = 12,
    UpperJacket = 13,
    LowerJacket = 14,
    UpperGloves = 15,
    UpperUndershirt = 16,
    LowerUnderpants = 17,
    Skirt = 18,
    SkirtBaked = 19,
    HairBaked = 20,
}

impl AvatarTextureIndex {
    pub const COUNT: usize = 21;

    pub const ALL: [AvatarTextureIndex; Self::COUNT] = [
        AvatarTextureIndex::HeadBodypaint,
        AvatarTextureIndex::UpperShirt,
        AvatarTextureIndex::LowerPants,
        AvatarTextureIndex::EyesIris,
        AvatarTextureIndex::Hair,
        AvatarTextureIndex::UpperBodypaint,
        AvatarTextureIndex::LowerBodypaint,
        AvatarTextureIndex::LowerShoes,
        AvatarTextureIndex::HeadBaked,
        AvatarTextureIndex::UpperBaked,
        AvatarTextureIndex::LowerBaked,
        AvatarTextureIndex::EyesBaked,
        AvatarTextureIndex::LowerSocks,
        AvatarTextureIndex::UpperJacket,
        AvatarTextureIndex::LowerJacket,
        AvatarTextureIndex::UpperGloves,
        AvatarTextureIndex::UpperUndershirt,
        AvatarTextureIndex::LowerUnderpants,
        AvatarTextureIndex::Skirt,
        AvatarTextureIndex::SkirtBaked,
        AvatarTextureIndex::HairBaked,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// True for the six composite faces
    pub fn is_baked(self) -> bool {
        matches!(
            self,
            AvatarTextureIndex::HeadBaked
                | AvatarTextureIndex::UpperBaked
                | AvatarTextureIndex::LowerBaked
                | AvatarTextureIndex::EyesBaked
                | AvatarTextureIndex::SkirtBaked
                | AvatarTextureIndex::HairBaked
        )
    }
}

/// Per-face texture state. Slots are stable array cells that get
/// overwritten in place; there is no per-slot allocation churn.
#[derive(Debug, Clone, Default)]
pub struct TextureSlot {
    /// Current texture id; nil means unset
    pub texture_id: Uuid,
    /// Decoded image bytes, present once fetched
    pub data: Option<Bytes>,
    /// Alpha-mask weights attached by the owning wearable
    pub alpha_weights: Vec<(VisualAlphaParam, f32)>,
    /// Color-ramp weights attached by the owning wearable
    pub color_weights: Vec<(VisualColorParam, f32)>,
}

/// Canonicalize a texture id for table storage: the simulator's default
/// avatar texture is equivalent to "nothing here".
pub fn canonical_texture_id(id: Uuid) -> Uuid {
    if id == DEFAULT_AVATAR_TEXTURE {
        Uuid::nil()
    } else {
        id
    }
}

/// The fixed-size per-face texture table.
#[derive(Debug, Clone)]
pub struct TextureTable {
    slots: [TextureSlot; AvatarTextureIndex::COUNT],
}

impl TextureTable {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| TextureSlot::default()),
        }
    }

    pub fn slot(&self, face: AvatarTextureIndex) -> &TextureSlot {
        &self.slots[face as usize]
    }

    pub fn texture_id(&self, face: AvatarTextureIndex) -> Uuid {
        self.slots[face as usize].texture_id
    }

    /// Assign a source texture to a face. Returns false when the id (after
    /// canonicalization) already matches and nothing changed. A real change
    /// drops the decoded bytes and replaces the attached weights.
    pub fn set_source_texture(
        &mut self,
        face: AvatarTextureIndex,
        texture_id: Uuid,
        alpha_weights: Vec<(VisualAlphaParam, f32)>,
        color_weights: Vec<(VisualColorParam, f32)>,
    ) -> bool {
        let id = canonical_texture_id(texture_id);
        let slot = &mut self.slots[face as usize];
        if slot.texture_id == id {
            return false;
        }
        slot.texture_id = id;
        slot.data = None;
        slot.alpha_weights = alpha_weights;
        slot.color_weights = color_weights;
        true
    }

    /// Baked face id for a layer
    pub fn baked_id(&self, layer: BakeType) -> Uuid {
        self.texture_id(layer.baked_index())
    }

    /// Write a baked texture id for a layer (cache hit or upload result)
    pub fn set_baked_texture(&mut self, layer: BakeType, texture_id: Uuid) {
        let slot = &mut self.slots[layer.baked_index() as usize];
        slot.texture_id = canonical_texture_id(texture_id);
        slot.data = None;
    }

    /// Zero every baked face, forcing a full local rebake
    pub fn clear_baked_textures(&mut self) {
        for layer in BakeType::ALL {
            self.slots[layer.baked_index() as usize].texture_id = Uuid::nil();
        }
    }

    /// Install decoded bytes into every face whose id matches. Returns how
    /// many faces were filled.
    pub fn install_texture_bytes(&mut self, texture_id: Uuid, data: Bytes) -> usize {
        let mut installed = 0;
        for slot in self.slots.iter_mut() {
            if slot.texture_id == texture_id {
                slot.data = Some(data.clone());
                installed += 1;
            }
        }
        installed
    }
}

impl Default for TextureTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_roundtrip() {
        for face in AvatarTextureIndex::ALL {
            assert_eq!(AvatarTextureIndex::from_u8(face as u8), Some(face));
        }
        assert_eq!(AvatarTextureIndex::from_u8(21), None);
    }

    #[test]
    fn test_default_texture_canonicalized_to_nil() {
        let mut table = TextureTable::new();
        table.set_source_texture(
            AvatarTextureIndex::UpperShirt,
            DEFAULT_AVATAR_TEXTURE,
            Vec::new(),
            Vec::new(),
        );
        assert!(table.texture_id(AvatarTextureIndex::UpperShirt).is_nil());

        table.set_baked_texture(BakeType::Head, DEFAULT_AVATAR_TEXTURE);
        assert!(table.baked_id(BakeType::Head).is_nil());
    }

    #[test]
    fn test_reassign_clears_decoded_bytes() {
        let mut table = TextureTable::new();
        let first = Uuid::from_u128(1);
        let second = Uuid::from_u128(2);

        assert!(table.set_source_texture(AvatarTextureIndex::Hair, first, Vec::new(), Vec::new()));
        assert_eq!(table.install_texture_bytes(first, Bytes::from_static(b"img")), 1);
        assert!(table.slot(AvatarTextureIndex::Hair).data.is_some());

        // same id again is a no-op
        assert!(!table.set_source_texture(AvatarTextureIndex::Hair, first, Vec::new(), Vec::new()));
        assert!(table.slot(AvatarTextureIndex::Hair).data.is_some());

        assert!(table.set_source_texture(AvatarTextureIndex::Hair, second, Vec::new(), Vec::new()));
        assert!(table.slot(AvatarTextureIndex::Hair).data.is_none());
    }

    #[test]
    fn test_install_fills_every_matching_face() {
        let mut table = TextureTable::new();
        let id = Uuid::from_u128(7);
        table.set_source_texture(AvatarTextureIndex::UpperShirt, id, Vec::new(), Vec::new());
        table.set_source_texture(AvatarTextureIndex::LowerPants, id, Vec::new(), Vec::new());
        assert_eq!(table.install_texture_bytes(id, Bytes::from_static(b"x")), 2);
    }

    #[test]
    fn test_clear_baked_textures() {
        let mut table = TextureTable::new();
        for layer in BakeType::ALL {
            table.set_baked_texture(layer, Uuid::from_u128(layer as u128 + 1));
        }
        table.clear_baked_textures();
        for layer in BakeType::ALL {
            assert!(table.baked_id(layer).is_nil());
        }
    }
}
