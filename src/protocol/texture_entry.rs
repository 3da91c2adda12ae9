//! Packed texture-entry codec
//!
//! The avatar texture layout travels as a compact byte form: a default
//! texture id, then one exception group per distinct override — a face
//! bitfield followed by the texture id — terminated by a zero bitfield.
//! Bitfields are emitted as little-endian 7-bit groups with the high bit
//! flagging continuation.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use uuid::Uuid;

use crate::appearance::textures::AvatarTextureIndex;
use crate::appearance::{AppearanceError, AppearanceResult};

const UUID_LEN: usize = 16;

/// Per-face texture layout for the avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    pub default_texture: Uuid,
    faces: [Option<Uuid>; AvatarTextureIndex::COUNT],
}

impl TextureEntry {
    pub fn new(default_texture: Uuid) -> Self {
        Self {
            default_texture,
            faces: [None; AvatarTextureIndex::COUNT],
        }
    }

    /// Override one face's texture id.
    pub fn set_face(&mut self, face: AvatarTextureIndex, texture_id: Uuid) {
        self.faces[face as usize] = Some(texture_id);
    }

    /// The effective texture id for a face.
    pub fn face(&self, face: AvatarTextureIndex) -> Uuid {
        self.faces[face as usize].unwrap_or(self.default_texture)
    }

    /// Whether a face carries an explicit override.
    pub fn has_override(&self, face: AvatarTextureIndex) -> bool {
        self.faces[face as usize].is_some()
    }

    /// Serialize to the packed byte form.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(UUID_LEN + self.faces.len() * (UUID_LEN + 3) + 1);
        buf.put_slice(self.default_texture.as_bytes());

        // Group faces sharing an override, first-face order
        let mut groups: Vec<(Uuid, u32)> = Vec::new();
        for (i, face) in self.faces.iter().enumerate() {
            if let Some(id) = face {
                match groups.iter_mut().find(|(group_id, _)| group_id == id) {
                    Some((_, mask)) => *mask |= 1 << i,
                    None => groups.push((*id, 1 << i)),
                }
            }
        }

        for (id, mask) in groups {
            put_face_bitfield(&mut buf, mask);
            buf.put_slice(id.as_bytes());
        }
        buf.put_u8(0);
        buf.freeze()
    }

    /// Parse the packed byte form.
    pub fn decode(data: &[u8]) -> AppearanceResult<Self> {
        let mut buf = data;
        let default_texture = get_uuid(&mut buf)?;
        let mut entry = TextureEntry::new(default_texture);

        loop {
            let mask = get_face_bitfield(&mut buf)?;
            if mask == 0 {
                break;
            }
            let id = get_uuid(&mut buf)?;
            for face in AvatarTextureIndex::ALL {
                if mask & (1 << face as u32) != 0 {
                    entry.faces[face as usize] = Some(id);
                }
            }
        }
        Ok(entry)
    }
}

fn put_face_bitfield(buf: &mut BytesMut, mut mask: u32) {
    loop {
        let byte = (mask & 0x7f) as u8;
        mask >>= 7;
        if mask != 0 {
            buf.put_u8(byte | 0x80);
        } else {
            buf.put_u8(byte);
            break;
        }
    }
}

fn get_face_bitfield(buf: &mut &[u8]) -> AppearanceResult<u32> {
    let mut mask = 0u32;
    let mut shift = 0u32;
    loop {
        if buf.remaining() < 1 {
            return Err(truncated());
        }
        let byte = buf.get_u8();
        mask |= ((byte & 0x7f) as u32) << shift;
        if byte & 0x80 == 0 {
            return Ok(mask);
        }
        shift += 7;
        if shift > 28 {
            return Err(AppearanceError::Other {
                reason: "texture entry face bitfield overflows".to_string(),
            });
        }
    }
}

fn get_uuid(buf: &mut &[u8]) -> AppearanceResult<Uuid> {
    if buf.remaining() < UUID_LEN {
        return Err(truncated());
    }
    let mut raw = [0u8; UUID_LEN];
    buf.copy_to_slice(&mut raw);
    Ok(Uuid::from_bytes(raw))
}

fn truncated() -> AppearanceError {
    AppearanceError::Other {
        reason: "truncated texture entry".to_string(),
    }
}
