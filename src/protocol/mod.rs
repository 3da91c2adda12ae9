//! Appearance protocol data types
//!
//! Typed forms of the packets the pipeline consumes and produces, plus the
//! packed texture-entry codec. Outer packet framing, acking, and session
//! authentication belong to the transport and are not represented here.

pub mod messages;
pub mod texture_entry;

pub use messages::{
    AgentData, CachedTextureQuery, CachedTextureResponse, EventQueueRunning, SetAppearance,
    Vector3, WearablesRequest, WearablesUpdate,
};
pub use texture_entry::TextureEntry;
