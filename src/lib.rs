// SLV-Appearance: avatar appearance pipeline for the Second Life protocol
// Performance by Default, Scalable by Design

pub mod appearance;
pub mod config;
pub mod protocol;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use appearance::{AppearanceError, AppearanceResult};
pub use appearance::manager::{AppearanceManager, PublishReport};
pub use appearance::wearables::{WearableRecord, WearableRegistry, WearableType};
pub use appearance::bakes::BakeType;
pub use appearance::textures::AvatarTextureIndex;
pub use config::{load_appearance_config, save_appearance_config, AppearanceConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
