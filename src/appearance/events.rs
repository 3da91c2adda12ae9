//! Events sent from the appearance pipeline to the application
//! These are clean, application-friendly data structures

use std::time::SystemTime;

/// Server replaced the worn wearable set
#[derive(Debug, Clone)]
pub struct WearablesReceivedEvent {
    pub worn_count: usize,
    pub timestamp: SystemTime,
}

/// A baked-texture cache response was applied
#[derive(Debug, Clone)]
pub struct CacheNegotiatedEvent {
    pub hits: usize,
    pub misses: usize,
    pub timestamp: SystemTime,
}

/// An AgentSetAppearance went out on the wire
#[derive(Debug, Clone)]
pub struct AppearancePublishedEvent {
    pub serial_num: u32,
    /// True when some stage degraded (fetch timeout, decode failure,
    /// upload rejection) and the published appearance is incomplete
    pub partial: bool,
    pub timestamp: SystemTime,
}

/// Union of everything the pipeline broadcasts
#[derive(Debug, Clone)]
pub enum AppearanceEvent {
    WearablesReceived(WearablesReceivedEvent),
    CacheNegotiated(CacheNegotiatedEvent),
    AppearancePublished(AppearancePublishedEvent),
}
