//! Appearance pipeline orchestrator
//!
//! Sequences the five stages of an appearance run and owns the run-flag
//! and serial counters. Intake handlers (wearables updates, cache
//! responses, event-queue triggers) run on whatever task the transport
//! surfaces them from; the pipeline itself runs on its own worker, so the
//! callback paths are never re-entrant to the orchestrator.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex as StdMutex, Weak};
use std::time::SystemTime;

use tokio::sync::{broadcast, oneshot, Mutex};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::cache::{self, CacheOutcome};
use super::bakes::BakeType;
use super::events::{
    AppearanceEvent, AppearancePublishedEvent, CacheNegotiatedEvent, WearablesReceivedEvent,
};
use super::pipeline;
use super::publisher;
use super::textures::TextureTable;
use super::wearables::WearableRegistry;
use super::{AppearanceError, AppearanceResult};
use crate::config::AppearanceConfig;
use crate::protocol::messages::{
    AgentData, CachedTextureQuery, CachedTextureResponse, EventQueueRunning, WearablesRequest,
    WearablesUpdate,
};
use crate::services::AppearanceServices;

/// Outcome of one completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    /// Serial number the AgentSetAppearance went out with
    pub serial_num: u32,
    /// True when some stage degraded and the appearance is incomplete
    pub partial: bool,
    /// How many layers were baked and uploaded locally this run
    pub rebaked_layers: usize,
}

/// Orchestrator for the avatar appearance pipeline.
pub struct AppearanceManager {
    agent_id: Uuid,
    session_id: Uuid,
    pub(crate) config: AppearanceConfig,
    pub(crate) services: AppearanceServices,
    pub(crate) wearables: WearableRegistry,
    pub(crate) textures: Mutex<TextureTable>,

    /// Run-flag: at most one pipeline run process-wide
    bake_in_progress: AtomicBool,
    set_appearance_serial: AtomicU32,
    cache_query_serial: AtomicU32,

    /// Once-shot barrier tripped by the next inbound wearables update
    wearables_signal: StdMutex<Option<oneshot::Sender<()>>>,
    /// Once-shot barrier tripped by the next cache response
    cache_signal: StdMutex<Option<oneshot::Sender<CacheOutcome>>>,

    events_tx: broadcast::Sender<AppearanceEvent>,
    /// Self-handle for spawning background runs from `&self` methods
    weak_self: Weak<AppearanceManager>,
}

impl AppearanceManager {
    pub fn new(
        agent_id: Uuid,
        session_id: Uuid,
        config: AppearanceConfig,
        services: AppearanceServices,
    ) -> Arc<Self> {
        let (events_tx, _) = broadcast::channel(64);
        Arc::new_cyclic(|weak_self| Self {
            agent_id,
            session_id,
            config,
            services,
            wearables: WearableRegistry::new(),
            textures: Mutex::new(TextureTable::new()),
            bake_in_progress: AtomicBool::new(false),
            set_appearance_serial: AtomicU32::new(0),
            cache_query_serial: AtomicU32::new(0),
            wearables_signal: StdMutex::new(None),
            cache_signal: StdMutex::new(None),
            events_tx,
            weak_self: weak_self.clone(),
        })
    }

    pub fn agent_id(&self) -> Uuid {
        self.agent_id
    }

    pub(crate) fn agent_data(&self) -> AgentData {
        AgentData {
            agent_id: self.agent_id,
            session_id: self.session_id,
        }
    }

    /// Serial of the last published appearance; 0 means none ever.
    pub fn set_appearance_serial(&self) -> u32 {
        self.set_appearance_serial.load(Ordering::Acquire)
    }

    pub fn cache_query_serial(&self) -> u32 {
        self.cache_query_serial.load(Ordering::Acquire)
    }

    pub(crate) fn next_set_appearance_serial(&self) -> u32 {
        self.set_appearance_serial.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Whether a pipeline run is currently active.
    pub fn is_busy(&self) -> bool {
        self.bake_in_progress.load(Ordering::Acquire)
    }

    /// Subscribe to pipeline events.
    pub fn subscribe(&self) -> broadcast::Receiver<AppearanceEvent> {
        self.events_tx.subscribe()
    }

    pub fn wearables(&self) -> &WearableRegistry {
        &self.wearables
    }

    /// Kick off an appearance run on its own worker. Returns false (after
    /// a warning) when a run is already active; the caller is never
    /// blocked and nothing is queued.
    pub fn request_set_appearance(&self, force_rebake: bool) -> bool {
        if !self.try_begin_run() {
            warn!("Appearance pipeline already running, ignoring request");
            return false;
        }
        let Some(manager) = self.weak_self.upgrade() else {
            self.bake_in_progress.store(false, Ordering::Release);
            return false;
        };
        tokio::spawn(async move {
            match manager.run_pipeline(force_rebake).await {
                Ok(report) => debug!(
                    "Appearance run finished: serial {}, partial {}",
                    report.serial_num, report.partial
                ),
                Err(e) => warn!("Appearance run failed: {}", e),
            }
        });
        true
    }

    /// Run the pipeline inline on the caller's task. Same single-run
    /// contract as [`Self::request_set_appearance`], but the caller
    /// observes the outcome.
    pub async fn send_appearance(&self, force_rebake: bool) -> AppearanceResult<PublishReport> {
        if !self.try_begin_run() {
            warn!("Appearance pipeline already running, ignoring request");
            return Err(AppearanceError::PipelineBusy);
        }
        self.run_pipeline(force_rebake).await
    }

    fn try_begin_run(&self) -> bool {
        self.bake_in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// The five-stage run. The run-flag is released on every exit path,
    /// including drops, via the guard below.
    async fn run_pipeline(&self, force_rebake: bool) -> AppearanceResult<PublishReport> {
        let _run = RunGuard(&self.bake_in_progress);
        info!("🧵 Appearance pipeline starting (force_rebake: {})", force_rebake);

        if force_rebake {
            self.textures.lock().await.clear_baked_textures();
        }

        // First run ever: the worn set must come from the simulator.
        if self.set_appearance_serial() == 0 {
            self.fetch_wearables_list().await?;
        }

        let mut partial = pipeline::download_wearables(self).await;

        // Fingerprints for the cache query and the publish both come from
        // this snapshot, so they agree even if an update lands mid-run.
        let wearables = self.wearables.snapshot();

        if self.set_appearance_serial() == 0 && !force_rebake {
            self.negotiate_cache(&wearables).await?;
        }

        let pending: Vec<BakeType> = {
            let table = self.textures.lock().await;
            BakeType::ALL
                .iter()
                .copied()
                .filter(|layer| {
                    table.baked_id(*layer).is_nil()
                        && cache::layer_fingerprint(*layer, &wearables).is_some()
                })
                .collect()
        };

        if !pending.is_empty() {
            partial |= pipeline::download_textures(self, &wearables, &pending).await;
            partial |= pipeline::bake_and_upload(self, &wearables, &pending).await;
        }

        let serial_num = publisher::send_set_appearance(self, &wearables).await?;
        let _ = self
            .events_tx
            .send(AppearanceEvent::AppearancePublished(AppearancePublishedEvent {
                serial_num,
                partial,
                timestamp: SystemTime::now(),
            }));

        Ok(PublishReport {
            serial_num,
            partial,
            rebaked_layers: pending.len(),
        })
    }

    /// Ask the simulator for the worn wearable set and wait for the next
    /// AgentWearablesUpdate to land. A timeout aborts this run.
    async fn fetch_wearables_list(&self) -> AppearanceResult<()> {
        let (tx, rx) = oneshot::channel();
        *self
            .wearables_signal
            .lock()
            .expect("wearables signal lock poisoned") = Some(tx);

        info!("👕 Requesting agent wearables list");
        self.services
            .link
            .send_wearables_request(WearablesRequest {
                agent_data: self.agent_data(),
            })
            .await
            .map_err(|e| AppearanceError::TransportUnavailable {
                reason: e.to_string(),
            })?;

        match timeout(self.config.wearables_list_timeout, rx).await {
            Ok(Ok(())) => Ok(()),
            _ => {
                self.wearables_signal
                    .lock()
                    .expect("wearables signal lock poisoned")
                    .take();
                Err(AppearanceError::WearablesEnumTimeout)
            }
        }
    }

    /// Ask the simulator which layers it still has cached. A timeout is
    /// logged and treated as "every layer missed".
    async fn negotiate_cache(
        &self,
        wearables: &super::wearables::WearablesSnapshot,
    ) -> AppearanceResult<()> {
        let blocks = cache::build_query_blocks(wearables);
        if blocks.is_empty() {
            debug!("Every bake layer is empty, suppressing cache query");
            return Ok(());
        }

        let (tx, rx) = oneshot::channel();
        *self
            .cache_signal
            .lock()
            .expect("cache signal lock poisoned") = Some(tx);

        let serial_num = self.cache_query_serial.fetch_add(1, Ordering::AcqRel) + 1;
        info!(
            "📡 Querying baked-texture cache: {} layers, serial {}",
            blocks.len(),
            serial_num
        );
        self.services
            .link
            .send_cached_texture_query(CachedTextureQuery {
                agent_data: self.agent_data(),
                serial_num,
                wearable_data: blocks,
            })
            .await
            .map_err(|e| AppearanceError::TransportUnavailable {
                reason: e.to_string(),
            })?;

        match timeout(self.config.cache_response_timeout, rx).await {
            Ok(Ok(outcome)) => {
                debug!(
                    "Cache negotiation done: {} hits, {} misses",
                    outcome.hits, outcome.misses
                );
            }
            _ => {
                self.cache_signal
                    .lock()
                    .expect("cache signal lock poisoned")
                    .take();
                warn!(
                    "{}; treating all layers as misses",
                    AppearanceError::CacheNegotiationTimeout
                );
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Intake handlers, called from the transport's dispatch
    // -----------------------------------------------------------------------

    /// Apply an inbound AgentWearablesUpdate. Duplicates are discarded
    /// without firing the wearables-received event, but they still trip
    /// the first-run barrier so a waiting pipeline proceeds.
    pub fn handle_wearables_update(&self, msg: WearablesUpdate) {
        let changed = self.wearables.update_from_server(&msg.wearable_data);
        if changed {
            let worn_count = self.wearables.count();
            info!("👕 Wearables updated: {} slots worn", worn_count);
            let _ = self
                .events_tx
                .send(AppearanceEvent::WearablesReceived(WearablesReceivedEvent {
                    worn_count,
                    timestamp: SystemTime::now(),
                }));
        } else {
            debug!("Duplicate wearables update discarded");
        }

        if let Some(tx) = self
            .wearables_signal
            .lock()
            .expect("wearables signal lock poisoned")
            .take()
        {
            let _ = tx.send(());
        }
    }

    /// Apply an inbound AgentCachedTextureResponse and wake the
    /// negotiating run, if one is waiting.
    pub async fn handle_cached_texture_response(&self, msg: CachedTextureResponse) {
        if msg.serial_num != self.cache_query_serial() {
            warn!(
                "Cache response serial {} does not match query serial {}",
                msg.serial_num,
                self.cache_query_serial()
            );
        }

        let outcome = {
            let mut table = self.textures.lock().await;
            cache::apply_response(&mut table, &msg)
        };
        info!(
            "📡 Cache response: {} hits, {} misses",
            outcome.hits, outcome.misses
        );
        let _ = self
            .events_tx
            .send(AppearanceEvent::CacheNegotiated(CacheNegotiatedEvent {
                hits: outcome.hits,
                misses: outcome.misses,
                timestamp: SystemTime::now(),
            }));

        if let Some(tx) = self
            .cache_signal
            .lock()
            .expect("cache signal lock poisoned")
            .take()
        {
            let _ = tx.send(outcome);
        }
    }

    /// The region's event queue came up; refresh the appearance for the
    /// new region. A run already in flight wins and this trigger is
    /// dropped.
    pub fn handle_event_queue_running(&self, msg: EventQueueRunning) {
        info!(
            "🌍 Event queue running for region {}; refreshing appearance",
            msg.region_id
        );
        self.request_set_appearance(false);
    }

    /// Resolve an outfit folder. Outfit composition is not wired up; the
    /// server-driven wearables update is the only intake that changes what
    /// is worn.
    pub async fn wear_outfit(&self, path: &str) -> AppearanceResult<()> {
        let folder_id = self.services.inventory.resolve_path(path).await?;
        let contents = self.services.inventory.folder_contents(folder_id).await?;
        let wearable_count = contents
            .iter()
            .filter(|item| item.wearable_type.is_some())
            .count();
        info!(
            "👗 Outfit folder '{}' holds {} items ({} wearables)",
            path,
            contents.len(),
            wearable_count
        );
        Ok(())
    }
}

impl std::fmt::Debug for AppearanceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceManager")
            .field("agent_id", &self.agent_id)
            .field("busy", &self.is_busy())
            .field("set_appearance_serial", &self.set_appearance_serial())
            .finish_non_exhaustive()
    }
}

/// Releases the run-flag when the pipeline exits, however it exits.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
