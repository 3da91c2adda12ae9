//! End-to-end appearance pipeline scenarios against mock services.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::time::sleep;
use uuid::Uuid;

use slv_appearance::appearance::cache;
use slv_appearance::appearance::visual_params::{self, PUBLISHED_PARAM_COUNT};
use slv_appearance::protocol::messages::{
    AgentData, CachedTextureQuery, CachedTextureResponse, CachedTextureResponseBlock,
    SetAppearance, WearableUpdateBlock, WearablesRequest, WearablesUpdate,
};
use slv_appearance::protocol::TextureEntry;
use slv_appearance::services::{
    AppearanceServices, AssetFetcher, AssetKind, BakeJob, BakedUploader, Baker, FetchPriority,
    InventoryItem, InventoryService, SimulatorLink, TextureFetcher,
};
use slv_appearance::{
    AppearanceConfig, AppearanceError, AppearanceManager, AppearanceResult, AvatarTextureIndex,
    BakeType, WearableType,
};

// ---------------------------------------------------------------------------
// Mock services
// ---------------------------------------------------------------------------

struct MockAssetService {
    assets: HashMap<Uuid, Bytes>,
}

#[async_trait]
impl AssetFetcher for MockAssetService {
    async fn fetch_asset(
        &self,
        asset_id: Uuid,
        _kind: AssetKind,
        _priority: FetchPriority,
    ) -> AppearanceResult<Bytes> {
        self.assets
            .get(&asset_id)
            .cloned()
            .ok_or(AppearanceError::AssetService {
                reason: format!("no such asset {}", asset_id),
            })
    }
}

#[derive(Default)]
struct MockTextureService {
    fetched: Mutex<Vec<Uuid>>,
}

#[async_trait]
impl TextureFetcher for MockTextureService {
    async fn fetch_image(&self, texture_id: Uuid) -> AppearanceResult<Bytes> {
        self.fetched.lock().unwrap().push(texture_id);
        Ok(Bytes::from_static(b"decoded-image"))
    }
}

#[derive(Default)]
struct MockUploader {
    uploads: AtomicUsize,
    fail: AtomicBool,
}

#[async_trait]
impl BakedUploader for MockUploader {
    async fn upload_baked(&self, _data: Bytes) -> AppearanceResult<Uuid> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) as u128;
        if self.fail.load(Ordering::SeqCst) {
            Ok(Uuid::nil())
        } else {
            Ok(Uuid::from_u128(0xba0e_0000 + n + 1))
        }
    }
}

struct MockInventory;

#[async_trait]
impl InventoryService for MockInventory {
    async fn resolve_path(&self, path: &str) -> AppearanceResult<Uuid> {
        if path.is_empty() {
            return Err(AppearanceError::InventoryPathNotFound {
                path: path.to_string(),
            });
        }
        Ok(Uuid::from_u128(0xf01de7))
    }

    async fn folder_contents(&self, _folder_id: Uuid) -> AppearanceResult<Vec<InventoryItem>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct MockBaker {
    layers_started: AtomicUsize,
}

impl Baker for MockBaker {
    fn new_layer(&self, layer: BakeType, face_count: usize, params: &[f32]) -> Box<dyn BakeJob> {
        self.layers_started.fetch_add(1, Ordering::SeqCst);
        assert_eq!(params.len(), PUBLISHED_PARAM_COUNT);
        Box::new(MockBakeJob {
            layer,
            expected: face_count,
            fed: 0,
        })
    }
}

struct MockBakeJob {
    layer: BakeType,
    expected: usize,
    fed: usize,
}

impl BakeJob for MockBakeJob {
    fn add_face(
        &mut self,
        _face: AvatarTextureIndex,
        _texture: Option<&Bytes>,
        _alpha: &[(visual_params::VisualAlphaParam, f32)],
        _color: &[(visual_params::VisualColorParam, f32)],
    ) -> bool {
        self.fed += 1;
        self.fed >= self.expected
    }

    fn bake(self: Box<Self>) -> AppearanceResult<Bytes> {
        Ok(Bytes::from(format!("baked-{}", self.layer).into_bytes()))
    }
}

/// Simulator stand-in. When a reply is configured it is delivered inline
/// through the manager's intake handlers, the way the real transport
/// dispatches packets.
#[derive(Default)]
struct MockLink {
    manager: Mutex<Option<Arc<AppearanceManager>>>,
    wearables_reply: Mutex<Option<Vec<WearableUpdateBlock>>>,
    /// Per-layer-index cache answers; absent layers answer nil (miss)
    cache_reply: Mutex<Option<HashMap<u8, Uuid>>>,
    request_delay: Mutex<Option<Duration>>,
    wearables_requests: AtomicUsize,
    sent_queries: Mutex<Vec<CachedTextureQuery>>,
    sent_appearances: Mutex<Vec<SetAppearance>>,
}

#[async_trait]
impl SimulatorLink for MockLink {
    async fn send_wearables_request(&self, msg: WearablesRequest) -> AppearanceResult<()> {
        self.wearables_requests.fetch_add(1, Ordering::SeqCst);
        let delay = *self.request_delay.lock().unwrap();
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        let manager = self.manager.lock().unwrap().clone();
        let reply = self.wearables_reply.lock().unwrap().clone();
        if let (Some(manager), Some(blocks)) = (manager, reply) {
            manager.handle_wearables_update(WearablesUpdate {
                agent_data: msg.agent_data,
                serial_num: 1,
                wearable_data: blocks,
            });
        }
        Ok(())
    }

    async fn send_cached_texture_query(&self, msg: CachedTextureQuery) -> AppearanceResult<()> {
        self.sent_queries.lock().unwrap().push(msg.clone());
        let manager = self.manager.lock().unwrap().clone();
        let answers = self.cache_reply.lock().unwrap().clone();
        if let Some(manager) = manager {
            let wearable_data = msg
                .wearable_data
                .iter()
                .map(|block| CachedTextureResponseBlock {
                    texture_id: answers
                        .as_ref()
                        .and_then(|a| a.get(&block.texture_index))
                        .copied()
                        .unwrap_or_else(Uuid::nil),
                    texture_index: block.texture_index,
                    host_name: b"bake1.sim.example\0".to_vec(),
                })
                .collect();
            manager
                .handle_cached_texture_response(CachedTextureResponse {
                    agent_data: msg.agent_data,
                    serial_num: msg.serial_num,
                    wearable_data,
                })
                .await;
        }
        Ok(())
    }

    async fn send_set_appearance(&self, msg: SetAppearance) -> AppearanceResult<()> {
        self.sent_appearances.lock().unwrap().push(msg);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

struct World {
    manager: Arc<AppearanceManager>,
    link: Arc<MockLink>,
    textures: Arc<MockTextureService>,
    uploader: Arc<MockUploader>,
    baker: Arc<MockBaker>,
}

fn test_config() -> AppearanceConfig {
    AppearanceConfig {
        wearables_list_timeout: Duration::from_millis(250),
        wearable_fetch_timeout: Duration::from_millis(250),
        cache_response_timeout: Duration::from_millis(250),
        texture_fetch_timeout: Duration::from_millis(250),
        upload_timeout: Duration::from_millis(250),
        max_concurrent_downloads: 5,
        max_concurrent_uploads: 3,
    }
}

fn build_world(assets: HashMap<Uuid, Bytes>) -> World {
    let link = Arc::new(MockLink::default());
    let textures = Arc::new(MockTextureService::default());
    let uploader = Arc::new(MockUploader::default());
    let baker = Arc::new(MockBaker::default());

    let services = AppearanceServices {
        assets: Arc::new(MockAssetService { assets }),
        textures: textures.clone(),
        uploader: uploader.clone(),
        inventory: Arc::new(MockInventory),
        baker: baker.clone(),
        link: link.clone(),
    };
    let manager = AppearanceManager::new(
        Uuid::from_u128(0xa6e7),
        Uuid::from_u128(0x5e55),
        test_config(),
        services,
    );
    *link.manager.lock().unwrap() = Some(manager.clone());

    World {
        manager,
        link,
        textures,
        uploader,
        baker,
    }
}

fn wearable_text(
    type_num: u8,
    name: &str,
    params: &[(u32, f32)],
    textures: &[(u8, Uuid)],
) -> Bytes {
    let mut text = format!(
        "LLWearable version 22\n{}\n\tpermissions 0\n\t{{\n\t\tbase_mask\t7fffffff\n\t}}\ntype {}\n",
        name, type_num
    );
    text.push_str(&format!("parameters {}\n", params.len()));
    for (id, value) in params {
        text.push_str(&format!("{} {}\n", id, value));
    }
    text.push_str(&format!("textures {}\n", textures.len()));
    for (index, id) in textures {
        text.push_str(&format!("{} {}\n", index, id));
    }
    Bytes::from(text.into_bytes())
}

fn item_id(slot: WearableType) -> Uuid {
    Uuid::from_u128(0x11e0_0000 + slot as u128)
}

fn asset_id(slot: WearableType) -> Uuid {
    Uuid::from_u128(0xa55e_0000 + slot as u128)
}

fn tex_id(n: u128) -> Uuid {
    Uuid::from_u128(0x7e40_0000 + n)
}

fn block_for(slot: WearableType) -> WearableUpdateBlock {
    WearableUpdateBlock {
        item_id: item_id(slot),
        asset_id: asset_id(slot),
        wearable_type: slot,
    }
}

/// Shape, Skin, Hair, Shirt, Pants: the basic dressed avatar of the
/// first-run scenarios. Skin carries three bodypaint textures; the rest
/// one texture each (Shape none).
fn basic_outfit() -> (Vec<WearableUpdateBlock>, HashMap<Uuid, Bytes>) {
    let blocks = vec![
        block_for(WearableType::Shape),
        block_for(WearableType::Skin),
        block_for(WearableType::Hair),
        block_for(WearableType::Shirt),
        block_for(WearableType::Pants),
    ];
    let mut assets = HashMap::new();
    assets.insert(
        asset_id(WearableType::Shape),
        wearable_text(
            0,
            "Test Shape",
            &[
                (33, 0.5),
                (198, 0.1),
                (503, 0.2),
                (682, 0.5),
                (692, 0.8),
                (756, 0.3),
                (842, 0.4),
            ],
            &[],
        ),
    );
    assets.insert(
        asset_id(WearableType::Skin),
        wearable_text(
            1,
            "Test Skin",
            &[(111, 0.5), (110, 0.02)],
            &[
                (AvatarTextureIndex::HeadBodypaint as u8, tex_id(1)),
                (AvatarTextureIndex::UpperBodypaint as u8, tex_id(2)),
                (AvatarTextureIndex::LowerBodypaint as u8, tex_id(3)),
            ],
        ),
    );
    assets.insert(
        asset_id(WearableType::Hair),
        wearable_text(
            2,
            "Test Hair",
            &[(114, 0.6)],
            &[(AvatarTextureIndex::Hair as u8, tex_id(4))],
        ),
    );
    assets.insert(
        asset_id(WearableType::Shirt),
        wearable_text(
            4,
            "Test Shirt",
            &[(603, 0.8)],
            &[(AvatarTextureIndex::UpperShirt as u8, tex_id(5))],
        ),
    );
    assets.insert(
        asset_id(WearableType::Pants),
        wearable_text(
            5,
            "Test Pants",
            &[(615, 0.9)],
            &[(AvatarTextureIndex::LowerPants as u8, tex_id(6))],
        ),
    );
    (blocks, assets)
}

fn last_appearance(link: &MockLink) -> SetAppearance {
    link.sent_appearances.lock().unwrap().last().cloned().unwrap()
}

fn wearable_block_of(msg: &SetAppearance, layer: BakeType) -> Uuid {
    msg.wearable_data
        .iter()
        .find(|b| b.texture_index == layer as u8)
        .map(|b| b.cache_id)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// Scenario (a): first run, everything cached server-side. No texture
/// fetches, no bakes, no uploads; the four non-empty layers carry the
/// server-returned ids.
#[tokio::test]
async fn first_run_fully_cached() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);
    *world.link.cache_reply.lock().unwrap() = Some(HashMap::from([
        (BakeType::Head as u8, tex_id(0x10)),
        (BakeType::UpperBody as u8, tex_id(0x11)),
        (BakeType::LowerBody as u8, tex_id(0x12)),
        (BakeType::Hair as u8, tex_id(0x13)),
    ]));

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
    assert!(!report.partial);
    assert_eq!(report.rebaked_layers, 0);

    assert_eq!(world.textures.fetched.lock().unwrap().len(), 0);
    assert_eq!(world.baker.layers_started.load(Ordering::SeqCst), 0);
    assert_eq!(world.uploader.uploads.load(Ordering::SeqCst), 0);

    // Eyes and Skirt are not worn: the query carries only four layers
    let queries = world.link.sent_queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].wearable_data.len(), 4);
    assert!(queries[0]
        .wearable_data
        .iter()
        .all(|b| b.texture_index != BakeType::Skirt as u8
            && b.texture_index != BakeType::Eyes as u8));

    let msg = last_appearance(&world.link);
    assert_eq!(msg.serial_num, 1);
    assert_eq!(msg.visual_params.len(), PUBLISHED_PARAM_COUNT);
    assert_eq!(msg.wearable_data.len(), 6);

    let entry = TextureEntry::decode(&msg.texture_entry).unwrap();
    assert_eq!(entry.face(AvatarTextureIndex::HeadBaked), tex_id(0x10));
    assert_eq!(entry.face(AvatarTextureIndex::UpperBaked), tex_id(0x11));
    assert_eq!(entry.face(AvatarTextureIndex::LowerBaked), tex_id(0x12));
    assert_eq!(entry.face(AvatarTextureIndex::HairBaked), tex_id(0x13));
    assert!(!entry.has_override(AvatarTextureIndex::EyesBaked));

    // The published fingerprints match the cache query bit for bit
    for block in &queries[0].wearable_data {
        let layer = BakeType::from_u8(block.texture_index).unwrap();
        assert_eq!(wearable_block_of(&msg, layer), block.id);
    }
    // Unworn layers publish a zero fingerprint
    assert!(wearable_block_of(&msg, BakeType::Skirt).is_nil());
    assert!(wearable_block_of(&msg, BakeType::Eyes).is_nil());
}

/// Scenario (b): first run, complete cache miss. Sources are fetched,
/// four layers bake and upload, and the baked faces carry the upload ids.
/// The body size comes out of the shape params to six decimals.
#[tokio::test]
async fn first_run_complete_cache_miss() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);
    // cache_reply stays None: every layer answers nil

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
    assert!(!report.partial);
    assert_eq!(report.rebaked_layers, 4);

    // six distinct source textures across skin, hair, shirt, pants
    let fetched = world.textures.fetched.lock().unwrap();
    assert_eq!(fetched.len(), 6);
    drop(fetched);
    assert_eq!(world.baker.layers_started.load(Ordering::SeqCst), 4);
    assert_eq!(world.uploader.uploads.load(Ordering::SeqCst), 4);

    let msg = last_appearance(&world.link);
    let entry = TextureEntry::decode(&msg.texture_entry).unwrap();
    for layer in [BakeType::Head, BakeType::UpperBody, BakeType::LowerBody, BakeType::Hair] {
        let baked = entry.face(layer.baked_index());
        assert!(entry.has_override(layer.baked_index()));
        assert!(!baked.is_nil());
    }
    assert!(!entry.has_override(AvatarTextureIndex::SkirtBaked));

    // Scenario (f): derived body height
    assert!((msg.size.z - 1.973_535).abs() < 1e-5, "height {}", msg.size.z);
    assert_eq!(msg.size.x, 0.45);
    assert_eq!(msg.size.y, 0.60);
}

/// Scenario (c): a second invocation while a run is active returns
/// immediately and only one appearance is published.
#[tokio::test]
async fn concurrent_run_is_rejected() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);
    *world.link.request_delay.lock().unwrap() = Some(Duration::from_millis(100));

    let manager = world.manager.clone();
    let first = tokio::spawn(async move { manager.send_appearance(false).await });
    sleep(Duration::from_millis(30)).await;

    assert!(world.manager.is_busy());
    assert!(!world.manager.request_set_appearance(false));
    assert!(matches!(
        world.manager.send_appearance(false).await,
        Err(AppearanceError::PipelineBusy)
    ));

    let report = first.await.unwrap().unwrap();
    assert_eq!(report.serial_num, 1);
    assert!(!world.manager.is_busy());
    assert_eq!(world.link.sent_appearances.lock().unwrap().len(), 1);
}

/// Scenario (d): the skin asset fails to decode. The run completes
/// partial and every skin-sourced param falls back to its catalog
/// default.
#[tokio::test]
async fn skin_decode_failure_degrades_run() {
    let (blocks, mut assets) = basic_outfit();
    assets.insert(
        asset_id(WearableType::Skin),
        Bytes::from_static(b"\x00\x01garbage, not a wearable"),
    );
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
    assert!(report.partial);

    let msg = last_appearance(&world.link);
    let pigment = visual_params::find_param(111).unwrap();
    let index = visual_params::catalog()
        .iter()
        .filter(|p| p.group == 0)
        .position(|p| p.id == 111)
        .unwrap();
    assert_eq!(
        msg.visual_params[index],
        visual_params::quantize(pigment.default, pigment.min, pigment.max)
    );
}

/// Scenario (e): skirt removed between runs. The registry drops the
/// slot, the would-be cache query shrinks to five layers, and the skirt
/// wearable-data block publishes a zero fingerprint.
#[tokio::test]
async fn skirt_removed_between_runs() {
    let (mut blocks, mut assets) = basic_outfit();
    blocks.push(block_for(WearableType::Eyes));
    blocks.push(block_for(WearableType::Skirt));
    assets.insert(
        asset_id(WearableType::Eyes),
        wearable_text(
            3,
            "Test Eyes",
            &[(98, 0.4)],
            &[(AvatarTextureIndex::EyesIris as u8, tex_id(7))],
        ),
    );
    assets.insert(
        asset_id(WearableType::Skirt),
        wearable_text(
            12,
            "Test Skirt",
            &[(858, 0.4)],
            &[(AvatarTextureIndex::Skirt as u8, tex_id(8))],
        ),
    );
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks.clone());

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
    assert_eq!(report.rebaked_layers, 6);
    {
        let queries = world.link.sent_queries.lock().unwrap();
        assert_eq!(queries[0].wearable_data.len(), 6);
    }
    assert!(!wearable_block_of(&last_appearance(&world.link), BakeType::Skirt).is_nil());

    // Server clears the skirt slot
    blocks.pop();
    world.manager.handle_wearables_update(WearablesUpdate {
        agent_data: AgentData {
            agent_id: world.manager.agent_id(),
            session_id: Uuid::from_u128(0x5e55),
        },
        serial_num: 2,
        wearable_data: blocks,
    });
    assert!(world
        .manager
        .wearables()
        .asset_id(WearableType::Skirt)
        .is_nil());

    // The fingerprint set a fresh query would carry has five layers now
    let would_query = cache::build_query_blocks(&world.manager.wearables().snapshot());
    assert_eq!(would_query.len(), 5);
    assert!(would_query
        .iter()
        .all(|b| b.texture_index != BakeType::Skirt as u8));

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 2);
    let msg = last_appearance(&world.link);
    assert!(wearable_block_of(&msg, BakeType::Skirt).is_nil());
    assert_eq!(msg.wearable_data.len(), 6);

    // Only the first run ever queried the cache or enumerated wearables
    assert_eq!(world.link.sent_queries.lock().unwrap().len(), 1);
    assert_eq!(world.link.wearables_requests.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Invariants and boundaries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serials_strictly_increase_across_runs() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);

    let mut last = 0;
    for _ in 0..3 {
        let report = world.manager.send_appearance(false).await.unwrap();
        assert!(report.serial_num > last);
        last = report.serial_num;
    }
    assert_eq!(last, 3);
}

#[tokio::test]
async fn force_rebake_skips_cache_and_rebakes_everything() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);
    *world.link.cache_reply.lock().unwrap() = Some(HashMap::from([
        (BakeType::Head as u8, tex_id(0x10)),
        (BakeType::UpperBody as u8, tex_id(0x11)),
        (BakeType::LowerBody as u8, tex_id(0x12)),
        (BakeType::Hair as u8, tex_id(0x13)),
    ]));

    let first = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(first.rebaked_layers, 0);

    let forced = world.manager.send_appearance(true).await.unwrap();
    assert_eq!(forced.serial_num, 2);
    assert_eq!(forced.rebaked_layers, 4);
    assert_eq!(world.uploader.uploads.load(Ordering::SeqCst), 4);
    // force never queries the cache again
    assert_eq!(world.link.sent_queries.lock().unwrap().len(), 1);

    // the forced publish still agrees with the original fingerprints
    let queries = world.link.sent_queries.lock().unwrap();
    let msg = last_appearance(&world.link);
    for block in &queries[0].wearable_data {
        let layer = BakeType::from_u8(block.texture_index).unwrap();
        assert_eq!(wearable_block_of(&msg, layer), block.id);
    }
}

#[tokio::test]
async fn empty_wearable_set_suppresses_cache_query() {
    let world = build_world(HashMap::new());
    *world.link.wearables_reply.lock().unwrap() = Some(Vec::new());

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
    assert_eq!(report.rebaked_layers, 0);
    assert!(world.link.sent_queries.lock().unwrap().is_empty());

    let msg = last_appearance(&world.link);
    assert_eq!(msg.visual_params.len(), PUBLISHED_PARAM_COUNT);
    for layer in BakeType::ALL {
        assert!(wearable_block_of(&msg, layer).is_nil());
    }
}

#[tokio::test]
async fn wearables_enumeration_timeout_aborts_run() {
    let world = build_world(HashMap::new());
    // no wearables_reply configured: the barrier never trips

    let result = world.manager.send_appearance(false).await;
    assert!(matches!(result, Err(AppearanceError::WearablesEnumTimeout)));
    assert!(!world.manager.is_busy());
    assert!(world.link.sent_appearances.lock().unwrap().is_empty());

    // the run-flag was released, so a later attempt proceeds
    *world.link.wearables_reply.lock().unwrap() = Some(Vec::new());
    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
}

#[tokio::test]
async fn upload_failure_publishes_partial_and_retries_next_run() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    *world.link.wearables_reply.lock().unwrap() = Some(blocks);
    world.uploader.fail.store(true, Ordering::SeqCst);

    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 1);
    assert!(report.partial);

    // the failed faces stay at zero: no overrides published for them
    let msg = last_appearance(&world.link);
    let entry = TextureEntry::decode(&msg.texture_entry).unwrap();
    assert!(!entry.has_override(AvatarTextureIndex::HeadBaked));

    // the next run re-attempts the same four layers
    world.uploader.fail.store(false, Ordering::SeqCst);
    let report = world.manager.send_appearance(false).await.unwrap();
    assert_eq!(report.serial_num, 2);
    assert!(!report.partial);
    assert_eq!(report.rebaked_layers, 4);
    let entry = TextureEntry::decode(&last_appearance(&world.link).texture_entry).unwrap();
    assert!(entry.has_override(AvatarTextureIndex::HeadBaked));
}

#[tokio::test]
async fn duplicate_wearables_update_fires_no_event() {
    let (blocks, assets) = basic_outfit();
    let world = build_world(assets);
    let mut events = world.manager.subscribe();

    let update = WearablesUpdate {
        agent_data: AgentData {
            agent_id: world.manager.agent_id(),
            session_id: Uuid::from_u128(0x5e55),
        },
        serial_num: 1,
        wearable_data: blocks,
    };
    world.manager.handle_wearables_update(update.clone());
    assert!(matches!(
        events.try_recv(),
        Ok(slv_appearance::appearance::AppearanceEvent::WearablesReceived(_))
    ));

    world.manager.handle_wearables_update(update);
    assert!(events.try_recv().is_err());
    assert_eq!(world.manager.wearables().count(), 5);
}

#[tokio::test]
async fn wear_outfit_resolves_folder_only() {
    let world = build_world(HashMap::new());
    world.manager.wear_outfit("/Clothing/Formal").await.unwrap();
    assert!(matches!(
        world.manager.wear_outfit("").await,
        Err(AppearanceError::InventoryPathNotFound { .. })
    ));
}
