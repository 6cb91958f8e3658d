// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! GraphicsProvider is the generic sprite/text drawing interface, and
//! DeviceProvider implements it on top of any `Device`.
//!
//! # Example
//!
//! ```
//! use pixel_provider::{
//!     config::ProviderConfig,
//!     render::{
//!         device::headless::HeadlessDevice,
//!         info::{SpriteInfo, TextInfo},
//!         provider::{DeviceProvider, GraphicsProvider},
//!     },
//! };
//!
//! let mut p = DeviceProvider::new(HeadlessDevice::new(), ProviderConfig::default());
//! let sprites = p.create_sprite_collection().unwrap();
//! p.add_sprite(sprites, "hero", &SpriteInfo::new("hero.png").with_z_depth(5)).unwrap();
//! let texts = p.create_text_collection().unwrap();
//! p.add_text(texts, "title", &TextInfo::new("Hello")).unwrap();
//!
//! p.begin_scene().unwrap();
//! p.clear_backbuffer().unwrap();
//! p.draw_sprite_collection(sprites).unwrap();
//! p.draw_text_collection(texts).unwrap();
//! p.end_scene().unwrap();
//! p.flip().unwrap();
//! ```

use crate::{
    config::ProviderConfig,
    error::{ProviderError, ProviderResult},
    render::{
        device::{device_error, pack_argb, Device},
        info::{SpriteInfo, SpriteKind, TextInfo, TextKind},
        registry::{HandleRegistry, SpriteCollectionId, TextCollectionId},
    },
};
use log::{debug, info};

/// Generic sprite/text drawing interface
pub trait GraphicsProvider {
    // backbuffer management
    fn begin_scene(&mut self) -> ProviderResult<()>;
    fn end_scene(&mut self) -> ProviderResult<()>;
    fn clear_backbuffer(&mut self) -> ProviderResult<()>;
    fn flip(&mut self) -> ProviderResult<()>;

    // sprite management
    fn create_sprite_collection(&mut self) -> ProviderResult<SpriteCollectionId>;
    fn destroy_sprite_collection(&mut self, id: SpriteCollectionId) -> ProviderResult<()>;
    fn add_sprite(&mut self, id: SpriteCollectionId, name: &str, info: &SpriteInfo)
        -> ProviderResult<()>;
    fn remove_sprite(&mut self, id: SpriteCollectionId, name: &str) -> ProviderResult<()>;
    fn set_sprite(&mut self, id: SpriteCollectionId, name: &str, info: &SpriteInfo)
        -> ProviderResult<()>;
    fn get_sprite(&self, id: SpriteCollectionId, name: &str) -> ProviderResult<SpriteInfo>;
    fn draw_sprite_collection(&mut self, id: SpriteCollectionId) -> ProviderResult<()>;
    fn start_sprite_batch(&mut self) -> ProviderResult<()>;
    fn end_sprite_batch(&mut self) -> ProviderResult<()>;

    // text management
    fn create_text_collection(&mut self) -> ProviderResult<TextCollectionId>;
    fn destroy_text_collection(&mut self, id: TextCollectionId) -> ProviderResult<()>;
    fn add_text(&mut self, id: TextCollectionId, name: &str, info: &TextInfo) -> ProviderResult<()>;
    fn remove_text(&mut self, id: TextCollectionId, name: &str) -> ProviderResult<()>;
    fn set_text(&mut self, id: TextCollectionId, name: &str, info: &TextInfo) -> ProviderResult<()>;
    fn get_text(&self, id: TextCollectionId, name: &str) -> ProviderResult<TextInfo>;
    fn draw_text_collection(&mut self, id: TextCollectionId) -> ProviderResult<()>;
}

/// Provider over an explicitly owned device
pub struct DeviceProvider<D: Device> {
    device: D,
    config: ProviderConfig,
    sprites: HandleRegistry<SpriteKind>,
    texts: HandleRegistry<TextKind>,
    in_batch: bool,
}

impl<D: Device> DeviceProvider<D> {
    pub fn new(device: D, config: ProviderConfig) -> Self {
        info!(
            "provider created, clear_color={:?} sprite_order={:?}",
            config.clear_color, config.sprite_order
        );
        Self {
            device,
            sprites: HandleRegistry::with_order(config.sprite_order),
            config,
            texts: HandleRegistry::new(),
            in_batch: false,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn in_sprite_batch(&self) -> bool {
        self.in_batch
    }

    pub fn sprite_collection_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn text_collection_count(&self) -> usize {
        self.texts.len()
    }

    /// Sprite names in the order draw_sprite_collection submits them
    pub fn sprite_draw_order(&mut self, id: SpriteCollectionId) -> ProviderResult<Vec<String>> {
        let c = self.sprites.get_mut(id)?;
        Ok(c.draw_order().into_iter().map(String::from).collect())
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: Device> GraphicsProvider for DeviceProvider<D> {
    fn begin_scene(&mut self) -> ProviderResult<()> {
        self.device.begin_scene().map_err(device_error)
    }

    fn end_scene(&mut self) -> ProviderResult<()> {
        self.device.end_scene().map_err(device_error)
    }

    fn clear_backbuffer(&mut self) -> ProviderResult<()> {
        self.device
            .clear(pack_argb(self.config.clear_color))
            .map_err(device_error)
    }

    fn flip(&mut self) -> ProviderResult<()> {
        self.device.present().map_err(device_error)
    }

    fn create_sprite_collection(&mut self) -> ProviderResult<SpriteCollectionId> {
        self.sprites.create()
    }

    fn destroy_sprite_collection(&mut self, id: SpriteCollectionId) -> ProviderResult<()> {
        self.sprites.destroy(id)
    }

    fn add_sprite(
        &mut self,
        id: SpriteCollectionId,
        name: &str,
        info: &SpriteInfo,
    ) -> ProviderResult<()> {
        self.sprites.get_mut(id)?.add(name, info)
    }

    fn remove_sprite(&mut self, id: SpriteCollectionId, name: &str) -> ProviderResult<()> {
        self.sprites.get_mut(id)?.remove(name)
    }

    fn set_sprite(
        &mut self,
        id: SpriteCollectionId,
        name: &str,
        info: &SpriteInfo,
    ) -> ProviderResult<()> {
        self.sprites.get_mut(id)?.set(name, info)
    }

    fn get_sprite(&self, id: SpriteCollectionId, name: &str) -> ProviderResult<SpriteInfo> {
        self.sprites.get(id)?.get(name)
    }

    /// Outside of an explicit batch the draw is wrapped in its own batch.
    fn draw_sprite_collection(&mut self, id: SpriteCollectionId) -> ProviderResult<()> {
        let collection = self.sprites.get_mut(id)?;
        if self.in_batch {
            return collection.draw(&mut self.device);
        }
        self.device.begin_batch().map_err(device_error)?;
        let drawn = collection.draw(&mut self.device);
        let ended = self.device.end_batch().map_err(device_error);
        drawn.and(ended)
    }

    fn start_sprite_batch(&mut self) -> ProviderResult<()> {
        if self.in_batch {
            return Err(ProviderError::BatchAlreadyStarted);
        }
        self.device.begin_batch().map_err(device_error)?;
        self.in_batch = true;
        debug!("sprite batch started");
        Ok(())
    }

    fn end_sprite_batch(&mut self) -> ProviderResult<()> {
        if !self.in_batch {
            return Err(ProviderError::NoActiveBatch);
        }
        self.in_batch = false;
        debug!("sprite batch ended");
        self.device.end_batch().map_err(device_error)
    }

    fn create_text_collection(&mut self) -> ProviderResult<TextCollectionId> {
        self.texts.create()
    }

    fn destroy_text_collection(&mut self, id: TextCollectionId) -> ProviderResult<()> {
        self.texts.destroy(id)
    }

    fn add_text(&mut self, id: TextCollectionId, name: &str, info: &TextInfo) -> ProviderResult<()> {
        self.texts.get_mut(id)?.add(name, info)
    }

    fn remove_text(&mut self, id: TextCollectionId, name: &str) -> ProviderResult<()> {
        self.texts.get_mut(id)?.remove(name)
    }

    fn set_text(&mut self, id: TextCollectionId, name: &str, info: &TextInfo) -> ProviderResult<()> {
        self.texts.get_mut(id)?.set(name, info)
    }

    fn get_text(&self, id: TextCollectionId, name: &str) -> ProviderResult<TextInfo> {
        self.texts.get(id)?.get(name)
    }

    fn draw_text_collection(&mut self, id: TextCollectionId) -> ProviderResult<()> {
        self.texts.get_mut(id)?.draw(&mut self.device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::device::headless::{DeviceCall, HeadlessDevice};

    fn provider() -> DeviceProvider<HeadlessDevice> {
        DeviceProvider::new(HeadlessDevice::new(), ProviderConfig::default())
    }

    #[test]
    fn frame_calls_forward_in_order() {
        let mut p = provider();
        p.begin_scene().unwrap();
        p.clear_backbuffer().unwrap();
        p.end_scene().unwrap();
        p.flip().unwrap();
        assert_eq!(
            p.device().calls,
            vec![
                DeviceCall::BeginScene,
                DeviceCall::Clear { color: 0xFFFF_FFFF },
                DeviceCall::EndScene,
                DeviceCall::Present,
            ]
        );
    }

    #[test]
    fn out_of_order_frame_calls_are_not_checked() {
        let mut p = provider();
        p.end_scene().unwrap();
        p.end_scene().unwrap();
        assert_eq!(p.device().calls, vec![DeviceCall::EndScene, DeviceCall::EndScene]);
    }

    #[test]
    fn clear_uses_configured_color() {
        let cfg = ProviderConfig {
            clear_color: [255, 0, 0, 0],
            ..Default::default()
        };
        let mut p = DeviceProvider::new(HeadlessDevice::new(), cfg);
        p.clear_backbuffer().unwrap();
        assert_eq!(p.device().calls, vec![DeviceCall::Clear { color: 0xFF00_0000 }]);
    }

    #[test]
    fn device_errors_propagate() {
        let mut p = provider();
        p.device_mut().fail_next("device lost");
        assert_eq!(p.flip(), Err(ProviderError::Device("device lost".to_string())));
    }

    #[test]
    fn implicit_batch_wraps_each_draw() {
        let mut p = provider();
        let id = p.create_sprite_collection().unwrap();
        p.add_sprite(id, "a", &SpriteInfo::new("a.png")).unwrap();
        p.draw_sprite_collection(id).unwrap();
        p.draw_sprite_collection(id).unwrap();
        assert_eq!(
            p.device().calls,
            vec![
                DeviceCall::BeginBatch,
                DeviceCall::DrawSprite((&SpriteInfo::new("a.png")).into()),
                DeviceCall::EndBatch,
                DeviceCall::BeginBatch,
                DeviceCall::DrawSprite((&SpriteInfo::new("a.png")).into()),
                DeviceCall::EndBatch,
            ]
        );
    }

    #[test]
    fn explicit_batch_spans_several_draws() {
        let mut p = provider();
        let a = p.create_sprite_collection().unwrap();
        let b = p.create_sprite_collection().unwrap();
        p.add_sprite(a, "a", &SpriteInfo::new("a.png")).unwrap();
        p.add_sprite(b, "b", &SpriteInfo::new("b.png")).unwrap();

        p.start_sprite_batch().unwrap();
        assert!(p.in_sprite_batch());
        p.draw_sprite_collection(a).unwrap();
        p.draw_sprite_collection(b).unwrap();
        p.end_sprite_batch().unwrap();

        let calls = &p.device().calls;
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], DeviceCall::BeginBatch);
        assert_eq!(calls[3], DeviceCall::EndBatch);
        assert_eq!(p.device().drawn_sprites(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn batch_misuse_is_rejected() {
        let mut p = provider();
        assert_eq!(p.end_sprite_batch(), Err(ProviderError::NoActiveBatch));
        p.start_sprite_batch().unwrap();
        assert_eq!(p.start_sprite_batch(), Err(ProviderError::BatchAlreadyStarted));
        p.end_sprite_batch().unwrap();
        assert!(!p.in_sprite_batch());
    }

    #[test]
    fn invalid_handle_emits_no_device_calls() {
        let mut p = provider();
        let id = p.create_sprite_collection().unwrap();
        p.destroy_sprite_collection(id).unwrap();
        assert_eq!(
            p.draw_sprite_collection(id),
            Err(ProviderError::InvalidHandle(id.raw()))
        );
        assert!(p.device().calls.is_empty());
    }

    #[test]
    fn sprite_and_text_registries_are_independent() {
        let mut p = provider();
        let s = p.create_sprite_collection().unwrap();
        let t = p.create_text_collection().unwrap();
        p.destroy_text_collection(t).unwrap();
        assert_eq!(p.sprite_collection_count(), 1);
        assert_eq!(p.text_collection_count(), 0);
        assert!(p.add_sprite(s, "x", &SpriteInfo::new("x.png")).is_ok());
    }
}
