// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use crate::render::device::{Device, DeviceSpriteInfo, DeviceTextInfo};
use log::debug;
use serde::Serialize;

/// One recorded device call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum DeviceCall {
    BeginScene,
    EndScene,
    Clear { color: u32 },
    Present,
    BeginBatch,
    EndBatch,
    DrawSprite(DeviceSpriteInfo),
    DrawText(DeviceTextInfo),
}

/// A device with no output surface. It accepts every call and appends it
/// to `calls`, so a frame can be inspected or dumped afterwards.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    pub calls: Vec<DeviceCall>,
    fail_next: Option<String>,
}

impl HeadlessDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `msg` instead of being recorded
    pub fn fail_next(&mut self, msg: &str) {
        self.fail_next = Some(msg.to_string());
    }

    /// Image files of the recorded sprite draws, in submission order
    pub fn drawn_sprites(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::DrawSprite(s) => Some(s.image_file.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Contents of the recorded text draws, in submission order
    pub fn drawn_texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::DrawText(t) => Some(t.contents.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: DeviceCall) -> Result<(), String> {
        if let Some(msg) = self.fail_next.take() {
            return Err(msg);
        }
        debug!("headless device: {:?}", call);
        self.calls.push(call);
        Ok(())
    }
}

impl Device for HeadlessDevice {
    fn begin_scene(&mut self) -> Result<(), String> {
        self.record(DeviceCall::BeginScene)
    }

    fn end_scene(&mut self) -> Result<(), String> {
        self.record(DeviceCall::EndScene)
    }

    fn clear(&mut self, color: u32) -> Result<(), String> {
        self.record(DeviceCall::Clear { color })
    }

    fn present(&mut self) -> Result<(), String> {
        self.record(DeviceCall::Present)
    }

    fn begin_batch(&mut self) -> Result<(), String> {
        self.record(DeviceCall::BeginBatch)
    }

    fn end_batch(&mut self) -> Result<(), String> {
        self.record(DeviceCall::EndBatch)
    }

    fn draw_sprite(&mut self, sprite: &DeviceSpriteInfo) -> Result<(), String> {
        self.record(DeviceCall::DrawSprite(sprite.clone()))
    }

    fn draw_text(&mut self, text: &DeviceTextInfo) -> Result<(), String> {
        self.record(DeviceCall::DrawText(text.clone()))
    }
}
