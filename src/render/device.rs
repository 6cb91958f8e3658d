// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Device Module
//!
//! The provider never rasterizes anything itself. It talks to an
//! immediate-mode graphics device through the narrow `Device` trait below,
//! the same way the engine's adapters hide SDL, winit or a terminal behind
//! one interface.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            GraphicsProvider                  │
//! │  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │ Sprite registry  │  │  Text registry   │  │
//! │  └──────────────────┘  └──────────────────┘  │
//! │           │ SpriteInfo/TextInfo translated   │
//! │           ▼                                  │
//! │  DeviceSpriteInfo / DeviceTextInfo           │
//! └──────────────────────────────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────────────────────────────┐
//! │        Device (D3D9-style, headless...)      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The `Device*` structs are the device-side encoding of the public
//! descriptors. Device implementors read them; provider callers never see
//! them.

use crate::{
    error::ProviderError,
    util::{PointF32, Rect},
};
use log::warn;
use serde::Serialize;

/// Headless device that records calls instead of drawing
pub mod headless;

/// Device-side sprite encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSpriteInfo {
    pub image_file: String,
    pub position: PointF32,
    pub center: PointF32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: u8,
    pub subrect: Rect,
    pub z_depth: i32,
}

/// Text alignment as understood by the device's text routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceJustification {
    Left,
    Center,
    Right,
}

/// Device-side text encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceTextInfo {
    pub contents: String,
    pub position: PointF32,
    /// 1(small)-10(large)
    pub font_size: u32,
    pub justification: DeviceJustification,
    /// packed 0xAARRGGBB
    pub color: u32,
}

/// Pack [alpha, red, green, blue] into a 0xAARRGGBB word
pub fn pack_argb(argb: [u8; 4]) -> u32 {
    u32::from_be_bytes(argb)
}

/// Unpack a 0xAARRGGBB word into [alpha, red, green, blue]
pub fn unpack_argb(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}

/// The capabilities the provider needs from a graphics device.
///
/// Every call returns the device's own error text on failure. The provider
/// forwards frame calls unconditionally, so a device that cares about call
/// order (end_scene without begin_scene, ...) must reject it itself.
pub trait Device {
    fn begin_scene(&mut self) -> Result<(), String>;

    fn end_scene(&mut self) -> Result<(), String>;

    /// Clear the render target to a packed 0xAARRGGBB color
    fn clear(&mut self, color: u32) -> Result<(), String>;

    /// Present the finished frame
    fn present(&mut self) -> Result<(), String>;

    /// Open a sprite batch, default is a no-op for devices without batching
    fn begin_batch(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn end_batch(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// Draw a positioned, rotated, scaled, alpha-blended image region
    fn draw_sprite(&mut self, sprite: &DeviceSpriteInfo) -> Result<(), String>;

    /// Draw a positioned, colored, font-sized, justified text run
    fn draw_text(&mut self, text: &DeviceTextInfo) -> Result<(), String>;
}

pub(crate) fn device_error(msg: String) -> ProviderError {
    warn!("device call failed: {}", msg);
    ProviderError::Device(msg)
}
