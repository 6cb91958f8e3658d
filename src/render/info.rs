// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Public drawable descriptors and their translation to the device encoding.
//!
//! `SpriteInfo` and `TextInfo` are what callers build and get back. Each
//! field has exactly one counterpart in `DeviceSpriteInfo` / `DeviceTextInfo`,
//! and converting there and back yields the original value.
//!
//! `DrawableKind` ties a descriptor to its device encoding and to the device
//! call that submits it, so one `Collection<K>` serves both sprites and text.

use crate::{
    render::device::{
        pack_argb, unpack_argb, Device, DeviceJustification, DeviceSpriteInfo, DeviceTextInfo,
    },
    util::{PointF32, Rect},
};
use serde::{Deserialize, Serialize};

/// Sprite descriptor
///
/// - `image_file`: image the sprite is cut from
/// - `center`: rotation center, relative to the sprite origin
/// - `rotation`: rotation angle in radians
/// - `alpha`: 0 transparent .. 255 opaque
/// - `subrect`: source region inside the image
/// - `z_depth`: ordering key when the collection is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
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

impl Default for SpriteInfo {
    fn default() -> Self {
        Self {
            image_file: String::new(),
            position: PointF32::default(),
            center: PointF32::default(),
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: 255,
            subrect: Rect::default(),
            z_depth: 0,
        }
    }
}

impl SpriteInfo {
    pub fn new(image_file: &str) -> Self {
        Self {
            image_file: image_file.to_string(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = PointF32::new(x, y);
        self
    }

    pub fn with_subrect(mut self, subrect: Rect) -> Self {
        self.subrect = subrect;
        self
    }

    pub fn with_z_depth(mut self, z_depth: i32) -> Self {
        self.z_depth = z_depth;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
}

/// Text descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInfo {
    pub contents: String,
    pub position: PointF32,
    /// 1(small)-10(large)
    pub font_size: u32,
    pub justification: Justification,
    /// [0]=alpha, [1]=red, [2]=green, [3]=blue
    pub argb: [u8; 4],
}

impl Default for TextInfo {
    fn default() -> Self {
        Self {
            contents: String::new(),
            position: PointF32::default(),
            font_size: 5,
            justification: Justification::Left,
            argb: [255, 0, 0, 0],
        }
    }
}

impl TextInfo {
    pub fn new(contents: &str) -> Self {
        Self {
            contents: contents.to_string(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = PointF32::new(x, y);
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn with_argb(mut self, argb: [u8; 4]) -> Self {
        self.argb = argb;
        self
    }
}

impl From<&SpriteInfo> for DeviceSpriteInfo {
    fn from(info: &SpriteInfo) -> Self {
        Self {
            image_file: info.image_file.clone(),
            position: info.position,
            center: info.center,
            rotation: info.rotation,
            scale_x: info.scale_x,
            scale_y: info.scale_y,
            alpha: info.alpha,
            subrect: info.subrect,
            z_depth: info.z_depth,
        }
    }
}

impl From<&DeviceSpriteInfo> for SpriteInfo {
    fn from(info: &DeviceSpriteInfo) -> Self {
        Self {
            image_file: info.image_file.clone(),
            position: info.position,
            center: info.center,
            rotation: info.rotation,
            scale_x: info.scale_x,
            scale_y: info.scale_y,
            alpha: info.alpha,
            subrect: info.subrect,
            z_depth: info.z_depth,
        }
    }
}

impl From<Justification> for DeviceJustification {
    fn from(j: Justification) -> Self {
        match j {
            Justification::Left => DeviceJustification::Left,
            Justification::Center => DeviceJustification::Center,
            Justification::Right => DeviceJustification::Right,
        }
    }
}

impl From<DeviceJustification> for Justification {
    fn from(j: DeviceJustification) -> Self {
        match j {
            DeviceJustification::Left => Justification::Left,
            DeviceJustification::Center => Justification::Center,
            DeviceJustification::Right => Justification::Right,
        }
    }
}

impl From<&TextInfo> for DeviceTextInfo {
    fn from(info: &TextInfo) -> Self {
        Self {
            contents: info.contents.clone(),
            position: info.position,
            font_size: info.font_size,
            justification: info.justification.into(),
            color: pack_argb(info.argb),
        }
    }
}

impl From<&DeviceTextInfo> for TextInfo {
    fn from(info: &DeviceTextInfo) -> Self {
        Self {
            contents: info.contents.clone(),
            position: info.position,
            font_size: info.font_size,
            justification: info.justification.into(),
            argb: unpack_argb(info.color),
        }
    }
}

/// A kind of drawable a `Collection` can hold.
///
/// Kinds are uninhabited marker types; only their associated items are used.
pub trait DrawableKind {
    /// Public descriptor
    type Info: Clone;
    /// Device encoding stored in the collection
    type Encoded: Clone;

    fn construct(info: &Self::Info) -> Self::Encoded;

    fn extract(encoded: &Self::Encoded) -> Self::Info;

    /// Sort key used when drawing, equal keys keep insertion order
    fn render_weight(encoded: &Self::Encoded) -> i32;

    fn submit<D: Device + ?Sized>(device: &mut D, encoded: &Self::Encoded) -> Result<(), String>;
}

pub enum SpriteKind {}

pub enum TextKind {}

impl DrawableKind for SpriteKind {
    type Info = SpriteInfo;
    type Encoded = DeviceSpriteInfo;

    fn construct(info: &SpriteInfo) -> DeviceSpriteInfo {
        info.into()
    }

    fn extract(encoded: &DeviceSpriteInfo) -> SpriteInfo {
        encoded.into()
    }

    fn render_weight(encoded: &DeviceSpriteInfo) -> i32 {
        encoded.z_depth
    }

    fn submit<D: Device + ?Sized>(device: &mut D, encoded: &DeviceSpriteInfo) -> Result<(), String> {
        device.draw_sprite(encoded)
    }
}

impl DrawableKind for TextKind {
    type Info = TextInfo;
    type Encoded = DeviceTextInfo;

    fn construct(info: &TextInfo) -> DeviceTextInfo {
        info.into()
    }

    fn extract(encoded: &DeviceTextInfo) -> TextInfo {
        encoded.into()
    }

    // text is drawn in insertion order
    fn render_weight(_encoded: &DeviceTextInfo) -> i32 {
        0
    }

    fn submit<D: Device + ?Sized>(device: &mut D, encoded: &DeviceTextInfo) -> Result<(), String> {
        device.draw_text(encoded)
    }
}
