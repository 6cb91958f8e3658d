// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_provider exposes a generic sprite/text drawing interface over an
//! immediate-mode graphics device (Direct3D 9 style).
//!
//! Callers create sprite or text collections, get back opaque ids, and fill
//! the collections with named `SpriteInfo` / `TextInfo` descriptors. Each
//! frame they bracket draw calls with begin_scene / end_scene, clear the
//! backbuffer and flip. All rasterization, font rendering and device
//! management stays inside the device behind the `Device` trait.
//!
//! The crate is single threaded: every operation runs synchronously on the
//! caller's thread, and the provider owns its device, registries and
//! collections outright.

/// provider configuration, loaded from TOML
pub mod config;

/// error type shared by all operations
pub mod error;

/// log
pub mod log;

/// Render module.
/// device: device interface (plus a headless recording device).
/// info: sprite/text descriptors and their device encoding.
/// collection: named drawables of one kind.
/// registry: opaque ids for live collections.
/// provider: GraphicsProvider and its device-backed implementation.
pub mod render;

/// geometry helpers: PointF32, Rect
pub mod util;

pub use config::{ProviderConfig, SpriteOrder};
pub use error::{ProviderError, ProviderResult};
