// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! ## Submodules
//! - `device`: device interface the provider draws through, plus a headless device
//! - `info`: sprite/text descriptors and their translation to the device encoding
//! - `collection`: named drawables of one kind, drawn in z order
//! - `registry`: opaque collection ids and the collections they own
//! - `provider`: the GraphicsProvider interface and its device-backed implementation

pub mod collection;
pub mod device;
pub mod info;
pub mod provider;
pub mod registry;

pub use collection::{Collection, SpriteCollection, TextCollection};
pub use device::{Device, DeviceJustification, DeviceSpriteInfo, DeviceTextInfo};
pub use info::{DrawableKind, Justification, SpriteInfo, SpriteKind, TextInfo, TextKind};
pub use provider::{DeviceProvider, GraphicsProvider};
pub use registry::{CollectionId, HandleRegistry, SpriteCollectionId, TextCollectionId};
