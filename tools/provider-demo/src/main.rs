// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! provider-demo builds a small scene on a headless device, renders one
//! frame and prints the device calls as JSON.
//!
//! $ provider-demo --config provider.toml

use clap::Parser;
use log::info;
use pixel_provider::{
    config::ProviderConfig,
    log::init_log_from_config,
    render::{
        device::headless::HeadlessDevice,
        info::{Justification, SpriteInfo, TextInfo},
        provider::{DeviceProvider, GraphicsProvider},
    },
    util::Rect,
};
use std::error::Error;

#[derive(Parser)]
#[command(name = "provider-demo", about = "Render one headless frame and dump device calls")]
struct Args {
    /// TOML config file, defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Skip log file setup
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => ProviderConfig::load(path)?,
        None => ProviderConfig::default(),
    };
    if !args.no_log {
        init_log_from_config(&cfg)?;
    }
    info!("provider-demo start...");

    let mut p = DeviceProvider::new(HeadlessDevice::new(), cfg);

    let sprites = p.create_sprite_collection()?;
    p.add_sprite(
        sprites,
        "hero",
        &SpriteInfo::new("assets/hero.png")
            .with_position(64.0, 48.0)
            .with_subrect(Rect::new(0, 0, 16, 16))
            .with_z_depth(5),
    )?;
    p.add_sprite(
        sprites,
        "bg",
        &SpriteInfo::new("assets/back.png")
            .with_subrect(Rect::new(0, 0, 320, 200))
            .with_z_depth(1),
    )?;

    let texts = p.create_text_collection()?;
    p.add_text(
        texts,
        "title",
        &TextInfo::new("PIXEL PROVIDER")
            .with_position(160.0, 8.0)
            .with_font_size(8)
            .with_justification(Justification::Center)
            .with_argb([255, 0, 0, 255]),
    )?;

    p.begin_scene()?;
    p.clear_backbuffer()?;
    p.draw_sprite_collection(sprites)?;
    p.draw_text_collection(texts)?;
    p.end_scene()?;
    p.flip()?;

    p.destroy_text_collection(texts)?;
    p.destroy_sprite_collection(sprites)?;

    let device = p.into_device();
    println!("{}", serde_json::to_string_pretty(&device.calls)?);
    info!("provider-demo recorded {} device calls", device.calls.len());
    Ok(())
}
