use pixel_provider::{
    config::{ProviderConfig, SpriteOrder},
    error::ProviderError,
    render::{
        device::headless::{DeviceCall, HeadlessDevice},
        info::{Justification, SpriteInfo, TextInfo},
        provider::{DeviceProvider, GraphicsProvider},
    },
    util::{PointF32, Rect},
};

fn provider() -> DeviceProvider<HeadlessDevice> {
    DeviceProvider::new(HeadlessDevice::new(), ProviderConfig::default())
}

#[test]
fn test_sprite_round_trip_through_provider() {
    let mut p = provider();
    let id = p.create_sprite_collection().unwrap();
    let info = SpriteInfo {
        image_file: "assets/ship.png".to_string(),
        position: PointF32::new(100.0, 40.5),
        center: PointF32::new(8.0, 8.0),
        rotation: 1.25,
        scale_x: 1.5,
        scale_y: 0.75,
        alpha: 200,
        subrect: Rect::new(32, 16, 16, 16),
        z_depth: 3,
    };
    p.add_sprite(id, "ship", &info).unwrap();
    assert_eq!(p.get_sprite(id, "ship").unwrap(), info);
}

#[test]
fn test_title_text_round_trip() {
    let mut p = provider();
    let id = p.create_text_collection().unwrap();
    let title = TextInfo::new("GAME OVER")
        .with_position(80.0, 12.0)
        .with_font_size(8)
        .with_justification(Justification::Center)
        .with_argb([255, 0, 0, 255]);
    p.add_text(id, "title", &title).unwrap();
    assert_eq!(p.get_text(id, "title").unwrap(), title);
}

#[test]
fn test_destroyed_handle_is_invalid_everywhere() {
    let mut p = provider();
    let s = p.create_sprite_collection().unwrap();
    p.destroy_sprite_collection(s).unwrap();
    let invalid = ProviderError::InvalidHandle(s.raw());
    let info = SpriteInfo::new("a.png");
    assert_eq!(p.add_sprite(s, "a", &info), Err(invalid.clone()));
    assert_eq!(p.remove_sprite(s, "a"), Err(invalid.clone()));
    assert_eq!(p.set_sprite(s, "a", &info), Err(invalid.clone()));
    assert_eq!(p.get_sprite(s, "a"), Err(invalid.clone()));
    assert_eq!(p.draw_sprite_collection(s), Err(invalid.clone()));
    assert_eq!(p.destroy_sprite_collection(s), Err(invalid));

    let t = p.create_text_collection().unwrap();
    p.destroy_text_collection(t).unwrap();
    let invalid = ProviderError::InvalidHandle(t.raw());
    assert_eq!(p.add_text(t, "a", &TextInfo::new("a")), Err(invalid.clone()));
    assert_eq!(p.get_text(t, "a"), Err(invalid.clone()));
    assert_eq!(p.draw_text_collection(t), Err(invalid));
}

#[test]
fn test_duplicate_add_and_missing_remove() {
    let mut p = provider();
    let id = p.create_text_collection().unwrap();
    assert_eq!(
        p.remove_text(id, "title"),
        Err(ProviderError::NameNotFound("title".to_string()))
    );
    p.add_text(id, "title", &TextInfo::new("first")).unwrap();
    assert_eq!(
        p.add_text(id, "title", &TextInfo::new("second")),
        Err(ProviderError::DuplicateName("title".to_string()))
    );
    assert_eq!(p.get_text(id, "title").unwrap().contents, "first");
}

#[test]
fn test_set_then_get_returns_new_descriptor() {
    let mut p = provider();
    let id = p.create_sprite_collection().unwrap();
    let d1 = SpriteInfo::new("walk_0.png").with_z_depth(2);
    let d2 = SpriteInfo::new("walk_1.png").with_position(4.0, 0.0);
    p.add_sprite(id, "hero", &d1).unwrap();
    p.set_sprite(id, "hero", &d2).unwrap();
    assert_eq!(p.get_sprite(id, "hero").unwrap(), d2);
}

#[test]
fn test_set_text_then_get_returns_new_descriptor() {
    let mut p = provider();
    let id = p.create_text_collection().unwrap();
    let d1 = TextInfo::new("Score: 0").with_font_size(4);
    let d2 = TextInfo::new("Score: 100")
        .with_position(10.0, 2.0)
        .with_justification(Justification::Right)
        .with_argb([128, 255, 255, 0]);
    p.add_text(id, "score", &d1).unwrap();
    p.set_text(id, "score", &d2).unwrap();
    assert_eq!(p.get_text(id, "score").unwrap(), d2);
}

#[test]
fn test_remove_text_drops_it_from_draws() {
    let mut p = provider();
    let id = p.create_text_collection().unwrap();
    p.add_text(id, "title", &TextInfo::new("Title")).unwrap();
    p.add_text(id, "hint", &TextInfo::new("Press any key")).unwrap();
    p.remove_text(id, "hint").unwrap();
    assert_eq!(
        p.get_text(id, "hint"),
        Err(ProviderError::NameNotFound("hint".to_string()))
    );
    p.draw_text_collection(id).unwrap();
    assert_eq!(p.device().drawn_texts(), vec!["Title"]);
}

#[test]
fn test_hero_and_background_draw_back_to_front() {
    let mut p = provider();
    let id = p.create_sprite_collection().unwrap();
    p.add_sprite(id, "hero", &SpriteInfo::new("hero.png").with_z_depth(5))
        .unwrap();
    p.add_sprite(id, "bg", &SpriteInfo::new("bg.png").with_z_depth(1))
        .unwrap();
    assert_eq!(p.sprite_draw_order(id).unwrap(), vec!["bg", "hero"]);

    p.draw_sprite_collection(id).unwrap();
    assert_eq!(p.device().drawn_sprites(), vec!["bg.png", "hero.png"]);
}

#[test]
fn test_front_to_back_config() {
    let cfg = ProviderConfig {
        sprite_order: SpriteOrder::FrontToBack,
        ..Default::default()
    };
    let mut p = DeviceProvider::new(HeadlessDevice::new(), cfg);
    let id = p.create_sprite_collection().unwrap();
    p.add_sprite(id, "bg", &SpriteInfo::new("bg.png").with_z_depth(1))
        .unwrap();
    p.add_sprite(id, "hero", &SpriteInfo::new("hero.png").with_z_depth(5))
        .unwrap();
    p.draw_sprite_collection(id).unwrap();
    assert_eq!(p.device().drawn_sprites(), vec!["hero.png", "bg.png"]);

    // text ignores the sprite order
    let t = p.create_text_collection().unwrap();
    p.add_text(t, "first", &TextInfo::new("first")).unwrap();
    p.add_text(t, "second", &TextInfo::new("second")).unwrap();
    p.draw_text_collection(t).unwrap();
    assert_eq!(p.device().drawn_texts(), vec!["first", "second"]);
}

#[test]
fn test_full_frame() {
    let mut p = provider();
    let s = p.create_sprite_collection().unwrap();
    let t = p.create_text_collection().unwrap();
    p.add_sprite(s, "bg", &SpriteInfo::new("bg.png")).unwrap();
    p.add_text(t, "score", &TextInfo::new("0")).unwrap();

    p.begin_scene().unwrap();
    p.clear_backbuffer().unwrap();
    p.start_sprite_batch().unwrap();
    p.draw_sprite_collection(s).unwrap();
    p.end_sprite_batch().unwrap();
    p.draw_text_collection(t).unwrap();
    p.end_scene().unwrap();
    p.flip().unwrap();

    let calls = &p.device().calls;
    assert_eq!(calls.len(), 8);
    assert_eq!(calls[0], DeviceCall::BeginScene);
    assert_eq!(calls[1], DeviceCall::Clear { color: 0xFFFF_FFFF });
    assert_eq!(calls[2], DeviceCall::BeginBatch);
    assert!(matches!(calls[3], DeviceCall::DrawSprite(_)));
    assert_eq!(calls[4], DeviceCall::EndBatch);
    assert!(matches!(calls[5], DeviceCall::DrawText(_)));
    assert_eq!(calls[6], DeviceCall::EndScene);
    assert_eq!(calls[7], DeviceCall::Present);
}
