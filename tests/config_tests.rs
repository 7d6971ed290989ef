// Host-side tests for page configuration and hero markup.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;

#[test]
fn empty_query_gives_defaults() {
    let cfg = AppConfig::from_query("");
    assert_eq!(cfg, AppConfig::default());
    assert!(!cfg.debug_panel);
    assert_eq!(cfg.log_level, log::Level::Info);
    assert_eq!(AppConfig::from_query("?"), cfg);
}

#[test]
fn query_flags_are_parsed() {
    let cfg = AppConfig::from_query("?debug&log=debug&assets=/static/");
    assert!(cfg.debug_panel);
    assert_eq!(cfg.log_level, log::Level::Debug);
    assert_eq!(cfg.asset_base, "/static");
}

#[test]
fn debug_can_be_switched_off_explicitly() {
    assert!(!AppConfig::from_query("debug=0").debug_panel);
    assert!(!AppConfig::from_query("debug=false").debug_panel);
    assert!(AppConfig::from_query("debug=1").debug_panel);
}

#[test]
fn unknown_keys_and_bad_levels_are_ignored() {
    let cfg = AppConfig::from_query("?utm_source=x&log=loud&&foo");
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn asset_urls_join_cleanly() {
    assert_eq!(asset_url("", "./water.mp3"), "./water.mp3");
    assert_eq!(asset_url("/cdn", "./water.mp3"), "/cdn/water.mp3");
    assert_eq!(asset_url("/cdn/", "/grid.png"), "/cdn/grid.png");
    assert_eq!(
        asset_url("https://example.com/a", "media/pictures/3.png"),
        "https://example.com/a/media/pictures/3.png"
    );
}

#[test]
fn debug_range_only_with_flag() {
    assert_eq!(GalleryParams::default().debug, None);
    let p = GalleryParams::from_config(&AppConfig::from_query("?debug"));
    let range = p.debug.expect("debug range");
    assert_eq!((range.min, range.max), (-10.0, 5.0));
    assert_eq!(range.clamp(-12.0), -10.0);
    assert_eq!(range.clamp(7.0), 5.0);
    assert_eq!(range.clamp(-3.5), -3.5);
}

#[test]
fn gallery_params_list_seven_pictures() {
    let p = GalleryParams::default();
    assert_eq!(p.image_paths.len(), 7);
    assert_eq!(p.image_paths[2], "media/pictures/3.png");
}

#[test]
fn hero_audio_follows_asset_base() {
    assert_eq!(HeroParams::default().audio_src, "./water.mp3");
    let p = HeroParams::from_config(&AppConfig::from_query("assets=/a"));
    assert_eq!(p.audio_src, "/a/water.mp3");
}

#[test]
fn hero_markup_exposes_toggle_and_canvas() {
    let html = hero_markup(&HeroParams::default());
    assert!(html.contains(&format!("class='{}'", HERO_TOGGLE_CLASS)));
    assert!(html.contains(&format!("<canvas class='{}'>", HERO_CANVAS_CLASS)));
    assert!(html.contains("Hi, I'm <span style='color:#915eff'>Jonathan</span>"));
    assert!(html.contains("full stack developer"));
}

#[test]
fn hero_markup_escapes_text() {
    let mut p = HeroParams::default();
    p.name = "<b>Jo & 'Co'</b>".to_string();
    let html = hero_markup(&p);
    assert!(html.contains("&lt;b&gt;Jo &amp; &#39;Co&#39;&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}
