// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use compliance_hub::{deeplink::DeepLink, gui, log};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/hub.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init(log::LogTarget::File);

    // Optional deep link: `compliance_hub "https://…/?q=BT-000118#lot-bt000118"`
    let link = std::env::args().nth(1).map(|a| DeepLink::parse(&a));

    let state = gui::initial_state();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport,
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, link) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
