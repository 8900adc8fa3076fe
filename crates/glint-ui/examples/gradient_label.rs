//! Renders a padded gradient label to a PNG.
//!
//! Usage: `cargo run --example gradient_label -- path/to/font.ttf out.png`

use anyhow::{Context, Result};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_ui::prelude::*;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let font_path = args.next().context("usage: gradient_label <font.ttf> [out.png]")?;
    let out_path = args.next().unwrap_or_else(|| "gradient_label.png".into());

    let font_bytes = std::fs::read(&font_path).with_context(|| format!("reading {font_path}"))?;

    let mut scene = UiScene::new();
    let font = scene.load_font(&font_bytes).context("parsing font")?;

    let label: Element = Label::new(
        "Glint",
        font,
        48.0,
        Color::from_straight(1.0, 1.0, 1.0, 1.0),
    )
    .with_padding(Edges::all(16.0))
    .with_gradient(
        GradientDirection::LeftTopToRightDown,
        vec![
            Color::from_srgb_u8(255, 80, 80, 255),
            Color::from_srgb_u8(255, 200, 60, 255),
            Color::from_srgb_u8(80, 120, 255, 255),
        ],
    )
    .into();

    let mut surface = Surface::new(240, 96);
    surface.clear(Color::from_srgb_u8(24, 24, 32, 255));
    let size = scene.frame(&label, &mut surface);
    log::info!("label measured {}×{}", size.x, size.y);

    // The surface is premultiplied; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity(surface.width() * surface.height() * 4);
    for y in 0..surface.height() as i32 {
        for x in 0..surface.width() as i32 {
            let (r, g, b, a) = surface.pixel(x, y).to_straight();
            let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
            rgba.extend_from_slice(&[q(r), q(g), q(b), q(a)]);
        }
    }
    let img = image::RgbaImage::from_raw(surface.width() as u32, surface.height() as u32, rgba)
        .context("building image")?;
    img.save(&out_path).with_context(|| format!("writing {out_path}"))?;

    log::info!("wrote {out_path}");
    Ok(())
}
