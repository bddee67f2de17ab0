//! SVG to PNG rasterization.

use crate::export::ExportError;
use image::{ImageFormat, RgbaImage};
use lazy_static::lazy_static;
use std::io::Cursor;
use std::sync::Arc;
use usvg::fontdb::Database;

lazy_static! {
    static ref FONT_DB: Arc<Database> = Arc::new(init_font_db());
}

fn init_font_db() -> Database {
    let mut font_database = Database::new();
    font_database.load_system_fonts();
    tracing::debug!(faces = font_database.len(), "font database loaded");
    font_database
}

/// Decode SVG markup onto a pixmap `scale` times its logical size, over an opaque background.
pub fn rasterize(svg: &str, scale: f32, background: [u8; 3]) -> Result<tiny_skia::Pixmap, ExportError> {
    let opts = usvg::Options {
        fontdb: FONT_DB.clone(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)?;

    let width = (tree.size().width() * scale).round() as u32;
    let height = (tree.size().height() * scale).round() as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::EmptyCanvas { width, height })?;

    let [r, g, b] = background;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Encode a pixmap as PNG.
///
/// The pixmap must be fully opaque (see [`rasterize`]), so its premultiplied
/// pixels are already straight RGBA.
pub fn encode_png(pixmap: tiny_skia::Pixmap) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let image = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(ExportError::EmptyCanvas { width, height })?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn svg_to_png(svg: &str, scale: f32, background: [u8; 3]) -> Result<Vec<u8>, ExportError> {
    let pixmap = rasterize(svg, scale, background)?;
    encode_png(pixmap)
}
