//! Standalone legend artwork, drawn from the series list alone.
//!
//! Layout (logical pixels, before scaling):
//! - 300 wide, `rows × 35 + 80` tall, 1 px border
//! - bold "Legend" title with its baseline at (16, 30)
//! - per series: a 24 × 24 swatch at (16, 60 + i·35), name baseline at (52, 60 + i·35 + 17)

use crate::charts::palette;
use crate::data::SeriesDescriptor;
use crate::export::ExportError;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

pub const LEGEND_WIDTH: u32 = 300;
pub const ROW_HEIGHT: u32 = 35;
pub const HEADER_FOOTER_MARGIN: u32 = 80;

const PAD_X: i32 = 16;
const TITLE_BASELINE: i32 = 30;
const FIRST_ROW_Y: i32 = 60;
const SWATCH_SIZE: i32 = 24;
const TEXT_X: i32 = 52;
const TEXT_BASELINE_OFFSET: i32 = 17;

const BORDER: RGBColor = RGBColor(209, 213, 219);
const TITLE_COLOR: RGBColor = RGBColor(31, 41, 55);
const ITEM_COLOR: RGBColor = RGBColor(55, 65, 81);

/// Logical canvas height for a legend with `series_count` rows.
pub fn legend_height(series_count: usize) -> u32 {
    series_count as u32 * ROW_HEIGHT + HEADER_FOOTER_MARGIN
}

/// Draw the legend as SVG markup at logical size.
pub fn legend_svg(series: &[SeriesDescriptor], background: [u8; 3]) -> Result<String, ExportError> {
    let height = legend_height(series.len());
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (LEGEND_WIDTH, height)).into_drawing_area();
        draw_legend(&root, series, background, height).map_err(|e| ExportError::Render(e.to_string()))?;
    }
    Ok(svg)
}

fn draw_legend(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    series: &[SeriesDescriptor],
    background: [u8; 3],
    height: u32,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    let [r, g, b] = background;
    root.fill(&RGBColor(r, g, b))?;
    root.draw(&Rectangle::new(
        [(0, 0), (LEGEND_WIDTH as i32 - 1, height as i32 - 1)],
        BORDER.stroke_width(1),
    ))?;

    let baseline = Pos::new(HPos::Left, VPos::Bottom);
    let title_style = ("sans-serif", 18)
        .into_font()
        .style(FontStyle::Bold)
        .color(&TITLE_COLOR)
        .pos(baseline);
    root.draw(&Text::new("Legend", (PAD_X, TITLE_BASELINE), title_style))?;

    let item_style = ("sans-serif", 14).into_font().color(&ITEM_COLOR).pos(baseline);
    for (idx, desc) in series.iter().enumerate() {
        let y = FIRST_ROW_Y + idx as i32 * ROW_HEIGHT as i32;
        let swatch = [(PAD_X, y), (PAD_X + SWATCH_SIZE, y + SWATCH_SIZE)];

        root.draw(&Rectangle::new(swatch, palette::plotters_rgb(&desc.color).filled()))?;
        root.draw(&Rectangle::new(swatch, BORDER.stroke_width(1)))?;
        root.draw(&Text::new(
            desc.key.as_str(),
            (TEXT_X, y + TEXT_BASELINE_OFFSET),
            item_style.clone(),
        ))?;
    }

    root.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{series_descriptors, Dataset};
    use crate::export::raster::svg_to_png;

    #[test]
    fn test_legend_height() {
        assert_eq!(legend_height(0), 80);
        assert_eq!(legend_height(10), 430);
        assert_eq!(legend_height(11), 465);
    }

    #[test]
    fn test_legend_svg_lists_every_series() {
        let series = series_descriptors(&Dataset::seed());
        let svg = legend_svg(&series, [255, 255, 255]).unwrap();

        assert!(svg.contains("Legend"));
        for desc in &series {
            assert!(svg.contains(&desc.key), "missing {}", desc.key);
        }
    }

    #[test]
    fn test_legend_png_is_double_size() {
        let mut dataset = Dataset::seed();
        dataset.add_series();
        let series = series_descriptors(&dataset);

        let svg = legend_svg(&series, [255, 255, 255]).unwrap();
        let png = svg_to_png(&svg, 2.0, [255, 255, 255]).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), (600, 2 * legend_height(11)));
        // Center of the first swatch carries the first series color (#808080)
        let cx = 2 * (PAD_X + SWATCH_SIZE / 2) as u32;
        let cy = 2 * (FIRST_ROW_Y + SWATCH_SIZE / 2) as u32;
        assert_eq!(decoded.get_pixel(cx, cy).0, [128, 128, 128, 255]);
    }
}
