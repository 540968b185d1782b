use chroma_picker::{
    alpha_gradient, hue_strip, AlphaPattern, Border, Checkmark, Color, ColorShape, Component, Hsv,
    PanelLayout, PickerConfig, Point, Rect, Swatch, SwatchGrid,
};
use euclid::default::Size2D;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;

const WIDTH: u32 = 480;
const MARGIN: u32 = 16;
const PICKER_HEIGHT: u32 = 256;
const SWATCH_SIZE: u32 = 64;
const SHADE_SIZE: u32 = 32;
const GAP: u32 = 16;
const COLUMNS: u32 = 5;

const BORDER: Color = Color::from_argb(0xFF6E_6E6E);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => PickerConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => PickerConfig {
            color: Color::from_argb(0xB021_96F3),
            show_alpha_slider: true,
            ..Default::default()
        },
    };

    let model = config.model();
    let color = model.color();
    let metrics = config.layout.scaled(1.0);
    let pattern = AlphaPattern::default();

    let picker_height = PICKER_HEIGHT
        + if config.show_alpha_slider {
            (metrics.alpha_panel_height + metrics.panel_spacing) as u32
        } else {
            0
        };
    let layout = PanelLayout::new(
        Rect::new(
            Point::new(MARGIN as Component, MARGIN as Component),
            Size2D::new((WIDTH - 2 * MARGIN) as Component, picker_height as Component),
        ),
        &metrics,
        config.show_alpha_slider,
    );

    let grid = SwatchGrid::new(config.palette(color), color);
    let rows = (grid.palette().len() as u32).div_ceil(COLUMNS);
    let presets_top = MARGIN + picker_height + GAP;
    let shades_top = presets_top + rows * (SWATCH_SIZE + GAP);
    let height = shades_top
        + if config.show_color_shades {
            SHADE_SIZE + GAP
        } else {
            0
        }
        + MARGIN;

    let mut img = RgbaImage::new(WIDTH, height);
    img.fill(255);

    for (x, y) in pixels(layout.sat_val) {
        let (saturation, value) = layout.point_to_sat_val(Point::new(x as Component, y as Component));
        let c = Hsv::new(model.hue(), saturation, value).to_color(0xFF);
        img.put_pixel(x, y, rgba(c));
    }

    let strip = hue_strip(layout.hue.height() as usize);
    for (x, y) in pixels(layout.hue) {
        if let Some(&c) = strip.get((y - layout.hue.min_y() as u32) as usize) {
            img.put_pixel(x, y, rgba(c));
        }
    }

    if let Some(alpha) = layout.alpha {
        let (left, top) = (alpha.min_x() as u32, alpha.min_y() as u32);
        for (x, y) in pixels(alpha) {
            let t = (x - left) as Component / alpha.width();
            let c = over(
                alpha_gradient(color, t),
                pattern.cell_color(x - left, y - top),
            );
            img.put_pixel(x, y, rgba(c));
        }
    }

    let tracker = Rgba([255, 255, 255, 255]);
    let p = layout.sat_val_to_point(model.saturation(), model.value());
    draw_hollow_circle_mut(&mut img, (p.x as i32, p.y as i32), 6, tracker);

    let p = layout.hue_to_point(model.hue());
    draw_hollow_rect_mut(
        &mut img,
        PixelRect::at(p.x as i32 - 1, p.y as i32 - 2).of_size(layout.hue.width() as u32 + 2, 4),
        rgba(BORDER),
    );

    if let (Some(alpha), Some(p)) = (layout.alpha, layout.alpha_to_point(model.alpha())) {
        draw_hollow_rect_mut(
            &mut img,
            PixelRect::at(p.x as i32 - 2, p.y as i32 - 1).of_size(4, alpha.height() as u32 + 2),
            rgba(BORDER),
        );
    }

    for (i, swatch) in grid.swatches().iter().enumerate() {
        let i = i as u32;
        let x = MARGIN + (i % COLUMNS) * (SWATCH_SIZE + GAP);
        let y = presets_top + (i / COLUMNS) * (SWATCH_SIZE + GAP);
        paint_swatch(&mut img, (x, y), SWATCH_SIZE, swatch, config.color_shape, &pattern);
    }

    if config.show_color_shades {
        for (i, swatch) in model.shades().swatches(color).iter().enumerate() {
            let x = MARGIN + i as u32 * (SHADE_SIZE + 4);
            paint_swatch(&mut img, (x, shades_top), SHADE_SIZE, swatch, config.color_shape, &pattern);
        }
    }

    img.save("out.png")?;

    Ok(())
}

/// Every whole pixel inside `rect`.
fn pixels(rect: Rect) -> impl Iterator<Item = (u32, u32)> {
    let (left, right) = (rect.min_x() as u32, rect.max_x() as u32);
    let (top, bottom) = (rect.min_y() as u32, rect.max_y() as u32);
    (top..bottom).flat_map(move |y| (left..right).map(move |x| (x, y)))
}

fn rgba(c: Color) -> Rgba<u8> {
    Rgba([c.red, c.green, c.blue, c.alpha])
}

/// Composite `src` over the opaque `dst`.
fn over(src: Color, dst: Color) -> Color {
    let a = src.alpha as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Color::from_rgb(
        mix(src.red, dst.red),
        mix(src.green, dst.green),
        mix(src.blue, dst.blue),
    )
}

fn paint_swatch(
    img: &mut RgbaImage,
    (x0, y0): (u32, u32),
    size: u32,
    swatch: &Swatch,
    shape: ColorShape,
    pattern: &AlphaPattern,
) {
    let r = size as i32 / 2;
    for dy in 0..size {
        for dx in 0..size {
            let (cx, cy) = (dx as i32 - r, dy as i32 - r);
            if shape == ColorShape::Circle && cx * cx + cy * cy > r * r {
                continue;
            }
            let c = over(swatch.color, pattern.cell_color(dx, dy));
            img.put_pixel(x0 + dx, y0 + dy, rgba(c));
        }
    }

    let border = match swatch.border() {
        Border::Original => BORDER,
        Border::Opaque(c) => c,
    };
    match shape {
        ColorShape::Circle => {
            draw_hollow_circle_mut(img, (x0 as i32 + r, y0 as i32 + r), r, rgba(border))
        }
        ColorShape::Square => draw_hollow_rect_mut(
            img,
            PixelRect::at(x0 as i32, y0 as i32).of_size(size, size),
            rgba(border),
        ),
    }

    if let Some(mark) = swatch.checkmark() {
        // The checkmark itself is white.
        let tint = match mark {
            Checkmark::Dark => Color::BLACK,
            Checkmark::Light | Checkmark::Untinted => Color::WHITE,
        };
        let m = size / 4;
        draw_filled_rect_mut(
            img,
            PixelRect::at((x0 + size / 2 - m / 2) as i32, (y0 + size / 2 - m / 2) as i32)
                .of_size(m, m),
            rgba(tint),
        );
    }
}
