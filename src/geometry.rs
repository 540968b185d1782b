//! Panel layout of the HSV picker and the mapping between pointer
//! positions and color channels.
//!
//! The picker is a saturation/value square on the left, a vertical hue strip
//! on the right and an optional horizontal alpha strip along the bottom:
//!
//! ```text
//! +-----------+ +--+
//! |  sat/val  | |h |
//! |           | |u |
//! +-----------+ +--+
//! +----------------+
//! |     alpha      |
//! +----------------+
//! ```

use euclid::default::{Point2D, Rect as Rect2D, Size2D};
use serde::{Deserialize, Serialize};

use crate::{ColorModel, Component};

/// A position in pixels.
pub type Point = Point2D<Component>;

/// An axis aligned rectangle in pixels.
pub type Rect = Rect2D<Component>;

/// Convert density independent units to whole pixels. A positive length
/// never rounds down to zero.
pub fn dp_to_px(dp: Component, density: Component) -> Component {
    let value = dp * density;
    let px = (value + 0.5).trunc();
    if px == 0.0 && value > 0.0 {
        1.0
    } else {
        px
    }
}

/// Sizes of the picker panels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutMetrics {
    /// Width of the hue strip.
    pub hue_panel_width: Component,
    /// Height of the alpha strip.
    pub alpha_panel_height: Component,
    /// Gap between panels.
    pub panel_spacing: Component,
    /// Border drawn around every panel, in pixels at any density.
    pub border_width: Component,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            hue_panel_width: 30.0,
            alpha_panel_height: 20.0,
            panel_spacing: 10.0,
            border_width: 1.0,
        }
    }
}

impl LayoutMetrics {
    /// Convert the density independent sizes to pixels.
    pub fn scaled(&self, density: Component) -> Self {
        Self {
            hue_panel_width: dp_to_px(self.hue_panel_width, density),
            alpha_panel_height: dp_to_px(self.alpha_panel_height, density),
            panel_spacing: dp_to_px(self.panel_spacing, density),
            border_width: self.border_width,
        }
    }

    /// Whether every size is finite and not negative.
    pub fn is_valid(&self) -> bool {
        [
            self.hue_panel_width,
            self.alpha_panel_height,
            self.panel_spacing,
            self.border_width,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// One of the picker panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// The saturation/value square.
    SatVal,
    /// The hue strip.
    Hue,
    /// The alpha strip.
    Alpha,
}

/// Panel rectangles of a picker laid out in a drawing rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    /// The saturation/value square.
    pub sat_val: Rect,
    /// The hue strip.
    pub hue: Rect,
    /// The alpha strip, when shown.
    pub alpha: Option<Rect>,
}

fn from_edges(left: Component, top: Component, right: Component, bottom: Component) -> Rect {
    Rect::new(
        Point::new(left, top),
        Size2D::new((right - left).max(0.0), (bottom - top).max(0.0)),
    )
}

/// Offset of `at` into the span starting at `start`, clamped into
/// 0..=`length`.
fn clamp_offset(at: Component, start: Component, length: Component) -> Component {
    if at < start {
        0.0
    } else if at > start + length {
        length
    } else {
        at - start
    }
}

impl PanelLayout {
    /// Lay the panels out inside `drawing`, the view bounds minus padding.
    pub fn new(drawing: Rect, metrics: &LayoutMetrics, show_alpha: bool) -> Self {
        let border = metrics.border_width;
        let alpha_band = if show_alpha {
            metrics.alpha_panel_height + metrics.panel_spacing
        } else {
            0.0
        };

        let sat_val = from_edges(
            drawing.min_x() + border,
            drawing.min_y() + border,
            drawing.max_x() - border - metrics.panel_spacing - metrics.hue_panel_width,
            drawing.max_y() - border - alpha_band,
        );

        let hue = from_edges(
            drawing.max_x() - metrics.hue_panel_width + border,
            drawing.min_y() + border,
            drawing.max_x() - border,
            drawing.max_y() - border - alpha_band,
        );

        let alpha = show_alpha.then(|| {
            from_edges(
                drawing.min_x() + border,
                drawing.max_y() - metrics.alpha_panel_height + border,
                drawing.max_x() - border,
                drawing.max_y() - border,
            )
        });

        Self {
            sat_val,
            hue,
            alpha,
        }
    }

    /// The panel containing `point`, if any.
    pub fn panel_at(&self, point: Point) -> Option<Panel> {
        if self.hue.contains(point) {
            Some(Panel::Hue)
        } else if self.sat_val.contains(point) {
            Some(Panel::SatVal)
        } else if self.alpha.is_some_and(|alpha| alpha.contains(point)) {
            Some(Panel::Alpha)
        } else {
            None
        }
    }

    /// Hue at height `y` of the hue strip: 360 at the top, 0 at the bottom.
    pub fn point_to_hue(&self, y: Component) -> Component {
        let height = self.hue.height();
        if height <= 0.0 {
            return 360.0;
        }
        let y = clamp_offset(y, self.hue.min_y(), height);
        360.0 - y * 360.0 / height
    }

    /// Tracker position of `hue` on the hue strip.
    pub fn hue_to_point(&self, hue: Component) -> Point {
        let height = self.hue.height();
        Point::new(
            self.hue.min_x(),
            height - hue * height / 360.0 + self.hue.min_y(),
        )
    }

    /// Saturation and value at `point` of the saturation/value square.
    pub fn point_to_sat_val(&self, point: Point) -> (Component, Component) {
        let width = self.sat_val.width();
        let height = self.sat_val.height();

        let saturation = if width > 0.0 {
            clamp_offset(point.x, self.sat_val.min_x(), width) / width
        } else {
            0.0
        };
        let value = if height > 0.0 {
            1.0 - clamp_offset(point.y, self.sat_val.min_y(), height) / height
        } else {
            1.0
        };

        (saturation, value)
    }

    /// Tracker position of `saturation` and `value` on the square.
    pub fn sat_val_to_point(&self, saturation: Component, value: Component) -> Point {
        Point::new(
            saturation * self.sat_val.width() + self.sat_val.min_x(),
            (1.0 - value) * self.sat_val.height() + self.sat_val.min_y(),
        )
    }

    /// Alpha at `x` of the alpha strip: 255 on the left, 0 on the right.
    /// Without an alpha strip the color stays opaque.
    pub fn point_to_alpha(&self, x: Component) -> u8 {
        let Some(rect) = self.alpha else {
            return 0xFF;
        };
        let width = rect.width() as i32;
        if width <= 0 {
            return 0xFF;
        }
        let x = clamp_offset(x, rect.min_x(), rect.width()) as i32;
        (0xFF - x.min(width) * 0xFF / width) as u8
    }

    /// Tracker position of `alpha` on the alpha strip.
    pub fn alpha_to_point(&self, alpha: u8) -> Option<Point> {
        self.alpha.map(|rect| {
            let width = rect.width();
            Point::new(
                width - alpha as Component * width / 255.0 + rect.min_x(),
                rect.min_y(),
            )
        })
    }

    /// Move the tracker of the panel where a drag started at `start` to
    /// `point`. Returns whether `model` changed.
    pub fn drag(&self, model: &mut ColorModel, start: Point, point: Point) -> bool {
        let before = *model;
        match self.panel_at(start) {
            Some(Panel::Hue) => model.set_hue(self.point_to_hue(point.y)),
            Some(Panel::SatVal) => {
                let (saturation, value) = self.point_to_sat_val(point);
                model.set_saturation_value(saturation, value);
            }
            Some(Panel::Alpha) => model.set_alpha(self.point_to_alpha(point.x)),
            None => return false,
        }
        *model != before
    }
}
