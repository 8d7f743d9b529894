use gpui::{BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Window, point, px, quad};

use crate::bitmap::BackingBitmap;
use crate::geom::{SurfacePoint, SurfaceRect};
use crate::palette::Color;

/// Paint the backing bitmap at `origin`, coalescing same-color runs.
///
/// Statistics graphs are dominated by long flat-color spans, so run
/// coalescing keeps the quad count near the number of visible bands rather
/// than the number of pixels.
pub(crate) fn paint_bitmap(
    window: &mut Window,
    origin: gpui::Point<Pixels>,
    bitmap: &BackingBitmap,
) {
    for (y, row) in bitmap.rows().enumerate() {
        let mut x = 0;
        while x < row.len() {
            let color = row[x];
            let mut end = x + 1;
            while end < row.len() && row[end] == color {
                end += 1;
            }
            let bounds = Bounds::from_corners(
                point(origin.x + px(x as f32), origin.y + px(y as f32)),
                point(origin.x + px(end as f32), origin.y + px((y + 1) as f32)),
            );
            window.paint_quad(quad(
                bounds,
                Corners::all(px(0.0)),
                to_rgba(color),
                Edges::all(px(0.0)),
                to_rgba(color),
                BorderStyle::default(),
            ));
            x = end;
        }
    }
}

/// Stroke a one-pixel overlay line at `origin`-relative coordinates.
pub(crate) fn paint_line(
    window: &mut Window,
    origin: gpui::Point<Pixels>,
    from: SurfacePoint,
    to: SurfacePoint,
    color: Color,
) {
    let mut builder = PathBuilder::stroke(px(1.0));
    builder.move_to(point(
        origin.x + px(from.x as f32),
        origin.y + px(from.y as f32),
    ));
    builder.line_to(point(origin.x + px(to.x as f32), origin.y + px(to.y as f32)));
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

/// Fill an overlay rectangle at `origin`-relative coordinates.
pub(crate) fn paint_rect(
    window: &mut Window,
    origin: gpui::Point<Pixels>,
    rect: SurfaceRect,
    color: Color,
) {
    let bounds = Bounds::from_corners(
        point(
            origin.x + px(rect.min.x as f32),
            origin.y + px(rect.min.y as f32),
        ),
        point(
            origin.x + px(rect.max.x as f32),
            origin.y + px(rect.max.y as f32),
        ),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

pub(crate) fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r as f32 / 65535.0,
        g: color.g as f32 / 65535.0,
        b: color.b as f32 / 65535.0,
        a: 1.0,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
