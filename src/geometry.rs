use crate::orientation::OrientationCode;

/// Natural pixel dimensions of a decoded raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A planned resize+rotate, in canvas-output coordinates.
///
/// `canvas_width`/`canvas_height` are the output surface dimensions;
/// `draw_width`/`draw_height` are the size the source is drawn at before
/// the rotation takes effect (axes swapped for quarter turns). Dimensions
/// stay fractional; rounding is the rasterizer's concern. The translation
/// pairs with `rotation_degrees` for canvas-style rasterizers that rotate
/// around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub rotation_degrees: i32,
    pub translate_x: f64,
    pub translate_y: f64,
    pub draw_width: f64,
    pub draw_height: f64,
}

impl Transform {
    /// Plan the single resize+rotate that reconciles the declared
    /// orientation, the requested scale ratio, and the dimension caps.
    ///
    /// Total: every orientation value maps to a transform. Sentinels and
    /// unrecognized values take the identity (`Up`) branch, and mirrored
    /// variants are not distinguished from their non-mirrored counterpart
    /// (the mirror axis is dropped; a known limitation).
    ///
    /// `ratio` is the already-normalized scale in (0, 1]; `max_width` and
    /// `max_height` cap the output dimensions, 0 meaning uncapped. The caps
    /// win over the ratio, so output never exceeds an explicit cap.
    pub fn plan(
        rect: Rect,
        orientation: OrientationCode,
        ratio: f64,
        max_width: u32,
        max_height: u32,
    ) -> Self {
        // Quarter turns exchange axes before any output sizing happens.
        let (effective_width, effective_height) = if orientation.swaps_axes() {
            (rect.height as f64, rect.width as f64)
        } else {
            (rect.width as f64, rect.height as f64)
        };

        let x_ratio = if max_width > 0 {
            max_width as f64 / effective_width
        } else {
            1.0
        };
        let y_ratio = if max_height > 0 {
            max_height as f64 / effective_height
        } else {
            1.0
        };
        let effective_ratio = ratio.min(x_ratio).min(y_ratio);

        let canvas_width = effective_width * effective_ratio;
        let canvas_height = effective_height * effective_ratio;

        match orientation {
            OrientationCode::Right | OrientationCode::RightMirrored => Self {
                canvas_width,
                canvas_height,
                rotation_degrees: 90,
                translate_x: 0.0,
                translate_y: -canvas_width,
                draw_width: canvas_height,
                draw_height: canvas_width,
            },
            OrientationCode::Left | OrientationCode::LeftMirrored => Self {
                canvas_width,
                canvas_height,
                rotation_degrees: -90,
                translate_x: -canvas_width,
                translate_y: 0.0,
                draw_width: canvas_height,
                draw_height: canvas_width,
            },
            OrientationCode::Down | OrientationCode::DownMirrored => Self {
                canvas_width,
                canvas_height,
                rotation_degrees: 180,
                translate_x: -canvas_width,
                translate_y: -canvas_height,
                draw_width: canvas_width,
                draw_height: canvas_height,
            },
            // Up, UpMirrored, and every sentinel: identity.
            _ => Self {
                canvas_width,
                canvas_height,
                rotation_degrees: 0,
                translate_x: 0.0,
                translate_y: 0.0,
                draw_width: canvas_width,
                draw_height: canvas_height,
            },
        }
    }
}
