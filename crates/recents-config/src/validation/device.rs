//! Device geometry validation (reference window size, margins, radii).

use crate::schema::RecentsConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_device(errors: &mut Vec<String>, config: &RecentsConfig) {
    // Below 1.0 the reference size truncates to zero and no scale exists.
    validate_range_f32(
        errors,
        "device.window_width",
        config.device.window_width,
        1.0,
        16384.0,
    );
    validate_range_f32(
        errors,
        "device.window_height",
        config.device.window_height,
        1.0,
        16384.0,
    );
    validate_range(
        errors,
        "device.thumbnail_top_margin_px",
        config.device.thumbnail_top_margin_px,
        0,
        256,
    );
    validate_range_f32(
        errors,
        "device.window_corner_radius",
        config.device.window_corner_radius,
        0.0,
        128.0,
    );
}
