//! Tile chrome validation.

use recents_common::Color;

use crate::schema::RecentsConfig;

use super::helpers::validate_range_f32;

pub(crate) fn validate_tile(errors: &mut Vec<String>, config: &RecentsConfig) {
    validate_range_f32(
        errors,
        "tile.task_corner_radius",
        config.tile.task_corner_radius,
        0.0,
        128.0,
    );
    if Color::from_hex(&config.tile.background_tint).is_none() {
        errors.push(format!(
            "tile.background_tint = {:?} is not a hex color",
            config.tile.background_tint
        ));
    }
}
