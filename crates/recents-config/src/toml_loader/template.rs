//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Recents Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[device]
# window_width = 2560.0          # 1-16384, full-scale desktop width
# window_height = 1600.0         # 1-16384, full-scale desktop height
# thumbnail_top_margin_px = 48   # 0-256, title bar above thumbnails
# window_corner_radius = 16.0    # 0.0-128.0

[tile]
# task_corner_radius = 24.0      # 0.0-128.0
# background_tint = "#b8c8d8"
# icon_label = "Desktop"
# use_direct_allocation = false  # true: one dedicated surface per bind, no reuse

[pool]
# max_size = 10                  # 1-64, idle surfaces kept for reuse
# initial_size = 0               # 0-64, surfaces allocated up front

[logging]
# level = "INFO"                 # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
