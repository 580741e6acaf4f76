use serde::Serialize;

/// Corner radius state of a tile while it animates between the overview
/// and fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FullscreenDrawParams {
    /// Radius of the tile at rest in the overview.
    pub task_corner_radius: f32,
    /// Radius of a real on-screen window.
    pub window_corner_radius: f32,
    pub fullscreen_progress: f32,
    pub current_drawn_corner_radius: f32,
}

impl FullscreenDrawParams {
    pub fn new(task_corner_radius: f32, window_corner_radius: f32) -> Self {
        Self {
            task_corner_radius,
            window_corner_radius,
            fullscreen_progress: 0.0,
            current_drawn_corner_radius: task_corner_radius,
        }
    }

    /// Linear interpolation from the task radius to the window radius.
    pub fn interpolated_radius(&self, progress: f32) -> f32 {
        self.task_corner_radius + (self.window_corner_radius - self.task_corner_radius) * progress
    }
}
