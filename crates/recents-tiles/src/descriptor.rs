use recents_common::types::{Point, Rect, TaskKey};
use serde::{Deserialize, Serialize};

/// One window of a desktop session as reported by the window manager.
///
/// Geometry is optional: freshly launched or restored windows may not have
/// reported bounds yet, and layout substitutes a fallback for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub key: TaskKey,
    #[serde(default)]
    pub app_bounds: Option<Rect>,
    #[serde(default)]
    pub position_in_parent: Option<Point>,
    #[serde(default)]
    pub title: String,
}

impl WindowDescriptor {
    pub fn new(key: TaskKey, title: impl Into<String>) -> Self {
        Self {
            key,
            app_bounds: None,
            position_in_parent: None,
            title: title.into(),
        }
    }

    pub fn with_app_bounds(mut self, bounds: Rect) -> Self {
        self.app_bounds = Some(bounds);
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position_in_parent = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_has_no_geometry() {
        let d = WindowDescriptor::new(TaskKey(1), "Files");
        assert_eq!(d.title, "Files");
        assert!(d.app_bounds.is_none());
        assert!(d.position_in_parent.is_none());
    }

    #[test]
    fn builders_set_geometry() {
        let d = WindowDescriptor::new(TaskKey(2), "Mail")
            .with_app_bounds(Rect::new(0, 0, 200, 100))
            .with_position(Point::new(50, 20));
        assert_eq!(d.app_bounds, Some(Rect::new(0, 0, 200, 100)));
        assert_eq!(d.position_in_parent, Some(Point::new(50, 20)));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{"key": 7}"#;
        let d: WindowDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.key, TaskKey(7));
        assert!(d.app_bounds.is_none());
        assert!(d.title.is_empty());
    }

    #[test]
    fn deserializes_full_descriptor() {
        let json = r#"{
            "key": 3,
            "app_bounds": {"left": 0, "top": 0, "right": 640, "bottom": 480},
            "position_in_parent": {"x": 100, "y": 40},
            "title": "Terminal"
        }"#;
        let d: WindowDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.app_bounds.unwrap().width(), 640);
        assert_eq!(d.position_in_parent, Some(Point::new(100, 40)));
        assert_eq!(d.title, "Terminal");
    }
}
