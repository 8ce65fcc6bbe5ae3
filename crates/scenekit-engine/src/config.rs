// Imports
use scenekit_compose::Color;
use serde::{Deserialize, Serialize};

/// The scene configuration: tick rate and defaults for new figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "scene_config")]
pub struct SceneConfig {
    /// Ticks per second, the conversion factor for clocks created from seconds.
    #[serde(rename = "ticks_per_second")]
    pub ticks_per_second: u32,
    #[serde(rename = "rect_width")]
    pub rect_width: f64,
    #[serde(rename = "rect_height")]
    pub rect_height: f64,
    #[serde(rename = "circle_radius")]
    pub circle_radius: f64,
    #[serde(rename = "shape_color_1")]
    pub shape_color_1: Color,
    #[serde(rename = "shape_color_2")]
    pub shape_color_2: Color,
    #[serde(rename = "shape_color_3")]
    pub shape_color_3: Color,
    #[serde(rename = "background_color")]
    pub background_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            rect_width: 120.0,
            rect_height: 50.0,
            circle_radius: 50.0,
            shape_color_1: Color::SHAPE_PRIMARY,
            shape_color_2: Color::SHAPE_SECONDARY,
            shape_color_3: Color::SHAPE_TERTIARY,
            background_color: Color::BACKGROUND,
        }
    }
}

impl SceneConfig {
    /// Replace values a scene cannot run with by their defaults, warning about each.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.ticks_per_second == 0 {
            tracing::warn!("Scene config `ticks_per_second` must be at least 1, using the default");
            self.ticks_per_second = defaults.ticks_per_second;
        }
        if !(self.rect_width.is_finite() && self.rect_width >= 0.0) {
            tracing::warn!("Scene config `rect_width` is invalid, using the default");
            self.rect_width = defaults.rect_width;
        }
        if !(self.rect_height.is_finite() && self.rect_height >= 0.0) {
            tracing::warn!("Scene config `rect_height` is invalid, using the default");
            self.rect_height = defaults.rect_height;
        }
        if !(self.circle_radius.is_finite() && self.circle_radius >= 0.0) {
            tracing::warn!("Scene config `circle_radius` is invalid, using the default");
            self.circle_radius = defaults.circle_radius;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: SceneConfig = serde_json::from_str(r#"{"ticks_per_second": 30}"#).unwrap();
        assert_eq!(config.ticks_per_second, 30);
        assert_eq!(config.rect_width, 120.0);
        assert_eq!(config.shape_color_1, Color::rgb(50, 170, 230));
        assert_eq!(config.background_color, Color::rgb(250, 250, 250));
    }

    #[test]
    fn sanitizes_invalid_values() {
        let config = SceneConfig {
            ticks_per_second: 0,
            circle_radius: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config, SceneConfig::default());
    }
}
