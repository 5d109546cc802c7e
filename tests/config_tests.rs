use std::path::Path;

use virtual_cam::config::{ControlsConfig, ViewerConfig, WindowConfig};

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{
            "camera": { "field_of_view": 70.0, "position": [0.0, 1.0, -3.0] },
            "controls": { "movement_speed": 5.0 }
        }"#;

        let config = ViewerConfig::from_json_str(json).unwrap();

        assert_eq!(config.camera.field_of_view, 70.0);
        assert_eq!(config.camera.position, [0.0, 1.0, -3.0]);
        assert_eq!(config.camera.yaw, 0.0);
        assert_eq!(config.controls.movement_speed, 5.0);
        assert_eq!(config.controls.rotation_speed, 60.0);
        assert_eq!(config.controls.zoom_step, 1.5);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ViewerConfig::from_json_str("{ not json").is_err());
        assert!(ViewerConfig::from_json_str(r#"{ "controls": { "zoom_step": "big" } }"#).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ViewerConfig::load_or_default(Some(Path::new("/nonexistent/viewer.json")));
        let message = format!("{:#}", result.unwrap_err());

        assert!(message.contains("failed to read config file"));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("virtual_cam_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "window": { "title": "Test", "width": 800 } }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.window.title, "Test");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.controls, ControlsConfig::default());
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = ViewerConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(ViewerConfig::from_json_str(&json).unwrap(), config);
    }
}
