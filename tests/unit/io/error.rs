//! Tests for error formatting and context propagation

#[cfg(test)]
mod tests {
    use quadmaze::LevelError;
    use quadmaze::io::error::{WithPath, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests user-facing messages name the offending location
    // Verified by swapping row and column in the message
    #[test]
    fn test_display_messages() {
        assert_eq!(LevelError::EmptyGrid.to_string(), "Quadrant grid is empty");
        assert_eq!(
            LevelError::RaggedRow {
                row: 2,
                expected: 14,
                found: 13
            }
            .to_string(),
            "Quadrant is not rectangular: row 2 has 13 cells, expected 14"
        );
        assert_eq!(
            LevelError::UnknownCategory {
                value: 9,
                row: 3,
                col: 4
            }
            .to_string(),
            "Unknown tile category 9 at row 3, column 4"
        );
        assert_eq!(
            LevelError::Parse {
                line: 7,
                token: "x".to_string()
            }
            .to_string(),
            "Invalid tile token 'x' on line 7"
        );
        assert_eq!(
            invalid_parameter("tile_pixels", &2, &"too small").to_string(),
            "Invalid parameter 'tile_pixels' = '2': too small"
        );
    }

    // Tests I/O failures keep their cause and gain a path
    // Verified by overwriting paths that were already set
    #[test]
    fn test_with_path_fills_unknown_path() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let error = result.with_path(Path::new("maze.txt")).unwrap_err();

        match &error {
            LevelError::FileSystem { path, .. } => assert_eq!(path, Path::new("maze.txt")),
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
        assert!(error.source().is_some());
        assert!(error.to_string().contains("maze.txt"));
    }

    // Tests known paths are preserved
    // Verified by always replacing the path
    #[test]
    fn test_with_path_keeps_known_path() {
        let original = LevelError::FileSystem {
            path: PathBuf::from("first.txt"),
            operation: "read quadrant",
            source: std::io::Error::other("boom"),
        };
        let error = Err::<(), _>(original)
            .with_path(Path::new("second.txt"))
            .unwrap_err();

        match error {
            LevelError::FileSystem { path, .. } => assert_eq!(path, PathBuf::from("first.txt")),
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }

    // Tests JSON errors convert and chain their source
    // Verified by dropping the source in Error::source
    #[test]
    fn test_json_error_conversion() {
        let parse_error = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let error = Err::<(), _>(parse_error)
            .with_path(Path::new("maze.json"))
            .unwrap_err();

        assert!(matches!(error, LevelError::Serialization { .. }));
        assert!(error.to_string().starts_with("JSON error in 'maze.json'"));
        assert!(error.source().is_some());
    }

    // Tests data errors carry no underlying source
    // Verified by returning Some for every variant
    #[test]
    fn test_data_errors_have_no_source() {
        assert!(LevelError::EmptyGrid.source().is_none());
        assert!(invalid_parameter("width", &0, &"zero").source().is_none());
    }
}
