//! Tests for quadrant-to-level mirroring

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quadmaze::LevelError;
    use quadmaze::algorithm::classify::classify;
    use quadmaze::algorithm::mirror::{expand, full_dimensions, mirror_images, quadrant_source};
    use quadmaze::io::quadrant::{decode_rows, sample_quadrant};
    use quadmaze::spatial::grid::OrientationGrid;
    use quadmaze::spatial::tiles::{OrientationTag, TileCategory};

    fn random_rows() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..7, 1usize..7).prop_flat_map(|(height, width)| {
            prop::collection::vec(prop::collection::vec(0i64..9, width), height)
        })
    }

    // Tests the reference quadrant expands to 29 x 28
    // Verified by duplicating the axis row
    #[test]
    fn test_sample_dimensions() {
        let quadrant = sample_quadrant().unwrap();
        let level = expand(&quadrant, &classify(&quadrant)).unwrap();
        assert_eq!(level.dimensions(), (29, 28));
        assert_eq!(level.orientation().dimensions(), (29, 28));
        assert_eq!(full_dimensions((15, 14)), (29, 28));
        assert_eq!(full_dimensions((1, 1)), (1, 2));
    }

    // Tests the top-left cell lands in all four level corners with its tag
    // Verified by mirroring columns about 2w - 2
    #[test]
    fn test_corner_cell_has_four_images() {
        let quadrant = sample_quadrant().unwrap();
        let level = expand(&quadrant, &classify(&quadrant)).unwrap();
        for (row, col) in [(0, 0), (0, 27), (28, 0), (28, 27)] {
            assert_eq!(
                level.cell(row, col),
                Some((TileCategory::OutsideCorner, OrientationTag::Corner))
            );
        }
        assert_eq!(
            level.cell(0, 13),
            Some((TileCategory::TJunction, OrientationTag::Corner))
        );
        assert_eq!(
            level.cell(0, 14),
            Some((TileCategory::TJunction, OrientationTag::Corner))
        );
        assert_eq!(level.cell(29, 0), None);
    }

    // Tests axis-row cells are copied once per side, never below the axis
    // Verified by yielding four images for every row
    #[test]
    fn test_axis_row_copied_once() {
        let images: Vec<_> = mirror_images(14, 3, (15, 14)).collect();
        assert_eq!(images, vec![(14, 3), (14, 24)]);

        let images: Vec<_> = mirror_images(0, 0, (15, 14)).collect();
        assert_eq!(images, vec![(0, 0), (0, 27), (28, 0), (28, 27)]);
    }

    // Tests a single-row quadrant only gains its mirrored columns
    // Verified by computing 2h rows instead of 2h - 1
    #[test]
    fn test_single_row_quadrant() {
        let quadrant = decode_rows(&[vec![1, 2]]).unwrap();
        let level = expand(&quadrant, &classify(&quadrant)).unwrap();
        assert_eq!(level.dimensions(), (1, 4));
        assert_eq!(level.tiles().to_string(), "+==+\n");
    }

    // Tests mismatched tag grids are rejected
    // Verified by reading tags out of bounds as NotApplicable
    #[test]
    fn test_orientation_shape_mismatch() {
        let quadrant = sample_quadrant().unwrap();
        let tags = OrientationGrid::filled(2, 2, OrientationTag::NotApplicable);
        assert!(matches!(
            expand(&quadrant, &tags),
            Err(LevelError::InvalidParameter {
                parameter: "orientation",
                ..
            })
        ));
    }

    proptest! {
        // Every level cell equals its left-right and top-bottom reflections
        #[test]
        fn prop_level_is_symmetric(rows in random_rows()) {
            let quadrant = decode_rows(&rows).unwrap();
            let level = expand(&quadrant, &classify(&quadrant)).unwrap();
            let (height, width) = level.dimensions();

            for row in 0..height {
                for col in 0..width {
                    let cell = level.cell(row, col);
                    prop_assert_eq!(cell, level.cell(row, width - 1 - col));
                    prop_assert_eq!(cell, level.cell(height - 1 - row, col));
                }
            }
        }

        // Every level cell reads back the quadrant cell it was copied from
        #[test]
        fn prop_source_inverts_images(rows in random_rows()) {
            let quadrant = decode_rows(&rows).unwrap();
            let dims = quadrant.dimensions();
            for ((row, col), _) in quadrant.iter() {
                for (level_row, level_col) in mirror_images(row, col, dims) {
                    prop_assert_eq!(quadrant_source(level_row, level_col, dims), (row, col));
                }
            }

            let level = expand(&quadrant, &classify(&quadrant)).unwrap();
            for ((row, col), category) in level.tiles().iter() {
                let (source_row, source_col) = quadrant_source(row, col, dims);
                prop_assert_eq!(quadrant.get(source_row, source_col), Some(category));
            }
        }
    }
}
