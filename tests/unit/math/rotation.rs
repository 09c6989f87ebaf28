//! Tests for quarter-turn rotations and mirror signs

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quadmaze::math::rotation::{Mirror, Rotation};

    const ALL_ROTATIONS: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    // Tests degree and quarter-turn values agree
    // Verified by returning 270 for Deg90
    #[test]
    fn test_degrees_and_quarter_turns() {
        for rotation in ALL_ROTATIONS {
            assert_eq!(
                rotation.degrees(),
                u16::from(rotation.quarter_turns()) * 90
            );
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(Rotation::default(), Rotation::Deg0);
    }

    // Tests angles wrap and non-right angles are rejected
    // Verified by removing the modulo
    #[test]
    fn test_from_degrees_wraps() {
        assert_eq!(Rotation::from_degrees(360), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(359), None);
    }

    // Tests a counter-clockwise turn moves the top-right pixel to the top-left
    // Verified by swapping the Deg90 and Deg270 arms
    #[test]
    fn test_counter_clockwise_pixel_mapping() {
        let size = 4;
        assert_eq!(Rotation::Deg90.source_pixel(0, 0, size), (3, 0));
        assert_eq!(Rotation::Deg270.source_pixel(0, 0, size), (0, 3));
        assert_eq!(Rotation::Deg180.source_pixel(0, 0, size), (3, 3));
        assert_eq!(Rotation::Deg0.source_pixel(1, 2, size), (1, 2));
    }

    // Tests rotations serialize as bare degree numbers
    // Verified by deriving Serialize without the u16 conversion
    #[test]
    fn test_rotation_serializes_as_degrees() {
        assert_eq!(serde_json::to_string(&Rotation::Deg90).unwrap(), "90");
        assert_eq!(serde_json::to_string(&Rotation::Deg0).unwrap(), "0");
        assert_eq!(u16::from(Rotation::Deg270), 270);
    }

    // Tests the four junction mirrors carry the expected signs
    // Verified by swapping FLIP_X and FLIP_Y
    #[test]
    fn test_mirror_signs() {
        assert_eq!(Mirror::IDENTITY.signs(), (1, 1));
        assert_eq!(Mirror::FLIP_X.signs(), (-1, 1));
        assert_eq!(Mirror::FLIP_XY.signs(), (-1, -1));
        assert_eq!(Mirror::FLIP_Y.signs(), (1, -1));
        assert_eq!(Mirror::FLIP_X.x(), -1);
        assert_eq!(Mirror::FLIP_Y.y(), -1);
        assert!(Mirror::IDENTITY.is_identity());
        assert!(!Mirror::FLIP_XY.is_identity());
        assert_eq!(Mirror::default(), Mirror::IDENTITY);
        assert_eq!(
            serde_json::to_string(&Mirror::FLIP_X).unwrap(),
            r#"{"x":-1,"y":1}"#
        );
    }

    // Tests mirror pixel mapping flips only the negative axes
    // Verified by flipping y for FLIP_X
    #[test]
    fn test_mirror_pixel_mapping() {
        let size = 5;
        assert_eq!(Mirror::IDENTITY.source_pixel(1, 2, size), (1, 2));
        assert_eq!(Mirror::FLIP_X.source_pixel(1, 2, size), (3, 2));
        assert_eq!(Mirror::FLIP_Y.source_pixel(1, 2, size), (1, 2));
        assert_eq!(Mirror::FLIP_XY.source_pixel(0, 0, size), (4, 4));
    }

    proptest! {
        // Four quarter turns bring every pixel back to where it started
        #[test]
        fn prop_four_turns_are_identity(size in 1u32..32, x in 0u32..32, y in 0u32..32) {
            let (x, y) = (x % size, y % size);
            let mut pixel = (x, y);
            for _ in 0..4 {
                pixel = Rotation::Deg90.source_pixel(pixel.0, pixel.1, size);
            }
            prop_assert_eq!(pixel, (x, y));
        }

        // Composed quarter turns agree with the direct rotation
        #[test]
        fn prop_turns_compose(size in 1u32..32, x in 0u32..32, y in 0u32..32) {
            let (x, y) = (x % size, y % size);
            let once = Rotation::Deg90.source_pixel(x, y, size);
            let twice = Rotation::Deg90.source_pixel(once.0, once.1, size);
            let thrice = Rotation::Deg90.source_pixel(twice.0, twice.1, size);
            prop_assert_eq!(twice, Rotation::Deg180.source_pixel(x, y, size));
            prop_assert_eq!(thrice, Rotation::Deg270.source_pixel(x, y, size));
        }

        // Mirroring twice is the identity
        #[test]
        fn prop_mirror_is_involution(size in 1u32..32, x in 0u32..32, y in 0u32..32) {
            let (x, y) = (x % size, y % size);
            for mirror in [Mirror::IDENTITY, Mirror::FLIP_X, Mirror::FLIP_XY, Mirror::FLIP_Y] {
                let (mx, my) = mirror.source_pixel(x, y, size);
                prop_assert_eq!(mirror.source_pixel(mx, my, size), (x, y));
            }
        }
    }
}
