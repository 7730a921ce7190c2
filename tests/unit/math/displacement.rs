//! Tests for depth-to-displacement conversion

#[cfg(test)]
mod tests {
    use sirds::Direction;
    use sirds::math::displacement::{DisplacementTable, depth_offset, max_offset};

    // Tests the documented example of full depth at scale 1/8
    // Verified by truncating instead of rounding
    #[test]
    fn test_depth_offset_full_depth() {
        assert_eq!(depth_offset(255, 0.125, Direction::WallEyed), 32);
        assert_eq!(depth_offset(255, 0.125, Direction::CrossEyed), -32);
    }

    // Tests zero depth never displaces
    // Verified by adding a constant bias
    #[test]
    fn test_depth_offset_zero_depth() {
        assert_eq!(depth_offset(0, 0.9, Direction::WallEyed), 0);
        assert_eq!(depth_offset(0, 0.9, Direction::CrossEyed), 0);
    }

    // Tests halves round away from zero in both directions
    // Verified by using round-half-even
    #[test]
    fn test_depth_offset_rounds_half_away_from_zero() {
        assert_eq!(depth_offset(1, 0.5, Direction::WallEyed), 1);
        assert_eq!(depth_offset(1, 0.5, Direction::CrossEyed), -1);
        assert_eq!(depth_offset(5, 0.5, Direction::WallEyed), 3);
    }

    // Tests maximum offset formula
    // Verified by using 256 depth levels instead of 255
    #[test]
    fn test_max_offset() {
        assert_eq!(max_offset(0.125), 32);
        assert_eq!(max_offset(0.25), 64);
        assert_eq!(max_offset(1.0), 255);
    }

    // Tests table lookups match direct computation for every depth
    // Verified by skipping the last table entry
    #[test]
    fn test_displacement_table_matches_direct_computation() {
        for direction in [Direction::WallEyed, Direction::CrossEyed] {
            let table = DisplacementTable::new(0.3, direction);
            for depth in 0..=u8::MAX {
                assert_eq!(table.offset(depth), depth_offset(depth, 0.3, direction));
            }
        }
    }

    // Tests table magnitude ignores the sign
    // Verified by taking the signed maximum
    #[test]
    fn test_displacement_table_max_magnitude() {
        let table = DisplacementTable::new(0.125, Direction::CrossEyed);
        assert_eq!(table.max_magnitude(), 32);
    }

    // Tests huge scales saturate instead of overflowing
    // Verified by using the plain absolute value
    #[test]
    fn test_displacement_table_saturates() {
        let table = DisplacementTable::new(1e20, Direction::CrossEyed);
        assert_eq!(table.offset(255), i64::MIN);
        assert_eq!(table.max_magnitude(), i64::MAX);
    }
}
