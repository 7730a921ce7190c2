//! Tests for synthesis configuration validation and warnings

#[cfg(test)]
mod tests {
    use sirds::io::configuration::{DEFAULT_PATTERN_WIDTH, DEFAULT_SCALE};
    use sirds::{ConfigurationWarning, Direction, SynthesisConfig, SynthesisError};

    // Tests direction signs
    // Verified by swapping the discriminants
    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::WallEyed.sign(), 1);
        assert_eq!(Direction::CrossEyed.sign(), -1);
        assert_eq!(Direction::default(), Direction::WallEyed);
    }

    // Tests defaults come from the configuration constants and raise no warning
    // Verified by lowering the default pattern width below the default displacement
    #[test]
    fn test_default_config_is_sane() {
        let config = SynthesisConfig::default();

        assert_eq!(config.pattern_width, DEFAULT_PATTERN_WIDTH);
        assert!((config.scale - DEFAULT_SCALE).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
        assert_eq!(config.check(), None);
    }

    // Tests the warning fires exactly when round(255 * scale) reaches the pattern width
    // Verified by using a strict greater-than comparison
    #[test]
    fn test_check_boundary() {
        let below = SynthesisConfig::new(33, 0.125, Direction::WallEyed);
        assert_eq!(below.check(), None);

        let equal = SynthesisConfig::new(32, 0.125, Direction::CrossEyed);
        assert_eq!(
            equal.check(),
            Some(ConfigurationWarning::DisplacementExceedsPeriod {
                max_offset: 32,
                pattern_width: 32,
            })
        );
    }

    // Tests zero pattern width is rejected
    // Verified by removing the zero check
    #[test]
    fn test_validate_rejects_zero_pattern_width() {
        let config = SynthesisConfig::new(0, 0.1, Direction::WallEyed);
        assert!(matches!(
            config.validate(),
            Err(SynthesisError::InvalidParameter {
                parameter: "pattern_width",
                ..
            })
        ));
    }

    // Tests non-positive and non-finite scales are rejected
    // Verified by accepting zero scale
    #[test]
    fn test_validate_rejects_bad_scale() {
        for scale in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = SynthesisConfig::new(140, scale, Direction::WallEyed);
            assert!(
                matches!(
                    config.validate(),
                    Err(SynthesisError::InvalidParameter {
                        parameter: "scale",
                        ..
                    })
                ),
                "scale {scale} should be rejected"
            );
        }
    }

    // Tests output width adds one pattern period
    // Verified by adding two periods
    #[test]
    fn test_output_width() {
        let config = SynthesisConfig::new(3, 1.0, Direction::WallEyed);
        assert_eq!(config.output_width(4), 7);
    }
}
