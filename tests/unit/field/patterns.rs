//! Tests for analytic flow pattern generation and normalization

#[cfg(test)]
mod tests {
    use flowlic::field::{FlowPattern, Vec2, VectorField};

    const ALL_PATTERNS: [FlowPattern; 5] = [
        FlowPattern::Saddle,
        FlowPattern::Vortex,
        FlowPattern::Source,
        FlowPattern::Sink,
        FlowPattern::Uniform,
    ];

    // Tests every pattern has a singular cell at the integer center
    // Verified by offsetting the center by half a cell
    #[test]
    fn test_every_pattern_has_center_singularity() {
        for pattern in ALL_PATTERNS {
            let field = VectorField::generate(9, 9, pattern);

            assert_eq!(
                field.get(4, 4),
                Some(Vec2::ZERO),
                "{pattern:?} should be singular at the center"
            );
        }
    }

    // Tests saddle vectors swap the center offsets
    // Verified by using (dx, dy) instead of (dy, dx)
    #[test]
    fn test_saddle_vector_values() {
        let field = VectorField::generate(9, 9, FlowPattern::Saddle);

        assert_eq!(field.get(6, 4), Some(Vec2::new(0.0, 2.0)));
        assert_eq!(field.get(4, 1), Some(Vec2::new(-3.0, 0.0)));
        assert_eq!(field.get(5, 7), Some(Vec2::new(3.0, 1.0)));
    }

    #[test]
    fn test_vortex_and_radial_vector_values() {
        let vortex = VectorField::generate(9, 9, FlowPattern::Vortex);
        let source = VectorField::generate(9, 9, FlowPattern::Source);
        let sink = VectorField::generate(9, 9, FlowPattern::Sink);

        assert_eq!(vortex.get(6, 4), Some(Vec2::new(0.0, 2.0)));
        assert_eq!(vortex.get(4, 6), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(source.get(6, 5), Some(Vec2::new(2.0, 1.0)));
        assert_eq!(sink.get(6, 5), Some(Vec2::new(-2.0, -1.0)));
    }

    // Tests the uniform pattern has a stagnant core and constant flow elsewhere
    #[test]
    fn test_uniform_core() {
        let field = VectorField::generate(64, 64, FlowPattern::Uniform);

        assert_eq!(field.get(32, 32), Some(Vec2::ZERO));
        assert_eq!(field.get(35, 32), Some(Vec2::ZERO));
        assert_eq!(field.get(0, 0), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(field.get(63, 10), Some(Vec2::new(1.0, 1.0)));
    }

    // Tests rectangular grids keep width and height apart
    // Verified by swapping the array shape
    #[test]
    fn test_rectangular_dimensions() {
        let field = VectorField::generate(7, 5, FlowPattern::Saddle);

        assert_eq!(field.width(), 7);
        assert_eq!(field.height(), 5);
        assert_eq!(field.iter().count(), 35);
        assert!(field.get(6, 4).is_some());
        assert!(field.get(4, 6).is_none());
    }

    // Tests normalization yields unit vectors and keeps zero vectors zero
    // Verified by normalizing zero vectors to (1, 0)
    #[test]
    fn test_normalization_invariant() {
        for pattern in ALL_PATTERNS {
            let field = VectorField::generate(33, 21, pattern).into_normalized();
            let mut zero_count = 0;

            for v in field.iter() {
                if v.is_zero() {
                    zero_count += 1;
                } else {
                    assert!(
                        (v.length() - 1.0).abs() < 1e-5,
                        "{pattern:?} vector {v:?} is not unit length"
                    );
                }
            }

            assert!(zero_count >= 1, "{pattern:?} lost its singularity");
        }
    }

    #[test]
    fn test_from_fn_coordinates() {
        let field = VectorField::from_fn(4, 3, |col, row| Vec2::new(col as f32, row as f32));

        assert_eq!(field.get(3, 2), Some(Vec2::new(3.0, 2.0)));
        assert_eq!(field.get(1, 0), Some(Vec2::new(1.0, 0.0)));
    }
}
