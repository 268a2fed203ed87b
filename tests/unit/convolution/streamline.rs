//! Tests for single-direction streamline integration

#[cfg(test)]
mod tests {
    use flowlic::convolution::{Direction, KernelTable, StreamlineSettings};
    use flowlic::field::{Vec2, VectorField};
    use flowlic::texture::Texture;

    const SETTINGS: StreamlineSettings = StreamlineSettings {
        kernel_length: 8.0,
        line_square_clip_max: 100_000.0,
        vector_component_minimum: 0.05,
    };

    fn uniform_field(size: usize, v: Vec2) -> VectorField {
        VectorField::from_fn(size, size, |_, _| v)
    }

    // Tests the step bound is three steps per unit of kernel length
    #[test]
    fn test_max_steps() {
        assert_eq!(SETTINGS.max_steps(), 24);
        let short = StreamlineSettings {
            kernel_length: 2.5,
            ..SETTINGS
        };
        assert_eq!(short.max_steps(), 7);
    }

    // Tests right and bottom edges are measured from floor(c + 1.5)
    // Verified by using floor(c) + 1 for the far edge
    #[test]
    fn test_segment_length_far_edges() {
        assert_eq!(SETTINGS.segment_length(0.5, 0.5, Vec2::new(1.0, 0.0)), 1.5);
        assert_eq!(SETTINGS.segment_length(0.5, 0.5, Vec2::new(0.0, 1.0)), 1.5);
        // floor(3.2 + 1.5) = 4
        let s = SETTINGS.segment_length(3.2, 0.5, Vec2::new(1.0, 0.0));
        assert!((s - 0.8).abs() < 1e-5);
    }

    // Tests left and top edges are measured from floor(c)
    #[test]
    fn test_segment_length_near_edges() {
        assert_eq!(SETTINGS.segment_length(2.5, 0.5, Vec2::new(-1.0, 0.0)), 0.5);
        assert_eq!(SETTINGS.segment_length(0.5, 2.5, Vec2::new(0.0, -1.0)), 0.5);
    }

    // Tests the tightest applicable edge wins
    #[test]
    fn test_segment_length_minimum_of_edges() {
        let v = Vec2::new(0.6, -0.8);
        let s = SETTINGS.segment_length(1.5, 1.5, v);

        // right edge: (3 - 1.5) / 0.6 = 2.5, top edge: (1 - 1.5) / -0.8 = 0.625
        assert!((s - 0.625).abs() < 1e-6);
    }

    // Tests components at or below the minimum never bound the segment
    // Verified by comparing against zero instead of the minimum
    #[test]
    fn test_segment_length_ignores_small_components() {
        let s = SETTINGS.segment_length(1.5, 1.5, Vec2::new(0.05, -0.01));

        assert_eq!(s, 100_000.0);
    }

    // Tests a singular starting cell contributes zero texture with unit weight
    // Verified by leaving the accumulator at zero weight
    #[test]
    fn test_singular_start_gives_neutral_contribution() {
        let field = uniform_field(8, Vec2::ZERO);
        let texture = Texture::filled(8, 8, 200);
        let kernel = KernelTable::box_filter(2048, 8.0);

        for direction in Direction::BOTH {
            let acc = SETTINGS.integrate(&field, &texture, &kernel, 3, 3, direction);

            assert_eq!(acc.texture, 0.0);
            assert_eq!(acc.weight, 1.0);
            assert_eq!(acc.steps, 0);
        }
    }

    // Tests reaching a singularity mid-streamline keeps the partial sum
    #[test]
    fn test_singularity_midway_stops_integration() {
        let field = VectorField::from_fn(16, 16, |col, _| {
            if col >= 6 {
                Vec2::ZERO
            } else {
                Vec2::new(1.0, 0.0)
            }
        });
        let texture = Texture::filled(16, 16, 10);
        let kernel = KernelTable::box_filter(2048, 8.0);

        let acc = SETTINGS.integrate(&field, &texture, &kernel, 3, 8, Direction::Forward);

        assert!(acc.steps >= 1);
        assert!(acc.weight > 1.0 && acc.weight < 2047.0);
        assert_eq!(acc.texture, acc.weight * 10.0);
    }

    // Tests a streamline that stays inside reaches the full kernel weight
    // Verified by skipping the final clip to kernel_length
    #[test]
    fn test_full_length_streamline() {
        let field = uniform_field(64, Vec2::new(1.0, 0.0));
        let texture = Texture::filled(64, 64, 100);
        let kernel = KernelTable::box_filter(2048, 8.0);

        let forward = SETTINGS.integrate(&field, &texture, &kernel, 10, 32, Direction::Forward);
        let backward = SETTINGS.integrate(&field, &texture, &kernel, 40, 32, Direction::Backward);

        for acc in [forward, backward] {
            assert_eq!(acc.weight, 2047.0);
            assert_eq!(acc.texture, 204_700.0);
            assert!(acc.steps <= SETTINGS.max_steps());
        }
    }

    // Tests samples come from the segment midpoint along the oriented vector
    #[test]
    fn test_backward_samples_against_the_field() {
        let field = uniform_field(32, Vec2::new(1.0, 0.0));
        let texture = Texture::from_fn(32, 32, |col, _| if col < 16 { 50 } else { 250 });
        let kernel = KernelTable::box_filter(2048, 8.0);

        let forward = SETTINGS.integrate(&field, &texture, &kernel, 16, 16, Direction::Forward);
        let backward = SETTINGS.integrate(&field, &texture, &kernel, 15, 16, Direction::Backward);

        assert_eq!(forward.texture, forward.weight * 250.0);
        assert_eq!(backward.texture, backward.weight * 50.0);
    }

    // Tests leaving the field through a corner never indexes outside the buffers
    // Verified by removing the midpoint clamp
    #[test]
    fn test_corner_exit_is_clamped() {
        let field = uniform_field(8, Vec2::new(-1.0, -1.0).normalized());
        let texture = Texture::filled(8, 8, 90);
        let kernel = KernelTable::box_filter(2048, 8.0);

        let acc = SETTINGS.integrate(&field, &texture, &kernel, 0, 0, Direction::Forward);

        assert_eq!(acc.steps, 1);
        assert!(acc.weight > 0.0);
        assert_eq!(acc.texture, acc.weight * 90.0);
    }

    // Tests pathologically short segments stop at the step bound
    // Verified by removing the step counter from the loop condition
    #[test]
    fn test_tiny_segments_hit_step_bound() {
        let settings = StreamlineSettings {
            line_square_clip_max: 0.001,
            ..SETTINGS
        };
        let field = uniform_field(32, Vec2::new(1.0, 0.0));
        let texture = Texture::filled(32, 32, 1);
        let kernel = KernelTable::box_filter(2048, 8.0);

        let acc = settings.integrate(&field, &texture, &kernel, 16, 16, Direction::Forward);

        assert_eq!(acc.steps, 24);
        assert!(acc.weight < 2047.0);
    }

    // Tests tiny non-zero components fall back to the clip bound and still terminate
    #[test]
    fn test_tiny_components_terminate() {
        let field = uniform_field(32, Vec2::new(1e-6, 1e-6));
        let texture = Texture::filled(32, 32, 1);
        let kernel = KernelTable::box_filter(2048, 8.0);

        let acc = SETTINGS.integrate(&field, &texture, &kernel, 16, 16, Direction::Forward);

        assert!(acc.steps <= SETTINGS.max_steps());
        assert_eq!(acc.weight, 2047.0);
    }
}
