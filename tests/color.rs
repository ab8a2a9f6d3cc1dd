mod tests {
    use myrtio_led_console::color::{IDENTITY, correct_xyy, invert_3x3};
    use myrtio_led_console::{Fixed, LedInfo, Matrix3};

    fn matrix(values: [f32; 9]) -> Matrix3 {
        values.map(Fixed::from_f32)
    }

    fn product(a: &Matrix3, b: &Matrix3) -> [f32; 9] {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[3 * row + col] = (0..3)
                    .map(|k| a[3 * row + k].to_f32() * b[3 * k + col].to_f32())
                    .sum();
            }
        }
        out
    }

    fn srgb_led() -> LedInfo {
        let primaries = matrix([0.64, 0.30, 0.15, 0.33, 0.60, 0.06, 1.0, 1.0, 1.0]);
        LedInfo {
            channels: [0, 1, 2],
            color_matrix: invert_3x3(&primaries).unwrap(),
            peak_y: [0.2126, 0.7152, 0.0722].map(Fixed::from_f32),
        }
    }

    #[test]
    fn test_invert_identity() {
        assert_eq!(invert_3x3(&IDENTITY), Some(IDENTITY));
    }

    #[test]
    fn test_invert_scaling() {
        let scaled = matrix([2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.5]);
        let inverse = invert_3x3(&scaled).unwrap();
        assert_eq!(
            inverse,
            matrix([0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 2.0])
        );
    }

    #[test]
    fn test_invert_gives_identity_product() {
        let primaries = matrix([0.64, 0.30, 0.15, 0.33, 0.60, 0.06, 1.0, 1.0, 1.0]);
        let inverse = invert_3x3(&primaries).unwrap();

        for (i, value) in product(&primaries, &inverse).into_iter().enumerate() {
            let expected = if i % 4 == 0 { 1.0 } else { 0.0 };
            assert!((value - expected).abs() < 1.0e-3, "{i}: {value}");
        }
    }

    #[test]
    fn test_invert_singular() {
        let repeated_row = matrix([1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 0.0, 1.0, 1.0]);
        assert_eq!(invert_3x3(&repeated_row), None);
        assert_eq!(invert_3x3(&[Fixed::ZERO; 9]), None);
    }

    #[test]
    fn test_correct_white_point() {
        let led = srgb_led();
        let x = Fixed::from_f32(0.3127);
        let y = Fixed::from_f32(0.3290);

        for level in correct_xyy(&led, x, y, Fixed::ONE) {
            assert!(level >= 65000, "{level}");
        }
        for level in correct_xyy(&led, x, y, Fixed::from_f32(0.25)) {
            assert!((16000..=16800).contains(&level), "{level}");
        }
    }

    #[test]
    fn test_correct_primary() {
        let led = srgb_led();
        let levels = correct_xyy(
            &led,
            Fixed::from_f32(0.30),
            Fixed::from_f32(0.60),
            Fixed::from_f32(0.7152),
        );
        assert!(levels[0] < 200, "{levels:?}");
        assert!(levels[1] > 65000, "{levels:?}");
        assert!(levels[2] < 200, "{levels:?}");
    }

    #[test]
    fn test_correct_clamps_to_full_scale() {
        let led = srgb_led();
        let levels = correct_xyy(
            &led,
            Fixed::from_f32(0.3127),
            Fixed::from_f32(0.3290),
            Fixed::from_int(10),
        );
        assert_eq!(levels, [u16::MAX; 3]);
    }

    #[test]
    fn test_correct_degenerate_input() {
        let led = srgb_led();
        assert_eq!(correct_xyy(&led, Fixed::ONE, Fixed::ZERO, Fixed::ONE), [0; 3]);

        let mut dark_blue = srgb_led();
        dark_blue.peak_y[2] = Fixed::ZERO;
        let levels = correct_xyy(
            &dark_blue,
            Fixed::from_f32(0.3127),
            Fixed::from_f32(0.3290),
            Fixed::ONE,
        );
        assert_eq!(levels[2], 0);
        assert!(levels[0] > 0);

        let singular = LedInfo {
            color_matrix: [Fixed::ZERO; 9],
            ..srgb_led()
        };
        assert_eq!(correct_xyy(&singular, Fixed::ONE, Fixed::ONE, Fixed::ONE), [0; 3]);
    }
}
