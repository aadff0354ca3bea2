mod tests {
    use embassy_time::Duration;
    use touch_strip_controller::animation::{
        DOT_STEP, DotSweep, FadeSweep, GRADIENT_STEP, GradientSweep, step_delay,
    };
    use touch_strip_controller::color::{Rgb, hsv_to_rgb_bytes};
    use touch_strip_controller::frame::{BLACK, Frame, STRIP_LENGTH};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    fn base_rainbow(saturation: f32, value: f32) -> Frame {
        let mut frame = [BLACK; STRIP_LENGTH];
        for (i, led) in frame.iter_mut().enumerate() {
            *led = hsv_to_rgb_bytes(i as f32 / STRIP_LENGTH as f32, saturation, value);
        }
        frame
    }

    #[test]
    fn test_gradient_full_cycle_is_identity() {
        let frames: Vec<Frame> = GradientSweep::new(1.0, 0.5).collect();
        assert_eq!(frames.len(), STRIP_LENGTH);
        // Rotating left 16 times lands back on the unrotated rainbow.
        assert_eq!(frames[STRIP_LENGTH - 1], base_rainbow(1.0, 0.5));
    }

    #[test]
    fn test_gradient_steps_rotate_left() {
        let base = base_rainbow(1.0, 1.0);
        let frames: Vec<Frame> = GradientSweep::new(1.0, 1.0).collect();
        for (step, frame) in frames.iter().enumerate() {
            for i in 0..STRIP_LENGTH {
                assert_eq!(frame[i], base[(i + step + 1) % STRIP_LENGTH]);
            }
        }
    }

    #[test]
    fn test_dot_forward_pass_positions() {
        let frames: Vec<Frame> = DotSweep::new(RED).collect();
        assert_eq!(frames.len(), 30);
        for (k, frame) in frames.iter().take(15).enumerate() {
            assert_eq!(frame[k + 1], RED, "forward step {k}");
        }
    }

    #[test]
    fn test_dot_returns_to_start() {
        let frames: Vec<Frame> = DotSweep::new(RED).collect();
        let last = frames.last().unwrap();
        assert_eq!(last[0], RED);
    }

    #[test]
    fn test_dot_has_exactly_one_lit_led_per_step() {
        for frame in DotSweep::new(RED) {
            let lit = frame.iter().filter(|led| **led != BLACK).count();
            assert_eq!(lit, 1);
        }
    }

    #[test]
    fn test_fade_schedule_rises_then_falls() {
        // Hue 0 at full saturation puts the value straight into the red
        // channel, so the byte sequence mirrors the value schedule.
        let frames: Vec<Frame> = FadeSweep::new(0.0, 1.0, STRIP_LENGTH).collect();
        assert_eq!(frames.len(), 40);

        // 0.05 * 255 truncates to 12.
        assert_eq!(frames[0][0].r, 12);
        assert_eq!(frames[19][0].r, 255);
        assert_eq!(frames[20][0].r, 255);
        assert_eq!(frames[39][0].r, 12);

        for pair in frames[..20].windows(2) {
            assert!(pair[0][0].r <= pair[1][0].r);
        }
        for pair in frames[20..].windows(2) {
            assert!(pair[0][0].r >= pair[1][0].r);
        }
    }

    #[test]
    fn test_fade_honors_active_count() {
        for frame in FadeSweep::new(0.0, 1.0, 4) {
            assert!(frame[4..].iter().all(|led| *led == BLACK));
            assert!(frame[..4].iter().all(|led| *led != BLACK));
        }
    }

    #[test]
    fn test_step_delay_defaults_to_base_cadence() {
        assert_eq!(step_delay(GRADIENT_STEP, None), Duration::from_millis(75));
        assert_eq!(step_delay(DOT_STEP, None), Duration::from_millis(100));
    }

    #[test]
    fn test_step_delay_velocity_contract() {
        // 50 is neutral, 0 halves the speed, 100 runs at 1.5x.
        assert_eq!(step_delay(GRADIENT_STEP, Some(50.0)), Duration::from_millis(75));
        assert_eq!(step_delay(GRADIENT_STEP, Some(0.0)), Duration::from_millis(150));
        assert_eq!(step_delay(GRADIENT_STEP, Some(100.0)), Duration::from_millis(50));
        // Out-of-range velocities are clamped, not trusted.
        assert_eq!(
            step_delay(GRADIENT_STEP, Some(1000.0)),
            step_delay(GRADIENT_STEP, Some(100.0))
        );
        assert_eq!(
            step_delay(GRADIENT_STEP, Some(-20.0)),
            step_delay(GRADIENT_STEP, Some(0.0))
        );
    }
}
