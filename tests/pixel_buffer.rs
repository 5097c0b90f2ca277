mod tests {
    use myrtio_ring_animator::{BLUE, OFF, PixelBuffer, RED};

    #[test]
    fn test_new_buffer_is_dark() {
        let leds = PixelBuffer::<10>::new();
        assert_eq!(leds.len(), 10);
        assert_eq!(leds.lit_count(), 0);
        assert!(leds.as_slice().iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_set_and_get() {
        let mut leds = PixelBuffer::<4>::new();
        leds.set(0, RED);
        leds.set(3, BLUE);
        assert_eq!(leds.get(0), RED);
        assert_eq!(leds.get(1), OFF);
        assert_eq!(leds.get(3), BLUE);
        assert!(leds.is_lit(3));
        assert!(!leds.is_lit(2));
        assert_eq!(leds.lit_count(), 2);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut leds = PixelBuffer::<5>::new();
        leds.fill(RED);
        assert_eq!(leds.as_slice(), &[RED; 5]);
        leds.clear();
        assert_eq!(leds, PixelBuffer::<5>::default());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut leds = PixelBuffer::<3>::new();
        leds.set(3, RED);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let leds = PixelBuffer::<3>::new();
        let _ = leds.get(7);
    }
}
