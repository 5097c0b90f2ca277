mod tests {
    use myrtio_ring_animator::wrap::{decrement_wrapped, increment_wrapped};

    #[test]
    fn test_increment_wrapped() {
        assert_eq!(increment_wrapped(0, 10), 1);
        assert_eq!(increment_wrapped(8, 10), 9);
        assert_eq!(increment_wrapped(9, 10), 0);
        assert_eq!(increment_wrapped(0, 1), 0);
    }

    #[test]
    fn test_decrement_wrapped() {
        assert_eq!(decrement_wrapped(9, 10), 8);
        assert_eq!(decrement_wrapped(1, 10), 0);
        assert_eq!(decrement_wrapped(0, 10), 9);
        assert_eq!(decrement_wrapped(0, 1), 0);
    }

    #[test]
    fn test_wrapped_are_inverse() {
        for limit in 1..=16 {
            for value in 0..limit {
                let down = decrement_wrapped(value, limit);
                assert_eq!(increment_wrapped(down, limit), value);
                let up = increment_wrapped(value, limit);
                assert_eq!(decrement_wrapped(up, limit), value);
            }
        }
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        let limit = 7;
        let mut value = 3;
        for _ in 0..limit {
            value = increment_wrapped(value, limit);
        }
        assert_eq!(value, 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ring index out of range")]
    fn test_increment_out_of_range_panics() {
        let _ = increment_wrapped(10, 10);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ring index out of range")]
    fn test_decrement_out_of_range_panics() {
        let _ = decrement_wrapped(4, 3);
    }
}
