mod tests {
    use argb_flasher::{IndexPair, LedStateTable};

    const PAIR: IndexPair = IndexPair::from_byte(0x21);

    #[test]
    fn test_range_update() {
        let mut table = LedStateTable::<8>::new();
        assert_eq!(table.update_range(2, 5, PAIR), 4);
        for position in 0..8 {
            let expected = if (2..=5).contains(&position) {
                PAIR
            } else {
                IndexPair::OFF
            };
            assert_eq!(table.get(position), Some(expected), "LED {position}");
        }
    }

    #[test]
    fn test_end_is_clamped() {
        let mut table = LedStateTable::<8>::new();
        assert_eq!(table.update_range(2, 10, PAIR), 6);
        assert_eq!(table.get(0), Some(IndexPair::OFF));
        assert_eq!(table.get(1), Some(IndexPair::OFF));
        assert!((2..8).all(|position| table.get(position) == Some(PAIR)));
    }

    #[test]
    fn test_inverted_range_is_noop() {
        let mut table = LedStateTable::<8>::new();
        assert_eq!(table.update_range(5, 4, PAIR), 0);
        assert_eq!(table.update_range(9, 12, PAIR), 0);
        assert!(table.iter().all(|pair| pair == IndexPair::OFF));
    }

    #[test]
    fn test_single_led_range() {
        let mut table = LedStateTable::<4>::new();
        assert_eq!(table.update_range(3, 3, PAIR), 1);
        assert_eq!(table.get(3), Some(PAIR));
        assert_eq!(table.get(4), None);
    }

    #[test]
    fn test_zero_pair_overwrites() {
        let mut table = LedStateTable::<4>::new();
        table.update_range(0, 3, PAIR);
        table.update_range(1, 2, IndexPair::from_byte(0));
        assert_eq!(
            table.as_slice(),
            &[PAIR, IndexPair::OFF, IndexPair::OFF, PAIR]
        );
    }

    #[test]
    fn test_clear() {
        let mut table = LedStateTable::<4>::new();
        table.update_range(0, 3, PAIR);
        table.set(7, PAIR);
        table.clear();
        assert!(table.iter().all(|pair| pair == IndexPair::OFF));
    }

    #[test]
    fn test_empty_table() {
        let mut table = LedStateTable::<0>::new();
        assert_eq!(table.update_range(0, 0, PAIR), 0);
        assert_eq!(table.capacity(), 0);
    }
}
