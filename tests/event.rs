mod tests {
    use argb_flasher::event::{ActionMask, MAX_UPDATES, decode_delivery};
    use argb_flasher::{DecodeError, IndexPair, LedEvent, LedStateTable, Polarity, RangeUpdate};

    const ON_OPCODE: u8 = 0x90;
    const OFF_OPCODE: u8 = 0x91;

    fn pair(byte: u8) -> IndexPair {
        IndexPair::from_byte(byte)
    }

    #[test]
    fn test_polarity_from_opcode() {
        assert_eq!(Polarity::from_opcode(ON_OPCODE), Polarity::On);
        assert_eq!(Polarity::from_opcode(OFF_OPCODE), Polarity::Off);
        assert_eq!(Polarity::from_opcode(0x98), Polarity::On);
        assert_eq!(Polarity::from_opcode(0x99), Polarity::Off);
    }

    #[test]
    fn test_action_mask() {
        assert!(ActionMask::ON.applies_to(Polarity::On));
        assert!(!ActionMask::ON.applies_to(Polarity::Off));
        assert!(ActionMask::OFF.applies_to(Polarity::Off));
        assert!(!ActionMask::OFF.applies_to(Polarity::On));
        assert!(ActionMask::BOTH.applies_to(Polarity::On));
        assert!(ActionMask::BOTH.applies_to(Polarity::Off));
        assert!(!ActionMask::NONE.applies_to(Polarity::On));
        assert!(!ActionMask::NONE.applies_to(Polarity::Off));
    }

    #[test]
    fn test_decode_groups() {
        let params = [1, 0, 3, 0x01, 2, 4, 7, 0x23, 9, 9];
        let event = LedEvent::decode(ON_OPCODE, &params);
        assert_eq!(event.polarity(), Polarity::On);
        assert_eq!(
            event.updates(),
            &[
                RangeUpdate {
                    action: ActionMask::ON,
                    start: 0,
                    end: 3,
                    pair: pair(0x01),
                },
                RangeUpdate {
                    action: ActionMask::OFF,
                    start: 4,
                    end: 7,
                    pair: pair(0x23),
                },
            ]
        );
        assert_eq!(event.updates()[1].to_bytes(), [2, 4, 7, 0x23]);
    }

    #[test]
    fn test_decode_caps_updates() {
        let params = [3u8; 300];
        let event = LedEvent::decode(ON_OPCODE, &params);
        assert_eq!(event.updates().len(), MAX_UPDATES);
    }

    #[test]
    fn test_on_event_applies_on_groups_only() {
        let params = [1, 0, 1, 0x11, 2, 2, 3, 0x22, 3, 4, 5, 0x33, 0, 6, 7, 0x44];
        let mut table = LedStateTable::<8>::new();
        let applied = LedEvent::decode(ON_OPCODE, &params).apply(&mut table);
        assert_eq!(applied, 2);
        assert_eq!(
            table.as_slice(),
            &[
                pair(0x11),
                pair(0x11),
                IndexPair::OFF,
                IndexPair::OFF,
                pair(0x33),
                pair(0x33),
                IndexPair::OFF,
                IndexPair::OFF,
            ]
        );
    }

    #[test]
    fn test_off_event_applies_off_groups_only() {
        let params = [1, 0, 1, 0x11, 2, 2, 3, 0x22, 3, 4, 5, 0x33];
        let mut table = LedStateTable::<8>::new();
        let applied = LedEvent::decode(OFF_OPCODE, &params).apply(&mut table);
        assert_eq!(applied, 2);
        assert_eq!(table.get(0), Some(IndexPair::OFF));
        assert_eq!(table.get(2), Some(pair(0x22)));
        assert_eq!(table.get(3), Some(pair(0x22)));
        assert_eq!(table.get(4), Some(pair(0x33)));
    }

    #[test]
    fn test_later_group_wins() {
        let params = [1, 0, 5, 0x11, 1, 3, 7, 0x55];
        let mut table = LedStateTable::<8>::new();
        LedEvent::decode(ON_OPCODE, &params).apply(&mut table);
        assert_eq!(table.get(2), Some(pair(0x11)));
        assert_eq!(table.get(3), Some(pair(0x55)));
        assert_eq!(table.get(7), Some(pair(0x55)));
    }

    #[test]
    fn test_decode_failure_has_no_event() {
        assert_eq!(decode_delivery(ON_OPCODE, Err(DecodeError)), None);
        assert!(decode_delivery(ON_OPCODE, Ok(&[1u8, 0, 0, 1][..])).is_some());
    }
}
