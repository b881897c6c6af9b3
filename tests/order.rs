mod tests {
    use argb_flasher::{ChannelOrder, Rgb};

    const SAMPLE: Rgb = Rgb { r: 10, g: 20, b: 30 };

    #[test]
    fn test_each_order_wire_bytes() {
        let cases = [
            (ChannelOrder::Rgb, [10, 20, 30]),
            (ChannelOrder::Rbg, [10, 30, 20]),
            (ChannelOrder::Grb, [20, 10, 30]),
            (ChannelOrder::Gbr, [20, 30, 10]),
            (ChannelOrder::Bgr, [30, 20, 10]),
            (ChannelOrder::Brg, [30, 10, 20]),
        ];
        for (order, [r, g, b]) in cases {
            assert_eq!(order.apply(SAMPLE), Rgb { r, g, b }, "{order:?}");
        }
    }

    #[test]
    fn test_permutations_are_bijections() {
        for order in ChannelOrder::ALL {
            let mut seen = [false; 3];
            for channel in order.permutation() {
                assert!(!seen[channel], "{order:?} repeats channel {channel}");
                seen[channel] = true;
            }
            assert_eq!(seen, [true; 3]);
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        for order in ChannelOrder::ALL {
            let wire = order.apply(SAMPLE);
            assert_eq!(order.inverse().apply(wire), SAMPLE, "{order:?}");
        }
    }

    #[test]
    fn test_involutions() {
        for order in [
            ChannelOrder::Rgb,
            ChannelOrder::Rbg,
            ChannelOrder::Grb,
            ChannelOrder::Bgr,
        ] {
            assert_eq!(order.inverse(), order);
            assert_eq!(order.apply(order.apply(SAMPLE)), SAMPLE);
        }
        assert_eq!(ChannelOrder::Gbr.inverse(), ChannelOrder::Brg);
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(ChannelOrder::from_raw(1), Some(ChannelOrder::Rgb));
        assert_eq!(ChannelOrder::from_raw(6), Some(ChannelOrder::Brg));
        assert_eq!(ChannelOrder::from_raw(0), None);
        assert_eq!(ChannelOrder::from_raw_or_default(0), ChannelOrder::Grb);
        assert_eq!(ChannelOrder::from_raw_or_default(200), ChannelOrder::Grb);
        for order in ChannelOrder::ALL {
            assert_eq!(ChannelOrder::from_raw(order.as_raw()), Some(order));
        }
    }
}
