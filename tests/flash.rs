mod tests {
    use argb_flasher::{
        ChannelOrder, ConfigStore, FlashScheduler, IndexPair, LedStateTable, Palette, PaletteIndex,
        Phase, Rgb,
    };

    #[test]
    fn test_phase_toggles() {
        assert_eq!(Phase::On.toggled(), Phase::Off);
        assert_eq!(Phase::Off.toggled(), Phase::On);
        assert!(Phase::On.is_on());
    }

    #[test]
    fn test_tick_renders_selected_index() {
        let mut config = ConfigStore::new();
        config.set_channel_order(ChannelOrder::Grb);
        let palette = Palette::new(&config);

        let mut table = LedStateTable::<3>::new();
        // on = red (9), off = blue (11)
        table.update_range(0, 1, IndexPair::from_byte(0xB9));

        let mut flash = FlashScheduler::new();
        let mut frame = [Rgb::default(); 3];
        assert_eq!(flash.phase(), Phase::Off);

        assert_eq!(flash.tick(&table, &palette, &mut frame), Phase::On);
        // red in GRB order
        assert_eq!(frame[0], Rgb { r: 0, g: 0xFF, b: 0 });
        assert_eq!(frame[2], Rgb::default());

        assert_eq!(flash.tick(&table, &palette, &mut frame), Phase::Off);
        assert_eq!(frame[1], Rgb { r: 0, g: 0, b: 0xFF });

        flash.reset();
        assert_eq!(flash.phase(), Phase::Off);
    }

    #[test]
    fn test_steady_pair_does_not_flash() {
        let config = ConfigStore::new();
        let palette = Palette::new(&config);
        let mut table = LedStateTable::<2>::new();
        table.update_range(0, 1, IndexPair::steady(PaletteIndex::new(15).unwrap()));

        let mut flash = FlashScheduler::new();
        let mut on = [Rgb::default(); 2];
        let mut off = [Rgb::default(); 2];
        flash.tick(&table, &palette, &mut on);
        flash.tick(&table, &palette, &mut off);
        assert_eq!(on, off);
        assert_eq!(on, [Rgb { r: 0xFF, g: 0xFF, b: 0xFF }; 2]);
    }
}
