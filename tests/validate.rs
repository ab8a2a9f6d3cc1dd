mod tests {
    use myrtio_led_console::Error;
    use myrtio_led_console::config::{HEAT_SENSOR_COUNT, PWM_CHANNEL_COUNT, RGB_LED_COUNT};
    use myrtio_led_console::validate::{
        check_channel_index, check_led_index, check_range, check_sensor_index, check_u16,
    };

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(0, 3), Ok(()));
        assert_eq!(check_range(2, 3), Ok(()));
        assert_eq!(check_range(3, 3), Err(Error::ArgumentOutOfRange));
        assert_eq!(check_range(-1, 3), Err(Error::ArgumentOutOfRange));
        assert_eq!(check_range(i32::MIN, 3), Err(Error::ArgumentOutOfRange));
    }

    #[test]
    fn test_check_indices() {
        let channels = PWM_CHANNEL_COUNT as i32;
        let leds = RGB_LED_COUNT as i32;
        let sensors = HEAT_SENSOR_COUNT as i32;

        assert!(check_channel_index(channels - 1).is_ok());
        assert!(check_channel_index(channels).is_err());
        assert!(check_led_index(leds - 1).is_ok());
        assert!(check_led_index(leds).is_err());
        assert!(check_sensor_index(sensors - 1).is_ok());
        assert!(check_sensor_index(sensors).is_err());
    }

    #[test]
    fn test_check_u16() {
        assert_eq!(check_u16(0), Ok(()));
        assert_eq!(check_u16(0xffff), Ok(()));
        assert_eq!(check_u16(0x1_0000), Err(Error::ArgumentOutOfRange));
        assert_eq!(check_u16(-5), Err(Error::ArgumentOutOfRange));
    }
}
