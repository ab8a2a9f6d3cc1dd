mod tests {
    use myrtio_led_console::Error;
    use myrtio_led_console::parser::{parse_args, parse_args_radix, parse_int, parse_value};

    #[test]
    fn test_parse_declared_arguments() {
        let args = parse_args("b 3 4096", 2).unwrap();
        assert_eq!(args.as_slice(), &[3, 4096]);
    }

    #[test]
    fn test_parse_ignores_extra_arguments() {
        assert_eq!(parse_args("a 5 99 77", 1).unwrap().as_slice(), &[5]);
        // Never looked at, so garbage is fine too
        assert_eq!(parse_args("a 5 zz", 1).unwrap().as_slice(), &[5]);
        assert!(parse_args("q whatever", 0).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(parse_args("b 2", 2), Err(Error::MissingArguments));
        assert_eq!(parse_args("b", 2), Err(Error::MissingArguments));
        assert_eq!(parse_args("a   ", 1), Err(Error::MissingArguments));
        assert_eq!(parse_args("", 1), Err(Error::MissingArguments));
    }

    #[test]
    fn test_parse_key_run_is_skipped() {
        // The whole alphanumeric run counts as the key
        assert_eq!(parse_args("a5", 1), Err(Error::MissingArguments));
        assert_eq!(parse_args("abc 7", 1).unwrap().as_slice(), &[7]);
        assert_eq!(parse_args("? ", 0).unwrap().len(), 0);
    }

    #[test]
    fn test_parse_malformed_numerals() {
        assert_eq!(parse_args("a x", 1), Err(Error::ArgumentFormat));
        assert_eq!(parse_args("a 5x", 1), Err(Error::ArgumentFormat));
        assert_eq!(parse_args("b 1 -", 2), Err(Error::ArgumentFormat));
        assert_eq!(parse_args("a 0x10", 1), Err(Error::ArgumentFormat));
    }

    #[test]
    fn test_parse_all_separators() {
        let args = parse_args("p\t1\x0b2\x0c3\r 4\n", 4).unwrap();
        assert_eq!(args.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_signed_numerals() {
        assert_eq!(parse_args("a -1", 1).unwrap().as_slice(), &[-1]);
        assert_eq!(parse_args("a +12", 1).unwrap().as_slice(), &[12]);
        assert_eq!(
            parse_args("a -2147483648", 1).unwrap().as_slice(),
            &[i32::MIN]
        );
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(parse_args("a 2147483648", 1), Err(Error::NumberOverflow));
        assert_eq!(parse_args("a 99999999999999999999", 1), Err(Error::NumberOverflow));
    }

    #[test]
    fn test_parse_too_many_arguments() {
        assert_eq!(parse_args("x 1 2 3 4 5", 5), Err(Error::TooManyArguments));
    }

    #[test]
    fn test_parse_radix() {
        let args = parse_args_radix("y ff 0x10 7", 3, 16).unwrap();
        assert_eq!(args.as_slice(), &[255, 16, 7]);
        assert_eq!(parse_args_radix("y 12", 1, 2), Err(Error::ArgumentFormat));
    }

    #[test]
    fn test_parse_int_consumed() {
        assert_eq!(parse_int(b"123 456", 10), Ok((123, 3)));
        assert_eq!(parse_int(b"-7", 10), Ok((-7, 2)));
        assert_eq!(parse_int(b"", 10), Err(Error::ArgumentFormat));
        assert_eq!(parse_int(b"1", 99), Err(Error::ArgumentFormat));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("  42 ", 10), Ok(42));
        assert_eq!(parse_value("1a", 16), Ok(26));
        assert_eq!(parse_value("", 10), Err(Error::MissingArguments));
        assert_eq!(parse_value("4 2", 10), Err(Error::ArgumentFormat));
        assert_eq!(parse_value("four", 10), Err(Error::ArgumentFormat));
    }
}
