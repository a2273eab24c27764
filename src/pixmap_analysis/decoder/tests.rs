#[cfg(test)]
mod tests {
    use crate::pixmap_analysis::common::error::AnalysisError;
    use crate::pixmap_analysis::decoder::p6_reader::P6Reader;
    use crate::pixmap_analysis::decoder::reader::PixmapReader;
    use crate::pixmap_analysis::decoder::types::Rgb;

    fn p6_bytes(header: &str, pixels: &[u8]) -> Vec<u8> {
        let mut data = header.as_bytes().to_vec();
        data.extend_from_slice(pixels);
        data
    }

    #[test]
    fn test_decode_minimal_image() {
        let data = p6_bytes("P6\n2 2\n255\n", &[0u8; 12]);
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.max_value(), 255);
        assert_eq!(image.pixels().len(), 12);
    }

    #[test]
    fn test_decode_with_comment_line() {
        let data = p6_bytes("P6\n# comment\n2 2\n255\n", &[7u8; 12]);
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get_pixel(1, 1).unwrap(), Rgb::new(7, 7, 7));
    }

    #[test]
    fn test_decode_comments_between_every_token() {
        let header = "P6\n# one\n2\n# two\n2\n# three\n255\n";
        let data = p6_bytes(header, &[0u8; 12]);
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn test_pixel_buffer_length_invariant() {
        let mut pixels = Vec::new();
        for i in 0..(3 * 5 * 3) {
            pixels.push((i % 251) as u8);
        }
        let data = p6_bytes("P6\n3 5\n255\n", &pixels);
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert_eq!(
            image.pixels().len(),
            image.width() as usize * image.height() as usize * 3
        );
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut data = p6_bytes("P6\n2 2\n255\n", &[1u8; 12]);
        data.extend_from_slice(b"garbage after pixels");
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert_eq!(image.pixels().len(), 12);
    }

    #[test]
    fn test_plain_text_variant_rejected() {
        let data = p6_bytes("P3\n2 2\n255\n", &[0u8; 12]);
        let result = P6Reader.read_pixmap(&data);

        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = P6Reader.read_pixmap(b"");
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_sixteen_bit_max_value_rejected() {
        let data = p6_bytes("P6\n2 2\n65535\n", &[0u8; 12]);
        let result = P6Reader.read_pixmap(&data);

        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::UnsupportedMaxValue(65535)
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let data = p6_bytes("P6\n0 2\n255\n", &[]);
        let result = P6Reader.read_pixmap(&data);

        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::MalformedHeader(_)
        ));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let data = p6_bytes("P6\n-2 2\n255\n", &[]);
        let result = P6Reader.read_pixmap(&data);

        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::MalformedHeader(_)
        ));
    }

    #[test]
    fn test_non_numeric_dimension_rejected() {
        let data = p6_bytes("P6\ntwo 2\n255\n", &[]);
        let result = P6Reader.read_pixmap(&data);

        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::MalformedHeader(_)
        ));
    }

    #[test]
    fn test_truncated_pixel_data() {
        // 2x2 image needs 12 bytes; only 10 are present.
        let data = p6_bytes("P6\n# comment\n2 2\n255\n", &[0u8; 10]);
        let result = P6Reader.read_pixmap(&data);

        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::TruncatedData(12, 10)
        ));
    }

    #[test]
    fn test_missing_pixel_data_entirely() {
        let result = P6Reader.read_pixmap(b"P6\n2 2\n255");
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::TruncatedData(12, 0)
        ));
    }

    #[test]
    fn test_get_pixel_offsets() {
        // Row-major: pixel (x, y) lives at (y * width + x) * 3.
        let pixels = [
            10, 11, 12, 20, 21, 22, //
            30, 31, 32, 40, 41, 42,
        ];
        let data = p6_bytes("P6\n2 2\n255\n", &pixels);
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb::new(10, 11, 12));
        assert_eq!(image.get_pixel(1, 0).unwrap(), Rgb::new(20, 21, 22));
        assert_eq!(image.get_pixel(0, 1).unwrap(), Rgb::new(30, 31, 32));
        assert_eq!(image.get_pixel(1, 1).unwrap(), Rgb::new(40, 41, 42));
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let data = p6_bytes("P6\n2 2\n255\n", &[0u8; 12]);
        let image = P6Reader.read_pixmap(&data).unwrap();

        assert!(matches!(
            image.get_pixel(2, 0).unwrap_err(),
            AnalysisError::IndexOutOfBounds(2, 0)
        ));
        assert!(matches!(
            image.get_pixel(0, 2).unwrap_err(),
            AnalysisError::IndexOutOfBounds(0, 2)
        ));
    }

    #[test]
    fn test_rgb_display_format() {
        assert_eq!(Rgb::new(64, 64, 128).to_string(), "RGB( 64,  64, 128)");
        assert_eq!(Rgb::new(255, 0, 7).to_string(), "RGB(255,   0,   7)");
    }
}
