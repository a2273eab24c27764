#[cfg(test)]
mod tests {
    use crate::pixmap_analysis::decoder::types::{PixmapImage, Rgb};
    use crate::pixmap_analysis::histogram::color_counts::build_histogram;

    const BACKGROUND: Rgb = Rgb::new(64, 64, 128);

    fn solid_image(width: u32, height: u32, color: Rgb) -> PixmapImage {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
        }
        PixmapImage::new(width, height, 255, pixels)
    }

    fn image_from_colors(width: u32, height: u32, colors: &[Rgb]) -> PixmapImage {
        assert_eq!(colors.len(), (width * height) as usize);
        let mut pixels = Vec::with_capacity(colors.len() * 3);
        for c in colors {
            pixels.extend_from_slice(&[c.r, c.g, c.b]);
        }
        PixmapImage::new(width, height, 255, pixels)
    }

    #[test]
    fn test_total_counts_equal_pixel_count() {
        let colors: Vec<Rgb> = (0..12).map(|i| Rgb::new(i as u8, 0, 0)).collect();
        let image = image_from_colors(4, 3, &colors);

        let histogram = build_histogram(&image, None);
        assert_eq!(histogram.total_pixels(), image.pixel_count());
    }

    #[test]
    fn test_exclusion_removes_exact_matches_only() {
        let colors = vec![
            BACKGROUND,
            Rgb::new(255, 0, 0),
            BACKGROUND,
            Rgb::new(0, 255, 0),
            Rgb::new(255, 0, 0),
            BACKGROUND,
        ];
        let image = image_from_colors(3, 2, &colors);

        let histogram = build_histogram(&image, Some(BACKGROUND));
        assert_eq!(histogram.total_pixels(), 3);
        assert_eq!(histogram.count(BACKGROUND), 0);
        assert_eq!(histogram.count(Rgb::new(255, 0, 0)), 2);
        assert_eq!(histogram.count(Rgb::new(0, 255, 0)), 1);
    }

    #[test]
    fn test_all_background_image_with_exclusion_is_empty() {
        // 4x4 all-background frame: excluded scan counts nothing, plain
        // scan counts all sixteen pixels under one color.
        let image = solid_image(4, 4, BACKGROUND);

        let excluded = build_histogram(&image, Some(BACKGROUND));
        assert!(excluded.is_empty());
        assert_eq!(excluded.distinct_colors(), 0);

        let full = build_histogram(&image, None);
        assert_eq!(full.distinct_colors(), 1);
        assert_eq!(full.count(BACKGROUND), 16);
    }

    #[test]
    fn test_top_k_orders_by_count_descending() {
        let mut colors = Vec::new();
        colors.extend(std::iter::repeat_n(Rgb::new(1, 1, 1), 5));
        colors.extend(std::iter::repeat_n(Rgb::new(2, 2, 2), 3));
        colors.extend(std::iter::repeat_n(Rgb::new(3, 3, 3), 1));
        let image = image_from_colors(3, 3, &colors);

        let top = build_histogram(&image, None).top_k(2);
        assert_eq!(top, vec![(Rgb::new(1, 1, 1), 5), (Rgb::new(2, 2, 2), 3)]);
    }

    #[test]
    fn test_top_k_breaks_ties_by_color_ascending() {
        let colors = vec![
            Rgb::new(9, 0, 0),
            Rgb::new(0, 9, 0),
            Rgb::new(0, 0, 9),
            Rgb::new(9, 0, 0),
            Rgb::new(0, 9, 0),
            Rgb::new(0, 0, 9),
        ];
        let image = image_from_colors(3, 2, &colors);
        let histogram = build_histogram(&image, None);

        let top = histogram.top_k(3);
        assert_eq!(
            top,
            vec![
                (Rgb::new(0, 0, 9), 2),
                (Rgb::new(0, 9, 0), 2),
                (Rgb::new(9, 0, 0), 2),
            ]
        );

        // Same input, same ordering, every time.
        assert_eq!(histogram.top_k(3), top);
    }

    #[test]
    fn test_top_k_larger_than_distinct_colors() {
        let image = solid_image(2, 2, Rgb::new(5, 6, 7));
        let top = build_histogram(&image, None).top_k(100);

        assert_eq!(top, vec![(Rgb::new(5, 6, 7), 4)]);
    }
}
