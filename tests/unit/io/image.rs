//! Tests for depth map decoding, pattern loading and PNG export

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
    use sirds::io::image::{
        depth_map_from_image, export_output, export_pattern, load_depth_map, load_pattern_image,
        output_to_image, pattern_from_image,
    };
    use sirds::{OutputBuffer, PatternBuffer, SynthesisError};
    use tempfile::TempDir;

    // Tests grayscale input is used without conversion
    // Verified by always reporting conversion
    #[test]
    fn test_gray_depth_map_not_converted() {
        let gray = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));

        let decoded = depth_map_from_image(DynamicImage::ImageLuma8(gray));

        assert!(!decoded.converted);
        assert_eq!(decoded.depth.width(), 4);
        assert_eq!(decoded.depth.height(), 3);
        assert_eq!(decoded.depth.get(3, 2), Some(32));
    }

    // Tests color input is converted to grayscale and reported
    // Verified by skipping the conversion flag
    #[test]
    fn test_color_depth_map_converted() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));

        let decoded = depth_map_from_image(DynamicImage::ImageRgb8(rgb));

        assert!(decoded.converted);
        assert_eq!(decoded.depth.get(1, 1), Some(255));
    }

    // Tests depth maps load from disk
    // Verified by transposing rows and columns
    #[test]
    fn test_load_depth_map_from_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("depth.png");
        GrayImage::from_fn(5, 2, |x, y| Luma([(x + 100 * y) as u8]))
            .save(&path)
            .unwrap();

        let decoded = load_depth_map(&path).unwrap();

        assert!(!decoded.converted);
        assert_eq!(decoded.depth.get(4, 1), Some(104));
    }

    // Tests missing files report the path
    // Verified by returning the generic From conversion
    #[test]
    fn test_load_depth_map_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.png");

        let result = load_depth_map(&path);

        assert!(matches!(
            result,
            Err(SynthesisError::ImageLoad { path: ref p, .. }) if p == &path
        ));
    }

    // Tests patterns keep every pixel of the source image
    // Verified by cropping the pattern to its first column
    #[test]
    fn test_pattern_from_image() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));

        let pattern = pattern_from_image(&img);

        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 2);
        assert_eq!(pattern.get(2, 1), Some([2, 1, 7]));
    }

    // Tests a saved pattern loads back identically
    // Verified by saving the pattern transposed
    #[test]
    fn test_export_and_load_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("pattern.png");
        let pattern = PatternBuffer::random_seeded(6, 4, 42);

        export_pattern(&pattern, &path).unwrap();
        let loaded = load_pattern_image(&path).unwrap();

        assert_eq!(loaded, pattern);
    }

    // Tests exported stereograms keep dimensions and pixels
    // Verified by swapping width and height on export
    #[test]
    fn test_export_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("result.png");
        let mut output = OutputBuffer::new(7, 2);
        if let Some(cell) = output.pixels_mut().get_mut(8) {
            *cell = [9, 8, 7];
        }

        export_output(output, &path).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (7, 2));
        assert_eq!(saved.get_pixel(1, 1), &Rgb([9, 8, 7]));
    }

    // Tests in-memory conversion of the output buffer
    // Verified by emitting an empty image
    #[test]
    fn test_output_to_image() {
        let output = OutputBuffer::new(3, 1);
        let img = output_to_image(output).unwrap();
        assert_eq!(img.dimensions(), (3, 1));
    }
}
