//! Decoding depth maps and patterns, encoding stereograms as PNG

use crate::io::error::{Result, SynthesisError, computation_error};
use crate::spatial::{DepthMap, OutputBuffer, PatternBuffer, Rgb};
use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage};
use ndarray::Array2;
use std::path::Path;

/// Depth map decoded from an image file
#[derive(Debug, Clone)]
pub struct DecodedDepthMap {
    /// 8-bit grayscale samples
    pub depth: DepthMap,
    /// Whether the source was not already 8-bit grayscale and had to be converted
    pub converted: bool,
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SynthesisError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert a decoded image into a depth map
///
/// Anything other than 8-bit luma is converted with the luminance weights of
/// the `image` crate.
pub fn depth_map_from_image(img: DynamicImage) -> DecodedDepthMap {
    let (gray, converted) = match img {
        DynamicImage::ImageLuma8(gray) => (gray, false),
        other => (other.to_luma8(), true),
    };
    DecodedDepthMap {
        depth: depth_map_from_gray(&gray),
        converted,
    }
}

fn depth_map_from_gray(gray: &GrayImage) -> DepthMap {
    let (width, height) = gray.dimensions();
    DepthMap::from_array(Array2::from_shape_fn(
        (height as usize, width as usize),
        |(row, col)| gray.get_pixel(col as u32, row as u32).0[0],
    ))
}

/// Load a depth map from any supported image format
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_depth_map(path: &Path) -> Result<DecodedDepthMap> {
    let decoded = depth_map_from_image(open_image(path)?);
    if decoded.converted {
        tracing::info!(
            path = %path.display(),
            "depth map converted to 8-bit grayscale"
        );
    }
    Ok(decoded)
}

/// Use an RGB image as the repeating pattern, pixel for pixel
pub fn pattern_from_image(img: &RgbImage) -> PatternBuffer {
    let (width, height) = img.dimensions();
    PatternBuffer::from_array(Array2::from_shape_fn(
        (height as usize, width as usize),
        |(row, col)| img.get_pixel(col as u32, row as u32).0,
    ))
}

/// Load an external repeating pattern
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_pattern_image(path: &Path) -> Result<PatternBuffer> {
    let img = open_image(path)?.to_rgb8();
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded pattern image"
    );
    Ok(pattern_from_image(&img))
}

fn to_dimension(value: usize, what: &'static str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|e| computation_error(what, &format!("{value} exceeds image limits: {e}")))
}

/// Convert a synthesized buffer into an encodable image
///
/// # Errors
///
/// Returns `Computation` if the buffer is too large for an image
pub fn output_to_image(output: OutputBuffer) -> Result<RgbImage> {
    let width = to_dimension(output.width(), "output encoding")?;
    let height = to_dimension(output.height(), "output encoding")?;
    ImageBuffer::from_raw(width, height, output.into_raw_rgb()).ok_or_else(|| {
        computation_error("output encoding", &"pixel count does not match dimensions")
    })
}

/// Convert a pattern into an encodable image
///
/// # Errors
///
/// Returns `Computation` if the pattern is too large for an image
pub fn pattern_to_image(pattern: &PatternBuffer) -> Result<RgbImage> {
    let width = to_dimension(pattern.width(), "pattern encoding")?;
    let height = to_dimension(pattern.height(), "pattern encoding")?;
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let color: Rgb = pattern.get(x as usize, y as usize).unwrap_or([0; 3]);
        image::Rgb(color)
    }))
}

fn save_rgb(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| SynthesisError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a stereogram, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The buffer is too large to encode
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_output(output: OutputBuffer, path: &Path) -> Result<()> {
    save_rgb(&output_to_image(output)?, path)
}

/// Save a pattern, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the pattern cannot be encoded or saved
pub fn export_pattern(pattern: &PatternBuffer, path: &Path) -> Result<()> {
    save_rgb(&pattern_to_image(pattern)?, path)
}
