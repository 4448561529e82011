//! Height Field
//!
//! Greyscale height source for terrain meshes. Loaded once at startup from
//! an image (any format `image` can decode with the enabled features), or
//! generated procedurally when no image is available.

use std::path::Path;

/// Errors that can occur while loading a heightmap image.
#[derive(Debug)]
pub enum HeightmapError {
    /// Standard I/O error (missing file, permissions).
    Io(std::io::Error),
    /// The file exists but could not be decoded.
    Image(image::ImageError),
    /// The decoded image has no pixels.
    Empty,
}

impl std::fmt::Display for HeightmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeightmapError::Io(e) => write!(f, "IO error: {e}"),
            HeightmapError::Image(e) => write!(f, "image decode error: {e}"),
            HeightmapError::Empty => write!(f, "heightmap image has no pixels"),
        }
    }
}

impl std::error::Error for HeightmapError {}

impl From<std::io::Error> for HeightmapError {
    fn from(e: std::io::Error) -> Self {
        HeightmapError::Io(e)
    }
}

impl From<image::ImageError> for HeightmapError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => HeightmapError::Io(io),
            other => HeightmapError::Image(other),
        }
    }
}

/// Row-major grid of luma samples in `0.0..=1.0`. Row 0 is the top row of
/// the source image.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: u32,
    height: u32,
    luma: Vec<f32>,
}

impl HeightField {
    /// Uniform field.
    pub fn flat(width: u32, height: u32, value: f32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            luma: vec![value.clamp(0.0, 1.0); (width * height) as usize],
        }
    }

    /// Deterministic gentle hills, used when no heightmap image is found.
    pub fn rolling_hills(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(2), height.max(2));
        let mut luma = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let u = x as f32 / (width - 1) as f32 * std::f32::consts::TAU;
                let v = y as f32 / (height - 1) as f32 * std::f32::consts::TAU;
                let wave = (u * 1.5).sin() * (v * 1.0).cos() * 0.35 + (u + v).sin() * 0.15;
                luma.push((0.5 + wave).clamp(0.0, 1.0));
            }
        }
        Self { width, height, luma }
    }

    /// Build from tightly packed RGBA8 pixels.
    ///
    /// Luma is `(0.3 r + 0.59 g + 0.11 b) / 255`; alpha is ignored.
    pub fn from_rgba8(width: u32, height: u32, pixels: &[u8]) -> Result<Self, HeightmapError> {
        let count = (width as usize) * (height as usize);
        if count == 0 || pixels.len() < count * 4 {
            return Err(HeightmapError::Empty);
        }
        let luma = pixels
            .chunks_exact(4)
            .take(count)
            .map(|px| {
                (f32::from(px[0]) * 0.3 + f32::from(px[1]) * 0.59 + f32::from(px[2]) * 0.11)
                    / 255.0
            })
            .collect();
        Ok(Self { width, height, luma })
    }

    /// Decode an image file.
    pub fn from_image(path: &Path) -> Result<Self, HeightmapError> {
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        Self::from_rgba8(width, height, image.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nearest-lower sample at normalized coordinates; `u` runs across
    /// columns, `v` down rows. Out-of-range coordinates are clamped.
    pub fn luma_at(&self, u: f32, v: f32) -> f32 {
        let x = (u.clamp(0.0, 1.0) * (self.width - 1) as f32) as u32;
        let y = (v.clamp(0.0, 1.0) * (self.height - 1) as f32) as u32;
        self.luma[(x + y * self.width) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_field() {
        let field = HeightField::flat(4, 3, 0.25);
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.luma_at(0.0, 0.0), 0.25);
        assert_eq!(field.luma_at(1.0, 1.0), 0.25);
    }

    #[test]
    fn test_from_rgba8_luma_weights() {
        // white, red, green, blue
        let pixels = [
            255, 255, 255, 255, //
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255,
        ];
        let field = HeightField::from_rgba8(2, 2, &pixels).unwrap();
        assert!((field.luma_at(0.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((field.luma_at(1.0, 0.0) - 0.3).abs() < 1e-6);
        assert!((field.luma_at(0.0, 1.0) - 0.59).abs() < 1e-6);
        assert!((field.luma_at(1.0, 1.0) - 0.11).abs() < 1e-6);
    }

    #[test]
    fn test_from_rgba8_rejects_short_buffer() {
        let result = HeightField::from_rgba8(2, 2, &[0; 8]);
        assert!(matches!(result, Err(HeightmapError::Empty)));
    }

    #[test]
    fn test_luma_clamps_coordinates() {
        let field = HeightField::rolling_hills(16, 16);
        assert_eq!(field.luma_at(-1.0, -1.0), field.luma_at(0.0, 0.0));
        assert_eq!(field.luma_at(2.0, 2.0), field.luma_at(1.0, 1.0));
    }

    #[test]
    fn test_rolling_hills_in_range() {
        let field = HeightField::rolling_hills(32, 32);
        for i in 0..=10 {
            for j in 0..=10 {
                let value = field.luma_at(i as f32 / 10.0, j as f32 / 10.0);
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_missing_image_is_io_error() {
        let result = HeightField::from_image(Path::new("definitely/not/here.png"));
        assert!(matches!(result, Err(HeightmapError::Io(_))));
    }
}
