use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::error::{SurfaceError, SurfaceResult};

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A point-in-time PNG copy of a drawing surface
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

// PNG bytes are noise in debug output
impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("png_len", &self.png.len())
            .finish()
    }
}

impl Snapshot {
    pub fn encode(image: &RgbaImage) -> SurfaceResult<Self> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(Self {
            width: image.width(),
            height: image.height(),
            png,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn to_data_url(&self) -> String {
        format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&self.png))
    }

    pub fn from_data_url(url: &str) -> SurfaceResult<Self> {
        let payload = url.strip_prefix(DATA_URL_PREFIX).ok_or(SurfaceError::InvalidDataUrl)?;
        let png = STANDARD.decode(payload)?;
        let image = image::load_from_memory_with_format(&png, ImageFormat::Png)?;
        Ok(Self {
            width: image.width(),
            height: image.height(),
            png,
        })
    }

    /// Decode back into pixels, e.g. for a thumbnail texture
    pub fn decode(&self) -> SurfaceResult<RgbaImage> {
        let image = image::load_from_memory_with_format(&self.png, ImageFormat::Png)?;
        Ok(image.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn data_url_carries_the_same_pixels() {
        let image = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        let snapshot = Snapshot::encode(&image).unwrap();
        let url = snapshot.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));

        let restored = Snapshot::from_data_url(&url).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.decode().unwrap(), image);
    }

    #[test]
    fn rejects_foreign_payloads() {
        assert!(matches!(
            Snapshot::from_data_url("saved-你"),
            Err(SurfaceError::InvalidDataUrl)
        ));
        assert!(matches!(
            Snapshot::from_data_url("data:image/png;base64,!!!"),
            Err(SurfaceError::Base64(_))
        ));
    }
}
