//! PNG encoding and decoding for rasters.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{AvatarError, Result};

use super::Raster;

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let img = to_image(raster)?;

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AvatarError::Codec {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes)
}

/// Decode PNG bytes into a square RGBA raster.
pub fn decode_png(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| AvatarError::Codec {
            message: format!("Failed to decode PNG: {}", e),
        })?
        .to_rgba8();

    if img.width() != img.height() {
        return Err(AvatarError::Codec {
            message: format!("Expected a square image, got {}x{}", img.width(), img.height()),
        });
    }

    Raster::from_rgba(img.width(), img.into_raw())
}

/// Write a raster to a PNG file.
pub fn write_png(raster: &Raster, path: &Path) -> Result<()> {
    let img = to_image(raster)?;

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

fn to_image(raster: &Raster) -> Result<RgbaImage> {
    RgbaImage::from_raw(raster.size(), raster.size(), raster.as_bytes().to_vec()).ok_or_else(|| {
        AvatarError::Codec {
            message: format!("Raster buffer does not match {}x{}", raster.size(), raster.size()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    fn checker() -> Raster {
        Raster::from_rgba(
            2,
            [
                Colour::BLACK.to_rgba(),
                Colour::WHITE.to_rgba(),
                Colour::WHITE.to_rgba(),
                Colour::rgb(255, 0, 0).to_rgba(),
            ]
            .concat(),
        )
        .unwrap()
    }

    #[test]
    fn test_encode_produces_png() {
        let bytes = encode_png(&checker()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_decode_restores_pixels() {
        let raster = checker();
        let decoded = decode_png(&encode_png(&raster).unwrap()).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, AvatarError::Codec { .. }));
    }

    #[test]
    fn test_decode_rejects_non_square() {
        let img = RgbaImage::new(3, 2);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        assert!(decode_png(&bytes).is_err());
    }

    #[test]
    fn test_write_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avatar.png");

        write_png(&checker(), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }
}
