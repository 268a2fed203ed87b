//! Grayscale texture decoding and raster export

use std::path::Path;

use image::GrayImage;

use crate::io::error::{LicError, Result};
use crate::texture::grid::Texture;

/// Decode an image file into an 8-bit luma texture
///
/// # Errors
///
/// Returns an error if:
/// - No file exists at `path` (`TextureNotFound`)
/// - The file cannot be read or decoded (`ImageLoad`)
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LicError::TextureNotFound {
            path: path.to_path_buf(),
        });
    }

    let luma = image::open(path)
        .map_err(|e| LicError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_luma8();

    let (width, height) = (luma.width() as usize, luma.height() as usize);
    Texture::from_raw(width, height, luma.into_raw())
}

/// Write a texture as a grayscale image, creating parent directories first
///
/// The encoding is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The texture dimensions do not fit an image buffer
/// - The image cannot be encoded or saved
pub fn save_texture<P: AsRef<Path>>(texture: &Texture, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let expected = texture.width() * texture.height();
    let buffer = GrayImage::from_raw(
        texture.width() as u32,
        texture.height() as u32,
        texture.to_raw(),
    )
    .ok_or(LicError::DimensionMismatch {
        expected,
        actual: expected,
    })?;

    buffer.save(path).map_err(|e| LicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
