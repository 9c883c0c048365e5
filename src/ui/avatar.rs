/// Circular character avatars
///
/// Each row loads its own image: fetch bytes, decode on a blocking
/// thread, crop to a square and cut out a circle. Failures only ever
/// leave an empty placeholder behind.
use std::sync::Arc;

use iced::widget::image::{Handle, Image};
use iced::widget::Space;
use iced::Element;
use image::imageops::FilterType;
use image::RgbaImage;
use thiserror::Error;

use crate::api::http::HttpBackend;
use crate::api::{CharacterClient, FetchError};

/// On-screen size of an avatar (logical pixels, square)
pub const AVATAR_SIZE: f32 = 50.0;

/// Rendered size of an avatar; 2x for HiDPI displays
const AVATAR_PIXELS: u32 = 100;

/// Load state of one row's avatar
#[derive(Debug, Clone)]
pub enum Avatar {
    Pending,
    Ready(Handle),
    Failed,
}

/// Errors that can occur while loading an avatar
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Failed to fetch avatar: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to decode avatar: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Fetch, decode and mask one avatar
pub async fn load_avatar<B: HttpBackend>(
    client: Arc<CharacterClient<B>>,
    image_url: String,
) -> Result<Handle, AvatarError> {
    let bytes = client.fetch_image(&image_url).await?;

    // Spawn blocking for the CPU-bound decode and resize
    let avatar = tokio::task::spawn_blocking(move || decode_avatar(&bytes)).await??;

    let (width, height) = avatar.dimensions();
    Ok(Handle::from_rgba(width, height, avatar.into_raw()))
}

/// Decode image bytes into a square RGBA avatar with a circular mask
fn decode_avatar(bytes: &[u8]) -> Result<RgbaImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let mut square = decoded
        .resize_to_fill(AVATAR_PIXELS, AVATAR_PIXELS, FilterType::Lanczos3)
        .to_rgba8();
    apply_circular_mask(&mut square);
    Ok(square)
}

/// Make every pixel outside the inscribed circle transparent.
/// Edge pixels get partial coverage so the rim is not jagged.
fn apply_circular_mask(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    let radius = width.min(height) as f32 / 2.0;
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
        pixel[3] = (pixel[3] as f32 * coverage).round() as u8;
    }
}

/// Widget for an avatar; anything not yet ready is an empty square
pub fn avatar_view<'a, Message: 'a>(avatar: Option<&'a Avatar>) -> Element<'a, Message> {
    match avatar {
        Some(Avatar::Ready(handle)) => {
            let picture: Image<Handle> = Image::new(handle.clone());
            picture.width(AVATAR_SIZE).height(AVATAR_SIZE).into()
        }
        Some(Avatar::Pending) | Some(Avatar::Failed) | None => {
            Space::new(AVATAR_SIZE, AVATAR_SIZE).into()
        }
    }
}
