//! Custom protocol handlers for efficient data transfer
//!
//! This module implements the `frame://` custom protocol for direct binary
//! transfer of render frames, bypassing Tauri's IPC JSON serialization.

use image::{codecs::jpeg::JpegEncoder, ImageBuffer, ImageEncoder, Rgba};
use tauri::http::{response::Builder, Response as HttpResponse};
use tracing::{trace, warn};

use super::shared_state::{SharedFrameBuffer, SharedSplashState};
use crate::config::{compression::JPEG_QUALITY, RENDER_HEIGHT, RENDER_WIDTH};

type Response = HttpResponse<Vec<u8>>;

/// Handle requests to the custom `frame://` protocol
///
/// Supported endpoints:
/// - `frame` or `frame.jpg`: JPEG-compressed frame (~50-100KB)
/// - `frame.raw`: Raw RGBA frame (~1.8MB)
/// - `splash`: Splash sequencer snapshot as JSON
pub fn handle_frame_protocol(
    uri_path: &str,
    buffer: &SharedFrameBuffer,
    splash: &SharedSplashState,
) -> Response {
    let resource = uri_path.trim_start_matches('/');
    trace!(resource, "Protocol request");

    match resource {
        "frame" | "frame.jpg" => handle_jpeg_frame(buffer),
        "frame.raw" => handle_raw_frame(buffer),
        "splash" => handle_splash(splash),
        _ => plain(404, "Not Found"),
    }
}

fn finish(builder: Builder, body: Vec<u8>) -> Response {
    builder.body(body).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to build protocol response");
        HttpResponse::new(Vec::new())
    })
}

fn plain(status: u16, message: &str) -> Response {
    finish(
        HttpResponse::builder()
            .status(status)
            .header("Content-Type", "text/plain"),
        message.as_bytes().to_vec(),
    )
}

fn frame_builder(content_type: &str) -> Builder {
    HttpResponse::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("X-Frame-Width", RENDER_WIDTH.to_string())
        .header("X-Frame-Height", RENDER_HEIGHT.to_string())
        .header("Access-Control-Allow-Origin", "*")
        .header(
            "Access-Control-Expose-Headers",
            "X-Frame-Width, X-Frame-Height",
        )
}

/// Copy the latest frame out of the buffer without holding the lock while encoding
fn latest_frame(buffer: &SharedFrameBuffer) -> Option<Vec<u8>> {
    buffer.0.lock().ok().and_then(|guard| guard.clone())
}

/// Handle JPEG-compressed frame request
fn handle_jpeg_frame(buffer: &SharedFrameBuffer) -> Response {
    let Some(rgba_data) = latest_frame(buffer) else {
        return plain(503, "Frame not ready");
    };
    match encode_jpeg(rgba_data) {
        Ok(jpeg_data) => finish(frame_builder("image/jpeg"), jpeg_data),
        Err(e) => {
            warn!(error = %e, "JPEG encoding failed");
            plain(500, "Encoding failed")
        }
    }
}

fn encode_jpeg(rgba_data: Vec<u8>) -> Result<Vec<u8>, image::ImageError> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(RENDER_WIDTH, RENDER_HEIGHT, rgba_data).ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;

    // Convert RGBA to RGB for JPEG (no alpha channel)
    let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();

    let mut jpeg_data = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY).write_image(
        rgb_img.as_raw(),
        RENDER_WIDTH,
        RENDER_HEIGHT,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(jpeg_data)
}

/// Handle raw RGBA frame request
fn handle_raw_frame(buffer: &SharedFrameBuffer) -> Response {
    match latest_frame(buffer) {
        Some(rgba_data) => finish(frame_builder("application/octet-stream"), rgba_data),
        None => plain(503, "Frame not ready"),
    }
}

/// Handle splash snapshot request
fn handle_splash(splash: &SharedSplashState) -> Response {
    let json = splash
        .0
        .lock()
        .ok()
        .and_then(|guard| serde_json::to_vec(&*guard).ok())
        .unwrap_or_default();

    finish(
        HttpResponse::builder()
            .status(200)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*"),
        json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resource() {
        let response = handle_frame_protocol(
            "/nope",
            &SharedFrameBuffer::default(),
            &SharedSplashState::default(),
        );
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn test_frame_not_ready() {
        let buffer = SharedFrameBuffer::default();
        let splash = SharedSplashState::default();
        assert_eq!(handle_frame_protocol("/frame", &buffer, &splash).status(), 503);
        assert_eq!(handle_frame_protocol("/frame.raw", &buffer, &splash).status(), 503);
    }

    #[test]
    fn test_raw_and_jpeg_frames() {
        let buffer = SharedFrameBuffer::default();
        let pixels = vec![128u8; (RENDER_WIDTH * RENDER_HEIGHT * 4) as usize];
        *buffer.0.lock().unwrap() = Some(pixels.clone());
        let splash = SharedSplashState::default();

        let raw = handle_frame_protocol("frame.raw", &buffer, &splash);
        assert_eq!(raw.status(), 200);
        assert_eq!(raw.body(), &pixels);

        let jpeg = handle_frame_protocol("/frame.jpg", &buffer, &splash);
        assert_eq!(jpeg.status(), 200);
        assert_eq!(jpeg.headers()["Content-Type"], "image/jpeg");
        assert_eq!(&jpeg.body()[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_short_frame_is_server_error() {
        let buffer = SharedFrameBuffer::default();
        *buffer.0.lock().unwrap() = Some(vec![0u8; 16]);
        let response = handle_frame_protocol("/frame", &buffer, &SharedSplashState::default());
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_splash_snapshot_json() {
        let splash = SharedSplashState::default();
        splash.0.lock().unwrap().finished = true;
        let response = handle_frame_protocol("/splash", &SharedFrameBuffer::default(), &splash);
        assert_eq!(response.status(), 200);

        let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["finished"], true);
    }
}
