//! Frame extraction system
//!
//! This module handles extracting rendered frames from the GPU and
//! preparing them for transfer to the Tauri frontend.

use bevy::{prelude::*, render::renderer::RenderDevice, time::Time};
use tracing::debug;

use crate::bevy::resources::{
    FrameBufferRes, FrameCount, FrameLog, FrameRateLimiter, MainWorldReceiver, PreRollFrames,
};
use crate::config::{logging::STATS_PRINT_INTERVAL, RENDER_HEIGHT, RENDER_WIDTH};

/// Extract and process frame data from the render pipeline
pub fn extract_and_process_frame(
    receiver: Res<MainWorldReceiver>,
    buffer: Option<Res<FrameBufferRes>>,
    mut count: ResMut<FrameCount>,
    mut pre_roll: ResMut<PreRollFrames>,
    mut frame_log: ResMut<FrameLog>,
    mut frame_limiter: ResMut<FrameRateLimiter>,
    time: Res<Time>,
) {
    let Some(b) = buffer else { return };

    // Wait for scene to be fully rendered
    if pre_roll.0 > 0 {
        while receiver.try_recv().is_ok() {}
        pre_roll.0 -= 1;
        if pre_roll.0 % 10 == 0 && pre_roll.0 > 0 {
            debug!(remaining = pre_roll.0, "Pre-roll frames remaining");
        }
        return;
    }

    // Frame rate limiting - skip if not enough time has passed
    let now = std::time::Instant::now();
    if now.duration_since(frame_limiter.last_frame_time) < frame_limiter.min_frame_interval {
        while receiver.try_recv().is_ok() {}
        return;
    }
    frame_limiter.last_frame_time = now;

    // Keep only the most recent frame from the render world
    let mut image_data = Vec::new();
    while let Ok(data) = receiver.try_recv() {
        image_data = data;
    }

    let Some(rgba) = remove_row_padding(&image_data, RENDER_WIDTH, RENDER_HEIGHT) else {
        return;
    };
    let data_size = rgba.len();

    if let Ok(mut guard) = b.0 .0.lock() {
        *guard = Some(rgba);
        count.0 += 1;
    }

    let current_time = time.elapsed_secs_f64();
    if current_time - frame_log.last_print_time >= STATS_PRINT_INTERVAL {
        debug!(
            frame = count.0,
            size_kb = data_size as f64 / 1024.0,
            "Frame delivered"
        );
        frame_log.last_print_time = current_time;
    }
}

/// Remove GPU buffer row padding alignment, returning pure RGBA data
fn remove_row_padding(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    if data.is_empty() {
        return None;
    }

    let row_bytes = width as usize * 4;
    let aligned_row_bytes = RenderDevice::align_copy_bytes_per_row(row_bytes);

    let rgba_data = if row_bytes == aligned_row_bytes {
        data.to_vec()
    } else {
        data.chunks(aligned_row_bytes)
            .take(height as usize)
            .flat_map(|row| &row[..row_bytes.min(row.len())])
            .cloned()
            .collect()
    };

    Some(rgba_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_has_no_frame() {
        assert!(remove_row_padding(&[], 4, 4).is_none());
    }

    #[test]
    fn test_padding_is_stripped() {
        // 3 px wide rows are 12 bytes, padded up to the copy alignment
        let aligned = RenderDevice::align_copy_bytes_per_row(12);
        let mut data = Vec::new();
        for row in 0..2u8 {
            data.extend(std::iter::repeat(row + 1).take(12));
            data.extend(std::iter::repeat(0xEE).take(aligned - 12));
        }
        let rgba = remove_row_padding(&data, 3, 2).unwrap();
        assert_eq!(rgba.len(), 24);
        assert!(rgba[..12].iter().all(|&b| b == 1));
        assert!(rgba[12..].iter().all(|&b| b == 2));
    }
}
