use std::fs;
use std::path::PathBuf;

use image::imageops::FilterType;
use log::debug;
use rand::Rng;

use crate::config::ResizeMode;
use crate::error::Result;
use crate::pipeline::resized_path;

/// Inclusive bounds for randomly drawn frame dimensions, in pixels.
pub const RANDOM_MIN: u32 = 50;
pub const RANDOM_MAX: u32 = 1000;

/// Per-frame growth step for the growing mode, in pixels.
pub const GROWTH_STEP: u32 = 20;

/// Writes a resized `_r` copy next to every frame and returns the copies in
/// the same order.
///
/// The first frame is copied byte-for-byte; its pixel dimensions seed the
/// growing mode's baseline. Every later frame is resampled with Lanczos3 to
/// the size the selected mode dictates.
pub fn resize_frames<G: Rng>(
    frames: &[PathBuf],
    mode: ResizeMode,
    rng: &mut G,
) -> Result<Vec<PathBuf>> {
    let mut resized = Vec::with_capacity(frames.len());
    let mut baseline = (0u32, 0u32);

    for (index, frame) in frames.iter().enumerate() {
        let target = resized_path(frame);

        if index == 0 {
            baseline = image::image_dimensions(frame)?;
            fs::copy(frame, &target)?;
            resized.push(target);
            continue;
        }

        let (width, height) = match mode {
            ResizeMode::Random => (
                rng.gen_range(RANDOM_MIN..=RANDOM_MAX),
                rng.gen_range(RANDOM_MIN..=RANDOM_MAX),
            ),
            ResizeMode::Growing => {
                baseline.0 += GROWTH_STEP;
                baseline.1 += GROWTH_STEP;
                baseline
            }
        };

        debug!("Resizing {} -> {}x{}", frame.display(), width, height);
        image::open(frame)?
            .resize_exact(width, height, FilterType::Lanczos3)
            .save(&target)?;
        resized.push(target);
    }

    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;

    fn write_frames(dir: &Path, count: usize, width: u32, height: u32) -> Vec<PathBuf> {
        (1..=count)
            .map(|i| {
                let path = dir.join(format!("out{:04}.png", i));
                RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
                    .save(&path)
                    .unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_first_frame_copied_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let frames = write_frames(dir.path(), 3, 64, 48);
        let mut rng = StdRng::seed_from_u64(7);

        let resized = resize_frames(&frames, ResizeMode::Random, &mut rng).unwrap();
        assert_eq!(resized.len(), 3);

        let original = fs::read(&frames[0]).unwrap();
        let copy = fs::read(&resized[0]).unwrap();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_growing_mode_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let frames = write_frames(dir.path(), 4, 64, 48);
        let mut rng = StdRng::seed_from_u64(0);

        let resized = resize_frames(&frames, ResizeMode::Growing, &mut rng).unwrap();

        assert_eq!(image::image_dimensions(&resized[0]).unwrap(), (64, 48));
        assert_eq!(image::image_dimensions(&resized[1]).unwrap(), (84, 68));
        assert_eq!(image::image_dimensions(&resized[2]).unwrap(), (104, 88));
        assert_eq!(image::image_dimensions(&resized[3]).unwrap(), (124, 108));
    }

    #[test]
    fn test_random_mode_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let frames = write_frames(dir.path(), 5, 32, 32);
        let mut rng = StdRng::seed_from_u64(42);

        let resized = resize_frames(&frames, ResizeMode::Random, &mut rng).unwrap();
        for path in resized.iter().skip(1) {
            let (w, h) = image::image_dimensions(path).unwrap();
            assert!((RANDOM_MIN..=RANDOM_MAX).contains(&w));
            assert!((RANDOM_MIN..=RANDOM_MAX).contains(&h));
        }
    }

    #[test]
    fn test_random_mode_seed_dependent() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let frames_a = write_frames(dir_a.path(), 6, 32, 32);
        let frames_b = write_frames(dir_b.path(), 6, 32, 32);

        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let resized_a = resize_frames(&frames_a, ResizeMode::Random, &mut rng_a).unwrap();
        let resized_b = resize_frames(&frames_b, ResizeMode::Random, &mut rng_b).unwrap();

        let dims = |paths: &[PathBuf]| -> Vec<(u32, u32)> {
            paths
                .iter()
                .skip(1)
                .map(|p| image::image_dimensions(p).unwrap())
                .collect()
        };
        assert_ne!(dims(&resized_a), dims(&resized_b));
    }

    #[test]
    fn test_empty_frame_list() {
        let mut rng = StdRng::seed_from_u64(0);
        let resized = resize_frames(&[], ResizeMode::Growing, &mut rng).unwrap();
        assert!(resized.is_empty());
    }
}
