use crate::compositing::blur_filter::BlurEffect;
use crate::compositing::domain::render_canvas::RenderCanvas;
use crate::masking::mask_region::MaskRegion;
use crate::shared::frame::Frame;

use super::gaussian;

/// Per-pixel subsample offsets for antialiased clip coverage (2x2 grid).
const SUBSAMPLES: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Software reference implementation of the render canvas.
///
/// Holds the sharp source frame read-only and composites into a separate
/// target. Clip state is a stack of per-pixel coverage buffers; `clip`
/// multiplies supersampled region coverage into the current buffer, so
/// nested clips intersect. The blurred source is computed lazily on the
/// first filtered draw and reused while the effect stays the same.
pub struct CpuCanvas {
    source: Frame,
    target: Frame,
    /// Current coverage in [0, 1] per pixel; `None` means unclipped.
    clip: Option<Vec<f32>>,
    saved: Vec<Option<Vec<f32>>>,
    blurred: Option<(BlurEffect, Vec<u8>)>,
    blur_temp: Vec<f32>,
}

impl CpuCanvas {
    pub fn new(source: Frame) -> Self {
        let target = Frame::filled(
            source.width(),
            source.height(),
            source.channels(),
            0,
            source.index(),
        );
        Self {
            source,
            target,
            clip: None,
            saved: Vec::new(),
            blurred: None,
            blur_temp: Vec::new(),
        }
    }

    pub fn target(&self) -> &Frame {
        &self.target
    }

    pub fn into_target(self) -> Frame {
        self.target
    }

    /// Depth of unmatched `save` calls; zero when clip scopes are balanced.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn is_clipped(&self) -> bool {
        self.clip.is_some()
    }

    /// Supersampled coverage of `region` over the frame grid.
    fn region_coverage(&self, region: &MaskRegion) -> Vec<f32> {
        let w = self.source.width() as usize;
        let h = self.source.height() as usize;
        let mut coverage = vec![0.0f32; w * h];

        // Restrict the winding tests to the region's bounding box; outside
        // it coverage is zero by construction.
        let Some(bbox) = region.bounding_box() else {
            return coverage;
        };
        let x0 = bbox.x.floor().max(0.0) as usize;
        let y0 = bbox.y.floor().max(0.0) as usize;
        let x1 = (bbox.x + bbox.width).ceil().min(w as f64) as usize;
        let y1 = (bbox.y + bbox.height).ceil().min(h as f64) as usize;

        for y in y0..y1 {
            for x in x0..x1 {
                let mut hits = 0u8;
                for (dx, dy) in SUBSAMPLES {
                    if region.contains(x as f64 + dx, y as f64 + dy) {
                        hits += 1;
                    }
                }
                coverage[y * w + x] = f32::from(hits) / SUBSAMPLES.len() as f32;
            }
        }
        coverage
    }

    /// Blend `pixels` into the target, weighted by the current clip
    /// coverage (full weight when unclipped).
    fn composite(&mut self, pixels: &[u8]) {
        let channels = self.target.channels() as usize;
        let out = self.target.data_mut();
        match &self.clip {
            None => out.copy_from_slice(pixels),
            Some(coverage) => {
                for (i, &cov) in coverage.iter().enumerate() {
                    if cov <= 0.0 {
                        continue;
                    }
                    for c in 0..channels {
                        let idx = i * channels + c;
                        let blended =
                            pixels[idx] as f32 * cov + out[idx] as f32 * (1.0 - cov);
                        out[idx] = blended.round().clamp(0.0, 255.0) as u8;
                    }
                }
            }
        }
    }

    fn blurred_source(&mut self, blur: &BlurEffect) -> Vec<u8> {
        if let Some((effect, pixels)) = &self.blurred {
            if effect == blur {
                return pixels.clone();
            }
        }
        let mut pixels = self.source.data().to_vec();
        let kernel_x =
            gaussian::gaussian_kernel_1d(gaussian::kernel_size_for_radius(blur.radius_x));
        let kernel_y =
            gaussian::gaussian_kernel_1d(gaussian::kernel_size_for_radius(blur.radius_y));
        gaussian::separable_blur(
            &mut pixels,
            self.source.width() as usize,
            self.source.height() as usize,
            self.source.channels() as usize,
            &kernel_x,
            &kernel_y,
            blur.edge_mode,
            &mut self.blur_temp,
        );
        self.blurred = Some((*blur, pixels.clone()));
        pixels
    }
}

impl RenderCanvas for CpuCanvas {
    fn draw_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let pixels = self.source.data().to_vec();
        self.composite(&pixels);
        Ok(())
    }

    fn save(&mut self) {
        self.saved.push(self.clip.clone());
    }

    fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.clip = previous;
        }
    }

    fn clip(&mut self, region: &MaskRegion) {
        let coverage = self.region_coverage(region);
        match &mut self.clip {
            Some(current) => {
                for (cur, new) in current.iter_mut().zip(&coverage) {
                    *cur *= new;
                }
            }
            None => self.clip = Some(coverage),
        }
    }

    fn draw_frame_with(&mut self, blur: &BlurEffect) -> Result<(), Box<dyn std::error::Error>> {
        let pixels = self.blurred_source(blur);
        self.composite(&pixels);
        Ok(())
    }
}
