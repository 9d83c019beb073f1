use crate::detection::domain::face_record::FaceRecord;
use crate::masking::mask_builder::MaskBuilder;
use crate::pipeline::event_sink::EventSink;

use super::blur_filter::BlurEffect;
use super::domain::render_canvas::RenderCanvas;

/// Per-frame orchestration: sharp base, then one clipped blurred draw per
/// masked face.
///
/// Stateless across frames: the same frame and detection result always
/// composite to the same output. Faces are processed strictly in detection
/// order, each inside its own save/clip/draw/restore scope, so the canvas
/// clip state after `process` equals the state before it. A draw failure
/// mid-face still runs the matching restore before the error surfaces, so
/// a single bad mask never leaves the target permanently clipped.
pub struct FrameCompositor {
    mask_builder: MaskBuilder,
    blur: BlurEffect,
}

impl FrameCompositor {
    pub fn new(mask_builder: MaskBuilder, blur: BlurEffect) -> Self {
        Self { mask_builder, blur }
    }

    pub fn blur(&self) -> &BlurEffect {
        &self.blur
    }

    /// Composite one frame. `frame_index` is used for diagnostics only.
    pub fn process(
        &self,
        canvas: &mut dyn RenderCanvas,
        faces: &[FaceRecord],
        frame_index: usize,
        events: &mut dyn EventSink,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        canvas.draw_frame()?;

        let mut masked = 0usize;
        for face in faces {
            let mask = self.mask_builder.build(face);
            if mask.is_empty() {
                continue;
            }

            canvas.save();
            canvas.clip(&mask);
            let drawn = canvas.draw_frame_with(&self.blur);
            canvas.restore();

            if let Err(e) = drawn {
                events.draw_failed(frame_index, e.as_ref());
                return Err(e);
            }
            masked += 1;
        }

        Ok(masked)
    }
}

impl Default for FrameCompositor {
    fn default() -> Self {
        Self::new(MaskBuilder::default(), BlurEffect::default())
    }
}
