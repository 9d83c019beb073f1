use crate::compositing::blur_filter::BlurEffect;
use crate::compositing::domain::render_canvas::RenderCanvas;
use crate::compositing::frame_compositor::FrameCompositor;
use crate::detection::detection_adapter::DetectionAdapter;
use crate::detection::domain::face_detector::{DetectorConfig, FaceDetector};
use crate::detection::domain::face_record::ContourKind;
use crate::masking::mask_builder::{FallbackPolicy, MaskBuilder, DEFAULT_TRACED_KINDS};
use crate::shared::frame::Frame;

use super::event_sink::EventSink;

/// Session-level policy, fixed at session start or reconfiguration.
///
/// Nothing in here changes per frame; the per-frame hot path only reads
/// the values baked into the compositor and adapter at construction.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub blur: BlurEffect,
    pub traced_kinds: Vec<ContourKind>,
    pub fallback: FallbackPolicy,
    pub detector: DetectorConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            blur: BlurEffect::default(),
            traced_kinds: DEFAULT_TRACED_KINDS.to_vec(),
            fallback: FallbackPolicy::default(),
            detector: DetectorConfig::default(),
        }
    }
}

/// One capture session of the privacy pipeline.
///
/// Owns the detection adapter, the compositor, and the event sink for the
/// lifetime of the session. `process_frame` is the once-per-camera-frame
/// entry point; `&mut self` makes it non-reentrant, matching the contract
/// that frames of one stream are processed strictly one at a time. The
/// blur effect is built once here and reused for every frame.
pub struct PrivacySession {
    adapter: DetectionAdapter,
    compositor: FrameCompositor,
    events: Box<dyn EventSink>,
}

impl PrivacySession {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        config: SessionConfig,
        events: Box<dyn EventSink>,
    ) -> Self {
        let adapter = DetectionAdapter::new(detector, config.detector);
        let compositor = FrameCompositor::new(
            MaskBuilder::new(config.traced_kinds, config.fallback),
            config.blur,
        );
        Self {
            adapter,
            compositor,
            events,
        }
    }

    /// Process one camera frame onto its render target.
    ///
    /// Detection runs synchronously within the frame budget; a detection
    /// failure degrades to a sharp pass-through, never an error. Only a
    /// drawing failure propagates, after the canvas state was restored.
    pub fn process_frame(
        &mut self,
        frame: &Frame,
        canvas: &mut dyn RenderCanvas,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let faces = self.adapter.detect(frame, self.events.as_mut());
        let masked =
            self.compositor
                .process(canvas, &faces, frame.index(), self.events.as_mut())?;
        self.events
            .frame_processed(frame.index(), faces.len(), masked);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositing::infrastructure::cpu_canvas::CpuCanvas;
    use crate::detection::domain::face_record::{ContourSet, FaceRecord};
    use crate::pipeline::event_sink::NullEventSink;
    use crate::shared::geometry::{Bounds, Point};

    struct ScriptedDetector {
        records: Vec<FaceRecord>,
    }

    impl FaceDetector for ScriptedDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _config: &DetectorConfig,
        ) -> Result<Vec<FaceRecord>, Box<dyn std::error::Error>> {
            Ok(self.records.clone())
        }
    }

    struct BrokenDetector;

    impl FaceDetector for BrokenDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _config: &DetectorConfig,
        ) -> Result<Vec<FaceRecord>, Box<dyn std::error::Error>> {
            Err("sensor timeout".into())
        }
    }

    fn checkerboard(width: u32, height: u32, index: usize) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255u8 } else { 0u8 };
                data.extend_from_slice(&[v, v, v]);
            }
        }
        Frame::new(data, width, height, 3, index)
    }

    fn session(records: Vec<FaceRecord>) -> PrivacySession {
        PrivacySession::new(
            Box::new(ScriptedDetector { records }),
            SessionConfig {
                blur: BlurEffect::gaussian(4.0),
                ..SessionConfig::default()
            },
            Box::new(NullEventSink),
        )
    }

    fn contour_face() -> FaceRecord {
        let outline: Vec<Point> = (0..20)
            .map(|i| {
                let angle = i as f64 / 20.0 * std::f64::consts::TAU;
                Point::new(16.0 + 8.0 * angle.cos(), 16.0 + 10.0 * angle.sin())
            })
            .collect();
        let mut contours = ContourSet::new();
        contours.insert(ContourKind::Face, outline);
        FaceRecord::with_contours(Bounds::new(8.0, 6.0, 16.0, 20.0), contours)
    }

    #[test]
    fn test_no_faces_passes_frame_through_sharp() {
        let frame = checkerboard(16, 16, 0);
        let mut canvas = CpuCanvas::new(frame.clone());
        session(vec![]).process_frame(&frame, &mut canvas).unwrap();
        assert_eq!(canvas.target().data(), frame.data());
    }

    #[test]
    fn test_detection_failure_passes_frame_through_sharp() {
        let frame = checkerboard(16, 16, 0);
        let mut canvas = CpuCanvas::new(frame.clone());
        let mut session = PrivacySession::new(
            Box::new(BrokenDetector),
            SessionConfig::default(),
            Box::new(NullEventSink),
        );
        session.process_frame(&frame, &mut canvas).unwrap();
        assert_eq!(canvas.target().data(), frame.data());
    }

    #[test]
    fn test_contour_face_blurs_inside_sharp_outside() {
        let frame = checkerboard(32, 32, 0);
        let mut canvas = CpuCanvas::new(frame.clone());
        session(vec![contour_face()])
            .process_frame(&frame, &mut canvas)
            .unwrap();

        let target = canvas.target();
        // Far outside the outline: sharp.
        assert_eq!(target.pixel(30, 30), frame.pixel(30, 30));
        assert_eq!(target.pixel(1, 1), frame.pixel(1, 1));
        // At the outline center: blurred checkerboard tends to gray.
        let v = target.pixel(16, 16)[0] as i32;
        assert!((40..=215).contains(&v), "expected blurred gray, got {v}");
    }

    #[test]
    fn test_coarse_face_blurs_inscribed_ellipse_only() {
        let frame = checkerboard(64, 64, 0);
        let bounds = Bounds::new(16.0, 16.0, 24.0, 32.0);
        let mut canvas = CpuCanvas::new(frame.clone());
        session(vec![FaceRecord::coarse(bounds)])
            .process_frame(&frame, &mut canvas)
            .unwrap();

        let target = canvas.target();
        // Rectangle corners stay sharp: outside the inscribed ellipse.
        assert_eq!(target.pixel(17, 17), frame.pixel(17, 17));
        assert_eq!(target.pixel(38, 46), frame.pixel(38, 46));
        // Rectangle center is blurred.
        let v = target.pixel(28, 32)[0] as i32;
        assert!((40..=215).contains(&v), "expected blurred gray, got {v}");
    }

    #[test]
    fn test_two_faces_masked_independently() {
        let frame = checkerboard(64, 64, 0);
        let coarse = FaceRecord::coarse(Bounds::new(36.0, 36.0, 20.0, 20.0));
        let mut canvas = CpuCanvas::new(frame.clone());
        session(vec![contour_face(), coarse])
            .process_frame(&frame, &mut canvas)
            .unwrap();

        let target = canvas.target();
        // Each mask blurred its own center.
        assert!((40..=215).contains(&(target.pixel(16, 16)[0] as i32)));
        assert!((40..=215).contains(&(target.pixel(46, 46)[0] as i32)));
        // Between the two masks: sharp.
        assert_eq!(target.pixel(32, 2), frame.pixel(32, 2));
        assert_eq!(target.pixel(60, 20), frame.pixel(60, 20));
    }

    #[test]
    fn test_processing_same_frame_twice_is_pixel_identical() {
        let frame = checkerboard(32, 32, 0);
        let faces = vec![contour_face()];

        let mut first = CpuCanvas::new(frame.clone());
        session(faces.clone())
            .process_frame(&frame, &mut first)
            .unwrap();
        let mut second = CpuCanvas::new(frame.clone());
        session(faces)
            .process_frame(&frame, &mut second)
            .unwrap();

        assert_eq!(first.target().data(), second.target().data());
    }

    #[test]
    fn test_no_leaked_clip_after_process() {
        let frame = checkerboard(32, 32, 0);
        let mut canvas = CpuCanvas::new(frame.clone());
        session(vec![contour_face()])
            .process_frame(&frame, &mut canvas)
            .unwrap();
        assert!(!canvas.is_clipped());
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn test_strict_session_drops_coarse_faces() {
        let frame = checkerboard(32, 32, 0);
        let mut strict = PrivacySession::new(
            Box::new(ScriptedDetector {
                records: vec![FaceRecord::coarse(Bounds::new(8.0, 8.0, 16.0, 16.0))],
            }),
            SessionConfig {
                fallback: FallbackPolicy::Drop,
                ..SessionConfig::default()
            },
            Box::new(NullEventSink),
        );
        let mut canvas = CpuCanvas::new(frame.clone());
        strict.process_frame(&frame, &mut canvas).unwrap();
        assert_eq!(canvas.target().data(), frame.data());
    }
}
