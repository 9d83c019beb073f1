use crate::pipeline::event_sink::EventSink;
use crate::shared::frame::Frame;

use super::domain::face_detector::{DetectorConfig, FaceDetector};
use super::domain::face_record::FaceRecord;

/// Normalizes the external detection capability for the frame pipeline.
///
/// The configuration is fixed at construction. Zero faces is a normal
/// outcome (empty vector); a capability failure is absorbed into an empty
/// vector plus a `detection_failed` event, so a single bad frame never
/// takes down the pipeline: it passes through sharp and self-heals on the
/// next frame.
pub struct DetectionAdapter {
    detector: Box<dyn FaceDetector>,
    config: DetectorConfig,
}

impl DetectionAdapter {
    pub fn new(detector: Box<dyn FaceDetector>, config: DetectorConfig) -> Self {
        Self { detector, config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn detect(&mut self, frame: &Frame, events: &mut dyn EventSink) -> Vec<FaceRecord> {
        match self.detector.detect(frame, &self.config) {
            Ok(records) => records,
            Err(e) => {
                events.detection_failed(frame.index(), e.as_ref());
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::event_sink::recording::RecordingEventSink;
    use crate::shared::geometry::Bounds;

    struct FixedDetector {
        records: Vec<FaceRecord>,
    }

    impl FaceDetector for FixedDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _config: &DetectorConfig,
        ) -> Result<Vec<FaceRecord>, Box<dyn std::error::Error>> {
            Ok(self.records.clone())
        }
    }

    struct FailingDetector;

    impl FaceDetector for FailingDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _config: &DetectorConfig,
        ) -> Result<Vec<FaceRecord>, Box<dyn std::error::Error>> {
            Err("capability unavailable".into())
        }
    }

    fn frame(index: usize) -> Frame {
        Frame::filled(8, 8, 3, 0, index)
    }

    #[test]
    fn test_passes_records_through_in_order() {
        let records = vec![
            FaceRecord::coarse(Bounds::new(0.0, 0.0, 10.0, 10.0)),
            FaceRecord::coarse(Bounds::new(20.0, 20.0, 10.0, 10.0)),
        ];
        let mut adapter = DetectionAdapter::new(
            Box::new(FixedDetector {
                records: records.clone(),
            }),
            DetectorConfig::default(),
        );
        let mut events = RecordingEventSink::default();
        let result = adapter.detect(&frame(0), &mut events);
        assert_eq!(result, records);
        assert!(events.detection_failures.is_empty());
    }

    #[test]
    fn test_zero_faces_is_normal() {
        let mut adapter = DetectionAdapter::new(
            Box::new(FixedDetector { records: vec![] }),
            DetectorConfig::default(),
        );
        let mut events = RecordingEventSink::default();
        assert!(adapter.detect(&frame(3), &mut events).is_empty());
        assert!(events.detection_failures.is_empty());
    }

    #[test]
    fn test_failure_becomes_empty_result_plus_event() {
        let mut adapter =
            DetectionAdapter::new(Box::new(FailingDetector), DetectorConfig::default());
        let mut events = RecordingEventSink::default();
        let result = adapter.detect(&frame(7), &mut events);
        assert!(result.is_empty());
        assert_eq!(events.detection_failures.len(), 1);
        assert_eq!(events.detection_failures[0].0, 7);
        assert!(events.detection_failures[0].1.contains("capability unavailable"));
    }

    #[test]
    fn test_same_config_every_frame() {
        let mut adapter = DetectionAdapter::new(
            Box::new(FixedDetector { records: vec![] }),
            DetectorConfig::default(),
        );
        let mut events = RecordingEventSink::default();
        adapter.detect(&frame(0), &mut events);
        adapter.detect(&frame(1), &mut events);
        assert_eq!(*adapter.config(), DetectorConfig::default());
    }
}
