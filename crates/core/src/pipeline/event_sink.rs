/// Cross-cutting sink for pipeline diagnostic events.
///
/// Events are observability only, never control flow: every failure path
/// that reports here also degrades gracefully (empty detection result,
/// restored canvas state). Decoupling the sink lets the CLI log through the
/// `log` crate while a GUI routes events to its own signals.
pub trait EventSink: Send {
    /// The detection capability failed for one frame; the frame passed
    /// through sharp.
    fn detection_failed(&mut self, frame_index: usize, error: &dyn std::error::Error);

    /// A draw call failed mid-face; the canvas state was restored before
    /// the error surfaced.
    fn draw_failed(&mut self, frame_index: usize, error: &dyn std::error::Error);

    /// One frame finished compositing. `masked` counts faces that produced
    /// a non-empty mask region.
    fn frame_processed(&mut self, frame_index: usize, faces: usize, masked: usize);
}

/// Silent sink that discards all events.
///
/// Used where the host has its own progress reporting, and by tests where
/// event output is irrelevant.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn detection_failed(&mut self, _frame_index: usize, _error: &dyn std::error::Error) {}
    fn draw_failed(&mut self, _frame_index: usize, _error: &dyn std::error::Error) {}
    fn frame_processed(&mut self, _frame_index: usize, _faces: usize, _masked: usize) {}
}

/// Sink that routes events to the `log` crate.
///
/// Failures log at `warn`, per-frame completion at `debug` so a steady
/// 30–60 fps stream does not flood the default log level.
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn detection_failed(&mut self, frame_index: usize, error: &dyn std::error::Error) {
        log::warn!("frame {frame_index}: detection failed, passing frame through sharp: {error}");
    }

    fn draw_failed(&mut self, frame_index: usize, error: &dyn std::error::Error) {
        log::warn!("frame {frame_index}: draw failed mid-face, canvas restored: {error}");
    }

    fn frame_processed(&mut self, frame_index: usize, faces: usize, masked: usize) {
        log::debug!("frame {frame_index}: {faces} face(s) detected, {masked} masked");
    }
}
