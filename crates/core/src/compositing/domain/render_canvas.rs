use crate::compositing::blur_filter::BlurEffect;
use crate::masking::mask_region::MaskRegion;

/// The opaque 2D drawing capability for one frame's render target.
///
/// A canvas is owned by the compositor only for the duration of one frame;
/// nothing here is retained across frames. Clip state is scoped through
/// `save`/`restore` pairs; draw calls return `Result` because the platform
/// capability can fail mid-frame, while clip bookkeeping cannot.
pub trait RenderCanvas {
    /// Draw the unmodified source frame as the base layer.
    fn draw_frame(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Checkpoint the current clip state.
    fn save(&mut self);

    /// Restore the most recent checkpoint, undoing any clip applied since.
    fn restore(&mut self);

    /// Intersect the current clip with `region`, antialiased.
    fn clip(&mut self, region: &MaskRegion);

    /// Re-render the source frame through `blur` into the current clip.
    fn draw_frame_with(&mut self, blur: &BlurEffect) -> Result<(), Box<dyn std::error::Error>>;
}
