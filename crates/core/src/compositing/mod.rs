pub mod blur_filter;
pub mod domain;
pub mod frame_compositor;
pub mod infrastructure;
