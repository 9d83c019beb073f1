pub mod cpu_canvas;
mod gaussian;
