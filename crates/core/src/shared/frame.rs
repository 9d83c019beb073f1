use ndarray::{ArrayView3, ArrayViewMut3};

/// One camera frame: contiguous interleaved bytes in row-major order.
///
/// The pipeline treats pixel data as opaque; decode and colorspace
/// conversion happen at the capture/I/O boundary. `index` is the frame's
/// position in the capture stream, carried for diagnostics only.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// A frame of the given size with every byte set to `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8, index: usize) -> Self {
        let len = (width as usize) * (height as usize) * (channels as usize);
        Self::new(vec![value; len], width, height, channels, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte slice for the pixel at `(x, y)`, one byte per channel.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height);
        let c = self.channels as usize;
        let offset = (y as usize * self.width as usize + x as usize) * c;
        &self.data[offset..offset + c]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
