/// Buffer length does not match the declared image dimensions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("gray buffer of {width}x{height} needs {expected} bytes, got {got}")]
pub struct ImageBufferError {
    pub width: usize,
    pub height: usize,
    pub expected: usize,
    pub got: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl<'a> GrayImageView<'a> {
    /// Wrap a row-major buffer, checking its length.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageBufferError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bounds-checked pixel read.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// One image row, or `None` past the last row.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Image of the given size with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageBufferError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.view().get(x, y)
    }

    /// Bounds-checked pixel write. Returns `false` for coordinates outside the image.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x] = value;
        true
    }

    /// Apply `f` to one pixel in place.
    #[inline]
    pub fn update(&mut self, x: usize, y: usize, f: impl FnOnce(u8) -> u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let px = &mut self.data[y * self.width + x];
        *px = f(*px);
        true
    }
}

fn check_len(width: usize, height: usize, got: usize) -> Result<(), ImageBufferError> {
    let expected = width.saturating_mul(height);
    if got != expected {
        return Err(ImageBufferError {
            width,
            height,
            expected,
            got,
        });
    }
    Ok(())
}
