use super::error::{LinesError, LinesResult};

/// A forward-only reader over an in-memory lines file.
///
/// All multi-byte values are little-endian. Every read either consumes
/// exactly its encoded width or fails with [`LinesError::Truncated`] and
/// leaves the position untouched. The cursor never seeks backward.
///
/// This is the only place bounds are checked; the decoder relies on it.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    /// The underlying byte buffer
    bytes: &'a [u8],
    /// Current read position
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteCursor { bytes, pos: 0 }
    }

    /// Returns the current position in the buffer.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the total length of the buffer in bytes.
    pub fn length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Returns true once every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads `length` bytes and advances past them.
    pub fn read_bytes(&mut self, length: usize) -> LinesResult<&'a [u8]> {
        let available = self.remaining();
        if length > available {
            return Err(LinesError::Truncated {
                offset: self.pos,
                needed: length,
                available,
            });
        }

        let bytes = &self.bytes[self.pos..self.pos + length];
        self.pos += length;
        Ok(bytes)
    }

    /// Reads a fixed-size array, used by all the numeric readers.
    fn read_array<const N: usize>(&mut self) -> LinesResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    pub fn read_u8(&mut self) -> LinesResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads an unsigned 16-bit little-endian integer.
    pub fn read_u16(&mut self) -> LinesResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads an unsigned 32-bit little-endian integer.
    pub fn read_u32(&mut self) -> LinesResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a 32-bit little-endian IEEE 754 float.
    pub fn read_f32(&mut self) -> LinesResult<f32> {
        self.read_array().map(f32::from_le_bytes)
    }
}
