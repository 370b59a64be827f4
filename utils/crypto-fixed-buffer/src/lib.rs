#![no_std]
use byte_tools::{copy_memory, zero};

/// Size in bytes of the blocks accumulated by `FixedBuffer64`.
pub const BLOCK_LEN: usize = 64;

/// A `FixedBuffer` collects input into fixed size blocks. When the buffer
/// becomes full it must be processed. The `input()` method takes care of
/// processing and then clearing the buffer automatically. The other methods
/// do not, and leave it to the caller to process the buffer. Any method that
/// writes into the buffer, or hands out bytes that can be written, marks those
/// bytes as used.
pub trait FixedBuffer {
    /// Input a slice of bytes. Every time the buffer becomes full, process it
    /// with the provided function and then clear it.
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], func: F);

    /// Reset the buffer.
    fn reset(&mut self);

    /// Zero the buffer up until the specified index. The buffer position
    /// must not be greater than that index.
    fn zero_until(&mut self, idx: usize);

    /// Get a slice of the buffer of the specified size. There must be at least
    /// that many bytes remaining in the buffer.
    fn next(&mut self, len: usize) -> &mut [u8];

    /// Get the current buffer. The buffer must already be full. This clears the
    /// buffer as well.
    fn full_buffer(&mut self) -> &[u8];

    /// Get the current position of the buffer.
    fn position(&self) -> usize;

    /// Get the number of bytes remaining in the buffer until it is full.
    fn remaining(&self) -> usize { self.size() - self.position() }

    /// Get the size of the buffer
    fn size(&self) -> usize;
}

/// A fixed size buffer of 64 bytes, the block size of the MD4 family.
#[derive(Clone, Copy)]
pub struct FixedBuffer64 {
    buffer: [u8; BLOCK_LEN],
    buffer_idx: usize,
}

impl FixedBuffer64 {
    /// Create a new buffer
    pub fn new() -> FixedBuffer64 {
        FixedBuffer64 {
            buffer: [0u8; BLOCK_LEN],
            buffer_idx: 0,
        }
    }
}

impl Default for FixedBuffer64 {
    fn default() -> Self { Self::new() }
}

impl FixedBuffer for FixedBuffer64 {
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], mut func: F) {
        let mut i = 0;

        // Top up a partially filled buffer first, processing it if it fills.
        if self.buffer_idx != 0 {
            let buffer_remaining = BLOCK_LEN - self.buffer_idx;
            if input.len() < buffer_remaining {
                copy_memory(input, &mut self.buffer[self.buffer_idx..][..input.len()]);
                self.buffer_idx += input.len();
                return;
            }
            copy_memory(&input[..buffer_remaining], &mut self.buffer[self.buffer_idx..]);
            self.buffer_idx = 0;
            func(&self.buffer);
            i += buffer_remaining;
        }

        // Whole blocks go straight from the input without a copy.
        while input.len() - i >= BLOCK_LEN {
            func(&input[i..i + BLOCK_LEN]);
            i += BLOCK_LEN;
        }

        // The buffer is empty here and less than a block of input is left.
        let input_remaining = input.len() - i;
        copy_memory(&input[i..], &mut self.buffer[..input_remaining]);
        self.buffer_idx = input_remaining;
    }

    fn reset(&mut self) {
        self.buffer_idx = 0;
    }

    fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx);
        zero(&mut self.buffer[self.buffer_idx..idx]);
        self.buffer_idx = idx;
    }

    fn next(&mut self, len: usize) -> &mut [u8] {
        self.buffer_idx += len;
        &mut self.buffer[self.buffer_idx - len..self.buffer_idx]
    }

    fn full_buffer(&mut self) -> &[u8] {
        assert!(self.buffer_idx == BLOCK_LEN);
        self.buffer_idx = 0;
        &self.buffer[..]
    }

    fn position(&self) -> usize { self.buffer_idx }

    fn size(&self) -> usize { BLOCK_LEN }
}

/// The `StandardPadding` trait adds the `0x80`, zeros, length-suffix padding
/// shared by MD4 and its descendants to a `FixedBuffer`.
pub trait StandardPadding {
    /// Add standard padding to the buffer. The buffer must not be full when
    /// this method is called and is guaranteed to have exactly rem remaining
    /// bytes when it returns. If there are not at least rem bytes available,
    /// the buffer will be zero padded, processed, cleared, and then filled with
    /// zeros again until only rem bytes are remaining.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F);
}

impl<T: FixedBuffer> StandardPadding for T {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        let size = self.size();

        self.next(1)[0] = 0x80;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
        }

        self.zero_until(size - rem);
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedBuffer, FixedBuffer64, StandardPadding, BLOCK_LEN};

    #[test]
    fn input_carries_partial_blocks() {
        let mut buf = FixedBuffer64::new();
        let mut blocks = 0;
        buf.input(&[1u8; 40], |_| blocks += 1);
        assert_eq!(blocks, 0);
        assert_eq!(buf.position(), 40);

        buf.input(&[2u8; 100], |d| {
            assert_eq!(d.len(), BLOCK_LEN);
            blocks += 1;
        });
        assert_eq!(blocks, 2);
        assert_eq!(buf.position(), 12);
        assert_eq!(buf.remaining(), 52);
    }

    #[test]
    fn padding_fits_in_current_block() {
        let mut buf = FixedBuffer64::new();
        buf.input(&[0xaa; 55], |_| panic!("no block is complete yet"));
        let mut spilled = 0;
        buf.standard_padding(8, |_| spilled += 1);
        assert_eq!(spilled, 0);
        assert_eq!(buf.position(), 56);
        assert_eq!(buf.next(8).len(), 8);
        let block = buf.full_buffer();
        assert_eq!(block[55], 0x80);
    }

    #[test]
    fn padding_spills_into_next_block() {
        let mut buf = FixedBuffer64::new();
        buf.input(&[0xaa; 56], |_| panic!("no block is complete yet"));
        let mut spilled = [0u8; BLOCK_LEN];
        let mut count = 0;
        buf.standard_padding(8, |d| {
            spilled.copy_from_slice(d);
            count += 1;
        });
        assert_eq!(count, 1);
        assert_eq!(spilled[56], 0x80);
        assert!(spilled[57..].iter().all(|&b| b == 0));
        assert_eq!(buf.position(), 56);
    }
}
