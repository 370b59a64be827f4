#![no_std]
use generic_array::{ArrayLength, GenericArray};
use generic_array::typenum::Unsigned;

mod error;
pub use error::Error;

/// The Digest trait specifies an interface common to digest functions
pub trait Digest : Default {
    type OutputSize: ArrayLength<u8>;
    type BlockSize: ArrayLength<u8>;

    /// Create new digest instance
    fn new() -> Self {
        Default::default()
    }

    /// Digest input data. This method can be called repeatedly
    /// for use with streaming messages. Fails once the digest has been
    /// finalized.
    fn input(&mut self, input: &[u8]) -> Result<(), Error>;

    /// Digest the UTF-8 encoding of a string.
    fn input_str(&mut self, input: &str) -> Result<(), Error> {
        self.input(input.as_bytes())
    }

    /// Retrieve the digest result. This method consumes digest instance
    fn result(self) -> GenericArray<u8, Self::OutputSize>;

    /// Get the block size in bytes.
    fn block_bytes(&self) -> usize { Self::BlockSize::to_usize() }

    /// Get the block size in bits.
    fn block_bits(&self) -> usize { 8 * Self::BlockSize::to_usize() }

    /// Get the output size in bytes.
    fn output_bytes(&self) -> usize { Self::OutputSize::to_usize() }

    /// Get the output size in bits.
    fn output_bits(&self) -> usize { 8 * Self::OutputSize::to_usize() }
}
