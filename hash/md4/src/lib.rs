//! An implementation of the MD4 cryptographic hash (RFC 1320).
//!
//! First create an `Md4` object using the `Md4` constructor, then feed it
//! input using the `update` method, which may be called any number of times.
//!
//! After the entire input has been fed to the hash read the result using
//! the `finalize` or `hex_digest` methods. A finalized `Md4` rejects further
//! input; start a new instance for the next message.
//!
//! ```
//! use md4::Md4;
//!
//! let mut hasher = Md4::new();
//! hasher.update(b"ab").unwrap();
//! hasher.update(b"c").unwrap();
//! assert_eq!(hasher.hex_digest(), "a448017aaf21d8525fc10ae87aa6729d");
//!
//! assert!(hasher.update(b"d").is_err());
//! ```
//!
//! `Md4` holds no locks. An instance is mutated through `&mut self`, so
//! sharing one between threads is up to the caller.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "nightly", feature(test))]

#[cfg(all(test, feature = "nightly"))]
extern crate test;

use byte_tools::{read_u32v_le, write_u32v_le};
use crypto_fixed_buffer::{FixedBuffer, FixedBuffer64, StandardPadding, BLOCK_LEN};
use generic_array::GenericArray;
use generic_array::typenum::{U16, U64};
use log::{debug, trace};

pub use crypto_digest::{Digest, Error};

mod consts;
use consts::ROUNDS;

/// Size of an MD4 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Length in bytes of a `len`-byte message once padding is applied: a `0x80`
/// marker, zeros up to 56 mod 64, then the 8-byte bit length.
pub fn padded_len(len: u64) -> u64 {
    let block = BLOCK_LEN as u64;
    let blocks = if len % block < block - 8 { len / block + 1 } else { len / block + 2 };
    blocks * block
}

/// A structure that represents the state of a digest computation for the MD4
/// digest function
#[derive(Clone, Copy)]
struct Md4State {
    s: [u32; 4],
    blocks: u64,
}

impl Md4State {
    fn new() -> Md4State {
        Md4State {
            s: [consts::S0, consts::S1, consts::S2, consts::S3],
            blocks: 0,
        }
    }

    fn process_block(&mut self, input: &[u8]) {
        let mut data = [0u32; 16];
        read_u32v_le(&mut data, input);

        let [mut a, mut b, mut c, mut d] = self.s;

        for round in ROUNDS.iter() {
            for (i, &k) in round.order.iter().enumerate() {
                let t = a.wrapping_add((round.func)(b, c, d))
                    .wrapping_add(data[k])
                    .wrapping_add(round.constant)
                    .rotate_left(round.shifts[i % 4]);
                // The oldest word is the next one to be rewritten.
                (a, b, c, d) = (d, t, b, c);
            }
        }

        self.s[0] = self.s[0].wrapping_add(a);
        self.s[1] = self.s[1].wrapping_add(b);
        self.s[2] = self.s[2].wrapping_add(c);
        self.s[3] = self.s[3].wrapping_add(d);
        self.blocks += 1;
    }
}

/// The MD4 Digest algorithm
#[derive(Clone, Copy)]
pub struct Md4 {
    length_bytes: u64,
    buffer: FixedBuffer64,
    state: Md4State,
    finished: bool,
}

impl Md4 {
    /// Construct a new instance of the MD4 Digest.
    pub fn new() -> Md4 {
        Md4 {
            length_bytes: 0,
            buffer: FixedBuffer64::new(),
            state: Md4State::new(),
            finished: false,
        }
    }

    /// Hash a complete message in one call.
    pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
        let mut sh = Md4::new();
        sh.absorb(data);
        sh.finalize()
    }

    /// Append `input` to the message. Fails once the digest has been
    /// finalized.
    pub fn update(&mut self, input: &[u8]) -> Result<(), Error> {
        if self.finished {
            debug!("md4: rejected {} bytes of input after finalize", input.len());
            return Err(Error::AlreadyFinalized);
        }
        self.absorb(input);
        Ok(())
    }

    fn absorb(&mut self, input: &[u8]) {
        // The length suffix is the message length mod 2^64 bits.
        self.length_bytes = self.length_bytes.wrapping_add(input.len() as u64);
        let self_state = &mut self.state;
        self.buffer.input(input, |d: &[u8]| {
            self_state.process_block(d);
        });
    }

    /// Pad and process the message, then return the digest. Calling it again
    /// returns the same digest.
    pub fn finalize(&mut self) -> [u8; DIGEST_LEN] {
        if !self.finished {
            self.finish();
        }

        let mut out = [0u8; DIGEST_LEN];
        write_u32v_le(&mut out, &self.state.s);
        out
    }

    /// `finalize`, encoded as 32 lowercase hex digits.
    #[cfg(feature = "std")]
    pub fn hex_digest(&mut self) -> String {
        hex::encode(self.finalize())
    }

    fn finish(&mut self) {
        let self_state = &mut self.state;
        self.buffer.standard_padding(8, |d: &[u8]| {
            self_state.process_block(d);
        });
        let bit_len = self.length_bytes << 3;
        write_u32v_le(self.buffer.next(8), &[bit_len as u32, (bit_len >> 32) as u32]);
        self_state.process_block(self.buffer.full_buffer());
        self.finished = true;

        trace!("md4: finalized {} bytes in {} blocks", self.length_bytes, self.state.blocks);
    }
}

impl Default for Md4 {
    fn default() -> Self { Self::new() }
}

impl Digest for Md4 {
    type OutputSize = U16;
    type BlockSize = U64;

    fn input(&mut self, input: &[u8]) -> Result<(), Error> {
        self.update(input)
    }

    fn result(mut self) -> GenericArray<u8, U16> {
        GenericArray::clone_from_slice(&self.finalize())
    }
}


#[cfg(all(test, feature = "nightly"))]
mod bench;
