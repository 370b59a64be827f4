use crypto_digest::Digest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            $crate::hash::Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

pub fn main_test<D: Digest>(tests: &[Test]) {
    // Test that it works when accepting the message all at once
    for t in tests.iter() {
        let mut sh = D::new();
        sh.input(t.input).unwrap();

        let out = sh.result();

        assert_eq!(out[..], t.output[..], "{}", t.name);
    }

    // Test that it works when accepting the message in pieces
    for t in tests.iter() {
        let mut sh = D::new();
        let len = t.input.len();
        let mut left = len;
        while left > 0 {
            let take = (left + 1) / 2;
            sh.input(&t.input[len - left..take + len - left]).unwrap();
            left -= take;
        }

        let out = sh.result();

        assert_eq!(out[..], t.output[..], "{} (chunked)", t.name);
    }
}

/// Feed `input` split at every possible position and check that each split
/// yields the same result as the whole message.
pub fn split_test<D: Digest>(input: &[u8]) {
    let mut sh = D::new();
    sh.input(input).unwrap();
    let expected = sh.result();

    for mid in 0..=input.len() {
        let mut sh = D::new();
        sh.input(&input[..mid]).unwrap();
        sh.input(&input[mid..]).unwrap();
        assert_eq!(sh.result()[..], expected[..], "split at {}", mid);
    }
}

pub fn one_million_a<D: Digest>(expected: &[u8]) {
    let mut sh = D::new();
    for _ in 0..50000 {
        sh.input(&[b'a'; 10]).unwrap();
    }
    sh.input(&[b'a'; 500000]).unwrap();
    let out = sh.result();
    assert_eq!(out[..], expected[..]);
}

/// Feed 1,000,000 'a's into the digest with varying input sizes and check that
/// the result is correct.
pub fn one_million_random<D: Digest>(expected: &[u8]) {
    let total_size = 1000000;
    let mut sh = D::new();
    let blocksize = sh.block_bytes();
    let buffer = vec![b'a'; blocksize * 2];
    let mut rng = StdRng::seed_from_u64(0x6d64_3421);
    let mut count = 0;

    while count < total_size {
        let next = rng.gen_range(0..=2 * blocksize);
        let size = next.min(total_size - count);
        sh.input(&buffer[..size]).unwrap();
        count += size;
    }

    let out = sh.result();
    assert_eq!(out[..], expected[..]);
}
