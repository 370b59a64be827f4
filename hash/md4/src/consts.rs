pub const S0: u32 = 0x6745_2301;
pub const S1: u32 = 0xefcd_ab89;
pub const S2: u32 = 0x98ba_dcfe;
pub const S3: u32 = 0x1032_5476;

/// Bitwise conditional: picks `y` where `x` is set, `z` elsewhere.
pub fn f(x: u32, y: u32, z: u32) -> u32 { (x & y) | (!x & z) }

/// Bitwise majority.
pub fn g(x: u32, y: u32, z: u32) -> u32 { (x & y) | (x & z) | (y & z) }

pub fn h(x: u32, y: u32, z: u32) -> u32 { x ^ y ^ z }

/// Parameters of one 16-step round of the compression function.
pub struct Round {
    /// Non-linear mixing function applied to the three passive words.
    pub func: fn(u32, u32, u32) -> u32,
    /// Added to every step of the round.
    pub constant: u32,
    /// Message word consumed by each step.
    pub order: [usize; 16],
    /// Left-rotation amounts, repeated every four steps.
    pub shifts: [u32; 4],
}

pub const ROUNDS: [Round; 3] = [
    Round {
        func: f,
        constant: 0x0000_0000,
        order: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        shifts: [3, 7, 11, 19],
    },
    Round {
        func: g,
        constant: 0x5a82_7999,
        order: [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15],
        shifts: [3, 5, 9, 13],
    },
    Round {
        func: h,
        constant: 0x6ed9_eba1,
        order: [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15],
        shifts: [3, 9, 11, 15],
    },
];
