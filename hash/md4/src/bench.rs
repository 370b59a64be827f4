use test::Bencher;
use super::Md4;


#[bench]
pub fn md4_10(bh: &mut Bencher) {
    let mut sh = Md4::new();
    let bytes = [1u8; 10];
    bh.iter(|| {
        sh.update(&bytes).unwrap();
    });
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn md4_1k(bh: &mut Bencher) {
    let mut sh = Md4::new();
    let bytes = [1u8; 1024];
    bh.iter(|| {
        sh.update(&bytes).unwrap();
    });
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn md4_64k(bh: &mut Bencher) {
    let mut sh = Md4::new();
    let bytes = [1u8; 65536];
    bh.iter(|| {
        sh.update(&bytes).unwrap();
    });
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn md4_finalize_one_block(bh: &mut Bencher) {
    let bytes = [1u8; 55];
    bh.iter(|| Md4::digest(&bytes));
    bh.bytes = bytes.len() as u64;
}
