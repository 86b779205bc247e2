use handshake_random::{random::HandshakeRandom, test_utils::ZeroRng};

fn main() {
    divan::main();
}

#[divan::bench(
    args = [100, 1000]
)]
fn generate_with_os_rng(n: u32) {
    let mut csprng = rand::rngs::OsRng;
    for _ in 0..n {
        divan::black_box(HandshakeRandom::generate(&mut csprng));
    }
}

#[divan::bench(
    args = [100, 1000]
)]
fn generate_with_zero_rng(n: u32) {
    for _ in 0..n {
        divan::black_box(HandshakeRandom::generate(&mut ZeroRng));
    }
}

#[divan::bench]
fn parse_and_describe() -> String {
    let wire = [0x5Au8; 32];
    match HandshakeRandom::try_from_bytes(Some(divan::black_box(&wire[..]))) {
        Ok(random) => random.describe(),
        Err(e) => e.to_string(),
    }
}
