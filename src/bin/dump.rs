use std::io::Write;

use rand_core::RngCore;
use xnasam::XNasamRng;

/// Streams raw little-endian output bytes to stdout in 64 KiB batches,
/// for piping into an external statistical test suite.
fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
    let stream_idx: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = XNasamRng::new(seed, stream_idx);
    let mut stdout = std::io::stdout().lock();
    let mut buf = [0u8; 0x10000];
    loop {
        rng.fill_bytes(&mut buf);
        stdout.write_all(&buf)?;
    }
}
