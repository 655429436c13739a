use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use xnasam::XNasamRng;

#[derive(Serialize)]
struct StreamReport {
    stream: usize,
    state: XNasamRng,
    outputs: Vec<u64>,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    streams: usize,
    count: usize,
    reports: Vec<StreamReport>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let streams: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(4);
    let count: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(8);

    eprintln!("Drawing {count} words from each of {streams} streams, seed={seed}");

    // One independent child per stream; workers never share state.
    let mut root = XNasamRng::new(seed, 0);
    let children = root.split_streams(streams);

    let t = Instant::now();
    let reports: Vec<StreamReport> = children
        .into_par_iter()
        .enumerate()
        .map(|(stream, mut rng)| {
            let state = rng.clone();
            let outputs = (0..count).map(|_| rng.next_u64()).collect();
            StreamReport {
                stream,
                state,
                outputs,
            }
        })
        .collect();
    eprintln!("Filled in {:.1} ms", t.elapsed().as_secs_f64() * 1000.0);

    let report = Report {
        seed,
        streams,
        count,
        reports,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("JSON encode failed")
    );
}
