//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `cpu_stopwatch` package `README.md`.

use std::hint::black_box;

use cpu_stopwatch::Stopwatch;

fn main() {
    let mut stopwatch = Stopwatch::new();
    stopwatch.start();

    // Perform some processor-intensive work.
    let mut sum = 0_u64;
    for i in 0..1_000_000 {
        sum = sum.wrapping_add(i);
    }
    black_box(sum);

    let seconds = stopwatch.stop();
    println!("consumed {seconds:.6} seconds of process time");
}
