//! Basic example demonstrating the key `cpu_stopwatch` operations.
//!
//! This example shows how to use the main operations of the package:
//! - `start()` / `stop()`: measure a whole cycle of work
//! - `lap()`: measure phases within a cycle without ending it
//! - `elapsed()`: peek at the running total without disturbing it
//!
//! Run with: `cargo run --example cpu_stopwatch_basic`.

use std::hint::black_box;
use std::time::Duration;

use cpu_stopwatch::Stopwatch;

fn main() {
    println!("=== Process Time Measurement Example ===");
    println!();

    let mut stopwatch = Stopwatch::new();
    stopwatch.start();

    // Phase one: arithmetic-heavy work.
    {
        let mut sum = 0_u64;
        for i in 0_u64..5_000_000 {
            sum = sum.wrapping_add(i.wrapping_mul(31));
        }
        black_box(sum);
    }
    println!("arithmetic phase:  {:.6} s of process time", stopwatch.lap());

    // Phase two: string-building work.
    {
        let mut text = String::new();
        for i in 0..20_000 {
            text.push_str("line ");
            text.push_str(&i.to_string());
            text.push('\n');
        }
        black_box(text);
    }
    println!("string phase:      {:.6} s of process time", stopwatch.lap());

    // Sleeping consumes wall-clock time but almost no process time.
    let before_sleep = stopwatch.elapsed();
    std::thread::sleep(Duration::from_millis(100));
    let after_sleep = stopwatch.elapsed();
    println!(
        "100 ms of sleep:   {:.6} s of process time",
        after_sleep - before_sleep
    );

    let total = stopwatch.stop();
    println!();
    println!("whole cycle:       {total:.6} s of process time");
}
