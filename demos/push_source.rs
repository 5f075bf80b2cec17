//! Push source example: a producer thread feeds a bounded queue while the
//! consumer drains it through a pipeline.

use std::thread;
use std::time::Duration;

use pullchain::prelude::*;
use pullchain::sources::channel;
use pullchain::QueueConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("pullchain=debug"))
        .init();

    let (tx, rx) = channel(QueueConfig::bounded(8))?;

    let producer = thread::spawn(move || {
        for reading in 0..40u32 {
            if tx.send(reading * 7 % 23).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(1));
        }
    });

    let peaks: Vec<(usize, u32)> = rx
        .traced("sensor")
        .enumerate()
        .filter(|&(_, v)| v > 18)
        .collect();

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;

    println!("{} readings above 18:", peaks.len());
    for (i, v) in peaks {
        println!("  #{i:>2}: {v}");
    }

    Ok(())
}
