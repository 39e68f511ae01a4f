//! Staged-load driver.
//!
//! Drives HTTP GETs against a target URL with a ramped worker count:
//! 5s up to 10 workers, 10s hold, 5s up to 50, 10s hold, 5s down to 0.
//! Each worker issues one request per second and records two checks:
//! status 200 and response time under the latency threshold.
//!
//! Usage:
//!   load-driver --url https://jsonplaceholder.typicode.com/posts/1
//!
//! The driver reports check totals on exit; it does not fail the process on
//! failed checks.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Ramp profile: each stage ramps linearly from the previous target to its
/// own over its duration.
const STAGES: &[(u64, usize)] = &[
    // Normal load
    (5, 10),
    (10, 10),
    // Stress load
    (5, 50),
    (10, 50),
    (5, 0),
];

#[derive(Parser, Debug)]
#[command(name = "load-driver")]
#[command(about = "Staged-concurrency HTTP load driver")]
struct Args {
    /// Target URL to GET
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com/posts/1")]
    url: String,

    /// Latency threshold in milliseconds for the response-time check
    #[arg(long, default_value = "500")]
    latency_ms: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct Stats {
    requests: AtomicU64,
    status_ok: AtomicU64,
    latency_ok: AtomicU64,
    errors: AtomicU64,
}

struct Worker {
    handle: JoinHandle<()>,
    stop: Arc<AtomicBool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let client = reqwest::Client::new();
    let stats = Arc::new(Stats::default());
    let threshold = Duration::from_millis(args.latency_ms);

    info!("Load driver starting against {}", args.url);

    let mut workers: Vec<Worker> = Vec::new();
    let mut finished: Vec<JoinHandle<()>> = Vec::new();
    let mut prev_target = 0usize;

    for &(duration_secs, target) in STAGES {
        info!(
            "Stage: ramp {} -> {} workers over {}s",
            prev_target, target, duration_secs
        );
        for sec in 1..=duration_secs {
            let desired = lerp(prev_target, target, sec, duration_secs);
            while workers.len() < desired {
                workers.push(spawn_worker(
                    &client,
                    &args.url,
                    threshold,
                    Arc::clone(&stats),
                ));
            }
            while workers.len() > desired {
                if let Some(worker) = workers.pop() {
                    worker.stop.store(true, Ordering::Relaxed);
                    finished.push(worker.handle);
                }
            }
            debug!("active workers: {}", workers.len());
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        prev_target = target;
    }

    for worker in workers {
        worker.stop.store(true, Ordering::Relaxed);
        finished.push(worker.handle);
    }
    join_all(finished).await;

    let requests = stats.requests.load(Ordering::Relaxed);
    let status_ok = stats.status_ok.load(Ordering::Relaxed);
    let latency_ok = stats.latency_ok.load(Ordering::Relaxed);
    let errors = stats.errors.load(Ordering::Relaxed);
    info!("Requests:            {}", requests);
    info!("Transport errors:    {}", errors);
    info!("Check 'status 200':  {}/{}", status_ok, requests);
    info!(
        "Check '< {}ms':      {}/{}",
        args.latency_ms, latency_ok, requests
    );
    Ok(())
}

/// Linear interpolation between stage targets, sampled once per second.
fn lerp(from: usize, to: usize, sec: u64, duration: u64) -> usize {
    let from = from as f64;
    let to = to as f64;
    let t = sec as f64 / duration as f64;
    (from + (to - from) * t).round() as usize
}

fn spawn_worker(
    client: &reqwest::Client,
    url: &str,
    threshold: Duration,
    stats: Arc<Stats>,
) -> Worker {
    let client = client.clone();
    let url = url.to_string();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let handle = tokio::spawn(async move {
        while !stop_flag.load(Ordering::Relaxed) {
            let start = Instant::now();
            match client.get(&url).send().await {
                Ok(resp) => {
                    let elapsed = start.elapsed();
                    stats.requests.fetch_add(1, Ordering::Relaxed);
                    if resp.status() == 200 {
                        stats.status_ok.fetch_add(1, Ordering::Relaxed);
                    }
                    if elapsed < threshold {
                        stats.latency_ok.fetch_add(1, Ordering::Relaxed);
                    }
                }
                Err(e) => {
                    stats.requests.fetch_add(1, Ordering::Relaxed);
                    stats.errors.fetch_add(1, Ordering::Relaxed);
                    warn!("request error: {}", e);
                }
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    });
    Worker { handle, stop }
}
