use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simulator::cli::Args;
use simulator::logging;
use simulator::report::Report;
use token_core::TokenPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let pool = TokenPool::with_rng(args.pool_config(), rng)
        .context("failed to create token pool")?;
    let pool = Arc::new(pool);

    let workload = args.workload()?;
    let summary = workload
        .run(pool.clone())
        .await
        .context("workload did not complete")?;

    if args.reset {
        pool.reset();
        println!("All token usages have been reset.");
    }

    println!();
    print!("{}", Report::new(&pool.snapshot(), summary.total_operations));
    Ok(())
}
