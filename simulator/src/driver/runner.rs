use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use token_core::TokenPool;

use super::DriverError;
use super::state::{UserStats, Workload, WorkloadSummary};

/// Spawns one task per user and waits for all of them.
///
/// Each user acquires a token, logs it, then holds it for the workload's use
/// delay. The delay is awaited after `acquire` returns, so the pool lock is
/// never held across it.
pub async fn run<R>(
    workload: &Workload,
    pool: Arc<TokenPool<R>>,
) -> Result<WorkloadSummary, DriverError>
where
    R: Rng + Send + 'static,
{
    let mut handles = Vec::with_capacity(workload.users());

    for user_id in 1..=workload.users() {
        let pool = pool.clone();
        let operations = workload.operations_per_user();
        let delay = workload.use_delay();

        handles.push(tokio::spawn(async move {
            let mut tokens_used = BTreeMap::new();
            for _ in 0..operations {
                let token = pool.acquire();
                tracing::info!(usage = token.usage_count(), "User {} used {}", user_id, token.id());
                *tokens_used.entry(token.id().to_string()).or_insert(0) += 1;

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            UserStats {
                user_id,
                operations: operations as u64,
                tokens_used,
            }
        }));
    }

    let mut per_user = Vec::with_capacity(handles.len());
    for handle in handles {
        per_user.push(handle.await?);
    }

    let total_operations = per_user.iter().map(|u| u.operations).sum();
    tracing::info!(total_operations, users = per_user.len(), "workload finished");

    Ok(WorkloadSummary {
        total_operations,
        per_user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;
    use token_core::PoolConfig;

    fn pool(tokens: usize) -> Arc<TokenPool> {
        Arc::new(TokenPool::with_rng(PoolConfig::new(tokens), StdRng::seed_from_u64(5)).unwrap())
    }

    #[tokio::test]
    async fn test_run_conserves_operations() {
        let pool = pool(3);
        let workload = Workload::new(6, 40, Duration::ZERO).unwrap();

        let summary = run(&workload, pool.clone()).await.unwrap();
        assert_eq!(summary.total_operations, 240);
        assert_eq!(summary.per_user.len(), 6);

        let snap = pool.snapshot();
        assert_eq!(snap.total_usage(), 240);
        for token in snap.tokens() {
            assert_eq!(token.usage_count(), 80);
        }

        for (i, user) in summary.per_user.iter().enumerate() {
            assert_eq!(user.user_id, i + 1);
            assert_eq!(user.tokens_used.values().sum::<u64>(), 40);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_run_on_worker_threads() {
        let pool = pool(4);
        let workload = Workload::new(16, 50, Duration::from_micros(50)).unwrap();

        let summary = run(&workload, pool.clone()).await.unwrap();
        assert_eq!(summary.total_operations, workload.total_operations());

        let usage: Vec<u64> = pool.snapshot().tokens().iter().map(|t| t.usage_count()).collect();
        assert_eq!(usage.iter().sum::<u64>(), 800);
        assert_eq!(usage, vec![200; 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_does_not_hold_pool() {
        let pool = pool(2);
        let workload = Workload::new(2, 3, Duration::from_secs(1)).unwrap();

        let runner = {
            let pool = pool.clone();
            tokio::spawn(async move { run(&workload, pool).await })
        };

        // Both users are sleeping with a token in hand; the pool stays usable.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let snap = pool.snapshot();
        assert_eq!(snap.total_usage(), 2);

        let summary = runner.await.unwrap().unwrap();
        assert_eq!(summary.total_operations, 6);
    }
}
