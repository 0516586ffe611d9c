//! 并发执行工具

use futures::StreamExt;
use futures::stream;
use std::future::Future;

/// 以限定并发数执行一组Future
///
/// 结果按输入顺序返回，与各Future实际完成的先后无关。
pub async fn do_parallel_with_limit<F>(futures: Vec<F>, max_parallels: usize) -> Vec<F::Output>
where
    F: Future,
{
    stream::iter(futures)
        .buffered(max_parallels.max(1))
        .collect()
        .await
}
