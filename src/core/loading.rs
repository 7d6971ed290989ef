use std::future::Future;

/// Kick off one load per url, then collect the results in url order.
///
/// `start` must begin its request eagerly (a browser `fetch` does) and
/// return a future that only waits for it. Every `start` runs before the
/// first await, so total load time is the slowest request rather than the sum.
pub async fn load_concurrently<S, Fut>(urls: &[String], mut start: S) -> Vec<Fut::Output>
where
    S: FnMut(&str) -> Fut,
    Fut: Future,
{
    let pending: Vec<Fut> = urls.iter().map(|url| start(url)).collect();
    let mut out = Vec::with_capacity(pending.len());
    for fut in pending {
        out.push(fut.await);
    }
    out
}
