use std::future::Future;

use futures::future::join_all;

/// Drives every future to completion concurrently and maps each failure to a
/// caller-supplied fallback by position. The whole set always resolves; one
/// failing item never rejects its siblings. Results keep the input order.
pub async fn settle_all<I, Fut, T, E>(tasks: I, mut on_error: impl FnMut(usize, E) -> T) -> Vec<T>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    join_all(tasks)
        .await
        .into_iter()
        .enumerate()
        .map(|(idx, result)| result.unwrap_or_else(|err| on_error(idx, err)))
        .collect()
}
