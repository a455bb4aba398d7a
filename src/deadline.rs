use std::future::Future;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Runs `fut` under an optional deadline. With `None` it waits forever.
pub(crate) async fn with_deadline<T, F>(
    operation: &str,
    deadline: Option<Duration>,
    fut: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let Some(after) = deadline else {
        return fut.await;
    };
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::timeout(
            operation,
            u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
        )),
    }
}
