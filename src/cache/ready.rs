use tokio::sync::watch;

/// Read side of the data cache's "content ready" latch.
///
/// Cloning yields an independent observer of the same latch.
#[derive(Debug, Clone)]
pub struct ReadyFlag {
    rx: watch::Receiver<bool>,
}

impl ReadyFlag {
    pub(crate) fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    /// A flag that never changes. Handy for sessions without a cache.
    pub fn fixed(ready: bool) -> Self {
        let (_tx, rx) = watch::channel(ready);
        Self { rx }
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the latch is set. Returns `false` if the owning cache
    /// went away before that happened.
    pub async fn wait(&mut self) -> bool {
        self.rx.wait_for(|ready| *ready).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::watch;

    use super::ReadyFlag;

    #[test]
    fn fixed_flag_reports_its_value() {
        assert!(ReadyFlag::fixed(true).is_ready());
        assert!(!ReadyFlag::fixed(false).is_ready());
    }

    #[tokio::test]
    async fn wait_resolves_after_latch_and_fails_when_dropped() {
        let (tx, rx) = watch::channel(false);
        let mut flag = ReadyFlag::new(rx);
        let waiter = tokio::spawn(async move { flag.wait().await });
        tx.send_replace(true);
        assert!(waiter.await.expect("waiter should finish"));

        let mut never = ReadyFlag::fixed(false);
        assert!(!never.wait().await);
    }
}
