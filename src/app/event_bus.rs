use std::future::Future;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

/// Owns the loop's event channel and every task feeding it.
pub(crate) struct EventBusRuntime {
    tx: UnboundedSender<DomainEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl EventBusRuntime {
    pub(crate) fn spawn() -> (Self, UnboundedReceiver<DomainEvent>) {
        let (mut runtime, rx) = Self::detached();
        runtime.tasks.push(spawn_input_task(runtime.tx.clone()));
        (runtime, rx)
    }

    /// Bus without a terminal input task.
    pub(crate) fn detached() -> (Self, UnboundedReceiver<DomainEvent>) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                tx,
                tasks: Vec::new(),
            },
            rx,
        )
    }

    /// Runs `work` in the background and posts the event it resolves to.
    pub(crate) fn spawn_task<F>(&mut self, work: F)
    where
        F: Future<Output = DomainEvent> + Send + 'static,
    {
        self.tasks.retain(|task| !task.is_finished());
        let tx = self.tx.clone();
        self.tasks.push(tokio::spawn(async move {
            let event = work.await;
            let _ = tx.send(event);
        }));
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::EventBusRuntime;
    use crate::event::DomainEvent;

    #[tokio::test]
    async fn spawned_task_posts_its_event() {
        let (mut bus, mut rx) = EventBusRuntime::detached();
        bus.spawn_task(async { DomainEvent::CatalogSettled { retried: 2 } });

        let event = rx.recv().await.expect("task should post an event");
        assert!(matches!(event, DomainEvent::CatalogSettled { retried: 2 }));
        bus.shutdown();
    }
}
