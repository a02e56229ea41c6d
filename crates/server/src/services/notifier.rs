use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::models::CrawlResultEvent;

enum Message {
    Publish(CrawlResultEvent),
}

/// Delivers crawl results to the configured webhook.
///
/// Delivery is best-effort: a failed or dropped notification is logged
/// and never surfaces to the crawl that produced it.
struct NotifierActor {
    client: reqwest::Client,
    webhook_url: Option<String>,
    receiver: mpsc::Receiver<Message>,
}

impl NotifierActor {
    async fn run(mut self) {
        info!("Result notifier started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                Message::Publish(event) => self.publish(event).await,
            }
        }

        info!("Result notifier stopped");
    }

    async fn publish(&self, event: CrawlResultEvent) {
        let Some(url) = &self.webhook_url else {
            debug!(movie_id = event.movie_id, "No webhook configured, dropping result event");
            return;
        };

        match self.client.post(url).json(&event).send().await {
            Ok(resp) if resp.status().is_success() => {
                debug!(
                    movie_id = event.movie_id,
                    metadata_id = event.metadata_id,
                    "Published crawl result"
                );
            }
            Ok(resp) => {
                error!(
                    movie_id = event.movie_id,
                    status = %resp.status(),
                    "Webhook rejected crawl result"
                );
            }
            Err(e) => {
                error!(movie_id = event.movie_id, "Failed to publish crawl result: {}", e);
            }
        }
    }
}

/// Cloneable handle to the notifier actor
#[derive(Clone)]
pub struct NotifierHandle {
    sender: mpsc::Sender<Message>,
}

impl NotifierHandle {
    /// Queue a crawl result for delivery (fire-and-forget)
    pub fn publish(&self, event: CrawlResultEvent) {
        if let Err(e) = self.sender.try_send(Message::Publish(event)) {
            warn!("Dropping crawl result notification: {}", e);
        }
    }
}

/// Spawn the notifier actor and return its handle
pub fn create_notifier(client: reqwest::Client, webhook_url: Option<String>) -> NotifierHandle {
    let (sender, receiver) = mpsc::channel(64);

    let actor = NotifierActor {
        client,
        webhook_url,
        receiver,
    };
    tokio::spawn(actor.run());

    NotifierHandle { sender }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_without_webhook_is_a_noop() {
        let notifier = create_notifier(reqwest::Client::new(), None);

        notifier.publish(CrawlResultEvent {
            movie_id: Some(1),
            metadata_id: 10,
            number_of_episodes: Some(8),
            vote_average: Some(8.2),
        });

        // The actor must drain the queue without erroring
        tokio::task::yield_now().await;
    }
}
