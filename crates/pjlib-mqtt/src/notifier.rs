//! [`StateNotifier`] over MQTT.

use std::collections::HashMap;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use pjlib_core::notify::StateNotifier;

use crate::settings::MqttSettings;

const KEEP_ALIVE: Duration = Duration::from_secs(60);
const RETRY_DELAY: Duration = Duration::from_secs(5);
const REQUEST_CAPACITY: usize = 64;

/// Latest availability payload per topic.
type Availability = HashMap<String, &'static str>;

/// Publishes notifier calls as retained QoS 1 messages.
///
/// Publishing never waits on the broker. State and attribute messages are
/// queued on the client and a full queue drops them with a warning; the next
/// poll republishes both. Availability is never dropped: the latest value per
/// topic is held until a background task has handed it to the client.
pub struct MqttNotifier {
    client: AsyncClient,
    prefix: String,
    availability: watch::Sender<Availability>,
    event_loop: JoinHandle<()>,
    availability_task: JoinHandle<()>,
}

impl MqttNotifier {
    /// Create the client and start its event loop. Must be called inside a
    /// tokio runtime.
    pub fn new(settings: &MqttSettings) -> Self {
        let client_id = settings.effective_client_id();
        info!(
            client_id = %client_id,
            broker = %settings.ip,
            port = settings.port,
            "Initialising MQTT client"
        );

        let mut options = MqttOptions::new(client_id, settings.ip.clone(), settings.port);
        options.set_keep_alive(KEEP_ALIVE);
        if let Some((user, cred)) = settings.credentials() {
            options.set_credentials(user, cred);
        }

        let (client, mut eventloop) = AsyncClient::new(options, REQUEST_CAPACITY);
        let event_loop = tokio::spawn(async move {
            loop {
                match eventloop.poll().await {
                    Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                        info!(code = ?ack.code, "Connected to MQTT broker");
                    }
                    Ok(event) => debug!(?event, "MQTT event"),
                    Err(e) => {
                        warn!(error = %e, "MQTT connection error");
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        });

        let (availability, pending) = watch::channel(Availability::new());
        let availability_task = tokio::spawn(deliver_availability(client.clone(), pending));

        MqttNotifier {
            client,
            prefix: settings.topic_prefix.clone(),
            availability,
            event_loop,
            availability_task,
        }
    }

    fn set_available(&self, key: &str, payload: &'static str) {
        let topic = topic(&self.prefix, key, "available");
        debug!(topic = %topic, payload, "Queueing availability");
        self.availability.send_modify(|latest| {
            latest.insert(topic, payload);
        });
    }

    fn publish(&self, key: &str, leaf: &str, payload: &str) {
        let topic = topic(&self.prefix, key, leaf);
        debug!(topic = %topic, payload, "Publishing");
        if let Err(e) = self
            .client
            .try_publish(topic.as_str(), QoS::AtLeastOnce, true, payload.as_bytes().to_vec())
        {
            warn!(topic = %topic, error = %e, "Dropping MQTT message");
        }
    }
}

impl StateNotifier for MqttNotifier {
    fn online(&self, key: &str) {
        self.set_available(key, "online");
    }

    fn offline(&self, key: &str) {
        self.set_available(key, "offline");
    }

    fn state(&self, key: &str, value: &str) {
        self.publish(key, "state", value);
    }

    fn attributes(&self, key: &str, payload: &str) {
        self.publish(key, "attributes", payload);
    }
}

impl Drop for MqttNotifier {
    fn drop(&mut self) {
        info!("Shutting down MQTT client");
        self.event_loop.abort();
        self.availability_task.abort();
    }
}

/// Publish each availability change, waiting for queue space if needed.
async fn deliver_availability(client: AsyncClient, mut pending: watch::Receiver<Availability>) {
    while pending.changed().await.is_ok() {
        let latest = pending.borrow_and_update().clone();
        for (topic, payload) in latest {
            if let Err(e) = client
                .publish(topic.as_str(), QoS::AtLeastOnce, true, payload.as_bytes().to_vec())
                .await
            {
                warn!(topic = %topic, error = %e, "Unable to publish availability");
            }
        }
    }
}

/// `<prefix>/<key>/<leaf>`
pub fn topic(prefix: &str, key: &str, leaf: &str) -> String {
    format!("{}/{}/{}", prefix, key, leaf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics() {
        assert_eq!(topic("cmdserver", "pj", "available"), "cmdserver/pj/available");
        assert_eq!(topic("home", "pj", "attributes"), "home/pj/attributes");
    }

    #[tokio::test]
    async fn publishing_without_broker_never_blocks() {
        let mut settings = MqttSettings::new("127.0.0.1");
        settings.port = 1;
        let notifier = MqttNotifier::new(&settings);

        for _ in 0..(REQUEST_CAPACITY * 2) {
            notifier.online("pj");
            notifier.state("pj", "Standby");
            notifier.attributes("pj", r#"{"power":false}"#);
        }
        notifier.offline("pj");
    }

    #[tokio::test]
    async fn latest_availability_survives_a_full_queue() {
        let mut settings = MqttSettings::new("127.0.0.1");
        settings.port = 1;
        let notifier = MqttNotifier::new(&settings);

        for _ in 0..(REQUEST_CAPACITY * 2) {
            notifier.state("pj", "LampOn");
        }
        notifier.online("pj");
        notifier.offline("pj");

        let latest = notifier.availability.borrow().clone();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest.get("cmdserver/pj/available"), Some(&"offline"));
    }
}
