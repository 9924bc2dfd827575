use crate::actors::llm::OpenAiClient;
use crate::actors::messages::{AppError, RemoteError, SupervisorMessage};
use crate::actors::traits::{CompletionClient, CompletionRequest};
use crate::brain::{RandomSelector, ReplySelector, Responder, ResponseEngine};
use crate::config::{AppConfig, DEFAULT_TIMEOUT_SECS};
use crate::diagnostics::HealthReport;
use crate::history::RoomHistories;
use crate::models::{Turn, TurnKind};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{debug, error, info, instrument, warn};

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// A remote completion attempt that owns everything it needs.
pub type RemoteCall = Pin<Box<dyn Future<Output = Result<String, RemoteError>> + Send>>;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Remote,
    Fallback,
}

/// A bot reply ready to be stored and broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotReply {
    pub text: String,
    pub source: ReplySource,
}

/// Chooses between the remote model and the local rule engine.
///
/// The remote client gets exactly one attempt, bounded by `remote_timeout`;
/// whatever goes wrong, the responder is called once and its reply is
/// returned. No error escapes.
pub struct ReplyOrchestrator<C, R> {
    client: Option<Arc<C>>,
    responder: Arc<R>,
    remote_timeout: Duration,
}

impl<C, R> ReplyOrchestrator<C, R>
where
    C: CompletionClient,
    R: Responder,
{
    pub fn new(client: Option<Arc<C>>, responder: Arc<R>) -> Self {
        Self {
            client,
            responder,
            remote_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_remote_timeout(mut self, remote_timeout: Duration) -> Self {
        self.remote_timeout = remote_timeout;
        self
    }

    pub fn has_remote(&self) -> bool {
        self.client.is_some()
    }

    /// Prepares the single remote attempt, or `None` when no client is configured.
    ///
    /// The returned future does not borrow the orchestrator, so it can run on
    /// its own task.
    pub fn remote_call(&self, request: CompletionRequest) -> Option<RemoteCall> {
        let client = self.client.clone()?;
        let limit = self.remote_timeout;
        Some(Box::pin(async move {
            timeout(limit, client.complete(request))
                .await
                .unwrap_or_else(|_| Err(RemoteError::Timeout(limit.as_secs())))
        }))
    }

    /// Turns the outcome of the remote attempt into a reply.
    ///
    /// `None` means no attempt was made.
    pub fn resolve(
        &self,
        remote: Option<Result<String, RemoteError>>,
        utterance: &str,
        history: &[Turn],
        selector: &mut dyn ReplySelector,
    ) -> BotReply {
        match remote {
            Some(Ok(text)) => {
                return BotReply {
                    text,
                    source: ReplySource::Remote,
                }
            }
            Some(Err(e)) => warn!("Remote completion unavailable, using rule engine: {}", e),
            None => debug!("No remote client configured, using rule engine"),
        }

        BotReply {
            text: self.responder.respond(utterance, history, selector),
            source: ReplySource::Fallback,
        }
    }

    pub async fn reply(
        &self,
        utterance: &str,
        history: &[Turn],
        selector: &mut dyn ReplySelector,
    ) -> BotReply {
        let request = CompletionRequest {
            history: history.to_vec(),
            utterance: utterance.to_string(),
        };
        let remote = match self.remote_call(request) {
            Some(call) => Some(call.await),
            None => None,
        };
        self.resolve(remote, utterance, history, selector)
    }
}

/// A handle to the `SupervisorRunner`.
///
/// This is the entry point for chat traffic. Turns of one room are answered
/// in arrival order; rooms do not wait on each other.
#[derive(Clone)]
pub struct SupervisorHandle {
    sender: mpsc::Sender<SupervisorMessage>,
}

impl SupervisorHandle {
    /// Spawns a supervisor wired to the production components.
    ///
    /// The remote client is only created when an API key is configured.
    pub fn new(config: AppConfig) -> Self {
        let client = config
            .remote
            .is_configured()
            .then(|| Arc::new(OpenAiClient::new(config.remote.clone(), config.bot_name.clone())));
        Self::with_parts(
            config,
            client,
            Arc::new(ResponseEngine::new()),
            RandomSelector::from_entropy(),
        )
    }

    /// Spawns a supervisor with explicit components.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration (bot name, history window, timeouts).
    /// * `client` - Remote completion client, or `None` to always use the rule engine.
    /// * `responder` - Local rule-based responder.
    /// * `selector` - Randomness source for the responder's reply sets.
    pub fn with_parts<C, R, S>(
        config: AppConfig,
        client: Option<Arc<C>>,
        responder: Arc<R>,
        selector: S,
    ) -> Self
    where
        C: CompletionClient,
        R: Responder + 'static,
        S: ReplySelector + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(32);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let orchestrator =
            ReplyOrchestrator::new(client, responder).with_remote_timeout(config.remote.timeout());
        let runner = SupervisorRunner {
            receiver,
            completions_tx,
            completions_rx,
            orchestrator,
            histories: RoomHistories::default(),
            queues: HashMap::new(),
            selector,
            config,
        };
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    /// Records a user turn in a room and returns the bot's reply.
    ///
    /// The reply is also recorded in the room as a generated turn. There is
    /// no deadline here: the remote attempt is bounded and the rule engine
    /// always answers, so the reply always arrives.
    ///
    /// # Returns
    ///
    /// `AppError::Validation` if the text is empty after trimming; otherwise a
    /// reply from either the remote model or the rule engine.
    #[instrument(skip(self, text))]
    pub async fn process_message(
        &self,
        room: String,
        sender: String,
        text: String,
        kind: TurnKind,
    ) -> Result<BotReply, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SupervisorMessage::ProcessUserMessage {
            room,
            sender,
            text,
            kind,
            responder: send,
        };
        self.sender.send(msg).await?;
        recv.await?
    }

    /// Returns up to `limit` recent turns of a room, oldest first.
    pub async fn room_history(&self, room: String, limit: usize) -> Result<Vec<Turn>, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SupervisorMessage::RoomHistory {
            room,
            limit,
            responder: send,
        };
        self.sender.send(msg).await?;
        Ok(timeout(QUERY_TIMEOUT, recv).await??)
    }

    pub async fn health(&self) -> Result<HealthReport, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SupervisorMessage::Health { responder: send })
            .await?;
        Ok(timeout(QUERY_TIMEOUT, recv).await??)
    }

    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender.send(SupervisorMessage::Shutdown).await?;
        Ok(())
    }
}

// --- Actor Runner ---

/// A validated user message waiting for its reply.
struct PendingMessage {
    sender: String,
    text: String,
    kind: TurnKind,
    responder: oneshot::Sender<Result<BotReply, AppError>>,
}

/// Result of a remote attempt that ran off the actor loop.
struct RemoteCompletion {
    room: String,
    message: PendingMessage,
    history: Vec<Turn>,
    result: Result<String, RemoteError>,
}

/// Per-room queue. At most one message per room is in flight.
#[derive(Default)]
struct RoomQueue {
    in_flight: bool,
    pending: VecDeque<PendingMessage>,
}

struct SupervisorRunner<C, R, S> {
    receiver: mpsc::Receiver<SupervisorMessage>,
    completions_tx: mpsc::UnboundedSender<RemoteCompletion>,
    completions_rx: mpsc::UnboundedReceiver<RemoteCompletion>,
    orchestrator: ReplyOrchestrator<C, R>,
    histories: RoomHistories,
    queues: HashMap<String, RoomQueue>,
    selector: S,
    config: AppConfig,
}

impl<C, R, S> SupervisorRunner<C, R, S>
where
    C: CompletionClient,
    R: Responder,
    S: ReplySelector + Send,
{
    async fn run(mut self) {
        info!(
            remote = self.orchestrator.has_remote(),
            "Supervisor started"
        );
        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(SupervisorMessage::Shutdown) | None => {
                        info!("Supervisor shutting down...");
                        break;
                    }
                    Some(msg) => self.handle_message(msg),
                },
                Some(done) = self.completions_rx.recv() => self.finish_remote(done),
            }
        }
        info!("Supervisor stopped");
    }

    fn handle_message(&mut self, msg: SupervisorMessage) {
        match msg {
            SupervisorMessage::ProcessUserMessage {
                room,
                sender,
                text,
                kind,
                responder,
            } => match validate(&text, kind) {
                Ok(text) => self.enqueue(
                    room,
                    PendingMessage {
                        sender,
                        text,
                        kind,
                        responder,
                    },
                ),
                Err(e) => {
                    error!("Error processing user message: {}", e);
                    let _ = responder.send(Err(e));
                }
            },
            SupervisorMessage::RoomHistory {
                room,
                limit,
                responder,
            } => {
                let _ = responder.send(self.histories.recent(&room, limit));
            }
            SupervisorMessage::Health { responder } => {
                let report = HealthReport::new(&self.config, self.histories.room_count());
                let _ = responder.send(report);
            }
            SupervisorMessage::Shutdown => {}
        }
    }

    fn enqueue(&mut self, room: String, message: PendingMessage) {
        let queue = self.queues.entry(room.clone()).or_default();
        queue.pending.push_back(message);
        if !queue.in_flight {
            self.advance(&room);
        }
    }

    /// Starts the next pending messages of a room until one has to wait on
    /// the remote model or the queue is empty.
    #[instrument(skip(self))]
    fn advance(&mut self, room: &str) {
        loop {
            let message = match self.queues.get_mut(room) {
                Some(queue) => match queue.pending.pop_front() {
                    Some(message) => {
                        queue.in_flight = true;
                        message
                    }
                    None => {
                        queue.in_flight = false;
                        return;
                    }
                },
                None => return,
            };

            let history = self.histories.recent(room, self.config.history_window);
            self.histories
                .push(room, Turn::new(message.sender.clone(), message.text.clone(), message.kind));

            let request = CompletionRequest {
                history: history.clone(),
                utterance: message.text.clone(),
            };
            match self.orchestrator.remote_call(request) {
                Some(call) => {
                    let completions = self.completions_tx.clone();
                    let room = room.to_string();
                    tokio::spawn(async move {
                        let result = call.await;
                        let done = RemoteCompletion {
                            room,
                            message,
                            history,
                            result,
                        };
                        if completions.send(done).is_err() {
                            debug!("Supervisor stopped before the remote reply arrived");
                        }
                    });
                    return;
                }
                None => {
                    let reply =
                        self.orchestrator
                            .resolve(None, &message.text, &history, &mut self.selector);
                    self.deliver(room, message, reply);
                }
            }
        }
    }

    fn finish_remote(&mut self, done: RemoteCompletion) {
        let RemoteCompletion {
            room,
            message,
            history,
            result,
        } = done;
        let reply = self
            .orchestrator
            .resolve(Some(result), &message.text, &history, &mut self.selector);
        self.deliver(&room, message, reply);
        self.advance(&room);
    }

    fn deliver(&mut self, room: &str, message: PendingMessage, reply: BotReply) {
        info!(room = %room, source = ?reply.source, "Reply ready");
        self.histories
            .push(room, Turn::generated(self.config.bot_name.clone(), reply.text.clone()));
        let _ = message.responder.send(Ok(reply));
    }
}

/// Trims the text and rejects input that cannot become a user turn.
fn validate(text: &str, kind: TurnKind) -> Result<String, AppError> {
    let utterance = text.trim();
    if utterance.is_empty() {
        return Err(AppError::Validation("Message text is empty".to_string()));
    }
    if kind == TurnKind::Generated {
        return Err(AppError::Validation(
            "Generated turns cannot be submitted as user messages".to_string(),
        ));
    }
    Ok(utterance.to_string())
}
