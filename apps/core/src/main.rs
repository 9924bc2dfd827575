// ChatBot console entry point
// Reads utterances from stdin and answers them through the supervisor

use anyhow::Context;
use chatbot_core::{telemetry, AppConfig, SupervisorHandle, TurnKind};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

const ROOM: &str = "general";
const HISTORY_LIMIT: usize = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let bot_name = config.bot_name.clone();
    let user = std::env::var("USER").unwrap_or_else(|_| "guest".to_string());
    info!(
        remote = config.remote.is_configured(),
        "Starting {} for {} in room {}", bot_name, user, ROOM
    );

    let supervisor = SupervisorHandle::new(config);

    println!("Chatting in '{}'. Commands: /voice <text>, /history, /health, /quit", ROOM);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (kind, text) = match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/history" => {
                let turns = supervisor.room_history(ROOM.to_string(), HISTORY_LIMIT).await?;
                for turn in turns {
                    println!(
                        "[{}] {} ({:?}): {}",
                        turn.timestamp.format("%H:%M:%S"),
                        turn.speaker,
                        turn.kind,
                        turn.text
                    );
                }
                continue;
            }
            "/health" => {
                let report = supervisor.health().await?;
                println!("{}", serde_json::to_string_pretty(&report)?);
                continue;
            }
            _ => match line.strip_prefix("/voice ") {
                Some(spoken) => (TurnKind::Voice, spoken),
                None => (TurnKind::Text, line),
            },
        };

        match supervisor
            .process_message(ROOM.to_string(), user.clone(), text.to_string(), kind)
            .await
        {
            Ok(reply) => println!("{} [{:?}]: {}", bot_name, reply.source, reply.text),
            Err(e) => error!("Failed to answer: {}", e),
        }
    }

    supervisor.shutdown().await?;
    Ok(())
}
