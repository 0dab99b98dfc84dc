use mcc_api::{MccClient, MccError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client: MccClient = MccClient::from_env()?;
    let event = std::env::args().nth(1);

    match client.rundown(event.as_deref()).await {
        Ok(rundown) => {
            for game in rundown.data.games() {
                println!("{:>2}  {:<24} x{}", game.index, game.game, game.multiplier);
            }
            let mut standings: Vec<_> = rundown.data.event_scores.iter().collect();
            standings.sort_by_key(|(_, score)| std::cmp::Reverse(**score));
            for (team, score) in standings {
                println!("{team:<10} {score}");
            }
        }
        Err(MccError::InvalidEvent(status)) => {
            println!("No such event: {status}");
        }
        Err(e) => eprintln!("Error: {}", e),
    }
    Ok(())
}
