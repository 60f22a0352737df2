use clap::{Parser, Subcommand};
use flareup_engine::narrative::{share_text, share_with_fallback, ShareChannel, ShareOutcome};
use flareup_engine::{core::format_duration_ms, EngineConfig, FlareupEngine, ImageRef, OutcomeCategory};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flareup")]
#[command(about = "FLAREUP compatibility quiz", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database path (defaults to FLAREUP_DB_PATH or flareup.db)
    #[arg(short, long)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (or sign up) as a player
    Login {
        /// Email used as the player identity
        email: String,

        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// Sign out; progress is kept
    Logout,

    /// Show the signed-in player
    Whoami,

    /// Score two names
    Play {
        name1: String,
        name2: String,

        /// Photo reference for the first person
        #[arg(long)]
        photo1: Option<String>,

        /// Photo reference for the second person
        #[arg(long)]
        photo2: Option<String>,
    },

    /// Show the last result again
    Result,

    /// Show progress towards all six outcomes
    Progress,

    /// Show the fastest completions
    Leaderboard {
        /// Maximum entries (1-10)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Produce share text for the last result
    Share {
        /// Invite link appended to the text
        #[arg(long)]
        invite: Option<String>,
    },

    /// Set or clear the profile photo
    Photo {
        /// Photo reference; omit to clear
        photo: Option<String>,
    },
}

/// Terminal has no native share sheet
struct NativeShare;

impl ShareChannel for NativeShare {
    fn share(&self, _text: &str) -> flareup_engine::Result<()> {
        Err("native sharing is not available in a terminal".into())
    }

    fn name(&self) -> &str {
        "native"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "flareup_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }

    let engine = FlareupEngine::new(&config).await?;

    match cli.command {
        Commands::Login { email, name } => {
            let session = engine.sign_in(&name, &email).await?;
            println!("👋 Welcome, {} <{}>", session.display_name, session.email);
        }

        Commands::Logout => {
            engine.sign_out().await?;
            println!("👋 Signed out");
        }

        Commands::Whoami => match engine.current_user().await {
            Some(user) => {
                println!("{} <{}>", user.display_name, user.email);
                println!("   Joined: {}", user.join_date.format("%Y-%m-%d"));
                println!("   Photo: {}", if user.photo.is_some() { "yes" } else { "no" });
            }
            None => println!("Not signed in. Run `flareup login <email>` first."),
        },

        Commands::Play { name1, name2, photo1, photo2 } => {
            let played = engine
                .compute_and_store_result(
                    &name1,
                    &name2,
                    photo1.map(ImageRef::new),
                    photo2.map(ImageRef::new),
                )
                .await?;

            print_result(&played.result);

            if played.record.new_outcome {
                println!("\n✨ New outcome unlocked: {}", played.result.outcome);
            }
            if let (Some(entry), Some(rank)) = (&played.record.entry, played.record.rank) {
                println!(
                    "🏆 All six collected in {}! Leaderboard rank #{}",
                    entry.completion_time(),
                    rank
                );
            }
        }

        Commands::Result => match engine.last_result().await {
            Some(result) => print_result(&result),
            None => println!("No result yet. Run `flareup play <name1> <name2>`."),
        },

        Commands::Progress => match engine.current_user_progress().await {
            Some(progress) => {
                println!(
                    "🎯 {}/6 outcomes for {} ({} games)",
                    progress.completed_outcomes.len(),
                    progress.display_name,
                    progress.games_played
                );
                for outcome in OutcomeCategory::ALL {
                    let mark = if progress.has_achieved(outcome) { "✅" } else { "⬜" };
                    println!("   {} {} {}", mark, outcome.emoji(), outcome);
                }
                if progress.is_complete() {
                    println!("\n🎉 Congratulations! You've completed all FLAMES results!");
                } else {
                    println!("\n   {} more to go!", progress.remaining().len());
                }
            }
            None => println!("No progress yet."),
        },

        Commands::Leaderboard { limit } => {
            let entries = match limit {
                Some(limit) => engine.top_entries(limit).await,
                None => engine.leaderboard().await,
            };

            if entries.is_empty() {
                println!("🏆 Nobody has completed all six outcomes yet. Be the first!");
            } else {
                println!("🏆 FLAREUP Champions");
                for (i, entry) in entries.iter().enumerate() {
                    println!(
                        "   {:>2}. {:<20} {:>8}  {} games  ({})",
                        i + 1,
                        entry.display_name,
                        format_duration_ms(entry.completion_duration_ms),
                        entry.games_played,
                        entry.recorded_at.format("%b %d %H:%M")
                    );
                }
            }
        }

        Commands::Share { invite } => match engine.last_result().await {
            Some(result) => {
                let text = share_text(&result, invite.as_deref());
                match share_with_fallback(&[&NativeShare], &text) {
                    ShareOutcome::Shared(channel) => println!("📤 Shared via {}", channel),
                    ShareOutcome::Manual(text) => println!("Copy this result:\n\n{}", text),
                }
            }
            None => println!("No result to share yet."),
        },

        Commands::Photo { photo } => {
            let session = engine.update_photo(photo.map(ImageRef::new)).await?;
            println!(
                "📸 Photo {} for {}",
                if session.photo.is_some() { "updated" } else { "cleared" },
                session.display_name
            );
        }
    }

    Ok(())
}

fn print_result(result: &flareup_engine::ScoreResult) {
    let narrative = flareup_engine::Narrative::for_result(result);

    println!(
        "\n{} {} & {}: {} ({}%)",
        result.outcome.emoji(),
        result.name1,
        result.name2,
        result.outcome,
        result.primary_percentage
    );
    println!("   {}", narrative.headline);

    println!("\n📊 Breakdown:");
    for (outcome, pct) in result.breakdown.iter() {
        let bar = "█".repeat(pct as usize / 5);
        println!("   {} {:<10} {:>3}% {}", outcome.letter(), outcome.label(), pct, bar);
    }

    println!("\n💀 The brutal details:");
    for line in &narrative.roast {
        println!("   • {}", line);
    }

    println!("\n🔮 10 years later: {}", narrative.prediction.title);
    println!("   {}", narrative.prediction.lifestyle);
    println!("   {}", narrative.prediction.prediction);
}
