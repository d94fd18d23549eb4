//! MusicMood CLI Application
//!
//! A command-line tool for analyzing the emotional profile of song lyrics:
//! fetches lyrics online, scores them, and keeps results in a local SQLite
//! database.

use std::io::{self, BufRead, Read, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use musicmood::{LanguageHint, MoodAnalyzer, MusicMood};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "musicmood")]
#[command(about = "Sentiment analysis for music lyrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the analysis database
    #[arg(long, default_value = "musicmood.db")]
    db: String,

    /// Verbosity level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, analyze and store one song
    Song {
        /// Song title
        title: String,

        /// Artist name
        artist: String,

        /// Re-fetch and re-analyze even if a stored result exists
        #[arg(long)]
        refresh: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the aggregate emotional profile of an artist
    Artist {
        /// Artist name
        name: String,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare previously analyzed songs ("Title,Artist" per entry)
    Compare {
        /// Songs to compare, each as "Title,Artist"
        songs: Vec<String>,
    },

    /// Analyze raw text from an argument or stdin, without fetch or store
    Text {
        /// Language of the text (pt, en or auto)
        #[arg(short, long, default_value = "auto")]
        language: String,

        /// Text to analyze; read from stdin when omitted
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive prompt loop
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Song { title, artist, refresh, json } => {
            let pipeline = MusicMood::open(&cli.db)?;
            let report = pipeline.analyze_song(&title, &artist, refresh).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{:=<60}", "");
                println!("{}", report);
                println!("{:=<60}", "");
            }
        }

        Commands::Artist { name, json } => {
            let pipeline = MusicMood::open(&cli.db)?;
            let profile = pipeline.artist_profile(&name)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else if profile.total_songs == 0 {
                println!("No analyzed songs for {}", name);
            } else {
                println!("{:=<60}", "");
                println!("Artist: {}", profile.artist);
                println!("Analyzed songs: {}", profile.total_songs);
                println!("Average intensity: {:.3}", profile.average_intensity);
                println!("\nEmotion distribution:");
                for bucket in &profile.stats.buckets {
                    println!(
                        "  {:<10} {:>3} songs (avg intensity {:.3})",
                        bucket.emotion, bucket.count, bucket.avg_intensity
                    );
                }
                if let Some(song) = &profile.saddest_song {
                    println!("\nSaddest song: {} ({:.3})", song.title, song.intensity);
                }
                if let Some(song) = &profile.happiest_song {
                    println!("Happiest song: {} ({:.3})", song.title, song.intensity);
                }
                println!("{:=<60}", "");
            }
        }

        Commands::Compare { songs } => {
            let pipeline = MusicMood::open(&cli.db)?;
            let pairs = parse_song_pairs(&songs)?;
            let comparison = pipeline.compare_songs(&pairs)?;

            if comparison.entries.is_empty() {
                println!("None of the given songs has a stored analysis");
            } else {
                println!("{:<30} {:<20} {:<12} {:>8}", "Title", "Artist", "Primary", "Score");
                println!("{:-<72}", "");
                for record in &comparison.entries {
                    println!(
                        "{:<30} {:<20} {:<12} {:>8.3}",
                        record.title,
                        record.artist,
                        record.primary.to_string(),
                        record.mood_score()
                    );
                }
            }
        }

        Commands::Text { language, text, json } => {
            let hint: LanguageHint = language.parse()?;
            let input = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let analyzer = MoodAnalyzer::new();
            let result = analyzer.analyze(&input, hint);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result);
                println!("Summary: {}", result.summary());
            }
        }

        Commands::Interactive => {
            let pipeline = MusicMood::open(&cli.db)?;
            run_interactive(&pipeline).await?;
        }
    }

    Ok(())
}

fn parse_song_pairs(songs: &[String]) -> Result<Vec<(String, String)>> {
    songs
        .iter()
        .map(|entry| {
            entry
                .split_once(',')
                .map(|(title, artist)| (title.trim().to_string(), artist.trim().to_string()))
                .ok_or_else(|| anyhow::anyhow!("expected \"Title,Artist\", got: {}", entry))
        })
        .collect()
}

async fn run_interactive(pipeline: &MusicMood) -> Result<()> {
    println!("MusicMood interactive mode");
    println!("Enter a song as \"Title,Artist\" (empty line to quit)\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let Some((title, artist)) = line.split_once(',') else {
            println!("Expected \"Title,Artist\"");
            continue;
        };

        match pipeline.analyze_song(title.trim(), artist.trim(), false).await {
            Ok(report) => println!("\n{}\n", report),
            Err(err) => println!("Error: {}\n", err),
        }
    }

    Ok(())
}
