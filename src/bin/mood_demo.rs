//! Mood Analysis Demo
//!
//! Demonstrates lyric emotion analysis over bundled sample texts.
//! No network access needed.
//!
//! Run with: cargo run --bin mood_demo

use musicmood::{LanguageHint, MoodAnalyzer};

fn main() {
    println!("{}", "=".repeat(60));
    println!("MusicMood - Lyric Emotion Analysis Demo");
    println!("{}", "=".repeat(60));

    let analyzer = MoodAnalyzer::new();

    let samples = [
        (
            "Numb (excerpt style)",
            "I'm tired of being what you want me to be\nFeeling so faithless, lost under the surface\nI've become so numb, I can't feel you there",
        ),
        (
            "Upbeat pop",
            "We laugh and dance in the sunshine\nSo happy together, love all around\nThis beautiful day will never end",
        ),
        (
            "Nostalgic ballad",
            "Do you remember when we were young\nThose days are gone but the memories stay\nI miss the summers of our childhood",
        ),
        (
            "Saudade (pt)",
            "Estou tão triste e sozinho\nChorando lágrimas de saudade\nSem você não há mais luz",
        ),
        (
            "Angry anthem",
            "I scream my rage into the night\nHate and fire burn in my chest\nWe fight until there's nothing left",
        ),
    ];

    for (name, lyrics) in &samples {
        let result = analyzer.analyze(lyrics, LanguageHint::Auto);

        println!("\n--- {} [{}] ---", name, result.language);
        print!("{}", result);
        println!("Summary: {}", result.summary());
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
    println!("{}", "=".repeat(60));
}
