//! CLI card dealing example.

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pairdeal::asset::encode_first;
use pairdeal::{Card, DealOptions, DealState, Deck, RevealMode};

const LOGO_CANDIDATES: [&str; 2] = ["dlc-logo.png", "./dlc-logo.png"];
const FALLBACK_GLYPH: &str = "🧠";

fn main() {
    println!("Data & AI Literacy card game (press enter to deal, 'q' to quit)");

    match encode_first(LOGO_CANDIDATES) {
        Ok(uri) => println!("Logo embedded ({} bytes of data URI)", uri.len()),
        Err(_) => println!("{FALLBACK_GLYPH}"),
    }

    let reveal = if env::args().any(|arg| arg == "--face-up") {
        RevealMode::FaceUp
    } else {
        RevealMode::FaceDown
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DealOptions::default().with_initial_reveal(reveal);
    let mut session = DealState::new(Deck::default(), options, seed);

    loop {
        print_table(&session.cards());

        match prompt_line("Generate card pair? ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => session.deal(),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(cards: &[Card<'_>]) {
    println!();
    for card in cards {
        println!("  [{:^20}]  {}", card.title(), card.kind.hint());
    }
    println!();
}
