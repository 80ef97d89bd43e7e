//! CLI blackjack demo.
//!
//! Set `RUST_LOG=bjsolo=debug` to see the engine's trace on stderr.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, Game, GameOptions, GameState, Hand, Outcome, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        match game.start_round() {
            Ok(dealt) => {
                if dealt.reshuffled {
                    println!("Deck reshuffled.");
                }
            }
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => match game.hit() {
                    Ok(hit) => println!("You draw {}.", format_card(&hit.drawn_card)),
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => match game.stand() {
                    Ok(stand) => {
                        for card in &stand.dealer_cards {
                            println!("Dealer draws {}.", format_card(card));
                        }
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&game);
        match game.outcome() {
            Some(outcome) => println!("{}", format_outcome(outcome)),
            None => println!("Round abandoned."),
        }

        if matches!(prompt_line("[n]ew round [q]uit: ").as_str(), "q" | "quit") {
            println!("Goodbye.");
            break;
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

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    println!(
        "Dealer: {} (score {})",
        format_hand(game.dealer_hand()),
        game.dealer_hand().score()
    );
    println!(
        "You:    {} (score {})\n",
        format_hand(game.player_hand()),
        game.player_hand().score()
    );
}

fn format_outcome(outcome: Outcome) -> String {
    let code = if outcome.is_player_win() {
        "32"
    } else if outcome == Outcome::Push {
        "33"
    } else {
        "31"
    };
    colorize(outcome.message(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
