//! CLI blackjack demo.
//!
//! Run with `--ai <STRATEGY>` to let a strategy play the player's hands.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{ACE, Card, Game, GameOptions, GameState, Hand, JACK, KING, QUEEN, Strategy, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let strategy = parse_strategy();
    println!("Blackjack CLI demo (type 'q' to quit)");
    if let Some(strategy) = strategy {
        println!("AI strategy: {strategy}");
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_strategy(strategy);
    let default_bet = options.default_bet;
    let mut game = Game::new(options, seed);

    loop {
        let balance = game.balance();
        if balance <= 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_i64(&format!("Bet amount (Enter for {default_bet}, 0 to quit): "))
        else {
            break;
        };
        let bet = bet.unwrap_or(default_bet);

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal_initial_cards() {
            println!("Deal error: {err}");
            game.reset_round();
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            if game.strategy().is_some() {
                match game.ai_action() {
                    Ok(Some(action)) => println!("AI chooses {action:?}."),
                    Ok(None) => {}
                    Err(err) => println!("AI error: {err}"),
                }
                continue;
            }

            println!("Actions: [h]it [s]tand [q]uit");
            match prompt_line("Action: ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = game.hit() {
                        println!("Hit error: {err}");
                    }
                }
                "s" | "stand" => {
                    game.stand();
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
            println!("{}", game.message());
        }

        match game.dealer_play() {
            Ok(true) => println!("Dealer draws {} card(s).", game.dealer_hand().len() - 2),
            Ok(false) => {}
            Err(err) => println!("Dealer error: {err}"),
        }

        if let Some(result) = game.last_result() {
            print_table(&game);
            println!("{}", game.message());
            println!("Payout: {} (net {})", result.payout, result.net());
        }

        game.reset_round();
    }
}

fn parse_strategy() -> Option<Strategy> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--ai" {
            return args.next().map(|name| Strategy::from_name_or_default(&name));
        }
    }
    None
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Returns `None` to quit and `Some(None)` for an empty line.
fn prompt_i64(prompt: &str) -> Option<Option<i64>> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(None);
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(Some(value)),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nShoe: {remaining} cards remaining");
    println!("Balance: €{} | Bet: €{}", game.balance(), game.bet());

    println!(
        "\nDealer: {} (value {})",
        format_dealer(game),
        game.dealer_visible_score()
    );
    println!(
        "Player: {} (value {})",
        format_hand(game.player_hand()),
        game.player_score()
    );
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(game: &Game) -> String {
    let dealer = game.dealer_hand();
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if game.is_hole_revealed() {
        format_hand(dealer)
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
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
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        ACE => "A".to_string(),
        JACK => "J".to_string(),
        QUEEN => "Q".to_string(),
        KING => "K".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
