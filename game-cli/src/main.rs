mod config;

use anyhow::Result;
use config::Config;
use game_core::GameService;
use game_persistence::JsonFileStore;
use game_types::{CodeMode, GameSummary, SessionId};
use std::io::{self, BufRead, Write};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new();
    info!(mode = ?config.game.mode, history_file = %config.history_file,
        "Starting Number Mastermind");

    let store = JsonFileStore::new(&config.history_file);
    let mut service = GameService::new(config.game.clone(), Box::new(store));

    println!("Number Mastermind");
    match config.game.mode {
        CodeMode::Open => println!("Guess the 4-digit code (digits may repeat)."),
        CodeMode::Distinct => {
            println!("Guess the 4-digit code (distinct digits, no leading zero).")
        }
    }
    println!("Commands: new, name <player>, history, quit. Anything else is a guess.\n");

    let mut session_id = start_game(&mut service);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                session_id = start_game(&mut service);
            }
            "history" => {
                print_history(service.history.recent_games(), service.history.leaderboard());
            }
            _ if input.starts_with("name ") => match service.set_player_name(&input[5..]) {
                Ok(()) => println!("Playing as {}", service.player_name()),
                Err(e) => println!("Error: {}", e),
            },
            guess => match service.guess(session_id, guess) {
                Ok(result) => {
                    println!("Guess #{}: {} -> {}", result.attempt, result.guess, result.feedback);
                    if result.over {
                        if result.won {
                            println!("You won in {} attempts!", result.attempt);
                        } else {
                            println!(
                                "Out of attempts! The secret code was: {}",
                                result.secret_code.as_deref().unwrap_or("????")
                            );
                        }
                        session_id = start_game(&mut service);
                    }
                }
                Err(e) => println!("Error: {}", e),
            },
        }
    }

    Ok(())
}

fn start_game(service: &mut GameService) -> SessionId {
    let response = service.new_game();
    println!("New game started.");
    print_history(&response.recent_games, &response.leaderboard);
    response.session_id
}

fn print_history(recent: &[GameSummary], leaderboard: &[GameSummary]) {
    if recent.is_empty() {
        println!("No previous games.");
    } else {
        println!("Last games:");
        for game in recent {
            let result = if game.won { "Won" } else { "Lost" };
            println!(
                "  {} in {} attempts | code {} | {} | {}",
                result, game.attempts, game.secret_code, game.player, game.timestamp
            );
        }
    }

    if !leaderboard.is_empty() {
        println!("Leaderboard:");
        for (rank, game) in leaderboard.iter().enumerate() {
            println!(
                "  #{} {} - {} attempts ({})",
                rank + 1,
                game.player,
                game.attempts,
                game.timestamp
            );
        }
    }
    println!();
}
