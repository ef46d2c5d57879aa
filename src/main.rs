//! Comment Scraper Pro - headless shell
//!
//! Thin argument-driven stand-in for the desktop window: collects the URL
//! and amount, then displays or exports the cached table.

use std::env;
use std::path::PathBuf;
use std::process;

use comment_scraper_pro::commands::{collect_comments, export_comments, list_comments};
use comment_scraper_pro::utils::logging::init_tracing;
use comment_scraper_pro::{AppState, Comment, ExportOutcome, NAME, VERSION};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let state = match AppState::new() {
        Ok(state) => state,
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    };

    match args.get(1).map(String::as_str) {
        Some("--list") => match list_comments(&state) {
            Ok(comments) => print_comments(&comments),
            Err(error) => fail(&error),
        },
        Some("--export") => {
            let path = args.get(2).map(PathBuf::from);
            match export_comments(&state, path) {
                Ok(ExportOutcome::Written(path)) => {
                    println!("Data exported to {}", path.display())
                }
                Ok(ExportOutcome::Cancelled) => println!("Export cancelled."),
                Err(error) => fail(&error),
            }
        }
        Some(url) if args.len() >= 3 => {
            let url = url.to_string();
            let amount = args[2].clone();

            match collect_comments(&state, url, amount) {
                Ok(summary) => {
                    if summary.clamped {
                        println!("Amount clamped to {}", summary.max_results);
                    }
                    println!(
                        "Stored {} comments for video {}",
                        summary.stored, summary.video_id
                    );
                }
                Err(error) => fail(&error),
            }
        }
        _ => {
            eprintln!("{} v{}", NAME, VERSION);
            eprintln!("Usage: comment-scraper-pro <url> <amount> | --list | --export <path>");
            process::exit(1);
        }
    }
}

fn print_comments(comments: &[Comment]) {
    for comment in comments {
        println!("User: {}", comment.author);
        println!("Time: {}", comment.published);
        println!("Comment: {}\n", comment.text);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}
