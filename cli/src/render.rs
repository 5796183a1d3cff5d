//! Plain-text presentation of the session on stdout.

use std::time::Duration;

use catalog::Item;
use game::{ClickOutcome, Outcome};

pub fn items(items: &[Item], use_images: bool) {
    if items.is_empty() {
        return;
    }

    let labels: Vec<String> = items
        .iter()
        .map(|item| {
            if use_images {
                format!("[{}]", item.id)
            } else {
                format!("{} ({})", item.display_name, item.id)
            }
        })
        .collect();

    println!("Find: {}", labels.join(", "));
}

pub fn countdown(remaining: Duration) {
    println!("Time left: {}s", remaining.as_secs());
}

pub fn click(id: &str, outcome: &ClickOutcome) {
    match outcome {
        ClickOutcome::Found { .. } | ClickOutcome::Won => println!("Found {id}!"),
        ClickOutcome::Inactive => println!("{id} is not on the list right now."),
        ClickOutcome::GameOver => {}
    }
}

pub fn outcome(outcome: Outcome) {
    match outcome {
        Outcome::Won => println!("You found everything. You win!"),
        Outcome::Lost => println!("Time is up. You lose."),
        Outcome::NotStarted | Outcome::InProgress => println!("Session ended."),
    }
}
