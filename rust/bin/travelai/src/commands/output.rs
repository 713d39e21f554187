use anyhow::Result;
use serde::Serialize;
use travel::{Comment, Place};
use travelai_bff::state::PlaceCard;

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Note on stderr that the data shown is sample data.
pub fn offline_notice(offline: bool) {
    if offline {
        eprintln!("(backend unreachable: showing sample data)");
    }
}

pub fn place_cards(cards: &[PlaceCard]) {
    if cards.is_empty() {
        println!("No places.");
        return;
    }
    println!("{:<8} {:<32} {:<6} {:<6} {}", "ID", "NAME", "RATING", "COUNT", "STARS");
    for c in cards {
        println!(
            "{:<8} {:<32} {:<6} {:<6} {}",
            c.place.id,
            c.place.name,
            c.rating.to_string(),
            c.rating.count,
            c.rating.stars()
        );
    }
}

pub fn places<'a>(places: impl IntoIterator<Item = &'a Place>) {
    let mut any = false;
    for p in places {
        if !any {
            println!("{:<8} {:<32} {}", "ID", "NAME", "ADDRESS");
            any = true;
        }
        println!("{:<8} {:<32} {}", p.id, p.name, p.address);
    }
    if !any {
        println!("No places.");
    }
}

pub fn comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("No comments yet.");
        return;
    }
    for c in comments {
        let stars = c.rating.map(|r| travel::rating::star_bar(usize::from(r))).unwrap_or_default();
        let place = c.place_name.as_deref().map(|n| format!(" @ {}", n)).unwrap_or_default();
        println!("- {} ({}){} {}", c.author, c.date, place, stars);
        println!("  {}", c.body);
    }
}
