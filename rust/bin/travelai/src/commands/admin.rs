//! Admin pages (classic backend only).

use anyhow::Result;
use travelai_bff::classic::{AdminPlacesView, AdminUsersView};
use travelai_bff::state::RatingBand;
use travelai_bff::Route;

use super::{output, Context};

/// `travelai admin users <username>`.
pub async fn users(ctx: &Context, username: &str) -> Result<()> {
    ctx.ensure(Route::AdminUsers)?;

    let view = AdminUsersView::new(ctx.classic(), ctx.session.clone());
    view.lookup(username).await?;
    let state = view.state();
    output::offline_notice(state.offline);
    if ctx.json {
        return output::json(&state);
    }
    println!("User:      {}", state.username);
    println!("Visited:   {}", state.visited_count);
    println!("Comments:  {}", state.comments.len());
    println!();
    output::comments(&state.comments);
    Ok(())
}

/// Filters for `travelai admin places`.
pub struct PlaceQuery<'a> {
    pub name: Option<&'a str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub select: Option<&'a str>,
}

/// `travelai admin places`.
pub async fn places(ctx: &Context, q: PlaceQuery<'_>) -> Result<()> {
    ctx.ensure(Route::AdminPlaces)?;

    let view = AdminPlacesView::new(ctx.classic(), ctx.session.clone());
    view.load().await?;
    if let Some(name) = q.name {
        view.set_name_filter(name);
    }
    let current = view.state().filter;
    view.set_rating_range(
        q.min.unwrap_or(current.min_rating),
        q.max.unwrap_or(current.max_rating),
    );
    view.select(q.select);

    let state = view.state();
    output::offline_notice(state.offline);

    if q.select.is_some() {
        let Some(sel) = state.selection() else {
            anyhow::bail!("Place {} not found.", q.select.unwrap_or_default());
        };
        if ctx.json {
            return output::json(&sel);
        }
        println!("{}", sel.place.name);
        println!("Address:   {}", sel.place.address);
        println!("Rating:    {} {} ({} reviews)", sel.rating, sel.rating.stars(), sel.rating.count);
        println!();
        output::comments(&sel.comments);
        return Ok(());
    }

    let rows = state.visible();
    if ctx.json {
        return output::json(&rows);
    }
    if rows.is_empty() {
        println!("No places match.");
    } else {
        println!("{:<8} {:<32} {:<6} {:<6} {}", "ID", "NAME", "RATING", "COUNT", "BAND");
        for r in &rows {
            let band = match RatingBand::of(r.rating.mean) {
                RatingBand::High => "high",
                RatingBand::Medium => "medium",
                RatingBand::Low => "low",
            };
            println!(
                "{:<8} {:<32} {:<6} {:<6} {}",
                r.place.id,
                r.place.name,
                r.rating.to_string(),
                r.rating.count,
                band
            );
        }
    }
    if state.can_clear_rating() {
        println!();
        println!(
            "Rating filter: {} to {} (omit --min/--max to clear)",
            state.filter.min_rating, state.filter.max_rating
        );
    }
    Ok(())
}
