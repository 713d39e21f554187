//! Catalogue, place detail, search and the about summary.

use anyhow::Result;
use travelai_bff::state::{PlaceCard, PlaceDetailState};
use travelai_bff::{classic, companion, Route};
use travelai_client::Variant;

use super::{output, Context};

/// `travelai places`: the whole catalogue.
pub async fn list(ctx: &Context) -> Result<()> {
    ctx.ensure(Route::Places)?;

    match ctx.variant() {
        Variant::Classic => {
            let api = ctx.classic();
            let (places, ratings) = tokio::join!(api.get_places(), api.get_place_ratings());
            let (places, ratings) = (places?, ratings?);
            output::offline_notice(places.is_fallback() || ratings.is_fallback());
            let cards: Vec<PlaceCard> = places
                .data
                .into_iter()
                .map(|p| PlaceCard::new(p, &ratings.data))
                .collect();
            if ctx.json {
                return output::json(&cards);
            }
            output::place_cards(&cards);
        }
        Variant::Companion => {
            let places = ctx.companion().get_places().await?;
            output::offline_notice(places.is_fallback());
            if ctx.json {
                return output::json(&places.data);
            }
            output::places(&places.data);
        }
    }
    Ok(())
}

/// `travelai place <id>`.
pub async fn show(ctx: &Context, id: &str) -> Result<()> {
    ctx.ensure(Route::Place(id.to_string()))?;

    let state = match ctx.variant() {
        Variant::Classic => {
            let view = classic::PlaceDetailView::new(ctx.classic());
            view.load(id).await?;
            view.state()
        }
        Variant::Companion => {
            let view = companion::PlaceDetailView::new(ctx.companion());
            view.load(id).await?;
            view.state()
        }
    };

    output::offline_notice(state.offline);
    if state.not_found {
        anyhow::bail!("Place {} not found.", id);
    }
    if ctx.json {
        return output::json(&state);
    }
    print_detail(&state);
    Ok(())
}

fn print_detail(state: &PlaceDetailState) {
    if let Some(place) = &state.place {
        println!("{}", place.name);
        println!("Address:   {}", place.address);
        if let Some(rating) = &state.rating {
            println!("Rating:    {} {} ({} reviews)", rating, rating.stars(), rating.count);
        }
        if !place.description.is_empty() {
            println!();
            println!("{}", place.description);
        }
    }
    if !state.content.is_empty() {
        println!();
        println!("{}", state.content.trim());
    }
    println!();
    println!("Comments:");
    output::comments(&state.comments);
}

/// `travelai search <query>`. The search endpoint has no sample data, so
/// an unreachable backend is an error here.
pub async fn search(ctx: &Context, query: &str) -> Result<()> {
    if ctx.variant() != Variant::Companion {
        anyhow::bail!("search is only served by the companion backend.");
    }
    ctx.ensure(Route::Search)?;

    let places = ctx.companion().search_places(query).await?;
    if ctx.json {
        return output::json(&places.data);
    }
    output::places(&places.data);
    Ok(())
}

/// `travelai summary`: the "About TravelAI" panel.
pub async fn summary(ctx: &Context) -> Result<()> {
    if ctx.variant() != Variant::Companion {
        anyhow::bail!("summary is only served by the companion backend.");
    }

    let view = companion::LoginView::new(ctx.companion(), ctx.session.clone());
    view.load_summary().await;
    let about = view.about();
    output::offline_notice(about.offline);
    if ctx.json {
        return output::json(&about);
    }
    println!("{}", about.content.trim());
    Ok(())
}
