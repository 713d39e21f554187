//! Profile and discovery pages.

use anyhow::Result;
use travel::filter_by_name;
use travelai_bff::state::Tab;
use travelai_bff::{classic, companion, Route};
use travelai_client::Variant;

use super::{output, Context};

/// `travelai profile`: visited places.
pub async fn profile(ctx: &Context) -> Result<()> {
    match ctx.variant() {
        Variant::Classic => {
            ctx.ensure(Route::Profile)?;
            let view = classic::ProfileView::new(ctx.classic(), ctx.session.clone());
            view.load().await?;
            let state = view.state();
            output::offline_notice(state.offline);
            if ctx.json {
                return output::json(&state);
            }
            if let Some(user) = &state.user {
                println!("{} (@{})", user.display_name, user.handle);
                println!();
            }
            println!("Visited places:");
            output::place_cards(&state.visited);
        }
        Variant::Companion => {
            ctx.ensure(Route::Dashboard)?;
            let view = companion::DashboardView::new(ctx.companion(), ctx.session.clone());
            view.load().await?;
            view.set_tab(Tab::Visited);
            let state = view.state();
            output::offline_notice(state.offline);
            if ctx.json {
                return output::json(&state);
            }
            if let Some(user) = &state.profile {
                println!("{} (@{})", user.display_name, user.handle);
                println!();
            }
            println!("History visited:");
            output::places(state.current());
        }
    }
    Ok(())
}

/// `travelai discover`: recommendations, optionally narrowed by name.
///
/// On the classic backend `query` is sent to the recommender; on the
/// companion backend `ai` swaps the catalogue for AI picks.
pub async fn discover(ctx: &Context, query: Option<&str>, filter: Option<&str>, ai: bool) -> Result<()> {
    let filter = filter.unwrap_or_default();

    match ctx.variant() {
        Variant::Classic => {
            ctx.ensure(Route::Discovery)?;
            let view = classic::DiscoveryView::new(ctx.classic(), ctx.session.clone());
            view.load(query).await?;
            view.set_search(filter);
            let state = view.state();
            output::offline_notice(state.offline);
            let cards = state.visible();
            if ctx.json {
                return output::json(&cards);
            }
            output::place_cards(&cards);
        }
        Variant::Companion => {
            ctx.ensure(Route::Dashboard)?;
            if query.is_some() {
                anyhow::bail!("--query needs the classic backend; use --ai instead.");
            }
            let view = companion::DashboardView::new(ctx.companion(), ctx.session.clone());
            view.load().await?;
            view.set_tab(Tab::NewTrip);
            if ai {
                view.recommend().await?;
            }
            let state = view.state();
            output::offline_notice(state.offline);
            let shown = filter_by_name(state.current(), filter);
            if ctx.json {
                return output::json(&shown);
            }
            output::places(shown);
        }
    }
    Ok(())
}
