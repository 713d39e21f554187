//! Login / logout / whoami.

use anyhow::Result;
use travelai_bff::{classic, companion, resolve, Route};
use travelai_client::Variant;

use super::{output, Context};

/// Log in and save the session to the config file.
pub async fn login(ctx: &mut Context, username: &str) -> Result<()> {
    ctx.session.logout();

    let user = match ctx.variant() {
        Variant::Classic => {
            let view = classic::LoginView::new(ctx.classic(), ctx.session.clone());
            let user = view.submit(username).await?;
            let state = view.state();
            output::offline_notice(state.offline);
            match user {
                Some(u) => u,
                None => anyhow::bail!(state.error.unwrap_or_else(|| "Username is required.".to_string())),
            }
        }
        Variant::Companion => {
            let view = companion::LoginView::new(ctx.companion(), ctx.session.clone());
            let user = view.submit(username).await?;
            output::offline_notice(view.state().offline);
            user.ok_or_else(|| anyhow::anyhow!("Username is required."))?
        }
    };

    ctx.save_session()?;
    if ctx.json {
        return output::json(&user);
    }
    println!("Logged in as {} ({}).", user.handle, user.display_name);
    println!("Home: {}", resolve(ctx.variant(), Route::Home, Some(&user)));
    Ok(())
}

pub fn logout(ctx: &mut Context) -> Result<()> {
    if !ctx.session.is_logged_in() {
        println!("Not logged in.");
        return Ok(());
    }
    ctx.session.logout();
    ctx.save_session()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    let Some(user) = ctx.session.current_user() else {
        println!("Not logged in.");
        return Ok(());
    };
    if ctx.json {
        return output::json(&user);
    }
    println!("User:      {}", user.handle);
    println!("Name:      {}", user.display_name);
    println!("Role:      {}", user.role.map(|r| r.as_str()).unwrap_or("-"));
    println!("Home:      {}", resolve(ctx.variant(), Route::Home, Some(&user)));
    Ok(())
}
