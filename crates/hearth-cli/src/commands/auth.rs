//! Account commands: login, register, logout, whoami.

use anyhow::{Result, bail};

use crate::commands::prompt;
use crate::context::AppContext;
use crate::render;

pub async fn login(email: &str) -> Result<()> {
    let password = prompt("Password: ")?;

    let ctx = AppContext::connect().await?;
    let session = ctx.auth.sign_in(email, &password).await?;
    println!("Signed in as {} <{}>", session.user.name, session.user.email);
    Ok(())
}

pub async fn register(name: &str, email: &str) -> Result<()> {
    let password = prompt("Password: ")?;
    let confirm = prompt("Confirm password: ")?;
    if password != confirm {
        bail!("Passwords do not match");
    }

    let ctx = AppContext::connect().await?;
    let session = ctx.auth.sign_up(name, email, &password).await?;
    println!("Account created. Signed in as {} <{}>", session.user.name, session.user.email);
    Ok(())
}

pub async fn logout() -> Result<()> {
    let ctx = AppContext::connect().await?;
    ctx.auth.sign_out().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let ctx = AppContext::connect().await?;
    match ctx.auth.refresh().await {
        Some(session) => render::print_profile(&session),
        None => println!("Not signed in. Run `hearth login` first."),
    }
    Ok(())
}
