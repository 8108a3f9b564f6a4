//! Listing commands: the dashboard's list and detail views.

use anyhow::Result;

use hearth_app::{DashboardController, GuardState};
use hearth_core::fetch::FetchState;

use crate::context::AppContext;
use crate::render;

/// Runs the guard; prints the sign-in hint when the dashboard may not render.
async fn guard_dashboard(ctx: &AppContext) -> Result<bool> {
    match ctx.resolve_guard().await {
        GuardState::Authenticated => Ok(true),
        _ => {
            println!("Not signed in. Run `hearth login` first.");
            Ok(false)
        }
    }
}

pub async fn list() -> Result<()> {
    let ctx = AppContext::connect().await?;
    if !guard_dashboard(&ctx).await? {
        return Ok(());
    }

    let controller = DashboardController::new(ctx.properties.clone());
    controller.trigger_list_load().await;

    let state = controller.snapshot().await;
    match &state.list {
        FetchState::Loaded(rows) if rows.is_empty() => println!("No properties found."),
        FetchState::Loaded(rows) => {
            render::print_listings(rows);
            println!();
            println!("Showing {} properties", rows.len());
        }
        FetchState::Failed(message) => println!("Error: {}", message),
        FetchState::Idle | FetchState::Loading => {}
    }
    Ok(())
}

pub async fn show(id: &str) -> Result<()> {
    let ctx = AppContext::connect().await?;
    if !guard_dashboard(&ctx).await? {
        return Ok(());
    }

    let controller = DashboardController::new(ctx.properties.clone());
    controller.select_property(id).await;

    let state = controller.snapshot().await;
    match &state.detail {
        FetchState::Loaded(detail) => render::print_detail(detail),
        FetchState::Failed(message) => println!("Error: {}", message),
        FetchState::Idle | FetchState::Loading => {}
    }
    Ok(())
}
