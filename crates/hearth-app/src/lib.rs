pub mod controller;
pub mod guard;

pub use controller::{DashboardController, DashboardState};
pub use guard::{GuardState, RouteGuard};
