//! Dashboard command - Signs in and prints the three dashboard lists.

use std::sync::Arc;

use common::{AppError, AppResult};

use crate::cli::args::DashboardArgs;
use crate::output;
use crate::services::{CourseHub, ServiceContainer};

/// Execute the dashboard command
pub async fn execute(args: DashboardArgs, services: Arc<dyn ServiceContainer>) -> AppResult<()> {
    let hub = CourseHub::new(services);

    if !hub.login(&args.email, &args.password).await {
        return Err(AppError::InvalidCredentials);
    }

    let view = hub.dashboard(&args.filter.to_filter());
    if args.json {
        output::print_json(&view)?;
    } else {
        output::print_dashboard(&view);
    }

    hub.logout();
    Ok(())
}
