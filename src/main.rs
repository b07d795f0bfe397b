mod app_system;
mod discount;
mod domain;
mod member;
mod order;


use tracing::{error, info};

use crate::app_system::{setup_tracing, AppConfig, OrderSystem};
use crate::domain::{Grade, Member};

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with complete order system");

    // Wire the entire system from one explicit configuration
    let system = OrderSystem::new(AppConfig::default());

    // Join a test member
    let member = Member::new(1, "beo", Grade::Vip);
    info!(member_name = %member.name, "Joining test member");
    system.member_service.join(member);

    let found = system
        .member_service
        .find_member(1)
        .map_err(|e| e.to_string())?;
    info!(found_name = %found.name, "Member lookup successful");

    // Create a test order - this exercises the whole wired flow
    match system.order_service.create_order(1, "itemA", 10000) {
        Ok(order) => info!(
            ?order,
            final_price = order.final_price(),
            "Order created successfully"
        ),
        Err(e) => {
            error!(error = %e, "Order creation failed");
            return Err(e.to_string());
        }
    }

    info!("Application completed successfully");
    Ok(())
}
