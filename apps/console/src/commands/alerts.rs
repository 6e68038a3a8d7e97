//! Alerts page: list, mark read, mark all read.

use shopgrid_api::endpoints::AlertFilter;

use crate::cli::AlertsCommand;
use crate::context::AppContext;
use crate::error::ConsoleResult;
use crate::output::{opt, print_table, severity_icon};

pub async fn run(ctx: &AppContext, command: AlertsCommand) -> ConsoleResult<()> {
    match command {
        AlertsCommand::List {
            unread,
            shop,
            alert_type,
            severity,
        } => {
            let filter = AlertFilter {
                is_read: if unread { Some(false) } else { None },
                shop_id: shop,
                alert_type,
                severity,
            };
            let alerts = ctx.client.alerts().list(&filter).await?;
            let rows: Vec<Vec<String>> = alerts
                .iter()
                .map(|a| {
                    vec![
                        a.id.to_string(),
                        format!("{} {}", severity_icon(a.severity), a.severity),
                        a.message.clone(),
                        opt(&a.shop_name),
                        if a.is_read { "read" } else { "unread" }.to_string(),
                        a.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    ]
                })
                .collect();
            print_table(
                &["ID", "Severity", "Message", "Shop", "Read", "Created"],
                &rows,
            );
        }
        AlertsCommand::Read { id } => {
            let alert = ctx.client.alerts().mark_read(id).await?;
            println!("Marked alert {} as read", alert.id);
        }
        AlertsCommand::ReadAll => {
            ctx.client.alerts().mark_all_read().await?;
            println!("Marked all alerts as read");
        }
    }
    Ok(())
}
