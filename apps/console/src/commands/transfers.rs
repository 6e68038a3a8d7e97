//! Transfer pages: request, history, and workflow management.
//!
//! Requesting runs the local precheck first: same-shop transfers and
//! requests exceeding locally known stock are refused before any request
//! goes out. The check is advisory; the backend re-validates on create.

use shopgrid_api::endpoints::{StockFilter, TransferFilter};
use shopgrid_core::access::can_manage_transfers;
use shopgrid_core::types::NewTransfer;
use shopgrid_core::validation::precheck_transfer;

use crate::cli::TransfersCommand;
use crate::context::AppContext;
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::{opt, print_table};

pub async fn run(ctx: &AppContext, command: TransfersCommand) -> ConsoleResult<()> {
    match command {
        TransfersCommand::List {
            status,
            from_shop,
            to_shop,
        } => {
            let filter = TransferFilter {
                status,
                from_shop_id: from_shop,
                to_shop_id: to_shop,
            };
            let transfers = ctx.client.transfers().list(&filter).await?;
            let rows: Vec<Vec<String>> = transfers
                .iter()
                .map(|t| {
                    vec![
                        t.id.to_string(),
                        opt(&t.from_shop_name),
                        opt(&t.to_shop_name),
                        opt(&t.product_name),
                        t.quantity.to_string(),
                        t.status.to_string(),
                        opt(&t.requested_by_username),
                    ]
                })
                .collect();
            print_table(
                &["ID", "From", "To", "Product", "Qty", "Status", "Requested by"],
                &rows,
            );
        }
        TransfersCommand::Show { id } => {
            let t = ctx.client.transfers().get(id).await?;
            println!("id:           {}", t.id);
            println!("from:         {}", opt(&t.from_shop_name));
            println!("to:           {}", opt(&t.to_shop_name));
            println!("product:      {}", opt(&t.product_name));
            println!("quantity:     {}", t.quantity);
            println!("status:       {}", t.status);
            println!("requested by: {}", opt(&t.requested_by_username));
            println!("approved by:  {}", opt(&t.approved_by_username));
            if let Some(notes) = &t.notes {
                if !notes.is_empty() {
                    println!("notes:        {notes}");
                }
            }
        }
        TransfersCommand::Request {
            from_shop,
            to_shop,
            product,
            quantity,
            notes,
        } => {
            let available = source_stock(ctx, from_shop, product).await;
            precheck_transfer(from_shop, to_shop, quantity, available)?;

            let transfer = ctx
                .client
                .transfers()
                .create(&NewTransfer {
                    from_shop,
                    to_shop,
                    product,
                    quantity,
                    notes,
                })
                .await?;
            println!(
                "Requested transfer {} ({} x product {})",
                transfer.id, transfer.quantity, transfer.product
            );
        }
        TransfersCommand::Approve { id } => {
            require_manager(ctx)?;
            let t = ctx.client.transfers().approve(id).await?;
            println!("Transfer {} is now {}", t.id, t.status);
        }
        TransfersCommand::Reject { id } => {
            require_manager(ctx)?;
            let t = ctx.client.transfers().reject(id).await?;
            println!("Transfer {} is now {}", t.id, t.status);
        }
        TransfersCommand::Complete { id } => {
            require_manager(ctx)?;
            let t = ctx.client.transfers().complete(id).await?;
            println!("Transfer {} is now {}", t.id, t.status);
        }
    }
    Ok(())
}

/// Source-shop stock for the advisory precheck. Any lookup failure means
/// "unknown" and the backend decides.
async fn source_stock(ctx: &AppContext, shop: i64, product: i64) -> Option<i64> {
    let filter = StockFilter {
        shop_id: Some(shop),
        product_id: Some(product),
        low_stock: None,
    };
    match ctx.client.inventory().list(&filter).await {
        Ok(records) => records.first().map(|r| r.quantity),
        Err(_) => None,
    }
}

fn require_manager(ctx: &AppContext) -> ConsoleResult<()> {
    let user = ctx.session.current_user().ok_or(ConsoleError::NotLoggedIn)?;
    if can_manage_transfers(user.role) {
        Ok(())
    } else {
        Err(ConsoleError::NotPermitted(
            "Only admins and sales managers can manage transfers.".to_string(),
        ))
    }
}
