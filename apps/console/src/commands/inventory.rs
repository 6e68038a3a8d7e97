//! Stock levels page.
//!
//! Shop-bound principals are pinned to their assigned shop: an explicit
//! `--shop` is ignored in favor of the assignment, matching the sales and
//! billing views.

use shopgrid_api::endpoints::{NewStock, StockFilter, StockUpdate};
use shopgrid_core::access::pinned_shop_id;

use crate::cli::InventoryCommand;
use crate::context::AppContext;
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::{opt, print_table};

pub async fn run(ctx: &AppContext, command: InventoryCommand) -> ConsoleResult<()> {
    match command {
        InventoryCommand::List { shop, product, low } => {
            let user = ctx.session.current_user().ok_or(ConsoleError::NotLoggedIn)?;
            let shop_id = pinned_shop_id(&user).or(shop);

            let filter = StockFilter {
                shop_id,
                product_id: product,
                low_stock: if low { Some(true) } else { None },
            };
            let records = ctx.client.inventory().list(&filter).await?;
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        opt(&s.shop_name),
                        opt(&s.product_name),
                        s.quantity.to_string(),
                        s.min_threshold.to_string(),
                        stock_flag(s.is_low_stock, s.is_out_of_stock).to_string(),
                    ]
                })
                .collect();
            print_table(
                &["ID", "Shop", "Product", "Qty", "Threshold", "Status"],
                &rows,
            );
        }
        InventoryCommand::Create {
            shop,
            product,
            quantity,
            min_threshold,
            max_capacity,
        } => {
            let record = ctx
                .client
                .inventory()
                .create(&NewStock {
                    shop,
                    product,
                    quantity,
                    min_threshold,
                    max_capacity,
                })
                .await?;
            println!("Created stock record {} (qty {})", record.id, record.quantity);
        }
        InventoryCommand::Update {
            id,
            quantity,
            min_threshold,
            max_capacity,
        } => {
            let record = ctx
                .client
                .inventory()
                .update(
                    id,
                    &StockUpdate {
                        quantity,
                        min_threshold,
                        max_capacity,
                    },
                )
                .await?;
            println!("Updated stock record {} (qty {})", record.id, record.quantity);
        }
        InventoryCommand::Delete { id } => {
            ctx.client.inventory().delete(id).await?;
            println!("Deleted stock record {id}");
        }
    }
    Ok(())
}

fn stock_flag(low: bool, out: bool) -> &'static str {
    if out {
        "OUT OF STOCK"
    } else if low {
        "LOW"
    } else {
        "ok"
    }
}
