//! Sales history page. Shop-bound principals see only their assigned shop.

use shopgrid_api::endpoints::SaleFilter;
use shopgrid_core::access::pinned_shop_id;

use crate::cli::SalesCommand;
use crate::context::AppContext;
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::{opt, print_table};

pub async fn run(ctx: &AppContext, command: SalesCommand) -> ConsoleResult<()> {
    match command {
        SalesCommand::List {
            shop,
            payment,
            from,
            to,
        } => {
            let user = ctx.session.current_user().ok_or(ConsoleError::NotLoggedIn)?;
            let shop_id = pinned_shop_id(&user).or(shop);

            let filter = SaleFilter {
                shop_id,
                payment_method: payment,
                start_date: from,
                end_date: to,
            };
            let sales = ctx.client.sales().list(&filter).await?;
            let rows: Vec<Vec<String>> = sales
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        opt(&s.shop_name),
                        s.final_amount.to_string(),
                        s.payment_method.to_string(),
                        s.transaction_date
                            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                        opt(&s.staff_name),
                    ]
                })
                .collect();
            print_table(&["ID", "Shop", "Total", "Payment", "Date", "Staff"], &rows);
        }
        SalesCommand::Show { id } => {
            let sale = ctx.client.sales().get(id).await?;
            println!("id:       {}", sale.id);
            println!("shop:     {}", opt(&sale.shop_name));
            println!("subtotal: {}", sale.total_amount);
            println!("discount: {}", sale.discount);
            println!("tax:      {}", sale.tax);
            println!("total:    {}", sale.final_amount);
            println!("payment:  {}", sale.payment_method);
            if let Some(notes) = &sale.notes {
                if !notes.is_empty() {
                    println!("notes:    {notes}");
                }
            }
            println!();
            let rows: Vec<Vec<String>> = sale
                .items
                .iter()
                .map(|i| {
                    vec![
                        opt(&i.product_name),
                        i.quantity.to_string(),
                        i.unit_price.to_string(),
                        i.subtotal.to_string(),
                    ]
                })
                .collect();
            print_table(&["Product", "Qty", "Price", "Subtotal"], &rows);
        }
    }
    Ok(())
}
