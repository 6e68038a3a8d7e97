//! Dashboard summary: one line per headline count.

use shopgrid_api::endpoints::{AlertFilter, ProductFilter, StockFilter, TransferFilter};
use shopgrid_core::types::TransferStatus;

use crate::context::AppContext;
use crate::error::ConsoleResult;

pub async fn run(ctx: &AppContext) -> ConsoleResult<()> {
    let shops = ctx.client.shops().list().await?;
    let products = ctx.client.products().list(&ProductFilter::default()).await?;
    let low_stock = ctx
        .client
        .inventory()
        .list(&StockFilter {
            low_stock: Some(true),
            ..Default::default()
        })
        .await?;
    let pending = ctx
        .client
        .transfers()
        .list(&TransferFilter {
            status: Some(TransferStatus::Pending),
            ..Default::default()
        })
        .await?;
    let unread = ctx.client.alerts().list(&AlertFilter::unread()).await?;

    println!("shops:             {}", shops.len());
    println!("products:          {}", products.len());
    println!("low stock items:   {}", low_stock.len());
    println!("pending transfers: {}", pending.len());
    println!("unread alerts:     {}", unread.len());
    Ok(())
}
