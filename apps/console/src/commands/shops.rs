//! Shop administration page.

use shopgrid_api::endpoints::ShopPayload;

use crate::cli::ShopsCommand;
use crate::context::AppContext;
use crate::error::ConsoleResult;
use crate::output::{opt, print_table};

pub async fn run(ctx: &AppContext, command: ShopsCommand) -> ConsoleResult<()> {
    match command {
        ShopsCommand::List => {
            let shops = ctx.client.shops().list().await?;
            let rows: Vec<Vec<String>> = shops
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.name.clone(),
                        opt(&s.address),
                        opt(&s.phone),
                        if s.is_active { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "Name", "Address", "Phone", "Active"], &rows);
        }
        ShopsCommand::Show { id } => {
            let shop = ctx.client.shops().get(id).await?;
            println!("id:      {}", shop.id);
            println!("name:    {}", shop.name);
            println!("address: {}", opt(&shop.address));
            println!("phone:   {}", opt(&shop.phone));
            println!("email:   {}", opt(&shop.email));
            println!("active:  {}", shop.is_active);
        }
        ShopsCommand::Create {
            name,
            address,
            phone,
            email,
        } => {
            let shop = ctx
                .client
                .shops()
                .create(&ShopPayload {
                    name,
                    address,
                    phone,
                    email,
                    is_active: None,
                })
                .await?;
            println!("Created shop {} (id {})", shop.name, shop.id);
        }
        ShopsCommand::Update {
            id,
            name,
            address,
            phone,
            email,
            active,
        } => {
            let shop = ctx
                .client
                .shops()
                .update(
                    id,
                    &ShopPayload {
                        name,
                        address,
                        phone,
                        email,
                        is_active: active,
                    },
                )
                .await?;
            println!("Updated shop {} (id {})", shop.name, shop.id);
        }
        ShopsCommand::Delete { id } => {
            ctx.client.shops().delete(id).await?;
            println!("Deleted shop {id}");
        }
    }
    Ok(())
}
