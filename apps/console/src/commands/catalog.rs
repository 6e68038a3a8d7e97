//! Category and product catalog pages.

use shopgrid_api::endpoints::{CategoryPayload, ProductFilter, ProductPayload};

use crate::cli::{CategoriesCommand, ProductsCommand};
use crate::context::AppContext;
use crate::error::ConsoleResult;
use crate::output::{opt, print_table};

pub async fn run_categories(ctx: &AppContext, command: CategoriesCommand) -> ConsoleResult<()> {
    match command {
        CategoriesCommand::List => {
            let categories = ctx.client.categories().list().await?;
            let rows: Vec<Vec<String>> = categories
                .iter()
                .map(|c| vec![c.id.to_string(), c.name.clone(), opt(&c.description)])
                .collect();
            print_table(&["ID", "Name", "Description"], &rows);
        }
        CategoriesCommand::Create { name, description } => {
            let category = ctx
                .client
                .categories()
                .create(&CategoryPayload { name, description })
                .await?;
            println!("Created category {} (id {})", category.name, category.id);
        }
        CategoriesCommand::Update {
            id,
            name,
            description,
        } => {
            let category = ctx
                .client
                .categories()
                .update(id, &CategoryPayload { name, description })
                .await?;
            println!("Updated category {} (id {})", category.name, category.id);
        }
        CategoriesCommand::Delete { id } => {
            ctx.client.categories().delete(id).await?;
            println!("Deleted category {id}");
        }
    }
    Ok(())
}

pub async fn run_products(ctx: &AppContext, command: ProductsCommand) -> ConsoleResult<()> {
    match command {
        ProductsCommand::List { category, active } => {
            let filter = ProductFilter {
                category_id: category,
                is_active: active,
            };
            let products = ctx.client.products().list(&filter).await?;
            let rows: Vec<Vec<String>> = products
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.name.clone(),
                        opt(&p.category_name),
                        p.unit_price.to_string(),
                        opt(&p.barcode),
                        if p.is_active { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            print_table(
                &["ID", "Name", "Category", "Price", "Barcode", "Active"],
                &rows,
            );
        }
        ProductsCommand::Show { id } => {
            let p = ctx.client.products().get(id).await?;
            println!("id:       {}", p.id);
            println!("name:     {}", p.name);
            println!("category: {}", opt(&p.category_name));
            println!("price:    {}", p.unit_price);
            println!("barcode:  {}", opt(&p.barcode));
            println!("active:   {}", p.is_active);
        }
        ProductsCommand::Create {
            name,
            price,
            category,
            barcode,
        } => {
            let product = ctx
                .client
                .products()
                .create(&ProductPayload {
                    name,
                    category,
                    unit_price: price,
                    barcode,
                    is_active: None,
                })
                .await?;
            println!("Created product {} (id {})", product.name, product.id);
        }
        ProductsCommand::Update {
            id,
            name,
            price,
            category,
            barcode,
            active,
        } => {
            let product = ctx
                .client
                .products()
                .update(
                    id,
                    &ProductPayload {
                        name,
                        category,
                        unit_price: price,
                        barcode,
                        is_active: active,
                    },
                )
                .await?;
            println!("Updated product {} (id {})", product.name, product.id);
        }
        ProductsCommand::Delete { id } => {
            ctx.client.products().delete(id).await?;
            println!("Deleted product {id}");
        }
    }
    Ok(())
}
