//! Interactive point-of-sale loop.
//!
//! The principal is re-fetched on entry so shop pinning reflects the latest
//! assignment, then the cart is driven line-by-line from stdin. A successful
//! submission clears the cart and schedules a one-shot alert recheck shortly
//! after, since a sale can push stock below its threshold.
//!
//! ```text
//! billing> add 3
//! billing> qty 3 2
//! billing> discount 5.00
//! billing> pay card
//! billing> submit
//! ```

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use shopgrid_api::endpoints::ProductFilter;
use shopgrid_core::access::{available_shops, pinned_shop_id};
use shopgrid_core::cart::Cart;
use shopgrid_core::money::Money;
use shopgrid_core::types::{PaymentMethod, Product, Shop};
use shopgrid_core::validation::validate_amount;
use shopgrid_core::POST_SALE_ALERT_RECHECK_SECS;

use crate::context::AppContext;
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::print_table;

pub async fn run(ctx: &AppContext) -> ConsoleResult<()> {
    let user = ctx.session.refresh_user().await?;
    let shops = ctx.client.shops().list().await?;
    let products = ctx
        .client
        .products()
        .list(&ProductFilter {
            is_active: Some(true),
            category_id: None,
        })
        .await?;

    // Establish the poller's baseline now, silently; without it the
    // post-sale recheck would treat every unread alert as pre-existing and
    // notify nothing.
    ctx.poller.check_for_new_alerts(false).await;

    let pinned = pinned_shop_id(&user);
    let mut selected_shop = pinned;
    let mut cart = Cart::new();

    println!("Billing - {} product(s) available.", products.len());
    match selected_shop {
        Some(id) => println!("Shop locked to your assignment (shop {id})."),
        None => {
            let visible = available_shops(&user, &shops);
            let names: Vec<String> = visible.iter().map(|s| format!("{} ({})", s.id, s.name)).collect();
            println!("Select a shop with `shop <id>`: {}", names.join(", "));
        }
    }
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("billing> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        let outcome = handle(
            ctx,
            &mut cart,
            &mut selected_shop,
            pinned,
            &products,
            &shops,
            input,
        )
        .await;
        if let Err(e) = outcome {
            println!("{}", e.display_message());
        }
    }

    Ok(())
}

async fn handle(
    ctx: &AppContext,
    cart: &mut Cart,
    selected_shop: &mut Option<i64>,
    pinned: Option<i64>,
    products: &[Product],
    shops: &[Shop],
    input: &str,
) -> ConsoleResult<()> {
    let mut parts = input.splitn(3, ' ');
    let verb = parts.next().unwrap_or_default();
    let arg1 = parts.next();
    let arg2 = parts.next();

    match verb {
        "help" => print_help(),
        "add" => {
            let id: i64 = parse_arg(arg1, "product id")?;
            let product = find_product(products, id)?;
            cart.add_product(product);
            println!("{} x{}", product.name, line_quantity(cart, id));
        }
        "qty" => {
            let id: i64 = parse_arg(arg1, "product id")?;
            let quantity: i64 = parse_arg(arg2, "quantity")?;
            cart.update_quantity(id, quantity)?;
            render_cart(cart);
        }
        "rm" => {
            let id: i64 = parse_arg(arg1, "product id")?;
            cart.remove(id)?;
            render_cart(cart);
        }
        "cart" => render_cart(cart),
        "discount" => {
            let amount: Money = parse_arg(arg1, "amount")?;
            validate_amount("discount", amount)?;
            cart.discount = amount;
            render_cart(cart);
        }
        "tax" => {
            let amount: Money = parse_arg(arg1, "amount")?;
            validate_amount("tax", amount)?;
            cart.tax = amount;
            render_cart(cart);
        }
        "pay" => {
            let method: PaymentMethod = parse_arg(arg1, "payment method")?;
            cart.payment_method = Some(method);
            println!("Payment method: {method}");
        }
        "note" => {
            cart.notes = input.strip_prefix("note").unwrap_or_default().trim().to_string();
            println!("Note set.");
        }
        "shop" => {
            if pinned.is_some() {
                return Err(ConsoleError::NotPermitted(
                    "Your role is locked to its assigned shop.".to_string(),
                ));
            }
            let id: i64 = parse_arg(arg1, "shop id")?;
            if !shops.iter().any(|s| s.id == id) {
                return Err(ConsoleError::Input(format!("No shop with id {id}.")));
            }
            *selected_shop = Some(id);
            println!("Selected shop {id}.");
        }
        "submit" => submit(ctx, cart, *selected_shop).await?,
        "clear" => {
            cart.clear();
            println!("Cart cleared.");
        }
        other => println!("Unknown command `{other}`. Type `help` for commands."),
    }
    Ok(())
}

async fn submit(ctx: &AppContext, cart: &mut Cart, selected_shop: Option<i64>) -> ConsoleResult<()> {
    let request = cart.to_sale_request(selected_shop)?;
    let sale = ctx.client.sales().create(&request).await?;

    println!(
        "Sale {} recorded: {} item(s), total {}",
        sale.id,
        cart.total_quantity(),
        sale.final_amount
    );
    cart.clear();

    // Stock may have crossed a threshold; give the backend a moment to
    // generate alerts, then check once.
    let poller = Arc::clone(&ctx.poller);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(POST_SALE_ALERT_RECHECK_SECS)).await;
        poller.check_for_new_alerts(true).await;
    });

    Ok(())
}

fn render_cart(cart: &Cart) {
    let rows: Vec<Vec<String>> = cart
        .lines
        .iter()
        .map(|l| {
            vec![
                l.product_id.to_string(),
                l.name.clone(),
                l.quantity.to_string(),
                l.unit_price.to_string(),
                l.line_total().to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "Product", "Qty", "Price", "Line total"], &rows);
    println!(
        "subtotal {}  discount {}  tax {}  total {}",
        cart.subtotal(),
        cart.discount,
        cart.tax,
        cart.total()
    );
}

fn print_help() {
    println!("add <product-id>        add one unit (merges into an existing line)");
    println!("qty <product-id> <n>    set a line's quantity (0 removes it)");
    println!("rm <product-id>         remove a line");
    println!("cart                    show the cart");
    println!("discount <amount>       set the order discount");
    println!("tax <amount>            set the order tax");
    println!("pay <method>            cash, card, upi, or other");
    println!("note <text>             set the order note");
    println!("shop <id>               select the shop (unpinned roles only)");
    println!("submit                  create the sale");
    println!("clear                   empty the cart");
    println!("quit                    leave billing");
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&str>, what: &str) -> ConsoleResult<T>
where
    T::Err: std::fmt::Display,
{
    let raw = arg.ok_or_else(|| ConsoleError::Input(format!("Missing {what}.")))?;
    raw.parse()
        .map_err(|e| ConsoleError::Input(format!("Invalid {what}: {e}")))
}

fn find_product<'a>(products: &'a [Product], id: i64) -> ConsoleResult<&'a Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ConsoleError::Input(format!("No product with id {id}.")))
}

fn line_quantity(cart: &Cart, product_id: i64) -> i64 {
    cart.lines
        .iter()
        .find(|l| l.product_id == product_id)
        .map(|l| l.quantity)
        .unwrap_or(0)
}
