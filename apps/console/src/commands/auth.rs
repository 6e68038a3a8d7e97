//! Login, registration, logout, whoami.

use shopgrid_api::endpoints::RegisterRequest;
use shopgrid_core::types::Role;
use shopgrid_core::validation::validate_username;

use crate::context::AppContext;
use crate::error::ConsoleResult;
use crate::output::opt;

pub async fn login(ctx: &AppContext, username: &str, password: &str) -> ConsoleResult<()> {
    validate_username(username)?;
    let user = ctx.session.login(username, password).await?;
    println!("Logged in as {} ({})", user.username, user.role);
    if let Some(name) = &user.shop_name {
        println!("Assigned shop: {name}");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn register(
    ctx: &AppContext,
    username: &str,
    email: &str,
    password: &str,
    role: Role,
    phone: Option<String>,
    shop: Option<i64>,
) -> ConsoleResult<()> {
    validate_username(username)?;
    let user = ctx
        .session
        .register(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password2: password.to_string(),
            role: role.as_str().to_string(),
            phone,
            shop,
        })
        .await?;
    println!("Registered and logged in as {} ({})", user.username, user.role);
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> ConsoleResult<()> {
    ctx.session.logout().await?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> ConsoleResult<()> {
    match ctx.session.current_user() {
        Some(user) => {
            println!("username: {}", user.username);
            println!("role:     {}", user.role);
            println!("email:    {}", opt(&user.email));
            println!("shop:     {}", opt(&user.shop_name));
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
