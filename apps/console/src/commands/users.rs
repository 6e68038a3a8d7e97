//! User administration page. Admin only.

use shopgrid_api::endpoints::UserUpdate;
use shopgrid_core::access::can_manage_users;

use crate::cli::UsersCommand;
use crate::context::AppContext;
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::{opt, opt_num, print_table};

pub async fn run(ctx: &AppContext, command: UsersCommand) -> ConsoleResult<()> {
    require_admin(ctx)?;

    match command {
        UsersCommand::List => {
            let users = ctx.client.users().list().await?;
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| {
                    vec![
                        u.id.to_string(),
                        u.username.clone(),
                        u.role.to_string(),
                        opt(&u.shop_name),
                        opt(&u.phone),
                        if u.is_active { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "Username", "Role", "Shop", "Phone", "Active"], &rows);
        }
        UsersCommand::Show { id } => {
            let u = ctx.client.users().get(id).await?;
            println!("id:       {}", u.id);
            println!("username: {}", u.username);
            println!("email:    {}", opt(&u.email));
            println!("role:     {}", u.role);
            println!("shop:     {}", opt_num(u.shop_id()));
            println!("phone:    {}", opt(&u.phone));
            println!("active:   {}", u.is_active);
        }
        UsersCommand::Update {
            id,
            role,
            shop,
            phone,
            active,
        } => {
            let user = ctx
                .client
                .users()
                .update(
                    id,
                    &UserUpdate {
                        role,
                        shop,
                        phone,
                        is_active: active,
                    },
                )
                .await?;
            println!("Updated user {} ({})", user.username, user.role);
        }
        UsersCommand::Delete { id } => {
            ctx.client.users().delete(id).await?;
            println!("Deleted user {id}");
        }
    }
    Ok(())
}

fn require_admin(ctx: &AppContext) -> ConsoleResult<()> {
    let user = ctx.session.current_user().ok_or(ConsoleError::NotLoggedIn)?;
    if can_manage_users(user.role) {
        Ok(())
    } else {
        Err(ConsoleError::NotPermitted(
            "Only admins can manage users.".to_string(),
        ))
    }
}
