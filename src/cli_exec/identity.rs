use pokedeck::model::RegisterRequest;
use pokedeck::remote::RemoteError;

use super::render::{leader_line, print_json};
use super::context::Ctx;
use super::*;

pub(super) fn handle_login_command(ctx: &Ctx, email: &str, password: &str) -> Result<()> {
    let auth = ctx.client.login(email, password).context("login")?;
    ctx.store.set_token(Some(auth.token))?;
    println!("Logged in as {}", auth.user.username);
    Ok(())
}

pub(super) fn handle_register_command(
    ctx: &Ctx,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let auth = ctx
        .client
        .register(&RegisterRequest {
            username,
            email,
            password,
        })
        .context("register")?;
    ctx.store.set_token(Some(auth.token))?;
    println!("Registered and logged in as {}", auth.user.username);
    Ok(())
}

pub(super) fn handle_logout_command() -> Result<()> {
    let store = ConfigStore::discover()?;
    store.set_token(None)?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(ctx: &Ctx, json: bool) -> Result<()> {
    let user = match ctx.client.whoami() {
        Ok(user) => user,
        Err(RemoteError::Unauthorized) => {
            // A rejected token is useless; drop it so the next run says so.
            ctx.store.set_token(None)?;
            anyhow::bail!("stored token was rejected; run `pokedeck login` again");
        }
        Err(err) => return Err(err).context("whoami"),
    };
    if json {
        print_json(&user, "user")?;
    } else {
        println!("user: {}", user.username);
        println!("user_id: {}", user.id);
        if !user.email.is_empty() {
            println!("email: {}", user.email);
        }
        println!("cards: {}", user.stats.total_pokemons);
        println!("rank: {}", user.stats.rank);
        if !user.badges.is_empty() {
            let badges = user
                .badges
                .iter()
                .map(|b| b.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!("badges: {}", badges);
        }
    }
    Ok(())
}

pub(super) fn handle_leaderboard_command(ctx: &Ctx, limit: usize, json: bool) -> Result<()> {
    let mut users = ctx.client.leaderboard().context("fetch leaderboard")?;
    users.sort_by_key(|u| u.stats.rank);
    users.truncate(limit);
    if json {
        print_json(&users, "leaderboard")?;
    } else if users.is_empty() {
        println!("No collectors yet");
    } else {
        for u in &users {
            println!("{}", leader_line(u));
        }
    }
    Ok(())
}

pub(super) fn handle_config_command(globals: &Globals, command: ConfigCommands) -> Result<()> {
    let store = ConfigStore::discover()?;

    match command {
        ConfigCommands::Show { json } => {
            let cfg = load_config(&store, globals)?;
            let has_token = cfg.token.is_some();
            if json {
                print_json(
                    &serde_json::json!({
                        "baseUrl": cfg.base_url,
                        "pageSize": cfg.page_size,
                        "timeoutSecs": cfg.timeout_secs,
                        "loggedIn": has_token,
                        "path": store.config_path(),
                    }),
                    "config",
                )?;
            } else {
                println!("path: {}", store.config_path().display());
                println!("url: {}", cfg.base_url);
                println!("page_size: {}", cfg.page_size);
                println!("timeout_secs: {}", cfg.timeout_secs);
                println!("logged_in: {}", has_token);
            }
        }
        ConfigCommands::Set {
            base_url,
            page_size,
            timeout,
        } => {
            let mut cfg = store.read_config()?;
            if let Some(url) = base_url {
                cfg.apply_overrides(Some(url), None);
            }
            if let Some(size) = page_size {
                if size == 0 {
                    anyhow::bail!("page size must be at least 1");
                }
                cfg.page_size = size;
            }
            if let Some(secs) = timeout {
                cfg.timeout_secs = secs;
            }
            store.write_config(&cfg)?;
            println!("Configuration saved to {}", store.config_path().display());
        }
    }

    Ok(())
}
