use super::*;

/// Everything a command needs: where the config lives, the effective config
/// and a client built from it.
pub(super) struct Ctx {
    pub(super) store: ConfigStore,
    pub(super) config: ClientConfig,
    pub(super) client: RemoteClient,
}

pub(super) fn open_ctx(globals: &Globals) -> Result<Ctx> {
    let store = ConfigStore::discover()?;
    let config = load_config(&store, globals)?;
    let client = connect(&config)?;
    Ok(Ctx {
        store,
        config,
        client,
    })
}

pub(super) fn with_ctx<F>(globals: &Globals, f: F) -> Result<()>
where
    F: FnOnce(&Ctx) -> Result<()>,
{
    let ctx = open_ctx(globals)?;
    f(&ctx)
}

/// Like [`with_ctx`] but refuses to run without a token.
pub(super) fn with_auth<F>(globals: &Globals, f: F) -> Result<()>
where
    F: FnOnce(&Ctx) -> Result<()>,
{
    let ctx = open_ctx(globals)?;
    require_token(&ctx.config)?;
    f(&ctx)
}

/// Asks `prompt [y/N]` on stdin unless `yes` was passed.
pub(super) fn confirm(prompt: &str, yes: bool) -> Result<pokedeck::session::Confirmation> {
    use std::io::Write;

    use pokedeck::session::Confirmation;

    if yes {
        return Ok(Confirmation::Confirmed);
    }
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().context("flush stdout")?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("read confirmation")?;
    Ok(Confirmation::from_answer(&answer))
}
