use crate::server::{AppState, run_server};
use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, bind: Option<String>) -> Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);
    let bind = bind.unwrap_or_else(|| ctx.config.server.bind.clone());
    let ip: IpAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", bind))?;
    let addr = SocketAddr::new(ip, port);

    let state = AppState::new(ctx.config, &ctx.root).context("Failed to load translations")?;

    println!("Starting task board on http://{}", addr);
    println!(
        "Default locale: http://{}/{}",
        addr, state.config.i18n.default_locale
    );

    tokio::runtime::Runtime::new()?.block_on(async { run_server(state, addr).await })?;
    Ok(())
}
