pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod game;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::catalog::Catalog;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::game::selector;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_today() -> Result<()> {
    let config = AppConfig::new();
    let catalog = Catalog::load_default(&config.catalog)?;
    let date = selector::today();
    let target = selector::target_for_date(&catalog, date);
    println!(
        "{}: {} ({}, {}, age {}, {})",
        date, target.name, target.team, target.position, target.age, target.salary
    );
    Ok(())
}

pub fn handle_catalog() -> Result<()> {
    let config = AppConfig::new();
    let catalog = Catalog::load_default(&config.catalog)?;
    println!(
        "{} players above the ${} salary floor",
        catalog.len(),
        config.catalog.salary_floor
    );
    for player in catalog.players() {
        println!(
            "  {} #{} {} {} age {} {}",
            player.name, player.jersey, player.team, player.position, player.age, player.salary
        );
    }
    Ok(())
}
