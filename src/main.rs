// src/main.rs
//
// Calculatrice Q-pur: point d'entrée terminal
// --------------------------------------------
// - journalisation : tracing + EnvFilter (RUST_LOG, "warn" par défaut), sur stderr
// - réglages       : QPUR_DIGITS puis ligne de commande
// - code de sortie : 0 si tout va bien, 1 si une expression a échoué, 2 si démarrage impossible

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;

use app::etat::ENV_DIGITS;
use app::Reglages;

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialisation de tracing impossible : {e}"))
}

fn executer() -> anyhow::Result<bool> {
    init_tracing()?;

    let env_digits = std::env::var(ENV_DIGITS).ok();
    let reglages = Reglages::depuis(env_digits.as_deref(), std::env::args().skip(1))
        .context("réglages invalides")?;
    tracing::debug!(?reglages, "démarrage");

    app::lancer(reglages)
}

fn main() -> ExitCode {
    match executer() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("erreur : {e:#}");
            ExitCode::from(2)
        }
    }
}
