//! Breakthru game
//!
//! Plays Breakthru in a window or on the terminal, with AI, random and
//! human players as configured on the command line.

use std::sync::mpsc;
use std::thread;

use clap::Parser;
use log::{error, info};

use breakthru::config::{Config, HumanLink, PresenterKind};
use breakthru::ui::{BreakthruApp, ChannelPresenter, GameState, TextPresenter};
use breakthru::{AppError, Game};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        error!("{e}");
        return Err(e.into());
    }

    match config.presenter {
        PresenterKind::Text => run_text(&config),
        PresenterKind::Gui => run_gui(&config),
    }
}

fn run_text(config: &Config) -> Result<(), AppError> {
    let players = config.build_players(None)?;
    let summary = Game::new(players.gold, players.silver, TextPresenter)
        .with_measured(Some(players.measured))
        .play();
    info!(
        "{} after {} turns, AI time {:.1}s",
        summary.outcome,
        summary.plies,
        summary.think_time.as_secs_f64()
    );
    Ok(())
}

fn run_gui(config: &Config) -> Result<(), AppError> {
    let (event_tx, event_rx) = mpsc::channel();
    let (click_tx, click_rx) = mpsc::channel();

    let link = HumanLink {
        clicks: click_rx,
        events: event_tx.clone(),
    };
    let players = config.build_players(Some(link))?;
    let presenter = ChannelPresenter::new(event_tx);

    thread::spawn(move || {
        let summary = Game::new(players.gold, players.silver, presenter)
            .with_measured(Some(players.measured))
            .play();
        info!("{} after {} turns", summary.outcome, summary.plies);
    });

    let state = GameState::new(config.human_color(), event_rx, click_tx);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Breakthru"),
        ..Default::default()
    };

    eframe::run_native(
        "Breakthru",
        options,
        Box::new(move |cc| Ok(Box::new(BreakthruApp::new(cc, state)))),
    )?;
    Ok(())
}
