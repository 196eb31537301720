//! Headless demo driver
//!
//! Stands in for a real host: steps a virtual clock, sweeps the basket back
//! and forth in place of a drag stream, and prints HUD label updates - or
//! every event as a JSON line with `--json`, for piping into another host.
//!
//! Usage: candy-catch [--seed N] [--json]

use std::process::ExitCode;

use glam::Vec2;

use candy_catch::consts::*;
use candy_catch::sim::{Basket, Playfield};
use candy_catch::{GameSession, hud};

/// Virtual frame step (ms); the session itself is cadence-independent
const STEP_MS: u64 = 25;

struct Args {
    seed: u64,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 12345,
        json: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                args.seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {value}"))?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: candy-catch [--seed N] [--json]");
            return ExitCode::FAILURE;
        }
    };

    let playfield = Playfield {
        width: 1080.0,
        height: 1920.0,
    };
    let basket = Basket::new(
        (playfield.width - BASKET_WIDTH) / 2.0,
        playfield.height - 2.0 * BASKET_HEIGHT,
        Vec2::new(BASKET_WIDTH, BASKET_HEIGHT),
    );
    let mut session = GameSession::new(playfield, basket, args.seed, 0);

    let mut now_ms = 0u64;
    loop {
        // Scripted drag: one full sweep across the playfield every 4 seconds
        let phase = (now_ms % 4000) as f32 / 4000.0 * std::f32::consts::TAU;
        let sweep = 0.5 * (1.0 - phase.cos());
        session.move_basket(sweep * playfield.width);

        for event in session.advance(now_ms) {
            if args.json {
                if let Ok(line) = serde_json::to_string(&event) {
                    println!("{line}");
                }
            } else if let Some(line) = hud::line_for(&event) {
                println!("{line}");
            }
        }

        if session.is_over() && session.live_object_count() == 0 {
            break;
        }
        now_ms += STEP_MS;
    }

    if !args.json {
        println!("{}", hud::score_text(session.score()));
    }
    ExitCode::SUCCESS
}
