//! Headless demo host: runs the demo program for a number of frames and
//! writes every layer of the last frame to PNG.
//!
//! Usage: `tessera-studio [frames] [out_dir]`

mod demo;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tessera_engine::coords::Direction;
use tessera_engine::input::{Event, Key};
use tessera_engine::logging::{LoggingConfig, init_logging};
use tessera_engine::program::Stage;

const DEFAULT_FRAMES: u64 = 60;
const DEFAULT_OUT_DIR: &str = "./tessera-out";
const SEED: u64 = 0x7e55_e7a;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(arg) => arg.parse::<u64>().with_context(|| format!("invalid frame count {arg:?}"))?,
        None => DEFAULT_FRAMES,
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let program = demo::Demo::new(SEED).context("building demo shapes")?;
    let mut stage = Stage::new(program, demo::screen_spec()).context("building stage")?;

    // Scripted input: head right for the first half, then down.
    let input = stage.attach_input()?;
    stage.dispatch(&input, Event::Move(Direction::Right));
    stage.run_frames(frames / 2);
    stage.dispatch(&input, Event::key_pressed(Key::Arrow(Direction::Down)));
    stage.run_frames(frames - frames / 2);
    stage.detach_input(input);
    stage.display_if_needed();

    log::info!(
        "ran {} frames, average dt {:.4}s",
        stage.frame_number(),
        stage.average_elapsed().unwrap_or_default()
    );

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    for (n, layer) in stage.screen_mut().layers_mut().iter_mut().enumerate() {
        let path = out_dir.join(format!("layer-{n}.png"));
        layer.image().save(&path).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
