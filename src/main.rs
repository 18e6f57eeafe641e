//! Headless session: records two keyframes with scripted key presses and lets the
//! spacecraft replay the motion between them.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pose_lerp::{
    geometry::{Transform, Vec3},
    input::{Input, Key},
    Actor, Settings, Spacecraft, Transformable,
};

const FRAME_TIME: f32 = 1.0 / 60.0;
const SECOND_CAPTURE_FRAME: u64 = 29;

#[derive(Parser)]
#[command(name = "example")]
#[command(about = "Replays a spacecraft between two captured keyframes")]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Give up after this many ticks
    #[arg(long, default_value = "1000")]
    max_ticks: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

enum SceneState {
    Continue,
    Stop,
}

struct Scene {
    spacecraft: Spacecraft,
    input: Input,
    frame: u64,
}

impl Scene {
    fn new(settings: &Settings) -> Self {
        Scene {
            spacecraft: Spacecraft::new(Transform::at(Vec3::new(0.0, 5.0, 0.0)), settings),
            input: Input::new(),
            frame: 0,
        }
    }

    fn script(&mut self) {
        let input = &mut self.input;
        match self.frame {
            0 => input.press(Key::Space),
            1 => {
                input.release(Key::Space);
                input.press(Key::Up);
            }
            11 => {
                input.release(Key::Up);
                input.press(Key::Y);
            }
            SECOND_CAPTURE_FRAME => {
                input.release(Key::Y);
                input.press(Key::Space);
            }
            30 => input.release(Key::Space),
            _ => {}
        }
    }

    fn update(&mut self) -> SceneState {
        self.script();
        self.spacecraft.handle_input(&self.input);
        self.spacecraft.tick(FRAME_TIME);
        self.input.reset();
        self.frame += 1;
        if self.frame > SECOND_CAPTURE_FRAME && !self.spacecraft.is_interpolating() {
            SceneState::Stop
        } else {
            SceneState::Continue
        }
    }

    fn display(&self) {
        if self.frame % 10 != 0 {
            return;
        }
        let model = self.spacecraft.model_matrix();
        debug!(
            frame = self.frame,
            translation = ?self.spacecraft.transform().translation,
            interpolating = self.spacecraft.is_interpolating(),
            ?model,
            "pose"
        );
        for line in self.spacecraft.hud_lines() {
            debug!("{line}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut scene = Scene::new(&settings);
    for _ in 0..cli.max_ticks {
        let state = scene.update();
        scene.display();
        if let SceneState::Stop = state {
            info!(
                frames = scene.frame,
                translation = ?scene.spacecraft.transform().translation,
                angles = ?scene.spacecraft.euler_angles(),
                "replay finished"
            );
            return Ok(());
        }
    }
    bail!("replay did not finish within {} ticks", cli.max_ticks)
}
