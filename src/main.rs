//! Block Breaker entry point
//!
//! Native builds run a headless session: an autopilot keeps the paddle under
//! the ball and the outcome is logged. A real frontend plugs its own
//! `InputSource` and `RenderSink` into `run_frame` the same way.
//!
//! Usage: `block-breaker [SETTINGS.json] [--seed N] [--frames N] [--print-settings]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use block_breaker::sim::{GameEvent, GamePhase, GameSession, TickInput};
    use block_breaker::{DrawCommand, InputSource, RenderSink, Settings, run_frame};

    /// Default frame limit (about an hour at 60 Hz)
    const DEFAULT_MAX_FRAMES: u64 = 216_000;

    #[derive(Debug, Default)]
    struct Options {
        settings_path: Option<String>,
        seed: Option<u64>,
        max_frames: Option<u64>,
        print_settings: bool,
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
        let mut options = Options::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    options.seed = Some(value.parse::<u64>().map_err(|e| format!("bad seed: {e}"))?);
                }
                "--frames" => {
                    let value = args.next().ok_or("--frames needs a value")?;
                    options.max_frames =
                        Some(value.parse::<u64>().map_err(|e| format!("bad frame count: {e}"))?);
                }
                "--print-settings" => options.print_settings = true,
                other if other.starts_with("--") => return Err(format!("unknown flag {other}")),
                path => options.settings_path = Some(path.to_string()),
            }
        }
        Ok(options)
    }

    /// Presses space once, then follows the ball with the paddle center
    struct Autopilot {
        launched: bool,
        target_x: f32,
    }

    impl Autopilot {
        fn track(&mut self, session: &GameSession) {
            self.target_x = session.ball.pos.x - session.paddle.rect.size.x / 2.0;
        }
    }

    impl InputSource for Autopilot {
        fn poll(&mut self) -> TickInput {
            let launch = !std::mem::replace(&mut self.launched, true);
            TickInput {
                paddle_target_x: Some(self.target_x),
                start: launch,
                ..Default::default()
            }
        }
    }

    /// Counts what a renderer would have drawn
    #[derive(Default)]
    struct StatsSink {
        frames: u64,
        commands: u64,
    }

    impl RenderSink for StatsSink {
        fn submit(&mut self, frame: &[DrawCommand]) {
            self.frames += 1;
            self.commands += frame.len() as u64;
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Block Breaker (headless) starting...");

        let options = match parse_args(std::env::args().skip(1)) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        };

        let settings = match &options.settings_path {
            Some(path) => Settings::load(path),
            None => Settings::default(),
        };

        if options.print_settings {
            match settings.to_json_pretty() {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Could not serialize settings: {e}"),
            }
            return;
        }

        let dt = settings.dt;
        let mut session = match options.seed {
            Some(seed) => GameSession::new(settings, seed),
            None => GameSession::with_random_seed(settings),
        };
        let mut autopilot = Autopilot {
            launched: false,
            target_x: session.paddle.rect.pos.x,
        };
        let mut sink = StatsSink::default();
        let max_frames = options.max_frames.unwrap_or(DEFAULT_MAX_FRAMES);

        let mut paddle_hits = 0u64;
        let mut wall_bounces = 0u64;

        for _ in 0..max_frames {
            autopilot.track(&session);
            for event in run_frame(&mut session, &mut autopilot, &mut sink, dt) {
                match event {
                    GameEvent::PaddleHit(_) => paddle_hits += 1,
                    GameEvent::WallBounce(_) => wall_bounces += 1,
                    _ => {}
                }
            }
            if matches!(session.phase(), GamePhase::Won | GamePhase::Lost) {
                break;
            }
        }

        log::info!(
            "Rendered {} frames ({} draw commands)",
            sink.frames,
            sink.commands
        );
        println!(
            "{:?} after {} frames: {}/{} blocks broken, {} paddle hits, {} wall bounces",
            session.phase(),
            session.frame,
            session.broken_blocks(),
            session.blocks().len(),
            paddle_hits,
            wall_bounces
        );
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `block_breaker::run_frame` directly
}
