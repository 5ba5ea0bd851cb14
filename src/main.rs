//! Sharkie headless driver
//!
//! Runs one seeded session against recording sinks with a scripted input
//! track and logs how it went. Usage: `sharkie [settings.json] [seconds]`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};

    use sharkie::audio::RecordingAudio;
    use sharkie::platform::Key;
    use sharkie::renderer::RecordingTarget;
    use sharkie::session::RecordingScreens;
    use sharkie::sim::GamePhase;
    use sharkie::{GameSession, Settings};

    /// Host frame length (60 Hz display)
    const FRAME_MS: f32 = 1000.0 / 60.0;
    const DEFAULT_SECONDS: f32 = 60.0;

    /// Scripted input: swim right, slap every few seconds, blow a bubble in between
    fn scripted_keys(t_ms: f32) -> [(Key, bool); 3] {
        let phase = (t_ms / 1000.0) as u32 % 6;
        [
            (Key::Right, phase != 5),
            (Key::Space, phase == 2),
            (Key::D, phase == 4),
        ]
    }

    pub fn run() -> Result<()> {
        env_logger::init();

        let mut args = std::env::args().skip(1);
        let settings_path = args.next().unwrap_or_else(|| "sharkie.json".to_string());
        let seconds = match args.next() {
            Some(s) => s.parse::<f32>().context("duration must be a number of seconds")?,
            None => DEFAULT_SECONDS,
        };

        let settings = Settings::load(&settings_path)
            .with_context(|| format!("failed to load settings from {settings_path}"))?;
        let seed = match settings.seed {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("system clock before epoch")?
                .as_millis() as u64,
        };

        let audio = RecordingAudio::new();
        let screens = RecordingScreens::new();
        let mut session = GameSession::start(settings, seed, Box::new(audio.clone()), Box::new(screens.clone()))
            .context("failed to start session")?;
        let mut target = RecordingTarget::new();

        log::info!("Sharkie (headless) running {seconds}s with seed {seed}");

        let mut t = 0.0;
        while t < seconds * 1000.0 && session.is_running() {
            for (key, pressed) in scripted_keys(t) {
                session.set_key(key, pressed);
            }
            session.advance(FRAME_MS);
            session.render(&mut target);
            t += FRAME_MS;
        }

        let world = session.world();
        let outcome = match world.phase {
            GamePhase::Playing => "still playing",
            GamePhase::CharacterDown => "character down",
            GamePhase::Won => "won",
            GamePhase::Lost => "lost",
        };
        log::info!(
            "Finished after {:.1}s simulated: {}, x = {:.0}, energy = {}, coins = {}, enemies left = {}",
            world.time_ms / 1000.0,
            outcome,
            world.character.body.pos.x,
            world.character.energy,
            world.character.coins,
            world.level.enemies.len()
        );
        log::info!(
            "{} audio calls, {} blits in the last frame, screens shown: {:?}",
            audio.calls().len(),
            target.draw_count(),
            screens.shown()
        );
        session.stop();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on the web
}
