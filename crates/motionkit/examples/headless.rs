//! Headless Effects Demo
//!
//! Drives all four effects through a scripted sequence of taps on a virtual
//! 60 fps clock and logs what a host would draw.
//!
//! Run with: cargo run -p motionkit --example headless [-- motion.toml]
//! Set RUST_LOG=motionkit=trace to see activation decisions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use motionkit::prelude::*;
use motionkit_core::Size;

const FRAME: Duration = Duration::from_micros(16_667);

struct LoggingHaptics;

impl HapticFeedback for LoggingHaptics {
    fn impact(&self, style: ImpactStyle) -> std::result::Result<(), HapticError> {
        tracing::info!(?style, "haptic impact");
        Ok(())
    }
}

fn counter(name: &'static str) -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let action = move || {
        let n = c.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(button = name, n, "action invoked");
    };
    (count, action)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MotionConfig::load(path)?,
        None => MotionConfig::default(),
    };

    let scheduler = AnimationScheduler::new();
    let loading = Binding::new(false);

    let (saves, save_action) = counter("save");
    let mut save = PulseEffect::new(scheduler.handle(), save_action, "Save")
        .glow_color(Color::from_hex(0x34C759))
        .with_config(config.pulse.clone());
    save.mount();

    let (likes, like_action) = counter("like");
    let like = BounceEffect::new(scheduler.handle(), like_action, "Like")
        .haptics(Arc::new(LoggingHaptics))
        .with_config(config.bounce.clone());

    let (submits, submit_action) = counter("submit");
    let submit = LoadingOverlay::new(scheduler.handle(), &loading, submit_action, "Submit")
        .with_config(config.loading.clone());

    let (retries, retry_action) = counter("retry");
    let retry =
        ShakeEffect::new(scheduler.handle(), retry_action, "Retry").with_config(config.shake.clone());

    let size = Size::new(120.0, 44.0);

    for frame in 0..120u32 {
        match frame {
            5 => {
                like.activate();
            }
            8 => {
                // Double tap while still pressed
                let outcome = like.activate();
                tracing::info!(?outcome, "second tap on like");
            }
            10 => {
                submit.activate();
                loading.set(true);
            }
            20 => {
                let outcome = submit.activate();
                tracing::info!(?outcome, "tap while loading");
            }
            30 => {
                retry.activate();
            }
            90 => {
                loading.set(false);
            }
            100 => {
                save.activate();
            }
            _ => {}
        }

        scheduler.advance(FRAME);

        if frame % 10 == 0 {
            let pulse = save.render();
            let bounce = like.render();
            let overlay = submit.render();
            let shake = retry.render();
            tracing::info!(
                frame,
                pulse_scale = pulse.scale,
                glow_blur = pulse.shadow.map(|s| s.blur).unwrap_or(0.0),
                bounce_scale = bounce.scale,
                label_opacity = overlay.opacity,
                spinner = overlay.spinner.is_some(),
                shake_dx = shake.effective_transform(size).tx(),
                "frame"
            );
        }
    }

    tracing::info!(
        saves = saves.load(Ordering::SeqCst),
        likes = likes.load(Ordering::SeqCst),
        submits = submits.load(Ordering::SeqCst),
        retries = retries.load(Ordering::SeqCst),
        elapsed = ?scheduler.now(),
        "done"
    );

    Ok(())
}
