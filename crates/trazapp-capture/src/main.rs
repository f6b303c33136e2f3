//! Renders the particle background off-screen and saves it as the static
//! PNG used behind the landing page hero.

mod config;
mod raster;

use anyhow::Context;
use config::CaptureConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use raster::RasterSurface;
use trazapp_core::{ParticleField, Rgba};

fn render(cfg: &CaptureConfig) -> anyhow::Result<image::RgbaImage> {
    let background = Rgba::from_hex(&cfg.background)
        .with_context(|| format!("invalid background colour `{}`", cfg.background))?;

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut field = ParticleField::new();
    field.initialize(cfg.width as f32, cfg.height as f32, &mut rng);
    if let Some([x, y]) = cfg.pointer {
        field.pointer.move_to(x, y);
    }
    for _ in 0..cfg.warmup_frames {
        field.tick();
    }

    let mut surface = RasterSurface::new(cfg.output_size(), cfg.effective_scale(), background);
    field.render(&mut surface);
    let (w, h) = surface.image().dimensions();
    log::info!(
        "rendered {} particles into {}x{} px",
        field.particles().len(),
        w,
        h
    );
    Ok(surface.into_image())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = CaptureConfig::load().context("loading capture configuration")?;
    log::info!("capture config: {:?}", cfg);

    let image = render(&cfg)?;
    if let Some(dir) = cfg.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    image
        .save(&cfg.output)
        .with_context(|| format!("writing {}", cfg.output.display()))?;
    log::info!("saved {}", cfg.output.display());
    Ok(())
}
