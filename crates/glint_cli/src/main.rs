use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_core::{load_scene, Camera, SceneFile};
use glint_renderer::{render, RenderConfig, ToneMap, DEFAULT_BUCKET_SIZE};

/// Render a scene description to an image.
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    #[arg(short, long, default_value = "output.png")]
    /// Output image; the format follows the extension
    output: PathBuf,

    /// Override the image width from the scene file
    #[arg(long)]
    width: Option<u32>,

    /// Override the image height from the scene file
    #[arg(long)]
    height: Option<u32>,

    /// Override the reflection depth from the scene file
    #[arg(short, long)]
    depth: Option<u32>,

    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    #[arg(long, value_enum, default_value_t = ToneMapArg::Reinhard)]
    tone_map: ToneMapArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ToneMapArg {
    Reinhard,
    Clamp,
}

impl From<ToneMapArg> for ToneMap {
    fn from(value: ToneMapArg) -> Self {
        match value {
            ToneMapArg::Reinhard => ToneMap::Reinhard,
            ToneMapArg::Clamp => ToneMap::Clamp,
        }
    }
}

/// Apply command-line depth and size overrides to a loaded scene, returning
/// the image size to render.
fn apply_overrides(args: &Args, file: &mut SceneFile) -> Result<(u32, u32)> {
    if let Some(depth) = args.depth {
        anyhow::ensure!(depth >= 1, "depth must be at least 1");
        file.scene.depth = depth;
    }

    let resized = args.width.is_some() || args.height.is_some();
    let width = args.width.unwrap_or(file.width);
    let height = args.height.unwrap_or(file.height);
    anyhow::ensure!(width > 0 && height > 0, "image size must be non-zero");
    if resized && file.default_camera {
        // Derived camera follows the image aspect ratio; a camera from the
        // file is kept as written
        file.scene.camera = Camera::for_image(width, height);
    }

    Ok((width, height))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting Glint");

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let mut file = load_scene(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;

    let (width, height) = apply_overrides(&args, &mut file)?;

    let config = RenderConfig {
        bucket_size: args.bucket_size,
        tone_map: args.tone_map.into(),
    };

    let image = render(&file.scene, width, height, &config);
    image
        .save(&args.output, config.tone_map)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::load_scene_from_str;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["glint", "scene.json"]).unwrap();
        assert_eq!(args.scene, PathBuf::from("scene.json"));
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.bucket_size, DEFAULT_BUCKET_SIZE);
        assert_eq!(args.tone_map, ToneMapArg::Reinhard);
        assert!(args.depth.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "glint", "scene.json", "-o", "out.jpg", "--width", "320", "--height", "200",
            "-d", "5", "-j", "2", "--tone-map", "clamp",
        ])
        .unwrap();

        assert_eq!(args.output, PathBuf::from("out.jpg"));
        assert_eq!((args.width, args.height), (Some(320), Some(200)));
        assert_eq!(args.depth, Some(5));
        assert_eq!(args.threads, Some(2));
        assert_eq!(ToneMap::from(args.tone_map), ToneMap::Clamp);
    }

    #[test]
    fn test_scene_required() {
        assert!(Args::try_parse_from(["glint"]).is_err());
    }

    fn resize_args() -> Args {
        Args::try_parse_from(["glint", "scene.json", "--width", "200", "--height", "200"]).unwrap()
    }

    #[test]
    fn test_resize_reframes_derived_camera() {
        let mut file = load_scene_from_str("{}").unwrap();

        let size = apply_overrides(&resize_args(), &mut file).unwrap();
        assert_eq!(size, (200, 200));
        assert_eq!(file.scene.camera, Camera::for_image(200, 200));
    }

    #[test]
    fn test_resize_keeps_explicit_camera() {
        // Written out by hand with the derived 640x480 framing
        let mut file = load_scene_from_str(
            r#"{ "camera": { "position": [0, 0, 1],
                             "screen": { "left": -1, "top": 0.75, "right": 1, "bottom": -0.75 } } }"#,
        )
        .unwrap();
        let written = file.scene.camera;

        let size = apply_overrides(&resize_args(), &mut file).unwrap();
        assert_eq!(size, (200, 200));
        assert_eq!(file.scene.camera, written);
    }

    #[test]
    fn test_invalid_overrides() {
        let mut file = load_scene_from_str("{}").unwrap();

        let args = Args::try_parse_from(["glint", "scene.json", "-d", "0"]).unwrap();
        assert!(apply_overrides(&args, &mut file).is_err());

        let args = Args::try_parse_from(["glint", "scene.json", "--width", "0"]).unwrap();
        assert!(apply_overrides(&args, &mut file).is_err());
    }
}
