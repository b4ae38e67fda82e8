use anyhow::Context as _;
use clap::Parser;

/// Draw a 3-D Lissajous curve under a sweeping camera and save it as a looping GIF.
///
/// Frames are staged in `./frames/` and removed once `./lissajous_curve_animation.gif` is
/// written.
#[derive(Parser, Debug)]
#[command(name = "lissajous", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let opts = lissajous::AnimationOpts::default();
    tracing::info!(opts = %serde_json::to_string(&opts)?, "animation options");

    let mut session = lissajous::AnimationSession::new(opts).context("plan animation")?;
    let stats = session.run().context("render animation")?;

    let out = stats
        .out_path
        .as_deref()
        .unwrap_or_else(|| session.opts().gif.out_path.as_path());
    let name = out.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    println!("Animated GIF saved as '{name}'");
    Ok(())
}
