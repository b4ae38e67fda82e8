use super::*;
use crate::camera::plan::FrameKind;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, FrameIndex};

fn small_opts(dir: &Path) -> AnimationOpts {
    let mut opts = AnimationOpts::in_dir(dir);
    opts.raster = opts.raster.with_canvas(Canvas {
        width: 48,
        height: 48,
    });
    opts.raster.margin_px = 4.0;
    opts.step = 100;
    opts
}

#[test]
fn default_opts_match_the_fixed_animation() {
    let opts = AnimationOpts::default();
    assert_eq!(opts.samples, 1000);
    assert_eq!(opts.step, 10);
    assert_eq!(opts.final_pose, CameraPose::new(90.0, 0.0));
    assert_eq!(opts.gif.frame_delay_ms, 50);
    assert!(opts.gif.loop_forever);
    assert_eq!(
        opts.gif.out_path,
        Path::new(".").join("lissajous_curve_animation.gif")
    );
    assert_eq!(opts.frames_dir, Path::new(".").join("frames"));
}

#[test]
fn default_session_plans_101_frames() {
    let session = AnimationSession::new(AnimationOpts::default()).unwrap();
    assert_eq!(session.curve().len(), 1000);
    assert_eq!(session.plan().len(), 101);
}

#[test]
fn run_into_pushes_every_frame_in_plan_order() {
    let mut session = AnimationSession::new(small_opts(Path::new("unused"))).unwrap();
    let mut sink = InMemorySink::new();
    let stats = session.run_into(&mut sink).unwrap();

    assert_eq!(stats.frames_planned, 11);
    assert_eq!(stats.frames_rendered, 11);
    assert_eq!(stats.frames_encoded, 0);
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().frame_count, 11);
    for (k, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(*idx, FrameIndex(k as u64));
        assert_eq!((frame.width, frame.height), (48, 48));
    }
}

#[test]
fn render_frame_matches_run_into_output() {
    let mut session = AnimationSession::new(small_opts(Path::new("unused"))).unwrap();
    let last = *session.plan().frames().last().unwrap();
    assert_eq!(last.kind, FrameKind::Final);
    let single = session.render_frame(&last).unwrap();

    let mut sink = InMemorySink::new();
    session.run_into(&mut sink).unwrap();
    assert_eq!(&sink.frames().last().unwrap().1, &single);
}

#[test]
fn invalid_options_fail_fast() {
    let mut opts = small_opts(Path::new("unused"));
    opts.samples = 0;
    assert!(AnimationSession::new(opts).is_err());

    let mut opts = small_opts(Path::new("unused"));
    opts.step = 0;
    assert!(AnimationSession::new(opts).is_err());

    let mut opts = small_opts(Path::new("unused"));
    opts.gif.speed = 99;
    assert!(AnimationSession::new(opts).is_err());

    let mut opts = small_opts(Path::new("unused"));
    opts.final_pose.azimuth_deg = f64::NAN;
    assert!(AnimationSession::new(opts).is_err());
}

#[test]
fn opts_serialize_for_diagnostics() {
    let json = serde_json::to_string(&AnimationOpts::default()).unwrap();
    assert!(json.contains("\"samples\":1000"));
    let back: AnimationOpts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, AnimationOpts::default());
}
