use super::*;
use crate::camera::pose::{CameraPose, CameraSweep};
use crate::encode::sink::InMemorySink;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "lissajous_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn plan() -> FramePlan {
    FramePlan::build(25, 10, &CameraSweep::default(), CameraPose::TOP_DOWN).unwrap()
}

fn solid(shade: u8) -> FrameRGBA {
    FrameRGBA::new(4, 3, [shade, shade, shade, 255].repeat(12), true).unwrap()
}

fn cfg(frame_count: u64) -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 3,
        frame_count,
    }
}

#[test]
fn stage_writes_plan_named_pngs_and_replays_in_order() {
    let root = temp_dir("stage_replay");
    let dir = root.join("frames");
    let plan = plan();

    let mut stage = FrameStage::for_plan(&dir, &plan);
    stage.begin(cfg(plan.len() as u64)).unwrap();
    for (k, spec) in plan.frames().iter().enumerate() {
        stage.push_frame(spec.index, &solid(k as u8 * 40)).unwrap();
    }
    stage.end().unwrap();

    for name in [
        "frame_001.png",
        "frame_011.png",
        "frame_021.png",
        "frame_final.png",
    ] {
        assert!(dir.join(name).is_file(), "missing {name}");
    }

    let mut mem = InMemorySink::new();
    stage.replay_into(&mut mem).unwrap();
    assert_eq!(mem.config().unwrap().frame_count, 4);
    assert_eq!(mem.frames().len(), 4);
    for (k, (idx, frame)) in mem.frames().iter().enumerate() {
        assert_eq!(*idx, FrameIndex(k as u64));
        assert_eq!(frame, &solid(k as u8 * 40));
    }

    stage.cleanup().unwrap();
    assert!(!dir.exists());
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn cleanup_also_removes_foreign_files() {
    let dir = temp_dir("stage_foreign");
    let mut stage = FrameStage::for_plan(&dir, &plan());
    stage.begin(cfg(4)).unwrap();
    stage.push_frame(FrameIndex(0), &solid(0)).unwrap();
    std::fs::write(dir.join("stray.txt"), b"x").unwrap();

    stage.cleanup().unwrap();
    assert!(!dir.exists());
}

#[test]
fn dropping_an_uncleaned_stage_removes_its_frames() {
    let dir = temp_dir("stage_drop");
    {
        let mut stage = FrameStage::for_plan(&dir, &plan());
        stage.begin(cfg(4)).unwrap();
        stage.push_frame(FrameIndex(0), &solid(7)).unwrap();
        stage.push_frame(FrameIndex(1), &solid(9)).unwrap();
        assert_eq!(stage.staged().len(), 2);
    }
    assert!(!dir.exists());
}

#[test]
fn unknown_index_and_unstarted_stage_are_errors() {
    let dir = temp_dir("stage_errors");
    let mut stage = FrameStage::for_plan(&dir, &plan());
    assert!(stage.push_frame(FrameIndex(0), &solid(0)).is_err());
    assert!(stage.replay_into(&mut InMemorySink::new()).is_err());

    stage.begin(cfg(4)).unwrap();
    let err = stage.push_frame(FrameIndex(99), &solid(0)).unwrap_err();
    assert!(err.to_string().contains("not in the plan"));
    stage.cleanup().unwrap();
}
