use super::*;
use image::AnimationDecoder as _;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "lissajous_{name}_{}_{}.gif",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn solid(rgb: [u8; 3]) -> FrameRGBA {
    FrameRGBA::new(8, 6, [rgb[0], rgb[1], rgb[2], 255].repeat(48), true).unwrap()
}

fn cfg(frame_count: u64) -> SinkConfig {
    SinkConfig {
        width: 8,
        height: 6,
        frame_count,
    }
}

fn decode(path: &std::path::Path) -> Vec<image::Frame> {
    let f = std::io::BufReader::new(File::open(path).unwrap());
    image::codecs::gif::GifDecoder::new(f)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

/// Bytes following the `NETSCAPE2.0` application extension id, if present.
fn loop_extension(bytes: &[u8]) -> Option<[u8; 5]> {
    const ID: &[u8] = b"NETSCAPE2.0";
    let at = bytes.windows(ID.len()).position(|w| w == ID)? + ID.len();
    bytes.get(at..at + 5)?.try_into().ok()
}

fn write_two_frames(opts: GifSinkOpts) {
    let mut sink = GifSink::new(opts);
    sink.begin(cfg(2)).unwrap();
    sink.push_frame(FrameIndex(0), &solid([0, 0, 0])).unwrap();
    sink.push_frame(FrameIndex(1), &solid([255, 255, 255])).unwrap();
    sink.end().unwrap();
}

#[test]
fn gif_keeps_frame_count_order_and_delay() {
    let out = temp_path("gif_order");
    let colors = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(cfg(3)).unwrap();
    for (k, c) in colors.iter().enumerate() {
        sink.push_frame(FrameIndex(k as u64), &solid(*c)).unwrap();
    }
    sink.end().unwrap();
    assert_eq!(sink.frames_written(), 3);

    let frames = decode(&out);
    assert_eq!(frames.len(), 3);
    for (frame, c) in frames.iter().zip(colors) {
        assert_eq!(frame.buffer().dimensions(), (8, 6));
        let px = frame.buffer().get_pixel(3, 3).0;
        for ch in 0..3 {
            assert!(px[ch].abs_diff(c[ch]) <= 8, "got {px:?}, want {c:?}");
        }
        let (num, den) = frame.delay().numer_denom_ms();
        assert_eq!(num / den, 50);
    }

    std::fs::remove_file(&out).ok();
}

#[test]
fn default_gif_loops_forever() {
    let out = temp_path("gif_loop");
    write_two_frames(GifSinkOpts::new(&out));

    let bytes = std::fs::read(&out).unwrap();
    // sub-block size 3, sub-block id 1, loop count 0 (u16 LE = infinite), terminator
    assert_eq!(loop_extension(&bytes), Some([3, 1, 0, 0, 0]));
    std::fs::remove_file(&out).ok();
}

#[test]
fn single_pass_gif_has_no_loop_extension() {
    let out = temp_path("gif_once");
    write_two_frames(GifSinkOpts {
        loop_forever: false,
        ..GifSinkOpts::new(&out)
    });

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(loop_extension(&bytes), None);
    std::fs::remove_file(&out).ok();
}

#[test]
fn frame_count_mismatch_is_reported_at_end() {
    let out = temp_path("gif_short");
    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(cfg(2)).unwrap();
    sink.push_frame(FrameIndex(0), &solid([0, 0, 0])).unwrap();
    let err = sink.end().unwrap_err();
    assert!(err.to_string().contains("expected 2 frames"));
    std::fs::remove_file(&out).ok();
}

#[test]
fn invalid_options_fail_before_touching_disk() {
    let out = temp_path("gif_invalid");
    let opts = GifSinkOpts {
        speed: 0,
        ..GifSinkOpts::new(&out)
    };
    let mut sink = GifSink::new(opts);
    assert!(sink.begin(cfg(1)).is_err());
    assert!(!out.exists());

    let opts = GifSinkOpts {
        frame_delay_ms: 0,
        ..GifSinkOpts::new(&out)
    };
    assert!(GifSink::new(opts).begin(cfg(1)).is_err());
}

#[test]
fn existing_output_is_kept_without_overwrite() {
    let out = temp_path("gif_keep");
    std::fs::write(&out, b"previous").unwrap();
    let opts = GifSinkOpts {
        overwrite: false,
        ..GifSinkOpts::new(&out)
    };
    assert!(GifSink::new(opts).begin(cfg(1)).is_err());
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
    std::fs::remove_file(&out).ok();
}

#[test]
fn push_before_begin_and_out_of_order_are_errors() {
    let out = temp_path("gif_order_err");
    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    assert!(sink.push_frame(FrameIndex(0), &solid([1, 2, 3])).is_err());

    sink.begin(cfg(2)).unwrap();
    sink.push_frame(FrameIndex(1), &solid([1, 2, 3])).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &solid([1, 2, 3])).is_err());
    std::fs::remove_file(&out).ok();
}
