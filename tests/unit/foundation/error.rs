use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LissajousError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LissajousError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LissajousError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn io_errors_convert_with_question_mark() {
    fn open_missing() -> LissajousResult<()> {
        std::fs::File::open("/definitely/not/a/real/path/frame_001.png")?;
        Ok(())
    }
    let err = open_missing().unwrap_err();
    assert!(matches!(err, LissajousError::Io(_)));
    assert!(err.to_string().starts_with("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LissajousError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
