use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: crate::foundation::core::Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn transparent_pixels_show_the_background() {
    let mut dst = vec![0u8; 4];
    composite_over(&mut dst, &[0, 0, 0, 0], [10, 20, 30]);
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixels_hide_the_background() {
    let mut dst = vec![0u8; 4];
    composite_over(&mut dst, &[1, 2, 3, 255], [10, 20, 30]);
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn half_covered_pixels_blend() {
    // 50% red over white.
    let mut dst = vec![0u8; 8];
    composite_over(&mut dst, &[128, 0, 0, 128, 0, 0, 0, 0], [255, 255, 255]);
    assert_eq!(dst, vec![255, 127, 127, 255, 255, 255, 255, 255]);
}

#[test]
fn sink_premultiplies_translucent_background() {
    let sink = FfmpegSink::new(
        FfmpegSinkOpts::new("unused.mp4").with_background(Color::from_rgba8(200, 100, 0, 128)),
    );
    assert_eq!(sink.background, [100, 50, 0]);
    assert_eq!(sink.opts().background, Color::from_rgba8(200, 100, 0, 128));
}

#[test]
fn encoder_args_describe_raw_input_and_h264_output() {
    let opts = FfmpegSinkOpts::new("out/reveal.mp4");
    let args = encoder_args(&cfg(64, 32), &opts);
    let pair = |flag: &str| {
        let i = args.iter().position(|a| a == flag).unwrap();
        args[i + 1].clone()
    };
    assert_eq!(args[0], "-y");
    assert_eq!(pair("-s"), "64x32");
    assert_eq!(pair("-r"), "30/1");
    assert_eq!(pair("-i"), "pipe:0");
    assert_eq!(pair("-c:v"), "libx264");
    assert!(args.iter().any(|a| a == "yuv420p"));
    assert_eq!(args.last().map(String::as_str), Some("out/reveal.mp4"));

    // the input rate has to precede -i to apply to the pipe
    let r = args.iter().position(|a| a == "-r").unwrap();
    let i = args.iter().position(|a| a == "-i").unwrap();
    assert!(r < i);

    let keep = encoder_args(&cfg(64, 32), &opts.with_overwrite(false));
    assert_eq!(keep[0], "-n");
}

#[test]
fn sink_config_requires_even_non_zero_size() {
    let ok = cfg(64, 32);
    assert!(validate_sink_config(&ok).is_ok());
    assert!(validate_sink_config(&SinkConfig { width: 63, ..ok }).is_err());
    assert!(validate_sink_config(&SinkConfig { height: 0, ..ok }).is_err());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &frame),
        Err(RevealError::Encode(_))
    ));
    assert!(sink.end().is_err());
}
