use super::*;

fn frame(fill: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![fill; 4],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(3), &frame(1)).unwrap();
    sink.push_frame(FrameIndex(4), &frame(2)).unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![3, 4]);
    assert_eq!(sink.frames()[1].1.data, vec![2; 4]);
}

#[test]
fn begin_resets_previous_capture() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(24, 1).unwrap(),
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &frame(9)).unwrap();
    sink.end().unwrap();
    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}
