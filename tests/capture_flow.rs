use padbind::backends::VirtualAdapter;
use padbind::{
    AnalogDirection, BindingProfile, CaptureKind, InputManager, PadAxis, PadButton, AXIS_CENTER,
    AXIS_COUNT, ParamPackage,
};
use std::sync::Arc;
use std::thread;

fn axes(pairs: &[(PadAxis, u8)]) -> [u8; AXIS_COUNT] {
    let mut out = [AXIS_CENTER; AXIS_COUNT];
    for &(axis, value) in pairs {
        out[axis.index()] = value;
    }
    out
}

#[test]
fn capture_persist_and_poll() {
    let adapter = Arc::new(VirtualAdapter::new());
    let mut manager = InputManager::new(adapter.clone());
    let mut profile = BindingProfile::new("player one");

    // Learn a button on port 1.
    manager.begin_configuration(CaptureKind::Button);
    assert_eq!(manager.next_binding(), None);
    adapter.update_pad(1, PadButton::X.bits() | PadButton::Start.bits(), axes(&[]));
    let jump = manager.next_binding().expect("button binding");
    profile.buttons.insert("jump".into(), jump);

    // Learn the main stick on port 1: right, then up.
    manager.begin_configuration(CaptureKind::Analog);
    adapter.update_pad(1, 0, axes(&[(PadAxis::StickX, 230)]));
    assert_eq!(manager.next_binding(), None);
    adapter.update_pad(1, 0, axes(&[(PadAxis::StickY, 230)]));
    let mut stick = manager.next_binding().expect("analog binding");
    stick.set("deadzone", 0.1);
    profile.analogs.insert("move".into(), stick);
    manager.end_configuration();

    let restored = BindingProfile::from_toml_str(&profile.to_toml_string().unwrap()).unwrap();
    assert_eq!(restored, profile);
    assert_eq!(restored.analogs["move"].get_int("axis_x", -1), 0);
    assert_eq!(restored.analogs["move"].get_int("axis_y", -1), 1);

    let bound = manager.bind_profile(&restored).unwrap();
    adapter.update_pad(1, PadButton::X.bits(), axes(&[(PadAxis::StickX, 223)]));
    let state = bound.resolve();
    assert!(state.button("jump"));
    let (x, y) = state.analog("move");
    assert!((x - 1.0).abs() < 1e-5);
    assert_eq!(y, 0.0);
    assert!(bound.analogs["move"].direction_status(AnalogDirection::Right));

    // Other ports do not leak into port 1 devices.
    adapter.update_pad(0, PadButton::X.bits(), axes(&[]));
    adapter.update_pad(1, 0, axes(&[]));
    let state = bound.resolve();
    assert!(!state.button("jump"));
    assert_eq!(state.analog("move"), (0.0, 0.0));
}

#[test]
fn devices_poll_while_producer_writes() {
    let adapter = Arc::new(VirtualAdapter::new());
    let manager = InputManager::new(adapter.clone());
    let params: ParamPackage = "engine:gcpad,port:0,axis_x:0,axis_y:1".parse().unwrap();
    let stick = manager.create_analog(&params).unwrap();

    let producer = {
        let adapter = adapter.clone();
        thread::spawn(move || {
            for i in 0..10_000u32 {
                let v = (i % 256) as u8;
                adapter.update_pad(0, 0, axes(&[(PadAxis::StickX, v), (PadAxis::StickY, v)]));
            }
        })
    };

    while !producer.is_finished() {
        let (x, y) = stick.poll();
        assert!(x * x + y * y <= 1.0 + 1e-5);
        // Both axes always come from the same report.
        assert!((x - y).abs() < 1e-5);
    }
    producer.join().unwrap();
}
