//! Session behaviour on the two built-in labs.

use cl_app::{LabSession, LedBand};
use cl_circuit::DragPayload;
use cl_core::ComponentKind;
use cl_project::{mesh_lab, ohm_lab};
use cl_solver::NotReady;

fn complete_ohm() -> LabSession {
    let mut session = LabSession::from_lab(&ohm_lab()).unwrap();
    assert!(session.drop_transfer("resistor", "resistor", "palette-resistor"));
    assert!(session.drop_transfer("led", "led", "palette-led"));
    session
}

#[test]
fn fresh_session_shows_placeholder_and_incomplete_status() {
    let session = LabSession::from_lab(&ohm_lab()).unwrap();
    let view = session.view();

    assert_eq!(view.display, "0.00");
    assert!(!view.status.ready);
    assert!(view.status.pulsing);
    assert!(view.led.is_none());

    let battery = view.slots.iter().find(|s| s.id == "battery").unwrap();
    assert!(battery.placed);
    assert!(battery.label_visible);
}

#[test]
fn ohm_generate_shows_power_and_led_band() {
    let mut session = complete_ohm();
    assert_eq!(session.generate().unwrap().display, "0.25");

    let view = session.view();
    assert_eq!(view.display, "0.25");
    assert!(view.status.ready);
    assert_eq!(view.led.unwrap().band, LedBand::Warm);
}

#[test]
fn overdriven_led_blinks() {
    let mut session = complete_ohm();
    session.edit_text("r", "10").unwrap();
    session.generate().unwrap();

    // 5 V / 10 Ω = 500 mA
    let led = session.view().led.unwrap();
    assert_eq!(led.band, LedBand::Overdriven);
    assert!(led.blinking);
}

#[test]
fn edit_after_result_resets_to_placeholder() {
    let mut session = complete_ohm();
    session.generate().unwrap();

    session.edit_slider("v", 6.0).unwrap();
    assert_eq!(session.display(), "0.00");
    assert!(session.result().is_none());
    assert_eq!(session.view().led.unwrap().band, LedBand::Off);

    session.generate().unwrap();
    assert_eq!(session.display(), "0.36");

    session.edit_text("r", "100").unwrap();
    assert_eq!(session.display(), "0.00");
}

#[test]
fn zero_voltage_keeps_placeholder() {
    let mut session = complete_ohm();
    session.edit_text("v", "0").unwrap();

    let err = session.generate().unwrap_err();
    assert!(matches!(err, NotReady::NonPositive { .. }));
    assert_eq!(session.display(), "0.00");
}

#[test]
fn rejected_drop_changes_nothing() {
    let mut session = LabSession::from_lab(&ohm_lab()).unwrap();
    let before = session.view();

    assert!(!session.drop_transfer("led", "resistor", "palette-resistor"));
    assert!(!session.drop_transfer("led", "capacitor", "palette-cap"));
    assert!(!session.drop_transfer("nowhere", "led", "palette-led"));
    assert!(!session.drop_transfer("battery", "battery", "palette-battery"));

    assert_eq!(session.view(), before);
}

#[test]
fn placement_resets_a_shown_result() {
    let mut session = LabSession::from_lab(&mesh_lab()).unwrap();
    session.drop_payload("v2", &DragPayload::new(ComponentKind::Battery, "palette-battery"));
    assert!(matches!(
        session.generate(),
        Err(NotReady::Incomplete { .. })
    ));

    session.drop_payload("r2", &DragPayload::new(ComponentKind::Resistor, "palette-resistor"));
    assert!(session.is_complete());
    assert_eq!(session.generate().unwrap().display, "3.6364");

    // A second resistor has nowhere to go; the result stays.
    assert!(!session.drop_payload("r2", &DragPayload::new(ComponentKind::Resistor, "palette-resistor")));
    assert_eq!(session.display(), "3.6364");
}

#[test]
fn mesh_labels_appear_after_placement() {
    let mut session = LabSession::from_lab(&mesh_lab()).unwrap();
    let label_of = |s: &LabSession, id: &str| {
        s.view()
            .slots
            .into_iter()
            .find(|slot| slot.id == id)
            .map(|slot| (slot.label_visible, slot.status_text))
            .unwrap()
    };

    assert_eq!(label_of(&session, "v2"), (false, "❌ Not yet"));
    session.drop_transfer("v2", "battery", "palette-battery");
    assert_eq!(label_of(&session, "v2"), (true, "✓ Placed"));
    assert_eq!(session.display(), "0.000");
}

#[test]
fn unknown_parameter_edit_is_an_error() {
    let mut session = complete_ohm();
    assert!(session.edit_text("v9", "1").is_err());
}
