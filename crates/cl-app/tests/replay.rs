//! Replaying the walkthrough scripts shipped in `labs/scripts`.

use std::path::PathBuf;

use cl_app::{SessionAction, StepOutcome, load_script, parse_script, replay, session_for};

fn scripts_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("labs");
    path.push("scripts");
    path
}

#[test]
fn ohm_walkthrough() {
    let actions = load_script(&scripts_dir().join("ohm_walkthrough.yaml")).unwrap();
    let mut session = session_for("ohm").unwrap();
    let reports = replay(&mut session, &actions).unwrap();

    let outcomes: Vec<&StepOutcome> = reports.iter().map(|r| &r.outcome).collect();
    assert!(matches!(outcomes[0], StepOutcome::NotReady(_)));
    assert_eq!(outcomes[1], &StepOutcome::Placed);
    assert_eq!(outcomes[2], &StepOutcome::Rejected);
    assert_eq!(outcomes[3], &StepOutcome::Placed);
    assert_eq!(outcomes[4], &StepOutcome::Computed("0.25".to_string()));

    // Typing 20 into a 0..12 field clamps it to 12; 144/100 W.
    assert_eq!(reports[5].view.display, "0.00");
    let v = reports[5].view.parameters.iter().find(|p| p.id == "v").unwrap();
    assert_eq!(v.text, "12");
    assert_eq!(v.slider, 12.0);
    assert_eq!(outcomes[6], &StepOutcome::Computed("1.44".to_string()));
}

#[test]
fn mesh_walkthrough() {
    let actions = load_script(&scripts_dir().join("mesh_walkthrough.yaml")).unwrap();
    let mut session = session_for("mesh").unwrap();
    let reports = replay(&mut session, &actions).unwrap();

    assert_eq!(reports[2].outcome, StepOutcome::Computed("3.6364".to_string()));

    // Slider snaps 4.2 to 4: det = 6*7 - 16 = 26, I3 = (30 + 10) / 26
    let r3 = reports[3].view.parameters.iter().find(|p| p.id == "r3").unwrap();
    assert_eq!(r3.text, "4");
    assert_eq!(reports[4].outcome, StepOutcome::Computed("1.5385".to_string()));
}

#[test]
fn script_with_unknown_parameter_fails() {
    let actions = vec![SessionAction::Slide {
        parameter: "r9".to_string(),
        value: 1.0,
    }];
    let mut session = session_for("mesh").unwrap();
    let err = replay(&mut session, &actions).unwrap_err();
    assert!(err.to_string().contains("step 1"));
}

#[test]
fn drop_source_defaults() {
    let actions = parse_script("- action: drop\n  slot: led\n  component: led\n").unwrap();
    assert_eq!(
        actions[0],
        SessionAction::Drop {
            slot: "led".to_string(),
            component: "led".to_string(),
            source: "palette".to_string(),
        }
    );
}

#[test]
fn unknown_lab_is_reported() {
    assert!(session_for("no-such-lab.yaml").is_err());
}
