//! What a frontend draws, computed purely from session state.

use cl_core::{ComponentKind, Variant, as_milliamps};
use cl_solver::Reading;
use serde::Serialize;

use crate::session::LabSession;

/// Two-state circuit status badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusIndicator {
    pub ready: bool,
    pub text: &'static str,
    pub dot_color: &'static str,
    pub text_color: &'static str,
    pub background: &'static str,
    /// The dot pulses while the circuit is incomplete.
    pub pulsing: bool,
}

impl StatusIndicator {
    pub fn for_completeness(ready: bool) -> Self {
        if ready {
            Self {
                ready,
                text: "Circuit ready!",
                dot_color: "#4CAF50",
                text_color: "#2E7D32",
                background: "#E8F5E9",
                pulsing: false,
            }
        } else {
            Self {
                ready,
                text: "Circuit incomplete",
                dot_color: "#F44336",
                text_color: "#D32F2F",
                background: "#FFEBEE",
                pulsing: true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub id: String,
    pub label: Option<String>,
    pub expects: ComponentKind,
    pub placed: bool,
    /// Labels of droppable slots appear only once filled.
    pub label_visible: bool,
    pub status_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamView {
    pub id: String,
    pub label: String,
    pub unit: String,
    pub text: String,
    pub slider: f64,
    pub min: f64,
    pub max: f64,
}

/// Brightness band of the LED, from the loop current in milliamperes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LedBand {
    /// No current (or no result).
    Off,
    /// (0, 50) mA
    Dim,
    /// [50, 150) mA
    Warm,
    /// [150, 200] mA
    Bright,
    /// Above 200 mA; the LED blinks.
    Overdriven,
}

impl LedBand {
    pub fn from_milliamps(i_ma: f64) -> Self {
        if i_ma > 200.0 {
            Self::Overdriven
        } else if i_ma >= 150.0 {
            Self::Bright
        } else if i_ma >= 50.0 {
            Self::Warm
        } else if i_ma > 0.0 {
            Self::Dim
        } else {
            Self::Off
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Self::Off => "#FFFFFF",
            Self::Dim => "#FFFC5F",
            Self::Warm => "#FC9653",
            Self::Bright => "#FF3C01",
            Self::Overdriven => "#000000",
        }
    }

    pub fn is_blinking(self) -> bool {
        self == Self::Overdriven
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedView {
    pub band: LedBand,
    pub fill: &'static str,
    pub blinking: bool,
}

impl From<LedBand> for LedView {
    fn from(band: LedBand) -> Self {
        Self {
            band,
            fill: band.fill(),
            blinking: band.is_blinking(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabView {
    pub title: String,
    pub variant: Variant,
    pub status: StatusIndicator,
    pub slots: Vec<SlotView>,
    pub parameters: Vec<ParamView>,
    pub display: String,
    /// Present only on the Ohm lab once an LED sits on the board.
    pub led: Option<LedView>,
}

pub(crate) fn render(session: &LabSession) -> LabView {
    let tracker = session.tracker();

    let slots = tracker
        .layout()
        .slots()
        .iter()
        .map(|spec| {
            let placed = tracker.is_placed(spec.id.as_str());
            SlotView {
                id: spec.id.to_string(),
                label: spec.label.clone(),
                expects: spec.expects,
                placed,
                label_visible: spec.prefilled || placed,
                status_text: if placed { "✓ Placed" } else { "❌ Not yet" },
            }
        })
        .collect::<Vec<_>>();

    let parameters = session
        .params()
        .iter()
        .map(|p| ParamView {
            id: p.id().to_string(),
            label: p.label.clone(),
            unit: p.unit.clone(),
            text: p.text().to_string(),
            slider: p.slider(),
            min: p.bounds().min(),
            max: p.bounds().max(),
        })
        .collect();

    let led_on_board = slots
        .iter()
        .any(|s| s.expects == ComponentKind::Led && s.placed);
    let led = (session.variant() == Variant::OhmPower && led_on_board).then(|| {
        let band = match session.result().map(|e| &e.reading) {
            Some(Reading::Ohm(reading)) => LedBand::from_milliamps(as_milliamps(reading.current)),
            _ => LedBand::Off,
        };
        LedView::from(band)
    });

    LabView {
        title: session.name().to_string(),
        variant: session.variant(),
        status: StatusIndicator::for_completeness(tracker.is_complete()),
        slots,
        parameters,
        display: session.display().to_string(),
        led,
    }
}
