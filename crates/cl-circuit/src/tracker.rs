//! Placement tracker: the circuit state and its completeness predicate.

use std::collections::BTreeMap;

use cl_core::{ComponentKind, SlotId};
use tracing::debug;

use crate::layout::{CircuitLayout, SlotSpec};

/// Source element recorded for slots that are wired at load time.
pub const FIXED_SOURCE: &str = "fixed";

/// What currently sits in a filled slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub component: ComponentKind,
    pub source_id: String,
}

/// Records which slots hold their component.
///
/// A slot is placed iff it holds an occupant of its expected kind. Placement is
/// a single check-and-set and a placed slot never becomes empty again.
#[derive(Debug, Clone)]
pub struct PlacementTracker {
    layout: CircuitLayout,
    occupants: BTreeMap<SlotId, Occupant>,
}

impl PlacementTracker {
    /// Start tracking a board; pre-filled slots are placed immediately.
    pub fn new(layout: CircuitLayout) -> Self {
        let occupants = layout
            .slots()
            .iter()
            .filter(|s| s.prefilled)
            .map(|s| {
                (
                    s.id.clone(),
                    Occupant {
                        component: s.expects,
                        source_id: FIXED_SOURCE.to_string(),
                    },
                )
            })
            .collect();
        Self { layout, occupants }
    }

    pub fn layout(&self) -> &CircuitLayout {
        &self.layout
    }

    /// Place `component` into `slot`. Returns `false` and changes nothing if
    /// the slot is unknown, expects another kind, or is already filled.
    pub fn try_place(&mut self, slot: &str, component: ComponentKind) -> bool {
        self.try_place_from(slot, component, component.as_str())
    }

    /// Same as [`Self::try_place`], recording which palette element was used.
    pub fn try_place_from(&mut self, slot: &str, component: ComponentKind, source_id: &str) -> bool {
        let Some(spec) = self.layout.slot(slot) else {
            debug!(slot, %component, "drop on unknown slot ignored");
            return false;
        };
        if !spec.accepts(component) {
            debug!(slot, %component, expects = %spec.expects, "wrong component for slot");
            return false;
        }
        if self.occupants.contains_key(slot) {
            debug!(slot, %component, "slot already filled");
            return false;
        }

        let id = spec.id.clone();
        self.occupants.insert(
            id,
            Occupant {
                component,
                source_id: source_id.to_string(),
            },
        );
        true
    }

    pub fn is_placed(&self, slot: &str) -> bool {
        self.occupants.contains_key(slot)
    }

    pub fn occupant(&self, slot: &str) -> Option<&Occupant> {
        self.occupants.get(slot)
    }

    /// True iff every required slot is placed.
    pub fn is_complete(&self) -> bool {
        self.layout
            .required_slots()
            .all(|s| self.occupants.contains_key(&s.id))
    }

    /// Required slots that are still empty, in layout order.
    pub fn missing_slots(&self) -> Vec<&SlotSpec> {
        self.layout
            .required_slots()
            .filter(|s| !self.occupants.contains_key(&s.id))
            .collect()
    }

    /// The circuit state as a slot → placed map.
    pub fn flags(&self) -> BTreeMap<SlotId, bool> {
        self.layout
            .slots()
            .iter()
            .map(|s| (s.id.clone(), self.occupants.contains_key(&s.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutBuilder;

    fn ohm_board() -> PlacementTracker {
        let mut b = LayoutBuilder::new();
        b.prefilled_slot("battery", ComponentKind::Battery).unwrap();
        b.slot("resistor", ComponentKind::Resistor).unwrap();
        b.slot("led", ComponentKind::Led).unwrap();
        PlacementTracker::new(b.build().unwrap())
    }

    #[test]
    fn prefilled_slots_start_placed() {
        let tracker = ohm_board();
        assert!(tracker.is_placed("battery"));
        assert_eq!(tracker.occupant("battery").unwrap().source_id, FIXED_SOURCE);
        assert!(!tracker.is_placed("led"));
    }

    #[test]
    fn wrong_kind_is_rejected_without_change() {
        let mut tracker = ohm_board();
        assert!(!tracker.try_place("led", ComponentKind::Resistor));
        assert!(!tracker.is_placed("led"));
    }

    #[test]
    fn second_placement_fails() {
        let mut tracker = ohm_board();
        assert!(tracker.try_place_from("led", ComponentKind::Led, "palette-led"));
        assert!(!tracker.try_place_from("led", ComponentKind::Led, "palette-led-2"));
        assert_eq!(tracker.occupant("led").unwrap().source_id, "palette-led");
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut tracker = ohm_board();
        assert!(!tracker.try_place("slot-9", ComponentKind::Led));
    }

    #[test]
    fn prefilled_slot_cannot_be_replaced() {
        let mut tracker = ohm_board();
        assert!(!tracker.try_place("battery", ComponentKind::Battery));
    }

    #[test]
    fn completeness_both_directions() {
        let mut tracker = ohm_board();
        assert!(!tracker.is_complete());
        assert_eq!(tracker.missing_slots().len(), 2);

        tracker.try_place("resistor", ComponentKind::Resistor);
        assert!(!tracker.is_complete());
        assert_eq!(tracker.missing_slots()[0].id.as_str(), "led");

        tracker.try_place("led", ComponentKind::Led);
        assert!(tracker.is_complete());
        assert!(tracker.missing_slots().is_empty());
        assert!(tracker.flags().values().all(|placed| *placed));
    }
}
