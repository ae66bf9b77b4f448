use crate::math::Point2;

use super::document::Floorplan;
use super::element::{OpeningElement, OpeningKind, WallElement};

const THICKNESS: f64 = 10.0;
const HEIGHT: f64 = 200.0;

/// A small two-room house used for previews and tests.
///
/// Outer walls span `100..400 × 100..300`; two interior walls split off a
/// room in the upper-left. Doors and windows sit on their walls by parameter.
#[must_use]
pub fn demo_floorplan() -> Floorplan {
    let mut plan = Floorplan::new();

    let walls = [
        ("wall_1", (100.0, 100.0), (400.0, 100.0)),
        ("wall_2", (400.0, 100.0), (400.0, 300.0)),
        ("wall_3", (400.0, 300.0), (100.0, 300.0)),
        ("wall_4", (100.0, 300.0), (100.0, 100.0)),
        ("wall_5", (100.0, 200.0), (300.0, 200.0)),
        ("wall_6", (300.0, 100.0), (300.0, 200.0)),
    ];
    for (id, (sx, sy), (ex, ey)) in walls {
        plan.add_element(WallElement::new(
            id,
            Point2::new(sx, sy),
            Point2::new(ex, ey),
            THICKNESS,
            HEIGHT,
        ));
    }

    let openings = [
        ("door_1", OpeningKind::Door, "wall_1", 0.5),
        ("door_2", OpeningKind::Door, "wall_5", 0.5),
        ("window_1", OpeningKind::Window, "wall_1", 1.0 / 6.0),
        ("window_2", OpeningKind::Window, "wall_3", 1.0 / 6.0),
    ];
    for (id, kind, parent, position) in openings {
        plan.add_element(OpeningElement {
            id: id.to_owned(),
            kind,
            parent_wall_id: parent.to_owned(),
            position_on_wall: position,
            width: 80.0,
            height: HEIGHT,
        });
    }

    plan
}
