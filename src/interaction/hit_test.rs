use crate::config::EngineParams;
use crate::math::{point_near_segment, Point2};
use crate::model::{Element, OpeningElement};
use crate::operations::PlaceOpening;

/// Finds the topmost element under a pointer position.
#[derive(Debug)]
pub struct HitTest {
    point: Point2,
    params: EngineParams,
}

impl HitTest {
    /// Creates a hit test at sketch-plane `point`.
    #[must_use]
    pub fn new(point: Point2, params: EngineParams) -> Self {
        Self { point, params }
    }

    /// Walks `elements` from last (topmost) to first and returns the first hit.
    ///
    /// Walls are hit within `max(thickness / 2, min_hit_threshold)` of their
    /// centerline. Openings are hit within `width / 2 + opening_hit_padding`
    /// of their placed center; orphaned openings cannot be hit.
    #[must_use]
    pub fn execute<'e>(&self, elements: &'e [Element]) -> Option<&'e Element> {
        elements.iter().rev().find(|element| match element {
            Element::Wall(wall) => point_near_segment(
                &self.point,
                &wall.start_point(),
                &wall.end_point(),
                wall.thickness,
                self.params.min_hit_threshold,
            ),
            Element::Opening(opening) => self.hits_opening(opening, elements),
        })
    }

    fn hits_opening(&self, opening: &OpeningElement, elements: &[Element]) -> bool {
        PlaceOpening::new(opening, self.params)
            .execute(elements)
            .is_some_and(|placement| {
                (self.point - placement.center).norm()
                    <= opening.width / 2.0 + self.params.opening_hit_padding
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OpeningKind, WallElement};

    fn wall(id: &str, a: (f64, f64), b: (f64, f64), thickness: f64) -> Element {
        Element::Wall(WallElement::new(
            id,
            Point2::new(a.0, a.1),
            Point2::new(b.0, b.1),
            thickness,
            200.0,
        ))
    }

    fn door(id: &str, parent: &str) -> Element {
        Element::Opening(OpeningElement {
            id: id.into(),
            kind: OpeningKind::Door,
            parent_wall_id: parent.into(),
            position_on_wall: 0.5,
            width: 80.0,
            height: 200.0,
        })
    }

    fn hit<'e>(x: f64, y: f64, elements: &'e [Element]) -> Option<&'e str> {
        HitTest::new(Point2::new(x, y), EngineParams::default())
            .execute(elements)
            .map(Element::id)
    }

    #[test]
    fn thin_wall_uses_minimum_threshold() {
        let elements = vec![wall("w", (0.0, 0.0), (100.0, 0.0), 2.0)];
        assert_eq!(hit(50.0, 10.0, &elements), Some("w"));
        assert_eq!(hit(50.0, 10.5, &elements), None);
    }

    #[test]
    fn thick_wall_widens_hit_zone() {
        let elements = vec![wall("w", (0.0, 0.0), (100.0, 0.0), 40.0)];
        assert_eq!(hit(50.0, 19.0, &elements), Some("w"));
        assert_eq!(hit(50.0, 21.0, &elements), None);
    }

    #[test]
    fn topmost_element_wins() {
        let elements = vec![
            wall("below", (0.0, 0.0), (100.0, 0.0), 10.0),
            wall("above", (0.0, 2.0), (100.0, 2.0), 10.0),
        ];
        assert_eq!(hit(50.0, 1.0, &elements), Some("above"));
    }

    #[test]
    fn opening_on_top_of_its_wall_is_selected() {
        let elements = vec![wall("w", (0.0, 0.0), (200.0, 0.0), 10.0), door("d", "w")];
        assert_eq!(hit(100.0, 0.0, &elements), Some("d"));
        // 45 = width / 2 + padding, still inside.
        assert_eq!(hit(145.0, 0.0, &elements), Some("d"));
        assert_eq!(hit(146.0, 0.0, &elements), Some("w"));
    }

    #[test]
    fn orphaned_opening_is_not_hittable() {
        let elements = vec![door("d", "missing")];
        assert_eq!(hit(0.0, 0.0, &elements), None);
    }

    #[test]
    fn zero_length_wall_degrades_to_point_distance() {
        let elements = vec![wall("z", (10.0, 10.0), (10.0, 10.0), 10.0)];
        assert_eq!(hit(16.0, 18.0, &elements), Some("z"));
        assert_eq!(hit(30.0, 30.0, &elements), None);
    }
}
