#![allow(clippy::unwrap_used)]

use floorplan_kernel::interaction::{EndpointSnapper, HitTest, OpeningDrag, WallDrawTool};
use floorplan_kernel::math::Point2;
use floorplan_kernel::model::demo::demo_floorplan;
use floorplan_kernel::operations::LocateOnWall;
use floorplan_kernel::{EngineParams, Element, Floorplan, OpeningKind, Scene, WallElement};
use tracing_subscriber::EnvFilter;

// ── Helpers ──────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn wall(id: &str, a: (f64, f64), b: (f64, f64)) -> WallElement {
    WallElement::new(id, Point2::new(a.0, a.1), Point2::new(b.0, b.1), 10.0, 200.0)
}

// ── Full rebuild ─────────────────────────────────────────────────────────

#[test]
fn demo_rebuild_produces_consistent_geometry() {
    init_tracing();
    let plan = demo_floorplan();
    let scene = Scene::build(plan.elements(), &EngineParams::default());

    assert_eq!(scene.graph.node_count(), 7);
    assert_eq!(scene.graph.edge_count(), 6);
    assert_eq!(scene.corners.len(), 7);

    let mesh = &scene.wall_mesh;
    assert_eq!(mesh.triangle_count(), 72);
    assert_eq!(mesh.normals.len(), mesh.vertex_count());
    let n = u32::try_from(mesh.vertex_count()).unwrap();
    assert!(mesh.indices.iter().flatten().all(|&i| i < n));
    assert!(mesh.vertex_count() <= 6 * 8);

    let max_height = mesh.vertices.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    assert!((max_height - 200.0).abs() < 1e-9);
}

#[test]
fn rebuilding_the_same_elements_is_identical() {
    let plan = demo_floorplan();
    let params = EngineParams::default();
    let a = Scene::build(plan.elements(), &params);
    let b = Scene::build(plan.elements(), &params);

    assert_eq!(a.corners, b.corners);
    assert_eq!(a.wall_mesh, b.wall_mesh);
    assert_eq!(a.opening_mesh, b.opening_mesh);
    assert_eq!(a.opening_footprints, b.opening_footprints);
}

#[test]
fn reordering_elements_does_not_change_wall_mesh() {
    let plan = demo_floorplan();
    let mut reversed: Vec<Element> = plan.elements().to_vec();
    reversed.reverse();
    let params = EngineParams::default();
    assert_eq!(
        Scene::build(plan.elements(), &params).wall_mesh,
        Scene::build(&reversed, &params).wall_mesh
    );
}

// ── Save / load ──────────────────────────────────────────────────────────

#[test]
fn saved_plan_reloads_to_the_same_scene() {
    let plan = demo_floorplan();
    let json = plan.to_json().unwrap();

    let mut loaded = Floorplan::new();
    loaded.load_json(&json).unwrap();
    assert_eq!(loaded.elements(), plan.elements());

    let params = EngineParams::default();
    assert_eq!(
        Scene::build(loaded.elements(), &params).wall_mesh,
        Scene::build(plan.elements(), &params).wall_mesh
    );
}

#[test]
fn rejected_load_leaves_plan_untouched() {
    init_tracing();
    let mut plan = demo_floorplan();
    let before = plan.clone();
    assert!(plan.load_json("not json").is_err());
    assert!(plan.load_json(r#"{ "version": "1.0" }"#).is_err());
    assert_eq!(plan, before);
}

// ── Openings ─────────────────────────────────────────────────────────────

#[test]
fn orphaned_door_renders_as_absent() {
    let mut plan = demo_floorplan();
    plan.delete_element("wall_5");
    let scene = Scene::build(plan.elements(), &EngineParams::default());

    assert_eq!(scene.orphaned_openings, vec!["door_2".to_owned()]);
    assert!(scene.opening_solids.iter().all(|s| s.opening_id != "door_2"));
    assert_eq!(scene.opening_mesh.triangle_count(), 3 * 12);
}

#[test]
fn pointer_is_placed_on_the_closest_of_three_walls() {
    let mut plan = Floorplan::new();
    plan.add_element(wall("a", (0.0, 0.0), (200.0, 0.0)));
    plan.add_element(wall("b", (0.0, 60.0), (200.0, 60.0)));
    plan.add_element(wall("c", (0.0, 140.0), (200.0, 140.0)));

    let params = EngineParams::default();
    let hit = LocateOnWall::new(Point2::new(50.0, 70.0), params.placement_max_distance)
        .execute(plan.elements())
        .unwrap();
    assert_eq!(hit.wall_id, "b");
    assert!((hit.t - 0.25).abs() < 1e-12);

    let door = OpeningDrag::new(params)
        .new_opening(OpeningKind::Door, "d", Point2::new(50.0, 70.0), plan.elements())
        .unwrap();
    plan.add_element(door);

    let scene = Scene::build(plan.elements(), &params);
    let footprint = &scene.opening_footprints[0];
    assert_eq!(footprint.center, Point2::new(50.0, 60.0));

    let picked = HitTest::new(Point2::new(55.0, 60.0), params)
        .execute(plan.elements())
        .map(Element::id);
    assert_eq!(picked, Some("d"));
}

// ── Drawing ──────────────────────────────────────────────────────────────

#[test]
fn drawn_walls_weld_into_one_junction() {
    let params = EngineParams::default();
    let mut plan = Floorplan::new();
    let mut tool = WallDrawTool::new(&params);

    tool.begin(&Point2::new(1.0, 2.0), plan.elements());
    let first = tool.finish(&Point2::new(118.0, 3.0), plan.elements(), "w1").unwrap();
    plan.add_element(first);

    // Released near the first wall's end: lands on it exactly.
    tool.begin(&Point2::new(112.0, -6.0), plan.elements());
    let second = tool.finish(&Point2::new(121.0, 99.0), plan.elements(), "w2").unwrap();
    assert_eq!(second.start_point(), Point2::new(120.0, 0.0));
    plan.add_element(second);

    let scene = Scene::build(plan.elements(), &params);
    assert_eq!(scene.graph.node_count(), 3);
    let junction = scene.graph.node_at(&Point2::new(120.0, 0.0)).unwrap();
    assert_eq!(scene.graph.node(junction).unwrap().degree(), 2);
}

#[test]
fn dragged_endpoint_does_not_weld_to_its_own_wall() {
    let params = EngineParams::default();
    let snapper = EndpointSnapper::new(&params);
    let plan = Floorplan::with_elements(vec![wall("w", (0.0, 0.0), (10.0, 0.0)).into()]);
    let p = snapper.snap_excluding(&Point2::new(4.0, 0.0), plan.elements(), "w");
    assert_eq!(p, Point2::new(0.0, 0.0));
    let p = snapper.snap_excluding(&Point2::new(14.0, 1.0), plan.elements(), "w");
    assert_eq!(p, Point2::new(20.0, 0.0));
}
