use serde_json::json;
use stationmap::{Editor, EditorError, Geometry, LatLng};

fn seeded() -> Editor {
    let mut ed = Editor::new();
    ed.start_drawing(LatLng::new(20.0, 78.0), false);
    ed
}

#[test]
fn geojson_round_trip_preserves_ring_and_order() {
    let mut ed = seeded();
    ed.insert_vertex(0).unwrap();
    ed.insert_vertex(2).unwrap();
    let ring = ed.ring().unwrap().to_vec();

    let geom = ed.to_geometry().unwrap();
    let mut other = Editor::new();
    other.load_geometry(&geom).unwrap();
    assert_eq!(other.ring().unwrap(), &ring[..]);
    assert_eq!(other.handles().vertices.len(), ring.len());
    assert_eq!(other.handles().midpoints.len(), ring.len());
}

#[test]
fn serialized_geometry_is_longitude_first() {
    let ed = seeded();
    let v = ed.to_geojson_value().unwrap();
    assert_eq!(v["type"], "Polygon");
    let first = &v["coordinates"][0][0];
    // Vertex 0 sits SEED_RADIUS_DEG north of the center.
    assert_eq!(first[0].as_f64(), Some(78.0));
    assert_eq!(
        first[1].as_f64(),
        Some(20.0 + stationmap::geometry::SEED_RADIUS_DEG)
    );
    // The closing point is not repeated.
    assert_eq!(v["coordinates"][0].as_array().unwrap().len(), 3);
}

#[test]
fn load_multipolygon_takes_first_outer_ring() {
    let geom = Geometry::MultiPolygon {
        coordinates: vec![
            vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
            vec![vec![[9.0, 9.0], [9.5, 9.0], [9.5, 9.5]]],
        ],
    };
    let mut ed = Editor::new();
    ed.load_geometry(&geom).unwrap();
    let ring = ed.ring().unwrap();
    assert_eq!(ring.len(), 3);
    assert_eq!(ring[0], LatLng::new(0.0, 0.0));
    assert_eq!(ring[1], LatLng::new(0.0, 1.0));
}

#[test]
fn load_drops_explicit_closing_point() {
    let geom = Geometry::Polygon {
        coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
    };
    let mut ed = Editor::new();
    ed.load_geometry(&geom).unwrap();
    assert_eq!(ed.vertex_count(), 3);
}

#[test]
fn load_accepts_degenerate_short_ring() {
    // Minimum vertex count is enforced on deletion, never on load.
    let geom = Geometry::Polygon {
        coordinates: vec![vec![[0.0, 0.0], [1.0, 1.0]]],
    };
    let mut ed = Editor::new();
    ed.load_geometry(&geom).unwrap();
    assert_eq!(ed.vertex_count(), 2);
    ed.select_vertex(0).unwrap();
    assert_eq!(ed.delete_selected_vertex(), Err(EditorError::MinVertices));
}

#[test]
fn load_rejects_empty_geometry() {
    let mut ed = Editor::new();
    let ver = ed.geom_version();

    let no_rings = Geometry::Polygon {
        coordinates: vec![],
    };
    assert!(matches!(
        ed.load_geometry(&no_rings),
        Err(EditorError::MalformedGeometry(_))
    ));

    let empty_ring = Geometry::Polygon {
        coordinates: vec![vec![]],
    };
    assert!(matches!(
        ed.load_geometry(&empty_ring),
        Err(EditorError::MalformedGeometry(_))
    ));

    assert!(!ed.has_polygon());
    assert_eq!(ed.geom_version(), ver);
}

#[test]
fn load_rejects_non_polygon_value() {
    let mut ed = Editor::new();
    let point = json!({ "type": "Point", "coordinates": [78.0, 20.0] });
    assert!(matches!(
        ed.load_geojson_value(point),
        Err(EditorError::MalformedGeometry(_))
    ));
    assert!(!ed.has_polygon());
}

#[test]
fn load_rejects_non_finite_coordinates() {
    let geom = Geometry::Polygon {
        coordinates: vec![vec![[0.0, 0.0], [f64::NAN, 0.0], [1.0, 1.0]]],
    };
    let mut ed = Editor::new();
    assert!(matches!(
        ed.load_geometry(&geom),
        Err(EditorError::MalformedGeometry(_))
    ));
}

#[test]
fn load_replaces_current_polygon_and_clears_selection() {
    let mut ed = seeded();
    ed.select_vertex(1).unwrap();
    let geom = Geometry::Polygon {
        coordinates: vec![vec![[10.0, 50.0], [11.0, 50.0], [11.0, 51.0], [10.0, 51.0]]],
    };
    ed.load_geometry(&geom).unwrap();
    assert_eq!(ed.vertex_count(), 4);
    assert_eq!(ed.selected_vertex(), None);
    assert_eq!(ed.ring().unwrap()[0], LatLng::new(50.0, 10.0));
}
