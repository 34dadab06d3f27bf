mod common;

use common::{compute_request, notices, triangle_editor};
use graphpad::animate::Timeline;
use graphpad::model::{Effect, Mode, NoticeKind};
use graphpad::session::{Algorithm, EulerKind, Outcome};
use serde_json::json;

#[test]
fn endpoints_group_mst_and_euler_families() {
    assert_eq!(Algorithm::Prim.endpoint(), "/api/mst");
    assert_eq!(Algorithm::Kruskal.endpoint(), "/api/mst");
    assert_eq!(Algorithm::Fleury.endpoint(), "/api/euler");
    assert_eq!(Algorithm::Hierholzer.endpoint(), "/api/euler");
    assert_eq!(Algorithm::MaxFlow.endpoint(), "/api/max_flow");
    assert_eq!(Algorithm::Bipartite.endpoint(), "/api/bipartite");
}

#[test]
fn payload_carries_graph_and_both_endpoint_aliases() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Dijkstra);
    ed.pointer_down(0.0, 0.0);
    let effects = ed.pointer_down(100.0, 0.0);
    let req = compute_request(&effects).unwrap().clone();

    assert_eq!(req.body["type"], "dijkstra");
    assert_eq!(req.body["graph"]["directed"], false);
    assert_eq!(req.body["graph"]["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(req.body["graph"]["edges"].as_array().unwrap().len(), 2);
    assert_eq!(req.body["graph"]["edges"][0]["isDirected"], false);
    assert_eq!(req.body["startId"], 0);
    assert_eq!(req.body["sourceId"], 0);
    assert_eq!(req.body["endId"], 1);
    assert_eq!(req.body["sinkId"], 1);
}

#[test]
fn start_only_payload_omits_target_fields() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(100.0, 0.0);
    let req = compute_request(&effects).unwrap().clone();

    assert_eq!(req.body["startId"], 1);
    assert!(req.body.get("endId").is_none());
    assert!(req.body.get("sinkId").is_none());
}

#[test]
fn traversal_response_starts_the_edge_reveal() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(
        session,
        json!({
            "status": "success",
            "path": [0, 1, 2],
            "visited_edges": [{"u": 0, "v": 1}, {"u": 1, "v": 2}]
        }),
    );
    assert!(matches!(
        ed.session().result(),
        Some(Outcome::Traversal { order, .. }) if order == &[0, 1, 2]
    ));
    assert!(ed.animation().is_active());
    assert!(matches!(
        ed.animation().timeline(),
        Some(Timeline::Edges(visits)) if visits.len() == 2
    ));
    assert_eq!(notices(&effects)[0].text, "BFS Order: 0 \u{2192} 1 \u{2192} 2");
}

#[test]
fn path_response_starts_a_two_segment_path_animation() {
    // A start-vertex algorithm whose reply carries a plain vertex path.
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Fleury);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    ed.apply_response(
        session,
        json!({"status": "success", "path": [0, 1, 2], "euler_type": "Path"}),
    );
    let timeline = ed.animation().timeline().unwrap();
    assert_eq!(timeline.segment_count(), 2);
    assert!(ed.animation().is_active());

    while ed.frame_tick() {}
    assert!(!ed.animation().is_active());
}

#[test]
fn dijkstra_summary_joins_labels_with_distance() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Dijkstra);
    ed.pointer_down(0.0, 0.0);
    let effects = ed.pointer_down(100.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(
        session,
        json!({"status": "success", "path": [0, 1], "distance": 4}),
    );
    let n = notices(&effects);
    assert_eq!(n[0].text, "Dijkstra: 0 \u{2192} 1 (Dist: 4)");
    assert_eq!(n[0].kind, NoticeKind::Success);
}

#[test]
fn mst_response_overlays_without_animating() {
    let mut ed = triangle_editor();
    let effects = ed.select_algorithm(Algorithm::Kruskal);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(
        session,
        json!({"status": "success", "mst_edges": [{"u": 0, "v": 1}, {"u": 1, "v": 2}]}),
    );
    assert!(matches!(
        ed.session().result(),
        Some(Outcome::Mst { edges }) if edges.len() == 2
    ));
    assert!(!ed.animation().is_active());
    assert!(ed.animation().timeline().is_none());
    assert_eq!(notices(&effects)[0].text, "Kruskal MST: Found 2 edges.");
}

#[test]
fn max_flow_response_decodes_flow_edges() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::MaxFlow);
    ed.pointer_down(0.0, 0.0);
    let effects = ed.pointer_down(50.0, 100.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(
        session,
        json!({
            "status": "success",
            "max_flow": 3,
            "flow_edges": [
                {"u": 0, "v": 1, "flow": 3, "capacity": 5},
                {"u": 1, "v": 2, "flow": 0, "capacity": 2}
            ]
        }),
    );
    match ed.session().result() {
        Some(Outcome::MaxFlow { total, edges }) => {
            assert_eq!(*total, 3);
            assert_eq!(edges.len(), 2);
            assert_eq!(edges[0].flow, 3);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    let n = notices(&effects);
    assert_eq!(n[0].text, "Max Flow: 3");
    assert_eq!(n[0].kind, NoticeKind::Result);
}

#[test]
fn bipartite_response_parses_string_keyed_classes() {
    let mut ed = triangle_editor();
    let effects = ed.select_algorithm(Algorithm::Bipartite);
    let session = compute_request(&effects).unwrap().session;

    ed.apply_response(
        session,
        json!({
            "status": "success",
            "is_bipartite": true,
            "colors": {"0": 0, "1": 1, "2": 0}
        }),
    );
    match ed.session().result() {
        Some(Outcome::Bipartite { bipartite, classes }) => {
            assert!(bipartite);
            assert_eq!(classes.get(&1), Some(&1));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn euler_circuit_kind_is_tagged() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Hierholzer);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(
        session,
        json!({"status": "success", "path": [0, 1, 2, 0], "euler_type": "Circuit"}),
    );
    assert!(matches!(
        ed.session().result(),
        Some(Outcome::Euler { kind: EulerKind::Circuit, .. })
    ));
    assert!(notices(&effects)[0].text.starts_with("Euler Circuit:"));
}

#[test]
fn error_response_notifies_and_leaves_graph_untouched() {
    let mut ed = triangle_editor();
    let snapshot = ed.store().snapshot();
    ed.select_algorithm(Algorithm::Dijkstra);
    ed.pointer_down(0.0, 0.0);
    let effects = ed.pointer_down(100.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(
        session,
        json!({"status": "error", "message": "No path found between these nodes."}),
    );
    let n = notices(&effects);
    assert_eq!(n[0].kind, NoticeKind::Error);
    assert_eq!(n[0].text, "No path found between these nodes.");
    assert!(ed.session().result().is_none());
    assert_eq!(ed.store().snapshot(), snapshot);
}

#[test]
fn network_failure_degrades_to_a_notification() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_failure(session);
    assert_eq!(notices(&effects)[0].text, "Server Error.");
    assert!(!ed.session().is_pending());
}

#[test]
fn stale_response_after_mode_switch_is_discarded() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    ed.set_mode(Mode::Move);
    let effects = ed.apply_response(
        session,
        json!({"status": "success", "path": [0], "visited_edges": []}),
    );
    assert!(effects.is_empty());
    assert!(ed.session().result().is_none());
}

#[test]
fn superseded_session_id_is_discarded() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let first = compute_request(&effects).unwrap().session;

    // Cancel and rearm: the second request supersedes the first.
    ed.set_mode(Mode::Move);
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(100.0, 0.0);
    let second = compute_request(&effects).unwrap().session;
    assert_ne!(first, second);

    let late = ed.apply_response(
        first,
        json!({"status": "success", "path": [0], "visited_edges": []}),
    );
    assert!(late.is_empty());

    let applied = ed.apply_response(
        second,
        json!({"status": "success", "path": [1], "visited_edges": []}),
    );
    assert!(!applied.is_empty());
    assert!(ed.session().result().is_some());
}

#[test]
fn a_response_is_consumed_exactly_once() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let body = json!({"status": "success", "path": [0], "visited_edges": []});
    assert!(!ed.apply_response(session, body.clone()).is_empty());
    assert!(ed.apply_response(session, body).is_empty());
}

#[test]
fn pending_request_blocks_new_algorithm_triggers() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    ed.pointer_down(0.0, 0.0);
    assert!(ed.session().is_pending());

    // Neither a new selection nor another vertex click may fire.
    let effects = ed.select_algorithm(Algorithm::Dfs);
    assert!(compute_request(&effects).is_none());
    let effects = ed.pointer_down(100.0, 0.0);
    assert!(effects.is_empty());
}

#[test]
fn clicking_a_vertex_with_a_displayed_result_restarts_input() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;
    ed.apply_response(
        session,
        json!({"status": "success", "path": [0, 1], "visited_edges": [{"u": 0, "v": 1}]}),
    );
    assert!(ed.session().result().is_some());

    // A fresh click clears the old result and fires a new request.
    let effects = ed.pointer_down(100.0, 0.0);
    let req = compute_request(&effects).expect("new compute request");
    assert_eq!(ed.session().source(), Some(1));
    assert_eq!(req.endpoint, "/api/bfs");
}

#[test]
fn structural_edit_invalidates_result_and_animation() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Bfs);
    let effects = ed.pointer_down(0.0, 0.0);
    let session = compute_request(&effects).unwrap().session;
    ed.apply_response(
        session,
        json!({"status": "success", "path": [0, 1], "visited_edges": [{"u": 0, "v": 1}]}),
    );
    assert!(ed.animation().is_active());

    ed.set_mode(Mode::Remove);
    ed.pointer_down(0.0, 0.0);
    assert!(ed.session().result().is_none());
    assert!(!ed.animation().is_active());
    assert!(ed.animation().timeline().is_none());
}

#[test]
fn convert_request_and_verbatim_text_display() {
    let mut ed = triangle_editor();
    let effects = ed.request_representation(graphpad::session::ReprMode::Matrix);
    let req = compute_request(&effects).unwrap().clone();
    assert_eq!(req.endpoint, "/api/convert");
    assert_eq!(req.body["mode"], "matrix");
    assert!(req.body["graph"]["nodes"].is_array());

    let effects = ed.apply_response(
        req.session,
        json!({"status": "success", "text": "0 1 0\n1 0 1\n0 1 0"}),
    );
    assert!(effects.contains(&Effect::ShowText("0 1 0\n1 0 1\n0 1 0".into())));
}

#[test]
fn malformed_success_payload_is_reported_not_panicked() {
    let mut ed = triangle_editor();
    ed.select_algorithm(Algorithm::Dijkstra);
    ed.pointer_down(0.0, 0.0);
    let effects = ed.pointer_down(100.0, 0.0);
    let session = compute_request(&effects).unwrap().session;

    let effects = ed.apply_response(session, json!({"status": "success", "bogus": true}));
    assert_eq!(notices(&effects)[0].kind, NoticeKind::Error);
    assert!(ed.session().result().is_none());
}
