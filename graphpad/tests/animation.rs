use graphpad::animate::{Animation, EdgeVisit, Timeline, ANIM_SPEED};

#[test]
fn single_segment_path_terminates_after_67_ticks() {
    // speed 0.015: cumulative progress crosses 1.0 on tick ceil(1/0.015).
    let mut anim = Animation::new();
    anim.start(Timeline::Path(vec![0, 1]));
    assert!(anim.is_active());

    let mut ticks = 0;
    while anim.tick() {
        ticks += 1;
        assert!(ticks < 1000, "animation never terminated");
    }
    ticks += 1;
    assert_eq!(ticks, (1.0_f32 / ANIM_SPEED).ceil() as usize);
    assert!(anim.segment() >= 1);
    assert!(!anim.is_active());
}

#[test]
fn path_segment_count_is_vertices_minus_one() {
    assert_eq!(Timeline::Path(vec![0, 1, 2]).segment_count(), 2);
    assert_eq!(Timeline::Path(vec![7]).segment_count(), 0);
    assert_eq!(
        Timeline::Edges(vec![
            EdgeVisit { u: 0, v: 1 },
            EdgeVisit { u: 1, v: 2 },
            EdgeVisit { u: 2, v: 3 },
        ])
        .segment_count(),
        3
    );
}

#[test]
fn edges_timeline_advances_one_segment_per_unit_of_progress() {
    let mut anim = Animation::new();
    anim.start(Timeline::Edges(vec![
        EdgeVisit { u: 0, v: 1 },
        EdgeVisit { u: 1, v: 2 },
    ]));

    for _ in 0..67 {
        anim.tick();
    }
    assert_eq!(anim.segment(), 1);
    assert!(anim.is_active());

    for _ in 0..67 {
        anim.tick();
    }
    assert_eq!(anim.segment(), 2);
    assert!(!anim.is_active());
}

#[test]
fn starting_a_new_timeline_supersedes_the_old_one() {
    let mut anim = Animation::new();
    anim.start(Timeline::Path(vec![0, 1, 2]));
    for _ in 0..100 {
        anim.tick();
    }
    assert_eq!(anim.segment(), 1);

    anim.start(Timeline::Edges(vec![EdgeVisit { u: 5, v: 6 }]));
    assert_eq!(anim.segment(), 0);
    assert_eq!(anim.progress(), 0.0);
    assert!(anim.is_active());
    assert!(matches!(anim.timeline(), Some(Timeline::Edges(_))));
}

#[test]
fn stop_freezes_but_keeps_the_timeline_for_the_static_frame() {
    let mut anim = Animation::new();
    anim.start(Timeline::Path(vec![0, 1]));
    anim.stop();
    assert!(!anim.is_active());
    assert!(anim.timeline().is_some());
    assert!(!anim.tick());
}

#[test]
fn clear_drops_the_timeline_entirely() {
    let mut anim = Animation::new();
    anim.start(Timeline::Path(vec![0, 1]));
    anim.clear();
    assert!(anim.timeline().is_none());
    assert!(!anim.is_active());
    assert_eq!(anim.segment(), 0);
}

#[test]
fn zero_segment_timeline_never_activates() {
    let mut anim = Animation::new();
    anim.start(Timeline::Path(vec![9]));
    assert!(!anim.is_active());
    assert!(!anim.tick());
    // The timeline is still there for a static render.
    assert!(anim.timeline().is_some());
}
