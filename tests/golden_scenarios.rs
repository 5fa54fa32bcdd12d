use portfolio_core::filter::FilterEngine;
use portfolio_core::render::MemorySurface;
use portfolio_core::types::ProjectId;

fn ids(raw: &[u32]) -> Vec<ProjectId> {
    raw.iter().copied().map(ProjectId::new).collect()
}

#[test]
fn golden_vision_filter() {
    let mut engine = FilterEngine::default();
    let mut surface = MemorySurface::new();
    engine.load_catalog(Some(&mut surface));

    let report = engine.set_filter("vision", &mut surface);

    assert_eq!(report.visible, ids(&[1, 2, 3, 4]));
    assert_eq!(report.hidden, ids(&[5, 6]));

    let titles: Vec<&str> = surface.visible_cards().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Project M-AI-D",
            "THRILS XR Training",
            "Smart OR System",
            "Agricultural Drone Vision",
        ]
    );
}

#[test]
fn golden_all_restores_everything() {
    let mut engine = FilterEngine::default();
    let mut surface = MemorySurface::new();
    engine.load_catalog(Some(&mut surface));

    for prior in ["vision", "electronics", "nonexistent"] {
        engine.set_filter(prior, &mut surface);
        let report = engine.set_filter("all", &mut surface);
        assert_eq!(report.visible, ids(&[1, 2, 3, 4, 5, 6]), "after {prior}");
        assert!(report.hidden.is_empty());
    }
}

#[test]
fn golden_per_category_membership() {
    let mut engine = FilterEngine::default();
    let mut surface = MemorySurface::new();
    engine.load_catalog(Some(&mut surface));

    let cases: [(&str, &[u32]); 4] = [
        ("ai", &[1, 4, 5]),
        ("robotics", &[2, 5]),
        ("electronics", &[3, 6]),
        ("vision", &[1, 2, 3, 4]),
    ];

    for (category, expected) in cases {
        let report = engine.set_filter(category, &mut surface);
        assert_eq!(report.visible, ids(expected), "category {category}");
    }
}
