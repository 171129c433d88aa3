//! Structural and statistical properties of generated simulations.

use cyclone_sim_core::core_types::metric_ranges;
use cyclone_sim_core::{
    Archetype, RiskLevel, SimulationEngine, FRAME_COUNT_RANGE, FRAME_INTERVAL_MINUTES,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn generate_returns_ordered_frames_for_every_count_and_archetype() {
    let mut engine = SimulationEngine::seeded(42);
    for archetype in Archetype::ALL {
        for frame_count in FRAME_COUNT_RANGE {
            let simulation = engine
                .generate(archetype.id(), frame_count)
                .expect("valid arguments generate");
            assert_eq!(simulation.frame_count, frame_count);
            assert_eq!(simulation.frames.len() as u32, frame_count);
            for (i, frame) in simulation.frames.iter().enumerate() {
                assert_eq!(
                    frame.frame_id,
                    i as u32 + 1,
                    "{archetype}: frame ids must be 1..=frame_count in order"
                );
                assert_eq!(frame.time_elapsed_minutes, i as u32 * FRAME_INTERVAL_MINUTES);
            }
        }
    }
}

#[test]
fn first_frame_lands_on_base_timestamp_and_later_frames_never_regress() {
    let mut engine = SimulationEngine::seeded(7);
    for archetype in Archetype::ALL {
        let simulation = engine.generate(archetype.id(), 6).expect("generates");
        assert_eq!(
            simulation.frames[0].timestamp, simulation.template.base_timestamp,
            "{archetype}: frame 1 must land exactly on the base timestamp"
        );
        for pair in simulation.frames.windows(2) {
            assert!(
                pair[1].timestamp >= pair[0].timestamp,
                "{archetype}: timestamps must be non-decreasing"
            );
        }
        assert_eq!(
            simulation.total_duration_minutes,
            simulation.template.duration_hours * 60
        );
    }
}

#[test]
fn every_metric_stays_in_its_declared_range_across_seeds() {
    for seed in [0, 1, 99, 12345, 987654321] {
        let mut engine = SimulationEngine::seeded(seed);
        for archetype in Archetype::ALL {
            let simulation = engine.generate(archetype.id(), 8).expect("generates");
            for frame in &simulation.frames {
                let m = &frame.metrics;
                assert!(
                    metric_ranges::COVERAGE.contains(&*m.coverage_percent),
                    "{archetype} seed {seed}: coverage {} out of range",
                    m.coverage_percent
                );
                assert!(metric_ranges::CLUSTER_AREA.contains(&*m.cluster_area_km2));
                assert!(metric_ranges::CLOUD_TOP_TEMP.contains(&*m.cloud_top_temp_c));
                assert!(metric_ranges::RISK_SCORE.contains(&m.risk_score));
                assert!(metric_ranges::CONFIDENCE.contains(&m.model_confidence));
            }
        }
    }
}

#[test]
fn risk_level_always_matches_its_score() {
    let mut engine = SimulationEngine::seeded(11);
    for archetype in Archetype::ALL {
        let simulation = engine.generate(archetype.id(), 8).expect("generates");
        for frame in &simulation.frames {
            let score = frame.metrics.risk_score;
            let expected = RiskLevel::from_score(score);
            assert_eq!(
                frame.metrics.risk_level, expected,
                "{archetype}: risk level must follow score {score}"
            );
        }
    }
}

#[test]
fn identical_seeds_produce_bit_identical_simulations() {
    let mut first = SimulationEngine::seeded(777);
    let mut second = SimulationEngine::seeded(777);
    for archetype in Archetype::ALL {
        let a = first.generate(archetype.id(), 5).expect("generates");
        let b = second.generate(archetype.id(), 5).expect("generates");
        assert_eq!(a, b, "{archetype}: determinism law violated");
    }
}

#[test]
fn different_seeds_diverge() {
    let mut first = SimulationEngine::seeded(1);
    let mut second = SimulationEngine::seeded(2);
    let a = first.generate("developing_cyclone", 5).expect("generates");
    let b = second.generate("developing_cyclone", 5).expect("generates");
    assert_ne!(a, b, "different seeds should produce different jitter");
}

#[test]
fn eye_formation_end_to_end() {
    let mut engine = SimulationEngine::seeded(2024);
    let simulation = engine.generate("eye_formation", 4).expect("generates");

    // Base curve 35.0 + 8.0·p, jitter ±2: frame 1 near 35, frame 4 near 43
    let first = *simulation.frames[0].metrics.coverage_percent;
    let last = *simulation.frames[3].metrics.coverage_percent;
    assert!(
        (33.0..=37.0).contains(&first),
        "frame 1 coverage {first} should be within jitter of 35.0"
    );
    assert!(
        (41.0..=45.0).contains(&last),
        "frame 4 coverage {last} should be within jitter of 43.0"
    );

    // Risk curve 85 + 10·p with ±5 jitter never drops below the HIGH band
    for frame in &simulation.frames {
        assert_eq!(
            frame.metrics.risk_level,
            RiskLevel::High,
            "eye formation frame {} must stay HIGH",
            frame.frame_id
        );
    }
}

#[test]
fn narrative_buckets_reach_first_and_last_sentences() {
    let mut engine = SimulationEngine::seeded(5);
    let simulation = engine.generate("developing_cyclone", 5).expect("generates");
    let sentences = Archetype::DevelopingCyclone.stage_sentences();
    assert_eq!(simulation.frames[0].analysis, sentences[0]);
    assert_eq!(simulation.frames[4].analysis, sentences[3]);
}

#[test]
fn archetype_listing_is_static_and_complete() {
    let engine = SimulationEngine::seeded(0);
    let listing = engine.list_archetypes();
    assert_eq!(listing.len(), 4);
    assert_eq!(listing[0].id, "developing_cyclone");
    assert_eq!(listing[1].id, "rapid_intensification");
    assert!(listing.iter().all(|info| info.key_features.len() == 3));
    assert!(listing.iter().all(|info| info.duration_hours > 0));
}

#[test]
fn simulations_serialize_round_trip() {
    let mut engine = SimulationEngine::seeded(31);
    let simulation = engine.generate("weakening_system", 3).expect("generates");
    let json = serde_json::to_string(&simulation).expect("serializes");
    let back: cyclone_sim_core::Simulation = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(simulation, back);
}
