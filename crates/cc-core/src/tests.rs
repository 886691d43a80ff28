//! Unit tests for cc-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(id), 42);
    }

    #[test]
    fn range_is_ascending() {
        let ids: Vec<_> = AgentId::range(3).collect();
        assert_eq!(ids, [AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod step {
    use crate::{Cycle, Phase, Step};

    #[test]
    fn cycle_next_and_ordinal() {
        assert_eq!(Cycle::ZERO.next(), Cycle(1));
        assert_eq!(Cycle(0).ordinal(), 1);
    }

    #[test]
    fn step_display() {
        assert_eq!(Step::pandemic(Cycle(1), 3).to_string(), "pandemic 2.3");
        assert_eq!(Step::financial(Cycle(0), 1).to_string(), "financial 1.1");
        assert_eq!(Step::INITIAL.to_string(), "initial 0.0");
    }

    #[test]
    fn steps_order_by_cycle_then_phase() {
        assert!(Step::financial(Cycle(0), 1) < Step::pandemic(Cycle(1), 1));
        assert!(Step::pandemic(Cycle(0), 9) < Step::financial(Cycle(0), 1));
        assert_eq!(Phase::Financial.as_str(), "financial");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, ContactRng, Cycle, SimRng};

    #[test]
    fn contact_draw_is_reproducible() {
        for agent in 0..50 {
            let a = ContactRng::draw(9, Cycle(3), AgentId(agent));
            let b = ContactRng::draw(9, Cycle(3), AgentId(agent));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn contact_draw_in_hundredths_range() {
        for agent in 0..1000 {
            let v = ContactRng::draw(1, Cycle(0), AgentId(agent));
            assert!((0.01..=1.0).contains(&v), "got {v}");
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "not a hundredth: {v}");
        }
    }

    #[test]
    fn contact_draw_depends_on_key() {
        let base: Vec<f64> = (0..32).map(|a| ContactRng::draw(1, Cycle(0), AgentId(a))).collect();
        let other_cycle: Vec<f64> = (0..32).map(|a| ContactRng::draw(1, Cycle(1), AgentId(a))).collect();
        let other_seed: Vec<f64> = (0..32).map(|a| ContactRng::draw(2, Cycle(0), AgentId(a))).collect();
        assert_ne!(base, other_cycle);
        assert_ne!(base, other_seed);
    }

    #[test]
    fn sim_rng_deterministic() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sample_indices_are_distinct_and_stable() {
        let a = SimRng::new(7).sample_indices(20, 5);
        let b = SimRng::new(7).sample_indices(20, 5);
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
        assert!(a.iter().all(|&i| i < 20));
    }
}

#[cfg(test)]
mod settings {
    use crate::{CcError, Settings, TopologyKind};

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        s.validate().unwrap();
        assert_eq!(s.general.agent_count, 50);
        assert_eq!(s.financial.initial_asset_value, 100_000_000.0);
    }

    #[test]
    fn onset_threshold_derived_from_recovery_time() {
        let mut s = Settings::default();
        s.pandemic.time_to_recover = 100;
        assert_eq!(s.pandemic.contagious_onset_threshold(), 20);
        s.pandemic.time_to_recover = 7;
        assert_eq!(s.pandemic.contagious_onset_threshold(), 2);
        s.pandemic.contagious_onset = Some(1);
        assert_eq!(s.pandemic.contagious_onset_threshold(), 1);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let mut s = Settings::default();
        s.pandemic.edge_probability = 1.5;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, CcError::Config(ref m) if m.contains("pandemic.edge_probability")));

        let mut s = Settings::default();
        s.financial.lockdown_severity = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_divisor() {
        let mut s = Settings::default();
        s.financial.loan_threshold_divisor = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_zero_agents_and_zero_recovery() {
        let mut s = Settings::default();
        s.general.agent_count = 0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.pandemic.time_to_recover = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_too_many_initially_infectious() {
        let mut s = Settings::default();
        s.general.agent_count = 3;
        s.general.initially_infectious = 4;
        assert!(s.validate().is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn rejects_agent_count_beyond_id_range() {
        let mut s = Settings::default();
        s.general.agent_count = u32::MAX as usize + 1;
        s.general.initially_infectious = 0;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, CcError::Config(ref m) if m.contains("general.agent_count")));

        s.general.agent_count = u32::MAX as usize;
        s.validate().unwrap();
    }

    #[test]
    fn set_field_coerces_text() {
        let mut s = Settings::default();
        s.set_field("general.agent_count", " 12 ").unwrap();
        s.set_field("general.topology_kind", "erdos_renyi").unwrap();
        s.set_field("financial.loan_threshold_divisor", "2.5").unwrap();
        s.set_field("pandemic.contagious_onset", "3").unwrap();
        assert_eq!(s.general.agent_count, 12);
        assert_eq!(s.general.topology_kind, TopologyKind::ErdosRenyi);
        assert_eq!(s.financial.loan_threshold_divisor, 2.5);
        assert_eq!(s.pandemic.contagious_onset, Some(3));
        s.set_field("pandemic.contagious_onset", "auto").unwrap();
        assert_eq!(s.pandemic.contagious_onset, None);
    }

    #[test]
    fn set_field_rejects_bad_input() {
        let mut s = Settings::default();
        assert!(s.set_field("general.cycles", "five").is_err());
        assert!(s.set_field("general.agent_count", "-3").is_err());
        assert!(s.set_field("general.nonsense", "1").is_err());
        assert!(s.set_field("seed", "1").is_err());
        assert!(s.set_field("general.topology_kind", "barabasi_albert").is_err());
        // Unchanged after failures.
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let json = r#"{
            "general":   { "agent_count": 10, "cycles": 2, "topology_kind": "erdos_renyi", "seed": 1 },
            "pandemic":  { "edge_probability": 1.0, "iterations_per_cycle": 2,
                           "transmission_rate": 1.0, "time_to_recover": 100 },
            "financial": { "edge_probability": 0.5, "iterations_per_cycle": 1,
                           "lockdown_severity": 0.0, "loan_threshold_divisor": 2.0 }
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        s.validate().unwrap();
        assert_eq!(s.general.initially_infectious, 1);
        assert_eq!(s.pandemic.contagious_onset, None);
        assert_eq!(s.financial.initial_asset_value, 100_000_000.0);
    }

    #[test]
    fn topology_kind_key_in_json_and_text() {
        let json = r#"{
            "general":   { "agent_count": 4, "cycles": 1, "topology_kind": "erdos_renyi", "seed": 3 },
            "pandemic":  { "edge_probability": 0.2, "iterations_per_cycle": 1,
                           "transmission_rate": 0.5, "time_to_recover": 5 },
            "financial": { "edge_probability": 0.2, "iterations_per_cycle": 1,
                           "lockdown_severity": 0.1, "loan_threshold_divisor": 5.0 }
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.general.topology_kind, TopologyKind::ErdosRenyi);

        // Serialized form uses the same key, so written settings load back.
        let written = serde_json::to_string(&s).unwrap();
        assert!(written.contains("\"topology_kind\""));
        assert_eq!(serde_json::from_str::<Settings>(&written).unwrap(), s);

        // Short key still accepted.
        let short = json.replace("topology_kind", "topology");
        let s2: Settings = serde_json::from_str(&short).unwrap();
        assert_eq!(s2, s);
        let mut s3 = Settings::default();
        s3.set_field("general.topology", "erdos_renyi").unwrap();
        assert_eq!(s3.general.topology_kind, TopologyKind::ErdosRenyi);
    }

    #[test]
    fn json_rejects_unknown_fields_and_wrong_types() {
        let unknown = r#"{
            "general":   { "agent_count": 10, "cycles": 2, "topology_kind": "erdos_renyi", "seed": 1, "colour": 3 },
            "pandemic":  { "edge_probability": 1.0, "iterations_per_cycle": 2,
                           "transmission_rate": 1.0, "time_to_recover": 100 },
            "financial": { "edge_probability": 0.5, "iterations_per_cycle": 1,
                           "lockdown_severity": 0.0, "loan_threshold_divisor": 2.0 }
        }"#;
        assert!(serde_json::from_str::<Settings>(unknown).is_err());

        let wrong_type = unknown
            .replace(", \"colour\": 3", "")
            .replace("\"cycles\": 2", "\"cycles\": \"two\"");
        assert!(serde_json::from_str::<Settings>(&wrong_type).is_err());
    }
}
