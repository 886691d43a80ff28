//! Unit tests for cc-agent.

#[cfg(test)]
mod state_tests {
    use crate::{AgentState, Category, Condition, ImpactTier};

    #[test]
    fn new_state_is_healthy_and_whole() {
        let s = AgentState::new(100.0);
        assert_eq!(s.condition, Condition::Susceptible);
        assert_eq!(s.time_exposed, 0);
        assert_eq!(s.current_asset_value, 100.0);
        assert_eq!(s.financial_impact, ImpactTier::None);
        assert_eq!(s.impact_ratio(), 1.0);
    }

    #[test]
    fn infect_resets_clock() {
        let mut s = AgentState::new(100.0);
        s.able_to_recover = true;
        s.infect();
        assert!(s.is_infectious());
        assert_eq!(s.time_exposed, 1);
        assert!(!s.able_to_recover);
    }

    #[test]
    fn tier_breakpoints() {
        assert_eq!(ImpactTier::from_ratio(1.0), ImpactTier::None);
        assert_eq!(ImpactTier::from_ratio(0.999), ImpactTier::Minor);
        assert_eq!(ImpactTier::from_ratio(0.75), ImpactTier::Minor);
        assert_eq!(ImpactTier::from_ratio(0.7499), ImpactTier::Intermediate);
        assert_eq!(ImpactTier::from_ratio(0.5), ImpactTier::Intermediate);
        assert_eq!(ImpactTier::from_ratio(0.25), ImpactTier::Major);
        assert_eq!(ImpactTier::from_ratio(0.0), ImpactTier::Critical);
        assert_eq!(ImpactTier::from_ratio(-0.01), ImpactTier::Bust);
    }

    #[test]
    fn tier_floor_matches_from_ratio() {
        for &tier in ImpactTier::ALL.iter().filter(|t| **t != ImpactTier::Bust) {
            assert_eq!(ImpactTier::from_ratio(tier.ratio_floor()), tier);
        }
    }

    #[test]
    fn only_healthier_than_critical_can_lend() {
        assert!(ImpactTier::Major.can_lend());
        assert!(!ImpactTier::Critical.can_lend());
        assert!(!ImpactTier::Bust.can_lend());
    }

    #[test]
    fn categories_are_listed_in_key_order() {
        assert!(Condition::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(ImpactTier::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ImpactTier::Bust.to_string(), "bust");
        assert_eq!(Condition::Removed.to_string(), "removed");
    }

    #[test]
    fn loan_threshold_divides_initial_value() {
        let mut s = AgentState::new(100.0);
        s.current_asset_value = 10.0;
        assert_eq!(s.loan_threshold(4.0), 25.0);
    }
}

#[cfg(test)]
mod population_tests {
    use cc_core::AgentId;

    use crate::{AgentError, PopulationBuilder, create_population};

    #[test]
    fn allocates_labelled_agents() {
        let pop = create_population(4, 0, 1).unwrap();
        assert_eq!(pop.len(), 4);
        assert_eq!(pop.profile(AgentId(3)).unwrap().label, "Bank3");
        assert!(pop.profile(AgentId(4)).is_none());
        assert!(pop.initially_infectious().is_empty());
        assert_eq!(pop.agent_ids().count(), 4);
    }

    #[test]
    fn seeds_requested_number_of_infections() {
        let pop = create_population(20, 5, 9).unwrap();
        let infected = pop.initially_infectious();
        assert_eq!(infected.len(), 5);
        for id in infected {
            let s = &pop.initial_states()[id.index()];
            assert_eq!(s.time_exposed, 1);
        }
    }

    #[test]
    fn selection_is_stable_for_seed() {
        let a = create_population(100, 3, 77).unwrap().initially_infectious();
        let b = create_population(100, 3, 77).unwrap().initially_infectious();
        assert_eq!(a, b);
    }

    #[test]
    fn infect_everyone() {
        let pop = create_population(6, 6, 0).unwrap();
        assert_eq!(pop.initially_infectious().len(), 6);
    }

    #[test]
    fn too_many_infectious_fails() {
        let err = create_population(3, 4, 0).err().unwrap();
        assert!(matches!(err, AgentError::TooManyInfectious { requested: 4, count: 3 }));
    }

    #[test]
    fn invalid_asset_value_fails() {
        let result = PopulationBuilder::new(3, 0).initial_asset_value(0.0).build();
        assert!(matches!(result, Err(AgentError::InvalidAssetValue(_))));
    }

    #[test]
    fn empty_population_is_allowed() {
        let pop = create_population(0, 0, 0).unwrap();
        assert!(pop.is_empty());
    }
}
