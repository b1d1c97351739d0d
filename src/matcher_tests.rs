//! Unit tests for best-candidate selection and listing assessment.

use super::*;
use crate::models::PriceTable;

fn candidate(id: &str, name: &str) -> CandidateEntry {
    CandidateEntry::new(id, name, PriceTable::new(Some(33_617), Some(500_000), Some(1_621_607)))
}

fn best(title: &str, candidates: &[CandidateEntry]) -> MatchResult {
    find_best_match(
        &VariantTaxonomy::standard(),
        &MatcherConfig::default(),
        title,
        candidates,
    )
}

fn charizard_pool() -> Vec<CandidateEntry> {
    vec![
        CandidateEntry::new(
            "6520869",
            "Charizard [Shadowless] #4",
            PriceTable::new(Some(1_100_000), Some(2_500_000), Some(9_000_000)),
        ),
        CandidateEntry::new(
            "715593",
            "Charizard [1st Edition] #4",
            PriceTable::new(Some(2_000_000), Some(5_000_000), Some(16_818_352)),
        ),
    ]
}

mod confidence_tests {
    use super::*;

    #[test]
    fn tiers_follow_thresholds() {
        let t = ConfidenceThresholds::default();
        assert_eq!(Confidence::from_score(45, &t), Confidence::High);
        assert_eq!(Confidence::from_score(35, &t), Confidence::High);
        assert_eq!(Confidence::from_score(34, &t), Confidence::Medium);
        assert_eq!(Confidence::from_score(20, &t), Confidence::Medium);
        assert_eq!(Confidence::from_score(19, &t), Confidence::Low);
        assert_eq!(Confidence::from_score(0, &t), Confidence::Low);
        assert_eq!(Confidence::from_score(-1, &t), Confidence::None);
        assert_eq!(Confidence::from_score(-100, &t), Confidence::None);
    }

    #[test]
    fn trusted_tiers() {
        assert!(Confidence::High.is_trusted());
        assert!(Confidence::Medium.is_trusted());
        assert!(!Confidence::Low.is_trusted());
        assert!(!Confidence::None.is_trusted());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(Confidence::None.to_string(), "none");
    }
}

mod find_best_match_tests {
    use super::*;

    #[test]
    fn first_edition_title_picks_first_edition_entry() {
        let result = best(
            "Pokemon Charizard 4/102 Base Set 1st Edition PSA 10 GEM MINT",
            &charizard_pool(),
        );

        assert_eq!(result.candidate_id.as_deref(), Some("715593"));
        assert_eq!(result.score, 45);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn plain_title_avoids_gold_star_entry() {
        let pool = vec![
            candidate("gold-star-104", "Pikachu [Gold Star] #104"),
            candidate("pikachu-79", "Pikachu #79"),
        ];
        let result = best("Pikachu 79/115 Holon Phantoms Pokemon Card", &pool);

        assert_eq!(result.candidate_id.as_deref(), Some("pikachu-79"));
        // "holon" carries the holo alias, which the plain entry lacks
        assert_eq!(result.score, 20 + 15 - 10);
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn value_tag_flips_the_winner() {
        let pool = vec![
            candidate("a-shadowless", "Charizard [Shadowless] #4"),
            candidate("z-unlimited", "Charizard #4"),
        ];
        let result = best("Charizard 4/102 Base Set Unlimited Holo", &pool);
        assert_eq!(result.candidate_id.as_deref(), Some("z-unlimited"));

        let result = best("Charizard 4/102 Base Set Shadowless Holo", &pool);
        assert_eq!(result.candidate_id.as_deref(), Some("a-shadowless"));
    }

    #[test]
    fn ties_go_to_lowest_id_regardless_of_order() {
        let pool = vec![candidate("b2", "Pikachu #79"), candidate("a1", "Pikachu #79")];
        assert_eq!(best("Pikachu 79/115", &pool).candidate_id.as_deref(), Some("a1"));

        let reversed: Vec<CandidateEntry> = pool.into_iter().rev().collect();
        assert_eq!(best("Pikachu 79/115", &reversed).candidate_id.as_deref(), Some("a1"));
    }

    #[test]
    fn chosen_score_is_the_maximum() {
        let taxonomy = VariantTaxonomy::standard();
        let config = MatcherConfig::default();
        let pool = vec![
            candidate("1", "Charizard [1st Edition] [Holo] #4"),
            candidate("2", "Charizard [Shadowless] #4"),
            candidate("3", "Charizard #4"),
            candidate("4", "Charizard [Error] #4"),
            candidate("5", "Blastoise #2"),
        ];
        let titles = [
            "Charizard 4/102 holo",
            "Charizard 1st edition 4/102",
            "charizard misprint",
            "Blastoise 2/102",
        ];

        for text in titles {
            let result = find_best_match(&taxonomy, &config, text, &pool);
            let title = parse_title(&taxonomy, text).unwrap();
            for entry in &pool {
                let catalog = parse_catalog_name(&taxonomy, &entry.name).unwrap();
                let scored = score_match(&title, &catalog, &config.weights);
                assert!(result.score >= scored.score, "{text} vs {}", entry.name);
            }
        }
    }

    #[test]
    fn gate_failures_still_report_best_candidate_with_no_confidence() {
        let result = best("Blastoise 2/102 Base Set", &charizard_pool());
        assert!(result.is_match());
        assert_eq!(result.score, -100);
        assert_eq!(result.confidence, Confidence::None);
    }

    #[test]
    fn empty_title_is_no_match() {
        assert_eq!(best("", &charizard_pool()), MatchResult::no_match());
        assert_eq!(best("  \t", &charizard_pool()), MatchResult::no_match());
    }

    #[test]
    fn empty_pool_is_no_match() {
        let empty: Vec<CandidateEntry> = Vec::new();
        let result = best("Charizard 4/102", &empty);
        assert_eq!(result, MatchResult::no_match());
        assert!(result.reasons.is_empty());
        assert_eq!(result.confidence, Confidence::None);
    }

    #[test]
    fn unparseable_candidates_are_skipped() {
        let pool = vec![candidate("blank", "   "), candidate("plain", "Charizard #4")];
        let result = best("Charizard 4/102", &pool);
        assert_eq!(result.candidate_id.as_deref(), Some("plain"));

        let only_blank = vec![candidate("blank", "")];
        assert_eq!(best("Charizard 4/102", &only_blank), MatchResult::no_match());
    }

    #[test]
    fn accepts_borrowed_pools() {
        let pool = charizard_pool();
        let borrowed: Vec<&CandidateEntry> = pool.iter().collect();
        let result = find_best_match(
            &VariantTaxonomy::standard(),
            &MatcherConfig::default(),
            "Charizard 1st Edition 4/102",
            &borrowed,
        );
        assert_eq!(result.candidate_id.as_deref(), Some("715593"));
    }

    #[test]
    fn custom_thresholds_change_the_tier() {
        let mut config = MatcherConfig::default();
        config.thresholds.high = 50;
        let result = find_best_match(
            &VariantTaxonomy::standard(),
            &config,
            "Charizard 4/102 1st Edition",
            &charizard_pool(),
        );
        assert_eq!(result.score, 45);
        assert_eq!(result.confidence, Confidence::Medium);
    }
}

mod assess_listing_tests {
    use super::*;

    fn assess(title: &str, candidates: &[CandidateEntry]) -> ListingAssessment {
        assess_listing(
            &VariantTaxonomy::standard(),
            &MatcherConfig::default(),
            title,
            candidates,
        )
    }

    #[test]
    fn graded_first_edition_is_priced_at_top_grade() {
        let assessment = assess(
            "Pokemon Charizard 4/102 Base Set 1st Edition PSA 10 GEM MINT",
            &charizard_pool(),
        );

        assert_eq!(assessment.screen, ListingScreen::Accept);
        assert_eq!(assessment.match_result.candidate_id.as_deref(), Some("715593"));
        assert_eq!(assessment.condition, "PSA 10");
        let fair_value = assessment.fair_value.unwrap();
        assert_eq!(fair_value.amount(), Some(16_818_352));
        assert_eq!(fair_value.label(), "PSA 10");
    }

    #[test]
    fn ungraded_listing_is_priced_raw() {
        let assessment = assess("Charizard 4/102 Shadowless Base Set", &charizard_pool());
        assert_eq!(assessment.match_result.candidate_id.as_deref(), Some("6520869"));
        assert_eq!(assessment.condition, "Ungraded");
        assert_eq!(assessment.fair_value.unwrap().amount(), Some(1_100_000));
    }

    #[test]
    fn junk_listing_is_not_matched() {
        let assessment = assess("Charizard 4/102 Base Set proxy card", &charizard_pool());
        assert!(matches!(assessment.screen, ListingScreen::Junk { .. }));
        assert_eq!(assessment.match_result, MatchResult::no_match());
        assert_eq!(assessment.fair_value, None);
    }

    #[test]
    fn card_pulled_from_sealed_product_is_still_priced() {
        let assessment = assess(
            "Charizard 4/102 1st Edition pulled from booster pack PSA 10",
            &charizard_pool(),
        );
        assert_eq!(assessment.screen, ListingScreen::Accept);
        assert_eq!(assessment.match_result.candidate_id.as_deref(), Some("715593"));
        assert_eq!(assessment.fair_value.unwrap().amount(), Some(16_818_352));
    }

    #[test]
    fn no_confidence_match_is_not_priced() {
        let assessment = assess("Blastoise 2/102 Base Set PSA 9", &charizard_pool());
        assert_eq!(assessment.match_result.confidence, Confidence::None);
        assert_eq!(assessment.fair_value, None);
        assert_eq!(assessment.condition, "PSA 9");
    }

    #[test]
    fn empty_title_is_an_empty_assessment() {
        let assessment = assess("", &charizard_pool());
        assert_eq!(assessment.match_result, MatchResult::no_match());
        assert_eq!(assessment.fair_value, None);
        assert_eq!(assessment.condition, "Ungraded");
    }
}

mod batch_tests {
    use super::*;

    #[test]
    fn match_titles_keeps_input_order() {
        let titles = vec![
            "Charizard 4/102 Shadowless".to_string(),
            String::new(),
            "Charizard 1st Edition 4/102".to_string(),
        ];
        let results = match_titles(
            &VariantTaxonomy::standard(),
            &MatcherConfig::default(),
            &titles,
            &charizard_pool(),
        );

        let ids: Vec<Option<&str>> = results.iter().map(|r| r.candidate_id.as_deref()).collect();
        assert_eq!(ids, vec![Some("6520869"), None, Some("715593")]);
    }

    #[test]
    fn assess_listings_matches_single_calls() {
        let taxonomy = VariantTaxonomy::standard();
        let config = MatcherConfig::default();
        let pool = charizard_pool();
        let titles = [
            "Charizard 4/102 1st Edition PSA 10",
            "Charizard Base Set playmat",
            "Charizard 4/102 Shadowless BGS 9.5",
        ];

        let batch = assess_listings(&taxonomy, &config, &titles, &pool);
        assert_eq!(batch.len(), titles.len());
        for (title, assessment) in titles.iter().zip(&batch) {
            assert_eq!(*assessment, assess_listing(&taxonomy, &config, title, &pool));
        }
    }
}
