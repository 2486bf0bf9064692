use super::common::*;
use crate::claims::catalog::AnalysisError;
use crate::claims::domain::ConditionId;
use crate::claims::rating::{combined_rating, DisabilityRating, RatingCalculator, RatingError};

fn ratings(values: &[u8]) -> Vec<DisabilityRating> {
    values
        .iter()
        .map(|value| DisabilityRating::new(*value).expect("valid rating"))
        .collect()
}

fn combine(values: &[u8]) -> u8 {
    combined_rating(&ratings(values)).value()
}

#[test]
fn empty_and_single_ratings_pass_through() {
    assert_eq!(combine(&[]), 0);
    assert_eq!(combine(&[30]), 30);
    assert_eq!(combine(&[0]), 0);
}

#[test]
fn whole_person_rule_rounds_once_at_the_end() {
    // 50 + 50% of the remaining 50 = 75, rounds to 80
    assert_eq!(combine(&[50, 50]), 80);
    // 10 + 9 = 19
    assert_eq!(combine(&[10, 10]), 20);
    // 70 + 15 + 4.5 = 89.5
    assert_eq!(combine(&[70, 50, 30]), 90);
}

#[test]
fn combination_is_order_independent() {
    assert_eq!(combine(&[30, 50]), 70);
    assert_eq!(combine(&[50, 30]), 70);
    assert_eq!(combine(&[10, 70, 40]), combine(&[40, 10, 70]));
}

#[test]
fn total_rating_absorbs_everything_else() {
    assert_eq!(combine(&[100, 40]), 100);
    assert_eq!(combine(&[20, 100, 10]), 100);
}

#[test]
fn invalid_ratings_are_rejected() {
    assert_eq!(
        DisabilityRating::new(55),
        Err(RatingError::InvalidRating { value: 55 })
    );
    assert!(DisabilityRating::new(110).is_err());
    assert!(serde_json::from_str::<DisabilityRating>("45").is_err());
    assert_eq!(
        serde_json::from_str::<DisabilityRating>("40").expect("valid"),
        DisabilityRating::new(40).expect("valid")
    );
}

#[test]
fn calculator_validates_raw_percentages() {
    let calculator = RatingCalculator::new(standard_catalog());

    assert_eq!(
        calculator.combine_percentages(&[50, 50]).map(DisabilityRating::value),
        Ok(80)
    );
    assert_eq!(
        calculator.combine_percentages(&[50, 35]),
        Err(RatingError::InvalidRating { value: 35 })
    );
}

#[test]
fn seeded_ratings_match_validated_ones() {
    assert_eq!(DisabilityRating::seeded(70), DisabilityRating::new(70).expect("valid"));
    assert_eq!(DisabilityRating::seeded(100), DisabilityRating::TOTAL);
    assert_eq!(DisabilityRating::seeded(70).to_string(), "70%");
}

#[test]
#[should_panic(expected = "multiple of 10")]
fn seeded_rating_rejects_invalid_value() {
    let _ = DisabilityRating::seeded(65);
}

#[test]
fn standard_ratings_agree_with_json_validation() {
    let catalog = standard_catalog();
    for definition in catalog.conditions() {
        let value = definition.average_rating.value();
        assert_eq!(DisabilityRating::new(value), Ok(definition.average_rating));
    }
}

#[test]
fn average_processing_time_uses_catalog_days() {
    let calculator = RatingCalculator::new(standard_catalog());

    // ptsd 125, tinnitus 90
    let ids = [ConditionId::new("ptsd"), ConditionId::new("tinnitus")];
    assert_eq!(calculator.average_processing_time(&ids), Ok(108));
    assert_eq!(calculator.average_processing_time(&[]), Ok(0));

    let unknown = [ConditionId::new("frostbite")];
    assert_eq!(
        calculator.average_processing_time(&unknown),
        Err(AnalysisError::UnknownCondition {
            condition_id: ConditionId::new("frostbite"),
        })
    );
}
