//! Serialized snapshots must validate against their generated JSON schemas.

use atomlab_core::snapshots::{AtomSnapshot, ElementDetail, QuizSnapshot};
use atomlab_core::{catalog, AtomState, ElectronId, Highlight, QuizSession};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! serialize_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

serialize_and_validate!(atom_snapshot_default, AtomSnapshot, AtomState::new().snapshot());

serialize_and_validate!(atom_snapshot_isotope, AtomSnapshot, {
    let mut atom = AtomState::with_atomic_number(19).unwrap();
    atom.set_isotope_mode(true);
    atom.adjust_neutrons(1).unwrap();
    atom.set_highlight(Highlight::Neutrons);
    atom.snapshot()
});

serialize_and_validate!(
    element_detail,
    ElementDetail,
    ElementDetail::from(catalog::element(13).unwrap())
);

serialize_and_validate!(quiz_snapshot_fresh, QuizSnapshot, QuizSession::new().snapshot());

serialize_and_validate!(quiz_snapshot_incorrect, QuizSnapshot, {
    let mut quiz = QuizSession::with_question_count(2).unwrap();
    quiz.place_electron(ElectronId(0), 1).unwrap();
    quiz.check_answer().unwrap();
    quiz.snapshot()
});

serialize_and_validate!(quiz_snapshot_complete, QuizSnapshot, {
    let mut quiz = QuizSession::with_question_count(1).unwrap();
    quiz.place_electron(ElectronId(0), 0).unwrap();
    let result = quiz.check_answer().unwrap();
    quiz.fire_advance(result.ticket).unwrap();
    quiz.snapshot()
});

#[test]
fn feedback_is_tagged_by_kind() {
    let mut quiz = QuizSession::new();
    quiz.place_electron(ElectronId(0), 1).unwrap();
    quiz.check_answer().unwrap();

    let json = serde_json::to_value(quiz.snapshot()).unwrap();
    assert_eq!(json["feedback"]["kind"], "incorrect");
    assert_eq!(json["feedback"]["expected"], serde_json::json!([1]));
    assert_eq!(json["status"], "awaiting_advance");
}

#[test]
fn element_detail_flattens_catalog_fields() {
    let json = serde_json::to_value(ElementDetail::from(catalog::element(8).unwrap())).unwrap();
    assert_eq!(json["symbol"], "O");
    assert_eq!(json["category"], "nonmetal");
    assert_eq!(json["neutrons"], 8);
    assert_eq!(json["shells"], serde_json::json!([2, 6]));
}
