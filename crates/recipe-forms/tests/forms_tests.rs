use proptest::prelude::*;
use recipe_forms::auth::PASSWORD_MISMATCH;
use recipe_forms::{AuthModal, AuthSubmission, AuthTab, RecipeWizard, SignupForm, WizardStage};
use recipe_test_utils::valid_draft;

fn wizard_from_valid_draft() -> RecipeWizard {
    let draft = valid_draft();
    let mut wizard = RecipeWizard::new()
        .with_title(draft.title)
        .with_description(draft.description)
        .with_cuisine(draft.cuisine)
        .with_category(draft.category);
    wizard.prep_time = draft.prep_time;
    for ingredient in draft.ingredients {
        wizard.pending_ingredient = ingredient;
        wizard.add_ingredient();
    }
    for step in draft.instructions {
        wizard.pending_instruction = step;
        wizard.add_instruction();
    }
    wizard.upload_image();
    wizard
}

#[test]
fn test_signup_rejects_mismatched_passwords() {
    let mut modal = AuthModal::new();
    modal.open(AuthTab::Signup);
    modal.signup = SignupForm::new("Selam", "selam@example.com", "berbere1", "berbere2");

    let errors = modal.submit().unwrap_err();
    assert_eq!(errors.message("confirm_password"), Some(PASSWORD_MISMATCH));
    assert!(!errors.has("password"));
    assert!(modal.is_open());
}

#[test]
fn test_signup_success_hands_back_profile() {
    let mut modal = AuthModal::new();
    modal.open(AuthTab::Signup);
    modal.signup = SignupForm::new("Selam", "selam@example.com", "berbere1", "berbere1");

    let submission = modal.submit().unwrap();
    assert_eq!(submission.tab(), AuthTab::Signup);
    assert_eq!(
        submission,
        AuthSubmission::Signup {
            name: "Selam".into(),
            email: "selam@example.com".into()
        }
    );
}

#[test]
fn test_wizard_rejects_zero_ingredients() {
    let mut wizard = wizard_from_valid_draft();
    while wizard.remove_ingredient(0).is_some() {}

    let errors = wizard.submit().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message("ingredients"), Some("Add at least one ingredient"));
}

#[test]
fn test_wizard_navigation_is_not_gated_by_validation() {
    let mut wizard = RecipeWizard::new();
    for expected in &WizardStage::ALL[1..] {
        assert_eq!(wizard.next_stage(), *expected);
    }
    assert!(wizard.submit().is_err());
}

#[test]
fn test_wizard_round_trips_valid_draft() {
    let draft = wizard_from_valid_draft().submit().unwrap();
    let expected = valid_draft();
    assert_eq!(draft.title, expected.title);
    assert_eq!(draft.ingredients, expected.ingredients);
    assert_eq!(draft.instructions, expected.instructions);
    assert_eq!(draft.prep_time, 70);
}

proptest! {
    #[test]
    fn prop_blank_input_never_adds(spaces in "[ \t]{0,8}") {
        let mut wizard = RecipeWizard::new();
        wizard.pending_ingredient = spaces;
        prop_assert!(!wizard.add_ingredient());
        prop_assert!(wizard.ingredients().is_empty());
    }

    #[test]
    fn prop_title_length_rule(title in "[a-z]{0,6}") {
        let mut wizard = wizard_from_valid_draft();
        wizard.title = title.clone();
        let result = wizard.validate();
        prop_assert_eq!(result.is_ok(), title.chars().count() >= 3);
    }
}
