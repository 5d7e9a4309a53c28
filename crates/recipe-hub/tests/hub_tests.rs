use pretty_assertions::assert_eq;
use recipe_forms::{AuthTab, LoginForm, SignupForm};
use recipe_hub::{ActiveModal, DetailTab, HubConfig, HubError, RecipeHub};
use recipe_model::RecipeId;
use recipe_payment::PaymentStatus;
use recipe_test_utils::recipe;
use std::time::Duration;

fn premium_id() -> RecipeId {
    RecipeId::new("4")
}

#[test]
fn test_logged_out_actions_open_login() {
    let mut hub = RecipeHub::default();

    hub.recipe_click(&premium_id()).unwrap();
    assert_eq!(hub.active_modal(), Some(ActiveModal::Auth));
    assert!(hub.detail().is_none());
    hub.close_auth();

    hub.create_recipe();
    assert!(hub.wizard().is_none());
    assert_eq!(hub.active_modal(), Some(ActiveModal::Auth));
    hub.close_auth();

    assert_eq!(hub.bookmark(&RecipeId::new("1")).unwrap(), None);
    hub.close_auth();

    hub.buy_recipe(&premium_id()).unwrap();
    assert!(hub.payment().is_none());
    assert_eq!(hub.auth().tab(), AuthTab::Login);
}

#[test]
fn test_login_flow_unlocks_gated_actions() {
    let mut hub = RecipeHub::default();
    hub.like(&RecipeId::new("1")).unwrap();

    hub.auth_mut().login = LoginForm::new("not-an-email", "123");
    let err = hub.submit_auth().unwrap_err();
    assert!(err.is_user_input());
    assert!(!hub.is_logged_in());

    hub.auth_mut().login = LoginForm::new("john@example.com", "secret1");
    hub.submit_auth().unwrap();

    assert!(hub.is_logged_in());
    assert_eq!(hub.active_modal(), None);
    let toast = hub.take_toasts().pop().unwrap();
    assert_eq!(toast.title, "Welcome!");
    assert_eq!(toast.description, "You have successfully logged in.");

    assert_eq!(hub.like(&RecipeId::new("1")).unwrap(), Some(true));
}

#[test]
fn test_signup_then_logout() {
    let mut hub = RecipeHub::default();
    hub.open_signup();
    hub.auth_mut().signup = SignupForm::new("Abeba", "abeba@example.com", "injera1", "injera1");
    hub.submit_auth().unwrap();
    assert_eq!(
        hub.toasts().last().unwrap().description,
        "Your account has been created."
    );

    hub.logout();
    assert!(!hub.is_logged_in());
    assert_eq!(hub.toasts().last().unwrap().title, "Logged out");
}

#[tokio::test(start_paused = true)]
async fn test_purchase_unlocks_recipe() {
    let mut hub = RecipeHub::new(HubConfig::default()).unwrap().logged_in();
    let id = premium_id();

    hub.recipe_click(&id).unwrap();
    assert_eq!(hub.purchase_prompt(&id).as_deref(), Some("Purchase for 349.99 ETB"));

    hub.buy_recipe(&id).unwrap();
    assert_eq!(hub.active_modal(), Some(ActiveModal::Payment));
    assert_eq!(hub.payment().unwrap().status(), PaymentStatus::Idle);

    let start = tokio::time::Instant::now();
    let reference = hub.pay().await.unwrap();

    assert_eq!(start.elapsed(), Duration::from_secs(2));
    assert!(reference.as_str().starts_with("TX-"));
    assert!(hub.payment().is_none());
    assert!(hub.is_unlocked(&id));
    assert!(!hub.needs_purchase(&id));
    assert_eq!(hub.purchase_prompt(&id), None);
    assert_eq!(
        hub.toasts().last().unwrap().description,
        "You now have access to Ethiopian Doro Wat with Injera"
    );
}

#[tokio::test(start_paused = true)]
async fn test_typed_amount_still_unlocks_after_delay() {
    let mut hub = RecipeHub::default().logged_in();
    hub.buy_recipe(&premium_id()).unwrap();
    hub.payment_mut().unwrap().form.amount = "349,99".into();

    let start = tokio::time::Instant::now();
    let reference = hub.pay().await.unwrap();

    assert_eq!(start.elapsed(), Duration::from_secs(2));
    assert!(reference.as_str().starts_with("TX-"));
    assert!(hub.payment().is_none());
    assert!(hub.is_unlocked(&premium_id()));
    assert_eq!(hub.toasts().last().unwrap().title, "Payment Successful");
}

#[tokio::test(start_paused = true)]
async fn test_zero_price_checks_out_at_default_price() {
    let free_priced = recipe("tibs", 20, "Ethiopian", "Dinner").premium(Some(0.0));
    let mut hub = RecipeHub::with_recipes(HubConfig::default(), vec![free_priced])
        .unwrap()
        .logged_in();
    let id = RecipeId::new("tibs");

    hub.recipe_click(&id).unwrap();
    assert_eq!(hub.purchase_prompt(&id).as_deref(), Some("Purchase for 299.99 ETB"));

    hub.buy_recipe(&id).unwrap();
    assert_eq!(hub.payment().unwrap().form.amount, "299.99");
    hub.pay().await.unwrap();
    assert!(hub.is_unlocked(&id));
}

#[test]
fn test_invalid_config_is_rejected() {
    for config in [
        HubConfig::default().with_default_price(-1.0),
        HubConfig::default().with_currency(""),
        HubConfig::default().with_page_size(0),
    ] {
        let err = RecipeHub::new(config).unwrap_err();
        assert!(matches!(err, HubError::Config(_)));
    }
}

#[test]
fn test_wizard_submission_adds_recipe_first() {
    let mut hub = RecipeHub::default().logged_in();
    hub.create_recipe();

    let wizard = hub.wizard_mut().unwrap();
    wizard.title = "Shiro".into();
    wizard.description = "Chickpea flour stew with berbere".into();
    wizard.cuisine = "Ethiopian".into();
    wizard.category = "Dinner".into();
    wizard.is_premium = true;

    let id = hub.submit_wizard().unwrap();

    assert!(hub.wizard().is_none());
    let first = &hub.catalog().store().as_slice()[0];
    assert_eq!(first.id, id);
    assert!(id.as_str().starts_with("new-"));
    assert_eq!(first.rating, 0.0);
    assert_eq!(first.author.as_ref().unwrap().name, "John Doe");
    assert_eq!(first.instruction_list()[0].step, 1);
    assert_eq!(hub.toasts().last().unwrap().title, "Recipe Created");

    // Created recipes are reachable through the filter bar
    hub.catalog_mut().set_cuisine("Ethiopian");
    hub.catalog_mut().set_premium_only(true);
    assert_eq!(hub.catalog().visible_count(), 2);
}

#[test]
fn test_invalid_wizard_stays_open() {
    let mut hub = RecipeHub::default().logged_in();
    hub.create_recipe();

    let err = hub.submit_wizard().unwrap_err();
    match err {
        HubError::Validation(errors) => assert!(errors.has("title")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(hub.wizard().is_some());
    assert_eq!(hub.catalog().store().len(), 6);
}

#[test]
fn test_rating_and_comments_in_detail_view() {
    let mut hub = RecipeHub::default();
    let id = RecipeId::new("1");
    hub.recipe_click(&id).unwrap();

    assert!(hub.rate(&id, 0).is_err());
    let first = hub.rate(&id, 5).unwrap();
    let second = hub.rate(&id, 1).unwrap();
    assert!(second < first);
    assert_eq!(hub.catalog().find(&id).unwrap().rating_count, 129);

    let detail = hub.detail_mut().unwrap();
    detail.switch_tab(DetailTab::Comments);
    detail.pending_comment = "   ".into();
    assert!(matches!(hub.comment(), Err(HubError::EmptyComment)));

    hub.detail_mut().unwrap().pending_comment = "Perfect weeknight dinner".into();
    hub.comment().unwrap();
    let detail = hub.detail().unwrap();
    assert_eq!(detail.comments_label(), "Comments (3)");
    assert_eq!(detail.comments()[2].author.name, "John Doe");

    hub.close_detail();
    assert!(matches!(hub.comment(), Err(HubError::NotOpen(_))));
}

#[test]
fn test_search_resets_page() {
    let mut hub = RecipeHub::new(HubConfig::default().with_page_size(2)).unwrap();
    hub.catalog_mut().go_to_page(3).unwrap();

    hub.header_mut().search_input = "a".into();
    hub.submit_search();
    assert_eq!(hub.catalog().pagination().current(), 1);

    hub.clear_filters();
    assert_eq!(hub.catalog().visible_count(), 6);
}
