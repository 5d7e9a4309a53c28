//! Top-level view-model
//!
//! [`RecipeHub`] owns every piece of page state and exposes the page's events
//! as methods. Actions that need an account (liking, bookmarking, creating,
//! buying, opening a premium recipe) open the login modal instead when nobody
//! is signed in.

use crate::chrome::{AccountBadge, Footer, Header};
use crate::config::HubConfig;
use crate::detail::{purchase_prompt, DetailView};
use crate::error::HubError;
use crate::seed::seed_recipes;
use crate::toast::{Toast, Toasts};
use chrono::Utc;
use recipe_catalog::Catalog;
use recipe_forms::{AuthModal, AuthSubmission, AuthTab, RecipeWizard};
use recipe_model::{Recipe, RecipeDraft, RecipeId, UserProfile};
use recipe_payment::{
    PaymentEvent, PaymentForm, PaymentGateway, PaymentSession, SimulatedGateway, TransactionRef,
};
use std::collections::HashSet;
use std::sync::Arc;

const PURCHASE_TITLE: &str = "Premium Recipe Purchase";
const PURCHASE_DESCRIPTION: &str = "Complete your payment to unlock exclusive premium recipes";

/// Which modal, if any, sits on top of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveModal {
    Auth,
    Detail,
    Wizard,
    Payment,
}

/// Recipe Hub page state
pub struct RecipeHub {
    config: HubConfig,
    catalog: Catalog,
    logged_in: bool,
    user: UserProfile,
    header: Header,
    footer: Footer,
    auth: AuthModal,
    detail: Option<DetailView>,
    wizard: Option<RecipeWizard>,
    payment: Option<PaymentSession>,
    unlocked: HashSet<RecipeId>,
    toasts: Toasts,
    gateway: Arc<dyn PaymentGateway>,
}

impl std::fmt::Debug for RecipeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeHub")
            .field("logged_in", &self.logged_in)
            .field("user", &self.user.name)
            .field("recipes", &self.catalog.store().len())
            .field("modal", &self.active_modal())
            .finish_non_exhaustive()
    }
}

impl Default for RecipeHub {
    fn default() -> Self {
        Self::build(HubConfig::default(), seed_recipes())
    }
}

impl RecipeHub {
    /// Hub over the starter recipes
    ///
    /// # Errors
    /// - `Config` when `config` fails [`HubConfig::validate`]
    pub fn new(config: HubConfig) -> Result<Self, HubError> {
        Self::with_recipes(config, seed_recipes())
    }

    /// # Errors
    /// - `Config` when `config` fails [`HubConfig::validate`]
    pub fn with_recipes(config: HubConfig, recipes: Vec<Recipe>) -> Result<Self, HubError> {
        config.validate()?;
        Ok(Self::build(config, recipes))
    }

    fn build(config: HubConfig, recipes: Vec<Recipe>) -> Self {
        let gateway = SimulatedGateway::new().with_delay(config.payment_delay());
        Self {
            catalog: Catalog::new(recipes, config.page_size),
            logged_in: false,
            user: config.user.clone(),
            header: Header::default(),
            footer: Footer::default(),
            auth: AuthModal::new(),
            detail: None,
            wizard: None,
            payment: None,
            unlocked: HashSet::new(),
            toasts: Toasts::default(),
            gateway: Arc::new(gateway),
            config,
        }
    }

    /// Replace the checkout backend
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn PaymentGateway>) -> Self {
        self.gateway = gateway;
        self
    }

    /// Start signed in as the configured user
    #[must_use]
    pub fn logged_in(mut self) -> Self {
        self.logged_in = true;
        self
    }

    // Reads

    #[inline]
    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filter bar and pager events go straight to the catalog
    #[inline]
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    #[inline]
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Typing into the search box
    #[inline]
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    #[inline]
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    #[inline]
    #[must_use]
    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    #[must_use]
    pub fn account_badge(&self) -> AccountBadge {
        AccountBadge::for_user(self.logged_in, &self.user)
    }

    #[inline]
    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    #[inline]
    #[must_use]
    pub fn auth(&self) -> &AuthModal {
        &self.auth
    }

    #[inline]
    pub fn auth_mut(&mut self) -> &mut AuthModal {
        &mut self.auth
    }

    #[inline]
    #[must_use]
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    #[inline]
    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        self.detail.as_mut()
    }

    #[inline]
    #[must_use]
    pub fn wizard(&self) -> Option<&RecipeWizard> {
        self.wizard.as_ref()
    }

    #[inline]
    pub fn wizard_mut(&mut self) -> Option<&mut RecipeWizard> {
        self.wizard.as_mut()
    }

    #[inline]
    #[must_use]
    pub fn payment(&self) -> Option<&PaymentSession> {
        self.payment.as_ref()
    }

    #[inline]
    pub fn payment_mut(&mut self) -> Option<&mut PaymentSession> {
        self.payment.as_mut()
    }

    #[inline]
    #[must_use]
    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    #[inline]
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }

    /// Topmost open modal
    #[must_use]
    pub fn active_modal(&self) -> Option<ActiveModal> {
        if self.payment.is_some() {
            Some(ActiveModal::Payment)
        } else if self.auth.is_open() {
            Some(ActiveModal::Auth)
        } else if self.wizard.is_some() {
            Some(ActiveModal::Wizard)
        } else if self.detail.is_some() {
            Some(ActiveModal::Detail)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_unlocked(&self, id: &RecipeId) -> bool {
        self.unlocked.contains(id)
    }

    /// Premium and not yet bought this session
    #[must_use]
    pub fn needs_purchase(&self, id: &RecipeId) -> bool {
        self.catalog
            .find(id)
            .is_some_and(|r| r.is_premium && !self.is_unlocked(id))
    }

    /// "Purchase for 299.99 ETB" on a locked premium recipe
    #[must_use]
    pub fn purchase_prompt(&self, id: &RecipeId) -> Option<String> {
        let recipe = self.catalog.find(id)?;
        purchase_prompt(
            recipe,
            self.is_unlocked(id),
            self.config.default_price,
            &self.config.currency,
        )
    }

    // Authentication

    pub fn open_login(&mut self) {
        self.auth.open(AuthTab::Login);
    }

    pub fn open_signup(&mut self) {
        self.auth.open(AuthTab::Signup);
    }

    pub fn close_auth(&mut self) {
        self.auth.close();
    }

    /// Submit whichever auth form is active
    ///
    /// # Errors
    /// - `Validation` with the failing fields; the modal stays open
    pub fn submit_auth(&mut self) -> Result<(), HubError> {
        let submission = self.auth.submit()?;
        self.auth_success(&submission);
        Ok(())
    }

    /// Either auth form was accepted
    pub fn auth_success(&mut self, submission: &AuthSubmission) {
        self.logged_in = true;
        self.auth.close();

        let description = match submission.tab() {
            AuthTab::Login => "You have successfully logged in.",
            AuthTab::Signup => "Your account has been created.",
        };
        tracing::info!(tab = ?submission.tab(), user = %self.user.name, "signed in");
        self.toasts.push(Toast::new("Welcome!", description));
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        tracing::info!(user = %self.user.name, "signed out");
        self.toasts.push(Toast::new(
            "Logged out",
            "You have been successfully logged out.",
        ));
    }

    fn require_login(&mut self, action: &'static str) -> bool {
        if !self.logged_in {
            tracing::debug!(action, "login required");
            self.open_login();
        }
        self.logged_in
    }

    // Grid

    /// Submit the header search box
    pub fn submit_search(&mut self) {
        let query = self.header.submit_search();
        self.search(query);
    }

    /// Set the query and go back to page 1
    pub fn search(&mut self, query: impl Into<String>) {
        self.catalog.search(query);
    }

    pub fn clear_filters(&mut self) {
        self.catalog.clear_filters();
    }

    /// Card click: opens the detail view, or login for a premium recipe while
    /// signed out
    ///
    /// # Errors
    /// - `Catalog(RecipeNotFound)` for an unknown id
    pub fn recipe_click(&mut self, id: &RecipeId) -> Result<(), HubError> {
        let premium = self.catalog.store().get(id)?.is_premium;
        if premium && !self.require_login("open premium recipe") {
            return Ok(());
        }

        self.detail = Some(DetailView::open(id.clone(), Utc::now()));
        Ok(())
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Toggle like; `None` when login was requested instead
    ///
    /// # Errors
    /// - `Catalog(RecipeNotFound)` for an unknown id
    pub fn like(&mut self, id: &RecipeId) -> Result<Option<bool>, HubError> {
        if !self.require_login("like") {
            return Ok(None);
        }

        let liked = self.catalog.toggle_like(id)?;
        let title = self.title_of(id);
        let action = if liked { "liked" } else { "unliked" };
        self.toasts.push(Toast::new(
            format!("Recipe {action}"),
            format!("You have {action} {title}"),
        ));
        Ok(Some(liked))
    }

    /// Toggle bookmark; `None` when login was requested instead
    ///
    /// # Errors
    /// - `Catalog(RecipeNotFound)` for an unknown id
    pub fn bookmark(&mut self, id: &RecipeId) -> Result<Option<bool>, HubError> {
        if !self.require_login("bookmark") {
            return Ok(None);
        }

        let bookmarked = self.catalog.toggle_bookmark(id)?;
        let title = self.title_of(id);
        let action = if bookmarked { "added to" } else { "removed from" };
        self.toasts.push(Toast::new(
            format!("Recipe {action} bookmarks"),
            format!("{title} has been {action} your bookmarks"),
        ));
        Ok(Some(bookmarked))
    }

    fn title_of(&self, id: &RecipeId) -> String {
        self.catalog
            .find(id)
            .map(|r| r.title.clone())
            .unwrap_or_default()
    }

    // Detail view

    /// Star rating from the detail view; returns the new average
    ///
    /// # Errors
    /// - `Catalog` for an unknown id or stars outside 1..=5
    pub fn rate(&mut self, id: &RecipeId, stars: u8) -> Result<f64, HubError> {
        let average = self.catalog.rate(id, stars)?;
        tracing::debug!(recipe = %id, stars, average, "rated");
        Ok(average)
    }

    /// Post the detail view's pending comment as the current user
    ///
    /// # Errors
    /// - `NotOpen` without a detail view, `EmptyComment` for blank text
    pub fn comment(&mut self) -> Result<(), HubError> {
        let detail = self.detail.as_mut().ok_or(HubError::NotOpen("detail view"))?;
        detail.post_comment(&self.user, Utc::now())?;
        Ok(())
    }

    // Creation

    /// Floating "+" button
    pub fn create_recipe(&mut self) {
        if self.require_login("create recipe") {
            self.wizard = Some(RecipeWizard::prefilled());
        }
    }

    pub fn close_wizard(&mut self) {
        self.wizard = None;
    }

    /// Validate the open wizard and add its recipe
    ///
    /// # Errors
    /// - `NotOpen` without a wizard, `Validation` with the failing fields
    pub fn submit_wizard(&mut self) -> Result<RecipeId, HubError> {
        let wizard = self.wizard.as_ref().ok_or(HubError::NotOpen("recipe wizard"))?;
        let draft = wizard.submit()?;
        Ok(self.submit_recipe(draft))
    }

    /// Put a new recipe at the top of the grid
    pub fn submit_recipe(&mut self, draft: RecipeDraft) -> RecipeId {
        let id = RecipeId::generate();
        let recipe = draft.into_recipe(id.clone(), &self.user);
        let description = format!(
            "Your recipe \"{}\" has been created successfully.",
            recipe.title
        );

        tracing::info!(recipe = %id, title = %recipe.title, "recipe created");
        self.catalog.add(recipe);
        self.wizard = None;
        self.toasts.push(Toast::new("Recipe Created", description));
        id
    }

    // Checkout

    /// Start checkout for a premium recipe; free recipes are ignored
    ///
    /// # Errors
    /// - `Catalog(RecipeNotFound)` for an unknown id
    pub fn buy_recipe(&mut self, id: &RecipeId) -> Result<(), HubError> {
        if !self.require_login("buy recipe") {
            return Ok(());
        }

        let recipe = self.catalog.store().get(id)?;
        if !recipe.is_premium {
            tracing::debug!(recipe = %id, "not premium, nothing to buy");
            return Ok(());
        }

        let mut form = PaymentForm::for_recipe(
            id.clone(),
            recipe.title.clone(),
            recipe.price_or(self.config.default_price),
        )
        .with_currency(self.config.currency.clone());
        form.title = PURCHASE_TITLE.into();
        form.description = PURCHASE_DESCRIPTION.into();

        tracing::info!(recipe = %id, amount = %form.amount, "checkout opened");
        self.detail = None;
        self.payment = Some(PaymentSession::new(form));
        Ok(())
    }

    /// Press "Pay" on the open checkout
    ///
    /// # Errors
    /// - `NotOpen` without a checkout, otherwise the session's `Payment` error.
    ///   The simulated gateway always succeeds; a gateway error leaves the
    ///   checkout open in `Failed` until it is cancelled
    pub async fn pay(&mut self) -> Result<TransactionRef, HubError> {
        let gateway = Arc::clone(&self.gateway);
        let session = self.payment.as_mut().ok_or(HubError::NotOpen("checkout"))?;

        let mut events: Vec<PaymentEvent> = Vec::new();
        let result = session.pay(gateway.as_ref(), &mut events).await;
        self.dispatch(events);
        Ok(result?)
    }

    /// Press "Cancel" on the open checkout
    ///
    /// # Errors
    /// - `NotOpen` without a checkout, `Payment` while processing
    pub fn cancel_payment(&mut self) -> Result<(), HubError> {
        let session = self.payment.as_mut().ok_or(HubError::NotOpen("checkout"))?;

        let mut events: Vec<PaymentEvent> = Vec::new();
        session.cancel(&mut events)?;
        self.dispatch(events);
        Ok(())
    }

    fn dispatch(&mut self, events: Vec<PaymentEvent>) {
        for event in events {
            match event {
                PaymentEvent::Succeeded(reference) => self.payment_succeeded(&reference),
                PaymentEvent::Failed(message) => {
                    tracing::warn!(error = %message, "payment error");
                }
                PaymentEvent::Cancelled => self.payment_cancelled(),
            }
        }
    }

    /// Close the checkout and unlock what was bought
    pub fn payment_succeeded(&mut self, reference: &TransactionRef) {
        let Some(session) = self.payment.take() else {
            return;
        };

        let form = session.form;
        tracing::info!(%reference, recipe = ?form.recipe_id, "recipe unlocked");
        if let Some(id) = form.recipe_id {
            self.unlocked.insert(id);
        }
        self.toasts.push(Toast::new(
            "Payment Successful",
            format!("You now have access to {}", form.recipe_title),
        ));
    }

    pub fn payment_cancelled(&mut self) {
        if self.payment.take().is_some() {
            tracing::debug!("checkout cancelled");
        }
    }
}
