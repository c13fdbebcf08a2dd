//! MVC Controller - Mediates between the deck model and whatever view paints it
//!
//! # Responsibilities
//!
//! - Route pointer/touch/button input to the current card's gesture controller
//! - Advance the deck optimistically when a decision is committed
//! - Give every new current card a fresh gesture controller
//! - Queue decisions for backend confirmation and surface the results
//!   (match notification, error banner)
//!
//! # Architecture
//!
//! The Controller holds the Model (deck, confirmations, session) and the
//! gesture state machine but doesn't know about GTK4 widgets. Committed
//! decisions travel from the gesture callback to the controller over an
//! mpsc channel, so the state machine never needs a handle back to the deck.

use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::{ApiError, DiscoveryApi};
use crate::config::SwipeConfig;
use crate::core::{Clock, Decision, GestureController, OverlayStyle, Phase, Point};
use crate::core::style::CardStyle;
use crate::deck::{Deck, PendingConfirmations, Profile};
use crate::session::Session;

/// Something the view should react to
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeckEvent {
    /// A card left the deck
    Decided {
        profile_id: String,
        decision: Decision,
    },
    /// The backend reported a mutual like
    Matched { profile_id: String },
    /// The backend did not confirm a decision; the card stays gone
    Failed {
        profile_id: String,
        decision: Decision,
        message: String,
    },
    /// No cards left
    Exhausted,
}

/// Discovery screen controller
pub struct DiscoveryController {
    config: SwipeConfig,
    clock: Rc<dyn Clock>,
    session: Rc<RefCell<Session>>,
    deck: Deck,
    /// Gesture state of the current card only
    gesture: GestureController,
    decisions_tx: Sender<Decision>,
    decisions_rx: Receiver<Decision>,
    confirmations: PendingConfirmations,
    events: VecDeque<DeckEvent>,
    matched: Option<Profile>,
    error_banner: Option<String>,
    viewing_detail: bool,
    /// The current press has moved the card
    dragged: bool,
    /// Deck replacement waiting for an in-flight card to be delivered
    pending_refresh: Option<Vec<Profile>>,
}

impl DiscoveryController {
    /// Creates a controller showing the first of `profiles`
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use swipe_deck::config::SwipeConfig;
    /// use swipe_deck::core::{Decision, ManualClock};
    /// use swipe_deck::deck::Profile;
    /// use swipe_deck::session::Session;
    /// use swipe_deck::ui::DiscoveryController;
    ///
    /// let clock = ManualClock::new();
    /// let session = Rc::new(RefCell::new(Session::signed_in("me", "token")));
    /// let mut controller = DiscoveryController::new(
    ///     SwipeConfig::default(),
    ///     Rc::new(clock.clone()),
    ///     session,
    ///     vec![Profile::new("p-1", "Ada", 31)],
    /// );
    ///
    /// controller.press(Decision::Like);
    /// clock.advance_ms(300);
    /// controller.poll();
    /// assert!(controller.is_exhausted());
    /// ```
    pub fn new(
        config: SwipeConfig,
        clock: Rc<dyn Clock>,
        session: Rc<RefCell<Session>>,
        profiles: Vec<Profile>,
    ) -> Self {
        let (decisions_tx, decisions_rx) = channel();
        let gesture = spawn_gesture(&config, &clock, &decisions_tx);

        Self {
            config,
            clock,
            session,
            deck: Deck::new(profiles),
            gesture,
            decisions_tx,
            decisions_rx,
            confirmations: PendingConfirmations::new(),
            events: VecDeque::new(),
            matched: None,
            error_banner: None,
            viewing_detail: false,
            dragged: false,
            pending_refresh: None,
        }
    }

    /// Pointer down / touch start on the current card
    pub fn pointer_down(&mut self, point: Point) {
        if self.input_blocked() {
            return;
        }
        self.dragged = false;
        self.gesture.begin_drag(point);
    }

    /// Pointer move / touch move
    pub fn pointer_move(&mut self, point: Point) {
        self.gesture.update_drag(point);
        if self.gesture.phase() == Phase::Dragging && !self.gesture.offset().is_zero() {
            self.dragged = true;
        }
    }

    /// Pointer up, pointer leave, touch end and touch cancel all land here
    pub fn pointer_up(&mut self) {
        self.gesture.end_drag();
    }

    /// Pass / super-like / like button
    pub fn press(&mut self, decision: Decision) {
        if self.input_blocked() {
            return;
        }
        self.gesture.trigger_action(decision);
    }

    /// Fires due gesture transitions and applies committed decisions
    ///
    /// # Returns
    ///
    /// Number of decisions applied to the deck
    pub fn poll(&mut self) -> usize {
        self.gesture.poll();

        let mut applied = 0;
        while let Ok(decision) = self.decisions_rx.try_recv() {
            self.apply_decision(decision);
            applied += 1;
        }

        if self.pending_refresh.is_some() && !self.card_in_flight() {
            if let Some(profiles) = self.pending_refresh.take() {
                self.replace_deck(profiles);
            }
        }
        applied
    }

    /// Sends every pending confirmation through `api`
    ///
    /// Failures set the error banner but never bring a card back.
    ///
    /// # Returns
    ///
    /// Number of confirmations processed
    pub fn flush_confirmations(&mut self, api: &dyn DiscoveryApi) -> usize {
        let pending = self.confirmations.drain();
        let session_handle = Rc::clone(&self.session);
        let session = session_handle.borrow();

        for entry in &pending {
            let result = if session.is_authenticated() {
                api.submit(&session, &entry.request())
            } else {
                Err(ApiError::Unauthorized)
            };

            match result {
                Ok(outcome) if outcome.is_match && entry.decision != Decision::Pass => {
                    debug!(profile_id = %entry.profile.id, "matched");
                    self.matched = Some(entry.profile.clone());
                    self.events.push_back(DeckEvent::Matched {
                        profile_id: entry.profile.id.clone(),
                    });
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(profile_id = %entry.profile.id, decision = %entry.decision,
                        submitted_at = %entry.submitted_at.format("%H:%M:%S"), error = %e,
                        "confirmation failed");
                    let message = format!(
                        "Failed to {}. Please try again later.",
                        entry.decision.verb()
                    );
                    self.error_banner = Some(message.clone());
                    self.events.push_back(DeckEvent::Failed {
                        profile_id: entry.profile.id.clone(),
                        decision: entry.decision,
                        message,
                    });
                }
            }
        }

        pending.len()
    }

    /// Opens the profile detail view
    ///
    /// Refused while the card is away from rest, and after a press that
    /// moved the card, so a drag release is never mistaken for a tap.
    pub fn open_detail(&mut self) -> bool {
        if self.deck.current().is_none() || !self.gesture.is_at_rest() || self.dragged {
            return false;
        }
        self.viewing_detail = true;
        true
    }

    pub fn close_detail(&mut self) {
        self.viewing_detail = false;
    }

    pub fn is_viewing_detail(&self) -> bool {
        self.viewing_detail
    }

    /// Replaces the deck (e.g. "Refresh Profiles")
    ///
    /// A card already flying out is delivered against the old deck first;
    /// the replacement then happens on the `poll()` that delivers it.
    pub fn refresh(&mut self, profiles: Vec<Profile>) {
        if self.card_in_flight() {
            debug!("card in flight, deferring refresh");
            self.pending_refresh = Some(profiles);
            return;
        }
        self.replace_deck(profiles);
    }

    /// A deck replacement is waiting on an in-flight card
    pub fn refresh_pending(&self) -> bool {
        self.pending_refresh.is_some()
    }

    /// Signed in but the swipe tutorial has not been shown yet
    pub fn needs_onboarding(&self) -> bool {
        self.session.borrow().needs_onboarding()
    }

    pub fn complete_onboarding(&mut self) {
        self.session.borrow_mut().complete_onboarding();
    }

    /// Applies new tuning to the current and all later cards
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.gesture.set_config(config.clone());
        self.config = config;
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn current_profile(&self) -> Option<&Profile> {
        self.deck.current()
    }

    pub fn next_profile(&self) -> Option<&Profile> {
        self.deck.next()
    }

    pub fn is_exhausted(&self) -> bool {
        self.deck.is_exhausted()
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn card_style(&self) -> CardStyle {
        self.gesture.card_style()
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        self.gesture.overlay_style()
    }

    /// When `poll()` has work to do next
    pub fn next_deadline(&self) -> Option<Duration> {
        self.gesture.next_deadline()
    }

    pub fn pending_confirmations(&self) -> usize {
        self.confirmations.len()
    }

    /// Profile of the last match, until taken
    pub fn matched(&self) -> Option<&Profile> {
        self.matched.as_ref()
    }

    /// Takes the match notification (closing the match modal)
    pub fn take_match(&mut self) -> Option<Profile> {
        self.matched.take()
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error_banner = None;
    }

    /// Takes every event raised since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<DeckEvent> {
        self.events.drain(..).collect()
    }

    /// Committed but not yet delivered
    fn card_in_flight(&self) -> bool {
        matches!(self.gesture.phase(), Phase::Animating | Phase::Resetting)
    }

    fn replace_deck(&mut self, profiles: Vec<Profile>) {
        self.deck.refresh(profiles);
        self.gesture = spawn_gesture(&self.config, &self.clock, &self.decisions_tx);
        self.viewing_detail = false;
        self.dragged = false;
    }

    fn input_blocked(&self) -> bool {
        self.viewing_detail || self.deck.is_exhausted()
    }

    fn apply_decision(&mut self, decision: Decision) {
        let Some(profile) = self.deck.advance() else {
            warn!(%decision, "decision with no current card");
            return;
        };

        debug!(profile_id = %profile.id, %decision, "card decided");
        self.events.push_back(DeckEvent::Decided {
            profile_id: profile.id.clone(),
            decision,
        });
        self.confirmations.enqueue(profile, decision);
        self.dragged = false;

        // The next card starts from a clean gesture state
        self.gesture = spawn_gesture(&self.config, &self.clock, &self.decisions_tx);

        if self.deck.is_exhausted() {
            self.events.push_back(DeckEvent::Exhausted);
        }
    }
}

fn spawn_gesture(
    config: &SwipeConfig,
    clock: &Rc<dyn Clock>,
    decisions_tx: &Sender<Decision>,
) -> GestureController {
    let tx = decisions_tx.clone();
    GestureController::new(config.clone(), Rc::clone(clock), move |decision| {
        // Receiver lives as long as the controller that owns this gesture
        let _ = tx.send(decision);
    })
}
