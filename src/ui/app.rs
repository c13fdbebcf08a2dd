// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the DiscoveryController for all state.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates DiscoveryController (system clock, local session)
//!   ├─ Builds main window from components
//!   ├─ Forwards drag, click, key and button input to the Controller
//!   └─ Frame tick: poll, confirm, react to events, paint
//! ```

use gtk4::{
    gdk, prelude::*, Application, ApplicationWindow, CssProvider, EventControllerKey,
    GestureClick, GestureDrag, Orientation,
};
use std::{
    cell::{Cell, RefCell},
    path::PathBuf,
    rc::Rc,
    time::Duration,
};
use tracing::{debug, warn};

use crate::api::DryRunApi;
use crate::config::SwipeConfig;
use crate::core::{Decision, Point, SystemClock};
use crate::deck::Profile;
use crate::session::Session;
use crate::ui::{
    actions,
    components::{ActionBar, Banner, CardView},
    file_watcher::FileWatcher,
    DeckEvent, DiscoveryController,
};

/// User the desktop front end signs in as
const LOCAL_USER: &str = "local";

const ONBOARDING_HINT: &str =
    "Drag right to like, left to pass, up to super-like. Tap a card for details.";

/// How often the tuning file watcher is checked
const WATCH_INTERVAL: Duration = Duration::from_millis(500);

/// GTK4 Application for the discovery screen
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Tuning file, reloaded when it changes
    config_path: PathBuf,
    /// Deck contents, also used by "Refresh Profiles"
    profiles: Rc<Vec<Profile>>,
}

impl App {
    /// Creates a new App
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to swipe.conf (need not exist)
    /// * `profiles` - Cards to show, in order
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swipe_deck::sim::sample_deck;
    /// use swipe_deck::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(PathBuf::from("swipe.conf"), sample_deck(10))?;
    /// app.run(); // Blocks until window closes
    /// # Ok::<(), String>(())
    /// ```
    pub fn new(config_path: PathBuf, profiles: Vec<Profile>) -> Result<Self, String> {
        if profiles.is_empty() {
            return Err("No profiles to show".to_string());
        }

        let app = Application::builder()
            .application_id("com.tidynest.swipe-deck")
            .build();

        Ok(Self {
            app,
            config_path,
            profiles: Rc::new(profiles),
        })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application exits.
    pub fn run(self) {
        let config_path = self.config_path.clone();
        let profiles = self.profiles.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, config_path.clone(), profiles.clone());
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    fn load_css() {
        let Some(display) = gdk::Display::default() else {
            warn!("no display, skipping custom CSS");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, config_path: PathBuf, profiles: Rc<Vec<Profile>>) {
        let config = SwipeConfig::load_or_default(&config_path).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "using default tuning");
            SwipeConfig::default()
        });

        let session = Rc::new(RefCell::new(Session::signed_in(LOCAL_USER, LOCAL_USER)));
        let controller = Rc::new(RefCell::new(DiscoveryController::new(
            config.clone(),
            Rc::new(SystemClock::new()),
            session,
            profiles.as_ref().clone(),
        )));

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Discover")
            .default_width(config.viewport_width as i32)
            .default_height(config.viewport_height as i32)
            .build();

        let main_vbox = gtk4::Box::new(Orientation::Vertical, 0);

        let error_banner = Rc::new(Banner::new("error-banner", "Dismiss"));
        let match_banner = Rc::new(Banner::new("match-banner", "Keep swiping"));
        let onboarding_banner = Banner::new("onboarding-banner", "Got it");
        let card_view = Rc::new(CardView::new(config.viewport_width));
        let action_bar = Rc::new(ActionBar::new());
        action_bar.set_super_like_visible(config.super_like_enabled);

        main_vbox.append(onboarding_banner.widget());
        main_vbox.append(error_banner.widget());
        main_vbox.append(match_banner.widget());
        main_vbox.append(card_view.widget());
        main_vbox.append(action_bar.widget());
        window.set_child(Some(&main_vbox));

        Self::connect_card_input(&controller, &card_view);
        Self::connect_keys(&window, &controller, &card_view);

        let controller_for_press = controller.clone();
        action_bar.connect_press(move |decision| {
            controller_for_press.borrow_mut().press(decision);
        });

        if controller.borrow().needs_onboarding() {
            onboarding_banner.show(ONBOARDING_HINT);
        }
        let controller_for_onboarding = controller.clone();
        onboarding_banner.connect_dismiss(move || {
            controller_for_onboarding.borrow_mut().complete_onboarding();
        });

        let controller_for_error = controller.clone();
        error_banner.connect_dismiss(move || controller_for_error.borrow_mut().dismiss_error());

        let controller_for_match = controller.clone();
        match_banner.connect_dismiss(move || {
            controller_for_match.borrow_mut().take_match();
        });

        let controller_for_refresh = controller.clone();
        let profiles_for_refresh = profiles.clone();
        card_view.refresh_button().connect_clicked(move |_| {
            controller_for_refresh
                .borrow_mut()
                .refresh(profiles_for_refresh.as_ref().clone());
        });

        actions::setup_quit_action(app);
        actions::setup_refresh_action(app, controller.clone(), profiles);

        Self::start_config_watcher(config_path, &controller, &action_bar);

        // Frame tick drives the gesture timers and the painted card
        let controller_for_tick = controller.clone();
        window.add_tick_callback(move |_, _| {
            let mut controller = controller_for_tick.borrow_mut();
            controller.poll();
            if controller.pending_confirmations() > 0 {
                controller.flush_confirmations(&DryRunApi);
            }

            for event in controller.drain_events() {
                match event {
                    DeckEvent::Matched { .. } => {
                        if let Some(profile) = controller.matched() {
                            match_banner.show(&format!(
                                "It's a match! You and {} liked each other.",
                                profile.first_name
                            ));
                        }
                    }
                    DeckEvent::Failed { message, .. } => error_banner.show(&message),
                    DeckEvent::Decided { .. } | DeckEvent::Exhausted => {}
                }
            }

            card_view.show_profiles(controller.current_profile(), controller.next_profile());
            card_view.render(&controller.card_style(), controller.overlay_style());
            action_bar.set_sensitive(!controller.is_exhausted() && !controller.is_viewing_detail());

            glib::ControlFlow::Continue
        });

        window.present();
    }

    /// Drag on the stage moves the card; a click opens the detail view
    fn connect_card_input(controller: &Rc<RefCell<DiscoveryController>>, card_view: &Rc<CardView>) {
        let drag = GestureDrag::new();
        let drag_start = Rc::new(Cell::new(Point::default()));

        let controller_for_begin = controller.clone();
        let start_for_begin = drag_start.clone();
        drag.connect_drag_begin(move |_, x, y| {
            let point = Point::new(x, y);
            start_for_begin.set(point);
            controller_for_begin.borrow_mut().pointer_down(point);
        });

        let controller_for_update = controller.clone();
        let start_for_update = drag_start.clone();
        drag.connect_drag_update(move |_, dx, dy| {
            let start = start_for_update.get();
            controller_for_update
                .borrow_mut()
                .pointer_move(Point::new(start.x + dx, start.y + dy));
        });

        // Cancel ends the drag the same way a release does
        let controller_for_end = controller.clone();
        drag.connect_drag_end(move |_, _, _| {
            controller_for_end.borrow_mut().pointer_up();
        });
        let controller_for_cancel = controller.clone();
        drag.connect_cancel(move |_, _| {
            controller_for_cancel.borrow_mut().pointer_up();
        });

        card_view.widget().add_controller(drag);

        let click = GestureClick::new();
        let controller_for_click = controller.clone();
        let card_view_for_click = card_view.clone();
        click.connect_released(move |_, n_press, _, _| {
            if n_press == 1 && controller_for_click.borrow_mut().open_detail() {
                debug!("detail view opened");
                card_view_for_click.show_detail(true);
            }
        });
        card_view.widget().add_controller(click);

        let controller_for_close = controller.clone();
        let card_view_for_close = card_view.clone();
        card_view.close_detail_button().connect_clicked(move |_| {
            controller_for_close.borrow_mut().close_detail();
            card_view_for_close.show_detail(false);
        });
    }

    /// Arrow keys act like the buttons, Escape closes the detail view
    fn connect_keys(
        window: &ApplicationWindow,
        controller: &Rc<RefCell<DiscoveryController>>,
        card_view: &Rc<CardView>,
    ) {
        let key_controller = EventControllerKey::new();
        let controller = controller.clone();
        let card_view = card_view.clone();

        key_controller.connect_key_pressed(move |_, key, _code, _modifier| {
            let decision = match key {
                gdk::Key::Left => Decision::Pass,
                gdk::Key::Right => Decision::Like,
                gdk::Key::Up => Decision::SuperLike,
                gdk::Key::Escape => {
                    controller.borrow_mut().close_detail();
                    card_view.show_detail(false);
                    return glib::Propagation::Stop;
                }
                _ => return glib::Propagation::Proceed,
            };

            controller.borrow_mut().press(decision);
            glib::Propagation::Stop
        });

        window.add_controller(key_controller);
    }

    /// Applies swipe.conf edits while the window is open
    fn start_config_watcher(
        config_path: PathBuf,
        controller: &Rc<RefCell<DiscoveryController>>,
        action_bar: &Rc<ActionBar>,
    ) {
        let watcher = match FileWatcher::new(config_path) {
            Ok(watcher) => watcher,
            Err(e) => {
                debug!(error = %e, "tuning file not watched");
                return;
            }
        };

        let controller = controller.clone();
        let action_bar = action_bar.clone();

        glib::timeout_add_local(WATCH_INTERVAL, move || {
            if watcher.check_for_changes() {
                match SwipeConfig::load(watcher.path()) {
                    Ok(config) => {
                        debug!(path = %watcher.path().display(), "tuning reloaded");
                        action_bar.set_super_like_visible(config.super_like_enabled);
                        controller.borrow_mut().set_config(config);
                    }
                    Err(e) => warn!(error = %e, "ignoring invalid tuning file"),
                }
            }
            glib::ControlFlow::Continue
        });
    }
}
