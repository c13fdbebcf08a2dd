//! Headless gesture simulator
//!
//! Replays a gesture script (see [`script`]) against a discovery controller
//! on a hand-driven clock. Used by `swipe-deck simulate` and as a
//! deterministic harness for tuning values in `swipe.conf`.
//!
//! # Example
//!
//! ```
//! use swipe_deck::api::DryRunApi;
//! use swipe_deck::config::SwipeConfig;
//! use swipe_deck::sim::{sample_deck, script::parse_script, simulate};
//!
//! let steps = parse_script("down 0 0\nmove 120 0\nup\nwait 400\n")?;
//! let trace = simulate(SwipeConfig::default(), sample_deck(2), &steps, &DryRunApi);
//! assert!(trace.iter().any(|entry| entry.to_string().contains("decided like")));
//! # Ok::<(), swipe_deck::sim::ScriptError>(())
//! ```

pub mod runner;
pub mod script;

pub use runner::{Runner, TraceEntry, TraceKind};
pub use script::{Command, ScriptError, Step};

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::DiscoveryApi;
use crate::config::SwipeConfig;
use crate::core::ManualClock;
use crate::deck::Profile;
use crate::session::Session;
use crate::ui::DiscoveryController;

const SAMPLE_NAMES: [&str; 8] = [
    "Ada", "Grace", "Linus", "Margaret", "Dennis", "Barbara", "Ken", "Frances",
];

/// User the simulator signs in as
pub const SIM_USER: &str = "sim-user";

/// `count` placeholder profiles with ids `p-1`, `p-2`, ...
pub fn sample_deck(count: usize) -> Vec<Profile> {
    (1..=count)
        .map(|n| {
            let name = SAMPLE_NAMES[(n - 1) % SAMPLE_NAMES.len()];
            let age = 24 + (n as u32 * 3) % 15;
            Profile::new(&format!("p-{}", n), name, age)
        })
        .collect()
}

/// Runs `steps` against a fresh signed-in controller and returns the trace
pub fn simulate(
    config: SwipeConfig,
    profiles: Vec<Profile>,
    steps: &[Step],
    api: &dyn DiscoveryApi,
) -> Vec<TraceEntry> {
    let clock = ManualClock::new();
    let session = Rc::new(RefCell::new(Session::signed_in(SIM_USER, "sim-token")));
    let controller = DiscoveryController::new(config, Rc::new(clock.clone()), session, profiles);

    let mut runner = Runner::new(controller, clock, api);
    runner.run(steps);
    runner.into_trace()
}

#[cfg(test)]
mod tests;
