//! Headless builder core (state/action/effect).

pub mod action;
pub mod activation;
pub mod effect;
pub mod error;
pub mod naming;
pub mod natural;
pub mod outline;
pub mod services;
pub mod state;
pub mod store;
pub mod tree_ops;

pub use action::Action;
pub use activation::{Activation, ActivationTracker};
pub use effect::Effect;
pub use error::TreeError;
pub use naming::{generate_incremented_name, SuffixStyle};
pub use natural::natural_cmp;
pub use outline::{generate_outline, outline_lines, visible_rows, TreeRow};
pub use state::{normalize_forest, BuilderState};
pub use store::{DispatchResult, Store};
