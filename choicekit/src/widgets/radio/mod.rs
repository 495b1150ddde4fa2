//! Option group widget: a themed set of mutually exclusive choices.

mod events;
mod render;
mod state;
mod style;

use std::fmt;
use std::sync::Arc;

use choicekit_dom::FocusSource;

use crate::config::OptionGroupConfig;

pub use state::SelectionState;
pub use style::{
    group_spacing, resolve_option_style, Corner, GroupSpacing, OptionStyle, OptionVisualState,
    CHECKED_MARK, UNCHECKED_MARK,
};

/// Shown as the only option when the host supplies none.
pub const PLACEHOLDER: &str = "No options to select.";

/// Called with the newly selected index after the user changes the selection.
pub type ChangeHandler = Arc<dyn Fn(usize) + Send + Sync>;

/// A radio-button group.
///
/// Owns the selection: user clicks and keys move it and notify the change
/// handler, while [`update`](Self::update) applies the host's value under the
/// reconciliation rule of [`SelectionState::reconcile`].
///
/// # Example
///
/// ```ignore
/// let mut group = OptionGroup::new("fruit", OptionGroupConfig::new(["Apple", "Pear"]))
///     .on_change(|index| log::info!("picked {index}"));
/// let root = group.view();
/// // feed toolkit events back in
/// group.handle_event(&event);
/// ```
pub struct OptionGroup {
    id: String,
    config: OptionGroupConfig,
    state: SelectionState,
    /// Focused option and how it got focus.
    focus: Option<(usize, FocusSource)>,
    help_open: bool,
    on_change: Option<ChangeHandler>,
}

impl OptionGroup {
    pub fn new(id: impl Into<String>, config: OptionGroupConfig) -> Self {
        let id = id.into();
        log::debug!(
            "option group '{id}': mounted with {} options, value {:?}",
            config.options.len(),
            config.initial_value
        );
        Self {
            id,
            state: SelectionState::new(config.initial_value),
            config,
            focus: None,
            help_open: false,
            on_change: None,
        }
    }

    /// Set the change handler.
    pub fn on_change(mut self, handler: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Replace the change handler with a shared one.
    pub fn set_on_change(&mut self, handler: ChangeHandler) {
        self.on_change = Some(handler);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &OptionGroupConfig {
        &self.config
    }

    /// Options as displayed; a single placeholder when none were supplied.
    pub fn options(&self) -> Vec<String> {
        if self.config.options.is_empty() {
            vec![PLACEHOLDER.to_string()]
        } else {
            self.config.options.clone()
        }
    }

    /// Whether input is ignored. Always true without real options.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled || self.config.options.is_empty()
    }

    /// The selected index, if it names one of the current options.
    pub fn selected(&self) -> Option<usize> {
        self.state
            .selected()
            .filter(|&index| index < self.config.options.len())
    }

    /// The option with keyboard or pointer focus, if any. A disabled group
    /// holds no focus.
    pub fn focused(&self) -> Option<usize> {
        if self.is_disabled() {
            return None;
        }
        self.focus.map(|(index, _)| index)
    }

    /// Whether the focused option should draw its focus highlight.
    pub fn focus_visible(&self) -> bool {
        !self.is_disabled() && self.focus.is_some_and(|(_, source)| source.is_visible())
    }

    /// Select `index` as if the user picked it.
    ///
    /// Ignored when disabled or out of range. The state is updated before the
    /// change handler runs, and the handler only runs on an actual change.
    pub fn select(&mut self, index: usize) -> bool {
        if self.is_disabled() || index >= self.config.options.len() {
            log::trace!("option group '{}': select({index}) ignored", self.id);
            return false;
        }
        if !self.state.select(index) {
            return false;
        }
        log::debug!("option group '{}': selected {index}", self.id);
        if let Some(handler) = &self.on_change {
            handler(index);
        }
        true
    }

    /// Apply new host configuration.
    ///
    /// The host's value replaces the selection only when it changed since the
    /// last update and differs from the current selection. Returns true if the
    /// selection changed. Never calls the change handler.
    pub fn update(&mut self, config: OptionGroupConfig) -> bool {
        let changed = self.state.reconcile(config.initial_value);
        self.config = config;
        if let Some((index, _)) = self.focus {
            if self.is_disabled() || index >= self.config.options.len() {
                self.focus = None;
                self.help_open = false;
            }
        }
        changed
    }

    /// Force the selection to `value` regardless of previous host values.
    pub fn reset(&mut self, value: Option<usize>) -> bool {
        log::debug!("option group '{}': reset to {value:?}", self.id);
        self.state.reset(value)
    }

    pub(crate) fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{index}", self.id)
    }

    pub(crate) fn help_id(&self) -> String {
        format!("{}-label-help", self.id)
    }

    /// Option index for an element id produced by this group.
    pub(crate) fn option_index(&self, target: &str) -> Option<usize> {
        let rest = target.strip_prefix(&self.id)?.strip_prefix("-opt-")?;
        let index: usize = rest.parse().ok()?;
        (index < self.config.options.len().max(1)).then_some(index)
    }
}

impl fmt::Debug for OptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionGroup")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("focus", &self.focus)
            .field("help_open", &self.help_open)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
