//! Click-to-command dispatch.
//!
//! The binding table is the single source of truth for which click triggers
//! which backend command. It is rendered into the JavaScript glue injected
//! into every page window (see [`init_script`]) and drives the tray menu
//! through [`Dispatcher`], so both surfaces stay in agreement.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ipc::{commands, elements};

/// Environment variable selecting the page profile at startup.
pub const PROFILE_ENV: &str = "MULTIWIN_PROFILE";

/// One (element id, command name) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub element_id: &'static str,
    pub command: &'static str,
}

const MAIN_BINDINGS: &[Binding] = &[
    Binding {
        element_id: elements::NEW_WINDOW,
        command: commands::NEW_WINDOW,
    },
    Binding {
        element_id: elements::NEW_WINDOW_OR_FOCUS,
        command: commands::NEW_WINDOW_OR_FOCUS,
    },
    Binding {
        element_id: elements::EFFECTS,
        command: commands::EFFECTS,
    },
    Binding {
        element_id: elements::FLOATING,
        command: commands::FLOATING,
    },
];

const OPTIONS_BINDINGS: &[Binding] = &[
    Binding {
        element_id: elements::NEW_WINDOW,
        command: commands::NEW_WINDOW,
    },
    Binding {
        element_id: elements::NEW_WINDOW_OR_FOCUS,
        command: commands::NEW_WINDOW_OR_FOCUS,
    },
    Binding {
        element_id: elements::OPTIONS,
        command: commands::OPTIONS,
    },
];

/// Page profile: the same dispatcher component with a different binding
/// table and page, selected once at startup and never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Main,
    Options,
}

impl Profile {
    /// Ordered binding table for this profile.
    pub fn bindings(&self) -> &'static [Binding] {
        match self {
            Profile::Main => MAIN_BINDINGS,
            Profile::Options => OPTIONS_BINDINGS,
        }
    }

    /// Page served to windows opened under this profile.
    pub fn page(&self) -> &'static str {
        match self {
            Profile::Main => "index.html",
            Profile::Options => "options.html",
        }
    }

    /// Read the profile from `MULTIWIN_PROFILE`, falling back to `Main`
    /// when the variable is unset or not recognized.
    pub fn from_env() -> Self {
        match std::env::var(PROFILE_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("[DISPATCH] Unknown {} value {:?}, using main", PROFILE_ENV, value);
                Profile::Main
            }),
            Err(_) => Profile::Main,
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Profile::Main),
            "options" => Ok(Profile::Options),
            other => Err(format!("unknown profile: {}", other)),
        }
    }
}

/// Answers whether an element with the given id is present, so attachment
/// can skip bindings whose element never made it into the markup.
pub trait ElementSurface {
    fn has_element(&self, element_id: &str) -> bool;
}

impl ElementSurface for [&str] {
    fn has_element(&self, element_id: &str) -> bool {
        self.iter().any(|id| *id == element_id)
    }
}

/// The invocation boundary: one method, no payload, deferred effect.
/// The dispatcher neither knows nor cares whether the far side is
/// synchronous or asynchronous.
pub trait CommandSink {
    fn send(&self, command: &str) -> Result<(), String>;
}

/// Routes clicks on attached elements to their commands, fire-and-forget.
pub struct Dispatcher<S> {
    sink: S,
    attached: Vec<Binding>,
}

impl<S: CommandSink> Dispatcher<S> {
    /// Register every binding whose element is present on the surface.
    /// Absent elements are skipped without error; attachment never panics.
    pub fn attach(sink: S, bindings: &[Binding], surface: &(impl ElementSurface + ?Sized)) -> Self {
        let attached: Vec<Binding> = bindings
            .iter()
            .copied()
            .filter(|binding| {
                let present = surface.has_element(binding.element_id);
                if !present {
                    debug!(
                        "[DISPATCH] Element #{} not present, binding skipped",
                        binding.element_id
                    );
                }
                present
            })
            .collect();
        Self { sink, attached }
    }

    /// Handle one click. Exactly one `send` per click of a bound element,
    /// with the bound command string and nothing else; the result is
    /// dropped so a failing command never disturbs later clicks.
    pub fn click(&self, element_id: &str) {
        if let Some(command) = self.command_for(element_id) {
            if let Err(e) = self.sink.send(command) {
                debug!("[DISPATCH] Command {} dropped error: {}", command, e);
            }
        }
    }

    /// Command bound to the given element, if it was attached.
    pub fn command_for(&self, element_id: &str) -> Option<&'static str> {
        self.attached
            .iter()
            .find(|binding| binding.element_id == element_id)
            .map(|binding| binding.command)
    }

    /// Bindings that survived attachment, in table order.
    pub fn attached(&self) -> &[Binding] {
        &self.attached
    }
}

/// Render the binding table into the page glue: on `DOMContentLoaded`, look
/// each element up by id and register a click listener that invokes the
/// bound command with no arguments. Missing elements are skipped so a
/// partial page never breaks the remaining registrations.
pub fn init_script(bindings: &[Binding]) -> String {
    let mut script = String::from("window.addEventListener('DOMContentLoaded', () => {\n");
    for binding in bindings {
        script.push_str(&format!(
            "  {{\n    const el = document.getElementById('{id}');\n    if (el) el.addEventListener('click', () => {{ window.__TAURI__.core.invoke('{command}'); }});\n  }}\n",
            id = binding.element_id,
            command = binding.command,
        ));
    }
    script.push_str("});\n");
    script
}
