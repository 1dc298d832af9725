use crate::dispatch::*;
use crate::ipc;
use crate::windows;
use std::sync::{Arc, Mutex};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct RecordingSink {
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSink {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl CommandSink for RecordingSink {
        fn send(&self, command: &str) -> Result<(), String> {
            self.sent.lock().unwrap().push(command.to_string());
            Ok(())
        }
    }

    /// Records like RecordingSink but reports failure for one command, the
    /// way a rejected invoke would.
    #[derive(Clone)]
    struct FailingSink {
        inner: RecordingSink,
        fail_on: &'static str,
    }

    impl CommandSink for FailingSink {
        fn send(&self, command: &str) -> Result<(), String> {
            self.inner.send(command)?;
            if command == self.fail_on {
                return Err(format!("backend rejected {}", command));
            }
            Ok(())
        }
    }

    fn page_surface(profile: Profile) -> Vec<&'static str> {
        profile.bindings().iter().map(|b| b.element_id).collect()
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_variant_a_effects_click_invokes_effects_once() {
            let sink = RecordingSink::default();
            let surface = page_surface(Profile::Main);
            let dispatcher = Dispatcher::attach(sink.clone(), Profile::Main.bindings(), &surface[..]);

            dispatcher.click(ipc::elements::EFFECTS);

            assert_eq!(sink.sent(), vec![ipc::commands::EFFECTS.to_string()]);
        }

        #[test]
        fn test_variant_b_options_click_invokes_options_once() {
            let sink = RecordingSink::default();
            let surface = page_surface(Profile::Options);
            let dispatcher =
                Dispatcher::attach(sink.clone(), Profile::Options.bindings(), &surface[..]);

            dispatcher.click(ipc::elements::OPTIONS);

            assert_eq!(sink.sent(), vec![ipc::commands::OPTIONS.to_string()]);
        }

        #[test]
        fn test_variant_b_has_no_effects_or_floating_bindings() {
            let sink = RecordingSink::default();
            let surface = page_surface(Profile::Options);
            let dispatcher =
                Dispatcher::attach(sink.clone(), Profile::Options.bindings(), &surface[..]);

            dispatcher.click(ipc::elements::EFFECTS);
            dispatcher.click(ipc::elements::FLOATING);

            assert!(sink.sent().is_empty());
            assert!(dispatcher.command_for(ipc::elements::EFFECTS).is_none());
        }

        #[test]
        fn test_shared_buttons_behave_identically_across_variants() {
            for profile in [Profile::Main, Profile::Options] {
                let sink = RecordingSink::default();
                let surface = page_surface(profile);
                let dispatcher = Dispatcher::attach(sink.clone(), profile.bindings(), &surface[..]);

                dispatcher.click(ipc::elements::NEW_WINDOW);
                dispatcher.click(ipc::elements::NEW_WINDOW_OR_FOCUS);

                assert_eq!(
                    sink.sent(),
                    vec![
                        ipc::commands::NEW_WINDOW.to_string(),
                        ipc::commands::NEW_WINDOW_OR_FOCUS.to_string(),
                    ]
                );
            }
        }

        #[test]
        fn test_rejected_invoke_leaves_other_handlers_functional() {
            let sink = FailingSink {
                inner: RecordingSink::default(),
                fail_on: ipc::commands::EFFECTS,
            };
            let surface = page_surface(Profile::Main);
            let dispatcher = Dispatcher::attach(sink.clone(), Profile::Main.bindings(), &surface[..]);

            dispatcher.click(ipc::elements::EFFECTS);
            dispatcher.click(ipc::elements::EFFECTS);
            dispatcher.click(ipc::elements::NEW_WINDOW);

            // All three clicks went out; the two rejections were dropped
            assert_eq!(
                sink.inner.sent(),
                vec![
                    ipc::commands::EFFECTS.to_string(),
                    ipc::commands::EFFECTS.to_string(),
                    ipc::commands::NEW_WINDOW.to_string(),
                ]
            );
        }
    }

    mod profiles {
        use super::*;

        #[test]
        fn test_profile_parsing() {
            assert_eq!("main".parse::<Profile>().unwrap(), Profile::Main);
            assert_eq!("options".parse::<Profile>().unwrap(), Profile::Options);
            assert!("nightly".parse::<Profile>().is_err());
        }

        #[test]
        fn test_profile_defaults_to_main() {
            assert_eq!(Profile::default(), Profile::Main);
        }

        #[test]
        fn test_profile_serde_roundtrip() {
            let json = serde_json::to_string(&Profile::Options).unwrap();
            assert_eq!(json, "\"options\"");
            let parsed: Profile = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, Profile::Options);
        }

        #[test]
        fn test_profile_pages() {
            assert_eq!(Profile::Main.page(), "index.html");
            assert_eq!(Profile::Options.page(), "options.html");
        }

        #[test]
        fn test_init_script_matches_profile() {
            let script = init_script(Profile::Options.bindings());
            assert!(script.contains(&format!("invoke('{}')", ipc::commands::OPTIONS)));
            assert!(!script.contains(&format!("invoke('{}')", ipc::commands::EFFECTS)));
            assert!(!script.contains(&format!("invoke('{}')", ipc::commands::FLOATING)));
        }
    }

    mod config {
        const APP_CONFIG: &str = include_str!("../tauri.conf.json");

        #[test]
        fn test_app_config_enables_macos_private_api() {
            let config: serde_json::Value = serde_json::from_str(APP_CONFIG).unwrap();
            // transparent(true) on the effects window only takes effect on
            // macOS when the private API is switched on in config
            assert_eq!(config["app"]["macOSPrivateApi"], true);
        }

        #[test]
        fn test_app_config_exposes_global_tauri() {
            let config: serde_json::Value = serde_json::from_str(APP_CONFIG).unwrap();
            // the generated page glue calls window.__TAURI__.core.invoke
            assert_eq!(config["app"]["withGlobalTauri"], true);
        }
    }

    mod labels {
        use super::*;

        #[test]
        fn test_unique_label_starts_at_window_count() {
            assert_eq!(windows::unique_label(&[]), "window-0");

            let existing = vec!["main".to_string(), "window-0".to_string()];
            assert_eq!(windows::unique_label(&existing), "window-2");
        }

        #[test]
        fn test_unique_label_probes_past_collisions() {
            // Two windows left after closures, but the counting label is taken
            let existing = vec!["main".to_string(), "window-2".to_string()];
            assert_eq!(windows::unique_label(&existing), "window-3");
        }

        #[test]
        fn test_unique_label_never_returns_existing() {
            let mut existing: Vec<String> = Vec::new();
            for _ in 0..10 {
                let label = windows::unique_label(&existing);
                assert!(!existing.contains(&label));
                existing.push(label);
            }
        }
    }
}
