//! Tests for preset resolution.

use super::defaults::API_URL;
use super::error::ConfigError;
use super::preset::{Preset, PresetOverrides, example_preset, field, resolve_preset};
use super::store::ConfigStore;
use crate::options::OptionError;

fn store(content: &str) -> ConfigStore {
    let mut store = ConfigStore::new();
    store.loads(content).unwrap();
    store
}

fn no_overrides() -> PresetOverrides {
    PresetOverrides::default()
}

mod schema {
    use super::*;

    #[test]
    fn user_and_token_are_required() {
        let error = Preset::new().validate().unwrap_err();

        assert_eq!(error.missing_fields(), [field::USER, field::TOKEN]);
    }

    #[test]
    fn url_has_a_default() {
        assert_eq!(Preset::new().api_url().as_deref(), Some(API_URL));
        assert!(Preset::is_required(field::URL));
        assert!(!Preset::is_required(field::DEVICE));
    }

    #[test]
    fn empty_device_reads_as_none() {
        let preset = Preset::from_pairs([(field::DEVICE, "")]).unwrap();

        assert_eq!(preset.api_device(), None);
    }

    #[test]
    fn example_values_form_a_valid_preset() {
        let preset = example_preset().unwrap();

        assert!(preset.validate().is_ok());
        assert_eq!(preset.api_device().as_deref(), Some("example-device"));
    }
}

mod resolution {
    use super::*;

    const CONFIG: &str = "\
[DEFAULT]
api_user=u-file
api_token=t-file

[phone]
api_device=phone
";

    #[test]
    fn resolves_default_section() {
        let preset = resolve_preset(&store(CONFIG), None, &no_overrides()).unwrap();

        assert_eq!(preset.api_url().as_deref(), Some(API_URL));
        assert_eq!(preset.api_user().as_deref(), Some("u-file"));
        assert_eq!(preset.api_token().as_deref(), Some("t-file"));
        assert_eq!(preset.api_device(), None);
    }

    #[test]
    fn resolves_named_section() {
        let preset = resolve_preset(&store(CONFIG), Some("phone"), &no_overrides()).unwrap();

        assert_eq!(preset.api_device().as_deref(), Some("phone"));
        assert_eq!(preset.api_user().as_deref(), Some("u-file"));
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = PresetOverrides {
            api_url: Some("https://push.example/1/messages.json".to_string()),
            api_user: Some("u-cli".to_string()),
            api_device: Some("tablet".to_string()),
            ..Default::default()
        };

        let preset = resolve_preset(&store(CONFIG), Some("phone"), &overrides).unwrap();

        assert_eq!(
            preset.api_url().as_deref(),
            Some("https://push.example/1/messages.json")
        );
        assert_eq!(preset.api_user().as_deref(), Some("u-cli"));
        assert_eq!(preset.api_token().as_deref(), Some("t-file"));
        assert_eq!(preset.api_device().as_deref(), Some("tablet"));
    }

    #[test]
    fn overrides_alone_are_enough() {
        let overrides = PresetOverrides {
            api_user: Some("u".to_string()),
            api_token: Some("t".to_string()),
            ..Default::default()
        };

        let preset = resolve_preset(&ConfigStore::new(), None, &overrides).unwrap();

        assert_eq!(preset.api_user().as_deref(), Some("u"));
    }

    #[test]
    fn missing_credentials_fail() {
        let result = resolve_preset(&ConfigStore::new(), None, &no_overrides());

        let error = result.unwrap_err();
        assert!(error.is_missing_values());
        assert!(matches!(
            error,
            ConfigError::Option(OptionError::MissingValues { kind: "Preset", .. })
        ));
    }

    #[test]
    fn missing_token_is_reported_alone() {
        let result = resolve_preset(&store("api_user=u\n"), None, &no_overrides());

        match result {
            Err(ConfigError::Option(error)) => {
                assert_eq!(error.missing_fields(), [field::TOKEN]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_preset_fails() {
        let result = resolve_preset(&store(CONFIG), Some("tablet"), &no_overrides());

        assert!(matches!(result, Err(ConfigError::UnknownPreset(_))));
    }

    #[test]
    fn store_is_not_modified() {
        let store = store(CONFIG);
        let before = store.clone();
        let overrides = PresetOverrides {
            api_user: Some("u-cli".to_string()),
            ..Default::default()
        };

        resolve_preset(&store, None, &overrides).unwrap();

        assert_eq!(store, before);
    }
}

mod overrides {
    use super::*;

    #[test]
    fn none_leaves_value_untouched() {
        let mut preset = Preset::from_pairs([(field::USER, "u")]).unwrap();

        no_overrides().apply(&mut preset).unwrap();

        assert_eq!(preset.api_user().as_deref(), Some("u"));
        assert!(!preset.is_set(field::TOKEN));
    }

    #[test]
    fn empty_string_is_applied() {
        let mut preset = Preset::from_pairs([(field::DEVICE, "phone")]).unwrap();
        let overrides = PresetOverrides {
            api_device: Some(String::new()),
            ..Default::default()
        };

        overrides.apply(&mut preset).unwrap();

        assert_eq!(preset.api_device(), None);
    }
}
