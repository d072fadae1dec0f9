use claims::*;
use std::fs;
use std::sync::{Arc, Mutex};
use tuiskin::SkinError;
use tuiskin::config::{AppConfig, LoggingConfig};
use tuiskin::theme::{Color, ConcreteColor, SkinFormat, Theme, ThemeListener, defaults};

// Helper modules for integration tests
mod helpers {
    use super::*;

    /// Records the body foreground seen at every notification.
    #[derive(Default)]
    pub struct Recorder {
        pub seen: Mutex<Vec<String>>,
    }

    impl ThemeListener for Recorder {
        fn theme_changed(&self, theme: &Theme) {
            self.seen
                .lock()
                .unwrap()
                .push(theme.body().fg_color.to_string());
        }
    }

    impl Recorder {
        pub fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    pub const FULL_SKIN: &str = r##"
skin:
  body:
    fgColor: "#e0def4"
    bgColor: "-"
    logoColor: rebeccapurple
  frame:
    title:
      fgColor: gold
      counterColor: "#f6c177"
    border:
      fgColor: slateblue
      focusColor: mediumpurple
    crumbs:
      activeColor: tomato
  info:
    sectionColor: "214"
  views:
    table:
      header:
        sorterColor: orange
    xray:
      showIcons: false
    charts:
      defaultDialColors: [seagreen, gold, crimson]
      resourceColors:
        cpu: [skyblue, navy]
    logs:
      fgColor: default
"##;
}

use helpers::*;

#[test]
fn test_default_and_loaded_cadetblue_resolve_identically() {
    let mut theme = Theme::new();
    assert_eq!(theme.body().fg_color.as_str(), "cadetblue");
    let from_defaults = theme.fg_color();

    assert_ok!(theme.load(b"skin:\n  body:\n    fgColor: cadetblue\n"));

    assert_eq!(theme.fg_color(), from_defaults);
    assert_eq!(theme.fg_color(), Color::new("cadetblue").resolve());
}

#[test]
fn test_focus_only_skin_keeps_border_foreground() {
    let mut theme = Theme::new();
    assert_ok!(theme.load(b"skin:\n  frame:\n    border:\n      focusColor: red\n"));

    assert_eq!(theme.border().focus_color.as_str(), "red");
    assert_eq!(theme.border().fg_color.as_str(), "dodgerblue");
}

#[test]
fn test_single_field_load_changes_nothing_else() {
    let mut theme = Theme::new();
    let before = theme.style().clone();

    assert_ok!(theme.load(b"skin:\n  views:\n    yaml:\n      colonColor: hotpink\n"));

    let mut expected = before;
    expected.views.yaml.colon_color = Color::new("hotpink");
    assert_eq!(theme.style(), &expected);
}

#[test]
fn test_full_skin_merges_every_listed_field() {
    let mut theme = Theme::new();
    assert_ok!(theme.load(FULL_SKIN.as_bytes()));

    assert_eq!(theme.body().logo_color.as_str(), "rebeccapurple");
    assert_eq!(theme.bg_color(), ConcreteColor::Transparent);
    assert_eq!(theme.title().counter_color.as_str(), "#f6c177");
    assert_eq!(theme.title().bg_color.as_str(), "black");
    assert_eq!(theme.crumb().active_color.as_str(), "tomato");
    assert_eq!(theme.crumb().fg_color.as_str(), "black");
    assert_eq!(theme.info().section_color.resolve().to_term(), tuirealm::props::Color::Indexed(214));
    assert_eq!(theme.table_header().sorter_color.as_str(), "orange");
    assert!(!theme.xray().show_icons);
    assert_eq!(theme.charts().default_dial_colors.len(), 3);
    assert_eq!(theme.charts().default_chart_colors, defaults::charts().default_chart_colors);
    assert_eq!(theme.charts().colors_for("cpu").len(), 2);
    assert_eq!(theme.log().fg_color.resolve(), ConcreteColor::Default);
}

#[test]
fn test_malformed_skins_leave_theme_untouched() {
    let mut theme = Theme::new();
    assert_ok!(theme.load(b"skin:\n  body:\n    fgColor: khaki\n"));
    let before = theme.style().clone();
    let recorder = Arc::new(Recorder::default());
    theme.add_listener(recorder.clone());

    let broken: [&[u8]; 4] = [
        b"skin: [\n",
        b"skin:\n  body:\n    fgColor: {a: 1}\n",
        b"skin:\n  frame:\n    border:\n      focusColor: red\n  views:\n    xray:\n      showIcons: maybe\n",
        b"just a string",
    ];
    for bytes in broken {
        let err = assert_err!(theme.load(bytes));
        assert!(err.is_decode(), "unexpected error kind: {err}");
        assert_eq!(theme.style(), &before);
    }

    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_listener_called_once_with_new_values() {
    let mut theme = Theme::new();
    let recorder = Arc::new(Recorder::default());
    theme.add_listener(recorder.clone());

    assert_ok!(theme.load(b"skin:\n  body:\n    fgColor: wheat\n"));

    assert_eq!(*recorder.seen.lock().unwrap(), vec!["wheat".to_string()]);
}

#[test]
fn test_removed_listener_is_never_called_again() {
    let mut theme = Theme::new();
    let recorder: Arc<Recorder> = Arc::new(Recorder::default());
    let handle: tuiskin::theme::ListenerHandle = recorder.clone();
    theme.add_listener(handle.clone());

    assert_ok!(theme.load(b"skin:\n  body:\n    fgColor: wheat\n"));
    theme.remove_listener(&handle);
    theme.remove_listener(&handle);
    assert_ok!(theme.load(b"skin:\n  body:\n    fgColor: linen\n"));
    theme.reset();

    assert_eq!(recorder.calls(), 1);
    assert_eq!(theme.listener_count(), 0);
}

#[test]
fn test_listeners_fire_in_registration_order() {
    struct Tagged(&'static str, Arc<Mutex<Vec<&'static str>>>);
    impl ThemeListener for Tagged {
        fn theme_changed(&self, _theme: &Theme) {
            self.1.lock().unwrap().push(self.0);
        }
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let mut theme = Theme::new();
    for tag in ["table", "logo", "crumbs"] {
        theme.add_listener(Arc::new(Tagged(tag, Arc::clone(&order))));
    }

    assert_ok!(theme.load(b""));

    assert_eq!(*order.lock().unwrap(), vec!["table", "logo", "crumbs"]);
}

#[test]
fn test_load_file_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("skin.yaml");
    let toml = dir.path().join("skin.toml");
    fs::write(&yaml, "skin:\n  menu: ignored\n  body:\n    bgColor: navy\n").unwrap();
    fs::write(&toml, "[skin.frame.menu]\nkeyColor = \"gold\"\n").unwrap();

    let mut theme = Theme::new();
    assert_ok!(theme.load_file(&yaml));
    assert_ok!(theme.load_file(&toml));

    assert_eq!(theme.body().bg_color.as_str(), "navy");
    assert_eq!(theme.menu().key_color.as_str(), "gold");
    assert_eq!(theme.menu().fg_color.as_str(), "white");
}

#[test]
fn test_load_file_accepts_uppercase_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skin.TOML");
    fs::write(&path, "[skin.body]\nlogoColor = \"teal\"\n").unwrap();

    let mut theme = Theme::new();
    assert_ok!(theme.load_file(&path));
    assert_eq!(theme.body().logo_color.as_str(), "teal");
}

#[test]
fn test_k9s_rooted_skin_merges() {
    let mut theme = Theme::new();
    let recorder = Arc::new(Recorder::default());
    theme.add_listener(recorder.clone());

    assert_ok!(theme.load(b"k9s:\n  body:\n    fgColor: red\n  frame:\n    border:\n      focusColor: red\n"));

    assert_eq!(theme.body().fg_color.as_str(), "red");
    assert_eq!(theme.border().focus_color.as_str(), "red");
    assert_eq!(theme.border().fg_color.as_str(), "dodgerblue");
    assert_eq!(*recorder.seen.lock().unwrap(), vec!["red".to_string()]);
}

#[test]
fn test_toml_type_mismatch_is_rejected() {
    let mut theme = Theme::new();
    let before = theme.style().clone();

    let err = assert_err!(
        theme.load_with_format(b"[skin.views.xray]\nshowIcons = \"yes\"\n", SkinFormat::Toml)
    );
    assert_matches!(err, SkinError::Toml(_));
    assert_eq!(theme.style(), &before);
}

#[test]
fn test_load_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut theme = Theme::new();

    let err = assert_err!(theme.load_file(&dir.path().join("missing.yml")));
    assert_matches!(err, SkinError::Validation(_));

    let json = dir.path().join("skin.json");
    fs::write(&json, "{}").unwrap();
    let err = assert_err!(theme.load_file(&json));
    assert_matches!(err, SkinError::Validation(_));
    assert!(err.user_message().contains("skin.json"));
}

#[test]
fn test_from_config_loads_configured_skin() {
    let dir = tempfile::tempdir().unwrap();
    let skin = dir.path().join("skin.yml");
    fs::write(&skin, "skin:\n  body:\n    logoColor: gold\n").unwrap();

    let config = AppConfig::new(Some(skin), LoggingConfig::default());
    let theme = Theme::from_config(&config);

    assert_eq!(theme.body().logo_color.as_str(), "gold");
    assert_eq!(theme.body().fg_color.as_str(), "cadetblue");
}

#[test]
fn test_from_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let missing = AppConfig::new(Some(dir.path().join("none.yml")), LoggingConfig::default());
    assert_eq!(Theme::from_config(&missing).style(), &defaults::default_style());

    let broken_path = dir.path().join("broken.yml");
    fs::write(&broken_path, "skin: [").unwrap();
    let broken = AppConfig::new(Some(broken_path), LoggingConfig::default());
    assert_eq!(Theme::from_config(&broken).style(), &defaults::default_style());
}

#[test]
fn test_shared_theme_behind_mutex() {
    let theme = Arc::new(Mutex::new(Theme::new()));

    let writer = {
        let theme = Arc::clone(&theme);
        std::thread::spawn(move || {
            theme
                .lock()
                .unwrap()
                .load(b"skin:\n  body:\n    fgColor: tan\n    bgColor: sienna\n")
        })
    };
    assert_ok!(writer.join().unwrap());

    let guard = theme.lock().unwrap();
    assert_eq!(guard.body().fg_color.as_str(), "tan");
    assert_eq!(guard.body().bg_color.as_str(), "sienna");
}
