//! Built-in skin.
//!
//! Every builder here is a pure function of no input, so two calls always
//! produce equal trees. The palette is tuned for dark terminals.

use crate::theme::color::{Color, ColorSequence};
use crate::theme::types::*;
use std::collections::BTreeMap;

fn c(token: &str) -> Color {
    Color::new(token)
}

/// The complete default style tree.
pub fn default_style() -> Style {
    Style {
        body: body(),
        frame: frame(),
        info: info(),
        views: views(),
    }
}

pub fn body() -> Body {
    Body {
        fg_color: c("cadetblue"),
        bg_color: c("black"),
        logo_color: c("orange"),
    }
}

pub fn frame() -> Frame {
    Frame {
        title: title(),
        border: border(),
        menu: menu(),
        crumb: crumb(),
        status: status(),
    }
}

pub fn views() -> Views {
    Views {
        table: table(),
        xray: xray(),
        charts: charts(),
        yaml: yaml(),
        log: log(),
    }
}

pub fn title() -> Title {
    Title {
        fg_color: c("aqua"),
        bg_color: c("black"),
        highlight_color: c("fuchsia"),
        counter_color: c("papayawhip"),
        filter_color: c("seagreen"),
    }
}

pub fn border() -> Border {
    Border {
        fg_color: c("dodgerblue"),
        focus_color: c("lightskyblue"),
    }
}

pub fn menu() -> Menu {
    Menu {
        fg_color: c("white"),
        key_color: c("dodgerblue"),
        num_key_color: c("fuchsia"),
    }
}

pub fn crumb() -> Crumb {
    Crumb {
        fg_color: c("black"),
        bg_color: c("aqua"),
        active_color: c("orange"),
    }
}

pub fn status() -> Status {
    Status {
        new_color: c("lightskyblue"),
        modify_color: c("greenyellow"),
        add_color: c("dodgerblue"),
        error_color: c("orangered"),
        highlight_color: c("aqua"),
        kill_color: c("mediumpurple"),
        completed_color: c("lightgray"),
    }
}

pub fn info() -> Info {
    Info {
        section_color: c("white"),
        fg_color: c("orange"),
    }
}

pub fn table() -> Table {
    Table {
        fg_color: c("aqua"),
        bg_color: c("black"),
        cursor_color: c("aqua"),
        mark_color: c("palegreen"),
        header: table_header(),
    }
}

pub fn table_header() -> TableHeader {
    TableHeader {
        fg_color: c("white"),
        bg_color: c("black"),
        sorter_color: c("aqua"),
    }
}

pub fn xray() -> Xray {
    Xray {
        fg_color: c("aqua"),
        bg_color: c("black"),
        cursor_color: c("whitesmoke"),
        graphic_color: c("floralwhite"),
        show_icons: true,
    }
}

pub fn charts() -> Charts {
    Charts {
        bg_color: Color::default_color(),
        dial_bg_color: Color::default_color(),
        chart_bg_color: Color::default_color(),
        default_dial_colors: palette(&["palegreen", "orangered"]),
        default_chart_colors: palette(&["palegreen", "orangered"]),
        resource_colors: BTreeMap::new(),
    }
}

pub fn yaml() -> Yaml {
    Yaml {
        key_color: c("steelblue"),
        value_color: c("papayawhip"),
        colon_color: c("white"),
    }
}

pub fn log() -> Log {
    Log {
        fg_color: c("lightskyblue"),
        bg_color: c("black"),
    }
}

fn palette(tokens: &[&str]) -> ColorSequence {
    tokens.iter().copied().collect()
}

macro_rules! default_from {
    ($($ty:ident => $builder:ident),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    $builder()
                }
            }
        )*
    };
}

default_from! {
    Style => default_style,
    Body => body,
    Frame => frame,
    Views => views,
    Title => title,
    Border => border,
    Menu => menu,
    Crumb => crumb,
    Status => status,
    Info => info,
    Table => table,
    TableHeader => table_header,
    Xray => xray,
    Charts => charts,
    Yaml => yaml,
    Log => log,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::color::ConcreteColor;

    #[test]
    fn test_default_style_is_deterministic() {
        assert_eq!(default_style(), default_style());
    }

    #[test]
    fn test_every_leaf_is_populated_and_resolvable() {
        let tokens = default_style().color_tokens();
        assert!(!tokens.is_empty());

        for (path, color) in tokens {
            assert!(!color.as_str().is_empty(), "empty token at {path}");
            assert_ne!(
                color.resolve(),
                ConcreteColor::Unknown,
                "unresolvable default at {path}"
            );
        }
    }

    #[test]
    fn test_well_known_defaults() {
        let style = default_style();
        assert_eq!(style.body.fg_color.as_str(), "cadetblue");
        assert_eq!(style.frame.border.fg_color.as_str(), "dodgerblue");
        assert_eq!(style.frame.border.focus_color.as_str(), "lightskyblue");
        assert!(style.views.xray.show_icons);
        assert!(style.views.charts.bg_color.is_default());
    }
}
