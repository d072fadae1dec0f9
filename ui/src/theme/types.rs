use crate::theme::color::{Color, ColorSequence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node of the style tree.
///
/// Every node has a patch type carrying the subset of fields present in an
/// external definition. Merging a patch overwrites exactly those fields.
pub trait StyleNode {
    type Patch;

    /// Overwrite the fields carried by `patch`, keep everything else.
    fn merge(&mut self, patch: Self::Patch);

    /// Visit every color token below this node with its dotted key path.
    fn walk(&self, path: &str, visit: &mut dyn FnMut(&str, &Color));
}

impl StyleNode for Color {
    type Patch = Color;

    fn merge(&mut self, patch: Color) {
        *self = patch;
    }

    fn walk(&self, path: &str, visit: &mut dyn FnMut(&str, &Color)) {
        visit(path, self);
    }
}

impl StyleNode for ColorSequence {
    type Patch = ColorSequence;

    fn merge(&mut self, patch: ColorSequence) {
        *self = patch;
    }

    fn walk(&self, path: &str, visit: &mut dyn FnMut(&str, &Color)) {
        for (index, color) in self.iter().enumerate() {
            visit(&format!("{path}[{index}]"), color);
        }
    }
}

impl StyleNode for bool {
    type Patch = bool;

    fn merge(&mut self, patch: bool) {
        *self = patch;
    }

    fn walk(&self, _path: &str, _visit: &mut dyn FnMut(&str, &Color)) {}
}

// Keyed palettes merge per key so a definition can add a single resource.
impl StyleNode for BTreeMap<String, ColorSequence> {
    type Patch = BTreeMap<String, ColorSequence>;

    fn merge(&mut self, patch: Self::Patch) {
        self.extend(patch);
    }

    fn walk(&self, path: &str, visit: &mut dyn FnMut(&str, &Color)) {
        for (key, colors) in self {
            colors.walk(&format!("{path}.{key}"), visit);
        }
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

// Declares a style group together with its patch type and StyleNode impl.
macro_rules! style_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $patch:ident {
            $(
                $(#[doc = $doc:literal])*
                pub $field:ident: $ty:ty => $key:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Partial [`", stringify!($name), "`] decoded from an external definition.")]
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        pub struct $patch {
            $(
                #[serde(rename = $key, default)]
                pub $field: Option<<$ty as StyleNode>::Patch>,
            )*
        }

        impl StyleNode for $name {
            type Patch = $patch;

            fn merge(&mut self, patch: $patch) {
                $(
                    if let Some(value) = patch.$field {
                        StyleNode::merge(&mut self.$field, value);
                    }
                )*
            }

            fn walk(&self, path: &str, visit: &mut dyn FnMut(&str, &Color)) {
                $(
                    StyleNode::walk(&self.$field, &child_path(path, $key), visit);
                )*
            }
        }
    };
}

style_group! {
    /// Root of the style tree.
    pub struct Style / StylePatch {
        pub body: Body => "body",
        pub frame: Frame => "frame",
        pub info: Info => "info",
        pub views: Views => "views",
    }
}

style_group! {
    /// Global colors of the application body.
    pub struct Body / BodyPatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
        pub logo_color: Color => "logoColor",
    }
}

style_group! {
    /// Styles of the frame surrounding every view.
    pub struct Frame / FramePatch {
        pub title: Title => "title",
        pub border: Border => "border",
        pub menu: Menu => "menu",
        pub crumb: Crumb => "crumbs",
        pub status: Status => "status",
    }
}

style_group! {
    /// Per-view styles.
    pub struct Views / ViewsPatch {
        pub table: Table => "table",
        pub xray: Xray => "xray",
        pub charts: Charts => "charts",
        pub yaml: Yaml => "yaml",
        pub log: Log => "logs",
    }
}

style_group! {
    /// Colors used to flag resource status changes.
    pub struct Status / StatusPatch {
        pub new_color: Color => "newColor",
        pub modify_color: Color => "modifyColor",
        pub add_color: Color => "addColor",
        pub error_color: Color => "errorColor",
        pub highlight_color: Color => "highlightColor",
        pub kill_color: Color => "killColor",
        pub completed_color: Color => "completedColor",
    }
}

style_group! {
    pub struct Log / LogPatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
    }
}

style_group! {
    pub struct Yaml / YamlPatch {
        pub key_color: Color => "keyColor",
        pub value_color: Color => "valueColor",
        pub colon_color: Color => "colonColor",
    }
}

style_group! {
    /// View title bar.
    pub struct Title / TitlePatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
        pub highlight_color: Color => "highlightColor",
        pub counter_color: Color => "counterColor",
        pub filter_color: Color => "filterColor",
    }
}

style_group! {
    /// Cluster info panel.
    pub struct Info / InfoPatch {
        pub section_color: Color => "sectionColor",
        pub fg_color: Color => "fgColor",
    }
}

style_group! {
    pub struct Border / BorderPatch {
        pub fg_color: Color => "fgColor",
        /// Border of the focused view.
        pub focus_color: Color => "focusColor",
    }
}

style_group! {
    /// Breadcrumbs.
    pub struct Crumb / CrumbPatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
        pub active_color: Color => "activeColor",
    }
}

style_group! {
    /// Resource tables.
    pub struct Table / TablePatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
        pub cursor_color: Color => "cursorColor",
        /// Rows marked for a bulk action.
        pub mark_color: Color => "markColor",
        pub header: TableHeader => "header",
    }
}

style_group! {
    pub struct TableHeader / TableHeaderPatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
        /// Indicator of the sorted column.
        pub sorter_color: Color => "sorterColor",
    }
}

style_group! {
    /// Tree (xray) view.
    pub struct Xray / XrayPatch {
        pub fg_color: Color => "fgColor",
        pub bg_color: Color => "bgColor",
        pub cursor_color: Color => "cursorColor",
        pub graphic_color: Color => "graphicColor",
        pub show_icons: bool => "showIcons",
    }
}

style_group! {
    pub struct Menu / MenuPatch {
        pub fg_color: Color => "fgColor",
        pub key_color: Color => "keyColor",
        pub num_key_color: Color => "numKeyColor",
    }
}

style_group! {
    /// Pulse dials and charts.
    pub struct Charts / ChartsPatch {
        pub bg_color: Color => "bgColor",
        pub dial_bg_color: Color => "dialBgColor",
        pub chart_bg_color: Color => "chartBgColor",
        pub default_dial_colors: ColorSequence => "defaultDialColors",
        pub default_chart_colors: ColorSequence => "defaultChartColors",
        /// Palettes overriding the default chart colors for one resource.
        pub resource_colors: BTreeMap<String, ColorSequence> => "resourceColors",
    }
}

impl Charts {
    /// Palette for a resource, falling back to the default chart colors.
    pub fn colors_for(&self, resource: &str) -> &ColorSequence {
        self.resource_colors
            .get(resource)
            .unwrap_or(&self.default_chart_colors)
    }
}

impl Style {
    /// Every color token in the tree, keyed by its dotted document path.
    pub fn color_tokens(&self) -> Vec<(String, Color)> {
        let mut tokens = Vec::new();
        self.walk("", &mut |path: &str, color: &Color| {
            tokens.push((path.to_string(), color.clone()))
        });
        tokens
    }
}
