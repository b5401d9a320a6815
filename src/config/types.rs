//! Theme file type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::heatmap::{ColorScheme, Symbols};
use crate::table::{Border, MarkerStyles, Theme};
use crate::term::{Color, Style};

/// Root of a theme file.
///
/// Missing sections take the built-in values. Inside a section that is
/// present, every role left out is unstyled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub table: TableStyles,
    #[serde(default)]
    pub heatmap: HeatmapStyles,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// A style as written in the theme file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

impl StyleSpec {
    pub fn new(fg: Option<&str>, bg: Option<&str>, bold: bool) -> Self {
        Self {
            fg: fg.map(str::to_string),
            bg: bg.map(str::to_string),
            bold,
        }
    }

    pub fn to_style(&self) -> Style {
        Style::new(
            self.fg.as_deref().unwrap_or(""),
            self.bg.as_deref().unwrap_or(""),
            self.bold,
        )
    }

    pub fn from_style(style: &Style) -> Self {
        Self {
            fg: style.foreground().map(|c| c.to_string()),
            bg: style.background().map(|c| c.to_string()),
            bold: style.is_bold(),
        }
    }

    /// Reject colors that the lenient parser would turn into black.
    pub fn validate(&self, role: &str) -> Result<()> {
        for value in self.fg.iter().chain(self.bg.iter()) {
            Color::parse(value).map_err(|_| Error::InvalidRole {
                role: role.to_string(),
                value: value.clone(),
            })?;
        }
        Ok(())
    }
}

/// Styles of one row kind, keyed by role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkerStyleSpecs {
    #[serde(default)]
    pub text: StyleSpec,
    #[serde(default)]
    pub header: StyleSpec,
    #[serde(default)]
    pub positive: StyleSpec,
    #[serde(default)]
    pub negative: StyleSpec,
    #[serde(default)]
    pub class_a: StyleSpec,
    #[serde(default)]
    pub class_b: StyleSpec,
    #[serde(default)]
    pub class_c: StyleSpec,
    #[serde(default)]
    pub class_d: StyleSpec,
    #[serde(default)]
    pub class_e: StyleSpec,
    #[serde(default)]
    pub class_f: StyleSpec,
}

impl MarkerStyleSpecs {
    fn roles(&self) -> [(&'static str, &StyleSpec); 10] {
        [
            ("text", &self.text),
            ("header", &self.header),
            ("positive", &self.positive),
            ("negative", &self.negative),
            ("class_a", &self.class_a),
            ("class_b", &self.class_b),
            ("class_c", &self.class_c),
            ("class_d", &self.class_d),
            ("class_e", &self.class_e),
            ("class_f", &self.class_f),
        ]
    }

    pub fn to_styles(&self) -> MarkerStyles {
        MarkerStyles {
            text: self.text.to_style(),
            header: self.header.to_style(),
            positive: self.positive.to_style(),
            negative: self.negative.to_style(),
            classes: [
                self.class_a.to_style(),
                self.class_b.to_style(),
                self.class_c.to_style(),
                self.class_d.to_style(),
                self.class_e.to_style(),
                self.class_f.to_style(),
            ],
        }
    }

    pub fn from_styles(styles: &MarkerStyles) -> Self {
        let [a, b, c, d, e, f] = &styles.classes;
        Self {
            text: StyleSpec::from_style(&styles.text),
            header: StyleSpec::from_style(&styles.header),
            positive: StyleSpec::from_style(&styles.positive),
            negative: StyleSpec::from_style(&styles.negative),
            class_a: StyleSpec::from_style(a),
            class_b: StyleSpec::from_style(b),
            class_c: StyleSpec::from_style(c),
            class_d: StyleSpec::from_style(d),
            class_e: StyleSpec::from_style(e),
            class_f: StyleSpec::from_style(f),
        }
    }

    fn validate(&self, section: &str) -> Result<()> {
        for (role, spec) in self.roles() {
            spec.validate(&format!("{section}.{role}"))?;
        }
        Ok(())
    }
}

/// `[table]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyles {
    #[serde(default = "default_regular")]
    pub regular: MarkerStyleSpecs,
    #[serde(default = "default_striped")]
    pub striped: MarkerStyleSpecs,
}

fn default_regular() -> MarkerStyleSpecs {
    MarkerStyleSpecs::from_styles(&Theme::default().regular)
}

fn default_striped() -> MarkerStyleSpecs {
    MarkerStyleSpecs::from_styles(&Theme::default().striped)
}

impl Default for TableStyles {
    fn default() -> Self {
        Self {
            regular: default_regular(),
            striped: default_striped(),
        }
    }
}

impl TableStyles {
    pub fn validate(&self) -> Result<()> {
        self.regular.validate("table.regular")?;
        self.striped.validate("table.striped")
    }
}

/// Bucket styles of one heat map row kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemeSpec {
    #[serde(default)]
    pub text: StyleSpec,
    #[serde(default)]
    pub a: StyleSpec,
    #[serde(default)]
    pub b: StyleSpec,
    #[serde(default)]
    pub c: StyleSpec,
    #[serde(default)]
    pub d: StyleSpec,
    #[serde(default)]
    pub e: StyleSpec,
}

impl SchemeSpec {
    pub fn to_scheme(&self) -> ColorScheme {
        ColorScheme {
            text: self.text.to_style(),
            a: self.a.to_style(),
            b: self.b.to_style(),
            c: self.c.to_style(),
            d: self.d.to_style(),
            e: self.e.to_style(),
        }
    }

    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            text: StyleSpec::from_style(&scheme.text),
            a: StyleSpec::from_style(&scheme.a),
            b: StyleSpec::from_style(&scheme.b),
            c: StyleSpec::from_style(&scheme.c),
            d: StyleSpec::from_style(&scheme.d),
            e: StyleSpec::from_style(&scheme.e),
        }
    }

    fn validate(&self, section: &str) -> Result<()> {
        for (role, spec) in [
            ("text", &self.text),
            ("a", &self.a),
            ("b", &self.b),
            ("c", &self.c),
            ("d", &self.d),
            ("e", &self.e),
        ] {
            spec.validate(&format!("{section}.{role}"))?;
        }
        Ok(())
    }
}

/// `[heatmap]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapStyles {
    #[serde(default = "default_scheme")]
    pub scheme: SchemeSpec,
    #[serde(default = "default_odd_scheme")]
    pub odd: SchemeSpec,
}

fn default_scheme() -> SchemeSpec {
    SchemeSpec::from_scheme(&ColorScheme::even())
}

fn default_odd_scheme() -> SchemeSpec {
    SchemeSpec::from_scheme(&ColorScheme::odd())
}

impl Default for HeatmapStyles {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            odd: default_odd_scheme(),
        }
    }
}

impl HeatmapStyles {
    pub fn validate(&self) -> Result<()> {
        self.scheme.validate("heatmap.scheme")?;
        self.odd.validate("heatmap.odd")
    }
}

/// Frame glyph set by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    #[default]
    Default,
    Hidden,
    Rounded,
    Thick,
    Double,
}

impl BorderKind {
    pub fn border(self) -> Border {
        match self {
            BorderKind::Default => Border::DEFAULT,
            BorderKind::Hidden => Border::HIDDEN,
            BorderKind::Rounded => Border::ROUNDED,
            BorderKind::Thick => Border::THICK,
            BorderKind::Double => Border::DOUBLE,
        }
    }
}

/// Heat map glyph set by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    #[default]
    Block,
    FilledCircle,
    RoundSquareOutlined,
    Arrow,
    Triangle,
}

impl SymbolKind {
    pub fn symbols(self) -> Symbols {
        match self {
            SymbolKind::Block => Symbols::BLOCK,
            SymbolKind::FilledCircle => Symbols::FILLED_CIRCLE,
            SymbolKind::RoundSquareOutlined => Symbols::ROUND_SQUARE_OUTLINED,
            SymbolKind::Arrow => Symbols::ARROW,
            SymbolKind::Triangle => Symbols::TRIANGLE,
        }
    }
}

/// `[layout]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub border: BorderKind,
    /// Spaces after every heat map glyph
    #[serde(default = "default_padding")]
    pub padding: usize,
    #[serde(default)]
    pub symbols: SymbolKind,
}

pub fn default_padding() -> usize {
    1
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            border: BorderKind::default(),
            padding: default_padding(),
            symbols: SymbolKind::default(),
        }
    }
}
