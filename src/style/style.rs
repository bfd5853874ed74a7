use colored::{Color, ColoredString, Colorize};
use std::str::FromStr;

bitflags::bitflags! {
    /// Text attributes a [`Style`] can apply on top of its colors.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: u16 {
        const BOLD          = 1 << 0;
        const DIMMED        = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const REVERSED      = 1 << 5;
        const HIDDEN        = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

fn attribute_from_name(name: &str) -> Option<Attributes> {
    Some(match name {
        "bold" => Attributes::BOLD,
        "dimmed" | "dim" | "faint" => Attributes::DIMMED,
        "italic" => Attributes::ITALIC,
        "underline" => Attributes::UNDERLINE,
        "blink" => Attributes::BLINK,
        "reversed" | "reverse" => Attributes::REVERSED,
        "hidden" | "concealed" => Attributes::HIDDEN,
        "strikethrough" | "crossedout" => Attributes::STRIKETHROUGH,
        _ => return None,
    })
}

fn apply_attributes(attributes: Attributes, mut text: ColoredString) -> ColoredString {
    if attributes.contains(Attributes::BOLD) {
        text = text.bold();
    }
    if attributes.contains(Attributes::DIMMED) {
        text = text.dimmed();
    }
    if attributes.contains(Attributes::ITALIC) {
        text = text.italic();
    }
    if attributes.contains(Attributes::UNDERLINE) {
        text = text.underline();
    }
    if attributes.contains(Attributes::BLINK) {
        text = text.blink();
    }
    if attributes.contains(Attributes::REVERSED) {
        text = text.reversed();
    }
    if attributes.contains(Attributes::HIDDEN) {
        text = text.hidden();
    }
    if attributes.contains(Attributes::STRIKETHROUGH) {
        text = text.strikethrough();
    }
    text
}

/// Colors and text attributes applied to a logger prefix.
///
/// `Style::new()` is plain: painting with it leaves the text untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: Attributes,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: Attributes::empty(),
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn attr(mut self, attributes: Attributes) -> Self {
        self.attributes = self.attributes.union(attributes);
        self
    }

    pub const fn bold(self) -> Self {
        self.attr(Attributes::BOLD)
    }

    pub const fn dimmed(self) -> Self {
        self.attr(Attributes::DIMMED)
    }

    pub const fn italic(self) -> Self {
        self.attr(Attributes::ITALIC)
    }

    pub const fn underline(self) -> Self {
        self.attr(Attributes::UNDERLINE)
    }

    pub const fn blink(self) -> Self {
        self.attr(Attributes::BLINK)
    }

    pub const fn reversed(self) -> Self {
        self.attr(Attributes::REVERSED)
    }

    pub const fn hidden(self) -> Self {
        self.attr(Attributes::HIDDEN)
    }

    pub const fn strikethrough(self) -> Self {
        self.attr(Attributes::STRIKETHROUGH)
    }

    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn has(&self, attributes: Attributes) -> bool {
        self.attributes.contains(attributes)
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Whether escape codes are actually written is decided by `colored`,
    /// see [`ColorMode`](super::ColorMode).
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(fg) = self.fg {
            painted = painted.color(fg);
        }
        if let Some(bg) = self.bg {
            painted = painted.on_color(bg);
        }
        apply_attributes(self.attributes, painted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStyleError {
    #[error("unknown color: {0:?}")]
    UnknownColor(String),
    #[error("unknown style component: {0:?}")]
    UnknownComponent(String),
}

fn color_from_name(name: &str) -> Option<Color> {
    Some(match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright_black" | "hiblack" => Color::BrightBlack,
        "bright_red" | "hired" => Color::BrightRed,
        "bright_green" | "higreen" => Color::BrightGreen,
        "bright_yellow" | "hiyellow" => Color::BrightYellow,
        "bright_blue" | "hiblue" => Color::BrightBlue,
        "bright_magenta" | "himagenta" => Color::BrightMagenta,
        "bright_cyan" | "hicyan" => Color::BrightCyan,
        "bright_white" | "hiwhite" => Color::BrightWhite,
        _ => return None,
    })
}

/// Parses `+` or `,` separated components, e.g. `cyan+bold` or
/// `red,on_white,underline`. An empty string is the plain style.
impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::new();
        for component in s.split(['+', ',']) {
            let component = component.trim().to_ascii_lowercase();
            if component.is_empty() || component == "plain" || component == "none" {
                continue;
            }
            if let Some(background) = component.strip_prefix("on_") {
                let color = color_from_name(background)
                    .ok_or_else(|| ParseStyleError::UnknownColor(background.to_string()))?;
                style = style.bg(color);
            } else if let Some(color) = color_from_name(&component) {
                style = style.fg(color);
            } else if let Some(attribute) = attribute_from_name(&component) {
                style = style.attr(attribute);
            } else {
                return Err(ParseStyleError::UnknownComponent(component));
            }
        }
        Ok(style)
    }
}
