use crate::ui::primitives::text::{ColoredText, Tone};
use crate::ui::theme::{icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Deploy,
    Link,
}

impl Icon {
    /// `(unicode, ascii)` glyphs
    fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Deploy => (icons::DEPLOY, icons_ascii::DEPLOY),
            Icon::Link => (icons::LINK, icons_ascii::LINK),
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning | Icon::Progress => Tone::Warning,
            Icon::Arrow => Tone::Dim,
            Icon::Deploy | Icon::Link => Tone::Info,
        }
    }

    pub fn render(self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        ColoredText::new(self.render(supports_unicode), Some(self.tone())).render(supports_color)
    }
}
