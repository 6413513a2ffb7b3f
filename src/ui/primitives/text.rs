use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Meaning of a piece of output, mapped to a theme color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => theme::colors::SUCCESS,
            Tone::Error => theme::colors::ERROR,
            Tone::Warning => theme::colors::WARNING,
            Tone::Info => theme::colors::INFO,
            Tone::Dim => theme::colors::DIM,
        }
    }
}

/// Text rendered plain when color is off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Option<Tone>,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Some(Tone::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Some(Tone::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Some(Tone::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Some(Tone::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Some(Tone::Dim))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.tone.is_none() && !self.bold) {
            return self.text.clone();
        }
        let mut styled = self.text.as_str().stylize();
        if let Some(tone) = self.tone {
            styled = styled.with(tone.color());
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}
