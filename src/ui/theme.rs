/// Design tokens for Stagehand CLI output.
///
/// All colors and icons used by views must be sourced from this module.
pub mod colors {
    use crossterm::style::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "🚀";
    pub const LINK: &str = "🔗";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "->";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const LINK: &str = "[URL]";
}
