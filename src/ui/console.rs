//! Console Event Sink
//!
//! Renders deploy events as human-readable progress lines.

use std::io::{self, Write};
use std::sync::Mutex;

use stagehand::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::render_event;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    /// Progress on stderr so stdout stays free for the summary
    pub fn stderr(ui: &UiContext) -> Self {
        Self::with_writer(io::stderr(), ui.verbose > 0, ui.color, ui.unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbose: bool,
        color: bool,
        unicode: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
            color,
            unicode,
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = render_event(&event, self.verbose, self.color, self.unicode) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
