use crate::application::dashboard::WidgetEvent;
use crate::domain::launch::Kilograms;
use crate::domain::selection::{PayloadRange, SiteFilter};
use crate::error::{DashboardError, Result};
use std::io::BufRead;

/// Parses one line of a widget event script.
///
/// Recognized forms are `site <NAME|ALL>` and `payload <MIN> <MAX>`. Blank lines
/// and lines starting with `#` yield `None`.
pub fn parse_event(line: &str) -> std::result::Result<Option<WidgetEvent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match command {
        "site" => {
            if rest.is_empty() {
                return Err("site requires a name or ALL".to_string());
            }
            let Ok(filter) = rest.parse::<SiteFilter>();
            Ok(Some(WidgetEvent::SiteSelected(filter)))
        }
        "payload" => {
            let bounds: Vec<&str> = rest.split_whitespace().collect();
            let [min, max] = bounds.as_slice() else {
                return Err(format!("payload requires MIN and MAX, got '{rest}'"));
            };
            let min = parse_mass(min)?;
            let max = parse_mass(max)?;
            Ok(Some(WidgetEvent::PayloadChanged(PayloadRange::new(min, max))))
        }
        other => Err(format!("unknown event '{other}'")),
    }
}

fn parse_mass(s: &str) -> std::result::Result<Kilograms, String> {
    s.parse::<Kilograms>()
        .map_err(|e| format!("'{s}' is not a payload mass: {e}"))
}

/// Reads widget events from a line-oriented script.
pub struct EventScript<R: BufRead> {
    source: R,
}

impl<R: BufRead> EventScript<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator over the events, skipping blank and comment lines.
    pub fn events(self) -> impl Iterator<Item = Result<WidgetEvent>> {
        self.source
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => return Some(Err(DashboardError::from(e))),
                };
                parse_event(&line)
                    .map_err(|reason| DashboardError::InvalidEvent { line: i + 1, reason })
                    .transpose()
            })
    }
}
