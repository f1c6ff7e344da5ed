use super::USE_COLOR;
use owo_colors::OwoColorize;
use trackdeck_engine::Segment;

/// Paint matched spans for the console, leaving the rest untouched.
pub fn paint_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.matched && *USE_COLOR {
                format!("{}", segment.text.black().on_yellow())
            } else {
                segment.text.clone()
            }
        })
        .collect()
}
