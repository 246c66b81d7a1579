use crate::types::{Cue, RawCaptions};

/// Format milliseconds as an SRT `HH:MM:SS,mmm` timestamp
pub fn format_timestamp(millis: u64) -> String {
    let hours = millis / 3_600_000;
    let mins = (millis % 3_600_000) / 60_000;
    let secs = (millis % 60_000) / 1_000;
    let ms = millis % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

/// Render cues as numbered SRT blocks
pub fn format_srt(cues: &[Cue]) -> RawCaptions {
    let mut output = String::new();

    for (i, cue) in cues.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(cue.start_ms),
            format_timestamp(cue.end_ms)
        ));
        output.push_str(&cue.text);
        output.push_str("\n\n");
    }

    RawCaptions::new(output)
}
