// File: ./src/extract/prompt.rs
use crate::model::KnownCategory;

/// Field labels in the order the service must number them.
pub const FIELD_LABELS: [&str; 6] = ["Date", "Time", "Duration", "Type", "Description", "Source"];

pub fn build_prompt(text: &str, target_year: i32) -> String {
    let format_lines: Vec<String> = FIELD_LABELS
        .iter()
        .zip(["<YYYY-MM-DD>", "<HH:MM>", "<value>", "<value>", "<value>", "<value>"])
        .enumerate()
        .map(|(i, (label, placeholder))| format!("    {}. {}: {}", i + 1, label, placeholder))
        .collect();

    format!(
        "Analyze the following text and image to extract structured event information for events happening in {year}:
    - Date (YYYY-MM-DD format, MUST be in {year})
    - Time (24-hour format, e.g., 14:30)
    - Duration (in hours, based on start and end times if mentioned, else default to 1 hour)
    - Type of event (use one of these exact types):
      {types}
    - A short description of the event
    - Source URL (if mentioned in text/image)

    Important: ALL dates should be in {year}. If a date is mentioned without a year, assume {year}.
    Write \"Not specified\" for any field you cannot find.

    Provide output in this format:
{format}

    Input Text: {text}
",
        year = target_year,
        types = KnownCategory::prompt_list(),
        format = format_lines.join("\n"),
        text = text,
    )
}
