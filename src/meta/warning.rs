//! Length hints for title and description.

use super::MetaRecord;

/// Title length above which search engines tend to truncate.
pub const TITLE_MAX_CHARS: usize = 60;

/// Description length above which search engines tend to truncate.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Collect length warnings for a record. Lengths count `char`s.
pub fn length_warnings(record: &MetaRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    if record.title.chars().count() > TITLE_MAX_CHARS {
        warnings.push(format!("Title is over about {TITLE_MAX_CHARS} chars."));
    }
    if record.description.chars().count() > DESCRIPTION_MAX_CHARS {
        warnings.push(format!(
            "Description is over about {DESCRIPTION_MAX_CHARS} chars."
        ));
    }
    warnings
}
