use serde_json::Value;

use super::Document;

/// Copy of `document` with every series' `data` removed, for diagnostics.
#[must_use]
pub fn debug_view(document: &Document) -> Document {
    let mut view = document.clone();
    if let Some(Value::Array(series)) = view.get_mut("series") {
        for record in series.iter_mut().filter_map(Value::as_object_mut) {
            record.shift_remove("data");
        }
    }
    view
}
