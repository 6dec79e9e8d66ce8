//! CSV export for table data: build the text, hand it to the browser as a
//! Blob download.

use crate::shared::table::columns::ColumnDescriptor;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Serialize the filtered+sorted record set: one header row of column labels
/// in declared order, then one row per record. Fields containing the
/// delimiter, quotes or newlines are quoted with inner quotes doubled.
pub fn build_csv<T>(columns: &[ColumnDescriptor<T>], rows: &[T]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|col| escape_csv_field(col.label))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|col| escape_csv_field(&col.value(row).display()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Trigger a client-side download of `content` under `filename`.
pub fn download_csv(filename: &str, content: &str) -> Result<(), String> {
    let blob = create_csv_blob(content)?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Temporary invisible anchor: append, click, remove.
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::columns::CellValue;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    fn columns() -> Vec<ColumnDescriptor<Row>> {
        vec![
            ColumnDescriptor::new("name", "Name", |r: &Row| {
                CellValue::Text(r.name.to_string())
            }),
            ColumnDescriptor::new("price", "Price", |r: &Row| CellValue::Number(r.price)),
        ]
    }

    #[test]
    fn test_build_csv_two_records() {
        let rows = vec![
            Row { name: "Court A", price: 50.0 },
            Row { name: "Court B", price: 75.0 },
        ];
        assert_eq!(
            build_csv(&columns(), &rows),
            "Name,Price\nCourt A,50\nCourt B,75"
        );
    }

    #[test]
    fn test_build_csv_header_only_for_empty_set() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(build_csv(&columns(), &rows), "Name,Price");
    }

    #[test]
    fn test_embedded_comma_is_quoted() {
        assert_eq!(escape_csv_field("Court A, indoor"), "\"Court A, indoor\"");
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(escape_csv_field("the \"big\" hall"), "\"the \"\"big\"\" hall\"");
    }

    #[test]
    fn test_plain_field_untouched() {
        assert_eq!(escape_csv_field("Court A"), "Court A");
    }

    #[test]
    fn test_newline_is_quoted() {
        assert_eq!(escape_csv_field("a\nb"), "\"a\nb\"");
    }
}
