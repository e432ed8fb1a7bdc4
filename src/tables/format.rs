//! Source-embeddable table dump

/// Render `values` as `NAME[] = { ... };`, eight values per line
pub fn format_table(name: &str, values: &[u32]) -> String {
    let mut out = format!("{name}[] = {{\n\t");

    for (i, value) in values.iter().enumerate() {
        out.push_str(&value.to_string());
        out.push_str(", ");
        if i % 8 == 7 {
            out.push_str("\n\t");
        }
    }

    out.push_str("\n};\n");
    out
}
