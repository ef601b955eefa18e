// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_plain_content(size: usize) -> String {
    let base = "# Title\n\n## Heading\n\nParagraph with some content.\n\n- Bullet point\n- Another item with a [link](https://example.com)\n\n![logo](logo.png)\n\n";
    base.repeat(size)
}

/// A page with a header and `sections` named sections, each carrying
/// subsections, regular fields and an extended field.
#[allow(dead_code)]
pub fn generate_marked_up_page(sections: usize, depth: usize) -> String {
    let mut content = String::from("---\ntitle: Benchmark\nlayout: page\n---\n\n");

    for section in 0..sections {
        content.push_str(&format!("<!-- section:s{section} -->\n"));
        content.push_str("<!-- title -->\n");
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str("<!-- sub:intro -->\nIntro paragraph for the section.\n\n");
        content.push_str("<!-- sub:details -->\n<!-- items... -->\n");
        content.push_str(&generate_nested_content(depth, 2));
        content.push_str("<!-- /items -->\n<!-- /sub -->\n\n");
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!(
        "{} Subsection Level {}\n\n",
        header_prefix, current_level
    ));
    content.push_str("Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.\n\n");

    for i in 0..3 {
        content.push_str(&format!("* Item {} at level {}\n", i, current_level));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("```html\n<!-- section -->\n<p>not a marker</p>\n```\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}
