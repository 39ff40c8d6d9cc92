// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n* Bullet point\n* Another [link](https://example.com)\n\n1. First\n2. Second\n\n> Quoted ~text~\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        let level = section % 6 + 1;
        content.push_str(&format!("{} Section {}\n\n", "#".repeat(level), section));
        content.push_str("Some paragraph content with multiple sentences. ");
        content.push_str("It mixes __strong__ text, _emphasis_ and ![images](img.png).\n\n");

        for i in 1..=3 {
            content.push_str(&format!("{i}. Item {i} of section {section}\n"));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_complex_markdown(500)
}
