//! Document-level tests for the parsing module.
//!
//! Fixtures (.md) and outline snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    Document,
    blocks::{BLOCK_DELIMITER, Block, split_blocks},
    inline::Node::{self, Bold, Hyperlink, Image, Italic, Plain},
    parse_document, snapshot,
};

fn p(s: &str) -> Node {
    Plain(s.to_owned())
}

// Fixture-based snapshot tests

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

#[test]
fn fixture_fallbacks() {
    assert_fixture("fallbacks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md);
    snapshot::invariants(&doc);

    let snap = snapshot::normalize(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Document properties

#[test]
fn empty_document_has_no_blocks() {
    assert_eq!(parse_document(""), Document::default());
    assert_eq!(parse_document("\n\n\n\n  \n\n"), Document::default());
}

#[test]
fn parsing_is_deterministic() {
    let md = "# Title\n\n*a* **b** [c](d)\n\n1. x\n2. y";
    assert_eq!(parse_document(md), parse_document(md));
}

#[test]
fn resegmenting_joined_blocks_is_stable() {
    let md = "# Title\n\n\n\n  body  \n\n\n* a\n* b\n\n";
    let blocks = split_blocks(md);
    let rejoined = blocks.join(BLOCK_DELIMITER);
    assert_eq!(parse_document(&rejoined), parse_document(md));
}

#[test]
fn headers_by_level() {
    let doc = parse_document("# Hello\n\n###### Hello\n\n#Hello");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                content: vec![p("Hello")],
                level: 1
            },
            Block::Header {
                content: vec![p("Hello")],
                level: 6
            },
            Block::Paragraph(vec![p("#Hello")]),
        ]
    );
}

#[test]
fn spaced_dashes_are_not_a_break() {
    let doc = parse_document("---\n\n- - -");
    assert_eq!(doc.blocks[0], Block::Break);
    assert_ne!(doc.blocks[1], Block::Break);
}

#[test]
fn unclosed_bold_runs_to_end() {
    let doc = parse_document("**hello");
    assert_eq!(doc.blocks, vec![Block::Paragraph(vec![Bold("hello".into())])]);
}

#[test]
fn delimiter_at_end_of_block_keeps_its_kind() {
    let doc = parse_document("hello*\n\n**");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph(vec![p("hello"), Italic(String::new())]),
            Block::Paragraph(vec![Bold(String::new())]),
        ]
    );
}

#[test]
fn four_backtick_fence_is_fully_stripped() {
    let doc = parse_document("````\ncode\n````");
    assert_eq!(doc.blocks, vec![Block::Code("\ncode\n".into())]);
}

#[test]
fn unordered_list_items() {
    let doc = parse_document("* a\n* b");
    assert_eq!(
        doc.blocks,
        vec![Block::UnorderedList(vec![vec![p("a")], vec![p("b")]])]
    );
}

#[test]
fn image_and_link_in_one_paragraph() {
    let doc = parse_document("![alt](img.png) and [link](url.com)");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph(vec![
            Image {
                content: vec![p("alt")],
                source: "img.png".into()
            },
            p(" and "),
            Hyperlink {
                content: vec![p("link")],
                target: "url.com".into()
            },
        ])]
    );
}

#[test]
fn crlf_documents_parse_like_lf() {
    assert_eq!(
        parse_document("# T\r\n\r\n* a\r\n* b"),
        parse_document("# T\n\n* a\n* b")
    );
}

#[test]
fn outline_matches_normalize() {
    let doc = parse_document("> a *b*");
    insta::assert_snapshot!(doc.outline(), @r"
    Quote
      Plain(a )
      Italic(b)
    ");
}

#[test]
#[should_panic(expected = "empty plain node")]
fn invariants_reject_empty_plain() {
    let doc = Document {
        blocks: vec![Block::Paragraph(vec![p("")])],
    };
    snapshot::invariants(&doc);
}

#[test]
#[should_panic(expected = "header level out of range")]
fn invariants_reject_deep_header() {
    let doc = Document {
        blocks: vec![Block::Header {
            content: vec![],
            level: 7,
        }],
    };
    snapshot::invariants(&doc);
}
