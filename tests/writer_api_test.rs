//! Writer API tests.
//!
//! Generating whole documents through the public API: code outlines,
//! nested HTML and shared buffers.

use textwriter::{HtmlWriter, IndentWriter, WriterConfig};

// ============================================================================
// Code Generation
// ============================================================================

fn class_outline(w: &mut IndentWriter) {
    w.write_line("class ClassName")
        .write_line("{")
        .indent()
        .write_line("public int SomeValue { get; set; }")
        .write_line("public int SomeMethod(int value) {")
        .indent()
        .write_line("return value * 2;")
        .outdent()
        .write_line("}")
        .outdent()
        .write_line("}");
}

#[test]
fn test_explicit_indent_matches_blocks() {
    let mut explicit = IndentWriter::new();
    class_outline(&mut explicit);

    let mut blocks = IndentWriter::new();
    blocks.write_line("class ClassName").block_curly(|b| {
        b.write_line("public int SomeValue { get; set; }")
            .write("public int SomeMethod(int value) ")
            .block_curly(|b| {
                b.write_line("return value * 2;");
            });
    });

    assert_eq!(explicit.as_str(), blocks.as_str());
    assert_eq!(explicit.depth(), 0);
    assert_eq!(blocks.depth(), 0);
}

#[test]
fn test_recursive_generator() {
    struct Node {
        name: &'static str,
        children: Vec<Node>,
    }

    fn emit(w: &mut IndentWriter, node: &Node) {
        if node.children.is_empty() {
            w.empty_block(&format!("{} [", node.name), "]");
            return;
        }
        w.block(&format!("{} [", node.name), "]", |w| {
            for child in &node.children {
                emit(w, child);
            }
        });
    }

    let tree = Node {
        name: "root",
        children: vec![
            Node {
                name: "a",
                children: vec![Node {
                    name: "b",
                    children: vec![],
                }],
            },
            Node {
                name: "c",
                children: vec![],
            },
        ],
    };

    let mut w = IndentWriter::new();
    emit(&mut w, &tree);

    let expected = "\
root [
    a [
        b []
    ]
    c []
]
";
    assert_eq!(w.as_str(), expected);
}

#[test]
fn test_two_space_config() {
    let mut w = IndentWriter::with_config(WriterConfig::default().with_indent_unit(2));
    w.block_square(|w| {
        w.write_line("1,").block_square(|w| {
            w.write_line("2");
        });
    });

    assert_eq!(w.as_str(), "[\n  1,\n  [\n    2\n  ]\n]\n");
}

#[test]
fn test_partial_unwinding() {
    let mut w = IndentWriter::new();
    w.write_line("l0")
        .indent_by(2)
        .write_line("l1")
        .indent_by(3)
        .write_line("l2")
        .indent_by(1)
        .write_line("l3")
        .outdent_by(2)
        .write_line("back to l1");

    assert_eq!(w.as_str(), "l0\n  l1\n     l2\n      l3\n  back to l1\n");
    assert_eq!(w.indent_stack(), &[2]);
}

// ============================================================================
// HTML
// ============================================================================

#[test]
fn test_html_page() {
    let mut w = IndentWriter::new();
    w.write_line("<!DOCTYPE html>").html_tag("html", None, |w| {
        w.html_tag("head", None, |w| {
            w.html_line_tag("title", "Report", None)
                .html_self_closing_tag("meta", Some("charset=\"utf-8\""));
        })
        .html_tag("body", Some(""), |w| {
            w.html_anchor("top")
                .new_line(1)
                .html_line_tag("h1", "Report", Some("class=\"title\""))
                .html_empty_tag("div", Some("id=\"content\""));
        });
    });

    let expected = "\
<!DOCTYPE html>
<html>
    <head>
        <title>Report</title>
        <meta charset=\"utf-8\">
    </head>
    <body>
        <a id=\"top\"></a>
        <h1 class=\"title\">Report</h1>
        <div id=\"content\"></div>
    </body>
</html>
";
    assert_eq!(w.as_str(), expected);
}

// ============================================================================
// Shared Buffers
// ============================================================================

#[test]
fn test_writers_share_destination() {
    let mut out = String::new();

    IndentWriter::with_buffer(&mut out).html_tag("ul", None, |w| {
        w.html_line_tag("li", "one", None);
    });
    IndentWriter::with_buffer(&mut out).html_tag("ol", None, |w| {
        w.html_line_tag("li", "two", None);
    });

    assert_eq!(
        out,
        "<ul>\n    <li>one</li>\n</ul>\n<ol>\n    <li>two</li>\n</ol>\n"
    );
}

#[test]
fn test_from_parts_with_config() {
    let mut out = String::from("start\n");
    let config = WriterConfig::default().with_indent_char('.').with_indent_unit(3);

    let mut w = IndentWriter::from_parts(&mut out, config);
    w.indent().write_line("dotted");
    drop(w);

    assert_eq!(out, "start\n...dotted\n");
}
