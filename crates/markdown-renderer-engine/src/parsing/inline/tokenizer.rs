use super::{cursor::Cursor, kinds::Delimiter, types::Node};

/// Scanner state: either collecting plain text or inside an open span.
#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    Inside(&'static Delimiter),
}

/// Splits `s` into emphasis spans.
///
/// Scans left to right. Outside a span, the two-character window at the
/// cursor is tested against [`DELIMITERS`](super::kinds::DELIMITERS) in
/// priority order; a match flushes pending plain text and opens a span.
/// Inside a span, characters accumulate until the pending text ends with the
/// opening token, which closes the span.
///
/// A span still open at end of input is flushed as its kind (`**hello` is
/// bold), even when nothing follows the delimiter.
///
/// Input shorter than two characters is returned as a single `Plain` node,
/// even when empty.
pub fn tokenize(s: &str) -> Vec<Node> {
    if s.chars().nth(1).is_none() {
        return vec![Node::Plain(s.to_owned())];
    }

    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut state = State::Outside;
    let mut span_start = cur.pos();

    while !cur.eof() {
        match state {
            State::Outside => {
                let Some(delim) = Delimiter::at(cur.rest()) else {
                    cur.bump();
                    continue;
                };
                flush_plain(&mut out, cur.since(span_start));
                cur.bump_n(delim.token.len());
                span_start = cur.pos();
                state = State::Inside(delim);
            }
            State::Inside(delim) => {
                cur.bump();
                if let Some(inner) = cur.since(span_start).strip_suffix(delim.token) {
                    out.push(delim.emphasis.wrap(inner));
                    span_start = cur.pos();
                    state = State::Outside;
                }
            }
        }
    }

    let pending = cur.since(span_start);
    match state {
        State::Outside => flush_plain(&mut out, pending),
        State::Inside(delim) => out.push(delim.emphasis.wrap(pending)),
    }
    out
}

/// Emits accumulated plain text; empty runs produce nothing.
fn flush_plain(out: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        out.push(Node::Plain(text.to_owned()));
    }
}
