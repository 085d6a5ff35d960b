//! Naive HTML slicing helpers for the table extractor.
//!
//! Deliberately not a real HTML parser: the source is one archived page
//! whose table markup is frozen, and the extractor only needs to walk
//! tbody/tr/td/a blocks. Tag-name matching is ASCII case-insensitive.

/// Iterator over the inner content of successive `<tag ...>...</tag>` blocks.
pub struct TagBlocks<'a> {
    src: &'a str,
    lower: String,
    open: String,
    close: String,
    pos: usize,
}

/// Iterate the `<tag>` blocks of `src` in document order, yielding the
/// content between each opening and closing tag. Nested blocks of the same
/// tag are not handled; the markup this runs against never nests them.
pub fn tag_blocks<'a>(src: &'a str, tag: &str) -> TagBlocks<'a> {
    TagBlocks {
        src,
        lower: src.to_ascii_lowercase(),
        open: format!("<{}", tag.to_ascii_lowercase()),
        close: format!("</{}", tag.to_ascii_lowercase()),
        pos: 0,
    }
}

/// Inner content of the first `<tag ...>...</tag>` section in `src`.
pub fn first_section<'a>(src: &'a str, tag: &str) -> Option<&'a str> {
    tag_blocks(src, tag).next()
}

fn ends_tag_name(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') | Some(b'/'))
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rel = self.lower[self.pos..].find(self.open.as_str())?;
            let at = self.pos + rel;
            // `<td` must not match `<tda...`; the tag name has to end here
            if !ends_tag_name(self.lower.as_bytes().get(at + self.open.len())) {
                self.pos = at + self.open.len();
                continue;
            }
            let open_end = self.lower[at..].find('>')? + at + 1;

            // Same boundary check on the closing tag (`</a` vs `</abbr>`)
            let mut search = open_end;
            let inner_end = loop {
                let rel = self.lower[search..].find(self.close.as_str())?;
                let at_close = search + rel;
                if ends_tag_name(self.lower.as_bytes().get(at_close + self.close.len())) {
                    break at_close;
                }
                search = at_close + self.close.len();
            };

            self.pos = match self.lower[inner_end..].find('>') {
                Some(i) => inner_end + i + 1,
                None => self.lower.len(),
            };
            return Some(&self.src[open_end..inner_end]);
        }
    }
}

/// Text of every `<a>` hyperlink inside `cell`, in document order.
/// Anchors that wrap only markup (flag icons and the like) come out empty;
/// they are kept so positional heuristics see the page's true link order.
pub fn anchor_texts(cell: &str) -> Vec<String> {
    tag_blocks(cell, "a").map(clean_text).collect()
}

/// Text before the first child tag.
pub fn leading_text(inner: &str) -> &str {
    match inner.find('<') {
        Some(i) => &inner[..i],
        None => inner,
    }
}

/// Strip tags, decode the handful of entities the page uses, collapse
/// whitespace.
pub fn clean_text(s: &str) -> String {
    collapse_ws(&decode_entities(&strip_tags(s)))
}

/// Remove every `<...>` span from the string.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Minimal entity decoding: `&nbsp;` and `&amp;` are the only entities the
/// source table contains.
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse whitespace runs into single spaces and trim.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
