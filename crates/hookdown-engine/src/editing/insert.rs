use super::patch::Insertion;

/// A toolbar action against the current textarea state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionInsert<'a> {
    pub content: &'a str,
    pub selection_start: usize,
    pub selection_end: usize,
    pub before: &'a str,
    pub after: &'a str,
    /// Inserted between the tokens when the selection is empty.
    pub placeholder: &'a str,
}

impl SelectionInsert<'_> {
    pub fn apply(&self) -> Insertion {
        insert_markdown(
            self.content,
            self.selection_start,
            self.selection_end,
            self.before,
            self.after,
            self.placeholder,
        )
    }
}

/// Wraps `content[selection_start..selection_end]` in `before`/`after`.
///
/// An empty selection wraps `placeholder` instead. The caret lands right
/// after the wrapped text, inside the closing token, so typing continues
/// inside the styled region. Already-wrapped text is wrapped again.
///
/// Offsets are byte offsets. They are clamped to the content length, moved
/// back to the nearest char boundary, and a reversed selection is swapped,
/// so every input produces a valid edit.
pub fn insert_markdown(
    content: &str,
    selection_start: usize,
    selection_end: usize,
    before: &str,
    after: &str,
    placeholder: &str,
) -> Insertion {
    let (start, end) = normalize_selection(content, selection_start, selection_end);
    let selected = &content[start..end];
    let text = if selected.is_empty() {
        placeholder
    } else {
        selected
    };

    let mut out = String::with_capacity(content.len() + before.len() + text.len() + after.len());
    out.push_str(&content[..start]);
    out.push_str(before);
    out.push_str(text);
    out.push_str(after);
    let changed_end = out.len();
    out.push_str(&content[end..]);

    Insertion {
        content: out,
        cursor: start + before.len() + text.len(),
        changed: start..changed_end,
    }
}

/// Clamps both offsets into `content`, snaps them to char boundaries and
/// orders them.
pub fn normalize_selection(content: &str, a: usize, b: usize) -> (usize, usize) {
    let a = floor_char_boundary(content, a);
    let b = floor_char_boundary(content, b);
    (a.min(b), a.max(b))
}

fn floor_char_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn wraps_selection_and_places_cursor_inside() {
        let r = insert_markdown("hello world", 0, 5, "**", "**", "");
        assert_eq!(r.content, "**hello** world");
        assert_eq!(r.cursor, 9);
        assert_eq!(r.changed, 0..9);
    }

    #[test]
    fn empty_selection_with_empty_placeholder() {
        let r = insert_markdown("hello", 5, 5, "*", "*", "");
        assert_eq!(r.content, "hello**");
        assert_eq!(r.cursor, 6);
    }

    #[test]
    fn empty_selection_uses_placeholder() {
        let r = insert_markdown("say ", 4, 4, "||", "||", "secret");
        assert_eq!(r.content, "say ||secret||");
        assert_eq!(r.cursor, 12);
    }

    #[test]
    fn already_wrapped_text_is_doubled() {
        let r = insert_markdown("**x**", 0, 5, "**", "**", "");
        assert_eq!(r.content, "****x****");
    }

    #[test]
    fn selection_in_the_middle_keeps_tail() {
        let r = insert_markdown("a big cat", 2, 5, "~~", "~~", "");
        assert_eq!(r.content, "a ~~big~~ cat");
        assert_eq!(r.cursor, 7);
    }

    #[rstest]
    #[case(0, 99, (0, 5))]
    #[case(99, 99, (5, 5))]
    #[case(4, 1, (1, 4))]
    fn selection_is_normalized(#[case] a: usize, #[case] b: usize, #[case] expected: (usize, usize)) {
        assert_eq!(normalize_selection("hello", a, b), expected);
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let r = insert_markdown("hi", 7, 42, "`", "`", "code");
        assert_eq!(r.content, "hi`code`");
        assert_eq!(r.cursor, 7);
    }

    #[test]
    fn offsets_inside_a_char_snap_back() {
        // "é" occupies bytes 0..2
        let r = insert_markdown("é", 1, 2, "*", "*", "");
        assert_eq!(r.content, "*é*");
        assert_eq!(r.cursor, 3);
    }

    #[test]
    fn request_struct_applies() {
        let req = SelectionInsert {
            content: "abc",
            selection_start: 1,
            selection_end: 2,
            before: "__",
            after: "__",
            placeholder: "",
        };
        assert_eq!(req.apply().content, "a__b__c");
    }
}
