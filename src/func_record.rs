// hdrsync/src/func_record.rs
//! Per-function record: what the scanners produce and the reconciler
//! compares. One shape serves both sides; only `end` means something
//! different depending on which buffer the record came from.

/// A single function, as read out of a source or header buffer.
///
/// `header` runs from the first byte of the return type through the closing
/// paren, whitespace-trimmed, and never contains braces. `end` is one past
/// the record's terminator in its own buffer: the `;` of a declaration or
/// the closing `}` of a definition body. `comment` is the anchoring block
/// comment, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncRecord {
    pub name: String,
    pub header: String,
    pub end: usize,
    pub comment: Option<String>,
}

impl FuncRecord {
    /// Render the declaration block this record contributes to a header.
    pub fn decl(&self) -> String {
        match &self.comment {
            Some(cmt) => format!("{}\n{};", cmt, self.header),
            None => format!("{};", self.header),
        }
    }

    /// Reconciliation identity: comment and header, byte for byte.
    pub fn same_decl(&self, other: &FuncRecord) -> bool {
        self.header == other.header && self.comment == other.comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(header: &str, comment: Option<&str>) -> FuncRecord {
        FuncRecord {
            name: "add".into(),
            header: header.into(),
            end: 0,
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn decl_with_comment() {
        let r = rec("int add(int a, int b)", Some("/* adds two numbers */"));
        assert_eq!(r.decl(), "/* adds two numbers */\nint add(int a, int b);");
    }

    #[test]
    fn decl_without_comment() {
        let r = rec("int add(int a, int b)", None);
        assert_eq!(r.decl(), "int add(int a, int b);");
    }

    #[test]
    fn same_decl_ignores_end() {
        let mut a = rec("int add(int a, int b)", Some("/* doc */"));
        let mut b = a.clone();
        b.end = 99;
        assert!(a.same_decl(&b));

        b.comment = Some("/* other */".into());
        assert!(!a.same_decl(&b));

        b.comment = a.comment.clone();
        b.header = "long add(int a, int b)".into();
        assert!(!a.same_decl(&b));

        a.header.clone_from(&b.header);
        assert!(a.same_decl(&b));
    }
}
