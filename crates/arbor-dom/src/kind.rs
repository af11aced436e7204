//! Node kind tags
//!
//! Closed set of kind discriminators plus the legacy DOM-Level-1 numeric
//! code each kind reports to compatibility consumers.

/// Kind tag identifying a node variant.
///
/// Immutable after construction. `Script` and `Style` exist so consumers
/// can distinguish raw-text elements without a tag-name comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Generic element
    Tag,
    /// `<script>` element
    Script,
    /// `<style>` element
    Style,
    /// Processing instruction or doctype declaration
    ProcessingInstruction,
    /// Text node
    Text,
    /// Character-data section
    CData,
    /// Comment
    Comment,
    /// Document root
    Root,
}

impl NodeKind {
    /// DOM-Level-1 numeric node type for legacy consumers.
    ///
    /// Element-like kinds and processing instructions report 1, text 3,
    /// character data 4, comments 8, the document root 9.
    #[inline]
    pub fn dom_code(self) -> u8 {
        match self {
            Self::Tag | Self::Script | Self::Style | Self::ProcessingInstruction => 1,
            Self::Text => 3,
            Self::CData => 4,
            Self::Comment => 8,
            Self::Root => 9,
        }
    }

    /// Whether this kind is element-like (tag, script, or style).
    #[inline]
    pub fn is_element_kind(self) -> bool {
        matches!(self, Self::Tag | Self::Script | Self::Style)
    }

    /// Kind for an element with the given tag name.
    ///
    /// "script" and "style" get their specialized kinds; anything else
    /// is a plain tag.
    pub fn for_tag_name(name: &str) -> Self {
        match name {
            "script" => Self::Script,
            "style" => Self::Style,
            _ => Self::Tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_codes() {
        assert_eq!(NodeKind::Tag.dom_code(), 1);
        assert_eq!(NodeKind::Script.dom_code(), 1);
        assert_eq!(NodeKind::Style.dom_code(), 1);
        assert_eq!(NodeKind::ProcessingInstruction.dom_code(), 1);
        assert_eq!(NodeKind::Text.dom_code(), 3);
        assert_eq!(NodeKind::CData.dom_code(), 4);
        assert_eq!(NodeKind::Comment.dom_code(), 8);
        assert_eq!(NodeKind::Root.dom_code(), 9);
    }

    #[test]
    fn test_kind_for_tag_name() {
        assert_eq!(NodeKind::for_tag_name("script"), NodeKind::Script);
        assert_eq!(NodeKind::for_tag_name("style"), NodeKind::Style);
        assert_eq!(NodeKind::for_tag_name("div"), NodeKind::Tag);
        // Specialization is by exact name at construction
        assert_eq!(NodeKind::for_tag_name("SCRIPT"), NodeKind::Tag);
    }
}
