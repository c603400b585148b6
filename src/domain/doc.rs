//! Structured doc-comment model: a `DocComment` is a sequence of blocks,
//! each a sequence of inlines, assembled from one or more raw comment
//! tokens attached to a declaration by
//! [`crate::domain::extractor::doc_assembler`] (see
//! [`crate::domain::extractor::merge`] for how consecutive/duplicate
//! comments are folded together).

use crate::domain::symbol_id::SymbolId;

/// Inline (within-paragraph) doc-comment content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    /// `\ref` / `@ref`-style cross reference. `symbol` is `None` until a
    /// post-merge resolution pass (`app::engine`) looks the reference text
    /// up against the finished Corpus and fills it in.
    Reference(String, Option<SymbolId>),
}

/// A block-level element of a doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// `\brief` summary, expected at most once per comment.
    Brief(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    List { ordered: bool, items: Vec<Vec<Inline>> },
    Quote(Vec<Inline>),
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
    DefinitionList(Vec<(String, Vec<Inline>)>),
    CodeBlock { language: Option<String>, text: String },
    Math(String),
    ThematicBreak,
    /// `\param name ...`
    Param { name: String, direction: ParamDirection, content: Vec<Inline> },
    /// `\tparam Name ...`
    TParam { name: String, content: Vec<Inline> },
    /// `\returns ...`
    Returns(Vec<Inline>),
    /// `\throws Type ...`
    Throws { exception_type: String, content: Vec<Inline> },
    /// `\pre ...`
    Precondition(Vec<Inline>),
    /// `\post ...`
    Postcondition(Vec<Inline>),
    /// `\see ...`
    See(Vec<Inline>),
    /// `\note`, `\warning`, etc.
    Admonition { kind: String, content: Vec<Inline> },
    /// `\footnote label ...`
    Footnote { label: String, content: Vec<Inline> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDirection {
    In,
    Out,
    InOut,
}

/// A fully assembled doc comment attached to one declaration. Most block
/// kinds are looked up by scanning `blocks`; `tparams`/`preconditions`/
/// `postconditions`/`sees`/`relates`/`related` are kept as separate
/// indexed lists since renderers need them addressed by position, not by
/// re-scanning the block sequence each time (mirroring `\relates`'s
/// "attach to another symbol's listing" semantics, which has no natural
/// in-sequence position).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    pub blocks: Vec<Block>,
    /// Symbols this comment documents as if declared on them too
    /// (`\relates`), resolved during the same pass as `Inline::Reference`.
    pub relates: Vec<(String, Option<SymbolId>)>,
    /// `\related` — a looser, non-normative "see also" association.
    pub related: Vec<(String, Option<SymbolId>)>,
}

impl DocComment {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.relates.is_empty() && self.related.is_empty()
    }

    pub fn brief(&self) -> Option<&[Inline]> {
        self.blocks.iter().find_map(|b| match b {
            Block::Brief(inlines) => Some(inlines.as_slice()),
            _ => None,
        })
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, ParamDirection, &[Inline])> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Param { name, direction, content } => {
                Some((name.as_str(), *direction, content.as_slice()))
            }
            _ => None,
        })
    }

    pub fn tparams(&self) -> impl Iterator<Item = (&str, &[Inline])> {
        self.blocks.iter().filter_map(|b| match b {
            Block::TParam { name, content } => Some((name.as_str(), content.as_slice())),
            _ => None,
        })
    }

    pub fn returns(&self) -> Option<&[Inline]> {
        self.blocks.iter().find_map(|b| match b {
            Block::Returns(inlines) => Some(inlines.as_slice()),
            _ => None,
        })
    }

    pub fn preconditions(&self) -> impl Iterator<Item = &[Inline]> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Precondition(inlines) => Some(inlines.as_slice()),
            _ => None,
        })
    }

    pub fn postconditions(&self) -> impl Iterator<Item = &[Inline]> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Postcondition(inlines) => Some(inlines.as_slice()),
            _ => None,
        })
    }

    pub fn sees(&self) -> impl Iterator<Item = &[Inline]> {
        self.blocks.iter().filter_map(|b| match b {
            Block::See(inlines) => Some(inlines.as_slice()),
            _ => None,
        })
    }

    /// Every inline slot across every block, mutable, for the post-merge
    /// reference-resolution pass (`app::engine`) to walk and fill in
    /// `Inline::Reference`'s `SymbolId` once the Corpus is finished.
    pub fn inlines_mut(&mut self) -> impl Iterator<Item = &mut Inline> {
        self.blocks.iter_mut().flat_map(block_inlines_mut)
    }

    /// Merge another comment's blocks in, used when a redeclaration
    /// contributes additional doc content (spec.md §4.4). The duplicate
    /// case — a second, *different* comment where one already exists for
    /// the same symbol — is handled by the caller, which keeps the first
    /// and raises a warning rather than calling this blindly.
    pub fn append(&mut self, other: DocComment) {
        self.blocks.extend(other.blocks);
        self.relates.extend(other.relates);
        self.related.extend(other.related);
    }
}

fn block_inlines_mut(block: &mut Block) -> Box<dyn Iterator<Item = &mut Inline> + '_> {
    match block {
        Block::Paragraph(v)
        | Block::Brief(v)
        | Block::Heading { content: v, .. }
        | Block::Quote(v)
        | Block::Param { content: v, .. }
        | Block::TParam { content: v, .. }
        | Block::Returns(v)
        | Block::Throws { content: v, .. }
        | Block::Precondition(v)
        | Block::Postcondition(v)
        | Block::See(v)
        | Block::Admonition { content: v, .. }
        | Block::Footnote { content: v, .. } => Box::new(v.iter_mut()),
        Block::List { items, .. } => Box::new(items.iter_mut().flatten()),
        Block::DefinitionList(entries) => Box::new(entries.iter_mut().flat_map(|(_, v)| v.iter_mut())),
        Block::CodeBlock { .. } | Block::Table { .. } | Block::Math(_) | Block::ThematicBreak => {
            Box::new(std::iter::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_and_returns_are_found_by_kind() {
        let doc = DocComment {
            blocks: vec![
                Block::Brief(vec![Inline::Text("does a thing".into())]),
                Block::Paragraph(vec![Inline::Text("more detail".into())]),
                Block::Returns(vec![Inline::Text("the thing".into())]),
            ],
            relates: vec![],
            related: vec![],
        };
        assert!(doc.brief().is_some());
        assert!(doc.returns().is_some());
        assert_eq!(doc.params().count(), 0);
    }

    #[test]
    fn append_concatenates_blocks() {
        let mut a = DocComment {
            blocks: vec![Block::Brief(vec![Inline::Text("a".into())])],
            relates: vec![],
            related: vec![],
        };
        let b = DocComment {
            blocks: vec![Block::Returns(vec![Inline::Text("b".into())])],
            relates: vec![("Other".into(), None)],
            related: vec![],
        };
        a.append(b);
        assert_eq!(a.blocks.len(), 2);
        assert_eq!(a.relates.len(), 1);
    }

    #[test]
    fn empty_doc_has_no_brief() {
        let doc = DocComment::default();
        assert!(doc.is_empty());
        assert!(doc.brief().is_none());
    }

    #[test]
    fn tparams_and_pre_post_conditions_are_found_by_kind() {
        let doc = DocComment {
            blocks: vec![
                Block::TParam { name: "T".into(), content: vec![Inline::Text("a type".into())] },
                Block::Precondition(vec![Inline::Text("x > 0".into())]),
                Block::Postcondition(vec![Inline::Text("result >= 0".into())]),
            ],
            relates: vec![],
            related: vec![],
        };
        assert_eq!(doc.tparams().count(), 1);
        assert_eq!(doc.preconditions().count(), 1);
        assert_eq!(doc.postconditions().count(), 1);
    }
}
