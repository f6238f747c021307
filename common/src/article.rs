//! Article records and their diagram kinds.

/// Illustration drawn in the diagram panel above an article body.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DiagramKind {
    BabelFish,
    Earth,
    Towel,
    Vogons,
    HeartOfGold,
    Zaphod,
    Marvin,
    TheAnswer,
    DontPanic,
    PanGalactic,
    /// "GUIDE ENTRY" panel for articles without a bespoke diagram.
    #[default]
    Generic,
}

/// One Guide entry. Immutable and compiled in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Article {
    pub title: &'static str,
    pub body: &'static str,
    pub category: &'static str,
    pub diagram: DiagramKind,
}

impl Article {
    pub const fn new(
        title: &'static str,
        category: &'static str,
        diagram: DiagramKind,
        body: &'static str,
    ) -> Self {
        Self {
            title,
            body,
            category,
            diagram,
        }
    }
}
