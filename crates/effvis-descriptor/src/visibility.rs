/// Declared visibility modifier on a declaration.
///
/// Supplied by the surrounding frontend after modifier resolution; effvis
/// only consumes it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible only inside the declaring scope.
    Private,
    /// Private, additionally restricted to the declaring instance.
    PrivateToThis,
    /// Visible in the declaring class and its subclasses.
    Protected,
    /// Visible within the declaring module.
    Internal,
    /// Visible everywhere.
    Public,
    /// Declared inside a function body; unreferencable from outside it.
    Local,
}

impl Visibility {
    /// Whether a declaration with this modifier can be named outside the
    /// file it is declared in at all.
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private | Visibility::PrivateToThis)
    }
}
