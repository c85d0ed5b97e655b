/// States of the basic URL parser.
///
/// Parsing normally starts in `SchemeStart`. Setters re-enter the machine in
/// the state that owns their component (`Host`, `Port`, `Query`, ...), which
/// is why this type is public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    SchemeStart,
    /// Accumulates `[a-z0-9+.-]` until `:`
    Scheme,
    /// Input without a scheme, resolved against the base
    NoScheme,
    SpecialRelativeOrAuthority,
    PathOrAuthority,
    /// Relative reference against a special, non-file base
    Relative,
    RelativeSlash,
    SpecialAuthoritySlashes,
    SpecialAuthorityIgnoreSlashes,
    /// Userinfo up to the last `@`
    Authority,
    Host,
    /// Like `Host`, but a `:` is refused instead of starting a port
    Hostname,
    Port,
    File,
    FileSlash,
    /// Host of a `file:` URL, where a drive letter is a path instead
    FileHost,
    PathStart,
    Path,
    /// Path of a URL that cannot be a base (`mailto:`, `data:`, ...)
    OpaquePath,
    Query,
    Fragment,
}
