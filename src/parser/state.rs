/// Authority scanner states
/// A subset of the WHATWG URL Standard states, up to the end of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Scheme start state
    SchemeStart,
    /// Scheme state
    Scheme,
    /// Authority slashes state (`//` after the scheme)
    AuthoritySlashes,
    /// Authority state (`[userinfo@]host[:port]`)
    Authority,
}
