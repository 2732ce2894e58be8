/// Host-independent key identifiers shared between frontends and machines.
///
/// Frontends translate their native key codes into this enum; machines map
/// the subset they care about onto emulated input lines.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    S,
    Z,
    X,
    Enter,
    Space,
    Escape,
    None,
}
