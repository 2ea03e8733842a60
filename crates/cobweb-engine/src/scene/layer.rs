/// Coarse grouping tag for recorded draw items.
///
/// Layers do not affect paint order — insertion order does. They exist so
/// diagnostics and tests can account for what a frame produced without
/// pattern-matching every command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer {
    /// Static dial furniture: hour and minute markers.
    Face,
    /// Cobweb wires and their perimeter polygon.
    Web,
    /// The three clock hands.
    Hands,
    /// Topmost decoration, currently the center dot.
    Overlay,
}
