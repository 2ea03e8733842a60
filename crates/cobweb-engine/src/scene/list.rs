use super::{DrawCmd, Layer};

/// A single recorded draw item: layer tag + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so a scene reusing one list across
///   frames stops allocating once warmed
///
/// Commands replay in insertion order; recorders are expected to push
/// back-to-front.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items, keeping capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion (= paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command tagged with `layer`.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        self.items.push(DrawItem { layer, cmd });
    }

    /// Number of recorded items tagged with `layer`.
    pub fn layer_len(&self, layer: Layer) -> usize {
        self.items.iter().filter(|item| item.layer == layer).count()
    }

    /// Iterates the commands recorded for `layer`, in paint order.
    pub fn layer_cmds(&self, layer: Layer) -> impl Iterator<Item = &DrawCmd> {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::SegmentCmd;

    fn seg(x: f32) -> DrawCmd {
        DrawCmd::Segment(SegmentCmd::new(
            Vec2::new(x, 0.0),
            Vec2::new(x, 1.0),
            Color::WHITE,
            1.0,
        ))
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push(Layer::Face, seg(0.0));
        list.push(Layer::Hands, seg(1.0));
        list.push(Layer::Face, seg(2.0));

        let xs: Vec<f32> = list
            .items()
            .iter()
            .map(|item| match &item.cmd {
                DrawCmd::Segment(s) => s.start.x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn layer_accounting() {
        let mut list = DrawList::new();
        list.push(Layer::Face, seg(0.0));
        list.push(Layer::Face, seg(1.0));
        list.push(Layer::Web, seg(2.0));

        assert_eq!(list.layer_len(Layer::Face), 2);
        assert_eq!(list.layer_len(Layer::Web), 1);
        assert_eq!(list.layer_len(Layer::Overlay), 0);
        assert_eq!(list.layer_cmds(Layer::Web).count(), 1);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push(Layer::Face, seg(0.0));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
