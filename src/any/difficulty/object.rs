/// A difficulty object that lives inside a slice of its siblings.
///
/// Instead of holding references to its predecessors, an object only knows
/// its own index so that looking back is a plain lookup into the slice.
pub trait IDifficultyObject: Sized {
    fn idx(&self) -> usize;

    /// The object `backwards_idx + 1` positions before `self`.
    ///
    /// `backwards_idx == 0` is the immediately preceding object.
    fn previous<'a>(&self, backwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }
}
