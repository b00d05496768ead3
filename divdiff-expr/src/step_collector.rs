/// A type that records the rewrite steps taken by an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step. Use that
/// when only the final expression matters; use a `Vec` to keep the trace, for example to show a
/// user which rewrites the simplifier applied.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
