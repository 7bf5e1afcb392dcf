/// Common interface of every instrumented sort variant, so that the same suite and benchmarks can
/// be instantiated for each of them.
///
/// Unlike `slice::sort` the implementations keep traces of the values they compare, which is why
/// elements have to be `Clone`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
