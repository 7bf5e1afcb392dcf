//! One module per benchmarked quicksort configuration.

macro_rules! quicksort_impl {
    ($module:ident, $pivot:ident, $threshold:expr) => {
        pub mod $module {
            use std::cmp::Ordering;

            use crate::quicksort::{self, PivotStrategy, QuicksortConfig};

            const CONFIG: QuicksortConfig = QuicksortConfig {
                pivot: PivotStrategy::$pivot,
                insertion_threshold: $threshold,
            };

            sort_impl!(format!("quicksort_{}_unstable", stringify!($module)));

            #[inline]
            pub fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                quicksort::sort(v, CONFIG);
            }

            #[inline]
            pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                quicksort::sort_by(v, CONFIG, |a, b| compare(a, b) == Ordering::Less);
            }
        }
    };
}

quicksort_impl!(first_t1, First, 1);
quicksort_impl!(first_t2, First, 2);
quicksort_impl!(first_t50, First, 50);
quicksort_impl!(first_t100, First, 100);
quicksort_impl!(last_t1, Last, 1);
quicksort_impl!(median_of_three_t1, MedianOfThree, 1);
quicksort_impl!(median_of_three_t2, MedianOfThree, 2);
