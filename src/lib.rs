//! Instrumented natural merge sort over a doubly linked list and iterative quicksort, together with
//! the report driver that benchmarks them against each other.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod input;
pub mod linked_list;
pub mod natural_merge;
pub mod quicksort;
pub mod report;
pub mod run;
pub mod stats;
pub mod timing;

// Slice adapters implementing `sort_test_tools::Sort`, for the test suite and benchmarks.
pub mod stable;
pub mod unstable;

pub use error::{Error, Result};
