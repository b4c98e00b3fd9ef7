use proptest::prelude::*;

use plotsync::core::{all_data, first_n_data, fit_to_screen_data, index_range_data, last_n_data};

fn dataset() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec(-1.0e6_f64..1.0e6, 1..400).prop_map(|y| {
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        (x, y)
    })
}

proptest! {
    #[test]
    fn no_policy_ever_truncates_the_data((x, y) in dataset(), n in 1usize..500) {
        for result in [
            all_data(&x, &y),
            fit_to_screen_data(&x, &y, 100, 2),
            last_n_data(&x, &y, n),
            first_n_data(&x, &y, n),
            index_range_data(&x, &y, 0, x.len() - 1),
        ] {
            prop_assert_eq!(&result.x, &x);
            prop_assert_eq!(&result.y, &y);
            prop_assert_eq!(result.retained_count, x.len());
        }
    }

    #[test]
    fn last_n_view_range_endpoints((x, y) in dataset(), n in 1usize..500) {
        let result = last_n_data(&x, &y, n);
        let range = result.view_range.expect("non-empty input always yields a window");
        let count = n.min(x.len());
        prop_assert_eq!(range.max, x[x.len() - 1]);
        prop_assert_eq!(range.min, x[x.len() - count]);
    }

    #[test]
    fn view_range_is_always_within_the_data((x, y) in dataset(), n in 1usize..500) {
        for result in [
            last_n_data(&x, &y, n),
            first_n_data(&x, &y, n),
            fit_to_screen_data(&x, &y, 10, 1),
        ] {
            if let Some(range) = result.view_range {
                prop_assert!(range.min >= x[0]);
                prop_assert!(range.max <= x[x.len() - 1]);
                prop_assert!(range.min <= range.max);
            }
        }
    }
}
