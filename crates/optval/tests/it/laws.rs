//! Algebraic laws over generated payloads.

use optval::{Opt, absent, present};
use proptest::prelude::*;

fn any_opt() -> impl Strategy<Value = Opt<i64>> {
    proptest::option::of(any::<i64>()).prop_map(Opt::from)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..Default::default()
    })]

    #[test]
    fn flags_are_negations(o in any_opt()) {
        prop_assert_eq!(o.is_defined(), !o.is_empty());
    }

    #[test]
    fn map_identity(o in any_opt()) {
        prop_assert_eq!(o.map(|x| x), o);
    }

    #[test]
    fn map_composition(o in any_opt()) {
        let f = |x: i64| x.wrapping_mul(3);
        let g = |x: i64| x.to_string();
        prop_assert_eq!(o.map(f).map(g), o.map(|x| g(f(x))));
    }

    #[test]
    fn flat_map_left_identity(v: i64) {
        let f = |x: i64| if x % 2 == 0 { present(x / 2) } else { absent() };
        prop_assert_eq!(present(v).flat_map(f), f(v));
    }

    #[test]
    fn flat_map_right_identity(o in any_opt()) {
        prop_assert_eq!(o.flat_map(present), o);
    }

    #[test]
    fn flat_map_associativity(o in any_opt()) {
        let f = |x: i64| if x > 0 { present(x.wrapping_sub(1)) } else { absent() };
        let g = |x: i64| if x % 3 != 0 { present(x) } else { absent() };
        prop_assert_eq!(o.flat_map(f).flat_map(g), o.flat_map(|x| f(x).flat_map(g)));
    }

    #[test]
    fn filter_matches_predicate(v: i64) {
        let expected = if v >= 0 { present(v) } else { absent() };
        prop_assert_eq!(present(v).filter(|n| *n >= 0), expected);
        prop_assert_eq!(absent::<i64>().filter(|_| true), absent());
    }

    #[test]
    fn fallbacks_resolve(v: i64, fallback: i64) {
        prop_assert_eq!(present(v).get_or_else(|| fallback), v);
        prop_assert_eq!(absent().get_or_else(|| fallback), fallback);
        prop_assert_eq!(present(v).or_else(|| present(fallback)), present(v));
        prop_assert_eq!(absent().or_else(|| present(fallback)), present(fallback));
    }

    #[test]
    fn option_round_trip(o in any_opt()) {
        prop_assert_eq!(Opt::from(o.into_option()), o);
        prop_assert_eq!(o.get_or_null(), o.get().ok());
    }

    #[test]
    fn display_of_present_is_json(v: i64) {
        prop_assert_eq!(present(v).to_display_string(), format!("Present({v})"));
    }
}
