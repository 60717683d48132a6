use crate::dice::{End, Mode, RollSpec, Selection};
use proptest::prelude::*;

pub(crate) fn selection_strategy(max_count: u64) -> impl Strategy<Value = Option<Selection>> {
    prop_oneof![
        Just(None),
        (any::<bool>(), any::<bool>(), 1..=max_count).prop_map(|(keep, highest, count)| {
            let mode = if keep { Mode::Keep } else { Mode::Drop };
            let end = if highest { End::Highest } else { End::Lowest };
            Selection::new(mode, end, count).ok()
        }),
    ]
}

pub(crate) fn spec_strategy() -> impl Strategy<Value = RollSpec> {
    (1..=40u64, 2..=120u64).prop_flat_map(|(count, sides)| {
        selection_strategy(count + 2).prop_map(move |selection| {
            let spec = RollSpec::new(count, sides).unwrap();
            match selection {
                Some(selection) => spec.with_selection(selection),
                None => spec,
            }
        })
    })
}
