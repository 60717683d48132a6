use crate::dice::{End, Mode, RollSpec, Selection};
use crate::roll;
use itertools::{Either, Itertools};

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Roll every die of `spec` and split them into kept and dropped
    pub(crate) fn eval<S: roll::Source>(
        spec: &RollSpec,
        notation: String,
        source: &mut S,
    ) -> roll::Result {
        let rolls = Self::roll(spec.count(), spec.sides(), source);
        let (kept, dropped) = match spec.selection() {
            Some(selection) => Self::select(rolls, selection),
            None => (rolls, Vec::new()),
        };
        roll::Result::new(kept, dropped, notation, *spec)
    }

    /// Partition `rolls` into (kept, dropped), both in roll order
    pub(crate) fn select(rolls: Vec<u64>, selection: &Selection) -> (Vec<u64>, Vec<u64>) {
        let mut sorted = rolls.clone();
        sorted.sort_unstable();
        let amount = usize::try_from(selection.count())
            .unwrap_or(usize::MAX)
            .min(sorted.len());
        let picked = match selection.end() {
            End::Lowest => &sorted[..amount],
            End::Highest => &sorted[sorted.len() - amount..],
        };
        // values repeat, so each pick claims the first unclaimed die showing it
        let mut unclaimed = picked.iter().copied().counts();
        let (selected, unselected): (Vec<u64>, Vec<u64>) =
            rolls.into_iter().partition_map(|roll| match unclaimed.get_mut(&roll) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    Either::Left(roll)
                }
                _ => Either::Right(roll),
            });
        tracing::trace!(?selected, ?unselected, %selection, "applied selection");
        match selection.mode() {
            Mode::Keep => (selected, unselected),
            Mode::Drop => (unselected, selected),
        }
    }

    pub(crate) fn roll<S: roll::Source>(amount: u64, sides: u64, source: &mut S) -> Vec<u64> {
        (0..amount).map(|_| source.throw(sides)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_highest_keeps_roll_order() {
        let selection = Selection::keep_highest(2).unwrap();
        let (kept, dropped) = Evaluator::select(vec![6, 1, 4, 5], &selection);
        assert_eq!(vec![6, 5], kept);
        assert_eq!(vec![1, 4], dropped);
    }

    #[test]
    fn drop_lowest_with_duplicates_drops_the_first_one() {
        let selection = Selection::drop_lowest(1).unwrap();
        let (kept, dropped) = Evaluator::select(vec![3, 2, 5, 2], &selection);
        assert_eq!(vec![3, 5, 2], kept);
        assert_eq!(vec![2], dropped);
    }

    #[test]
    fn keep_lowest_with_duplicates() {
        let selection = Selection::keep_lowest(2).unwrap();
        let (kept, dropped) = Evaluator::select(vec![4, 4, 1, 4], &selection);
        assert_eq!(vec![4, 1], kept);
        assert_eq!(vec![4, 4], dropped);
    }

    #[test]
    fn claims_first_occurrences_of_each_picked_value() {
        let selection = Selection::keep_lowest(4).unwrap();
        let (kept, dropped) = Evaluator::select(vec![1, 2, 1, 2, 1, 2], &selection);
        assert_eq!(vec![1, 2, 1, 1], kept);
        assert_eq!(vec![2, 2], dropped);

        let selection = Selection::drop_highest(2).unwrap();
        let (kept, dropped) = Evaluator::select(vec![9, 3, 9, 9, 3], &selection);
        assert_eq!(vec![3, 9, 3], kept);
        assert_eq!(vec![9, 9], dropped);
    }

    #[test]
    fn drop_highest() {
        let selection = Selection::drop_highest(1).unwrap();
        let (kept, dropped) = Evaluator::select(vec![20, 7], &selection);
        assert_eq!(vec![7], kept);
        assert_eq!(vec![20], dropped);
    }

    #[test]
    fn selecting_more_than_rolled_is_clamped() {
        let keep = Selection::keep_highest(5).unwrap();
        let (kept, dropped) = Evaluator::select(vec![2, 3], &keep);
        assert_eq!(vec![2, 3], kept);
        assert!(dropped.is_empty());

        let drop = Selection::drop_lowest(5).unwrap();
        let (kept, dropped) = Evaluator::select(vec![2, 3], &drop);
        assert!(kept.is_empty());
        assert_eq!(vec![2, 3], dropped);
    }
}
