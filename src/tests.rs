#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use strum::VariantArray;

    use crate::builder::{BuilderInvalidReason, TourBuilder};
    use crate::location::Location;
    use crate::moves::Leap;

    fn knight_adjacent(a: Location, b: Location) -> bool {
        Leap::VARIANTS.iter().any(|leap| leap.attempt_from(a) == b)
    }

    #[test]
    fn reference_tour() {
        let tour = TourBuilder::default().build().unwrap().solve().unwrap();

        assert_eq!(tour.path().len(), 25);
        assert_eq!(tour.path()[0], Location(2, 2));
        assert_eq!(tour.path().iter().unique().count(), 25);

        for (from, to) in tour.path().iter().tuple_windows() {
            assert!(knight_adjacent(*from, *to), "{:?} -> {:?} is not a knight's leap", from, to);
        }
    }

    #[test]
    fn snapshot_and_path_agree() {
        let tour = TourBuilder::default().build().unwrap().solve().unwrap();

        for (index, location) in tour.path().iter().enumerate() {
            assert_eq!(tour.step_at(*location).get(), index + 1);
        }

        // every cell of the grid is on the path
        assert_eq!(tour.steps().len(), tour.path().len());
    }

    #[test]
    fn identical_configurations_find_identical_tours() {
        let first = TourBuilder::default().build().unwrap().solve().unwrap();
        let second = TourBuilder::default().build().unwrap().solve().unwrap();

        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn single_cell_board_tours_trivially() {
        let tour = TourBuilder::with_dims(NonZero::new(1).unwrap())
            .build()
            .unwrap()
            .solve()
            .unwrap();

        assert_eq!(tour.path(), &[Location(0, 0)]);
        assert_eq!(format!("{}", tour), "1\n");
    }

    #[test]
    fn two_by_two_exhausts_at_the_first_step() {
        // no leap stays on a 2×2 board, so every candidate at step 1 fails
        assert!(TourBuilder::with_dims(NonZero::new(2).unwrap()).build().unwrap().solve().is_none());
    }

    #[test]
    fn three_by_three_corner_start_has_no_tour() {
        // the center cell is unreachable by any leap on a 3×3 board
        let board = TourBuilder::with_dims(NonZero::new(3).unwrap()).build().unwrap();

        assert!(board.solve().is_none());
    }

    #[test]
    fn exhaustion_is_idempotent() {
        for _ in 0..2 {
            let outcome = TourBuilder::with_dims(NonZero::new(2).unwrap()).build().unwrap().solve();
            assert!(outcome.is_none());
        }
    }

    #[test]
    fn rejects_start_out_of_bounds() {
        let mut builder = TourBuilder::with_dims(NonZero::new(4).unwrap());
        builder.start_at(Location(4, 0));

        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::StartOutOfBounds]));
        assert!(builder.build().is_err());
    }

    #[test]
    fn rejects_junction_out_of_range() {
        let mut too_small = TourBuilder::with_dims(NonZero::new(5).unwrap());
        too_small.junction_at(0);
        assert_eq!(too_small.is_valid(), Some(&vec![BuilderInvalidReason::JunctionOutOfRange]));

        let mut too_large = TourBuilder::with_dims(NonZero::new(5).unwrap());
        too_large.junction_at(26);
        assert_eq!(too_large.is_valid(), Some(&vec![BuilderInvalidReason::JunctionOutOfRange]));
    }

    #[test]
    fn rejects_priority_table_with_repeats() {
        let mut builder = TourBuilder::default();
        builder.opening_order([Leap::Nne; 8]);

        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::OrderingNotPermutation]));
    }

    #[test]
    fn invalid_builder_ignores_later_configuration() {
        let mut builder = TourBuilder::with_dims(NonZero::new(4).unwrap());
        builder.start_at(Location(9, 9)).junction_at(0).cornering_order([Leap::Ssw; 8]);

        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::StartOutOfBounds]));
    }

    #[test]
    fn junction_boundaries_are_accepted() {
        let mut earliest = TourBuilder::with_dims(NonZero::new(5).unwrap());
        earliest.junction_at(1);
        assert!(earliest.is_valid().is_none());

        let mut latest = TourBuilder::with_dims(NonZero::new(5).unwrap());
        latest.junction_at(25);
        assert!(latest.is_valid().is_none());
    }
}
