use divchain::{
    builder::ChainEngineBuilder, problems::divisible::DivisibleChain, ChainEngine, OrderingPolicy,
    SubsetFinder,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn engine_result_independent_of_block_size(
        input in prop::collection::vec(1i64..120, 0..60),
        block in 1usize..16,
    ) {
        let heuristic = ChainEngine::new(DivisibleChain::new(&input)).run();
        let explicit = ChainEngineBuilder::new(DivisibleChain::new(&input))
            .with_block_size(block)
            .build()
            .run();
        prop_assert_eq!(heuristic, explicit);
    }

    #[test]
    fn finder_result_independent_of_block_size(
        input in prop::collection::vec(1i64..120, 0..60),
        block in 1usize..16,
    ) {
        for ordering in [OrderingPolicy::InputReversed, OrderingPolicy::Chain, OrderingPolicy::Ascending] {
            let finder = SubsetFinder::new().with_ordering(ordering);
            prop_assert_eq!(finder.find(&input), finder.with_block_size(block).find(&input));
        }
    }
}
