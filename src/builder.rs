use crate::utils::default_block_size;
use crate::{ChainEngine, ChainProblem};

pub struct ChainEngineBuilder<P: ChainProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: ChainProblem> ChainEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }
    /// Like [`with_block_size`](Self::with_block_size), leaving the heuristic
    /// in place for `None`.
    pub fn with_optional_block_size(mut self, block_size: Option<usize>) -> Self {
        self.block_size = block_size;
        self
    }
    pub fn build(self) -> ChainEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        ChainEngine::with_block_size(self.problem, b)
    }
}

#[cfg(test)]
mod tests {
    use super::ChainEngineBuilder;
    use crate::problems::divisible::DivisibleChain;

    #[test]
    fn heuristic_block_size_by_default() {
        let engine = ChainEngineBuilder::new(DivisibleChain::new(&[1; 10])).build();
        assert_eq!(engine.block_size(), 4);
    }

    #[test]
    fn explicit_block_size_is_kept() {
        let engine = ChainEngineBuilder::new(DivisibleChain::new(&[1, 2, 4]))
            .with_block_size(7)
            .build();
        assert_eq!(engine.block_size(), 7);
        let engine = ChainEngineBuilder::new(DivisibleChain::new(&[1, 2, 4]))
            .with_optional_block_size(None)
            .build();
        assert_eq!(engine.block_size(), 2);
    }
}
