//! CounterStore に保存したカウンタでシーケンスを発行する SequenceGenerator の標準実装

use crate::domain::{Sequence, COUNTER_KEY, INITIAL_COUNTER};
use crate::ports::outbound::{CounterStore, SequenceGenerator};
use common::error::Error;
use std::sync::Arc;

/// CounterStore の `secuenciaCounter` キーを読み書きする実装
///
/// 状態はストアにだけ持つ。発行のたびに読み直す。
pub struct StdSequenceGenerator {
    store: Arc<dyn CounterStore>,
}

impl StdSequenceGenerator {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }
}

impl SequenceGenerator for StdSequenceGenerator {
    fn load(&self) -> Result<u64, Error> {
        match self.store.get(COUNTER_KEY)? {
            None => Ok(INITIAL_COUNTER),
            Some(text) => text.trim().parse::<u64>().map_err(|_| {
                Error::persistence(format!("stored {} is not a number: {:?}", COUNTER_KEY, text))
            }),
        }
    }

    fn persist(&self, counter: u64) -> Result<(), Error> {
        self.store.set(COUNTER_KEY, &counter.to_string())
    }

    fn next(&self) -> Result<Sequence, Error> {
        let current = self.load()?;
        let sequence = Sequence::from_counter(current)?;
        self.persist(current + 1)?;
        Ok(sequence)
    }
}
