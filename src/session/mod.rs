//! Caller-side sessions around the engines
//!
//! The engines accept any size and any `i32`. The limits an interactive
//! visualizer needs (operand range, heap capacity, "nothing to extract") are
//! enforced here, before an engine is invoked:
//! - [`HeapSession`]: the single-heap view
//! - [`ComparisonSession`]: the heap vs sorted-array view
//! - [`parse_operand`]: text input to a validated value

pub mod constants;

use crate::compare::{Comparison, ComparisonDriver};
use crate::container::HeapContainer;
use crate::engine::{HeapEngine, TracedEngine};
use crate::errors::SessionError;
use crate::trace::Trace;
use constants::{MAX_HEAP_SIZE, MAX_VALUE, MIN_VALUE, RANDOM_FILL_COUNT, RANDOM_VALUE_LIMIT};
use rand::Rng;

/// Parse and range-check an operand typed by the user
pub fn parse_operand(input: &str) -> Result<i32, SessionError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| SessionError::InvalidOperand {
        input: trimmed.to_string(),
    })?;
    check_range(value)
}

/// Reject values outside `MIN_VALUE..=MAX_VALUE`
pub fn check_range(value: i64) -> Result<i32, SessionError> {
    if value < MIN_VALUE as i64 || value > MAX_VALUE as i64 {
        return Err(SessionError::ValueOutOfRange {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        });
    }
    Ok(value as i32)
}

/// A single heap with capacity and range checks
#[derive(Debug, Clone)]
pub struct HeapSession {
    engine: HeapEngine,
    heap: HeapContainer,
}

impl HeapSession {
    /// Build the starting heap by inserting `values` in order
    pub fn new(values: &[i32]) -> Self {
        let engine = HeapEngine::new();
        HeapSession {
            heap: engine.build(values.iter().copied()),
            engine,
        }
    }

    pub fn heap(&self) -> &HeapContainer {
        &self.heap
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<i32> {
        self.heap.peek()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= MAX_HEAP_SIZE
    }

    pub fn insert(&mut self, value: i32) -> Result<Trace<HeapContainer>, SessionError> {
        check_range(value as i64)?;
        if self.is_full() {
            return Err(SessionError::CapacityExceeded {
                limit: MAX_HEAP_SIZE,
            });
        }

        let outcome = self.engine.insert(&self.heap, value);
        self.heap = outcome.final_container;
        Ok(outcome.trace)
    }

    /// Remove the minimum, returning it with its trace
    pub fn extract_min(&mut self) -> Result<(i32, Trace<HeapContainer>), SessionError> {
        let outcome = self.engine.extract_min(&self.heap);
        let value = outcome.value.ok_or(SessionError::EmptyContainer)?;
        self.heap = outcome.final_container;
        Ok((value, outcome.trace))
    }

    /// Insert up to [`RANDOM_FILL_COUNT`] random values without exceeding
    /// capacity. Returns one trace per insert, in order.
    pub fn random_fill<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Trace<HeapContainer>>, SessionError> {
        let count = RANDOM_FILL_COUNT.min(MAX_HEAP_SIZE.saturating_sub(self.heap.len()));
        if count == 0 {
            return Err(SessionError::CapacityExceeded {
                limit: MAX_HEAP_SIZE,
            });
        }

        (0..count)
            .map(|_| {
                let value = rng.gen_range(0..RANDOM_VALUE_LIMIT);
                self.insert(value)
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.heap = HeapContainer::new();
    }
}

/// The comparison view's driver with operand validation
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    driver: ComparisonDriver,
}

impl ComparisonSession {
    pub fn new(seed: &[i32]) -> Self {
        ComparisonSession {
            driver: ComparisonDriver::new(seed),
        }
    }

    pub fn driver(&self) -> &ComparisonDriver {
        &self.driver
    }

    pub fn insert(&mut self, value: i32) -> Result<Comparison, SessionError> {
        check_range(value as i64)?;
        Ok(self.driver.insert(value))
    }

    pub fn extract_min(&mut self) -> Result<Comparison, SessionError> {
        if self.driver.heap().is_empty() {
            return Err(SessionError::EmptyContainer);
        }
        Ok(self.driver.extract_min())
    }

    pub fn reset(&mut self) {
        self.driver.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::constants::INITIAL_HEAP_VALUES;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand(" 42 "), Ok(42));
        assert_eq!(parse_operand("-999"), Ok(-999));
        assert_eq!(
            parse_operand("abc"),
            Err(SessionError::InvalidOperand {
                input: "abc".to_string()
            })
        );
        assert_eq!(
            parse_operand("1000"),
            Err(SessionError::ValueOutOfRange {
                value: 1000,
                min: MIN_VALUE,
                max: MAX_VALUE
            })
        );
        assert!(parse_operand("").is_err());
    }

    #[test]
    fn test_initial_heap() {
        let session = HeapSession::new(&INITIAL_HEAP_VALUES);
        assert_eq!(session.len(), 9);
        assert_eq!(session.peek(), Some(7));
        assert!(session.heap().is_min_heap());
    }

    #[test]
    fn test_capacity_guard() {
        let values: Vec<i32> = (0..MAX_HEAP_SIZE as i32).collect();
        let mut session = HeapSession::new(&values);
        assert!(session.is_full());
        assert_eq!(
            session.insert(1),
            Err(SessionError::CapacityExceeded {
                limit: MAX_HEAP_SIZE
            })
        );
        assert_eq!(session.len(), MAX_HEAP_SIZE);
    }

    #[test]
    fn test_out_of_range_insert_is_rejected() {
        let mut session = HeapSession::new(&[]);
        assert!(session.insert(5000).is_err());
        assert!(session.is_empty());
    }

    #[test]
    fn test_extract_from_empty_session() {
        let mut session = HeapSession::new(&[]);
        assert_eq!(session.extract_min(), Err(SessionError::EmptyContainer));
    }

    #[test]
    fn test_extract_commits() {
        let mut session = HeapSession::new(&[5, 3, 8]);
        let (value, trace) = session.extract_min().unwrap();
        assert_eq!(value, 3);
        assert_eq!(trace.final_snapshot(), Some(session.heap()));
        assert_eq!(session.peek(), Some(5));
    }

    #[test]
    fn test_random_fill_respects_capacity() {
        let mut rng = StdRng::seed_from_u64(123);
        let values: Vec<i32> = (0..(MAX_HEAP_SIZE as i32 - 2)).collect();
        let mut session = HeapSession::new(&values);

        let traces = session.random_fill(&mut rng).unwrap();
        assert_eq!(traces.len(), 2);
        assert!(session.is_full());
        assert!(session.heap().is_min_heap());
        assert!(session.random_fill(&mut rng).is_err());
    }

    #[test]
    fn test_random_fill_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = HeapSession::new(&[]);
        let traces = session.random_fill(&mut rng).unwrap();

        assert_eq!(traces.len(), RANDOM_FILL_COUNT);
        assert!(session
            .heap()
            .values()
            .iter()
            .all(|v| (0..RANDOM_VALUE_LIMIT).contains(v)));
        assert_eq!(traces.last().unwrap().final_snapshot(), Some(session.heap()));
    }

    #[test]
    fn test_comparison_session_guards_empty_extract() {
        let mut session = ComparisonSession::new(&[1]);
        assert!(session.extract_min().is_ok());
        assert_eq!(session.extract_min(), Err(SessionError::EmptyContainer));
        session.reset();
        assert_eq!(session.driver().heap().len(), 1);
    }
}
