use std::collections::HashMap;

/// Priority queue for small integer costs, entries are grouped in one bucket per exact cost.
///
/// Popping from the cheapest bucket is O(1), the minimum is only recomputed (by scanning the
/// bucket keys) once that bucket runs empty. Order among entries of the same cost is unspecified.
#[derive(Debug)]
pub struct BucketFrontier<T> {
    buckets: HashMap<usize, Vec<T>>,
    min_cost: Option<usize>,
    len: usize,
}

impl<T> Default for BucketFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BucketFrontier<T> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            min_cost: None,
            len: 0,
        }
    }

    pub fn push(&mut self, cost: usize, entry: T) {
        self.buckets.entry(cost).or_default().push(entry);
        if self.min_cost.map_or(true, |min_cost| cost < min_cost) {
            self.min_cost = Some(cost);
        }
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<(usize, T)> {
        let min_cost = self.min_cost?;
        let bucket = self.buckets.get_mut(&min_cost)?;
        let entry = bucket.pop()?;
        if bucket.is_empty() {
            self.buckets.remove(&min_cost);
            self.min_cost = self.buckets.keys().min().copied();
        }
        self.len -= 1;

        Some((min_cost, entry))
    }

    pub fn min_cost(&self) -> Option<usize> {
        self.min_cost
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_cheapest_first() {
        let mut frontier = BucketFrontier::new();
        for (cost, name) in [(7, "g"), (2, "b"), (9, "i"), (2, "bb"), (0, "a")] {
            frontier.push(cost, name);
        }
        assert_eq!(frontier.len(), 5);
        assert_eq!(frontier.min_cost(), Some(0));

        let costs = std::iter::from_fn(|| frontier.pop())
            .map(|(cost, _)| cost)
            .collect::<Vec<_>>();
        assert_eq!(costs, vec![0, 2, 2, 7, 9]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.min_cost(), None);
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn pops_stay_ordered_while_pushing_during_expansion() {
        // Mimics a search: every popped entry pushes successors at cost + [0, 9].
        let mut frontier = BucketFrontier::new();
        frontier.push(0, 0usize);
        let mut last_cost = 0;
        let mut popped_n = 0;
        while let Some((cost, id)) = frontier.pop() {
            assert!(cost >= last_cost, "popped {} after {}", cost, last_cost);
            last_cost = cost;
            popped_n += 1;
            if id < 2000 {
                for delta in [(id * 7) % 10, (id * 3) % 10] {
                    frontier.push(cost + delta, id * 2 + 1 + delta % 2);
                }
            }
        }
        assert!(popped_n > 1);
    }

    #[test]
    fn push_lowers_tracked_minimum() {
        let mut frontier = BucketFrontier::new();
        frontier.push(5, 'x');
        assert_eq!(frontier.min_cost(), Some(5));
        frontier.push(3, 'y');
        assert_eq!(frontier.min_cost(), Some(3));
        frontier.push(4, 'z');
        assert_eq!(frontier.min_cost(), Some(3));
        assert_eq!(frontier.pop(), Some((3, 'y')));
        assert_eq!(frontier.min_cost(), Some(4));
    }
}
