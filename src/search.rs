use std::collections::HashMap;

use log::{debug, trace};

use crate::{BucketFrontier, CostGrid, Direction, Error, Move, MovePolicy, Position};

/// Search node: where we are, which way we were going and how far we've gone that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pos: Position,
    heading: Option<Direction>,
    run_len: usize,
}

impl SearchState {
    pub fn new(pos: Position, heading: Option<Direction>, run_len: usize) -> Self {
        Self {
            pos,
            heading,
            run_len,
        }
    }

    pub fn initial(pos: Position) -> Self {
        Self::new(pos, None, 0)
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn run_len(&self) -> usize {
        self.run_len
    }
}

/// One move of a route, `steps` cells towards `dir` ending at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub dir: Direction,
    pub steps: usize,
    pub to: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    start: Position,
    cost: usize,
    legs: Vec<Leg>,
}

impl Route {
    fn trace_back(
        end_state: SearchState,
        cost: usize,
        src_of_state: &HashMap<SearchState, Option<SearchState>>,
    ) -> Self {
        let mut legs = Vec::new();
        let mut cur_state = end_state;
        while let Some(Some(src_state)) = src_of_state.get(&cur_state) {
            if let Some(dir) = cur_state.heading {
                legs.push(Leg {
                    dir,
                    steps: src_state.pos.x().abs_diff(cur_state.pos.x())
                        + src_state.pos.y().abs_diff(cur_state.pos.y()),
                    to: cur_state.pos,
                });
            }
            cur_state = *src_state;
        }
        legs.reverse();

        Self {
            start: cur_state.pos,
            cost,
            legs,
        }
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn end(&self) -> &Position {
        self.legs.last().map(|leg| &leg.to).unwrap_or(&self.start)
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Every cell on the route in visiting order, starting with the start cell.
    pub fn cells(&self) -> Vec<Position> {
        let mut cells = vec![self.start];
        for leg in &self.legs {
            let from = *cells.last().unwrap_or(&self.start);
            cells.extend((1..=leg.steps).flat_map(|steps| from.advance(leg.dir, steps)));
        }

        cells
    }

    /// Grid text with every entered cell replaced by the arrow of the move entering it.
    pub fn render(&self, grid: &CostGrid) -> String {
        let mut rows = (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| {
                        grid.get(&Position::new(x, y))
                            .and_then(|cost| u32::try_from(cost).ok())
                            .and_then(|cost| char::from_digit(cost, 10))
                            .unwrap_or('#')
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let mut from = self.start;
        for leg in &self.legs {
            for pos in (1..=leg.steps).flat_map(|steps| from.advance(leg.dir, steps)) {
                if let Some(c) = rows.get_mut(pos.y()).and_then(|row| row.get_mut(pos.x())) {
                    *c = leg.dir.arrow();
                }
            }
            from = leg.to;
        }

        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl CostGrid {
    pub fn least_cost<P: MovePolicy + ?Sized>(
        &self,
        from: &Position,
        to: &Position,
        policy: &P,
    ) -> Result<usize, Error> {
        self.least_cost_route(from, to, policy).map(|route| route.cost())
    }

    /// Uniform-cost search over (position, heading, run length) states.
    ///
    /// A state is settled the first time it's popped; later, more expensive copies of it
    /// are dropped on pop. The first settled state standing on `to` ends the search,
    /// whatever its heading and run length.
    pub fn least_cost_route<P: MovePolicy + ?Sized>(
        &self,
        from: &Position,
        to: &Position,
        policy: &P,
    ) -> Result<Route, Error> {
        for pos in [from, to] {
            if !self.is_inside(pos) {
                return Err(Error::OutOfBounds(*pos));
            }
        }

        debug!(
            "Searching least cost route from {} to {} in {}x{} grid with {:?}.",
            from,
            to,
            self.width(),
            self.height(),
            policy
        );
        let init_state = SearchState::initial(*from);
        let mut frontier = BucketFrontier::new();
        frontier.push(0, (init_state, None));
        let mut queued_costs = HashMap::from([(init_state, 0)]);
        let mut src_of_state: HashMap<SearchState, Option<SearchState>> = HashMap::new();
        let mut last_cost = 0;
        while let Some((cur_cost, (cur_state, src_state))) = frontier.pop() {
            if src_of_state.contains_key(&cur_state) {
                continue;
            }

            debug_assert!(
                cur_cost >= last_cost,
                "cur_cost({}) < last_cost({})",
                cur_cost,
                last_cost
            );
            last_cost = cur_cost;
            src_of_state.insert(cur_state, src_state);
            trace!("Settled {:?} with cost {}.", cur_state, cur_cost);

            if cur_state.pos == *to {
                debug!(
                    "Reached {} with cost {} after settling {} state(s).",
                    to,
                    cur_cost,
                    src_of_state.len()
                );
                return Ok(Route::trace_back(cur_state, cur_cost, &src_of_state));
            }

            for next_move in policy.moves(cur_state.heading, cur_state.run_len) {
                let landings = self.ray(&cur_state.pos, cur_cost, &next_move);
                for (steps, next_pos, next_cost) in landings {
                    let next_state = SearchState::new(
                        next_pos,
                        Some(next_move.dir),
                        next_move.run_len_after(steps),
                    );
                    if src_of_state.contains_key(&next_state) {
                        continue;
                    }

                    if queued_costs
                        .get(&next_state)
                        .is_some_and(|cost| *cost <= next_cost)
                    {
                        continue;
                    }

                    queued_costs.insert(next_state, next_cost);
                    frontier.push(next_cost, (next_state, Some(cur_state)));
                }
            }
        }

        debug!(
            "Frontier exhausted after settling {} state(s), {} is unreachable.",
            src_of_state.len(),
            to
        );
        Err(Error::NoPathFound(*from, *to))
    }

    /// Landing spots of `next_move` as (steps, position, cumulative cost), walking one cell at a
    /// time from `from`. Stops at the grid edge or once the cost no longer fits in `usize`.
    fn ray(
        &self,
        from: &Position,
        from_cost: usize,
        next_move: &Move,
    ) -> Vec<(usize, Position, usize)> {
        let mut landings = Vec::new();
        let mut pos = *from;
        let mut cost = from_cost;
        for steps in 1..=next_move.max_steps {
            let Some(next_pos) = pos.neighbor(next_move.dir) else {
                break;
            };
            let Some(next_cost) = self
                .get(&next_pos)
                .and_then(|cell_cost| cost.checked_add(cell_cost))
            else {
                break;
            };

            pos = next_pos;
            cost = next_cost;
            if steps >= next_move.min_steps {
                landings.push((steps, pos, cost));
            }
        }

        landings
    }
}
