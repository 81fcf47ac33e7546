use std::{fmt::Display, str::FromStr};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }
}

/// Cell coordinate, `x` is the column and `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let comma_pos = value.find(',').ok_or(Error::NoCommaInPositionText)?;
        let x_text = value[..comma_pos].trim();
        let x = x_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCoordinateText(x_text.to_string()))?;
        let y_text = value[(comma_pos + 1)..].trim();
        let y = y_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCoordinateText(y_text.to_string()))?;

        Ok(Position::new(x, y))
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        self.advance(dir, 1)
    }

    /// Position `steps` cells away in `dir`, `None` if it would leave the first quadrant.
    pub fn advance(&self, dir: Direction, steps: usize) -> Option<Self> {
        match dir {
            Direction::North => self.y.checked_sub(steps).map(|y| Self::new(self.x, y)),
            Direction::East => self.x.checked_add(steps).map(|x| Self::new(x, self.y)),
            Direction::South => self.y.checked_add(steps).map(|y| Self::new(self.x, y)),
            Direction::West => self.x.checked_sub(steps).map(|x| Self::new(x, self.y)),
        }
    }
}

/// Immutable rectangular matrix of per-cell move costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    costs: Vec<usize>,
    width: usize,
    height: usize,
}

impl FromStr for CostGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

impl CostGrid {
    pub fn new(width: usize, height: usize, costs: Vec<usize>) -> Result<Self, Error> {
        let expect_n = width * height;
        if costs.len() != expect_n {
            return Err(Error::CostCountMismatch(expect_n, costs.len()));
        }

        Ok(Self {
            costs,
            width,
            height,
        })
    }

    /// Builds a grid from rows of digits, blank lines at the end are ignored.
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Result<Self, Error> {
        let mut rows = lines.into_iter().map(str::trim_end).collect::<Vec<_>>();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let mut costs = Vec::new();
        let mut width = None;
        for row in &rows {
            let this_col_n = row.chars().count();
            let expect_col_n = *width.get_or_insert(this_col_n);
            if expect_col_n != this_col_n {
                return Err(Error::InconsistentRow(expect_col_n, this_col_n));
            }

            for c in row.chars() {
                let cost = c.to_digit(10).ok_or(Error::InvalidCharForCost(c))?;
                costs.push(cost as usize);
            }
        }

        Self::new(width.unwrap_or(0), rows.len(), costs)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cost(&self, pos: &Position) -> Result<usize, Error> {
        self.get(pos).ok_or(Error::OutOfBounds(*pos))
    }

    pub fn get(&self, pos: &Position) -> Option<usize> {
        self.pos_to_ind(pos).map(|ind| self.costs[ind])
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn bottom_right(&self) -> Option<Position> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(Position::new(self.width - 1, self.height - 1))
        }
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.y * self.width + pos.x)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_lookup_is_bounds_checked() {
        let grid = "123\n456\n".parse::<CostGrid>().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cost(&Position::new(2, 1)), Ok(6));
        assert_eq!(grid.cost(&Position::new(0, 1)), Ok(4));
        assert_eq!(
            grid.cost(&Position::new(3, 0)),
            Err(Error::OutOfBounds(Position::new(3, 0)))
        );
        assert_eq!(grid.get(&Position::new(0, 2)), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            "123\n45\n".parse::<CostGrid>(),
            Err(Error::InconsistentRow(3, 2))
        );
        assert_eq!(
            "12\n\n34\n".parse::<CostGrid>(),
            Err(Error::InconsistentRow(2, 0))
        );
    }

    #[test]
    fn non_digit_cells_are_rejected() {
        assert_eq!(
            "12\n3x\n".parse::<CostGrid>(),
            Err(Error::InvalidCharForCost('x'))
        );
        assert_eq!(
            "1-2\n".parse::<CostGrid>(),
            Err(Error::InvalidCharForCost('-'))
        );
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        let grid = CostGrid::from_lines(["19", "91", "", ""]).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.bottom_right(), Some(Position::new(1, 1)));
    }

    #[test]
    fn programmatic_grid_accepts_large_costs() {
        let grid = CostGrid::new(2, 1, vec![0, 1_000_000]).unwrap();
        assert_eq!(grid.cost(&Position::new(1, 0)), Ok(1_000_000));
        assert_eq!(
            CostGrid::new(2, 2, vec![1, 2, 3]),
            Err(Error::CostCountMismatch(4, 3))
        );
    }

    #[test]
    fn empty_grid_has_no_corner() {
        let grid = CostGrid::from_lines(Vec::<&str>::new()).unwrap();
        assert_eq!(grid.bottom_right(), None);
        assert!(!grid.is_inside(&Position::new(0, 0)));
    }

    #[test]
    fn advance_stays_in_first_quadrant() {
        let pos = Position::new(1, 2);
        assert_eq!(pos.advance(Direction::North, 2), Some(Position::new(1, 0)));
        assert_eq!(pos.advance(Direction::North, 3), None);
        assert_eq!(pos.advance(Direction::West, 2), None);
        assert_eq!(pos.neighbor(Direction::East), Some(Position::new(2, 2)));
        assert_eq!(pos.advance(Direction::South, 4), Some(Position::new(1, 6)));
    }

    #[test]
    fn position_parses_from_text() {
        assert_eq!("3,4".parse::<Position>(), Ok(Position::new(3, 4)));
        assert_eq!(" 12, 0".parse::<Position>(), Ok(Position::new(12, 0)));
        assert_eq!("34".parse::<Position>(), Err(Error::NoCommaInPositionText));
        assert_eq!(
            "a,4".parse::<Position>(),
            Err(Error::InvalidCoordinateText("a".to_string()))
        );
    }
}
